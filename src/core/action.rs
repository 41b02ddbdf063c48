//! # Actions
//!
//! Everything that can happen in Biblio becomes an `Action`.
//! User submits the search form? That's `Action::Search(criteria)`.
//! User presses the show-more key? That's `Action::LoadMore`.
//!
//! The `update()` function takes the current state and an action,
//! then returns an `Effect` for the adapter. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: `assert_eq!(update(&mut state, action), expected)`.
//! And debuggable: log every action, replay the exact session.

use log::debug;

use crate::core::catalog::{filter_books, Criteria};
use crate::core::state::{App, Overlay};
use crate::core::theme::Theme;

/// Externally triggered state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Submit the search form: refilter, reset pagination, close the overlay.
    Search(Criteria),
    /// Reveal the next page of matches. No-op when nothing remains.
    LoadMore,
    /// Open the detail overlay for a book id. Unknown ids are silently ignored.
    SelectBook(String),
    CloseDetail,
    OpenSearch,
    CloseSearch,
    OpenSettings,
    CloseSettings,
    /// Apply a theme token. Idempotent; also closes the settings overlay.
    SetTheme(Theme),
    Quit,
}

/// How the adapter should refresh the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Rebuild from the top: reset scroll and selection.
    Replace,
    /// The previous slice is unchanged; new entries were appended.
    Append,
}

/// Instruction returned to the event loop. The reducer never touches
/// adapter-owned state (scroll offsets, input buffers) directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    RenderList(RenderMode),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Search(criteria) => {
            app.matches = filter_books(&app.catalog, &criteria);
            app.page = 1;
            app.criteria = criteria;
            app.overlay = Overlay::None;
            app.status_message = match app.matches.len() {
                0 => "No matches".to_string(),
                1 => "1 match".to_string(),
                n => format!("{n} matches"),
            };
            Effect::RenderList(RenderMode::Replace)
        }
        Action::LoadMore => {
            if app.remaining() == 0 {
                return Effect::None;
            }
            app.page += 1;
            Effect::RenderList(RenderMode::Append)
        }
        Action::SelectBook(id) => {
            match app.catalog.find_book(&id) {
                Some((index, _)) => app.overlay = Overlay::Detail(index),
                // Stays silent toward the user; the log keeps it observable.
                None => debug!("SelectBook ignored: no book with id {}", id),
            }
            Effect::None
        }
        Action::CloseDetail | Action::CloseSearch | Action::CloseSettings => {
            app.overlay = Overlay::None;
            Effect::None
        }
        Action::OpenSearch => {
            app.overlay = Overlay::Search;
            Effect::None
        }
        Action::OpenSettings => {
            app.overlay = Overlay::Settings;
            Effect::None
        }
        Action::SetTheme(theme) => {
            app.theme = theme;
            if app.overlay == Overlay::Settings {
                app.overlay = Overlay::None;
            }
            app.status_message = format!("Theme: {}", theme.label());
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
