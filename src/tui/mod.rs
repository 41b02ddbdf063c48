//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (web, etc.)
//! in the future if needed.
//!
//! ## Redraw Strategy
//!
//! Everything is synchronous and nothing animates, so the loop sleeps up to
//! 500ms in `poll` and only redraws after an event arrived. Pending events
//! are drained before the next draw so a held-down key doesn't queue a
//! render per keypress.
//!
//! ## Overlay Routing
//!
//! `App::overlay` decides who sees an event: an open overlay consumes
//! everything, otherwise the browse-mode key map applies. The presentation
//! state of an overlay (form fields, list cursor) lives here in `TuiState`
//! and is created/dropped as the corresponding overlay opens and closes.

mod component;
mod components;
mod event;
mod ui;

pub use component::{Component, EventHandler};
pub use components::{
    BookListState, SearchEvent, SearchPanelState, SettingsEvent, SettingsPanelState,
};

use log::{debug, info};

use crate::core::action::{Action, Effect, RenderMode, update};
use crate::core::state::{App, Overlay};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub book_list: BookListState,
    /// Search overlay form state (Some while the overlay is open)
    pub search_panel: Option<SearchPanelState>,
    /// Settings overlay cursor state (Some while the overlay is open)
    pub settings_panel: Option<SettingsPanelState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            book_list: BookListState::new(),
            search_panel: None,
            settings_panel: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Feed an action through the reducer and apply its effect to the
/// presentation state. Returns true when the app should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    debug!("Dispatching: {:?}", action);
    let previous_visible = app.visible_len();
    let effect = update(app, action);
    match effect {
        Effect::Quit => return true,
        Effect::RenderList(RenderMode::Replace) => tui.book_list.reset(),
        Effect::RenderList(RenderMode::Append) => {
            tui.book_list.focus_appended(previous_visible, app.visible_len());
        }
        Effect::None => {}
    }
    // Keep overlay presentation state in step with the core overlay
    if app.overlay != Overlay::Search {
        tui.search_panel = None;
    }
    if app.overlay != Overlay::Settings {
        tui.settings_panel = None;
    }
    false
}

/// The id of the currently selected visible book, if any.
fn selected_book_id(app: &App, tui: &TuiState) -> Option<String> {
    let visible = app.visible();
    visible
        .get(tui.book_list.selected)
        .map(|&index| app.book(index).id.clone())
}

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new();
    let mut terminal = ratatui::init();

    info!(
        "TUI started: {} books, page size {}",
        app.catalog.books.len(),
        app.page_size
    );

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of focus
            if matches!(event, TuiEvent::ForceQuit) {
                if dispatch(&mut app, &mut tui, Action::Quit) {
                    should_quit = true;
                }
                continue;
            }

            // When an overlay is open, route all events to it
            match app.overlay {
                Overlay::Search => {
                    if let Some(panel) = tui.search_panel.as_mut()
                        && let Some(search_event) = panel.handle_event(&event)
                    {
                        let action = match search_event {
                            SearchEvent::Submit(criteria) => Action::Search(criteria),
                            SearchEvent::Dismiss => Action::CloseSearch,
                        };
                        if dispatch(&mut app, &mut tui, action) {
                            should_quit = true;
                        }
                    }
                    continue;
                }
                Overlay::Settings => {
                    if let Some(panel) = tui.settings_panel.as_mut()
                        && let Some(settings_event) = panel.handle_event(&event)
                    {
                        let action = match settings_event {
                            SettingsEvent::Apply(theme) => Action::SetTheme(theme),
                            SettingsEvent::Dismiss => Action::CloseSettings,
                        };
                        if dispatch(&mut app, &mut tui, action) {
                            should_quit = true;
                        }
                    }
                    continue;
                }
                Overlay::Detail(_) => {
                    if matches!(event, TuiEvent::Escape | TuiEvent::Submit)
                        && dispatch(&mut app, &mut tui, Action::CloseDetail)
                    {
                        should_quit = true;
                    }
                    continue;
                }
                Overlay::None => {}
            }

            // Browse mode
            let action = match event {
                TuiEvent::InputChar('q') | TuiEvent::Escape => Some(Action::Quit),
                TuiEvent::InputChar('/') | TuiEvent::InputChar('s') => Some(Action::OpenSearch),
                TuiEvent::InputChar('t') => Some(Action::OpenSettings),
                TuiEvent::InputChar('m') | TuiEvent::InputChar(' ') => Some(Action::LoadMore),
                TuiEvent::Submit => selected_book_id(&app, &tui).map(Action::SelectBook),
                TuiEvent::CursorUp
                | TuiEvent::CursorDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.book_list.handle_event(&event);
                    None
                }
                _ => None,
            };

            if let Some(action) = action {
                // Opening an overlay also creates its presentation state
                match &action {
                    Action::OpenSearch => {
                        tui.search_panel =
                            Some(SearchPanelState::new(&app.catalog, &app.criteria));
                    }
                    Action::OpenSettings => {
                        tui.settings_panel = Some(SettingsPanelState::new(app.theme));
                    }
                    _ => {}
                }
                if dispatch(&mut app, &mut tui, action) {
                    should_quit = true;
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}
