//! # Search Panel Component
//!
//! Centered overlay with the three filter fields: title text, genre select,
//! author select. Opened with `/`, dismissed with Esc, submitted with Enter.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SearchPanelState` lives in `TuiState` while the overlay is open
//! - `SearchPanel` is created each frame with borrowed state
//!
//! The select fields are populated from the catalog mappings with an
//! "All ..." entry pinned first, sorted by display name. The panel is
//! seeded from the last submitted criteria so reopening it shows what is
//! currently filtered.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::catalog::{Catalog, Criteria};
use crate::core::theme::Palette;
use crate::tui::event::TuiEvent;

/// A dropdown-style select: a fixed option list plus a cursor. The first
/// option is always the "any" entry (key `None`).
pub struct SelectField {
    options: Vec<(Option<String>, String)>,
    pub index: usize,
}

impl SelectField {
    /// Build from a catalog mapping, pinning `default_label` first.
    /// `current` pre-selects the matching key if it is still present.
    pub fn new(
        default_label: &str,
        options: Vec<(String, String)>,
        current: &Option<String>,
    ) -> Self {
        let mut all: Vec<(Option<String>, String)> =
            vec![(None, default_label.to_string())];
        all.extend(options.into_iter().map(|(key, name)| (Some(key), name)));
        let index = current
            .as_ref()
            .and_then(|key| all.iter().position(|(k, _)| k.as_ref() == Some(key)))
            .unwrap_or(0);
        Self { options: all, index }
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1).min(self.options.len() - 1);
    }

    pub fn selected_key(&self) -> Option<String> {
        self.options[self.index].0.clone()
    }

    pub fn selected_label(&self) -> &str {
        &self.options[self.index].1
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }
}

/// Which form field has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Genre,
    Author,
}

impl SearchField {
    fn next(self) -> Self {
        match self {
            SearchField::Title => SearchField::Genre,
            SearchField::Genre => SearchField::Author,
            SearchField::Author => SearchField::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            SearchField::Title => SearchField::Author,
            SearchField::Genre => SearchField::Title,
            SearchField::Author => SearchField::Genre,
        }
    }
}

/// Persistent state for the search overlay.
pub struct SearchPanelState {
    pub title_input: String,
    pub genre: SelectField,
    pub author: SelectField,
    /// The title input has focus when the panel opens.
    pub focus: SearchField,
}

impl SearchPanelState {
    pub fn new(catalog: &Catalog, current: &Criteria) -> Self {
        Self {
            title_input: current.title.clone(),
            genre: SelectField::new("All Genres", catalog.genre_options(), &current.genre),
            author: SelectField::new("All Authors", catalog.author_options(), &current.author),
            focus: SearchField::Title,
        }
    }

    /// Collect the form into a criteria record for `Action::Search`.
    pub fn criteria(&self) -> Criteria {
        Criteria {
            genre: self.genre.selected_key(),
            title: self.title_input.clone(),
            author: self.author.selected_key(),
        }
    }

    /// Handle a key event, returning a SearchEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::Escape => Some(SearchEvent::Dismiss),
            TuiEvent::Submit => Some(SearchEvent::Submit(self.criteria())),
            TuiEvent::NextField => {
                self.focus = self.focus.next();
                None
            }
            TuiEvent::PrevField => {
                self.focus = self.focus.prev();
                None
            }
            TuiEvent::CursorUp => {
                match self.focus {
                    SearchField::Title => self.focus = self.focus.prev(),
                    SearchField::Genre => self.genre.prev(),
                    SearchField::Author => self.author.prev(),
                }
                None
            }
            TuiEvent::CursorDown => {
                match self.focus {
                    SearchField::Title => self.focus = self.focus.next(),
                    SearchField::Genre => self.genre.next(),
                    SearchField::Author => self.author.next(),
                }
                None
            }
            TuiEvent::InputChar(c) => {
                if self.focus == SearchField::Title {
                    self.title_input.push(*c);
                }
                None
            }
            TuiEvent::Backspace => {
                if self.focus == SearchField::Title {
                    self.title_input.pop();
                }
                None
            }
            _ => None,
        }
    }
}

/// Events emitted by the search panel.
pub enum SearchEvent {
    Submit(Criteria),
    Dismiss,
}

/// Transient render wrapper for the search overlay.
pub struct SearchPanel<'a> {
    state: &'a mut SearchPanelState,
    palette: Palette,
}

impl<'a> SearchPanel<'a> {
    pub fn new(state: &'a mut SearchPanelState, palette: Palette) -> Self {
        Self { state, palette }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 40, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let base = Style::default().fg(self.palette.dark).bg(self.palette.light);
        let help_text = " Tab Next  ↑↓ Change  Enter Apply  Esc Back ";

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(base.add_modifier(Modifier::DIM))
            .title(" Search ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1))
            .style(base);

        let field_line = |label: &str, value: String, focused: bool| {
            let value_style = if focused {
                base.add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                base
            };
            Line::from(vec![
                Span::styled(format!("{label:<8}"), base.add_modifier(Modifier::DIM)),
                Span::styled(value, value_style),
            ])
        };

        let title_focused = self.state.focus == SearchField::Title;
        let title_value = if title_focused {
            format!("{}▏", self.state.title_input)
        } else if self.state.title_input.is_empty() {
            "(any title)".to_string()
        } else {
            self.state.title_input.clone()
        };

        let lines = vec![
            Line::default(),
            field_line("Title", title_value, title_focused),
            Line::default(),
            field_line(
                "Genre",
                format!("◂ {} ▸", self.state.genre.selected_label()),
                self.state.focus == SearchField::Genre,
            ),
            Line::default(),
            field_line(
                "Author",
                format!("◂ {} ▸", self.state.author.selected_label()),
                self.state.focus == SearchField::Author,
            ),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
