//! # Settings Panel Component
//!
//! Centered overlay for switching the theme. Opened with `t`, dismissed with
//! Esc; Enter applies the highlighted theme.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SettingsPanelState` lives in `TuiState` while the overlay is open
//! - `SettingsPanel` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::theme::{Palette, Theme};
use crate::tui::event::TuiEvent;

const THEMES: [Theme; 2] = [Theme::Day, Theme::Night];

/// Persistent state for the settings overlay.
pub struct SettingsPanelState {
    pub selected: usize,
    /// The theme active when the panel opened (marked in the list).
    pub active: Theme,
    pub list_state: ListState,
}

impl SettingsPanelState {
    pub fn new(active: Theme) -> Self {
        let selected = THEMES.iter().position(|&t| t == active).unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            selected,
            active,
            list_state,
        }
    }

    /// Handle a key event, returning a SettingsEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<SettingsEvent> {
        match event {
            TuiEvent::Escape => Some(SettingsEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(THEMES.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Some(SettingsEvent::Apply(THEMES[self.selected])),
            _ => None,
        }
    }
}

/// Events emitted by the settings panel.
pub enum SettingsEvent {
    Apply(Theme),
    Dismiss,
}

/// Transient render wrapper for the settings overlay.
pub struct SettingsPanel<'a> {
    state: &'a mut SettingsPanelState,
    palette: Palette,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(state: &'a mut SettingsPanelState, palette: Palette) -> Self {
        Self { state, palette }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(40, 30, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let base = Style::default().fg(self.palette.dark).bg(self.palette.light);
        let help_text = " ↑↓ Select  Enter Apply  Esc Back ";

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(base.add_modifier(Modifier::DIM))
            .title(" Settings ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1))
            .style(base);

        let items: Vec<ListItem> = THEMES
            .iter()
            .enumerate()
            .map(|(i, &theme)| {
                let is_active = theme == self.state.active;
                let marker = if is_active { " *" } else { "" };
                let style = if i == self.state.selected {
                    base.add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    base
                };
                ListItem::new(Line::from(Span::styled(
                    format!("{}{}", theme.label(), marker),
                    style,
                )))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
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

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn opens_with_the_active_theme_highlighted() {
        let state = SettingsPanelState::new(Theme::Night);
        assert_eq!(state.selected, 1);
        assert_eq!(state.list_state.selected(), Some(1));
    }

    #[test]
    fn arrows_move_and_clamp() {
        let mut state = SettingsPanelState::new(Theme::Day);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn submit_applies_the_highlighted_theme() {
        let mut state = SettingsPanelState::new(Theme::Day);
        state.handle_event(&TuiEvent::CursorDown);
        assert!(matches!(
            state.handle_event(&TuiEvent::Submit),
            Some(SettingsEvent::Apply(Theme::Night))
        ));
    }

    #[test]
    fn escape_dismisses_without_applying() {
        let mut state = SettingsPanelState::new(Theme::Day);
        assert!(matches!(
            state.handle_event(&TuiEvent::Escape),
            Some(SettingsEvent::Dismiss)
        ));
    }

    #[test]
    fn render_marks_the_active_theme() {
        let mut state = SettingsPanelState::new(Theme::Night);
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut panel = SettingsPanel::new(&mut state, Theme::Night.palette());
                panel.render(f, f.area());
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Night *"));
        assert!(text.contains("Day"));
    }
}
