//! # TitleBar Component
//!
//! Top status bar showing catalog state and notifications.
//!
//! ## Responsibilities
//!
//! - Display how much of the filtered catalog is revealed ("12 of 96")
//! - Display status messages (e.g., "3 matches", "Theme: Night")
//!
//! ## Design Decisions
//!
//! TitleBar is purely presentational — it receives all data as props and has
//! no internal state. Props come from different sources (`shown`/`total`
//! from pagination math, `status_message` from core App state) but the
//! TitleBar doesn't care where they come from; it just renders what it's
//! given.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::core::theme::Palette;
use crate::tui::component::Component;

/// Top status bar component showing reveal progress and status.
pub struct TitleBar {
    /// Number of currently revealed books.
    pub shown: usize,
    /// Total number of matching books.
    pub total: usize,
    /// Transient status (e.g., "3 matches", "Theme: Night")
    pub status_message: String,
    pub palette: Palette,
}

impl TitleBar {
    pub fn new(shown: usize, total: usize, status_message: String, palette: Palette) -> Self {
        Self {
            shown,
            total,
            status_message,
            palette,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Biblio ({} of {} shown)", self.shown, self.total)
        } else {
            format!(
                "Biblio ({} of {} shown) | {}",
                self.shown, self.total, self.status_message
            )
        };

        let span = Span::styled(
            title_text,
            Style::default()
                .fg(self.palette.dark)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(span, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar =
            TitleBar::new(12, 96, "3 matches".to_string(), Theme::Day.palette());
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Biblio"));
        assert!(text.contains("12 of 96 shown"));
        assert!(text.contains("3 matches"));
    }

    #[test]
    fn test_title_bar_without_status_omits_separator() {
        let mut title_bar = TitleBar::new(5, 5, String::new(), Theme::Night.palette());
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("5 of 5 shown"));
        assert!(!text.contains('|'));
    }
}
