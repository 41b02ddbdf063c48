use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::theme::Palette;
use crate::tui::component::Component;

/// The "Show more" affordance under the book list.
///
/// Shows the remaining count and renders visibly disabled when nothing
/// remains. Stateless; the `m` key that triggers it is handled by the
/// event loop.
pub struct ShowMoreBar {
    pub remaining: usize,
    pub palette: Palette,
}

impl ShowMoreBar {
    pub fn new(remaining: usize, palette: Palette) -> Self {
        Self { remaining, palette }
    }

    pub fn enabled(&self) -> bool {
        self.remaining > 0
    }
}

impl Component for ShowMoreBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let base = Style::default().fg(self.palette.dark);
        let line = if self.enabled() {
            Line::from(vec![
                Span::styled(" m ", base.add_modifier(Modifier::BOLD | Modifier::REVERSED)),
                Span::styled(
                    format!(" Show more ({})", self.remaining),
                    base.add_modifier(Modifier::BOLD),
                ),
            ])
        } else {
            Line::from(Span::styled(
                format!(" Show more ({})", self.remaining),
                base.add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
            ))
        };
        frame.render_widget(line, area);
    }
}
