//! # Detail View Component
//!
//! Centered overlay showing a single book: title, author with publication
//! year, cover URI, and the full description. Stateless: it has nothing to
//! remember between frames, so there is no `*State` struct, and Esc handling
//! lives in the event loop.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::catalog::Book;
use crate::core::theme::Palette;

/// Transient render wrapper for the detail overlay.
pub struct DetailView<'a> {
    book: &'a Book,
    /// Resolved display name (the caller owns the author mapping).
    author_name: &'a str,
    palette: Palette,
}

impl<'a> DetailView<'a> {
    pub fn new(book: &'a Book, author_name: &'a str, palette: Palette) -> Self {
        Self {
            book,
            author_name,
            palette,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 80, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let base = Style::default().fg(self.palette.dark).bg(self.palette.light);
        let help_text = " Esc Close ";

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(base.add_modifier(Modifier::DIM))
            .title(" Book ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1))
            .style(base);

        let subtitle = format!("{} ({})", self.author_name, self.book.year());
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                self.book.title.clone(),
                base.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(subtitle, base.add_modifier(Modifier::DIM))),
            Line::from(Span::styled(
                format!("cover: {}", self.book.image),
                base.add_modifier(Modifier::DIM | Modifier::ITALIC),
            )),
            Line::default(),
            Line::from(self.book.description.clone()),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, overlay);
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
