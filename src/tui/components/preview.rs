use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::catalog::Book;
use crate::core::theme::Palette;
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;

/// Every preview card is the same height: title line + author line + borders.
pub const PREVIEW_HEIGHT: u16 = 4;

/// A stateless component that renders a single book preview card.
///
/// `Preview` is a transient component: created fresh each frame with the data
/// it needs. Selection state is passed in from the parent `BookList`, which
/// tracks it persistently.
#[derive(Clone, Copy)]
pub struct Preview<'a> {
    pub book: &'a Book,
    /// Resolved display name (the parent owns the author mapping).
    pub author_name: &'a str,
    pub is_selected: bool,
    pub palette: Palette,
}

impl<'a> Preview<'a> {
    pub fn new(book: &'a Book, author_name: &'a str, is_selected: bool, palette: Palette) -> Self {
        Self {
            book,
            author_name,
            is_selected,
            palette,
        }
    }
}

impl<'a> Widget for Preview<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let base = Style::default().fg(self.palette.dark);
        let border_style = if self.is_selected {
            base.add_modifier(Modifier::BOLD)
        } else {
            base.add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        let title_style = if self.is_selected {
            base.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            base.add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(
                truncate_to_width(&self.book.title, inner_width),
                title_style,
            )),
            Line::from(Span::styled(
                truncate_to_width(
                    &format!("{} ({})", self.author_name, self.book.year()),
                    inner_width,
                ),
                base.add_modifier(Modifier::DIM),
            )),
        ];

        let inner_area = block.inner(area);
        block.render(area, buf);
        Paragraph::new(lines).style(base).render(inner_area, buf);
    }
}

/// Component trait implementation. `Preview` is stateless, so the `&mut self`
/// required by the trait is a no-op; rendering delegates to [`Widget`].
impl<'a> Component for Preview<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}

/// Truncate a string to the given display width, adding "..." if needed.
/// Width-aware so CJK titles don't overflow the card.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::Theme;
    use crate::test_support::test_catalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn renders_title_and_author_with_year() {
        let catalog = test_catalog();
        let (_, book) = catalog.find_book("b1").unwrap();
        let backend = TestBackend::new(40, PREVIEW_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let mut preview = Preview::new(
                    book,
                    catalog.author_name(&book.author),
                    false,
                    Theme::Day.palette(),
                );
                Component::render(&mut preview, f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Dune"));
        assert!(text.contains("Frank Herbert"));
        assert!(text.contains("(1965)"));
    }

    #[test]
    fn truncate_keeps_short_strings_intact() {
        assert_eq!(truncate_to_width("Dune", 20), "Dune");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        let out = truncate_to_width("A Very Long Book Title Indeed", 12);
        assert!(out.ends_with("..."));
        assert!(out.width() <= 12);
    }

    #[test]
    fn truncate_degenerate_width() {
        assert_eq!(truncate_to_width("Dune Messiah", 2), "..");
    }

    #[test]
    fn truncate_counts_display_width_not_chars() {
        // Full-width characters occupy two columns each
        let out = truncate_to_width("嵐が丘の嵐が丘の嵐が丘", 10);
        assert!(out.width() <= 10);
        assert!(out.ends_with("..."));
    }
}
