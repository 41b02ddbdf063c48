use crate::core::state::{App, Overlay};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    BookList, DetailView, SearchPanel, SettingsPanel, ShowMoreBar, TitleBar,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Block;

/// Compose one frame: surface fill, title bar, book list, show-more bar,
/// help bar, then whichever overlay is open on top.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let palette = app.theme.palette();
    let base = Style::default().fg(palette.dark).bg(palette.light);
    let full_area = frame.area();

    // Theme application: the whole surface takes the palette pair.
    frame.render_widget(Block::new().style(base), full_area);

    let layout = Layout::vertical([Length(1), Min(0), Length(1), Length(1)]);
    let [title_area, list_area, more_area, help_area] = layout.areas(full_area);

    TitleBar::new(
        app.visible_len(),
        app.matches.len(),
        app.status_message.clone(),
        palette,
    )
    .render(frame, title_area);

    BookList::new(&mut tui.book_list, &app.catalog, app.visible(), palette)
        .render(frame, list_area);

    ShowMoreBar::new(app.remaining(), palette).render(frame, more_area);

    frame.render_widget(
        Span::styled(help_text(app.overlay), base.add_modifier(Modifier::DIM)),
        help_area,
    );

    // Overlays render last so they sit on top of the list
    match app.overlay {
        Overlay::None => {}
        Overlay::Search => {
            if let Some(panel) = tui.search_panel.as_mut() {
                SearchPanel::new(panel, palette).render(frame, full_area);
            }
        }
        Overlay::Settings => {
            if let Some(panel) = tui.settings_panel.as_mut() {
                SettingsPanel::new(panel, palette).render(frame, full_area);
            }
        }
        Overlay::Detail(index) => {
            let book = app.book(index);
            DetailView::new(book, app.catalog.author_name(&book.author), palette)
                .render(frame, full_area);
        }
    }
}

fn help_text(overlay: Overlay) -> &'static str {
    match overlay {
        Overlay::None => " ↑↓ Select  Enter Details  m More  / Search  t Settings  q Quit ",
        Overlay::Search => " Editing search (Tab moves between fields) ",
        Overlay::Settings => " Choosing theme ",
        Overlay::Detail(_) => " Viewing book ",
    }
}
