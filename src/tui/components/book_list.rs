//! # BookList Component
//!
//! Scrollable view of the currently revealed slice of the catalog.
//!
//! ## Responsibilities
//!
//! - Display one preview card per visible book
//! - Keyboard selection (up/down/page) with scroll-follow
//! - React to list render instructions: replace resets to the top,
//!   append keeps context and jumps to the first newly revealed card
//!
//! ## Architecture
//!
//! `BookList` is a transient component (created each frame) that wraps
//! `&'a mut BookListState` (persistent state) and the visible slice (props).
//! Every card is `PREVIEW_HEIGHT` tall, so layout is plain multiplication
//! and no height cache is needed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::Catalog;
use crate::core::theme::Palette;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::preview::{PREVIEW_HEIGHT, Preview};
use crate::tui::event::TuiEvent;

/// Selection and scroll state for the book list.
/// Must be persisted in the parent TuiState.
pub struct BookListState {
    pub scroll_state: ScrollViewState,
    /// Index into the visible slice (not the whole catalog).
    pub selected: usize,
    /// Visible slice length as of the last render; bounds keyboard movement.
    pub visible_len: usize,
    /// Last known viewport height (for scroll math between frames).
    pub viewport_height: u16,
}

impl Default for BookListState {
    fn default() -> Self {
        Self::new()
    }
}

impl BookListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            selected: 0,
            visible_len: 0,
            viewport_height: 0,
        }
    }

    /// Full re-render: back to the top with the first card selected.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_state.set_offset(Position { x: 0, y: 0 });
    }

    /// Incremental append: keep scroll context, move the selection to the
    /// first card revealed by this append.
    pub fn focus_appended(&mut self, previous_len: usize, new_len: usize) {
        if new_len > previous_len {
            self.selected = previous_len;
        }
        self.visible_len = new_len;
        self.scroll_to_selected();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.scroll_to_selected();
    }

    pub fn select_next(&mut self) {
        if self.visible_len > 0 {
            self.selected = (self.selected + 1).min(self.visible_len - 1);
        }
        self.scroll_to_selected();
    }

    fn cards_per_page(&self) -> usize {
        (self.viewport_height / PREVIEW_HEIGHT).max(1) as usize
    }

    pub fn select_page_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.cards_per_page());
        self.scroll_to_selected();
    }

    pub fn select_page_down(&mut self) {
        if self.visible_len > 0 {
            self.selected = (self.selected + self.cards_per_page()).min(self.visible_len - 1);
        }
        self.scroll_to_selected();
    }

    /// Scroll the viewport so the selected card is fully visible.
    pub fn scroll_to_selected(&mut self) {
        let item_top = self.selected as u16 * PREVIEW_HEIGHT;
        let item_bottom = item_top + PREVIEW_HEIGHT;
        let offset_y = self.scroll_state.offset().y;

        if item_top < offset_y {
            // Selected card is above the viewport — align its top edge
            self.scroll_state.set_offset(Position { x: 0, y: item_top });
        } else if self.viewport_height > 0 && item_bottom > offset_y + self.viewport_height {
            // Below the viewport — align its bottom edge
            let new_y = item_bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Clamp the selection after the visible slice shrank between frames.
    fn clamp_selection(&mut self) {
        if self.visible_len == 0 {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(self.visible_len - 1);
        }
    }
}

/// EventHandler lives on `BookListState` rather than `BookList` because the
/// transient wrapper is recreated each frame and can't hold state.
impl EventHandler for BookListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => self.select_prev(),
            TuiEvent::CursorDown => self.select_next(),
            TuiEvent::ScrollPageUp => self.select_page_up(),
            TuiEvent::ScrollPageDown => self.select_page_down(),
            _ => return None,
        }
        None
    }
}

/// Scrollable card list. Created fresh each frame with references to state
/// and the visible slice of match indices.
pub struct BookList<'a> {
    pub state: &'a mut BookListState,
    pub catalog: &'a Catalog,
    /// Indices into `catalog.books` for the revealed prefix of matches.
    pub visible: &'a [usize],
    pub palette: Palette,
}

impl<'a> BookList<'a> {
    pub fn new(
        state: &'a mut BookListState,
        catalog: &'a Catalog,
        visible: &'a [usize],
        palette: Palette,
    ) -> Self {
        Self {
            state,
            catalog,
            visible,
            palette,
        }
    }
}

impl<'a> Component for BookList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.visible_len = self.visible.len();
        self.state.viewport_height = area.height;
        self.state.clamp_selection();

        if self.visible.is_empty() {
            let empty = Paragraph::new("No books match your search.")
                .style(Style::default().fg(self.palette.dark).add_modifier(Modifier::DIM))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let total_height = self.visible.len() as u16 * PREVIEW_HEIGHT;

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        // Only cards intersecting the viewport are worth rendering
        let offset_y = self.state.scroll_state.offset().y;
        let first = (offset_y / PREVIEW_HEIGHT) as usize;
        let last = ((offset_y + area.height) / PREVIEW_HEIGHT + 1).min(self.visible.len() as u16);

        for i in first..last as usize {
            let book_index = self.visible[i];
            let book = &self.catalog.books[book_index];
            let card_rect = Rect::new(
                0,
                i as u16 * PREVIEW_HEIGHT,
                content_width,
                PREVIEW_HEIGHT,
            );
            let preview = Preview::new(
                book,
                self.catalog.author_name(&book.author),
                i == self.state.selected,
                self.palette,
            );
            scroll_view.render_widget(preview, card_rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
