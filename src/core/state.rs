//! # Application State
//!
//! Core business state for Biblio. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog            // books + author/genre mappings (read-only)
//! ├── page_size: usize            // fixed page length
//! ├── matches: Vec<usize>         // filtered subsequence (indices into catalog)
//! ├── page: usize                 // pagination cursor, >= 1
//! ├── criteria: Criteria          // last submitted search criteria
//! ├── overlay: Overlay            // which overlay is open, if any
//! ├── theme: Theme                // current light/dark token
//! └── status_message: String      // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::catalog::{self, Book, Catalog, Criteria};
use crate::core::theme::Theme;

pub struct App {
    pub catalog: Catalog,
    pub page_size: usize,
    /// Indices into `catalog.books`, always a subsequence in original order.
    pub matches: Vec<usize>,
    /// Pagination cursor. Resets to 1 on search, increments on load-more.
    pub page: usize,
    pub criteria: Criteria,
    pub overlay: Overlay,
    pub theme: Theme,
    pub status_message: String,
}

/// Which overlay is currently open. At most one at a time; `Detail` carries
/// the index of the selected book in `catalog.books`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Search,
    Detail(usize),
    Settings,
}

impl App {
    pub fn new(catalog: Catalog, page_size: usize, theme: Theme) -> Self {
        let matches: Vec<usize> = (0..catalog.books.len()).collect();
        let status_message = format!("{} books", matches.len());
        Self {
            catalog,
            page_size,
            matches,
            page: 1,
            criteria: Criteria::default(),
            overlay: Overlay::None,
            theme,
            status_message,
        }
    }

    /// Length of the visible prefix of `matches`.
    pub fn visible_len(&self) -> usize {
        catalog::visible_len(self.matches.len(), self.page, self.page_size)
    }

    /// Indices of the currently visible books.
    pub fn visible(&self) -> &[usize] {
        &self.matches[..self.visible_len()]
    }

    /// Matching books not yet revealed.
    pub fn remaining(&self) -> usize {
        catalog::remaining(self.matches.len(), self.page, self.page_size)
    }

    pub fn load_more_enabled(&self) -> bool {
        self.remaining() > 0
    }

    pub fn book(&self, index: usize) -> &Book {
        &self.catalog.books[index]
    }
}
