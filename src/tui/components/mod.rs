//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar with reveal progress and status text
//! - `Preview`: A single book card
//! - `ShowMoreBar`: The pagination affordance with its remaining count
//! - `DetailView`: The book detail overlay
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `BookList`: Scrollable card list with selection
//! - `SearchPanel`: The criteria form overlay
//! - `SettingsPanel`: The theme picker overlay
//!
//! Stateful overlays follow the persistent state + transient wrapper
//! pattern: a `*State` struct lives in `TuiState` for as long as the overlay
//! is open, and a borrowing wrapper is created each frame to render it.
//! Each component file contains its state types, event types, rendering,
//! event handling, and tests.

pub mod book_list;
pub mod detail_view;
pub mod preview;
pub mod search_panel;
pub mod settings_panel;
pub mod show_more;
pub mod title_bar;

pub use book_list::{BookList, BookListState};
pub use detail_view::DetailView;
pub use preview::Preview;
pub use search_panel::{SearchEvent, SearchPanel, SearchPanelState};
pub use settings_panel::{SettingsEvent, SettingsPanel, SettingsPanelState};
pub use show_more::ShowMoreBar;
pub use title_bar::TitleBar;
