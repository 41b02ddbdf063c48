//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;

use chrono::{TimeZone, Utc};

use crate::core::catalog::{Book, Catalog};
use crate::core::state::App;
use crate::core::theme::Theme;

fn book(id: &str, title: &str, author: &str, genres: &[&str], year: i32) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        image: format!("https://covers.example/{id}.jpg"),
        description: format!("Description of {title}."),
        published: Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
    }
}

/// A small fixed catalog: 5 books, 3 authors, 3 genres.
pub fn test_catalog() -> Catalog {
    Catalog {
        books: vec![
            book("b1", "Dune", "herbert", &["scifi"], 1965),
            book("b2", "Dune Messiah", "herbert", &["scifi"], 1969),
            book("b3", "The Left Hand of Darkness", "leguin", &["scifi"], 1969),
            book("b4", "A Wizard of Earthsea", "leguin", &["fantasy"], 1968),
            book("b5", "The Hobbit", "tolkien", &["fantasy", "classic"], 1937),
        ],
        authors: HashMap::from([
            ("herbert".to_string(), "Frank Herbert".to_string()),
            ("leguin".to_string(), "Ursula K. Le Guin".to_string()),
            ("tolkien".to_string(), "J.R.R. Tolkien".to_string()),
        ]),
        genres: HashMap::from([
            ("scifi".to_string(), "Science Fiction".to_string()),
            ("fantasy".to_string(), "Fantasy".to_string()),
            ("classic".to_string(), "Classic".to_string()),
        ]),
    }
}

/// Creates a test App over [`test_catalog`] with page size 2 and Day theme.
pub fn test_app() -> App {
    App::new(test_catalog(), 2, Theme::Day)
}
