//! # Catalog
//!
//! The book data model and the two pure pieces of domain logic:
//! filtering and pagination math.
//!
//! A [`Catalog`] is loaded once at startup (from a JSON file or the embedded
//! default) and is read-only for the lifetime of the process. The mutable
//! part (which books currently match, how many pages are revealed) lives in
//! `core::state::App` and only changes through `core::action::update`.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Datelike, Utc};
use log::info;
use serde::{Deserialize, Serialize};

/// Display name used when a book's author key is missing from the mapping.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// A single catalog record. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub id: String,
    pub title: String,
    /// Key into [`Catalog::authors`].
    pub author: String,
    /// Keys into [`Catalog::genres`].
    pub genres: Vec<String>,
    /// Cover image URI. Not fetched; displayed as-is.
    pub image: String,
    pub description: String,
    pub published: DateTime<Utc>,
}

impl Book {
    /// Publication year, derived from the publish date.
    pub fn year(&self) -> i32 {
        self.published.year()
    }
}

/// The full book catalog plus its author and genre display-name mappings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub authors: HashMap<String, String>,
    pub genres: HashMap<String, String>,
}

impl Catalog {
    /// Look up a book by id across the whole catalog.
    ///
    /// Selection goes through ALL books, not the filtered subset: an entry
    /// rendered before a narrower search stays selectable afterwards.
    pub fn find_book(&self, id: &str) -> Option<(usize, &Book)> {
        self.books
            .iter()
            .enumerate()
            .find(|(_, book)| book.id == id)
    }

    /// Author display name for a book, with a placeholder for unmapped keys.
    pub fn author_name(&self, key: &str) -> &str {
        self.authors.get(key).map_or(UNKNOWN_AUTHOR, String::as_str)
    }

    /// Genre keys and display names, sorted by display name.
    ///
    /// The source data is a hash map, so an explicit sort keeps the option
    /// list stable between runs.
    pub fn genre_options(&self) -> Vec<(String, String)> {
        sorted_options(&self.genres)
    }

    /// Author keys and display names, sorted by display name.
    pub fn author_options(&self) -> Vec<(String, String)> {
        sorted_options(&self.authors)
    }
}

fn sorted_options(mapping: &HashMap<String, String>) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = mapping
        .iter()
        .map(|(key, name)| (key.clone(), name.clone()))
        .collect();
    options.sort_by(|a, b| a.1.cmp(&b.1));
    options
}

// ============================================================================
// Filter Engine
// ============================================================================

/// Search criteria. `None` for genre/author means "any"; an empty or
/// whitespace-only title matches every book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub genre: Option<String>,
    pub title: String,
    pub author: Option<String>,
}

/// Apply `criteria` to the catalog, returning indices of matching books.
///
/// Pure: no side effects, original order preserved, no duplicates. An empty
/// result is a normal outcome, not an error.
pub fn filter_books(catalog: &Catalog, criteria: &Criteria) -> Vec<usize> {
    let title_needle = criteria.title.trim().to_lowercase();

    catalog
        .books
        .iter()
        .enumerate()
        .filter(|(_, book)| {
            let genre_match = match &criteria.genre {
                Some(genre) => book.genres.iter().any(|g| g == genre),
                None => true,
            };
            let title_match =
                title_needle.is_empty() || book.title.to_lowercase().contains(&title_needle);
            let author_match = match &criteria.author {
                Some(author) => &book.author == author,
                None => true,
            };
            genre_match && title_match && author_match
        })
        .map(|(index, _)| index)
        .collect()
}

// ============================================================================
// Paginator
// ============================================================================

/// Length of the visible prefix of the filtered list: `page * page_size`,
/// clamped to the number of matches.
pub fn visible_len(matches_len: usize, page: usize, page_size: usize) -> usize {
    page.saturating_mul(page_size).min(matches_len)
}

/// Matching books not yet revealed. Zero disables the show-more affordance.
pub fn remaining(matches_len: usize, page: usize, page_size: usize) -> usize {
    matches_len.saturating_sub(page.saturating_mul(page_size))
}

// ============================================================================
// Loading
// ============================================================================

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
    let catalog: Catalog = serde_json::from_str(&contents).map_err(CatalogError::Parse)?;
    info!(
        "Loaded catalog from {}: {} books, {} authors, {} genres",
        path.display(),
        catalog.books.len(),
        catalog.authors.len(),
        catalog.genres.len()
    );
    Ok(catalog)
}

/// The catalog compiled into the binary, used when no `--catalog` is given.
pub fn builtin_catalog() -> Catalog {
    serde_json::from_str(BUILTIN_CATALOG).expect("embedded catalog.json must be valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_catalog;

    #[test]
    fn empty_criteria_matches_everything_in_order() {
        let catalog = test_catalog();
        let matches = filter_books(&catalog, &Criteria::default());
        assert_eq!(matches, (0..catalog.books.len()).collect::<Vec<_>>());
    }

    #[test]
    fn title_match_is_case_insensitive_substring() {
        let catalog = test_catalog();
        let criteria = Criteria {
            title: "dune".to_string(),
            ..Default::default()
        };
        let matches = filter_books(&catalog, &criteria);
        assert_eq!(matches.len(), 1);
        assert_eq!(catalog.books[matches[0]].title, "Dune");
    }

    #[test]
    fn whitespace_only_title_matches_everything() {
        let catalog = test_catalog();
        let criteria = Criteria {
            title: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            filter_books(&catalog, &criteria).len(),
            catalog.books.len()
        );
    }

    #[test]
    fn genre_filter_requires_membership() {
        let catalog = test_catalog();
        let criteria = Criteria {
            genre: Some("scifi".to_string()),
            ..Default::default()
        };
        let matches = filter_books(&catalog, &criteria);
        assert!(!matches.is_empty());
        for &index in &matches {
            assert!(catalog.books[index].genres.iter().any(|g| g == "scifi"));
        }
    }

    #[test]
    fn author_filter_is_exact_key_equality() {
        let catalog = test_catalog();
        let criteria = Criteria {
            author: Some("herbert".to_string()),
            ..Default::default()
        };
        let matches = filter_books(&catalog, &criteria);
        assert!(!matches.is_empty());
        for &index in &matches {
            assert_eq!(catalog.books[index].author, "herbert");
        }
    }

    #[test]
    fn all_predicates_combine_with_and() {
        let catalog = test_catalog();
        // Author matches but the title does not — the intersection is empty.
        let criteria = Criteria {
            title: "no such book".to_string(),
            author: Some("herbert".to_string()),
            ..Default::default()
        };
        assert!(filter_books(&catalog, &criteria).is_empty());
    }

    #[test]
    fn filtering_preserves_order_and_never_duplicates() {
        let catalog = test_catalog();
        let criterias = [
            Criteria::default(),
            Criteria {
                genre: Some("scifi".to_string()),
                ..Default::default()
            },
            Criteria {
                title: "the".to_string(),
                ..Default::default()
            },
        ];
        for criteria in &criterias {
            let matches = filter_books(&catalog, criteria);
            // Strictly increasing indices ⇒ a subsequence with no duplicates.
            assert!(matches.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn pagination_math_matches_the_contract() {
        // 5 matches, page size 2
        assert_eq!(visible_len(5, 1, 2), 2);
        assert_eq!(remaining(5, 1, 2), 3);
        assert_eq!(visible_len(5, 2, 2), 4);
        assert_eq!(remaining(5, 2, 2), 1);
        assert_eq!(visible_len(5, 3, 2), 5);
        assert_eq!(remaining(5, 3, 2), 0);
        // Past the end: visible stays clamped, remaining stays zero
        assert_eq!(visible_len(5, 9, 2), 5);
        assert_eq!(remaining(5, 9, 2), 0);
    }

    #[test]
    fn find_book_searches_the_whole_catalog() {
        let catalog = test_catalog();
        let (index, book) = catalog.find_book("b3").expect("b3 exists");
        assert_eq!(book.id, "b3");
        assert_eq!(catalog.books[index].id, "b3");
        assert!(catalog.find_book("no-such-id").is_none());
    }

    #[test]
    fn missing_author_key_renders_placeholder() {
        let catalog = test_catalog();
        assert_eq!(catalog.author_name("nobody"), UNKNOWN_AUTHOR);
    }

    #[test]
    fn options_are_sorted_by_display_name() {
        let catalog = test_catalog();
        let genres = catalog.genre_options();
        let names: Vec<&str> = genres.iter().map(|(_, name)| name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn builtin_catalog_parses_and_is_consistent() {
        let catalog = builtin_catalog();
        assert!(!catalog.books.is_empty());
        for book in &catalog.books {
            assert!(
                catalog.authors.contains_key(&book.author),
                "author key {} unmapped",
                book.author
            );
            for genre in &book.genres {
                assert!(catalog.genres.contains_key(genre), "genre key {genre} unmapped");
            }
        }
    }

    #[test]
    fn catalog_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let original = test_catalog();
        fs::write(&path, serde_json::to_string_pretty(&original).unwrap()).unwrap();

        let loaded = load_catalog(&path).unwrap();
        assert_eq!(loaded.books, original.books);
        assert_eq!(loaded.authors, original.authors);
    }

    #[test]
    fn load_catalog_reports_missing_file_as_io() {
        let err = load_catalog(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
        assert!(err.to_string().contains("I/O"));
    }

    #[test]
    fn load_catalog_reports_bad_json_as_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn year_is_derived_from_publish_date() {
        let catalog = test_catalog();
        let (_, dune) = catalog.find_book("b1").unwrap();
        assert_eq!(dune.year(), 1965);
    }
}
