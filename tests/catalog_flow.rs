use std::collections::HashMap;

use biblio::core::action::{Action, Effect, RenderMode, update};
use biblio::core::catalog::{Book, Catalog, Criteria, filter_books};
use biblio::core::state::{App, Overlay};
use biblio::core::theme::Theme;
use chrono::{TimeZone, Utc};
use ratatui::style::Color;

// ============================================================================
// Helper Functions
// ============================================================================

fn make_book(id: &str, title: &str, author: &str, genres: &[&str], year: i32) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        image: format!("https://covers.example/{id}.jpg"),
        description: format!("Description of {title}."),
        published: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
    }
}

/// Five books across two authors and three genres — the pagination scenario
/// catalog (page size 2 → pages of 2, 2, 1).
fn five_book_catalog() -> Catalog {
    Catalog {
        books: vec![
            make_book("b1", "Dune", "herbert", &["scifi"], 1965),
            make_book("b2", "Dune Messiah", "herbert", &["scifi"], 1969),
            make_book("b3", "The Left Hand of Darkness", "leguin", &["scifi"], 1969),
            make_book("b4", "A Wizard of Earthsea", "leguin", &["fantasy"], 1968),
            make_book("b5", "The Hobbit", "tolkien", &["fantasy", "classic"], 1937),
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

fn five_book_app() -> App {
    App::new(five_book_catalog(), 2, Theme::Day)
}

// ============================================================================
// Pagination Walk
// ============================================================================

#[test]
fn pagination_walk_reveals_all_pages_then_disables() {
    let mut app = five_book_app();

    // Initial state: first page visible
    assert_eq!(app.page, 1);
    assert_eq!(app.visible(), &[0, 1]);
    assert_eq!(app.remaining(), 3);
    assert!(app.load_more_enabled());

    // Second page
    assert_eq!(
        update(&mut app, Action::LoadMore),
        Effect::RenderList(RenderMode::Append)
    );
    assert_eq!(app.page, 2);
    assert_eq!(app.visible(), &[0, 1, 2, 3]);
    assert_eq!(app.remaining(), 1);

    // Final partial page
    assert_eq!(
        update(&mut app, Action::LoadMore),
        Effect::RenderList(RenderMode::Append)
    );
    assert_eq!(app.page, 3);
    assert_eq!(app.visible(), &[0, 1, 2, 3, 4]);
    assert_eq!(app.remaining(), 0);
    assert!(!app.load_more_enabled());

    // Exhausted: silent no-op
    assert_eq!(update(&mut app, Action::LoadMore), Effect::None);
    assert_eq!(app.page, 3);
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn search_filters_resets_and_replaces() {
    let mut app = five_book_app();
    update(&mut app, Action::LoadMore);
    assert_eq!(app.page, 2);

    let effect = update(
        &mut app,
        Action::Search(Criteria {
            title: "dune".to_string(),
            ..Default::default()
        }),
    );

    assert_eq!(effect, Effect::RenderList(RenderMode::Replace));
    assert_eq!(app.page, 1);
    assert_eq!(app.matches.len(), 2); // Dune + Dune Messiah
    assert!(app.matches.iter().all(|&i| app
        .book(i)
        .title
        .to_lowercase()
        .contains("dune")));
}

#[test]
fn search_with_exactly_one_title_match() {
    let mut app = five_book_app();
    update(
        &mut app,
        Action::Search(Criteria {
            title: "the hobbit".to_string(),
            ..Default::default()
        }),
    );
    assert_eq!(app.matches.len(), 1);
    assert_eq!(app.book(app.matches[0]).title, "The Hobbit");
    assert_eq!(app.page, 1);
}

#[test]
fn combined_criteria_intersect() {
    let catalog = five_book_catalog();
    let matches = filter_books(
        &catalog,
        &Criteria {
            genre: Some("scifi".to_string()),
            title: String::new(),
            author: Some("leguin".to_string()),
        },
    );
    assert_eq!(matches.len(), 1);
    assert_eq!(catalog.books[matches[0]].title, "The Left Hand of Darkness");
}

#[test]
fn filtered_matches_are_a_subsequence_for_any_criteria() {
    let catalog = five_book_catalog();
    let probes = [
        Criteria::default(),
        Criteria {
            genre: Some("fantasy".to_string()),
            ..Default::default()
        },
        Criteria {
            title: "e".to_string(),
            ..Default::default()
        },
        Criteria {
            author: Some("nobody".to_string()),
            ..Default::default()
        },
    ];
    for criteria in &probes {
        let matches = filter_books(&catalog, criteria);
        assert!(
            matches.windows(2).all(|w| w[0] < w[1]),
            "criteria {criteria:?} broke subsequence order"
        );
    }
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn selection_survives_a_narrowing_search() {
    let mut app = five_book_app();
    // Filter down to fantasy only; The Left Hand of Darkness drops out
    update(
        &mut app,
        Action::Search(Criteria {
            genre: Some("fantasy".to_string()),
            ..Default::default()
        }),
    );
    assert!(!app.matches.iter().any(|&i| app.book(i).id == "b3"));

    // A previously rendered book is still selectable by id
    update(&mut app, Action::SelectBook("b3".to_string()));
    let Overlay::Detail(index) = app.overlay else {
        panic!("expected detail overlay");
    };
    assert_eq!(app.book(index).title, "The Left Hand of Darkness");
    assert_eq!(app.book(index).year(), 1969);

    update(&mut app, Action::CloseDetail);
    assert_eq!(app.overlay, Overlay::None);
}

#[test]
fn unknown_id_leaves_state_untouched() {
    let mut app = five_book_app();
    let matches_before = app.matches.clone();
    let page_before = app.page;

    assert_eq!(
        update(&mut app, Action::SelectBook("missing-id".to_string())),
        Effect::None
    );
    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(app.matches, matches_before);
    assert_eq!(app.page, page_before);
}

// ============================================================================
// Theme
// ============================================================================

#[test]
fn night_theme_inverts_the_day_surfaces() {
    let mut app = five_book_app();
    update(&mut app, Action::SetTheme(Theme::Night));

    let palette = app.theme.palette();
    assert_eq!(palette.dark, Color::Rgb(255, 255, 255));
    assert_eq!(palette.light, Color::Rgb(10, 10, 20));

    update(&mut app, Action::SetTheme(Theme::Day));
    let palette = app.theme.palette();
    assert_eq!(palette.dark, Color::Rgb(10, 10, 20));
    assert_eq!(palette.light, Color::Rgb(255, 255, 255));
}
