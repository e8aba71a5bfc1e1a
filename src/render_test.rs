use super::*;
use crate::api::Book;

fn book(title: &str) -> Book {
    Book {
        title: title.to_owned(),
        authors: vec!["Frank Herbert".to_owned()],
        description: "Arrakis, the desert planet.".to_owned(),
        thumbnail: None,
        preview_link: Some("http://example.test/preview".to_owned()),
    }
}

#[test]
fn sanitize_strips_control_characters() {
    assert_eq!(sanitize("evil\x1b[31mtitle\x07"), "evil[31mtitle");
}

#[test]
fn sanitize_collapses_newlines_to_spaces() {
    assert_eq!(sanitize("line one\nline two\ttabbed"), "line one line two tabbed");
}

#[test]
fn sanitize_preserves_unicode_text() {
    assert_eq!(sanitize("Cien años de soledad — García Márquez"), "Cien años de soledad — García Márquez");
}

#[test]
fn format_card_includes_title_authors_and_preview() {
    let card = format_card(0, &book("Dune"));
    assert!(card.contains(" 1. Dune"));
    assert!(card.contains("by Frank Herbert"));
    assert!(card.contains("preview: http://example.test/preview"));
}

#[test]
fn format_card_shows_cover_only_when_present() {
    let mut with_cover = book("Dune");
    with_cover.thumbnail = Some("http://example.test/dune.jpg".to_owned());
    assert!(format_card(0, &with_cover).contains("cover: http://example.test/dune.jpg"));
    assert!(!format_card(0, &book("Dune")).contains("cover:"));
}

#[test]
fn format_card_truncates_long_descriptions() {
    let mut long = book("Dune");
    long.description = "x".repeat(500);
    let card = format_card(0, &long);
    assert!(card.contains('…'));
    assert!(!card.contains(&"x".repeat(300)));
}

#[test]
fn format_results_handles_empty_set() {
    let out = format_results("dune", &[]);
    assert_eq!(out, "No books found for \"dune\".\n");
}

#[test]
fn format_results_numbers_cards_in_order() {
    let out = format_results("dune", &[book("Dune"), book("Dune Messiah")]);
    assert!(out.contains(" 1. Dune\n"));
    assert!(out.contains(" 2. Dune Messiah\n"));
}

#[test]
fn format_history_handles_empty_and_ordered() {
    assert_eq!(format_history(&[]), "Search history is empty.\n");
    let out = format_history(&["beta".to_owned(), "alpha".to_owned()]);
    assert!(out.contains(" 1. beta\n"));
    assert!(out.contains(" 2. alpha\n"));
}

#[test]
fn format_reading_list_handles_empty_and_ordered() {
    assert_eq!(format_reading_list(&[]), "Reading list is empty.\n");
    let out = format_reading_list(&["Bar".to_owned()]);
    assert!(out.contains(" 1. Bar\n"));
}
