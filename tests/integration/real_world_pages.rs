//! Integration tests for realistic page layouts
//!
//! Fixtures live in `tests/integration/fixtures`.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use rs_webscrape::markdown::to_markdown;
use rs_webscrape::{extract_page, extract_page_bytes, ContentRecord, HeadingLevel};

/// Test fixture path helper
fn fixture_path(name: &str) -> String {
    format!(
        "{}/tests/integration/fixtures/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    )
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

fn s(text: &str) -> String {
    text.to_string()
}

#[test]
fn test_blog_post_full_sequence() {
    let page = extract_page(&read_fixture("blog_post.html"));

    assert_eq!(page.title, "Growing Tomatoes on a Balcony");
    assert_eq!(
        page.content,
        vec![
            ContentRecord::Link {
                text: s("Green Corner"),
                href: s("/"),
            },
            ContentRecord::List {
                items: vec![s("Blog"), s("About")],
                ordered: false,
            },
            ContentRecord::Header {
                level: HeadingLevel::H1,
                text: s("Growing Tomatoes on a Balcony"),
            },
            ContentRecord::Text { text: s("By") },
            ContentRecord::Link {
                text: s("Sam Rivera"),
                href: s("/authors/sam"),
            },
            ContentRecord::Text {
                text: s(", 3 May 2024"),
            },
            ContentRecord::Paragraph {
                text: s("Tomatoes need at least six hours of direct sun a day."),
            },
            ContentRecord::Header {
                level: HeadingLevel::H2,
                text: s("What you need"),
            },
            ContentRecord::List {
                items: vec![s("A 20 litre pot"), s("Potting mix"), s("A sturdy cane")],
                ordered: false,
            },
            ContentRecord::Header {
                level: HeadingLevel::H2,
                text: s("Watering schedule"),
            },
            ContentRecord::Table {
                rows: vec![
                    vec![s("Month"), s("Frequency")],
                    vec![s("May"), s("Every other day")],
                    vec![s("July"), s("Daily")],
                ],
            },
            ContentRecord::Paragraph {
                text: s("Feed every two weeks once the first flowers appear."),
            },
            ContentRecord::Text {
                text: s("\u{a9} 2024 Green Corner"),
            },
        ]
    );
}

#[test]
fn test_docs_page_navigation_and_content() {
    let page = extract_page(&read_fixture("docs_page.html"));

    assert_eq!(page.title, "Configuration Reference");

    let kinds: Vec<&str> = page.content.iter().map(ContentRecord::kind).collect();
    assert_eq!(
        kinds,
        vec!["list", "header", "text", "header", "header", "paragraph", "table"]
    );

    // Sidebar list: nested items are folded into their parent and repeated.
    match &page.content[0] {
        ContentRecord::List { items, ordered } => {
            assert!(*ordered);
            assert_eq!(items.len(), 3);
            assert_eq!(items[0], "Install");
            assert!(items[1].starts_with("Configure"));
            assert!(items[1].ends_with("Environment"));
            assert_eq!(items[2], "Environment");
        }
        other => panic!("expected list, got {other:?}"),
    }

    let headers: Vec<(u8, &str)> = page
        .headers()
        .map(|(level, text)| (level.rank(), text))
        .collect();
    assert_eq!(
        headers,
        vec![(1, "Install"), (1, "Configure"), (3, "Environment")]
    );

    assert_eq!(
        page.content[2].text(),
        Some("Run the installer and restart your shell.")
    );
    assert_eq!(
        page.content[5].text(),
        Some("Set APP_HOME before starting.")
    );
    assert_eq!(
        page.content[6],
        ContentRecord::Table {
            rows: vec![
                vec![s("Variable"), s("Default")],
                vec![s("APP_HOME"), s("none")],
                vec![s("APP_LOG"), s("info")],
            ],
        }
    );
}

#[test]
fn test_legacy_encoded_page_from_bytes() {
    let bytes = std::fs::read(fixture_path("latin1_page.html")).expect("Failed to read fixture");

    let page = extract_page_bytes(&bytes);

    assert_eq!(page.title, "Caf\u{e9} menu");
    assert_eq!(
        page.content,
        vec![
            ContentRecord::Header {
                level: HeadingLevel::H2,
                text: s("Cr\u{e8}me br\u{fb}l\u{e9}e"),
            },
            ContentRecord::Paragraph {
                text: s("Fa\u{e7}on maison"),
            },
        ]
    );
}

#[test]
fn test_blog_post_markdown_outline() {
    let markdown = to_markdown(&extract_page(&read_fixture("blog_post.html")));

    assert!(markdown.starts_with("# Growing Tomatoes on a Balcony\n\n[Green Corner](/)"));
    assert!(markdown.contains("## Watering schedule\n\n| Month | Frequency |"));
    assert!(markdown.contains("- A 20 litre pot\n- Potting mix\n- A sturdy cane"));
}

#[test]
fn test_fixture_json_is_stable_across_runs() {
    let html = read_fixture("docs_page.html");

    let first = extract_page(&html).to_json().expect("serialise");
    let second = extract_page(&html).to_json().expect("serialise");

    assert_eq!(first, second);
}
