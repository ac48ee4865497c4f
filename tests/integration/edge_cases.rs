//! Edge case integration tests
//!
//! Tests for unusual inputs, boundary conditions and malformed markup.

use rs_webscrape::dom;
use rs_webscrape::{
    extract_document, extract_element, extract_page, extract_page_bytes, ContentRecord, Options,
    NO_TITLE,
};

#[test]
fn test_extract_empty_input() {
    let page = extract_page("");

    assert_eq!(page.title, NO_TITLE);
    assert!(page.is_empty());
    assert!(!page.has_title());
}

#[test]
fn test_extract_empty_body() {
    let page = extract_page("<html><head><title>Blank</title></head><body></body></html>");

    assert_eq!(page.title, "Blank");
    assert!(page.content.is_empty());
}

#[test]
fn test_extract_whitespace_only_body() {
    let page = extract_page("<body>\n   \t  <div>  \n </div>   </body>");

    assert!(page.content.is_empty());
}

#[test]
fn test_extract_frameset_has_no_body() {
    let html = r#"<html><head><title>Frames</title></head>
        <frameset cols="50%,50%"><frame src="a.html"><frame src="b.html"></frameset></html>"#;

    let page = extract_page(html);

    assert_eq!(page.title, "Frames");
    assert!(page.content.is_empty());
}

#[test]
fn test_extract_whitespace_title_uses_sentinel() {
    let page = extract_page("<title>   </title><body><p>x</p></body>");

    assert_eq!(page.title, NO_TITLE);
    assert_eq!(page.content.len(), 1);
}

#[test]
fn test_extract_plain_text_input() {
    let page = extract_page("just some words");

    assert_eq!(
        page.content,
        vec![ContentRecord::Text {
            text: "just some words".to_string()
        }]
    );
}

#[test]
fn test_extract_unclosed_tags() {
    let page = extract_page("<body><p>First<p>Second<h2>Heading<div>After");

    let kinds: Vec<&str> = page.content.iter().map(ContentRecord::kind).collect();
    assert_eq!(kinds, vec!["paragraph", "paragraph", "header"]);
    assert_eq!(page.content[2].text(), Some("HeadingAfter"));
}

#[test]
fn test_extract_comments_are_ignored() {
    let page = extract_page("<body><!-- hidden --><p>Shown</p><!-- also hidden --></body>");

    assert_eq!(
        page.content,
        vec![ContentRecord::Paragraph {
            text: "Shown".to_string()
        }]
    );
}

#[test]
fn test_extract_deeply_nested_document() {
    let depth = 5_000;
    let html = format!(
        "<body>{}<p>bottom</p>{}</body>",
        "<span>".repeat(depth),
        "</span>".repeat(depth)
    );

    let page = extract_page(&html);

    assert_eq!(
        page.content,
        vec![ContentRecord::Paragraph {
            text: "bottom".to_string()
        }]
    );
}

#[test]
fn test_extract_invalid_utf8_bytes() {
    let page = extract_page_bytes(b"<body><p>ok \xFF\xFE bytes</p></body>");

    assert_eq!(page.content.len(), 1);
    let text = page.content[0].text().unwrap_or_default();
    assert!(text.starts_with("ok "));
    assert!(text.contains('\u{FFFD}'));
}

#[test]
fn test_extract_document_matches_extract_page() {
    let html = "<title>Same</title><body><h1>A</h1>loose<p>B</p></body>";
    let document = dom::parse(html);

    assert_eq!(extract_document(&document, &Options::default()), extract_page(html));
}

#[test]
fn test_extract_element_flattens_subtree_only() {
    let document = dom::parse(
        r#"<body><p>outside</p><section id="main"><h2>In</h2><a href="/a">A</a></section></body>"#,
    );
    let section = document.select("#main");

    let records = extract_element(&section, &Options::default());

    let kinds: Vec<&str> = records.iter().map(ContentRecord::kind).collect();
    assert_eq!(kinds, vec!["header", "link"]);
}

#[test]
fn test_extract_element_on_terminal_root_walks_its_children() {
    let document = dom::parse("<body><p>Para <a href='/x'>inner</a></p></body>");
    let paragraph = document.select("p");

    // The root itself is never classified, only its children.
    let records = extract_element(&paragraph, &Options::default());

    assert_eq!(
        records,
        vec![
            ContentRecord::Text {
                text: "Para".to_string()
            },
            ContentRecord::Link {
                text: "inner".to_string(),
                href: "/x".to_string()
            },
        ]
    );
}

#[test]
fn test_skipping_terminal_tags() {
    let options = Options {
        skip_tags: vec!["TABLE".to_string(), "ul".to_string()],
    };
    let html = "<body><ul><li>x</li></ul><table><tr><td>y</td></tr></table><ol><li>z</li></ol></body>";

    let page = rs_webscrape::extract_page_with_options(html, &options);

    assert_eq!(
        page.content,
        vec![ContentRecord::List {
            items: vec!["z".to_string()],
            ordered: true
        }]
    );
}
