//! Export tests for HTML format (hashmark → HTML)
//!
//! These tests verify that hashmark documents are correctly converted to HTML
//! by checking the resulting markup.

use crate::common::fixture_document;
use hashmark_babel::format::Format;
use hashmark_babel::formats::html::HtmlFormat;
use hashmark_babel::FormatRegistry;
use hashmark_core::parse_document;
use insta::assert_snapshot;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Helper to convert hashmark source to HTML
fn hm_to_html(src: &str) -> String {
    HtmlFormat::default().serialize(&parse_document(src)).unwrap()
}

// ============================================================================
// BASIC ELEMENT TESTS
// ============================================================================

#[test]
fn test_paragraph_simple() {
    assert_snapshot!(hm_to_html("This is a simple paragraph."), @"<p>This is a simple paragraph.</p>");
}

#[test]
fn test_heading_simple() {
    assert_snapshot!(hm_to_html("#Introduction\nSome content."), @"<section><h1>Introduction</h1><p>Some content.</p></section>");
}

#[test]
fn test_multiple_heading_levels() {
    let html = hm_to_html("#Level 1\n##Level 2\nContent here.");
    assert_eq!(
        html,
        "<section><h1>Level 1</h1><section><h2>Level 2</h2><p>Content here.</p></section></section>"
    );
}

#[test]
fn test_heading_keeps_its_leading_space() {
    assert_snapshot!(hm_to_html("# Spaced\nx"), @"<section><h1> Spaced</h1><p>x</p></section>");
}

#[test]
fn test_bold_inline() {
    assert_snapshot!(hm_to_html("some **strong** words"), @"<p>some <strong>strong</strong> words</p>");
}

#[test]
fn test_newlines_stay_inside_paragraph() {
    assert_eq!(hm_to_html("one\ntwo\n"), "<p>one\ntwo\n</p>");
}

#[test]
fn test_sibling_titles() {
    assert_snapshot!(hm_to_html("#A\n#B\n"), @"<h1>A</h1><h1>B</h1>");
}

#[test]
fn test_empty_document() {
    assert_eq!(hm_to_html(""), "");
}

// ============================================================================
// OPTIONS
// ============================================================================

#[test]
fn test_standalone_through_registry() {
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("standalone".to_string(), "true".to_string());

    let html = registry
        .serialize_with_options(&parse_document("#T\nbody"), "html", &options)
        .unwrap();

    assert!(html.starts_with("<!DOCTYPE html>\n"));
    assert!(html.contains("<title>Hashmark Document</title>"));
    assert!(html.contains("<section><h1>T</h1><p>body</p></section>"));
    assert!(html.ends_with("</html>\n"));
}

// ============================================================================
// FIXTURES
// ============================================================================

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?(section|h[1-6]|p|strong)>").expect("valid regex for tags"));

#[test]
fn test_kitchensink() {
    let html = HtmlFormat::default()
        .serialize(&fixture_document("kitchensink.hm"))
        .unwrap();

    assert_eq!(
        html,
        concat!(
            "<p>Preamble with <strong>bold</strong> text.\n</p>",
            "<section><h1> Introduction</h1><p>Welcome to <strong>hashmark</strong>.\n</p>",
            "<section><h2> Details</h2><p>Nested *stars* stay literal.\n</p>",
            "<section><h3> Deep</h3><p>Deepest.\n</p></section></section>",
            "<h2> Empty</h2></section>",
            "<section><h1> Appendix</h1><p>Closing words\n</p></section>",
        )
    );
}

#[test]
fn test_kitchensink_tags_are_balanced() {
    let html = HtmlFormat::default()
        .serialize(&fixture_document("kitchensink.hm"))
        .unwrap();

    let mut stack = Vec::new();
    for tag in TAG_REGEX.find_iter(&html) {
        let tag = tag.as_str();
        if let Some(name) = tag.strip_prefix("</") {
            assert_eq!(stack.pop(), Some(format!("<{name}")), "unbalanced {tag}");
        } else {
            stack.push(tag.to_string());
        }
    }
    assert!(stack.is_empty());
}
