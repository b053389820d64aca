//! MediaWiki format tests

use crate::common::fixture_document;
use hashmark_babel::format::Format;
use hashmark_babel::formats::wiki::WikiFormat;
use hashmark_babel::FormatRegistry;
use hashmark_core::parse_document;
use insta::assert_snapshot;
use std::collections::HashMap;

fn hm_to_wiki(src: &str) -> String {
    WikiFormat.serialize(&parse_document(src)).unwrap()
}

#[test]
fn test_heading_levels() {
    assert_snapshot!(hm_to_wiki("#One\n##Two\n###Three\n"), @"=One===Two=====Three===");
}

#[test]
fn test_bold() {
    assert_snapshot!(hm_to_wiki("a **b** c"), @"a '''b''' c");
}

#[test]
fn test_single_stars_are_literal() {
    assert_snapshot!(hm_to_wiki("*not bold*"), @"*not bold*");
}

#[test]
fn test_kitchensink() {
    let wiki = WikiFormat
        .serialize(&fixture_document("kitchensink.hm"))
        .unwrap();

    assert_eq!(
        wiki,
        concat!(
            "Preamble with '''bold''' text.\n",
            "= Introduction=Welcome to '''hashmark'''.\n",
            "== Details==Nested *stars* stay literal.\n",
            "=== Deep===Deepest.\n",
            "== Empty==",
            "= Appendix=Closing words\n",
        )
    );
}

#[test]
fn test_wiki_rejects_options() {
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("standalone".to_string(), "true".to_string());

    let result = registry.serialize_with_options(&parse_document("x"), "wiki", &options);
    assert!(result.is_err());
}

#[test]
fn test_detected_from_extension() {
    let registry = FormatRegistry::default();
    assert_eq!(
        registry.detect_format_from_filename("page.mediawiki"),
        Some("wiki".to_string())
    );
}
