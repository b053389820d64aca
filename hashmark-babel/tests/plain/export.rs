//! Export tests for the plain text format

use crate::common::{fixture_document, load_fixture};
use hashmark_babel::format::Format;
use hashmark_babel::formats::plain::{PlainOptions, PlainTextFormat};
use hashmark_babel::FormatRegistry;
use hashmark_core::parse_document;
use std::collections::HashMap;

#[test]
fn test_kitchensink() {
    let plain = PlainTextFormat::default()
        .serialize(&fixture_document("kitchensink.hm"))
        .unwrap();

    assert_eq!(
        plain,
        concat!(
            "Preamble with **bold** text.\n",
            "\n# Introduction\n\tWelcome to **hashmark**.\n\t",
            "\n\t## Details\n\t\tNested *stars* stay literal.\n\t\t",
            "\n\t\t### Deep\n\t\t\tDeepest.\n\t\t\t",
            "\n\t## Empty\n\t\t",
            "\n# Appendix\n\tClosing words\n\t",
        )
    );
}

#[test]
fn test_kitchensink_with_spaces() {
    let format = PlainTextFormat::new(PlainOptions::default().with_indent_string("  "));
    let plain = format.serialize(&fixture_document("kitchensink.hm")).unwrap();

    assert!(plain.contains("\n      Deepest.\n"));
    assert!(!plain.contains('\t'));
}

#[test]
fn test_parse_through_registry() {
    let registry = FormatRegistry::default();
    let source = load_fixture("kitchensink.hm");

    let doc = registry.parse(&source, "plain").unwrap();
    assert_eq!(doc, parse_document(&source));
}

#[test]
fn test_paragraph_without_headings_is_unchanged() {
    let source = "just **one** line\nand another";
    let plain = PlainTextFormat::default()
        .serialize(&parse_document(source))
        .unwrap();
    assert_eq!(plain, source);
}

#[test]
fn test_unmatched_markers_survive() {
    let plain = PlainTextFormat::default()
        .serialize(&parse_document("**x and #"))
        .unwrap();
    assert_eq!(plain, "**x and #");
}

#[test]
fn test_indent_string_via_registry() {
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("indent-string".to_string(), "--".to_string());

    let plain = registry
        .serialize_with_options(&parse_document("#A\n##B\nx"), "plain", &options)
        .unwrap();
    assert_eq!(plain, "\n#A\n--\n--##B\n----x");
}
