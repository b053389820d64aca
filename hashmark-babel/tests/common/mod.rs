//! Shared helpers for the format tests.

use hashmark_core::{parse_document, Document};
use std::path::PathBuf;

/// Read a fixture from `tests/fixtures`
pub fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// Parse a fixture into a document
pub fn fixture_document(name: &str) -> Document {
    parse_document(&load_fixture(name))
}

#[test]
fn test_kitchensink_shape() {
    let doc = fixture_document("kitchensink.hm");
    let types: Vec<_> = doc.children.iter().map(|block| block.node_type()).collect();
    assert_eq!(types, vec!["Paragraph", "Section", "Section"]);

    let intro = doc.children[1].as_section().unwrap();
    let types: Vec<_> = intro.children.iter().map(|block| block.node_type()).collect();
    assert_eq!(types, vec!["Paragraph", "Section", "Title"]);
}
