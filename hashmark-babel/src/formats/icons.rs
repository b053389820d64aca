//! Shared icon mapping for tree visualization formats

/// Get the Unicode icon for a given AST node type
///
/// Returns a single Unicode character that visually represents the node type.
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Section" => "§",
        "Title" => "⊤",
        "Paragraph" => "¶",
        "PlainText" => "◦",
        "BoldText" => "𝐁",
        "Newline" => "↵",
        _ => "○",
    }
}
