//! CLI-specific transforms
//!
//! This module defines all the transform combinations available in the CLI.
//! Each transform is a stage + format combination (e.g., "ast-tag", "token-json").
//!
//! ## Transform Pipeline
//!
//! 1. **Tokenization** - Raw text → Token stream
//!    - `token-simple`: one token per line
//!    - `token-json`: tokens with their byte ranges
//!
//! 2. **Parsing** - Tokens → Document tree
//!    - `ast-tag`: XML-like tag format
//!    - `ast-treeviz`: Tree visualization with Unicode icons
//!    - `ast-json`: JSON representation
//!
//! ## Extra Parameters
//!
//! - `spans`: When set to "true", `token-simple` prints the byte range of every token.
//!
//! Example: `hashmark inspect notes.hm token-simple --extra-spans`

use hashmark_babel::formats::{tag::serialize_document, treeviz::to_treeviz_str};
use hashmark_core::{parse_tokens, tokenize_with_spans, Token};
use std::collections::HashMap;
use std::ops::Range;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "token-simple",
    "token-json",
    "ast-tag",
    "ast-treeviz",
    "ast-json",
];

/// Transform used by `hashmark inspect` when none is given
pub const DEFAULT_TRANSFORM: &str = "ast-treeviz";

/// Execute a named transform on a source file with optional extra parameters
///
/// # Examples
///
/// ```ignore
/// let params = HashMap::new();
/// let output = execute_transform("# Title\nBody\n", "ast-treeviz", &params)?;
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let show_spans = extra_params
        .get("spans")
        .is_some_and(|v| v.to_lowercase() == "true");

    let tokens = tokenize_with_spans(source);
    log::debug!("{transform_name}: {} token(s)", tokens.len());

    match transform_name {
        "token-simple" => Ok(tokens_to_simple(&tokens, show_spans)),
        "token-json" => serde_json::to_string_pretty(&tokens_to_json(&tokens))
            .map_err(|e| format!("JSON serialization failed: {e}")),
        "ast-tag" | "ast-treeviz" | "ast-json" => {
            let plain: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
            let doc = parse_tokens(&plain);
            match transform_name {
                "ast-tag" => Ok(serialize_document(&doc)),
                "ast-treeviz" => Ok(to_treeviz_str(&doc)),
                _ => serde_json::to_string_pretty(&doc)
                    .map_err(|e| format!("JSON serialization failed: {e}")),
            }
        }
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

/// Convert tokens to JSON-serializable format
fn tokens_to_json(tokens: &[(Token, Range<usize>)]) -> serde_json::Value {
    use serde_json::json;

    json!(tokens
        .iter()
        .map(|(token, range)| {
            json!({
                "token": token,
                "start": range.start,
                "end": range.end,
            })
        })
        .collect::<Vec<_>>())
}

fn tokens_to_simple(tokens: &[(Token, Range<usize>)], show_spans: bool) -> String {
    tokens
        .iter()
        .map(|(token, range)| {
            if show_spans {
                format!("{token} {}..{}", range.start, range.end)
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
