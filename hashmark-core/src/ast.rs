//! Document tree for the hashmark markup
//!
//! The tree is a closed set of tagged variants. Every non-root node is owned by its parent,
//! there is no sharing and no back-reference, and nothing is mutated once the parser has built
//! it. Renderers are read-only traversals over these types.
//!
//!     Document
//!     ├── Section { title, level }
//!     │   ├── Paragraph
//!     │   └── Section (deeper level)
//!     ├── Title                      # degenerate section: a heading with no body
//!     └── Paragraph
//!         ├── PlainText
//!         ├── BoldText
//!         └── Newline
//!
//! Section nesting invariant: a direct child `Section` always has a level strictly greater than
//! its parent's. The parser enforces it; the types do not.

use serde::Serialize;

/// Root of the tree. An empty document is a valid value, never an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub children: Vec<Block>,
}

impl Document {
    pub fn new(children: Vec<Block>) -> Self {
        Self { children }
    }

    /// The explicit result of parsing input that contains nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of tokens the tree was built from.
    ///
    /// A title accounts for its `#` markers, its text and its closing newline. Every inline
    /// accounts for its own tokens.
    pub fn token_count(&self) -> usize {
        self.children.iter().map(Block::token_count).sum()
    }
}

/// A block-level child of a document or section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Block {
    Section(Section),
    /// A heading that was not followed by any parseable body.
    Title(Title),
    Paragraph(Paragraph),
}

impl Block {
    pub fn node_type(&self) -> &'static str {
        match self {
            Block::Section(_) => "Section",
            Block::Title(_) => "Title",
            Block::Paragraph(_) => "Paragraph",
        }
    }

    /// Short human readable label, used by the inspection formats.
    pub fn display_label(&self) -> String {
        match self {
            Block::Section(section) => section.title.display_label(),
            Block::Title(title) => title.display_label(),
            Block::Paragraph(paragraph) => format!("{} inline(s)", paragraph.inlines.len()),
        }
    }

    /// Block children, for the variants that have them.
    pub fn children(&self) -> &[Block] {
        match self {
            Block::Section(section) => &section.children,
            Block::Title(_) | Block::Paragraph(_) => &[],
        }
    }

    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Block::Section(section) => Some(section),
            _ => None,
        }
    }

    pub fn as_title(&self) -> Option<&Title> {
        match self {
            Block::Title(title) => Some(title),
            _ => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }

    fn token_count(&self) -> usize {
        match self {
            Block::Section(section) => {
                section.title.token_count()
                    + section.children.iter().map(Block::token_count).sum::<usize>()
            }
            Block::Title(title) => title.token_count(),
            Block::Paragraph(paragraph) => paragraph.inlines.iter().map(Inline::token_count).sum(),
        }
    }
}

/// A heading together with the content nested under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: Title,
    pub level: usize,
    pub children: Vec<Block>,
}

impl Section {
    /// Build a section; its level is taken from the title.
    pub fn new(title: Title, children: Vec<Block>) -> Self {
        Self {
            level: title.level,
            title,
            children,
        }
    }
}

/// A heading: `level` leading `#` markers followed by a text run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    pub level: usize,
    pub text: String,
}

impl Title {
    pub fn new(level: usize, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn display_label(&self) -> String {
        format!("{} {}", "#".repeat(self.level), self.text.trim())
    }

    // Hash markers, the text run and the closing newline.
    fn token_count(&self) -> usize {
        self.level + 2
    }
}

/// A run of inline content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub inlines: Vec<Inline>,
}

impl Paragraph {
    pub fn new(inlines: Vec<Inline>) -> Self {
        Self { inlines }
    }

    /// Concatenated text of the paragraph, without any markup.
    pub fn text(&self) -> String {
        self.inlines
            .iter()
            .map(|inline| match inline {
                Inline::PlainText(text) | Inline::BoldText(text) => text.as_str(),
                Inline::Newline => "\n",
            })
            .collect()
    }
}

/// Inline content of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text")]
pub enum Inline {
    PlainText(String),
    BoldText(String),
    Newline,
}

impl Inline {
    pub fn plain(text: impl Into<String>) -> Self {
        Inline::PlainText(text.into())
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Inline::BoldText(text.into())
    }

    pub fn node_type(&self) -> &'static str {
        match self {
            Inline::PlainText(_) => "PlainText",
            Inline::BoldText(_) => "BoldText",
            Inline::Newline => "Newline",
        }
    }

    pub fn display_label(&self) -> String {
        match self {
            Inline::PlainText(text) | Inline::BoldText(text) => text.clone(),
            Inline::Newline => "↵".to_string(),
        }
    }

    fn token_count(&self) -> usize {
        match self {
            Inline::BoldText(_) => 3,
            Inline::PlainText(_) | Inline::Newline => 1,
        }
    }
}
