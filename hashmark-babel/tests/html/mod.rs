//! HTML format tests

mod export;
