//! Plain text format tests
//!
//! The plain format both reads and writes hashmark source.

mod export;
