// This file is required to make `cargo test` discover tests in subdirectories.

#[cfg(test)]
mod common;

#[cfg(test)]
mod html;

#[cfg(test)]
mod plain;

#[cfg(test)]
mod wiki;
