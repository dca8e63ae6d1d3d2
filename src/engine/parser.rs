//! Rust source code parser for cargo-approx.
//!
//! Thin wrapper around the `syn` parser, mapping syntax errors into the
//! crate's error type so callers carry the file path with the failure.

use crate::error::{Error, Result};
use std::path::Path;

/// Parse a Rust source file into an AST.
///
/// The `syn` parser builds a complete in-memory AST, which can be substantial
/// for large files; the engine caps file size before calling this.
pub fn parse_file(path: &Path, source: &str) -> Result<syn::File> {
    syn::parse_file(source).map_err(|e| Error::parse(path, e.to_string()))
}
