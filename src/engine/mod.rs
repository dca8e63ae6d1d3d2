//! Analysis engine - coordinates file discovery and rule execution.

mod context;
mod parser;

pub use context::AnalysisContext;

use crate::error::Error;
use crate::rules::{registry, Diagnostic};
use crate::suppression::SuppressionExtractor;
use crate::Config;
use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Maximum file size to analyze (10 MB)
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

pub struct Engine<'a> {
    config: &'a Config,
}

impl<'a> Engine<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Analyze every Rust file under `path`.
    ///
    /// Files are independent, so rule passes run in parallel, one file per
    /// task; the result vector still follows discovery order. Per-file
    /// failures are reported as warnings and do not abort the run.
    pub fn analyze(&self, path: &Path) -> Result<Vec<Diagnostic>> {
        let files = discover_rust_files(path);

        let results: Vec<(PathBuf, crate::error::Result<Vec<Diagnostic>>)> = files
            .into_par_iter()
            .map(|file| {
                let result = self.analyze_file(&file);
                (file, result)
            })
            .collect();

        let mut all_diagnostics = Vec::new();
        for (file, result) in results {
            match result {
                Ok(diagnostics) => all_diagnostics.extend(diagnostics),
                Err(e) => eprintln!("Warning: Failed to analyze {}: {}", file.display(), e),
            }
        }

        Ok(all_diagnostics)
    }

    fn analyze_file(&self, file_path: &Path) -> crate::error::Result<Vec<Diagnostic>> {
        let source =
            std::fs::read_to_string(file_path).map_err(|e| Error::io(file_path, e))?;
        let ast = parser::parse_file(file_path, &source)?;

        let suppressions = SuppressionExtractor::new(&source, &ast);
        let ctx = AnalysisContext::new(file_path, &source, &ast, self.config);

        let mut diagnostics = Vec::new();

        for rule in registry::all_rules() {
            // Config can disable a rule entirely or override its severity
            let Some(severity) = self
                .config
                .rule_severity(rule.id(), rule.default_severity())
            else {
                continue;
            };

            for mut diagnostic in rule.check(&ctx) {
                if suppressions.is_suppressed(rule.id(), diagnostic.line) {
                    continue;
                }
                diagnostic.severity = severity;
                diagnostics.push(diagnostic);
            }
        }

        Ok(diagnostics)
    }
}

/// Discover all Rust files at `path`, a file or a directory.
fn discover_rust_files(path: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    // Symlink following stays off so a link inside the tree cannot pull in
    // files outside it.
    for entry in WalkDir::new(path)
        .follow_links(false)
        .follow_root_links(false)
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e))
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let file_path = entry.path();

        if !file_path.extension().is_some_and(|ext| ext == "rs") {
            continue;
        }

        // Re-check through symlink_metadata: the walk's file_type can race
        // with a path being swapped for a link.
        match std::fs::symlink_metadata(file_path) {
            Ok(meta) if meta.is_file() => {
                if meta.len() > MAX_FILE_SIZE {
                    eprintln!(
                        "Warning: Skipping {} (file too large: {} bytes, max: {} bytes)",
                        file_path.display(),
                        meta.len(),
                        MAX_FILE_SIZE
                    );
                    continue;
                }
            }
            Ok(_) => continue,
            Err(e) => {
                eprintln!(
                    "Warning: Cannot read metadata for {}: {}",
                    file_path.display(),
                    e
                );
                continue;
            }
        }

        files.push(file_path.to_path_buf());
    }

    files
}

/// Check if a directory entry should be excluded from traversal.
///
/// This excludes:
/// - `target` directories (Cargo build output)
/// - Hidden directories (starting with `.`)
/// - Common dependency/build directories
fn is_excluded_dir(entry: &walkdir::DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();

    if name == "target" {
        return true;
    }

    if name.starts_with('.') {
        return true;
    }

    matches!(
        name.as_ref(),
        "node_modules" | "vendor" | "third_party" | "build" | "dist" | "out"
    )
}
