//! cargo-approx: constant-recognition lints for Rust source
//!
//! Flags float literals that approximate a constant from `std::f64::consts`
//! and `if` conditions that are always true or false.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod reporter;
pub mod rules;
pub mod suppression;

mod error;

pub use config::Config;
pub use engine::{AnalysisContext, Engine};
pub use error::{Error, Result};
pub use rules::{Diagnostic, Rule, Severity};

/// Run analysis on a file or project directory
pub fn analyze(path: &std::path::Path, config: &Config) -> anyhow::Result<Vec<Diagnostic>> {
    let engine = Engine::new(config);
    engine.analyze(path)
}
