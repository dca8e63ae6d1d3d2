use crate::Config;
use std::path::Path;

/// Context passed to rules during analysis
pub struct AnalysisContext<'a> {
    pub file_path: &'a Path,
    pub source: &'a str,
    pub ast: &'a syn::File,
    pub config: &'a Config,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(file_path: &'a Path, source: &'a str, ast: &'a syn::File, config: &'a Config) -> Self {
        Self {
            file_path,
            source,
            ast,
            config,
        }
    }
}
