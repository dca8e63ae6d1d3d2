//! Inline suppression support for cargo-approx diagnostics.
//!
//! Supports suppressing warnings with:
//! - `#[allow(cargo_approx::rule_id)]` - suppress specific rule
//! - `#[allow(cargo_approx::all)]` - suppress all cargo-approx warnings
//! - `// cargo-approx-ignore: rule_id` - line-level suppression

use std::collections::{HashMap, HashSet};
use syn::spanned::Spanned;
use syn::visit::Visit;
use syn::{Attribute, File, ItemConst, ItemFn, ItemImpl, ItemMod};

const IGNORE_MARKER: &str = "cargo-approx-ignore";
const ATTR_NAMESPACE: &str = "cargo_approx";

/// Extracts all cargo_approx suppressions from a file.
pub struct SuppressionExtractor {
    /// Suppressions by line number: (line, set of suppressed rule IDs)
    pub line_suppressions: HashMap<usize, HashSet<String>>,
    /// Global suppressions that apply to the entire file
    pub file_suppressions: HashSet<String>,
}

impl SuppressionExtractor {
    /// Extract suppressions from source code and AST.
    pub fn new(source: &str, ast: &File) -> Self {
        let mut extractor = Self {
            line_suppressions: HashMap::new(),
            file_suppressions: HashSet::new(),
        };

        extractor.extract_comment_suppressions(source);
        extractor.visit_file(ast);

        // File-level `#![allow(...)]` attributes
        for attr in &ast.attrs {
            for rule_id in suppressed_rules(attr) {
                extractor.file_suppressions.insert(rule_id);
            }
        }

        extractor
    }

    /// Check if a diagnostic at the given line should be suppressed.
    pub fn is_suppressed(&self, rule_id: &str, line: usize) -> bool {
        if self.file_suppressions.contains("all") || self.file_suppressions.contains(rule_id) {
            return true;
        }

        if let Some(suppressions) = self.line_suppressions.get(&line) {
            if suppressions.contains("all") || suppressions.contains(rule_id) {
                return true;
            }
        }

        false
    }

    /// Extract `// cargo-approx-ignore: rule_id` comments.
    ///
    /// A marker suppresses the line below it; a bare marker with no rule list
    /// suppresses everything on that line.
    fn extract_comment_suppressions(&mut self, source: &str) {
        for (line_num, line) in source.lines().enumerate() {
            let line_num = line_num + 1; // 1-indexed

            let Some(idx) = line.find(IGNORE_MARKER) else {
                continue;
            };
            let rest = line[idx + IGNORE_MARKER.len()..]
                .trim_start_matches(':')
                .trim();

            let suppressions = self.line_suppressions.entry(line_num + 1).or_default();

            if rest.is_empty() || rest == "all" {
                suppressions.insert("all".to_string());
            } else {
                for rule in rest.split(',') {
                    let rule = rule.trim();
                    if !rule.is_empty() {
                        suppressions.insert(rule.to_string());
                    }
                }
            }
        }
    }

    /// Apply item-level `#[allow(cargo_approx::...)]` attributes to every
    /// line the item spans.
    fn add_item_suppressions(&mut self, attrs: &[Attribute], start_line: usize, end_line: usize) {
        let mut rules_to_suppress = HashSet::new();
        for attr in attrs {
            rules_to_suppress.extend(suppressed_rules(attr));
        }

        if !rules_to_suppress.is_empty() {
            for line in start_line..=end_line {
                self.line_suppressions
                    .entry(line)
                    .or_default()
                    .extend(rules_to_suppress.iter().cloned());
            }
        }
    }
}

/// Rule IDs named by a `#[allow(cargo_approx::...)]` attribute.
fn suppressed_rules(attr: &Attribute) -> Vec<String> {
    let mut rules = Vec::new();

    if !attr.path().is_ident("allow") {
        return rules;
    }

    if let Ok(nested) = attr.parse_args_with(
        syn::punctuated::Punctuated::<syn::Path, syn::Token![,]>::parse_terminated,
    ) {
        for path in nested {
            let segments: Vec<_> = path
                .segments
                .iter()
                .map(|s| s.ident.to_string())
                .collect();

            if segments.first().map(|s| s.as_str()) == Some(ATTR_NAMESPACE) {
                let rule_id = segments.get(1).map(|s| s.as_str()).unwrap_or("all");
                rules.push(rule_id.replace('_', "-"));
            }
        }
    }

    rules
}

impl<'ast> Visit<'ast> for SuppressionExtractor {
    fn visit_item_fn(&mut self, node: &'ast ItemFn) {
        let start = node.sig.fn_token.span.start().line;
        let end = node.block.brace_token.span.close().start().line;
        self.add_item_suppressions(&node.attrs, start, end);
        syn::visit::visit_item_fn(self, node);
    }

    fn visit_item_const(&mut self, node: &'ast ItemConst) {
        let start = node.const_token.span.start().line;
        let end = node.semi_token.span().start().line;
        self.add_item_suppressions(&node.attrs, start, end);
        syn::visit::visit_item_const(self, node);
    }

    fn visit_item_impl(&mut self, node: &'ast ItemImpl) {
        let start = node.impl_token.span.start().line;
        let end = node.brace_token.span.close().start().line;
        self.add_item_suppressions(&node.attrs, start, end);
        syn::visit::visit_item_impl(self, node);
    }

    fn visit_item_mod(&mut self, node: &'ast ItemMod) {
        if let Some((brace, _)) = &node.content {
            let start = node.mod_token.span.start().line;
            let end = brace.span.close().start().line;
            self.add_item_suppressions(&node.attrs, start, end);
        }
        syn::visit::visit_item_mod(self, node);
    }
}
