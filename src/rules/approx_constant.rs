use super::{Diagnostic, Rule, Severity};
use crate::catalog;
use crate::engine::AnalysisContext;
use syn::visit::Visit;
use syn::Lit;

/// Detects float literals that approximate a constant from std::f64::consts
pub struct ApproxConstantRule;

impl Rule for ApproxConstantRule {
    fn id(&self) -> &'static str {
        "approx-constant"
    }

    fn name(&self) -> &'static str {
        "Approximate Constant"
    }

    fn description(&self) -> &'static str {
        "Detects float literals that approximate a constant from std::f64::consts or std::f32::consts"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &AnalysisContext) -> Vec<Diagnostic> {
        let mut visitor = ApproxConstantVisitor {
            ctx,
            diagnostics: Vec::new(),
        };
        visitor.visit_file(ctx.ast);
        visitor.diagnostics
    }
}

struct ApproxConstantVisitor<'a> {
    ctx: &'a AnalysisContext<'a>,
    diagnostics: Vec<Diagnostic>,
}

impl<'ast> Visit<'ast> for ApproxConstantVisitor<'_> {
    fn visit_lit(&mut self, node: &'ast Lit) {
        // Only float literals are candidates; `2` never approximates anything
        // even where `2.0` might.
        if let Lit::Float(lit) = node {
            // A literal the token parser accepted but f64 cannot represent is
            // skipped, not reported.
            let Ok(value) = lit.base10_parse::<f64>() else {
                return;
            };

            if let Some(constant) = catalog::find_match(value) {
                let suffix = match lit.suffix() {
                    "" => "f64",
                    other => other,
                };
                let path = format!("std::{}::consts::{}", suffix, constant.name);
                let span = lit.span();

                self.diagnostics.push(Diagnostic {
                    rule_id: "approx-constant",
                    severity: Severity::Warning,
                    message: format!(
                        "Approximate value of `{}` found. Consider using it directly.",
                        path
                    ),
                    file_path: self.ctx.file_path.to_path_buf(),
                    line: span.start().line,
                    column: span.start().column,
                    end_line: Some(span.end().line),
                    end_column: Some(span.end().column),
                    suggestion: Some(format!("Replace the literal with `{}`", path)),
                });
            }
        }
        syn::visit::visit_lit(self, node);
    }
}
