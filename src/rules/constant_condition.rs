use super::{Diagnostic, Rule, Severity};
use crate::engine::AnalysisContext;
use syn::visit::Visit;
use syn::{Expr, ExprIf, ExprLit, Lit};

/// Detects `if` conditions that are literally `true` or `false`
pub struct ConstantConditionRule;

impl Rule for ConstantConditionRule {
    fn id(&self) -> &'static str {
        "constant-condition"
    }

    fn name(&self) -> &'static str {
        "Constant Condition"
    }

    fn description(&self) -> &'static str {
        "Detects if conditions that are always true or always false"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &AnalysisContext) -> Vec<Diagnostic> {
        let mut visitor = ConstantConditionVisitor {
            ctx,
            diagnostics: Vec::new(),
        };
        visitor.visit_file(ctx.ast);
        visitor.diagnostics
    }
}

struct ConstantConditionVisitor<'a> {
    ctx: &'a AnalysisContext<'a>,
    diagnostics: Vec<Diagnostic>,
}

impl<'ast> Visit<'ast> for ConstantConditionVisitor<'_> {
    fn visit_expr_if(&mut self, node: &'ast ExprIf) {
        if let Expr::Lit(ExprLit {
            lit: Lit::Bool(lit),
            ..
        }) = &*node.cond
        {
            let span = lit.span;
            self.diagnostics.push(Diagnostic {
                rule_id: "constant-condition",
                severity: Severity::Warning,
                message: format!("Condition is always `{}`", lit.value),
                file_path: self.ctx.file_path.to_path_buf(),
                line: span.start().line,
                column: span.start().column,
                end_line: Some(span.end().line),
                end_column: Some(span.end().column),
                suggestion: Some(if lit.value {
                    "Replace the `if` expression with its then branch".to_string()
                } else {
                    "Replace the `if` expression with its else branch, or delete it".to_string()
                }),
            });
        }
        // Recurses into both branches; an `else if` chain is nested ExprIf
        // nodes, so every arm's condition gets checked.
        syn::visit::visit_expr_if(self, node);
    }
}
