// checker/src/report.rs
//! The outcome of one analysis pass, handed to printers and front ends.

use colored::Colorize;
use serde::Serialize;

use crate::ast::Span;
use crate::error::CheckResult;
use crate::semantics::errors::paint;
use crate::semantics::{Diagnostic, ErrorKind, SymbolSnapshot, Type, Value, Warning};

/// A successful assignment and the value it stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binding {
    pub statement: usize,
    pub span: Span,
    pub target: String,
    pub ty: Type,
    pub value: Value,
}

/// A resolved `print` argument. `None` is a bare `print()`. Formatting is
/// left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintEvent {
    pub statement: usize,
    pub span: Span,
    pub value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub diagnostics: Vec<Diagnostic>,
    pub warnings: Vec<Warning>,
    pub bindings: Vec<Binding>,
    pub prints: Vec<PrintEvent>,
    /// Final symbol table, in name order.
    pub symbols: Vec<SymbolSnapshot>,
    /// The error policy stopped the pass before the last statement.
    pub halted: bool,
}

impl Analysis {
    pub fn is_accepted(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn count_of(&self, kind: ErrorKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    pub fn first_error(&self) -> Option<&Diagnostic> {
        self.diagnostics.first()
    }

    /// Final value of `name`, or `Value::Undefined` if it was never bound.
    pub fn value_of(&self, name: &str) -> Value {
        self.symbols
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value.clone())
            .unwrap_or(Value::Undefined)
    }

    pub fn type_of(&self, name: &str) -> Option<Type> {
        self.symbols.iter().find(|s| s.name == name).map(|s| s.ty)
    }

    /// Every value `name` held, in program order.
    pub fn history_of(&self, name: &str) -> Vec<&Value> {
        self.bindings
            .iter()
            .filter(|b| b.target == name)
            .map(|b| &b.value)
            .collect()
    }

    /// Full report against `source`. With `color` off no escape codes are
    /// emitted, whatever the terminal supports.
    pub fn render(&self, source: &str, color: bool) -> String {
        let mut out = String::new();
        for diagnostic in &self.diagnostics {
            out.push_str(&diagnostic.format_with_source(source, color));
        }
        for warning in &self.warnings {
            out.push_str(&warning.format_styled(color));
            out.push('\n');
        }

        let verdict = if self.is_accepted() {
            "accepted".green().bold()
        } else {
            "rejected".red().bold()
        };
        out.push_str(&format!(
            "{} ({} error(s), {} warning(s))\n",
            paint(verdict, color),
            self.diagnostics.len(),
            self.warnings.len()
        ));
        out
    }

    pub fn to_json(&self) -> CheckResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
