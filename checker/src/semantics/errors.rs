// checker/src/semantics/errors.rs
use colored::{ColoredString, Colorize};
use serde::Serialize;
use thiserror::Error;

use crate::ast::{BinaryOp, Span};
use crate::semantics::value::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    UndefinedIdentifier,
    TypeMismatch,
    DivisionByZero,
    IntegerOverflow,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::UndefinedIdentifier => "E001",
            ErrorKind::TypeMismatch => "E002",
            ErrorKind::DivisionByZero => "E003",
            ErrorKind::IntegerOverflow => "E004",
        }
    }
}

/// Failure while evaluating one right-hand side. Carries no location; the
/// analyzer attaches the statement span when turning it into a `Diagnostic`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("name '{name}' is not defined")]
    UndefinedIdentifier { name: String },

    #[error("invalid operand types")]
    TypeMismatch {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },

    #[error("ZeroDivisionError: division by zero")]
    DivisionByZero { op: BinaryOp },

    #[error("integer overflow in '{op}'")]
    IntegerOverflow { op: BinaryOp },
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::UndefinedIdentifier { .. } => ErrorKind::UndefinedIdentifier,
            EvalError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            EvalError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            EvalError::IntegerOverflow { .. } => ErrorKind::IntegerOverflow,
        }
    }

    fn hint(&self) -> Option<String> {
        match self {
            EvalError::UndefinedIdentifier { name } => {
                Some(format!("assign a value to '{}' before using it", name))
            }
            EvalError::TypeMismatch { op, left, right } if op.is_arithmetic() => Some(format!(
                "'{}' is not defined for {} and {}", op, left, right
            )),
            EvalError::TypeMismatch { op, left, right } => Some(format!(
                "cannot compare {} with {} using '{}'", left, right, op
            )),
            EvalError::DivisionByZero { op } => Some(format!("right operand of '{}' is zero", op)),
            EvalError::IntegerOverflow { .. } => None,
        }
    }
}

/// One reported semantic error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub code: &'static str,
    pub message: String,
    pub span: Span,
    /// Index of the offending statement in the program.
    pub statement: usize,
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn from_eval(error: &EvalError, span: Span, statement: usize) -> Self {
        let kind = error.kind();
        Self {
            kind,
            code: kind.code(),
            message: error.to_string(),
            span,
            statement,
            hint: error.hint(),
        }
    }

    pub fn format_with_source(&self, source: &str, color: bool) -> String {
        let header = format!(
            "{}[{}]: {} (line {})",
            paint("semantic error".red().bold(), color),
            paint(self.code.cyan(), color),
            self.message,
            self.span.line
        );
        let mut result = header;
        result.push('\n');

        let lines: Vec<&str> = source.lines().collect();
        if self.span.line > 0 && self.span.line <= lines.len() {
            let line_content = lines[self.span.line - 1];
            let indicator = " ".repeat(self.span.column.saturating_sub(1)) + "^";
            result.push_str(&format!(
                "  {} {}\n  {} {}\n",
                paint(self.span.line.to_string().blue().bold(), color),
                line_content,
                " ".repeat(self.span.line.to_string().len()),
                paint(indicator.red().bold(), color)
            ));
        }

        if let Some(hint) = &self.hint {
            result.push_str(&format!("  {}: {}\n", paint("hint".green().bold(), color), hint));
        }

        result
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "**SEMANTIC ERROR: {} (line {})", self.message, self.span.line)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  hint: {}", hint)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningKind {
    RetypedVariable,
}

impl WarningKind {
    pub fn code(self) -> &'static str {
        match self {
            WarningKind::RetypedVariable => "W001",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub code: &'static str,
    pub message: String,
    pub span: Span,
}

impl Warning {
    pub fn retyped(name: &str, from: Type, to: Type, span: Span) -> Self {
        let kind = WarningKind::RetypedVariable;
        Self {
            kind,
            code: kind.code(),
            message: format!("'{}' changes type from {} to {}", name, from, to),
            span,
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "warning[{}]: {} (line {})", self.code, self.message, self.span.line)
    }
}

impl Warning {
    pub fn format_styled(&self, color: bool) -> String {
        format!(
            "{}[{}]: {} (line {})",
            paint("warning".yellow().bold(), color),
            paint(self.code.cyan(), color),
            self.message,
            self.span.line
        )
    }
}

/// Drops the styling when color is off for this render only.
pub(crate) fn paint(text: ColoredString, color: bool) -> ColoredString {
    if color {
        text
    } else {
        text.clear()
    }
}
