// checker/src/ast.rs
//! Parsed program representation consumed by the checker.
//!
//! An external parser builds these trees; the constructors below keep that
//! (and the test suite) free of `Box::new` noise.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn line(line: usize) -> Self {
        Self { line, column: 1 }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Real(f64),
    Str(String),
    Bool(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Eq,
    Neq,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinaryOp {
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod | BinaryOp::Pow
        )
    }

    /// `==` and `!=`, the only comparisons defined for strings.
    pub fn is_equality(self) -> bool {
        matches!(self, BinaryOp::Eq | BinaryOp::Neq)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "**",
            BinaryOp::Eq => "==",
            BinaryOp::Neq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Identifier(String),
    BinaryOp(Box<Expr>, BinaryOp, Box<Expr>),
}

impl Expr {
    pub fn int(value: i64) -> Self {
        Expr::Literal(Literal::Int(value))
    }

    pub fn real(value: f64) -> Self {
        Expr::Literal(Literal::Real(value))
    }

    pub fn string(value: &str) -> Self {
        Expr::Literal(Literal::Str(value.to_string()))
    }

    pub fn boolean(value: bool) -> Self {
        Expr::Literal(Literal::Bool(value))
    }

    pub fn var(name: &str) -> Self {
        Expr::Identifier(name.to_string())
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::BinaryOp(Box::new(left), op, Box::new(right))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign(String, Expr, Span),
    /// `print()` with no argument carries `None`.
    Print(Option<Expr>, Span),
    Pass(Span),
}

impl Stmt {
    pub fn assign(target: &str, expr: Expr, line: usize) -> Self {
        Stmt::Assign(target.to_string(), expr, Span::line(line))
    }

    pub fn print(expr: Expr, line: usize) -> Self {
        Stmt::Print(Some(expr), Span::line(line))
    }

    pub fn print_empty(line: usize) -> Self {
        Stmt::Print(None, Span::line(line))
    }

    pub fn pass(line: usize) -> Self {
        Stmt::Pass(Span::line(line))
    }

    pub fn span(&self) -> Span {
        match self {
            Stmt::Assign(_, _, span) | Stmt::Print(_, span) | Stmt::Pass(span) => *span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }
}
