// checker/src/semantics/value.rs
use serde::Serialize;
use std::fmt;

use crate::ast::Literal;

/// The static type of a value. `Value::Undefined` has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Type {
    Integer,
    Real,
    String,
    Boolean,
}

impl Type {
    pub fn name(self) -> &'static str {
        match self {
            Type::Integer => "int",
            Type::Real => "real",
            Type::String => "str",
            Type::Boolean => "bool",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Integer(i64),
    Real(f64),
    String(String),
    Boolean(bool),
    Undefined,
}

impl Value {
    pub fn ty(&self) -> Option<Type> {
        match self {
            Value::Integer(_) => Some(Type::Integer),
            Value::Real(_) => Some(Type::Real),
            Value::String(_) => Some(Type::String),
            Value::Boolean(_) => Some(Type::Boolean),
            Value::Undefined => None,
        }
    }

    /// Name used in diagnostics; `undefined` for a missing value.
    pub fn type_name(&self) -> &'static str {
        self.ty().map(Type::name).unwrap_or("undefined")
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Int(i) => Value::Integer(*i),
            Literal::Real(r) => Value::Real(*r),
            Literal::Str(s) => Value::String(s.clone()),
            Literal::Bool(b) => Value::Boolean(*b),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => write!(f, "{}", r),
            Value::String(s) => write!(f, "'{}'", s),
            Value::Boolean(true) => write!(f, "True"),
            Value::Boolean(false) => write!(f, "False"),
            Value::Undefined => write!(f, "<undefined>"),
        }
    }
}
