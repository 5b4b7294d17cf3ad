// checker/src/semantics/symbols.rs
use serde::Serialize;
use std::collections::BTreeMap;

use crate::semantics::errors::EvalError;
use crate::semantics::value::{Type, Value};

/// A variable's current binding. Only built from a defined value, with the
/// type taken from that value, so the two never disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Symbol {
    pub name: String,
    ty: Type,
    value: Value,
}

impl Symbol {
    fn new(name: &str, value: Value) -> Option<Self> {
        let ty = value.ty()?;
        Some(Self {
            name: name.to_string(),
            ty,
            value,
        })
    }

    pub fn ty(&self) -> Type {
        self.ty
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

/// Flat, single-scope table for one analysis pass.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: BTreeMap<String, Symbol>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolSnapshot {
    pub name: String,
    pub ty: Type,
    pub value: Value,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            symbols: BTreeMap::new(),
        }
    }

    /// Binds `name` to `value`, replacing type and value of any earlier
    /// binding. Returns the replaced symbol. An `Undefined` value leaves the
    /// table unchanged, since a symbol only exists after a successful
    /// assignment.
    pub fn declare_or_update(&mut self, name: &str, value: Value) -> Option<Symbol> {
        let symbol = Symbol::new(name, value)?;
        self.symbols.insert(name.to_string(), symbol)
    }

    pub fn lookup(&self, name: &str) -> Result<Symbol, EvalError> {
        self.symbols
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::UndefinedIdentifier {
                name: name.to_string(),
            })
    }

    pub fn value_of(&self, name: &str) -> Value {
        self.symbols
            .get(name)
            .map(|symbol| symbol.value.clone())
            .unwrap_or(Value::Undefined)
    }

    pub fn type_of(&self, name: &str) -> Option<Type> {
        self.symbols.get(name).map(Symbol::ty)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    pub fn snapshot(&self) -> Vec<SymbolSnapshot> {
        self.iter()
            .map(|symbol| SymbolSnapshot {
                name: symbol.name.clone(),
                ty: symbol.ty,
                value: symbol.value.clone(),
            })
            .collect()
    }
}
