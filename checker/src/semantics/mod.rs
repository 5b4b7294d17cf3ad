// checker/src/semantics/mod.rs
pub mod analyzer;
pub mod errors;
pub mod evaluator;
pub mod reporter;
pub mod symbols;
pub mod value;

pub use analyzer::SemanticAnalyzer;
pub use errors::{Diagnostic, ErrorKind, EvalError, Warning, WarningKind};
pub use evaluator::Evaluator;
pub use reporter::ErrorReporter;
pub use symbols::{Symbol, SymbolSnapshot, SymbolTable};
pub use value::{Type, Value};
