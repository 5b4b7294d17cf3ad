// checker/src/semantics/analyzer.rs
use crate::ast::{Expr, Program, Span, Stmt};
use crate::config::CheckConfig;
use crate::report::{Analysis, Binding, PrintEvent};
use crate::semantics::errors::{Diagnostic, EvalError, Warning};
use crate::semantics::evaluator::Evaluator;
use crate::semantics::reporter::ErrorReporter;
use crate::semantics::symbols::SymbolTable;

/// Walks a program statement by statement, keeping the symbol table in step
/// with every successful assignment.
#[derive(Debug)]
pub struct SemanticAnalyzer {
    pub symbol_table: SymbolTable,
    pub reporter: ErrorReporter,
    pub warnings: Vec<Warning>,
    config: CheckConfig,
    bindings: Vec<Binding>,
    prints: Vec<PrintEvent>,
    halted: bool,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self::with_config(CheckConfig::default())
    }

    pub fn with_config(config: CheckConfig) -> Self {
        Self {
            symbol_table: SymbolTable::new(),
            reporter: ErrorReporter::new(),
            warnings: Vec::new(),
            config,
            bindings: Vec::new(),
            prints: Vec::new(),
            halted: false,
        }
    }

    pub fn analyze_program(&mut self, program: &Program) -> Result<(), Vec<Diagnostic>> {
        self.analyze(program);

        if self.reporter.has_errors() {
            Err(self.reporter.all().to_vec())
        } else {
            Ok(())
        }
    }

    /// Runs the pass, leaving diagnostics in `reporter`.
    pub fn analyze(&mut self, program: &Program) {
        for (index, stmt) in program.statements.iter().enumerate() {
            if self.halted {
                break;
            }
            self.analyze_statement(index, stmt);
        }
    }

    fn analyze_statement(&mut self, index: usize, stmt: &Stmt) {
        match stmt {
            Stmt::Assign(target, expr, span) => {
                self.analyze_assign_stmt(index, target, expr, *span);
            }

            Stmt::Print(arg, span) => {
                self.analyze_print_stmt(index, arg.as_ref(), *span);
            }

            Stmt::Pass(_) => {}
        }
    }

    fn analyze_assign_stmt(&mut self, index: usize, target: &str, expr: &Expr, span: Span) {
        let value = match Evaluator::new(&self.symbol_table).evaluate(expr) {
            Ok(value) => value,
            Err(e) => {
                self.report(&e, span, index);
                return;
            }
        };

        let new_type = value.ty();
        let previous = self.symbol_table.declare_or_update(target, value.clone());

        if self.config.warn_on_retype {
            if let (Some(previous), Some(new_type)) = (previous, new_type) {
                if previous.ty() != new_type {
                    self.warnings
                        .push(Warning::retyped(target, previous.ty(), new_type, span));
                }
            }
        }

        if let Some(ty) = new_type {
            self.bindings.push(Binding {
                statement: index,
                span,
                target: target.to_string(),
                ty,
                value,
            });
        }
    }

    fn analyze_print_stmt(&mut self, index: usize, arg: Option<&Expr>, span: Span) {
        let value = match arg {
            Some(expr) => match Evaluator::new(&self.symbol_table).evaluate(expr) {
                Ok(value) => Some(value),
                Err(e) => {
                    self.report(&e, span, index);
                    return;
                }
            },
            None => None,
        };

        self.prints.push(PrintEvent {
            statement: index,
            span,
            value,
        });
    }

    fn report(&mut self, error: &EvalError, span: Span, index: usize) {
        self.reporter.record(Diagnostic::from_eval(error, span, index));
        if self.config.should_halt(self.reporter.error_count()) {
            self.halted = true;
        }
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn into_analysis(self) -> Analysis {
        Analysis {
            symbols: self.symbol_table.snapshot(),
            diagnostics: self.reporter.take(),
            warnings: self.warnings,
            bindings: self.bindings,
            prints: self.prints,
            halted: self.halted,
        }
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
