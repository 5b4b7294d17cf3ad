// checker/src/lib.rs
pub mod ast;
pub mod config;
pub mod error;
pub mod report;
pub mod semantics;

use std::thread;

use ast::Program;
use config::CheckConfig;
use report::Analysis;
use semantics::SemanticAnalyzer;

pub use config::ErrorPolicy;
pub use error::{CheckError, CheckResult};

pub const VERSION: &str = "0.3.0";

// --- Checker ---

pub struct Checker {
    config: CheckConfig,
}

impl Checker {
    pub fn new() -> Self {
        Self::with_config(CheckConfig::default())
    }

    pub fn with_config(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn version() -> &'static str {
        VERSION
    }

    pub fn capabilities() -> Vec<&'static str> {
        vec![
            "Types: int, real, str, bool",
            "• Integer/real promotion",
            "• Exact integer exponentiation",
            "• Constant folding of assignments",
            "Diagnostics",
            "• Undefined names",
            "• Invalid operand types",
            "• Division by zero",
            "• Integer overflow",
            "Warnings",
            "• Variable changes type",
        ]
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Runs one pass over `program` with a fresh symbol table.
    pub fn check(&self, program: &Program) -> Analysis {
        let mut analyzer = SemanticAnalyzer::with_config(self.config.clone());
        analyzer.analyze(program);
        analyzer.into_analysis()
    }

    /// Checks independent programs on scoped threads, one contiguous chunk
    /// per available core. Results keep the input order.
    pub fn check_batch(&self, programs: &[Program]) -> Vec<Analysis> {
        if programs.is_empty() {
            return Vec::new();
        }
        let workers = thread::available_parallelism().map_or(1, |n| n.get());
        let chunk_size = programs.len().div_ceil(workers);

        thread::scope(|scope| {
            let handles: Vec<_> = programs
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || chunk.iter().map(|p| self.check(p)).collect::<Vec<_>>())
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| match handle.join() {
                    Ok(analyses) => analyses,
                    Err(payload) => std::panic::resume_unwind(payload),
                })
                .collect()
        })
    }

    /// Checks `program` and renders the report against its `source` text.
    pub fn check_and_render(&self, program: &Program, source: &str) -> String {
        self.check(program).render(source, self.config.color)
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot check with the default configuration.
pub fn check(program: &Program) -> Analysis {
    Checker::new().check(program)
}
