// checker/src/config.rs
//! Checker configuration.
//!
//! Settings only describe policy; the analyzer applies them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CheckError, CheckResult};

/// What the analyzer does after recording a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Keep analyzing later statements.
    #[default]
    Accumulate,
    /// Halt at the first diagnostic.
    StopAtFirst,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    pub error_policy: ErrorPolicy,

    /// Halt once this many diagnostics have been recorded.
    pub max_diagnostics: Option<usize>,

    /// Warn when a reassignment changes a variable's type.
    pub warn_on_retype: bool,

    /// Colorize rendered reports.
    pub color: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            error_policy: ErrorPolicy::Accumulate,
            max_diagnostics: None,
            warn_on_retype: true,
            color: true,
        }
    }
}

impl CheckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_at_first() -> Self {
        Self {
            error_policy: ErrorPolicy::StopAtFirst,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> CheckResult<Self> {
        let config: CheckConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> CheckResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> CheckResult<()> {
        if self.max_diagnostics == Some(0) {
            return Err(CheckError::InvalidConfig(
                "max_diagnostics must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// True once `recorded` diagnostics mean the pass must stop.
    pub fn should_halt(&self, recorded: usize) -> bool {
        if recorded == 0 {
            return false;
        }
        match self.error_policy {
            ErrorPolicy::StopAtFirst => true,
            ErrorPolicy::Accumulate => self.max_diagnostics.map_or(false, |max| recorded >= max),
        }
    }
}
