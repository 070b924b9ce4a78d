//! Check Reports
//!
//! Severity is explicit rather than encoded only in exit-code magnitude:
//! a warning still exits 0, and each fatal finding carries its own code.

use std::fmt;
use std::process::ExitCode;

/// Outcome of a single finding, ordered from best to worst
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Ok,
    Warning,
    Fatal,
}

/// One line of a report
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
    exit_code: u8,
}

impl Finding {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Ok,
            message: message.into(),
            exit_code: 0,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            exit_code: 0,
        }
    }

    /// A failing finding; `exit_code` must be nonzero.
    pub fn fatal(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Fatal,
            message: message.into(),
            exit_code: exit_code.max(1),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Ok | Severity::Fatal => f.write_str(&self.message),
            Severity::Warning => write!(f, "warning: {}", self.message),
        }
    }
}

/// Findings of one check invocation, in the order they were made
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    findings: Vec<Finding>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    #[must_use]
    pub fn with(mut self, finding: Finding) -> Self {
        self.push(finding);
        self
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Worst severity in the report; an empty report is `Ok`
    pub fn severity(&self) -> Severity {
        self.findings
            .iter()
            .map(|f| f.severity)
            .max()
            .unwrap_or(Severity::Ok)
    }

    /// Exit code of the first fatal finding, or 0
    pub fn exit_code(&self) -> u8 {
        self.findings
            .iter()
            .find(|f| f.severity == Severity::Fatal)
            .map_or(0, |f| f.exit_code)
    }

    /// Print to stdout (ok) and stderr (warnings, failures)
    pub fn emit(&self) -> ExitCode {
        for finding in &self.findings {
            match finding.severity {
                Severity::Ok => println!("{finding}"),
                Severity::Warning | Severity::Fatal => eprintln!("{finding}"),
            }
        }
        ExitCode::from(self.exit_code())
    }
}
