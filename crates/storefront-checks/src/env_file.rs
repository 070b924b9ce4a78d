//! Configuration Presence Checker
//!
//! Three tiers:
//!
//! | state                                  | severity | exit |
//! |----------------------------------------|----------|------|
//! | reference template missing             | Fatal    | 1    |
//! | actual file missing                    | Warning  | 0    |
//! | actual file present, key not assigned  | Fatal    | 2    |
//! | actual file present, key assigned      | Ok       | 0    |
//!
//! A `.env` the dotenv parser rejects adds a Warning and falls back to a
//! `KEY=` line match.
//!
//! A missing `.env` only means the operator has not scaffolded yet; the
//! relay still starts and reports the missing key per request.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CheckError, Result};
use crate::report::{Finding, Report};

pub const REFERENCE_FILE: &str = ".env.example";
pub const ACTUAL_FILE: &str = ".env";
pub const REQUIRED_KEY: &str = "STRIPE_SECRET_KEY";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvFileRule {
    pub dir: PathBuf,
    pub reference: String,
    pub actual: String,
    pub required_key: String,
}

impl EnvFileRule {
    /// The relay's `.env` must assign `STRIPE_SECRET_KEY`
    pub fn stripe(server_root: impl Into<PathBuf>) -> Self {
        Self {
            dir: server_root.into(),
            reference: REFERENCE_FILE.into(),
            actual: ACTUAL_FILE.into(),
            required_key: REQUIRED_KEY.into(),
        }
    }
}

/// Whether the dotenv file at `path` assigns `key`.
///
/// An empty value still counts as assigned.
pub fn assigns_key(path: &Path, key: &str) -> Result<bool> {
    let parse_error = |e: dotenvy::Error| CheckError::EnvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    for item in dotenvy::from_path_iter(path).map_err(parse_error)? {
        let (name, _) = item.map_err(parse_error)?;
        if name == key {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Line-based fallback for files the dotenv parser rejects.
///
/// Matches `KEY=` at the start of a non-comment line, with an optional
/// leading `export`.
pub fn assigns_key_line(content: &str, key: &str) -> bool {
    content.lines().any(|line| {
        let line = line.trim_start();
        if line.starts_with('#') {
            return false;
        }
        let line = line
            .strip_prefix("export ")
            .map_or(line, str::trim_start);
        line.strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='))
    })
}

/// `env-check`
pub fn check_env_file(rule: &EnvFileRule) -> Report {
    let mut report = Report::new();

    if !rule.dir.join(&rule.reference).exists() {
        return report.with(Finding::fatal(
            1,
            format!("{} not found — add one for reference.", rule.reference),
        ));
    }
    report.push(Finding::ok(format!("{} found", rule.reference)));

    let actual = rule.dir.join(&rule.actual);
    if !actual.exists() {
        return report.with(Finding::warning(format!(
            "{} not found. Use {} to create your {} with keys.",
            rule.actual, rule.reference, rule.actual
        )));
    }

    let assigned = match assigns_key(&actual, &rule.required_key) {
        Ok(assigned) => assigned,
        Err(e) => {
            tracing::debug!("dotenv parse failed, matching lines instead: {}", e);
            report.push(Finding::warning(e.to_string()));
            match fs::read_to_string(&actual) {
                Ok(content) => assigns_key_line(&content, &rule.required_key),
                Err(e) => {
                    return report.with(Finding::fatal(2, CheckError::io(&actual, e).to_string()));
                }
            }
        }
    };

    if assigned {
        report.with(Finding::ok(format!(
            "{} found in {} (verify it is the correct key for your environment)",
            rule.required_key, rule.actual
        )))
    } else {
        report.with(Finding::fatal(
            2,
            format!("{} not present in {}", rule.required_key, rule.actual),
        ))
    }
}
