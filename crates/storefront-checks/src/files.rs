//! File Rules
//!
//! Existence checks for fixed paths. Every rule is evaluated, so one run
//! lists everything that is wrong. A rule either expects its path to be
//! present (required files) or absent (forbidden files, such as a stray
//! `index.tsx` next to the client directory).

use std::path::{Path, PathBuf};

use crate::report::{Finding, Report};

/// Files the client cannot boot without, relative to the client root
pub const REQUIRED_CLIENT_FILES: [&str; 4] = [
    "index.html",
    "src/main.jsx",
    "src/App.jsx",
    "public/enemturbo.pdf",
];

/// A bundler may pick this up as the entry point if it sits beside the client
pub const FORBIDDEN_SIBLING: &str = "index.tsx";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expectation {
    Present,
    Absent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRule {
    pub path: PathBuf,
    pub expect: Expectation,
}

impl FileRule {
    pub fn present(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            expect: Expectation::Present,
        }
    }

    pub fn absent(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            expect: Expectation::Absent,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleResult {
    pub rule: FileRule,
    /// Whether anything exists at `root/rule.path`
    pub exists: bool,
}

impl RuleResult {
    pub fn satisfied(&self) -> bool {
        match self.rule.expect {
            Expectation::Present => self.exists,
            Expectation::Absent => !self.exists,
        }
    }
}

/// Ordered per-rule results plus the aggregate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileCheck {
    pub results: Vec<RuleResult>,
}

impl FileCheck {
    pub fn all_satisfied(&self) -> bool {
        self.results.iter().all(RuleResult::satisfied)
    }

    /// `(relative path, present)` pairs in rule order
    pub fn presence(&self) -> Vec<(&Path, bool)> {
        self.results
            .iter()
            .map(|r| (r.rule.path.as_path(), r.exists))
            .collect()
    }
}

/// Evaluate every rule against `root`. Never short-circuits.
pub fn check_rules(root: &Path, rules: &[FileRule]) -> FileCheck {
    let results = rules
        .iter()
        .map(|rule| {
            let exists = root.join(&rule.path).exists();
            tracing::debug!(path = %rule.path.display(), exists, "file rule");
            RuleResult {
                rule: rule.clone(),
                exists,
            }
        })
        .collect();
    FileCheck { results }
}

/// Required-file checker
pub fn check_required<P: AsRef<Path>>(root: &Path, required: &[P]) -> FileCheck {
    let rules: Vec<FileRule> = required
        .iter()
        .map(|p| FileRule::present(p.as_ref()))
        .collect();
    check_rules(root, &rules)
}

/// Directory one level above `root`, resolved lexically so a missing root
/// still has a parent.
fn parent_of(root: &Path) -> PathBuf {
    match (root.file_name(), root.parent()) {
        (Some(_), Some(parent)) if parent.as_os_str().is_empty() => PathBuf::from("."),
        (Some(_), Some(parent)) => parent.to_path_buf(),
        _ => root.join(".."),
    }
}

/// Path of `name` one directory level above `root`, if it exists
pub fn find_sibling(root: &Path, name: &str) -> Option<PathBuf> {
    let anchor = parent_of(root);
    let rule = FileRule::absent(name);
    let check = check_rules(&anchor, std::slice::from_ref(&rule));
    if check.all_satisfied() {
        None
    } else {
        Some(anchor.join(rule.path))
    }
}

/// `check-structure`
pub fn check_client_structure(client_root: &Path) -> Report {
    let check = check_required(client_root, &REQUIRED_CLIENT_FILES);

    let mut report = Report::new();
    for (path, present) in check.presence() {
        if present {
            report.push(Finding::ok(format!("OK: {}", path.display())));
        } else {
            report.push(Finding::fatal(
                2,
                format!("Missing required file: {}", path.display()),
            ));
        }
    }
    if check.all_satisfied() {
        report.push(Finding::ok("Client structure OK"));
    }
    report
}

/// `check-no-root-index-tsx`
pub fn check_no_root_index_tsx(client_root: &Path) -> Report {
    match find_sibling(client_root, FORBIDDEN_SIBLING) {
        Some(path) => Report::new()
            .with(Finding::fatal(
                1,
                format!("Danger: found root-level index.tsx at: {}", path.display()),
            ))
            .with(Finding::fatal(
                1,
                "This file may be used by the bundler as the entrypoint and cause \
                 `Unexpected token` when TS is not configured.",
            )),
        None => Report::new().with(Finding::ok("OK — no root-level index.tsx detected")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn scaffold(client: &Path) {
        for rel in REQUIRED_CLIENT_FILES {
            touch(&client.join(rel));
        }
    }

    #[test]
    fn test_all_required_present() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());

        let check = check_required(dir.path(), &REQUIRED_CLIENT_FILES);
        assert!(check.all_satisfied());
        assert_eq!(check.results.len(), 4);
    }

    #[test]
    fn test_reports_every_missing_file_in_order() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("src/main.jsx"));

        let check = check_required(dir.path(), &REQUIRED_CLIENT_FILES);
        assert!(!check.all_satisfied());
        assert_eq!(
            check.presence(),
            vec![
                (Path::new("index.html"), false),
                (Path::new("src/main.jsx"), true),
                (Path::new("src/App.jsx"), false),
                (Path::new("public/enemturbo.pdf"), false),
            ]
        );
    }

    #[test]
    fn test_empty_list_passes() {
        let dir = tempdir().unwrap();
        let check = check_required::<&str>(dir.path(), &[]);
        assert!(check.all_satisfied());
    }

    #[test]
    fn test_absent_rule() {
        let dir = tempdir().unwrap();
        let rules = [FileRule::absent("dist"), FileRule::present("index.html")];
        touch(&dir.path().join("index.html"));
        assert!(check_rules(dir.path(), &rules).all_satisfied());

        fs::create_dir(dir.path().join("dist")).unwrap();
        assert!(!check_rules(dir.path(), &rules).all_satisfied());
    }

    #[test]
    fn test_sibling_found_one_level_up() {
        let dir = tempdir().unwrap();
        let client = dir.path().join("client");
        fs::create_dir(&client).unwrap();
        assert_eq!(find_sibling(&client, FORBIDDEN_SIBLING), None);

        touch(&dir.path().join("index.tsx"));
        let found = find_sibling(&client, FORBIDDEN_SIBLING).unwrap();
        assert_eq!(found, dir.path().join("index.tsx"));
    }

    #[test]
    fn test_sibling_of_missing_root() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("index.tsx"));
        let client = dir.path().join("client");
        assert!(find_sibling(&client, FORBIDDEN_SIBLING).is_some());
    }

    #[test]
    fn test_parent_of_relative_roots() {
        assert_eq!(parent_of(Path::new("client")), PathBuf::from("."));
        assert_eq!(parent_of(Path::new("repo/client")), PathBuf::from("repo"));
        assert_eq!(parent_of(Path::new(".")), PathBuf::from("./.."));
    }

    #[test]
    fn test_sibling_at_other_levels_is_ignored() {
        let dir = tempdir().unwrap();
        let client = dir.path().join("repo/client");
        fs::create_dir_all(&client).unwrap();

        // inside the root and two levels up: neither counts
        touch(&client.join("index.tsx"));
        touch(&dir.path().join("index.tsx"));
        assert_eq!(find_sibling(&client, FORBIDDEN_SIBLING), None);

        // exact name only
        touch(&dir.path().join("repo/index.tsx.bak"));
        touch(&dir.path().join("repo/index.ts"));
        assert_eq!(find_sibling(&client, FORBIDDEN_SIBLING), None);
    }

    #[test]
    fn test_structure_report() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("index.html"));

        let report = check_client_structure(dir.path());
        assert_eq!(report.exit_code(), 2);
        assert_eq!(report.findings()[0].message, "OK: index.html");
        assert_eq!(
            report.findings()[1].message,
            "Missing required file: src/main.jsx"
        );

        scaffold(dir.path());
        let report = check_client_structure(dir.path());
        assert_eq!(report.severity(), Severity::Ok);
        assert_eq!(
            report.findings().last().unwrap().message,
            "Client structure OK"
        );
    }

    #[test]
    fn test_root_index_report() {
        let dir = tempdir().unwrap();
        let client = dir.path().join("client");
        fs::create_dir(&client).unwrap();
        assert_eq!(check_no_root_index_tsx(&client).exit_code(), 0);

        touch(&dir.path().join("index.tsx"));
        let report = check_no_root_index_tsx(&client);
        assert_eq!(report.exit_code(), 1);
        assert!(report.findings()[0].message.contains("index.tsx"));
    }
}
