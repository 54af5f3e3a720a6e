//! Source hygiene checks for the canvas crate.
//!
//! Scans production files under `src/` (test modules excluded) for patterns
//! that panic in the browser or silently drop errors. Every budget is zero.
//! A file listed in `allow_in` may use the pattern freely; keep that list to
//! places where the discarded value carries no information.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
    allow_in: &'static [&'static str],
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics abort the wasm module", allow_in: &[] },
    Budget { pattern: ".expect(", max: 0, why: "panics abort the wasm module", allow_in: &[] },
    Budget { pattern: "panic!(", max: 0, why: "panics abort the wasm module", allow_in: &[] },
    Budget { pattern: "unreachable!(", max: 0, why: "encode the invariant in the types instead", allow_in: &[] },
    Budget { pattern: "todo!(", max: 0, why: "unfinished code paths", allow_in: &[] },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished code paths", allow_in: &[] },
    Budget { pattern: "let _ =", max: 0, why: "discards a result without looking at it", allow_in: &[] },
    Budget {
        pattern: ".ok()",
        max: 0,
        why: "discards the error value",
        // A failed digit parse just means "not a color".
        allow_in: &["color.rs"],
    },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code instead", allow_in: &[] },
];

fn production_files(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_files(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn offenders(files: &[(PathBuf, String)], budget: &Budget) -> Vec<String> {
    let pattern = budget.pattern;
    files
        .iter()
        .filter(|(path, _)| !budget.allow_in.iter().any(|name| path.ends_with(name)))
        .flat_map(|(path, content)| {
            content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(move |(n, _)| format!("  {}:{}", path.display(), n + 1))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let mut files = Vec::new();
    production_files(Path::new("src"), &mut files);
    assert!(files.iter().any(|(p, _)| p.ends_with("engine.rs")), "run from the canvas crate root");
}

#[test]
fn allowances_name_existing_files() {
    let mut files = Vec::new();
    production_files(Path::new("src"), &mut files);
    for budget in BUDGETS {
        for name in budget.allow_in {
            assert!(files.iter().any(|(p, _)| p.ends_with(name)), "`{}` allowance names missing {name}", budget.pattern);
        }
    }
}

#[test]
fn pattern_budgets() {
    let mut files = Vec::new();
    production_files(Path::new("src"), &mut files);

    let mut failures = Vec::new();
    for budget in BUDGETS {
        let hits = offenders(&files, budget);
        if hits.len() > budget.max {
            failures.push(format!(
                "`{}` found {} times (max {}): {}\n{}",
                budget.pattern,
                hits.len(),
                budget.max,
                budget.why,
                hits.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
