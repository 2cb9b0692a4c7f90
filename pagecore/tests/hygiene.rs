//! Hygiene: source budgets for the pagecore crate.
//!
//! Scans `src/` (test files excluded) for patterns that crash the page or
//! silently drop errors. Every budget is zero. The browser glue in the app
//! crate leans on this crate never panicking.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    label: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics.
    Budget { pattern: ".unwrap()", max: 0, label: ".unwrap()" },
    Budget { pattern: ".expect(", max: 0, label: ".expect()" },
    Budget { pattern: "panic!(", max: 0, label: "panic!()" },
    Budget { pattern: "unreachable!(", max: 0, label: "unreachable!()" },
    Budget { pattern: "todo!(", max: 0, label: "todo!()" },
    Budget { pattern: "unimplemented!(", max: 0, label: "unimplemented!()" },
    // Silent loss.
    Budget { pattern: "let _ =", max: 0, label: "let _ =" },
    Budget { pattern: ".ok()", max: 0, label: ".ok()" },
    // Structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0, label: "#[allow(dead_code)]" },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn check(budget: &Budget) {
    let files = source_files();
    let found = hits(&files, budget.pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let detail = found
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(
        count <= budget.max,
        "{} budget exceeded: found {count}, max {}.\n{detail}",
        budget.label,
        budget.max
    );
}

#[test]
fn source_tree_is_not_empty() {
    assert!(source_files().iter().any(|f| f.path.ends_with("lib.rs")));
}

#[test]
fn panic_budgets() {
    for budget in &BUDGETS[..6] {
        check(budget);
    }
}

#[test]
fn silent_discard_budgets() {
    for budget in &BUDGETS[6..8] {
        check(budget);
    }
}

#[test]
fn allow_dead_code_budget() {
    check(&BUDGETS[8]);
}
