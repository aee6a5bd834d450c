//! Hygiene — enforces coding standards at test time.
//!
//! Scans the crate's production sources for antipatterns. Each pattern has
//! a budget of zero. If you must add one, you have to fix an existing one
//! first — the budget never grows.

use std::fs;
use std::path::Path;

/// `(pattern, budget, why)` — budgets are all zero and stay that way.
const BUDGETS: &[(&str, usize, &str)] = &[
    // Panics — these crash the process.
    (".unwrap()", 0, "propagate or default instead of crashing"),
    (".expect(", 0, "propagate or default instead of crashing"),
    ("panic!(", 0, "handlers must be infallible"),
    ("unreachable!(", 0, "handlers must be infallible"),
    ("todo!(", 0, "unfinished features live at the host layer, not here"),
    ("unimplemented!(", 0, "unfinished features live at the host layer, not here"),
    // Silent loss — discards errors without inspecting.
    ("let _ =", 0, "inspect or propagate the result"),
    (".ok()", 0, "inspect or propagate the result"),
    // Style / structure.
    ("#[allow(dead_code)]", 0, "delete dead code instead of hiding it"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `*_test.rs` files.
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            if count > 0 {
                Some((file.path.clone(), count))
            } else {
                None
            }
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn source_tree_is_scanned() {
    // Guard against the scanner silently finding nothing (e.g. after a
    // layout change) and every budget passing vacuously.
    assert!(!source_files().is_empty(), "no production sources found under src/");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let hits = count_in_source(&files, pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > *budget {
            failures.push(format!(
                "`{pattern}` budget exceeded: found {count}, max {budget} ({why})\n{}",
                format_hits(&hits)
            ));
        }
    }
    assert!(failures.is_empty(), "\n{}", failures.join("\n"));
}
