//! Hygiene: enforces coding standards at test time.
//!
//! Scans `src/` (test files excluded) for patterns the project keeps at a
//! fixed budget. The budgets only ever go down.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

/// `(pattern, budget, why)` for every tracked antipattern.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "crashes the WASM module"),
    ("unreachable!(", 0, "crashes the WASM module"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards an error without inspecting it"),
    (".ok()", 0, "discards an error without inspecting it"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

/// Only the storage adapter may reach the browser store directly.
const STORAGE_ADAPTER: &str = "storage.rs";

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

fn hits_for(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
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
fn source_tree_is_not_empty() {
    assert!(source_files().len() > 10, "hygiene scan found too few files; is the working directory the crate root?");
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for &(pattern, budget, why) in BUDGETS {
        let hits = hits_for(&files, pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > budget {
            failures.push(format!("`{pattern}` ({why}): found {count}, max {budget}\n{}", format_hits(&hits)));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn local_storage_only_in_storage_adapter() {
    let files = source_files();
    let hits: Vec<_> = hits_for(&files, "local_storage")
        .into_iter()
        .filter(|(path, _)| !path.ends_with(STORAGE_ADAPTER))
        .collect();
    assert!(hits.is_empty(), "localStorage accessed outside the storage adapter:\n{}", format_hits(&hits));
}
