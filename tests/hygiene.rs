//! Hygiene — enforces coding standards at test time
//!
//! These tests scan `src/` for antipatterns. Each has a budget (ideally zero).
//! If you must add one, fix an existing one first — the budget never grows.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
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

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_budget(pattern: &str, max: usize, why: &str) {
    let found = hits(&source_files(), pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded ({why}): found {count}, max {max}.\n{listing}");
}

#[test]
fn sources_are_found() {
    assert!(source_files().iter().any(|f| f.path.ends_with("lib.rs")));
}

// Panics — these abort the wasm instance and every behavior with it.

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", 0, "panics");
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", 0, "panics");
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", 0, "panics");
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", 0, "panics");
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", 0, "stub");
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", 0, "stub");
}

// Silent loss — discards DOM errors without logging them.

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", 0, "silent discard");
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", 0, "silent discard");
}

// Structure.

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", 0, "dead code");
}

/// Only the browser layer touches `web_sys`; everything else stays testable natively.
#[test]
fn web_sys_confined_to_page_layer() {
    let offenders: Vec<String> = source_files()
        .into_iter()
        .filter(|f| f.content.contains("web_sys"))
        .map(|f| f.path)
        .filter(|p| !p.ends_with("page.rs"))
        .collect();
    assert!(offenders.is_empty(), "web_sys used outside page.rs: {offenders:?}");
}
