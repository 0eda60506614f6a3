//! Hygiene: enforces coding standards at test time.
//!
//! Scans `client/src/` (excluding `*_test.rs`) for calls that would crash the
//! browser bundle or leave debugging noise behind. Every budget is zero.

use std::fs;
use std::path::Path;

const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "propagate or degrade instead of unwrapping"),
    (".expect(", "propagate or degrade instead of expecting"),
    ("panic!(", "components must not panic"),
    ("unreachable!(", "model the case explicitly"),
    ("todo!(", "finish the stub"),
    ("unimplemented!(", "finish the stub"),
    ("dbg!(", "remove debugging output"),
    ("println!(", "use the `log` facade"),
    ("#[allow(dead_code)]", "delete unused code"),
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

fn hits(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(idx, _)| format!("  {}:{}", file.path, idx + 1))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn source_tree_is_found() {
    assert!(!source_files().is_empty(), "run from the client crate root");
}

#[test]
fn forbidden_patterns_are_absent() {
    let files = source_files();
    let mut report = Vec::new();
    for (pattern, advice) in FORBIDDEN {
        let found = hits(&files, pattern);
        if !found.is_empty() {
            report.push(format!("{pattern} ({advice}):\n{}", found.join("\n")));
        }
    }
    assert!(report.is_empty(), "hygiene violations:\n{}", report.join("\n"));
}
