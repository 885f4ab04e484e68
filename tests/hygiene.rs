//! Hygiene: enforces coding standards for the core at test time
//!
//! Scans `src/` (excluding `*_test.rs`) for patterns the core must not
//! contain. Each pattern has a budget; budgets only ever go down.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

// Panics: accessors report errors, they do not crash the host.
const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "propagate or default instead" },
    Budget { pattern: ".expect(", max: 0, why: "propagate or default instead" },
    Budget { pattern: "panic!(", max: 0, why: "return DesignSystemError" },
    Budget { pattern: "unreachable!(", max: 0, why: "model the state instead" },
    Budget { pattern: "todo!(", max: 0, why: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "finish the stub" },
];

// Silent loss: discards errors without inspecting.
const SILENT_LOSS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0, why: "handle or log the result" },
    Budget { pattern: ".ok()", max: 0, why: "match on the error explicitly" },
];

// Host coupling: the core stays browser-free and global-free.
const HOST_COUPLING: &[Budget] = &[
    Budget { pattern: "web_sys", max: 0, why: "browser glue belongs in client/" },
    Budget { pattern: "wasm_bindgen", max: 0, why: "browser glue belongs in client/" },
    Budget { pattern: "thread_local!", max: 0, why: "state is owned by its provider" },
    Budget { pattern: "static mut", max: 0, why: "state is owned by its provider" },
    Budget { pattern: "println!", max: 0, why: "log through tracing" },
    Budget { pattern: "eprintln!", max: 0, why: "log through tracing" },
];

// Style / structure.
const STRUCTURE: &[Budget] = &[Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code" }];

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

/// Per-file hit counts for `pattern`, skipping `//` comment lines.
fn hits_for(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn check(budgets: &[Budget]) {
    let files = source_files();
    assert!(!files.is_empty(), "no production sources found under src/");

    let mut failures = Vec::new();
    for budget in budgets {
        let hits = hits_for(&files, budget.pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail: Vec<String> = hits.iter().map(|(path, c)| format!("    {path}: {c}")).collect();
            failures.push(format!(
                "`{}` budget exceeded: found {count}, max {} ({})\n{}",
                budget.pattern,
                budget.max,
                budget.why,
                detail.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn panic_budget() {
    check(PANICS);
}

#[test]
fn silent_loss_budget() {
    check(SILENT_LOSS);
}

#[test]
fn host_coupling_budget() {
    check(HOST_COUPLING);
}

#[test]
fn structure_budget() {
    check(STRUCTURE);
}
