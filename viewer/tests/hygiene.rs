//! Hygiene — enforces coding standards at test time
//!
//! Scans the viewer crate's production sources for patterns that can crash
//! the page or hide failures. Every budget is zero: the core clamps instead of
//! failing and reports caller bugs through `ViewerError`.

use std::fs;
use std::path::Path;

/// (pattern, budget, why it is banned)
const BUDGETS: &[(&str, usize, &str)] = &[
    // Panics — these abort the wasm instance.
    (".unwrap()", 0, "propagate or clamp instead"),
    (".expect(", 0, "propagate or clamp instead"),
    ("panic!(", 0, "return ViewerError"),
    ("unreachable!(", 0, "model the state instead"),
    ("todo!(", 0, "finish the stub"),
    ("unimplemented!(", 0, "finish the stub"),
    // Silent loss — discards errors without inspecting.
    ("let _ =", 0, "handle or log the value"),
    (".ok()", 0, "handle or log the error"),
    // Output goes through the `log` facade.
    ("println!(", 0, "use log::debug!/warn!"),
    ("eprintln!(", 0, "use log::warn!"),
    ("dbg!(", 0, "remove debug output"),
    // Style / structure.
    ("#[allow(dead_code)]", 0, "delete unused code"),
];

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

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("engine.rs")), "run from the viewer crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("{pattern} budget exceeded: found {count}, max {budget} ({why})\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn every_test_file_is_wired() {
    let files = source_files();
    let Ok(entries) = fs::read_dir("src") else {
        return;
    };
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        let Some(stem) = name.strip_suffix("_test.rs") else {
            continue;
        };
        let wiring = format!("#[path = \"{name}\"]");
        let owner = format!("src/{stem}.rs");
        let wired = files
            .iter()
            .any(|f| Path::new(&f.path) == Path::new(&owner) && f.content.contains(&wiring));
        assert!(wired, "{name} is not wired from {owner}");
    }
}
