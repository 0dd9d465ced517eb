//! Hygiene: keeps panicking and error-discarding constructs out of the page
//! script's production sources, and keeps fallible public helpers documented.
//!
//! `.ok()` is not budgeted here: the page layer uses it to collapse optional
//! browser APIs (storage, media queries) into `Option`.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_TODO: usize = 0;
const MAX_SILENT_DISCARD: usize = 0;
const MAX_POSITIONAL_DEBUG_ARG: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, test files excluded.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);
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

fn check_budget(pattern: &str, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found");
    let found = hits(&files, pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{listing}");
}

/// Public fns returning `Result` whose doc block has no `# Errors` section.
///
/// The signature may wrap, so the return type is searched up to the opening
/// brace. The doc block is the run of `///` and attribute lines above it.
fn undocumented_fallible(file: &SourceFile) -> Vec<String> {
    let lines: Vec<&str> = file.content.lines().collect();
    let mut missing = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim_start();
        if !trimmed.starts_with("pub fn ") {
            continue;
        }
        let signature: String = lines[i..]
            .iter()
            .take_while(|l| !l.contains('{'))
            .chain(lines[i..].iter().find(|l| l.contains('{')))
            .copied()
            .collect();
        let returns = signature.split_once("->").map_or("", |(_, ret)| ret);
        if !returns.trim_start().starts_with("Result<") {
            continue;
        }
        let documented = lines[..i]
            .iter()
            .rev()
            .map(|l| l.trim_start())
            .take_while(|l| l.starts_with("///") || l.starts_with("#["))
            .any(|l| l == "/// # Errors");
        if !documented {
            missing.push(format!("  {}:{}", file.path, i + 1));
        }
    }
    missing
}

#[test]
fn unwrap_budget() {
    check_budget(".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    check_budget(".expect(", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    check_budget("panic!(", MAX_PANIC);
}

#[test]
fn todo_budget() {
    check_budget("todo!(", MAX_TODO);
}

#[test]
fn silent_discard_budget() {
    check_budget("let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn positional_debug_arg_budget() {
    check_budget("{:?}\", e", MAX_POSITIONAL_DEBUG_ARG);
}

#[test]
fn fallible_public_fns_document_errors() {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found");
    let missing: Vec<String> = files.iter().flat_map(undocumented_fallible).collect();
    assert!(missing.is_empty(), "public fns returning Result without `# Errors`:\n{}", missing.join("\n"));
}
