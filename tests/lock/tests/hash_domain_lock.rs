//! Hash domain governance.
//!
//! Domain separator bytes live in exactly one file. Any other production
//! source that spells out a `GLUCOPATH::` byte literal bypasses the typed
//! `HashDomain` enum and can collide silently.

use std::path::{Path, PathBuf};

use glucopath_kernel::proof::hash::HashDomain;

const AUTHORITY_FILE: &str = "hash_domain.rs";
const DOMAIN_LITERAL: &str = "b\"GLUCOPATH::";

#[test]
fn every_domain_is_versioned_and_null_terminated() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(bytes.starts_with(b"GLUCOPATH::"), "{domain}");
        assert!(bytes.ends_with(b"::V1\0"), "{domain}");
    }
}

#[test]
fn no_raw_domain_literals_outside_authority() {
    let production_dirs = [
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../kernel/src"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../search/src"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../harness/src"),
    ];

    let mut violations = Vec::new();
    for dir in production_dirs {
        for path in rust_files(Path::new(dir)) {
            if path.file_name().and_then(|n| n.to_str()) == Some(AUTHORITY_FILE) {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            for (i, line) in production_lines(&content) {
                if line.contains(DOMAIN_LITERAL) {
                    violations.push(format!("  {}:{}: {}", path.display(), i + 1, line));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "raw domain literals found outside {AUTHORITY_FILE}:\n{}",
        violations.join("\n")
    );
}

/// Non-comment lines outside `#[cfg(test)]` blocks, with their indices.
fn production_lines(content: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut depth: usize = 0;
    let mut skip_above: Option<usize> = None;
    let mut cfg_test_pending = false;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.contains("#[cfg(test)]") {
            cfg_test_pending = true;
            continue;
        }

        let opens = line.matches('{').count();
        let closes = line.matches('}').count();
        if cfg_test_pending && opens > 0 {
            skip_above = Some(depth);
            cfg_test_pending = false;
        }
        depth = depth.saturating_add(opens).saturating_sub(closes);

        if let Some(floor) = skip_above {
            if depth <= floor {
                skip_above = None;
            }
            continue;
        }
        if !trimmed.starts_with("//") {
            out.push((i, trimmed));
        }
    }
    out
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let Ok(entries) = std::fs::read_dir(dir) else {
        return out;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            out.extend(rust_files(&path));
        } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
            out.push(path);
        }
    }
    out
}
