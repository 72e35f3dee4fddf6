//! Parallel, safe, deterministic PHP file discovery with directory pruning.
//!
//! Performance optimizations:
//! - Early directory pruning via `WalkDir::filter_entry` (O(1) subtree skip)
//! - Parallel file processing via Rayon's `par_bridge`
//! - Results are sorted so indexing order never depends on thread scheduling

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories to exclude by default.
///
/// `vendor/` is deliberately scanned: library base classes usually live there.
pub const EXCLUDED_DIRS: &[&str] = &[".git", "node_modules", ".idea"];

/// Checks if a directory entry should be pruned (excluded from traversal).
#[inline]
fn is_excluded_dir(entry: &walkdir::DirEntry, excludes: &HashSet<&str>) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excludes.contains(name))
}

#[inline]
fn is_php_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("php"))
}

/// Gathers all .php files recursively starting from the root path.
///
/// A root that is itself a file is returned as-is. Automatically excludes
/// `.git/`, `node_modules/` and `.idea/`.
pub fn gather_php_files(root: &Path) -> Result<Vec<PathBuf>> {
    gather_php_files_with_excludes(root, &[])
}

/// Gathers all .php files with custom exclusion patterns using early pruning.
pub fn gather_php_files_with_excludes(root: &Path, excludes: &[&str]) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    // Combine default and custom excludes into a single HashSet for O(1) lookup
    let all_excludes: HashSet<&str> = EXCLUDED_DIRS
        .iter()
        .copied()
        .chain(excludes.iter().copied())
        .collect();

    let mut files = WalkDir::new(root)
        .into_iter()
        // filter_entry prunes entire subtrees before iteration
        .filter_entry(|e| !is_excluded_dir(e, &all_excludes))
        .par_bridge()
        .filter_map(|entry| match entry {
            Ok(e) => is_php_file(e.path()).then(|| Ok(e.path().to_path_buf())),
            Err(e) => Some(Err(e.into())),
        })
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("Failed to gather .php files from {}", root.display()))?;

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_dir(name: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir()
            .join("traitgen_scan_test")
            .join(format!("{}_{}_{}", name, std::process::id(), id));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_gathers_php_sorted_and_prunes() {
        let root = temp_dir("gather");
        fs::create_dir_all(root.join("src/Model")).unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::write(root.join("src/Model/User.php"), "<?php").unwrap();
        fs::write(root.join("src/App.PHP"), "<?php").unwrap();
        fs::write(root.join("src/readme.md"), "#").unwrap();
        fs::write(root.join("node_modules/pkg/x.php"), "<?php").unwrap();

        let files = gather_php_files(&root).unwrap();
        assert_eq!(
            files,
            vec![root.join("src/App.PHP"), root.join("src/Model/User.php")]
        );
    }

    #[test]
    fn test_custom_excludes() {
        let root = temp_dir("excludes");
        fs::create_dir_all(root.join("tests")).unwrap();
        fs::write(root.join("tests/FooTest.php"), "<?php").unwrap();
        fs::write(root.join("Foo.php"), "<?php").unwrap();

        let files = gather_php_files_with_excludes(&root, &["tests"]).unwrap();
        assert_eq!(files, vec![root.join("Foo.php")]);
    }

    #[test]
    fn test_single_file_root() {
        let root = temp_dir("single");
        let file = root.join("Only.php");
        fs::write(&file, "<?php").unwrap();
        assert_eq!(gather_php_files(&file).unwrap(), vec![file]);
    }
}
