use album_core::config::ConflictPolicy;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed(PathBuf),
    Unchanged,
    Skipped(String),
}

/// Renames `from` to `to` inside the same directory, honoring `policy` when
/// the target already exists.
pub fn apply_rename(from: &Path, to: &Path, policy: ConflictPolicy) -> Result<RenameOutcome> {
    if from == to {
        return Ok(RenameOutcome::Unchanged);
    }
    let target = if to.exists() && !same_name_ignoring_case(from, to) {
        match policy {
            ConflictPolicy::Skip => {
                return Ok(RenameOutcome::Skipped(format!(
                    "{} already exists",
                    to.display()
                )))
            }
            ConflictPolicy::Overwrite => to.to_path_buf(),
            ConflictPolicy::Suffix => resolve_conflict(to),
        }
    } else {
        to.to_path_buf()
    };
    fs::rename(from, &target)?;
    Ok(RenameOutcome::Renamed(target))
}

// A case-only rename on a case-insensitive filesystem sees its own source as
// the existing target.
fn same_name_ignoring_case(from: &Path, to: &Path) -> bool {
    match (from.to_str(), to.to_str()) {
        (Some(a), Some(b)) => a.to_lowercase() == b.to_lowercase(),
        _ => false,
    }
}

fn resolve_conflict(dest: &Path) -> PathBuf {
    let stem = dest
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("file")
        .to_string();
    let ext = dest
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_string();
    let parent = dest.parent().unwrap_or_else(|| Path::new("."));
    let mut counter = 1;
    loop {
        let name = if ext.is_empty() {
            format!("{}_{}", stem, counter)
        } else {
            format!("{}_{}.{}", stem, counter, ext)
        };
        let candidate = parent.join(name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policies_on_existing_target() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path();
        let from = dir.join("a.mp3");
        let to = dir.join("01 - A.mp3");
        fs::write(&from, "new").unwrap();
        fs::write(&to, "old").unwrap();

        let out = apply_rename(&from, &to, ConflictPolicy::Skip).unwrap();
        assert!(matches!(out, RenameOutcome::Skipped(_)));
        assert!(from.exists());

        let out = apply_rename(&from, &to, ConflictPolicy::Suffix).unwrap();
        assert_eq!(out, RenameOutcome::Renamed(dir.join("01 - A_1.mp3")));
        assert_eq!(fs::read_to_string(&to).unwrap(), "old");

        let moved = dir.join("01 - A_1.mp3");
        let out = apply_rename(&moved, &to, ConflictPolicy::Overwrite).unwrap();
        assert_eq!(out, RenameOutcome::Renamed(to.clone()));
        assert_eq!(fs::read_to_string(&to).unwrap(), "new");
    }

    #[test]
    fn same_path_is_unchanged_and_missing_source_errors() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("01 - A.mp3");
        fs::write(&path, "").unwrap();
        assert_eq!(
            apply_rename(&path, &path, ConflictPolicy::Skip).unwrap(),
            RenameOutcome::Unchanged
        );
        let gone = temp.path().join("gone.mp3");
        assert!(apply_rename(&gone, &temp.path().join("x.mp3"), ConflictPolicy::Skip).is_err());
    }
}
