use crate::fs_apply::{self, RenameOutcome};
use album_core::config::RenameConfig;
use album_core::sync::RenamePair;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub renamed: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Renames listed but not performed because of `dry_run`.
    pub planned: usize,
}

/// Executes a rename plan inside `dir`. A failing file is reported and the
/// batch moves on to the next one.
pub fn apply_renames(dir: &Path, plan: &[RenamePair], settings: &RenameConfig) -> ApplySummary {
    let mut summary = ApplySummary::default();

    if settings.dry_run {
        summary.planned = plan.len();
        println!("dry-run: {} renames listed", summary.planned);
        return summary;
    }

    for pair in plan {
        match fs_apply::apply_rename(&dir.join(&pair.from), &dir.join(&pair.to), settings.conflict) {
            Ok(RenameOutcome::Renamed(target)) => {
                let name = target
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| pair.to.clone());
                println!("Renamed: {} -> {}", pair.from, name);
                summary.renamed += 1;
            }
            Ok(RenameOutcome::Unchanged) => summary.unchanged += 1,
            Ok(RenameOutcome::Skipped(reason)) => {
                println!("Skipped {}: {}", pair.from, reason);
                summary.skipped += 1;
            }
            Err(e) => {
                warn!("Rename of {} failed: {}", pair.from, e);
                println!("Error renaming {}: {}", pair.from, e);
                summary.failed += 1;
            }
        }
    }

    info!("Applied rename plan in {:?}: {:?}", dir, summary);
    println!(
        "rename summary: renamed={}, unchanged={}, skipped={}, failed={}",
        summary.renamed, summary.unchanged, summary.skipped, summary.failed
    );
    summary
}
