//! Locates the category directory holding the album's media and lists its
//! files in the canonical positional order.

use crate::models::{FileEntry, MediaKind, SUPPORTED_EXTENSIONS, VIDEO_EXTENSIONS};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ResolvedMedia {
    pub kind: MediaKind,
    pub dir: PathBuf,
    pub files: Vec<FileEntry>,
    /// True when the category directory did not exist and was created.
    pub created: bool,
}

/// Picks `Reels/` when it already holds video files, `Tracks/` otherwise,
/// creating the directory if needed, and returns its sorted media files.
pub fn resolve(base: &Path) -> anyhow::Result<ResolvedMedia> {
    let kind = detect_kind(base)?;
    let dir = base.join(kind.dir_name());

    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        info!("Created {}/ directory", kind.dir_name());
        return Ok(ResolvedMedia {
            kind,
            dir,
            files: Vec::new(),
            created: true,
        });
    }

    let files = list_media_files(&dir)?;
    debug!("Resolved {} {} file(s) in {:?}", files.len(), kind, dir);
    Ok(ResolvedMedia {
        kind,
        dir,
        files,
        created: false,
    })
}

/// The category is decided by content: the reels directory only counts when
/// it actually holds a video file.
pub fn detect_kind(base: &Path) -> anyhow::Result<MediaKind> {
    let reels = base.join(MediaKind::Video.dir_name());
    if !reels.is_dir() {
        return Ok(MediaKind::Audio);
    }
    let has_video = file_names(&reels)?
        .iter()
        .any(|name| FileEntry::new(name.as_str()).has_extension_in(&VIDEO_EXTENSIONS));
    Ok(if has_video {
        MediaKind::Video
    } else {
        MediaKind::Audio
    })
}

/// Supported media files of `dir`, sorted case-insensitively. Ties between
/// names differing only by case fall back to the raw name so the order is
/// stable across calls.
pub fn list_media_files(dir: &Path) -> anyhow::Result<Vec<FileEntry>> {
    let mut files: Vec<FileEntry> = file_names(dir)?
        .into_iter()
        .map(FileEntry::new)
        .filter(|f| f.has_extension_in(&SUPPORTED_EXTENSIONS))
        .collect();
    files.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(files)
}

fn file_names(dir: &Path) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("Failed to read {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = match entry.file_name().to_str() {
            Some(n) => n.to_string(),
            None => continue,
        };
        if is_hidden(&name) {
            continue;
        }
        names.push(name);
    }
    Ok(names)
}

/// Dot-files are metadata, not media: macOS writes `._<name>` AppleDouble
/// companions next to every copied file, and a bare `.mp3` has no title.
fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
