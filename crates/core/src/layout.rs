//! Creates the on-disk skeleton of an album directory.

use crate::config::AlbumConfig;
use crate::models::{AlbumRecord, MediaEntry, MediaKind, MediaList};
use crate::sanitize::sanitize;
use crate::store::AlbumStore;
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A record with empty details and a single placeholder entry.
pub fn blank_record(kind: MediaKind, cfg: &AlbumConfig) -> AlbumRecord {
    AlbumRecord {
        version: cfg.version.clone(),
        band: String::new(),
        title: String::new(),
        date: String::new(),
        source: String::new(),
        info: cfg.info_file.clone(),
        media: MediaList::new(kind, vec![MediaEntry::new(1, kind.placeholder_title(1))]),
    }
}

/// File name of the placeholder media file, e.g. `01 - Track 1.mp3`.
pub fn placeholder_file_name(kind: MediaKind) -> String {
    format!(
        "{}.{}",
        sanitize(&kind.placeholder_title(1), 1),
        kind.placeholder_extension()
    )
}

/// Tree shown before the structure is created.
pub fn preview_tree(kind: MediaKind, cfg: &AlbumConfig) -> Vec<String> {
    vec![
        format!("├── {}", cfg.record_file),
        format!("├── {}", cfg.info_file),
        format!("├── {}", cfg.cover_file),
        format!("└── {}/", kind.dir_name()),
        format!("    └── {}", placeholder_file_name(kind)),
    ]
}

/// Writes the notes file with its template line unless it already exists.
/// Returns whether it was created.
pub fn ensure_info_file(base: &Path, cfg: &AlbumConfig) -> anyhow::Result<bool> {
    let path = base.join(&cfg.info_file);
    create_new(&path, format!("{}\n", cfg.info_template).as_bytes())
}

/// Writes the category directory, a blank record, the notes file, a
/// placeholder media file and an empty cover. The record is always
/// rewritten; the other files are left alone when present.
pub fn scaffold(base: &Path, kind: MediaKind, cfg: &AlbumConfig) -> anyhow::Result<Vec<PathBuf>> {
    let mut created = Vec::new();

    let media_dir = base.join(kind.dir_name());
    fs::create_dir_all(&media_dir)
        .with_context(|| format!("Failed to create {}", media_dir.display()))?;

    let store = AlbumStore::new(base.join(&cfg.record_file));
    store.save(&blank_record(kind, cfg))?;
    created.push(store.path().to_path_buf());

    if ensure_info_file(base, cfg)? {
        created.push(base.join(&cfg.info_file));
    }

    let placeholder = media_dir.join(placeholder_file_name(kind));
    if create_new(&placeholder, b"")? {
        created.push(placeholder);
    }

    let cover = base.join(&cfg.cover_file);
    if create_new(&cover, b"")? {
        created.push(cover);
    }

    info!("Scaffolded {} album in {:?}", kind, base);
    Ok(created)
}

fn create_new(path: &Path, contents: &[u8]) -> anyhow::Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("Keeping existing {:?}", path);
            Ok(false)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to create {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaffold_builds_video_layout() {
        let temp = tempfile::tempdir().unwrap();
        let cfg = AlbumConfig::default();
        let created = scaffold(temp.path(), MediaKind::Video, &cfg).unwrap();
        assert_eq!(created.len(), 4);

        assert!(temp.path().join("Reels/01 - Reel 1.mp4").is_file());
        assert!(temp.path().join("album_cover.png").is_file());
        assert_eq!(
            fs::read_to_string(temp.path().join("more_info.txt")).unwrap(),
            "Album information\n"
        );
        let record = AlbumStore::new(temp.path().join("album.json")).load().unwrap();
        assert_eq!(record, blank_record(MediaKind::Video, &cfg));
    }

    #[test]
    fn scaffold_keeps_existing_notes() {
        let temp = tempfile::tempdir().unwrap();
        let cfg = AlbumConfig::default();
        fs::write(temp.path().join("more_info.txt"), "liner notes").unwrap();
        let created = scaffold(temp.path(), MediaKind::Audio, &cfg).unwrap();
        assert_eq!(created.len(), 3);
        assert_eq!(
            fs::read_to_string(temp.path().join("more_info.txt")).unwrap(),
            "liner notes"
        );
        assert!(temp.path().join("Tracks/01 - Track 1.mp3").is_file());
    }

    #[test]
    fn preview_names_placeholder() {
        let tree = preview_tree(MediaKind::Audio, &AlbumConfig::default());
        assert_eq!(tree.last().unwrap(), "    └── 01 - Track 1.mp3");
    }
}
