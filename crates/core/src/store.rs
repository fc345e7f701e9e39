//! Persistence of the album record (`album.json`).
//!
//! Loading fails soft: a missing, empty or malformed document is reported as
//! `None` so callers fall through to creating a new record. Saving always
//! rewrites the whole document in a fixed field order.

use crate::models::{AlbumRecord, MediaEntry, MediaKind, MediaList};
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const INDENT: &str = "    ";

/// Document shape as found on disk. Both lists are optional; only one of
/// them survives conversion.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    version: String,
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    band: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    info: String,
    tracks: Option<Vec<MediaEntry>>,
    reels: Option<Vec<MediaEntry>>,
}

fn into_record(raw: RawRecord) -> Result<AlbumRecord, String> {
    let kind = match raw.kind.as_deref() {
        Some(k) => k.parse::<MediaKind>()?,
        None if raw.reels.is_some() && raw.tracks.is_none() => MediaKind::Video,
        None => MediaKind::Audio,
    };
    let entries = match kind {
        MediaKind::Audio => raw.tracks,
        MediaKind::Video => raw.reels,
    }
    .unwrap_or_default();
    Ok(AlbumRecord {
        version: raw.version,
        band: raw.band,
        title: raw.title,
        date: raw.date,
        source: raw.source,
        info: raw.info,
        media: MediaList::new(kind, entries),
    })
}

#[derive(Debug, Clone)]
pub struct AlbumStore {
    path: PathBuf,
}

impl AlbumStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Option<AlbumRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                debug!("No album record at {:?}: {}", self.path, e);
                return None;
            }
        };
        if content.trim().is_empty() {
            debug!("Album record {:?} is empty", self.path);
            return None;
        }
        match parse(&content) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Ignoring invalid album record {:?}: {}", self.path, e);
                None
            }
        }
    }

    pub fn save(&self, record: &AlbumRecord) -> anyhow::Result<()> {
        fs::write(&self.path, render(record))
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        info!(
            "Wrote {:?} with {} {}",
            self.path,
            record.entries().len(),
            record.kind().list_key()
        );
        Ok(())
    }
}

pub fn parse(content: &str) -> anyhow::Result<AlbumRecord> {
    let raw: RawRecord = serde_json::from_str(content)?;
    into_record(raw).map_err(anyhow::Error::msg)
}

/// Renders the record with four-space indentation and one entry object per
/// line. Non-ASCII text is kept verbatim and there is no trailing newline.
pub fn render(record: &AlbumRecord) -> String {
    let scalars = [
        ("version", record.version.as_str()),
        ("type", record.kind().as_str()),
        ("band", record.band.as_str()),
        ("title", record.title.as_str()),
        ("date", record.date.as_str()),
        ("source", record.source.as_str()),
        ("info", record.info.as_str()),
    ];

    let mut out = String::from("{\n");
    for (key, value) in scalars {
        out.push_str(&format!("{}{}: {},\n", INDENT, quote(key), quote(value)));
    }

    let entries = record.entries();
    out.push_str(&format!("{}{}: ", INDENT, quote(record.kind().list_key())));
    if entries.is_empty() {
        out.push_str("[]\n");
    } else {
        out.push_str("[\n");
        let lines: Vec<String> = entries
            .iter()
            .map(|e| {
                format!(
                    "{}{}{{\"number\": {}, \"title\": {}}}",
                    INDENT,
                    INDENT,
                    e.number,
                    quote(&e.title)
                )
            })
            .collect();
        out.push_str(&lines.join(",\n"));
        out.push_str(&format!("\n{}]\n", INDENT));
    }
    out.push('}');
    out
}

fn quote(s: &str) -> String {
    // Serializing a str cannot fail.
    serde_json::to_string(s).unwrap_or_default()
}
