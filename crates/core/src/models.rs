use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extensions accepted as media files, lowercase and without the dot.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["mp3", "flac", "wav", "mp4", "webm"];

/// Extensions whose presence marks a directory as holding video reels.
pub const VIDEO_EXTENSIONS: [&str; 2] = ["mp4", "webm"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    /// Category directory holding the media files of this kind.
    pub fn dir_name(self) -> &'static str {
        match self {
            MediaKind::Audio => "Tracks",
            MediaKind::Video => "Reels",
        }
    }

    /// Key of the entry list in the album record.
    pub fn list_key(self) -> &'static str {
        match self {
            MediaKind::Audio => "tracks",
            MediaKind::Video => "reels",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
        }
    }

    pub fn placeholder_title(self, number: u32) -> String {
        match self {
            MediaKind::Audio => format!("Track {}", number),
            MediaKind::Video => format!("Reel {}", number),
        }
    }

    pub fn placeholder_extension(self) -> &'static str {
        match self {
            MediaKind::Audio => "mp3",
            MediaKind::Video => "mp4",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "audio" => Ok(MediaKind::Audio),
            "video" => Ok(MediaKind::Video),
            other => Err(format!("unknown media type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaEntry {
    pub number: u32,
    pub title: String,
}

impl MediaEntry {
    pub fn new(number: u32, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
        }
    }
}

/// The active entry list, tagged by media kind. The inactive list of the
/// persisted document has no representation here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaList {
    Audio(Vec<MediaEntry>),
    Video(Vec<MediaEntry>),
}

impl MediaList {
    pub fn new(kind: MediaKind, entries: Vec<MediaEntry>) -> Self {
        match kind {
            MediaKind::Audio => MediaList::Audio(entries),
            MediaKind::Video => MediaList::Video(entries),
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            MediaList::Audio(_) => MediaKind::Audio,
            MediaList::Video(_) => MediaKind::Video,
        }
    }

    pub fn entries(&self) -> &[MediaEntry] {
        match self {
            MediaList::Audio(entries) | MediaList::Video(entries) => entries,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumRecord {
    pub version: String,
    pub band: String,
    pub title: String,
    pub date: String,
    pub source: String,
    pub info: String,
    pub media: MediaList,
}

impl AlbumRecord {
    pub fn kind(&self) -> MediaKind {
        self.media.kind()
    }

    pub fn entries(&self) -> &[MediaEntry] {
        self.media.entries()
    }
}

/// A media file inside the category directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Name without the final extension.
    pub fn stem(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) if idx > 0 => &self.name[..idx],
            _ => &self.name,
        }
    }

    /// Final extension including the dot, exactly as it appears on disk.
    pub fn extension(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) if idx > 0 => &self.name[idx..],
            _ => "",
        }
    }

    pub fn has_extension_in(&self, set: &[&str]) -> bool {
        let ext = self.extension().trim_start_matches('.').to_lowercase();
        !ext.is_empty() && set.iter().any(|e| *e == ext)
    }
}
