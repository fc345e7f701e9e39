//! Positional alignment between the sorted file list and the active entry
//! list of an album record.
//!
//! File *i* always pairs with entry *i*; nothing else links a file to its
//! metadata. The planners here are pure, the only side effect being the
//! prompts issued through [`Prompter`] while deriving.

use crate::error::SyncError;
use crate::models::{AlbumRecord, FileEntry, MediaEntry, MediaKind, MediaList};
use crate::prompt::{ask_with_default, Prompter};
use crate::sanitize::{clean_title, sanitize, strip_leading_number};
use std::collections::HashSet;
use tracing::debug;

/// One planned rename, in positional order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePair {
    pub number: u32,
    pub from: String,
    pub to: String,
}

impl RenamePair {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Scalar fields of a record, gathered before the entry list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumDetails {
    pub band: String,
    pub title: String,
    pub date: String,
    pub source: String,
}

impl AlbumDetails {
    pub fn from_record(record: &AlbumRecord) -> Self {
        Self {
            band: record.band.clone(),
            title: record.title.clone(),
            date: record.date.clone(),
            source: record.source.clone(),
        }
    }

    /// Prompts for each field, offering the current value as the default.
    pub fn prompt(prompter: &mut dyn Prompter, defaults: &AlbumDetails) -> anyhow::Result<Self> {
        Ok(Self {
            band: ask_with_default(prompter, "Band name", &defaults.band)?,
            title: ask_with_default(prompter, "Album title", &defaults.title)?,
            date: ask_with_default(prompter, "Date", &defaults.date)?,
            source: ask_with_default(prompter, "Source", &defaults.source)?,
        })
    }
}

/// Title offered for a file: its stem minus any leading track number. A stem
/// that is nothing but a number prefix is kept whole.
pub fn suggest_title(file: &FileEntry) -> String {
    let stem = file.stem();
    let stripped = strip_leading_number(stem).trim();
    if stripped.is_empty() {
        stem.trim().to_string()
    } else {
        stripped.to_string()
    }
}

/// Builds the entry list in file order. `overrides[i]` replaces the
/// suggestion for file `i` when present and non-blank.
pub fn build_entries(files: &[FileEntry], overrides: &[Option<String>]) -> Vec<MediaEntry> {
    files
        .iter()
        .enumerate()
        .map(|(i, file)| {
            let title = overrides
                .get(i)
                .and_then(|o| o.as_deref())
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .unwrap_or_else(|| suggest_title(file));
            MediaEntry::new(i as u32 + 1, title)
        })
        .collect()
}

/// Files to metadata: prompts for the album details (defaulting to
/// `existing`) and for one title per file. `suggestions[i]`, when present,
/// replaces the filename-derived suggestion for file `i`.
pub fn derive_from_files(
    kind: MediaKind,
    files: &[FileEntry],
    existing: Option<&AlbumRecord>,
    suggestions: &[String],
    version: &str,
    info: &str,
    prompter: &mut dyn Prompter,
) -> anyhow::Result<AlbumRecord> {
    let defaults = existing.map(AlbumDetails::from_record).unwrap_or_default();
    let details = AlbumDetails::prompt(prompter, &defaults)?;

    let mut overrides = Vec::with_capacity(files.len());
    for (i, file) in files.iter().enumerate() {
        let suggestion = suggestions
            .get(i)
            .cloned()
            .unwrap_or_else(|| suggest_title(file));
        let answer = prompter.ask_text(&format!("{} -> ({}): ", file.name, suggestion))?;
        let answer = answer.trim();
        overrides.push(Some(if answer.is_empty() {
            suggestion
        } else {
            answer.to_string()
        }));
    }

    let entries = build_entries(files, &overrides);
    debug!("Derived {} {} from files", entries.len(), kind.list_key());
    Ok(AlbumRecord {
        version: version.to_string(),
        band: details.band,
        title: details.title,
        date: details.date,
        source: details.source,
        info: info.to_string(),
        media: MediaList::new(kind, entries),
    })
}

/// Metadata to files: pairs file *i* with entry *i* of the record's active
/// list. Any error means nothing may be renamed.
pub fn plan_renames(
    files: &[FileEntry],
    record: &AlbumRecord,
) -> Result<Vec<RenamePair>, SyncError> {
    let kind = record.kind();
    let entries = record.entries();
    if entries.is_empty() {
        return Err(SyncError::NoEntries {
            list: kind.list_key(),
        });
    }
    if files.len() != entries.len() {
        return Err(SyncError::CardinalityMismatch {
            dir: kind.dir_name(),
            list: kind.list_key(),
            files: files.len(),
            entries: entries.len(),
        });
    }

    let mut seen = HashSet::new();
    let mut plan = Vec::with_capacity(files.len());
    for (file, entry) in files.iter().zip(entries) {
        if clean_title(&entry.title).trim().is_empty() {
            return Err(SyncError::EmptyTitle {
                number: entry.number,
                title: entry.title.clone(),
            });
        }
        let to = format!("{}{}", sanitize(&entry.title, entry.number), file.extension());
        if !seen.insert(to.to_lowercase()) {
            return Err(SyncError::DuplicateTarget { name: to });
        }
        plan.push(RenamePair {
            number: entry.number,
            from: file.name.clone(),
            to,
        });
    }
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::list_media_files;
    use crate::prompt::ScriptedPrompter;

    fn files(names: &[&str]) -> Vec<FileEntry> {
        names.iter().map(|n| FileEntry::new(*n)).collect()
    }

    fn record(kind: MediaKind, titles: &[&str]) -> AlbumRecord {
        let entries = titles
            .iter()
            .enumerate()
            .map(|(i, t)| MediaEntry::new(i as u32 + 1, *t))
            .collect();
        AlbumRecord {
            version: "1.1.0".into(),
            band: String::new(),
            title: String::new(),
            date: String::new(),
            source: String::new(),
            info: "more_info.txt".into(),
            media: MediaList::new(kind, entries),
        }
    }

    fn pairs(plan: &[RenamePair]) -> Vec<(&str, &str)> {
        plan.iter().map(|p| (p.from.as_str(), p.to.as_str())).collect()
    }

    #[test]
    fn suggestion_drops_existing_numbering() {
        assert_eq!(suggest_title(&FileEntry::new("03 - Song.mp3")), "Song");
        assert_eq!(suggest_title(&FileEntry::new("Song.mp3")), "Song");
        assert_eq!(suggest_title(&FileEntry::new("01 - .mp3")), "01 -");
    }

    #[test]
    fn plans_in_sorted_file_order() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("b.mp3"), b"").unwrap();
        std::fs::write(temp.path().join("a.mp3"), b"").unwrap();
        let listed = list_media_files(temp.path()).unwrap();

        let plan = plan_renames(&listed, &record(MediaKind::Audio, &["Intro", "Outro"])).unwrap();
        assert_eq!(
            pairs(&plan),
            vec![("a.mp3", "01 - Intro.mp3"), ("b.mp3", "02 - Outro.mp3")]
        );
    }

    #[test]
    fn keeps_original_extension_case() {
        let plan = plan_renames(
            &files(&["x.FLAC", "y.Mp4"]),
            &record(MediaKind::Audio, &["A: Part 1", "B?"]),
        )
        .unwrap();
        assert_eq!(
            pairs(&plan),
            vec![("x.FLAC", "01 - A Part 1.FLAC"), ("y.Mp4", "02 - B.Mp4")]
        );
    }

    #[test]
    fn count_mismatch_is_rejected() {
        let err = plan_renames(&files(&["a.mp3"]), &record(MediaKind::Audio, &["A", "B"]))
            .unwrap_err();
        assert_eq!(
            err,
            SyncError::CardinalityMismatch {
                dir: "Tracks",
                list: "tracks",
                files: 1,
                entries: 2
            }
        );
    }

    #[test]
    fn inactive_list_is_never_used() {
        let rec = crate::store::parse(
            r#"{"type": "video", "tracks": [{"number": 1, "title": "A"}]}"#,
        )
        .unwrap();
        let err = plan_renames(&files(&["a.mp4"]), &rec).unwrap_err();
        assert_eq!(err, SyncError::NoEntries { list: "reels" });
    }

    #[test]
    fn empty_and_duplicate_targets_are_rejected() {
        let err = plan_renames(
            &files(&["a.mp3", "b.mp3"]),
            &record(MediaKind::Audio, &["Fine", "?*. "]),
        )
        .unwrap_err();
        assert!(matches!(err, SyncError::EmptyTitle { number: 2, .. }));

        let mut rec = record(MediaKind::Audio, &["Same", "Same"]);
        if let MediaList::Audio(entries) = &mut rec.media {
            entries[1].number = 1;
        }
        let err = plan_renames(&files(&["a.mp3", "b.mp3"]), &rec).unwrap_err();
        assert_eq!(
            err,
            SyncError::DuplicateTarget {
                name: "01 - Same.mp3".into()
            }
        );
    }

    #[test]
    fn derive_uses_defaults_overrides_and_suggestions() {
        let existing = {
            let mut r = record(MediaKind::Audio, &[]);
            r.band = "Low".into();
            r.date = "1994".into();
            r
        };
        let mut prompter =
            ScriptedPrompter::new(["", "I Could Live in Hope", "", "web", "", "  Words  "]);
        let derived = derive_from_files(
            MediaKind::Audio,
            &files(&["01 - Words.mp3", "02_Fear.mp3"]),
            Some(&existing),
            &[],
            "1.1.0",
            "more_info.txt",
            &mut prompter,
        )
        .unwrap();

        assert_eq!(derived.band, "Low");
        assert_eq!(derived.title, "I Could Live in Hope");
        assert_eq!(derived.date, "1994");
        assert_eq!(derived.source, "web");
        assert_eq!(
            derived.entries(),
            &[MediaEntry::new(1, "Words"), MediaEntry::new(2, "Words")]
        );
        assert_eq!(prompter.asked[4], "01 - Words.mp3 -> (Words): ");
        assert_eq!(prompter.asked[5], "02_Fear.mp3 -> (Fear): ");
    }

    #[test]
    fn imported_titles_replace_suggestions() {
        let mut prompter = ScriptedPrompter::new(["", "", "", "", "", ""]);
        let derived = derive_from_files(
            MediaKind::Video,
            &files(&["a.mp4", "b.mp4"]),
            None,
            &["Opening".to_string()],
            "1.1.0",
            "more_info.txt",
            &mut prompter,
        )
        .unwrap();
        assert_eq!(derived.kind(), MediaKind::Video);
        assert_eq!(
            derived.entries(),
            &[MediaEntry::new(1, "Opening"), MediaEntry::new(2, "b")]
        );
    }

    #[test]
    fn derive_then_plan_round_trips() {
        let names = ["03 - Song.mp3", "Another One.flac", "10.wav"];
        let listed = files(&names);
        let mut prompter = ScriptedPrompter::new(vec![""; 4 + names.len()]);
        let derived = derive_from_files(
            MediaKind::Audio,
            &listed,
            None,
            &[],
            "1.1.0",
            "more_info.txt",
            &mut prompter,
        )
        .unwrap();
        let plan = plan_renames(&listed, &derived).unwrap();
        for (i, (file, pair)) in listed.iter().zip(&plan).enumerate() {
            let expected = format!(
                "{}{}",
                sanitize(&suggest_title(file), i as u32 + 1),
                file.extension()
            );
            assert_eq!(pair.to, expected);
        }
        assert_eq!(plan[0].to, "01 - Song.mp3");
        assert_eq!(plan[2].to, "03 - 10.wav");
    }
}
