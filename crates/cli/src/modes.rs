//! The interactive flows behind each menu entry. Each one resolves its
//! inputs, previews what it is about to do, asks before touching anything
//! and reports every recognized failure as a message instead of an error.

use crate::apply::{self, ApplySummary};
use album_core::config::AppConfig;
use album_core::layout;
use album_core::media;
use album_core::models::{MediaKind, SUPPORTED_EXTENSIONS};
use album_core::prompt::Prompter;
use album_core::store::AlbumStore;
use album_core::sync;
use album_core::tracklist;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, warn};

pub struct Session<'a> {
    pub base: PathBuf,
    pub config: AppConfig,
    pub prompter: &'a mut dyn Prompter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeOutcome {
    Completed,
    Cancelled,
    Aborted(String),
    Renamed(ApplySummary),
}

impl<'a> Session<'a> {
    pub fn new(base: impl Into<PathBuf>, config: AppConfig, prompter: &'a mut dyn Prompter) -> Self {
        Self {
            base: base.into(),
            config,
            prompter,
        }
    }

    fn store(&self) -> AlbumStore {
        AlbumStore::new(self.base.join(&self.config.album.record_file))
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        let yes = self.prompter.ask_yes_no(question)?;
        if !yes {
            println!("Operation cancelled");
        }
        Ok(yes)
    }

    fn ask_media_kind(&mut self) -> Result<MediaKind> {
        loop {
            let answer = self.prompter.ask_text("Album type (audio/video): ")?;
            match answer.parse::<MediaKind>() {
                Ok(kind) => return Ok(kind),
                Err(_) => println!("Please enter either 'audio' or 'video'"),
            }
        }
    }
}

fn abort(message: String) -> ModeOutcome {
    println!("{}", message);
    ModeOutcome::Aborted(message)
}

/// Mode 1: the whole directory skeleton, from nothing.
pub fn create_structure(session: &mut Session<'_>) -> Result<ModeOutcome> {
    let kind = session.ask_media_kind()?;

    println!("\nWill create the following structure:");
    for line in layout::preview_tree(kind, &session.config.album) {
        println!("{}", line);
    }
    if session.store().exists() {
        println!("(the existing {} will be replaced)", session.config.album.record_file);
    }
    if !session.confirm("\nProceed with creation?")? {
        return Ok(ModeOutcome::Cancelled);
    }

    let created = layout::scaffold(&session.base, kind, &session.config.album)?;
    info!("Created {} path(s)", created.len());
    println!("\nCreated album directory structure!");
    Ok(ModeOutcome::Completed)
}

/// Mode 2: a record with one placeholder entry.
pub fn create_blank_template(session: &mut Session<'_>) -> Result<ModeOutcome> {
    let store = session.store();
    let record_file = session.config.album.record_file.clone();
    if store.exists() && !session.confirm(&format!("\n{} already exists. Replace it?", record_file))? {
        return Ok(ModeOutcome::Cancelled);
    }

    let kind = session.ask_media_kind()?;
    store.save(&layout::blank_record(kind, &session.config.album))?;
    println!("\nCreated blank {} template!", record_file);
    Ok(ModeOutcome::Completed)
}

/// Mode 3: derive the record from the files in the category directory.
pub fn generate_from_files(session: &mut Session<'_>) -> Result<ModeOutcome> {
    let store = session.store();
    let record_file = session.config.album.record_file.clone();
    if store.exists()
        && !session.confirm(&format!(
            "\n{} already exists. Would you like to update it?",
            record_file
        ))?
    {
        return Ok(ModeOutcome::Cancelled);
    }

    let resolved = media::resolve(&session.base)?;
    let dir_name = resolved.kind.dir_name();
    if resolved.created {
        println!("Created {}/ directory", dir_name);
    }
    if resolved.files.is_empty() {
        let outcome = abort(format!("No media files found in {}/!", dir_name));
        println!("Supported formats: {}", supported_formats());
        return Ok(outcome);
    }

    let existing = store.load();
    if existing.is_none() && store.exists() {
        println!("Note: No valid {} found, will create new one.", record_file);
    }

    let suggestions = imported_titles(session, resolved.files.len())?;

    println!(
        "\nEnter album details, then a name for each file in {}/ (press Enter to keep the value in parentheses):",
        dir_name
    );
    let record = sync::derive_from_files(
        resolved.kind,
        &resolved.files,
        existing.as_ref(),
        &suggestions,
        &session.config.album.version,
        &session.config.album.info_file,
        session.prompter,
    )?;
    store.save(&record)?;
    layout::ensure_info_file(&session.base, &session.config.album)?;

    println!("\nUpdated {} successfully!", record_file);
    println!("Successfully processed {} files!", resolved.files.len());
    Ok(ModeOutcome::Completed)
}

/// Mode 4: rename the files to match the record.
pub fn rename_from_record(session: &mut Session<'_>) -> Result<ModeOutcome> {
    let record_file = session.config.album.record_file.clone();
    let record = match session.store().load() {
        Some(record) => record,
        None => return Ok(abort(format!("Error: No valid {} found!", record_file))),
    };

    let resolved = media::resolve(&session.base)?;
    // An empty active list is left to the planner, which reports it by name.
    if resolved.kind != record.kind() && !record.entries().is_empty() {
        warn!(
            "{} declares {} but the media directory holds {}",
            record_file,
            record.kind(),
            resolved.kind
        );
        return Ok(abort(format!(
            "Error: {} declares type {} but the media directory is {}/",
            record_file,
            record.kind(),
            resolved.kind.dir_name()
        )));
    }

    let plan = match sync::plan_renames(&resolved.files, &record) {
        Ok(plan) => plan,
        Err(e) => {
            warn!("Rename plan rejected: {}", e);
            return Ok(abort(format!("Error: {}", e)));
        }
    };
    if plan.iter().all(|p| p.is_noop()) {
        println!("All files already match {}", record_file);
        return Ok(ModeOutcome::Completed);
    }

    println!("\nProposed changes:");
    println!("----------------");
    for pair in &plan {
        println!("{} -> {}", pair.from, pair.to);
    }
    if !session.confirm("\nProceed with renaming?")? {
        return Ok(ModeOutcome::Cancelled);
    }

    let summary = apply::apply_renames(&resolved.dir, &plan, &session.config.rename);
    Ok(ModeOutcome::Renamed(summary))
}

/// Titles from the track-list file, if present and accepted, used as the
/// per-position suggestions.
fn imported_titles(session: &mut Session<'_>, file_count: usize) -> Result<Vec<String>> {
    let list_file = session.config.album.tracklist_file.clone();
    let titles = match tracklist::load(&session.base.join(&list_file)) {
        Ok(Some(titles)) if !titles.is_empty() => titles,
        Ok(_) => return Ok(Vec::new()),
        Err(e) => {
            warn!("Ignoring {}: {:#}", list_file, e);
            return Ok(Vec::new());
        }
    };
    if !session
        .prompter
        .ask_yes_no(&format!("\nUse the titles from {}?", list_file))?
    {
        return Ok(Vec::new());
    }
    if titles.len() != file_count {
        warn!("{} lists {} titles for {} files", list_file, titles.len(), file_count);
        println!(
            "Warning: Number of files ({}) doesn't match number of titles in {} ({})",
            file_count,
            list_file,
            titles.len()
        );
    }
    Ok(titles)
}

fn supported_formats() -> String {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|e| format!(".{}", e))
        .collect::<Vec<_>>()
        .join(", ")
}
