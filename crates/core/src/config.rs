use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub album: AlbumConfig,
    pub rename: RenameConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumConfig {
    /// Schema version written into new records.
    pub version: String,
    pub record_file: String,
    pub info_file: String,
    /// First line of a freshly created notes file.
    pub info_template: String,
    pub cover_file: String,
    pub tracklist_file: String,
}

impl Default for AlbumConfig {
    fn default() -> Self {
        Self {
            version: "1.1.0".to_string(),
            record_file: "album.json".to_string(),
            info_file: "more_info.txt".to_string(),
            info_template: "Album information".to_string(),
            cover_file: "album_cover.png".to_string(),
            tracklist_file: "tracks.txt".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameConfig {
    pub conflict: ConflictPolicy,
    pub dry_run: bool,
}

/// What to do when a rename target already exists on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    #[default]
    Skip,
    Overwrite,
    Suffix,
}

pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    settings = settings.add_source(config::Environment::with_prefix("ALBUM_SETUP").separator("__"));
    let cfg = settings.build()?;
    Ok(cfg.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("setup.toml");
        fs::write(
            &path,
            "[album]\nrecord_file = \"release.json\"\n\n[rename]\nconflict = \"suffix\"\n",
        )
        .unwrap();

        let cfg = load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(cfg.album.record_file, "release.json");
        assert_eq!(cfg.album.info_file, "more_info.txt");
        assert_eq!(cfg.rename.conflict, ConflictPolicy::Suffix);
        assert!(!cfg.rename.dry_run);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nope.toml");
        assert!(load(Some(path.to_str().unwrap())).is_err());
    }
}
