//! Plain-text title lists: one title per line, with an optional `index|`
//! prefix that is dropped.

use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub fn parse(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.rsplit('|').next().unwrap_or(line).trim())
        .filter(|title| !title.is_empty())
        .map(String::from)
        .collect()
}

/// `Ok(None)` when the list file does not exist.
pub fn load(path: &Path) -> anyhow::Result<Option<Vec<String>>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(parse(&text))),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_index_prefix_and_blank_lines() {
        let text = "1|Intro\n\n 2 | Main Theme \nOutro\r\n   \n";
        assert_eq!(parse(text), vec!["Intro", "Main Theme", "Outro"]);
    }

    #[test]
    fn keeps_text_after_last_pipe() {
        assert_eq!(parse("3|a|b"), vec!["b"]);
        assert!(parse("4|").is_empty());
    }

    #[test]
    fn missing_file_is_none() {
        let temp = tempfile::tempdir().unwrap();
        assert!(load(&temp.path().join("tracks.txt")).unwrap().is_none());
        fs::write(temp.path().join("tracks.txt"), "Song").unwrap();
        assert_eq!(
            load(&temp.path().join("tracks.txt")).unwrap(),
            Some(vec!["Song".to_string()])
        );
    }
}
