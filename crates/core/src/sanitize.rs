//! Turns free-form titles into safe, numbered filename stems.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters reserved in filenames on at least one common platform.
pub const RESERVED_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+[- _.]+").unwrap());

/// Strips reserved characters and trailing spaces/periods from a title.
pub fn clean_title(title: &str) -> String {
    let cleaned: String = title.chars().filter(|c| !RESERVED_CHARS.contains(c)).collect();
    cleaned.trim_end_matches([' ', '.']).to_string()
}

/// Builds the canonical `NN - Title` stem. Total over any input: an empty
/// cleaned title yields the bare prefix.
pub fn sanitize(title: &str, index: u32) -> String {
    format!("{:02} - {}", index, clean_title(title))
}

/// Drops a leading track number such as `03 - ` or `7_` from a stem.
pub fn strip_leading_number(stem: &str) -> &str {
    match LEADING_NUMBER.find(stem) {
        Some(m) => &stem[m.end()..],
        None => stem,
    }
}
