//! Core library: filename sanitizing, media directory resolution, album
//! record persistence and file/metadata synchronization.

pub mod config;
pub mod error;
pub mod layout;
pub mod media;
pub mod models;
pub mod prompt;
pub mod sanitize;
pub mod store;
pub mod sync;
pub mod tracklist;
