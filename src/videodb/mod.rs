//! Video library export parsing
//!
//! Maps the nodes of a parsed `videodb.xml` onto the [`crate::model`] types.
//! Every field is optional in the export, so every extraction degrades
//! to `None` instead of failing.

mod config;
mod database;
mod entities;
mod extract;
mod streams;

pub use config::{ParseConfig, DEFAULT_PARALLEL_THRESHOLD};
pub use database::{parse_database, parse_database_with};
pub use entities::{parse_episode, parse_movie, parse_series};
pub use extract::{get_duration, get_int, get_text};
pub use streams::{parse_audio_stream, parse_stream_details, parse_sub_stream, parse_video_stream};

use crate::model::Database;
use crate::xml;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse a complete video library from XML text
pub fn parse_library_str(xml_text: &str, config: &ParseConfig) -> Result<Database> {
    let doc = xml::load_str(xml_text).context("Failed to load video library XML")?;
    Ok(parse_database_with(doc.root_element(), config))
}

/// Parse a complete video library from an exported `videodb.xml`
///
/// # Arguments
/// * `path` - Path to the export (Kodi writes it as `videodb.xml`)
/// * `config` - Parser scheduling options
///
/// # Returns
/// A Database containing every movie and series in the export
pub fn parse_library_file(path: &Path, config: &ParseConfig) -> Result<Database> {
    log::info!("Parsing video library from {:?}", path);

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read video library: {:?}", path))?;
    let doc = xml::load_str(&content)
        .with_context(|| format!("Failed to load video library XML: {:?}", path))?;

    Ok(parse_database_with(doc.root_element(), config))
}
