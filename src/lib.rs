//! mkv-info - video library export reader
//!
//! This library turns a media-library export (`videodb.xml`) into a typed,
//! in-memory model of movies, series, episodes and their streams.

pub mod error;
pub mod model;
pub mod videodb;
pub mod xml;

pub use error::LoadError;
pub use model::{
    AudioStream, Database, Episode, Movie, Series, StreamDetails, StreamRef, SubStream,
    VideoStream,
};
pub use videodb::{parse_database, parse_library_file, parse_library_str, ParseConfig};
