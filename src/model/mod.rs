//! Video library data model
//!
//! Plain value types, independent of the XML they are parsed from.
//! Every optional field is an `Option` so that a tag missing from the
//! export stays distinguishable from an empty or zero value.

mod database;
mod movie;
mod series;
mod stream;

pub use database::Database;
pub use movie::{Episode, Movie};
pub use series::Series;
pub use stream::{AudioStream, StreamDetails, StreamRef, SubStream, VideoStream};

use std::fmt;

/// Display adapter printing `None` for absent values
struct Shown<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for Shown<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("None"),
        }
    }
}
