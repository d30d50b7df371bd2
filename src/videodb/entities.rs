//! Movie, episode and series parsing

use super::extract::{get_duration, get_int, get_text};
use super::streams::parse_stream_details;
use crate::model::{Episode, Movie, Series};
use crate::xml::{find_child, find_descendants};
use roxmltree::Node;

/// Parse a `<movie>` element
pub fn parse_movie(node: Node<'_, '_>) -> Movie {
    let movie = Movie {
        title: get_text(node, "title"),
        year: get_int(node, "year"),
        duration: get_duration(node, "runtime"),
        streams: parse_stream_details(find_child(node, "fileinfo")),
    };
    log::debug!("Parsed movie: {:?} ({} streams)", movie.title, movie.streams.len());
    movie
}

/// Parse an `<episodedetails>` element, standalone or nested in a `<tvshow>`
pub fn parse_episode(node: Node<'_, '_>) -> Episode {
    Episode {
        title: get_text(node, "title"),
        year: get_int(node, "year"),
        duration: get_duration(node, "runtime"),
        season: get_int(node, "season"),
        episode: get_int(node, "episode"),
        streams: parse_stream_details(find_child(node, "fileinfo")),
    }
}

/// Parse a `<tvshow>` element and every `<episodedetails>` below it
///
/// Title, year, season and episode come from the show's own children only;
/// they are never aggregated from the episodes.
pub fn parse_series(node: Node<'_, '_>) -> Series {
    let series = Series {
        title: get_text(node, "title"),
        year: get_int(node, "year"),
        season: get_int(node, "season"),
        episode: get_int(node, "episode"),
        episodes: find_descendants(node, "episodedetails")
            .map(parse_episode)
            .collect(),
    };
    log::debug!(
        "Parsed series: {:?} ({} episodes)",
        series.title,
        series.episodes.len()
    );
    series
}
