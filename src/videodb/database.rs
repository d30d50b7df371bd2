//! Whole-document assembly

use super::config::ParseConfig;
use super::entities::{parse_movie, parse_series};
use crate::model::{Database, Movie, Series};
use crate::xml::find_descendants;
use roxmltree::Node;
use rayon::prelude::*;

/// Collect every `<movie>` and `<tvshow>` below `root`, at any depth
pub fn parse_database(root: Node<'_, '_>) -> Database {
    parse_database_with(root, &ParseConfig::default())
}

/// Same as [`parse_database`], scheduled according to `config`
///
/// Parallel runs collect through rayon's indexed iterators, so movies and
/// series stay in document order either way.
pub fn parse_database_with(root: Node<'_, '_>, config: &ParseConfig) -> Database {
    let movie_nodes: Vec<Node<'_, '_>> = find_descendants(root, "movie").collect();
    let show_nodes: Vec<Node<'_, '_>> = find_descendants(root, "tvshow").collect();

    let movies: Vec<Movie> = if config.use_parallel(movie_nodes.len()) {
        log::debug!("Parsing {} movies in parallel", movie_nodes.len());
        movie_nodes.par_iter().map(|node| parse_movie(*node)).collect()
    } else {
        movie_nodes.iter().map(|node| parse_movie(*node)).collect()
    };

    let series: Vec<Series> = if config.use_parallel(show_nodes.len()) {
        log::debug!("Parsing {} series in parallel", show_nodes.len());
        show_nodes.par_iter().map(|node| parse_series(*node)).collect()
    } else {
        show_nodes.iter().map(|node| parse_series(*node)).collect()
    };

    let database = Database { movies, series };
    log::info!(
        "Parsed video library: {} movies, {} series, {} episodes",
        database.movie_count(),
        database.series_count(),
        database.episode_count()
    );
    database
}
