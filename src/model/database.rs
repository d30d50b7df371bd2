use super::{Movie, Series};

/// Complete video library: every movie and series of one export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
    /// Movies in document order
    pub movies: Vec<Movie>,

    /// Series in document order
    pub series: Vec<Series>,
}

impl Database {
    /// Total number of movies
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Total number of series
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Total number of episodes across all series
    pub fn episode_count(&self) -> usize {
        self.series.iter().map(Series::episode_count).sum()
    }

    /// True when the export contained neither movies nor series
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty() && self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Episode;

    #[test]
    fn test_database_creation() {
        let db = Database::default();
        assert!(db.is_empty());
        assert_eq!(db.movie_count(), 0);
        assert_eq!(db.series_count(), 0);
        assert_eq!(db.episode_count(), 0);
    }

    #[test]
    fn test_counts() {
        let db = Database {
            movies: vec![Movie::default(), Movie::default()],
            series: vec![
                Series {
                    episodes: vec![Episode::default(); 3],
                    ..Series::default()
                },
                Series {
                    episodes: vec![Episode::default()],
                    ..Series::default()
                },
            ],
        };

        assert!(!db.is_empty());
        assert_eq!(db.movie_count(), 2);
        assert_eq!(db.series_count(), 2);
        assert_eq!(db.episode_count(), 4);
    }
}
