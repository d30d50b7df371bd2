use super::movie::Episode;

/// A TV series with the episodes listed under it
///
/// `season` and `episode` describe the series' own listing (for example the
/// latest aired episode) and are independent of the contained episodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Series {
    pub title: Option<String>,
    pub year: Option<u32>,
    pub season: Option<u32>,
    pub episode: Option<u32>,

    /// Episodes in document order
    pub episodes: Vec<Episode>,
}

impl Series {
    /// Number of episodes listed under this series
    pub fn episode_count(&self) -> usize {
        self.episodes.len()
    }

    /// Episodes belonging to the given season
    pub fn season_episodes(&self, season: u32) -> impl Iterator<Item = &Episode> {
        self.episodes
            .iter()
            .filter(move |episode| episode.season == Some(season))
    }
}
