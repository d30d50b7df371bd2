use super::stream::{AudioStream, StreamDetails, StreamRef, SubStream, VideoStream};
use super::Shown;
use chrono::TimeDelta;
use std::fmt;
use std::slice;

/// A single movie entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Movie {
    pub title: Option<String>,

    /// Release year
    pub year: Option<u32>,

    /// Running time, always whole minutes
    pub duration: Option<TimeDelta>,

    pub streams: StreamDetails,
}

/// A single episode, either nested in a series or standalone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Episode {
    pub title: Option<String>,
    pub year: Option<u32>,

    /// Running time, always whole minutes
    pub duration: Option<TimeDelta>,

    pub season: Option<u32>,
    pub episode: Option<u32>,
    pub streams: StreamDetails,
}

impl Movie {
    pub fn video_streams(&self) -> slice::Iter<'_, VideoStream> {
        self.streams.videos.iter()
    }

    pub fn audio_streams(&self) -> slice::Iter<'_, AudioStream> {
        self.streams.audios.iter()
    }

    pub fn sub_streams(&self) -> slice::Iter<'_, SubStream> {
        self.streams.subs.iter()
    }

    /// Every stream: videos, then audios, then subtitles
    pub fn streams_iter(&self) -> impl Iterator<Item = StreamRef<'_>> {
        self.streams.iter()
    }
}

impl Episode {
    pub fn video_streams(&self) -> slice::Iter<'_, VideoStream> {
        self.streams.videos.iter()
    }

    pub fn audio_streams(&self) -> slice::Iter<'_, AudioStream> {
        self.streams.audios.iter()
    }

    pub fn sub_streams(&self) -> slice::Iter<'_, SubStream> {
        self.streams.subs.iter()
    }

    /// Every stream: videos, then audios, then subtitles
    pub fn streams_iter(&self) -> impl Iterator<Item = StreamRef<'_>> {
        self.streams.iter()
    }
}

/// Header line, then one tab-indented line per stream
impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.duration.map(|d| format!("{} min", d.num_minutes()));
        write!(
            f,
            "Movie(title=<{}>, year=<{}>, duration=<{}>)",
            Shown(&self.title),
            Shown(&self.year),
            Shown(&minutes)
        )?;
        for stream in self.streams_iter() {
            write!(f, "\n\t{}", stream)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn odyssey() -> Movie {
        Movie {
            title: Some("2001: A Space Odyssey".to_string()),
            year: Some(1968),
            duration: TimeDelta::try_minutes(149),
            streams: StreamDetails {
                videos: vec![VideoStream {
                    codec: Some("h264".to_string()),
                    width: Some(1920),
                    height: Some(864),
                }],
                audios: vec![AudioStream {
                    codec: Some("ac-3".to_string()),
                    language: Some("eng".to_string()),
                    channels: Some(6),
                }],
                subs: vec![SubStream {
                    language: Some("eng".to_string()),
                }],
            },
        }
    }

    #[test]
    fn test_stream_accessors() {
        let movie = odyssey();

        assert_eq!(movie.video_streams().count(), 1);
        assert_eq!(movie.audio_streams().next().unwrap().channels, Some(6));
        assert_eq!(movie.sub_streams().count(), 1);
        assert_eq!(movie.streams_iter().count(), 3);
    }

    #[test]
    fn test_movie_display() {
        let rendered = odyssey().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Movie(title=<2001: A Space Odyssey>, year=<1968>, duration=<149 min>)"
        );
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("\tVideoStream("));
        assert!(lines[3].starts_with("\tSubStream("));
    }

    #[test]
    fn test_empty_movie_display() {
        assert_eq!(
            Movie::default().to_string(),
            "Movie(title=<None>, year=<None>, duration=<None>)"
        );
    }

    #[test]
    fn test_episode_streams_iter() {
        let episode = Episode {
            streams: odyssey().streams,
            ..Episode::default()
        };

        assert_eq!(episode.video_streams().count(), 1);
        assert_eq!(episode.audio_streams().count(), 1);
        assert_eq!(episode.sub_streams().count(), 1);
        assert!(matches!(
            episode.streams_iter().last(),
            Some(StreamRef::Sub(_))
        ));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(odyssey(), odyssey());
        assert_ne!(odyssey(), Movie::default());
    }
}
