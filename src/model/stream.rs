use super::Shown;
use std::fmt;

/// A single video track
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoStream {
    /// Codec name as written by the exporter (e.g. "h264")
    pub codec: Option<String>,

    /// Frame width in pixels
    pub width: Option<u32>,

    /// Frame height in pixels
    pub height: Option<u32>,
}

/// A single audio track
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioStream {
    pub codec: Option<String>,

    /// Language code, kept as written (usually ISO 639-2, e.g. "eng")
    pub language: Option<String>,

    /// Channel count (6 for 5.1)
    pub channels: Option<u32>,
}

/// A single subtitle track
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubStream {
    pub language: Option<String>,
}

/// All elementary streams of one media file, each kind in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamDetails {
    pub videos: Vec<VideoStream>,
    pub audios: Vec<AudioStream>,
    pub subs: Vec<SubStream>,
}

/// Borrowed view of any one stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamRef<'a> {
    Video(&'a VideoStream),
    Audio(&'a AudioStream),
    Sub(&'a SubStream),
}

impl StreamDetails {
    /// Total number of streams of all kinds
    pub fn len(&self) -> usize {
        self.videos.len() + self.audios.len() + self.subs.len()
    }

    /// True when no stream of any kind is listed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Videos, then audios, then subtitles
    pub fn iter(&self) -> impl Iterator<Item = StreamRef<'_>> {
        self.videos
            .iter()
            .map(StreamRef::Video)
            .chain(self.audios.iter().map(StreamRef::Audio))
            .chain(self.subs.iter().map(StreamRef::Sub))
    }
}

impl fmt::Display for VideoStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VideoStream(codec=<{}>, width=<{}>, height=<{}>)",
            Shown(&self.codec),
            Shown(&self.width),
            Shown(&self.height)
        )
    }
}

impl fmt::Display for AudioStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AudioStream(codec=<{}>, language=<{}>, channels=<{}>)",
            Shown(&self.codec),
            Shown(&self.language),
            Shown(&self.channels)
        )
    }
}

impl fmt::Display for SubStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubStream(language=<{}>)", Shown(&self.language))
    }
}

impl fmt::Display for StreamRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamRef::Video(stream) => fmt::Display::fmt(stream, f),
            StreamRef::Audio(stream) => fmt::Display::fmt(stream, f),
            StreamRef::Sub(stream) => fmt::Display::fmt(stream, f),
        }
    }
}
