//! `fileinfo/streamdetails` parsing

use super::extract::{get_int, get_text};
use crate::model::{AudioStream, StreamDetails, SubStream, VideoStream};
use crate::xml::{find_child, find_children};
use roxmltree::Node;

/// Parse a `<video>` element
pub fn parse_video_stream(node: Node<'_, '_>) -> VideoStream {
    VideoStream {
        codec: get_text(node, "codec"),
        width: get_int(node, "width"),
        height: get_int(node, "height"),
    }
}

/// Parse an `<audio>` element
pub fn parse_audio_stream(node: Node<'_, '_>) -> AudioStream {
    AudioStream {
        codec: get_text(node, "codec"),
        language: get_text(node, "language"),
        channels: get_int(node, "channels"),
    }
}

/// Parse a `<subtitle>` element
pub fn parse_sub_stream(node: Node<'_, '_>) -> SubStream {
    SubStream {
        language: get_text(node, "language"),
    }
}

/// Parse the streams listed under a `<fileinfo>` element
///
/// A missing `fileinfo` or a `fileinfo` without `streamdetails` gives an
/// empty [`StreamDetails`].
pub fn parse_stream_details(fileinfo: Option<Node<'_, '_>>) -> StreamDetails {
    let Some(details) = fileinfo.and_then(|info| find_child(info, "streamdetails")) else {
        return StreamDetails::default();
    };

    StreamDetails {
        videos: find_children(details, "video").map(parse_video_stream).collect(),
        audios: find_children(details, "audio").map(parse_audio_stream).collect(),
        subs: find_children(details, "subtitle").map(parse_sub_stream).collect(),
    }
}
