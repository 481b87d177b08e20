//! Video source classification for the watch page player.
//!
//! A video's `video_url` is either a direct media file (HLS playlist or MP4)
//! or a third-party page meant for an embed frame. Classification never
//! fails: a URL that does not parse falls back to the embed player instead
//! of failing the page.

use serde::Serialize;
use url::Url;

/// How the front-end should mount a video source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerSource {
    /// HLS playlist (`.m3u8`), played via an HLS-capable player.
    Hls,
    /// Direct media file (`.mp4`), played via a native video element.
    File,
    /// Anything else, including malformed URLs: a sandboxed embed frame.
    Embed,
}

/// Classify a raw `video_url` into a [`PlayerSource`].
pub fn classify_source(video_url: &str) -> PlayerSource {
    let Ok(parsed) = Url::parse(video_url) else {
        return PlayerSource::Embed;
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return PlayerSource::Embed;
    }
    let path = parsed.path();
    if path.ends_with(".m3u8") {
        PlayerSource::Hls
    } else if path.ends_with(".mp4") {
        PlayerSource::File
    } else {
        PlayerSource::Embed
    }
}
