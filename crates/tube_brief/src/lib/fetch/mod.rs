pub mod ytdlp;

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;

static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:v=|youtu\.be/|/shorts/|/embed/)([0-9A-Za-z_-]{11})").unwrap()
});

/// Resolves a video URL to a local audio file at `output_path`.
pub trait AudioFetcher {
    fn fetch(&self, video_url: &str, output_path: &Path) -> anyhow::Result<PathBuf>;
}

/// Pulls the 11-character video id out of the usual YouTube URL shapes.
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Drops the query-string portion of a URL before it is handed to the
/// downloader.
pub fn strip_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}
