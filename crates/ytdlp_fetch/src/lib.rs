//! # ytdlp_fetch
//!
//! A thin wrapper around the `yt-dlp` executable for extracting audio
//! from video URLs. The binary must be available on `PATH` (or at an
//! explicit location) at runtime.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

#[derive(Debug, thiserror::Error)]
pub enum YtDlpError {
    #[error("failed to spawn yt-dlp: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("yt-dlp exited with {status}: {stderr}")]
    CommandFailed { status: String, stderr: String },
}

/// Handle to a `yt-dlp` installation.
#[derive(Debug, Clone)]
pub struct YtDlp {
    executable: PathBuf,
    cookies_path: Option<PathBuf>,
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new()
    }
}

impl YtDlp {
    pub fn new() -> Self {
        YtDlp {
            executable: PathBuf::from("yt-dlp"),
            cookies_path: None,
        }
    }

    /// Uses a cookies file for age-restricted or region-locked videos.
    pub fn new_with_cookies(cookies_path: Option<PathBuf>) -> Self {
        YtDlp {
            executable: PathBuf::from("yt-dlp"),
            cookies_path,
        }
    }

    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Downloads the best available audio stream for `url` and extracts it
    /// into `audio_format` at `output_template`. The template follows
    /// yt-dlp output template syntax, e.g. `audio.%(ext)s`.
    pub fn download_audio(
        &self,
        url: &str,
        audio_format: &str,
        output_template: impl AsRef<Path>,
    ) -> Result<(), YtDlpError> {
        let mut cmd = Command::new(&self.executable);
        cmd.args(["-f", "bestaudio/best"])
            .args(["-x", "--audio-format", audio_format])
            .arg("--no-playlist")
            .arg("--no-check-certificate")
            .arg("-q")
            .arg("-o")
            .arg(output_template.as_ref());

        if let Some(cookies) = &self.cookies_path {
            cmd.arg("--cookies").arg(cookies);
        }

        cmd.arg(url);

        tracing::debug!(?cmd, "Invoking yt-dlp");
        let output = cmd.output()?;

        if !output.status.success() {
            return Err(YtDlpError::CommandFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }
}
