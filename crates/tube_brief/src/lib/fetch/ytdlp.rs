use std::{
    ops::Deref,
    path::{Path, PathBuf},
};

use ytdlp_fetch::YtDlp;

use crate::AudioFetcher;

pub struct YtDlpFetcher(pub YtDlp);

impl Deref for YtDlpFetcher {
    type Target = YtDlp;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AudioFetcher for YtDlpFetcher {
    fn fetch(&self, video_url: &str, output_path: &Path) -> anyhow::Result<PathBuf> {
        let stem = output_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("audio");
        let format = output_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("wav");
        let parent = output_path.parent().unwrap_or_else(|| Path::new("."));

        let output_template = parent.join(format!("{stem}.%(ext)s"));

        if let Err(e) = self
            .download_audio(video_url, format, &output_template)
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to download audio"))
        {
            anyhow::bail!("Failed to download audio: {:?}", e);
        }

        // yt-dlp occasionally doubles the extension when the source
        // container already matches the requested format
        let double_ext = parent.join(format!("{stem}.{format}.{format}"));
        if !output_path.exists() && double_ext.exists() {
            std::fs::rename(&double_ext, output_path)?;
        }

        if !output_path.exists() {
            anyhow::bail!(
                "yt-dlp did not produce expected file: {}",
                output_path.display()
            );
        }

        Ok(output_path.to_path_buf())
    }
}
