use std::path::{Path, PathBuf};

use crate::Transcriber;

#[derive(Debug, thiserror::Error)]
pub enum WhisperError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("whisper exited with {status}: {stderr}")]
    CommandFailed { status: String, stderr: String },
    #[error("invalid audio path: {0}")]
    InvalidPath(PathBuf),
    #[error("whisper produced no transcript at {0}")]
    MissingTranscript(PathBuf),
}

/// Transcriber backed by the local `whisper` command line tool. The tool
/// writes a `<input stem>.txt` next to its other outputs; we point it at
/// a scratch directory and read that file back.
#[derive(Debug, Clone)]
pub struct WhisperCli {
    executable: PathBuf,
    scratch_dir: PathBuf,
}

impl WhisperCli {
    pub fn new(scratch_dir: impl Into<PathBuf>) -> Self {
        WhisperCli {
            executable: PathBuf::from("whisper"),
            scratch_dir: scratch_dir.into(),
        }
    }

    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }
}

impl Transcriber for WhisperCli {
    const MODEL_SIZE: &'static str = "small";
    type Error = WhisperError;

    async fn transcribe(&self, audio_path: &Path) -> Result<String, Self::Error> {
        let stem = audio_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| WhisperError::InvalidPath(audio_path.to_path_buf()))?;

        tokio::fs::create_dir_all(&self.scratch_dir).await?;

        tracing::info!(model = Self::MODEL_SIZE, audio = %audio_path.display(), "Transcribing audio");
        let output = tokio::process::Command::new(&self.executable)
            .arg(audio_path)
            .args(["--model", Self::MODEL_SIZE])
            .args(["--output_format", "txt"])
            .arg("--output_dir")
            .arg(&self.scratch_dir)
            .output()
            .await?;

        if !output.status.success() {
            return Err(WhisperError::CommandFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let transcript_path = self.scratch_dir.join(format!("{stem}.txt"));
        let text = tokio::fs::read_to_string(&transcript_path)
            .await
            .map_err(|_| WhisperError::MissingTranscript(transcript_path))?;

        Ok(text.trim().to_string())
    }
}
