use std::path::PathBuf;

use crate::{
    fetch::{extract_video_id, strip_query},
    summarize_transcript, AudioFetcher, ChunkedSummary, Error, Stage, Summarizer, Transcriber,
};

pub mod builder;

/// The three-stage video digest pipeline. Each stage is independently
/// user-triggered, runs to completion, and is gated on the artifact its
/// predecessor left in `workdir`. Artifacts have fixed names and are
/// fully overwritten on re-run; concurrent sessions sharing a workdir
/// are last-writer-wins (single-user deployment).
pub struct BriefPipeline<F, T, S>
where
    F: AudioFetcher + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    workdir: PathBuf,
    fetcher: F,
    transcriber: T,
    summarizer: S,
    max_chunk_chars: usize,
}

impl<F, T, S> BriefPipeline<F, T, S>
where
    F: AudioFetcher + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub const AUDIO_FILENAME: &'static str = "audio.wav";
    pub const TRANSCRIPT_FILENAME: &'static str = "transcript.txt";

    pub fn audio_artifact(&self) -> PathBuf {
        self.workdir.join(Self::AUDIO_FILENAME)
    }

    pub fn transcript_artifact(&self) -> PathBuf {
        self.workdir.join(Self::TRANSCRIPT_FILENAME)
    }

    /// Resolves `video_url` to the local audio artifact.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, video_url: &str) -> Result<PathBuf, Error> {
        let video_id = extract_video_id(video_url)
            .ok_or_else(|| Error::InvalidUrl(video_url.to_string()))?;
        let url = strip_query(video_url);

        std::fs::create_dir_all(&self.workdir)?;
        let audio_path = self.audio_artifact();

        tracing::info!(video_id, "Downloading audio");
        self.fetcher
            .fetch(url, &audio_path)
            .map_err(|e| Error::DownloadFailed(format!("{e:#}")))?;

        Ok(audio_path)
    }

    /// Transcribes the downloaded audio and persists the transcript
    /// artifact. Requires a prior successful fetch.
    #[tracing::instrument(skip(self))]
    pub async fn transcribe(&self) -> Result<String, Error> {
        let audio_path = self.audio_artifact();
        if !audio_path.exists() {
            return Err(Error::PrerequisiteMissing {
                stage: Stage::Transcribe,
                artifact: Self::AUDIO_FILENAME.into(),
            });
        }

        let text = self
            .transcriber
            .transcribe(&audio_path)
            .await
            .map_err(|e| Error::Transcription(format!("{e:?}")))?;

        std::fs::write(self.transcript_artifact(), &text)?;

        Ok(text)
    }

    /// Runs the chunked summarization over the persisted transcript.
    /// Requires a prior successful transcription.
    #[tracing::instrument(skip(self))]
    pub async fn summarize(&self) -> Result<ChunkedSummary, Error> {
        let transcript_path = self.transcript_artifact();
        if !transcript_path.exists() {
            return Err(Error::PrerequisiteMissing {
                stage: Stage::Summarize,
                artifact: Self::TRANSCRIPT_FILENAME.into(),
            });
        }

        let transcript = std::fs::read_to_string(&transcript_path)?;
        Ok(self.summarize_text(&transcript).await)
    }

    async fn summarize_text(&self, transcript: &str) -> ChunkedSummary {
        summarize_transcript(&self.summarizer, transcript, self.max_chunk_chars).await
    }

    /// One-shot run of all three stages. The transcript is handed
    /// directly from the transcribe stage to the summarizer; the stage
    /// artifacts are still written for later inspection.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self, video_url: &str) -> Result<ChunkedSummary, Error> {
        self.fetch(video_url).await?;
        let transcript = self.transcribe().await?;
        Ok(self.summarize_text(&transcript).await)
    }
}
