use std::fmt;

/// One of the three user-triggered pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Transcribe,
    Summarize,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Fetch => write!(f, "fetch"),
            Stage::Transcribe => write!(f, "transcribe"),
            Stage::Summarize => write!(f, "summarize"),
        }
    }
}

/// Stage-level failures. Per-chunk summarization failures are not fatal
/// and are reported through `ChunkedSummary` instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not a recognizable video URL: {0}")]
    InvalidUrl(String),

    #[error("the {stage} stage requires {artifact}, which has not been produced yet")]
    PrerequisiteMissing { stage: Stage, artifact: String },

    #[error("audio download produced no usable output: {0}")]
    DownloadFailed(String),

    #[error("transcription failed: {0}")]
    Transcription(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
