mod chunker;
mod cleaner;
mod error;
mod fetch;
mod llm;
mod pipeline;
pub mod server;
mod summarize;
pub mod tracing;

pub use chunker::chunk_text;
pub use cleaner::clean_summary;
pub use error::{Error, Stage};
pub use fetch::{ytdlp::YtDlpFetcher, AudioFetcher};
pub use llm::{
    hf::{GenerationParams, HfError, HfInferenceClient, SummarizerConfig},
    summarizer::Summarizer,
    transcriber::Transcriber,
    whisper::{WhisperCli, WhisperError},
};
pub use pipeline::{builder::BriefPipelineBuilder, BriefPipeline};
pub use summarize::{summarize_transcript, ChunkFailure, ChunkedSummary};
