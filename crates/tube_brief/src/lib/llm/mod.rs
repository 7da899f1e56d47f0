pub mod hf;
pub mod summarizer;
pub mod transcriber;
pub mod whisper;
