use std::{fmt::Debug, future::Future, path::Path};

/// Speech-to-text over a local audio file. Produces the full transcript
/// in one call; there is no partial or streaming output.
pub trait Transcriber {
    /// Model size tier, e.g. "small".
    const MODEL_SIZE: &'static str;

    type Error: Debug;

    fn transcribe(
        &self,
        audio_path: &Path,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
