use std::{fmt::Debug, future::Future};

/// A remote abstractive summarization model, called once per transcript
/// chunk, one request in flight at a time.
pub trait Summarizer {
    const SUMMARIZER_MODEL: &'static str;

    type Error: Debug;

    /// Summarizes a single chunk. `Ok(None)` means the endpoint answered
    /// successfully but returned no usable summary for this chunk; the
    /// caller skips it without treating the run as failed.
    fn summarize_chunk(
        &self,
        chunk: &str,
    ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send;
}
