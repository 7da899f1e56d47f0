//! The chunked summarization run: split the transcript, summarize each
//! chunk in order through the remote model, repair repetition artifacts
//! per chunk and once more across the joined result.

use serde::Serialize;

use crate::{chunk_text, clean_summary, Summarizer};

/// A per-chunk remote call failure. The run continues past these; they
/// are collected for display instead of aborting.
#[derive(Debug, Clone, Serialize)]
pub struct ChunkFailure {
    /// 1-based chunk number.
    pub chunk: usize,
    pub message: String,
}

/// Outcome of one summarization run. Zero successful chunks is not an
/// error; `text` is simply empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChunkedSummary {
    pub text: String,
    pub chunks_total: usize,
    /// Chunks whose response had no usable summary (skipped silently).
    pub chunks_skipped: usize,
    pub failures: Vec<ChunkFailure>,
}

impl ChunkedSummary {
    pub fn chunks_failed(&self) -> usize {
        self.failures.len()
    }
}

/// Summarizes `transcript` chunk by chunk, strictly in order with one
/// request in flight at a time. A failing chunk contributes nothing and
/// the run moves on to the next.
pub async fn summarize_transcript<S: Summarizer>(
    summarizer: &S,
    transcript: &str,
    max_chunk_chars: usize,
) -> ChunkedSummary {
    let chunks = chunk_text(transcript, max_chunk_chars);
    let total = chunks.len();

    let mut summaries = Vec::with_capacity(total);
    let mut skipped = 0usize;
    let mut failures = Vec::new();

    for (i, chunk) in chunks.iter().enumerate() {
        tracing::info!(chunk = i + 1, total, "Summarizing chunk");

        match summarizer.summarize_chunk(chunk).await {
            Ok(Some(summary)) => summaries.push(clean_summary(&summary)),
            Ok(None) => {
                tracing::debug!(chunk = i + 1, total, "No summary in response, skipping chunk");
                skipped += 1;
            }
            Err(e) => {
                tracing::error!(chunk = i + 1, total, error = ?e, "Failed to summarize chunk");
                failures.push(ChunkFailure {
                    chunk: i + 1,
                    message: format!("{e:?}"),
                });
            }
        }
    }

    // the joined text is cleaned once more to catch repeats spanning a
    // chunk boundary
    let text = clean_summary(&summaries.join(" "));

    ChunkedSummary {
        text,
        chunks_total: total,
        chunks_skipped: skipped,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Returns scripted per-call responses, in order.
    struct Scripted {
        responses: Mutex<Vec<Result<Option<String>, String>>>,
    }

    impl Scripted {
        fn new(responses: Vec<Result<Option<String>, String>>) -> Self {
            Scripted {
                responses: Mutex::new(responses),
            }
        }
    }

    impl Summarizer for Scripted {
        const SUMMARIZER_MODEL: &'static str = "scripted";
        type Error = String;

        async fn summarize_chunk(&self, _chunk: &str) -> Result<Option<String>, Self::Error> {
            self.responses.lock().unwrap().remove(0)
        }
    }

    // chunk size 9 splits this into ["one two", "three", "four five", "six"]
    const TRANSCRIPT: &str = "one two three four five six";

    #[tokio::test]
    async fn failing_chunk_does_not_abort_the_run() {
        let summarizer = Scripted::new(vec![
            Ok(Some("first".into())),
            Err("503 - overloaded".into()),
            Ok(Some("third".into())),
            Ok(Some("fourth".into())),
        ]);

        let result = summarize_transcript(&summarizer, TRANSCRIPT, 9).await;

        assert_eq!(result.chunks_total, 4);
        assert_eq!(result.chunks_failed(), 1);
        assert_eq!(result.failures[0].chunk, 2);
        assert!(result.failures[0].message.contains("503"));
        assert_eq!(result.text, "first third fourth");
    }

    #[tokio::test]
    async fn malformed_responses_are_skipped_silently() {
        let summarizer = Scripted::new(vec![
            Ok(Some("first".into())),
            Ok(None),
            Ok(Some("third".into())),
            Ok(None),
        ]);

        let result = summarize_transcript(&summarizer, TRANSCRIPT, 9).await;

        assert_eq!(result.chunks_skipped, 2);
        assert!(result.failures.is_empty());
        assert_eq!(result.text, "first third");
    }

    #[tokio::test]
    async fn empty_transcript_is_a_degenerate_success() {
        let summarizer = Scripted::new(vec![]);

        let result = summarize_transcript(&summarizer, "", 1000).await;

        assert_eq!(result.chunks_total, 0);
        assert_eq!(result.text, "");
    }

    #[tokio::test]
    async fn all_chunks_failing_yields_empty_text() {
        let summarizer = Scripted::new(vec![
            Err("500".into()),
            Err("500".into()),
            Err("500".into()),
            Err("500".into()),
        ]);

        let result = summarize_transcript(&summarizer, TRANSCRIPT, 9).await;

        assert_eq!(result.chunks_failed(), 4);
        assert_eq!(result.text, "");
    }

    #[tokio::test]
    async fn per_chunk_summaries_are_cleaned() {
        let summarizer = Scripted::new(vec![Ok(Some("the cat the cat sat".into()))]);

        let result = summarize_transcript(&summarizer, "short transcript", 1000).await;

        assert_eq!(result.text, "the cat sat");
    }

    #[tokio::test]
    async fn repeats_spanning_chunk_boundaries_are_cleaned() {
        // both chunks summarize to the same phrase; the joined result
        // must not repeat it
        let summarizer = Scripted::new(vec![
            Ok(Some("key point".into())),
            Ok(Some("key point".into())),
        ]);

        let result = summarize_transcript(&summarizer, "alpha beta", 9).await;

        assert_eq!(result.chunks_total, 2);
        assert_eq!(result.text, "key point");
    }
}
