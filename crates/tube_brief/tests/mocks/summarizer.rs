use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use tube_brief::Summarizer;

/// Either echoes each chunk back as its "summary" or returns a fixed
/// string; individual calls (1-based) can be scripted to fail or to
/// return no summary.
#[derive(Clone, Default)]
pub struct MockSummarizer {
    pub summary: Option<String>,
    pub fail_on: HashSet<usize>,
    pub skip_on: HashSet<usize>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockSummarizer {
    pub fn fixed(summary: &str) -> Self {
        Self {
            summary: Some(summary.to_string()),
            ..Default::default()
        }
    }

    pub fn echo() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on.insert(call);
        self
    }

    pub fn skipping_on(mut self, call: usize) -> Self {
        self.skip_on.insert(call);
        self
    }
}

impl Summarizer for MockSummarizer {
    const SUMMARIZER_MODEL: &'static str = "mock-bart";
    type Error = anyhow::Error;

    async fn summarize_chunk(&self, chunk: &str) -> Result<Option<String>, Self::Error> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(chunk.to_string());
            calls.len()
        };

        if self.fail_on.contains(&call) {
            return Err(anyhow::anyhow!("503 - model overloaded"));
        }
        if self.skip_on.contains(&call) {
            return Ok(None);
        }
        Ok(Some(
            self.summary.clone().unwrap_or_else(|| chunk.to_string()),
        ))
    }
}
