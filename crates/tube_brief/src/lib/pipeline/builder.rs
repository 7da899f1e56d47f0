use std::path::PathBuf;

use crate::{AudioFetcher, BriefPipeline, Summarizer, Transcriber};

pub struct BriefPipelineBuilder<F = (), T = (), S = ()> {
    workdir: PathBuf,
    fetcher: F,
    transcriber: T,
    summarizer: S,
    max_chunk_chars: usize,
}

impl BriefPipelineBuilder {
    pub const DEFAULT_MAX_CHUNK_CHARS: usize = 1000;

    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            fetcher: (),
            transcriber: (),
            summarizer: (),
            max_chunk_chars: Self::DEFAULT_MAX_CHUNK_CHARS,
        }
    }
}

impl<F, T, S> BriefPipelineBuilder<F, T, S> {
    pub fn fetcher<F2: AudioFetcher + Send + Sync + 'static>(
        self,
        fetcher: F2,
    ) -> BriefPipelineBuilder<F2, T, S> {
        BriefPipelineBuilder {
            workdir: self.workdir,
            fetcher,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            max_chunk_chars: self.max_chunk_chars,
        }
    }

    pub fn transcriber<T2: Transcriber + Send + Sync + 'static>(
        self,
        transcriber: T2,
    ) -> BriefPipelineBuilder<F, T2, S> {
        BriefPipelineBuilder {
            workdir: self.workdir,
            fetcher: self.fetcher,
            transcriber,
            summarizer: self.summarizer,
            max_chunk_chars: self.max_chunk_chars,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> BriefPipelineBuilder<F, T, S2> {
        BriefPipelineBuilder {
            workdir: self.workdir,
            fetcher: self.fetcher,
            transcriber: self.transcriber,
            summarizer,
            max_chunk_chars: self.max_chunk_chars,
        }
    }

    pub fn max_chunk_chars(mut self, max_chunk_chars: usize) -> Self {
        self.max_chunk_chars = max_chunk_chars;
        self
    }
}

impl<F, T, S> BriefPipelineBuilder<F, T, S>
where
    F: AudioFetcher + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn build(self) -> BriefPipeline<F, T, S> {
        BriefPipeline {
            workdir: self.workdir,
            fetcher: self.fetcher,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            max_chunk_chars: self.max_chunk_chars,
        }
    }
}
