use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tube_brief::AudioFetcher;

#[derive(Clone)]
pub struct MockFetcher {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }
}

impl MockFetcher {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl AudioFetcher for MockFetcher {
    fn fetch(&self, video_url: &str, output_path: &Path) -> anyhow::Result<PathBuf> {
        self.calls.lock().unwrap().push(video_url.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        std::fs::write(output_path, b"RIFF mock audio")?;
        Ok(output_path.to_path_buf())
    }
}
