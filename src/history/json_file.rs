use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use crate::error::Result;
use crate::history::{HistoryStore, Submission};

/// All submissions in one JSON object, `{ key: { summary, details } }`.
///
/// Writes rewrite the whole file through a temporary sibling and a rename, and
/// are serialized by an in-process lock.
pub struct JsonFileHistory {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<BTreeMap<String, Submission>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("No history at {}, starting empty", self.path.display());
                Ok(BTreeMap::new())
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl HistoryStore for JsonFileHistory {
    async fn save_submission(&self, key: &str, submission: &Submission) -> Result<()> {
        let _guard = self.lock.lock().await;

        let mut history = self.read().await?;
        if history.insert(key.to_string(), submission.clone()).is_some() {
            log::warn!("Replacing existing submission {}", key);
        }

        let contents = serde_json::to_string_pretty(&history)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, contents).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        log::info!(
            "Saved submission {} ({} stored) to {}",
            key,
            history.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn load_all(&self) -> Result<BTreeMap<String, Submission>> {
        let _guard = self.lock.lock().await;
        self.read().await
    }
}
