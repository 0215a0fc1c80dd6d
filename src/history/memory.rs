use std::collections::BTreeMap;

use tokio::sync::Mutex;

use crate::error::Result;
use crate::history::{HistoryStore, Submission};

/// Keeps submissions for the lifetime of the process.
#[derive(Default)]
pub struct MemoryHistory {
    entries: Mutex<BTreeMap<String, Submission>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistory {
    async fn save_submission(&self, key: &str, submission: &Submission) -> Result<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), submission.clone());
        Ok(())
    }

    async fn load_all(&self) -> Result<BTreeMap<String, Submission>> {
        Ok(self.entries.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::history::Summary;

    #[tokio::test]
    async fn round_trips_submissions() {
        let store = MemoryHistory::new();
        let submission = Submission {
            summary: Summary {
                score_obtained: 3,
                total_questions: 3,
                percentage: 100.0,
                total_time_seconds: 9,
            },
            details: Vec::new(),
        };

        store.save_submission("05-05-25-08-15", &submission).await.unwrap();
        let history = store.load_all().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history["05-05-25-08-15"], submission);
    }

    async fn save_from_task<S: HistoryStore + 'static>(store: Arc<S>, key: &'static str) {
        let submission = Submission {
            summary: Summary {
                score_obtained: 0,
                total_questions: 0,
                percentage: 0.0,
                total_time_seconds: 0,
            },
            details: Vec::new(),
        };
        tokio::spawn(async move { store.save_submission(key, &submission).await })
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn stores_can_be_used_from_spawned_tasks() {
        let store = Arc::new(MemoryHistory::new());
        save_from_task(Arc::clone(&store), "01-02-25-11-45").await;
        save_from_task(Arc::clone(&store), "01-02-25-11-46").await;
        assert_eq!(store.load_all().await.unwrap().len(), 2);
    }
}
