pub mod json_file;
pub mod memory;

use std::collections::BTreeMap;
use std::future::Future;

use chrono::{DateTime, TimeZone};

use crate::error::Result;
use crate::quiz::QuestionType;

pub use json_file::JsonFileHistory;
pub use memory::MemoryHistory;

/// Layout of submission keys: day-month-year-hour-minute.
pub const KEY_FORMAT: &str = "%d-%m-%y-%H-%M";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Submission {
    pub summary: Summary,
    pub details: Vec<QuestionResult>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Summary {
    pub score_obtained: usize,
    pub total_questions: usize,
    pub percentage: f64,
    pub total_time_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QuestionResult {
    pub question_id: u32,
    pub question_text: String,
    pub question_type: QuestionType,
    /// Kept as free text: older histories use labels that are no longer
    /// generated.
    pub category: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub time_spent: u64,
}

/// Persistence for graded quizzes, keyed by submission time.
///
/// The futures are `Send`, so a store can be driven from spawned tasks.
pub trait HistoryStore: Send + Sync {
    /// Stores `submission` under `key`, replacing an earlier one with the same key.
    fn save_submission(
        &self,
        key: &str,
        submission: &Submission,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Every stored submission, ordered by key.
    fn load_all(&self) -> impl Future<Output = Result<BTreeMap<String, Submission>>> + Send;
}

pub fn submission_key<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(KEY_FORMAT).to_string()
}
