use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown quiz mix '{0}' (expected 'full' or 'classic')")]
    UnknownMix(String),

    #[error("unknown command '{0}' (expected 'quiz' or 'history')")]
    UnknownCommand(String),
}
