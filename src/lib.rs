pub mod config;
pub mod error;
pub mod history;
pub mod quiz;

pub use error::{QuizError, Result};
