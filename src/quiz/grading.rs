use std::collections::HashMap;
use std::fmt;

use crate::history::{QuestionResult, Submission, Summary};
use crate::quiz::{round_to, Answer, Category, Question, Quiz};

/// Numeric answers within this distance of the correct value are accepted.
pub const NUMERIC_TOLERANCE: f64 = 0.01;

/// What the user typed, as posted by the browser.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum UserAnswer {
    #[default]
    Blank,
    Value(String),
    Dual { quotient: String, remainder: String },
}

impl UserAnswer {
    pub fn is_blank(&self) -> bool {
        match self {
            UserAnswer::Blank => true,
            UserAnswer::Value(v) => v.trim().is_empty(),
            UserAnswer::Dual {
                quotient,
                remainder,
            } => quotient.trim().is_empty() && remainder.trim().is_empty(),
        }
    }
}

impl fmt::Display for UserAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAnswer::Blank => Ok(()),
            UserAnswer::Value(v) => f.write_str(v.trim()),
            UserAnswer::Dual {
                quotient,
                remainder,
            } => write!(f, "Q: {}, R: {}", quotient.trim(), remainder.trim()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Response {
    pub question_id: u32,
    #[serde(default)]
    pub answer: UserAnswer,
    #[serde(default)]
    pub time_spent: u64,
}

pub fn check_answer(question: &Question, answer: &UserAnswer) -> bool {
    if answer.is_blank() {
        return false;
    }
    match (&question.answer, answer) {
        (Answer::Single(correct), UserAnswer::Value(given)) => {
            match (given.trim().parse::<f64>(), correct.as_f64()) {
                (Ok(given), Some(correct)) => (given - correct).abs() < NUMERIC_TOLERANCE,
                _ => false,
            }
        }
        (
            Answer::Dual {
                quotient,
                remainder,
            },
            UserAnswer::Dual {
                quotient: given_q,
                remainder: given_r,
            },
        ) => {
            given_q.trim().parse::<i64>().ok() == Some(*quotient)
                && given_r.trim().parse::<i64>().ok() == Some(*remainder)
        }
        (Answer::Text(correct), UserAnswer::Value(given)) => {
            if question.category == Category::Factorization {
                factor_list(given) == factor_list(correct)
            } else {
                squash(given) == squash(correct)
            }
        }
        _ => false,
    }
}

/// Grades `responses` against `quiz`. Questions without a response count as
/// wrong; responses for unknown ids are ignored.
pub fn grade(quiz: &Quiz, responses: &[Response]) -> Submission {
    for stray in responses.iter().filter(|r| quiz.find(r.question_id).is_none()) {
        log::warn!("Ignoring answer for unknown question {}", stray.question_id);
    }
    let by_id: HashMap<u32, &Response> = responses.iter().map(|r| (r.question_id, r)).collect();

    let details: Vec<QuestionResult> = quiz
        .questions
        .iter()
        .map(|question| {
            let response = by_id.get(&question.id);
            let answer = response.map(|r| r.answer.clone()).unwrap_or_default();
            QuestionResult {
                question_id: question.id,
                question_text: question.question_text.clone(),
                question_type: question.kind(),
                category: question.category.label().to_string(),
                user_answer: answer.to_string(),
                correct_answer: question.answer.to_string(),
                is_correct: check_answer(question, &answer),
                time_spent: response.map_or(0, |r| r.time_spent),
            }
        })
        .collect();

    let score = details.iter().filter(|d| d.is_correct).count();
    let total = details.len();
    let percentage = if total == 0 {
        0.0
    } else {
        round_to(score as f64 / total as f64 * 100.0, 2)
    };

    Submission {
        summary: Summary {
            score_obtained: score,
            total_questions: total,
            percentage,
            total_time_seconds: details.iter().map(|d| d.time_spent).sum(),
        },
        details,
    }
}

fn factor_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .map(|f| f.to_string())
        .collect()
}

fn squash(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_lowercase())
        .collect()
}
