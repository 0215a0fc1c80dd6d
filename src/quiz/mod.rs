pub mod algebra;
pub mod arithmetic;
pub mod assembler;
pub mod conversions;
pub mod data;
pub mod generator;
pub mod geometry;
pub mod grading;
pub mod ids;
pub mod reasoning;
pub mod scenarios;
pub mod word_problems;

use std::fmt;

pub use assembler::{MixPreset, QuestionSource, QuizMix};
pub use generator::QuestionGenerator;
pub use scenarios::ScenarioCatalog;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn find(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Question {
    pub id: u32,
    pub question_text: String,
    pub category: Category,
    #[serde(flatten)]
    pub answer: Answer,
}

impl Question {
    pub fn new(id: u32, question_text: String, category: Category, answer: Answer) -> Self {
        Self {
            id,
            question_text,
            category,
            answer,
        }
    }

    pub fn kind(&self) -> QuestionType {
        self.answer.kind()
    }
}

/// The correct answer, keyed on the wire by the question `type`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "correct_answer", rename_all = "lowercase")]
pub enum Answer {
    Single(Scalar),
    Dual { quotient: i64, remainder: i64 },
    Text(String),
}

impl Answer {
    pub fn kind(&self) -> QuestionType {
        match self {
            Answer::Single(_) => QuestionType::Single,
            Answer::Dual { .. } => QuestionType::Dual,
            Answer::Text(_) => QuestionType::Text,
        }
    }

    pub fn integer(value: i64) -> Self {
        Answer::Single(Scalar::Integer(value))
    }

    pub fn decimal(value: f64) -> Self {
        Answer::Single(Scalar::Decimal(value))
    }

    pub fn text(value: impl Into<String>) -> Self {
        Answer::Text(value.into())
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Single(scalar) => write!(f, "{}", scalar),
            Answer::Dual {
                quotient,
                remainder,
            } => write!(f, "Q: {}, R: {}", quotient, remainder),
            Answer::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Decimal(f64),
    /// Already formatted for display, e.g. `-3.5`.
    Literal(String),
}

impl Scalar {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Integer(v) => Some(*v as f64),
            Scalar::Decimal(v) => Some(*v),
            Scalar::Literal(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(v) => write!(f, "{}", v),
            Scalar::Decimal(v) => write!(f, "{}", v),
            Scalar::Literal(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Single,
    Dual,
    Text,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuestionType::Single => "single",
            QuestionType::Dual => "dual",
            QuestionType::Text => "text",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Category {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Factorization,
    Algebra,
    #[serde(rename = "Fraction to Decimal")]
    FractionToDecimal,
    #[serde(rename = "Decimal to Percentage")]
    DecimalToPercentage,
    #[serde(rename = "Percentage to Fraction")]
    PercentageToFraction,
    Geometry,
    #[serde(rename = "Data Interpretation")]
    DataInterpretation,
    #[serde(rename = "Logical Reasoning")]
    LogicalReasoning,
    #[serde(rename = "Data Sufficiency")]
    DataSufficiency,
    #[serde(rename = "Profit & Loss")]
    ProfitLoss,
    #[serde(rename = "Unitary Method")]
    UnitaryMethod,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::Addition,
        Category::Subtraction,
        Category::Multiplication,
        Category::Division,
        Category::Factorization,
        Category::Algebra,
        Category::FractionToDecimal,
        Category::DecimalToPercentage,
        Category::PercentageToFraction,
        Category::Geometry,
        Category::DataInterpretation,
        Category::LogicalReasoning,
        Category::DataSufficiency,
        Category::ProfitLoss,
        Category::UnitaryMethod,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Addition => "Addition",
            Category::Subtraction => "Subtraction",
            Category::Multiplication => "Multiplication",
            Category::Division => "Division",
            Category::Factorization => "Factorization",
            Category::Algebra => "Algebra",
            Category::FractionToDecimal => "Fraction to Decimal",
            Category::DecimalToPercentage => "Decimal to Percentage",
            Category::PercentageToFraction => "Percentage to Fraction",
            Category::Geometry => "Geometry",
            Category::DataInterpretation => "Data Interpretation",
            Category::LogicalReasoning => "Logical Reasoning",
            Category::DataSufficiency => "Data Sufficiency",
            Category::ProfitLoss => "Profit & Loss",
            Category::UnitaryMethod => "Unitary Method",
        }
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Category::Addition | Category::Subtraction | Category::Multiplication | Category::Division
        )
    }

    pub fn is_conversion(&self) -> bool {
        matches!(
            self,
            Category::FractionToDecimal
                | Category::DecimalToPercentage
                | Category::PercentageToFraction
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rounds `value` to `places` decimal digits, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
