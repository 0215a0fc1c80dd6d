use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::QuizError;
use crate::quiz::generator::QuestionGenerator;
use crate::quiz::{Category, Question, Quiz};

/// Where the questions of one mix entry come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSource {
    Category(Category),
    /// Distinct questions sampled from a single +, -, ×, ÷ batch (at most four).
    ArithmeticSample,
    Conversion,
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MixEntry {
    pub source: QuestionSource,
    pub count: usize,
}

/// How many questions each source contributes to a quiz.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuizMix {
    pub entries: Vec<MixEntry>,
}

impl QuizMix {
    pub fn new(entries: Vec<MixEntry>) -> Self {
        Self { entries }
    }

    /// Every category, `per_category` times each.
    pub fn uniform(per_category: usize) -> Self {
        Self::new(
            Category::ALL
                .iter()
                .map(|c| MixEntry {
                    source: QuestionSource::Category(*c),
                    count: per_category,
                })
                .collect(),
        )
    }

    /// 15 categories, two questions each.
    pub fn full() -> Self {
        Self::uniform(2)
    }

    /// The ten-question quiz: two each of arithmetic, factorization,
    /// conversions, mixed and equations.
    pub fn classic() -> Self {
        let entry = |source| MixEntry { source, count: 2 };
        Self::new(vec![
            entry(QuestionSource::ArithmeticSample),
            entry(QuestionSource::Category(Category::Factorization)),
            entry(QuestionSource::Conversion),
            entry(QuestionSource::Mixed),
            entry(QuestionSource::Category(Category::Algebra)),
        ])
    }

    pub fn total(&self) -> usize {
        self.entries
            .iter()
            .map(|e| match e.source {
                QuestionSource::ArithmeticSample => e.count.min(4),
                _ => e.count,
            })
            .sum()
    }
}

impl Default for QuizMix {
    fn default() -> Self {
        Self::full()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MixPreset {
    #[default]
    Full,
    Classic,
}

impl MixPreset {
    pub fn mix(&self) -> QuizMix {
        match self {
            MixPreset::Full => QuizMix::full(),
            MixPreset::Classic => QuizMix::classic(),
        }
    }
}

impl FromStr for MixPreset {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(MixPreset::Full),
            "classic" => Ok(MixPreset::Classic),
            other => Err(QuizError::UnknownMix(other.to_string())),
        }
    }
}

impl fmt::Display for MixPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MixPreset::Full => "full",
            MixPreset::Classic => "classic",
        })
    }
}

impl<R: Rng> QuestionGenerator<R> {
    /// Generates every entry of `mix` and returns the questions in a uniformly
    /// random order.
    pub fn build_quiz(&mut self, mix: &QuizMix) -> Quiz {
        let mut questions = Vec::with_capacity(mix.total());
        for entry in &mix.entries {
            self.extend_with(&mut questions, entry);
        }
        // Fisher-Yates: every ordering is equally likely.
        questions.shuffle(&mut self.rng);

        log::debug!("Assembled quiz with {} questions", questions.len());
        Quiz::new(questions)
    }

    fn extend_with(&mut self, questions: &mut Vec<Question>, entry: &MixEntry) {
        match entry.source {
            QuestionSource::ArithmeticSample => {
                let batch = self.generate_arithmetic();
                let picked = batch.choose_multiple(&mut self.rng, entry.count);
                questions.extend(picked.cloned());
            }
            QuestionSource::Category(category) => {
                questions.extend((0..entry.count).map(|_| self.generate(category)));
            }
            QuestionSource::Conversion => {
                questions.extend((0..entry.count).map(|_| self.generate_conversion()));
            }
            QuestionSource::Mixed => {
                questions.extend((0..entry.count).map(|_| self.generate_mixed()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::ScenarioCatalog;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn full_mix_has_two_of_each_category() {
        let mut generator = QuestionGenerator::seeded(ScenarioCatalog::default(), 71);
        let quiz = generator.build_quiz(&QuizMix::full());
        assert_eq!(quiz.len(), 30);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for question in &quiz.questions {
            *counts.entry(question.category.label()).or_default() += 1;
        }
        assert_eq!(counts.len(), 15);
        assert!(counts.values().all(|c| *c == 2));
    }

    #[test]
    fn classic_mix_has_ten_questions() {
        let mut generator = QuestionGenerator::seeded(ScenarioCatalog::default(), 72);
        for _ in 0..20 {
            let quiz = generator.build_quiz(&QuizMix::classic());
            assert_eq!(quiz.len(), 10);
            assert_eq!(QuizMix::classic().total(), 10);

            let algebra = quiz
                .questions
                .iter()
                .filter(|q| q.category == Category::Algebra)
                .count();
            assert!(algebra >= 2);
        }
    }

    #[test]
    fn arithmetic_sample_picks_distinct_operations() {
        let mix = QuizMix::new(vec![MixEntry {
            source: QuestionSource::ArithmeticSample,
            count: 3,
        }]);
        let mut generator = QuestionGenerator::seeded(ScenarioCatalog::default(), 73);
        for _ in 0..50 {
            let quiz = generator.build_quiz(&mix);
            let categories: HashSet<_> = quiz.questions.iter().map(|q| q.category).collect();
            assert_eq!(categories.len(), 3);
            assert!(categories.iter().all(|c| c.is_arithmetic()));
        }
    }

    #[test]
    fn ids_are_unique_within_a_quiz() {
        let mut generator = QuestionGenerator::seeded(ScenarioCatalog::default(), 74);
        for _ in 0..20 {
            let quiz = generator.build_quiz(&QuizMix::full());
            let ids: HashSet<_> = quiz.questions.iter().map(|q| q.id).collect();
            assert_eq!(ids.len(), quiz.len());
        }
    }

    #[test]
    fn first_position_is_roughly_uniform() {
        const RUNS: usize = 6000;
        let mut generator = QuestionGenerator::seeded(ScenarioCatalog::default(), 75);
        let mut counts: HashMap<Category, usize> = HashMap::new();
        for _ in 0..RUNS {
            let quiz = generator.build_quiz(&QuizMix::full());
            *counts.entry(quiz.questions[0].category).or_default() += 1;
        }

        // Each category should lead in 1/15 of the runs (400). A biased
        // shuffle would push some category far outside this band.
        let expected = RUNS / Category::ALL.len();
        assert_eq!(counts.len(), 15);
        for (category, count) in counts {
            assert!(
                count > expected * 7 / 10 && count < expected * 13 / 10,
                "{} led {} times, expected about {}",
                category,
                count,
                expected
            );
        }
    }

    #[test]
    fn mix_can_be_configured_from_json() {
        let mix: QuizMix = serde_json::from_str(
            r#"{ "entries": [
                { "source": { "category": "Geometry" }, "count": 3 },
                { "source": "mixed", "count": 1 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(mix.total(), 4);

        let mut generator = QuestionGenerator::seeded(ScenarioCatalog::default(), 76);
        let quiz = generator.build_quiz(&mix);
        let geometry = quiz
            .questions
            .iter()
            .filter(|q| q.category == Category::Geometry)
            .count();
        assert!(geometry >= 3);
    }

    #[test]
    fn presets_parse() {
        assert_eq!("full".parse::<MixPreset>().unwrap(), MixPreset::Full);
        assert_eq!(" Classic ".parse::<MixPreset>().unwrap(), MixPreset::Classic);
        assert!("hard".parse::<MixPreset>().is_err());
    }
}
