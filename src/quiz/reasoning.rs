use rand::Rng;

use crate::quiz::generator::{pick, QuestionGenerator};
use crate::quiz::scenarios;
use crate::quiz::{Answer, Category, Question};

const SERIES_TERMS: i64 = 5;

impl<R: Rng> QuestionGenerator<R> {
    pub fn generate_logical_reasoning(&mut self) -> Question {
        if self.rng.gen_bool(0.5) {
            self.generate_series()
        } else {
            self.generate_coding()
        }
    }

    /// Arithmetic series with the last of five terms hidden.
    pub fn generate_series(&mut self) -> Question {
        let start: i64 = self.rng.gen_range(1..=10);
        let step: i64 = self.rng.gen_range(2..=9);
        let shown = (0..SERIES_TERMS - 1)
            .map(|i| (start + i * step).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let next = start + (SERIES_TERMS - 1) * step;

        self.question(
            format!("Find the next number in the series: {}, ?", shown),
            Category::LogicalReasoning,
            Answer::integer(next),
        )
    }

    /// Letter-shift coding: an example word and its code reveal the shift,
    /// the target word has to be coded the same way.
    pub fn generate_coding(&mut self) -> Question {
        let shift: i8 = if self.rng.gen_bool(0.5) { 1 } else { -1 };
        let example = pick(&mut self.rng, &self.catalog.lr_coding_words, fallback_word).to_uppercase();
        let mut target = pick(&mut self.rng, &self.catalog.lr_coding_words, fallback_word).to_uppercase();
        if target == example && self.catalog.lr_coding_words.len() > 1 {
            target = pick(&mut self.rng, &self.catalog.lr_coding_words, fallback_word).to_uppercase();
        }

        let text = format!(
            "In a certain code, {} is written as {}. How is {} written in that code?",
            example,
            shift_word(&example, shift),
            target
        );
        self.question(text, Category::LogicalReasoning, Answer::Text(shift_word(&target, shift)))
    }
}

fn fallback_word() -> String {
    scenarios::default_coding_words().swap_remove(0)
}

/// Shifts every ASCII letter by `shift` places around the alphabet, keeping
/// case. Other characters are left alone.
pub fn shift_word(word: &str, shift: i8) -> String {
    word.chars()
        .map(|c| {
            let base = if c.is_ascii_uppercase() {
                b'A'
            } else if c.is_ascii_lowercase() {
                b'a'
            } else {
                return c;
            };
            let offset = (c as u8 - base) as i16 + i16::from(shift);
            (base + offset.rem_euclid(26) as u8) as char
        })
        .collect()
}
