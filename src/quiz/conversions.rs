use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::generator::QuestionGenerator;
use crate::quiz::{round_to, Answer, Category, Question};

/// Denominators whose decimals and percentages terminate quickly.
pub const FRIENDLY_DENOMINATORS: [u32; 8] = [2, 4, 5, 8, 10, 20, 25, 50];

pub const DECIMAL_PLACES: i32 = 4;
pub const PERCENT_PLACES: i32 = 2;

impl<R: Rng> QuestionGenerator<R> {
    /// One of the three conversion questions, chosen at random.
    pub fn generate_conversion(&mut self) -> Question {
        match self.rng.gen_range(0..3) {
            0 => self.generate_fraction_to_decimal(),
            1 => self.generate_decimal_to_percentage(),
            _ => self.generate_percentage_to_fraction(),
        }
    }

    pub fn generate_fraction_to_decimal(&mut self) -> Question {
        let (numer, denom) = self.friendly_fraction();
        self.question(
            format!("Convert {}/{} to decimal.", numer, denom),
            Category::FractionToDecimal,
            Answer::decimal(to_decimal(numer, denom)),
        )
    }

    pub fn generate_decimal_to_percentage(&mut self) -> Question {
        let (numer, denom) = self.friendly_fraction();
        let decimal = to_decimal(numer, denom);
        self.question(
            format!("Convert {} to percentage.", decimal),
            Category::DecimalToPercentage,
            Answer::decimal(decimal_to_percentage(decimal)),
        )
    }

    pub fn generate_percentage_to_fraction(&mut self) -> Question {
        let (numer, denom) = self.friendly_fraction();
        let percentage = round_to(f64::from(numer) / f64::from(denom) * 100.0, PERCENT_PLACES);
        self.question(
            format!("Convert {}% to fraction (as a/b, lowest terms)", percentage),
            Category::PercentageToFraction,
            Answer::Text(lowest_terms(numer, denom)),
        )
    }

    fn friendly_fraction(&mut self) -> (u32, u32) {
        let denom = *FRIENDLY_DENOMINATORS
            .choose(&mut self.rng)
            .unwrap_or(&FRIENDLY_DENOMINATORS[0]);
        let numer = self.rng.gen_range(1..denom);
        (numer, denom)
    }
}

pub fn to_decimal(numer: u32, denom: u32) -> f64 {
    round_to(f64::from(numer) / f64::from(denom), DECIMAL_PLACES)
}

pub fn decimal_to_percentage(decimal: f64) -> f64 {
    round_to(decimal * 100.0, PERCENT_PLACES)
}

pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `numer/denom` reduced to lowest terms, formatted as `a/b`.
pub fn lowest_terms(numer: u32, denom: u32) -> String {
    let g = gcd(numer, denom).max(1);
    format!("{}/{}", numer / g, denom / g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{Scalar, ScenarioCatalog};

    fn generator(seed: u64) -> QuestionGenerator {
        QuestionGenerator::seeded(ScenarioCatalog::default(), seed)
    }

    fn decimal_places(value: f64) -> usize {
        let text = value.to_string();
        text.split_once('.').map_or(0, |(_, frac)| frac.len())
    }

    #[test]
    fn fraction_to_decimal_rounds_to_four_places() {
        let mut generator = generator(21);
        for _ in 0..300 {
            let question = generator.generate_fraction_to_decimal();
            let Answer::Single(Scalar::Decimal(value)) = question.answer else {
                panic!("expected decimal answer");
            };
            assert!(value > 0.0 && value < 1.0);
            assert!(decimal_places(value) <= 4);
        }
    }

    #[test]
    fn percentage_to_fraction_is_reduced() {
        let mut generator = generator(22);
        for _ in 0..300 {
            let question = generator.generate_percentage_to_fraction();
            let Answer::Text(fraction) = &question.answer else {
                panic!("expected text answer");
            };
            let (n, d) = fraction.split_once('/').unwrap();
            let (n, d): (u32, u32) = (n.parse().unwrap(), d.parse().unwrap());

            assert_eq!(gcd(n, d), 1, "{} is not reduced", fraction);
            assert_eq!(&lowest_terms(n, d), fraction);
            assert!(n < d);
        }
    }

    #[test]
    fn fraction_decimal_percentage_round_trip() {
        for denom in FRIENDLY_DENOMINATORS {
            for numer in 1..denom {
                let decimal = to_decimal(numer, denom);
                let percentage = decimal_to_percentage(decimal);
                let exact = 100.0 * f64::from(numer) / f64::from(denom);
                assert!(
                    (percentage - exact).abs() < 0.01,
                    "{}/{}: {} vs {}",
                    numer,
                    denom,
                    percentage,
                    exact
                );
            }
        }
    }

    #[test]
    fn conversion_covers_all_three_modes() {
        let mut generator = generator(23);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(generator.generate_conversion().category);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn lowest_terms_reduces() {
        assert_eq!(lowest_terms(10, 20), "1/2");
        assert_eq!(lowest_terms(15, 25), "3/5");
        assert_eq!(lowest_terms(7, 8), "7/8");
        assert_eq!(gcd(48, 18), 6);
    }
}
