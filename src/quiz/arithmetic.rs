use rand::Rng;

use crate::quiz::generator::QuestionGenerator;
use crate::quiz::{Answer, Category, Question};

const OPERAND_MIN: i64 = 1000;
const OPERAND_MAX: i64 = 9999;

impl<R: Rng> QuestionGenerator<R> {
    /// One question for each operation: +, -, ×, ÷.
    pub fn generate_arithmetic(&mut self) -> Vec<Question> {
        vec![
            self.generate_addition(),
            self.generate_subtraction(),
            self.generate_multiplication(),
            self.generate_division(),
        ]
    }

    pub fn generate_addition(&mut self) -> Question {
        let a = self.rng.gen_range(OPERAND_MIN..=OPERAND_MAX);
        let b = self.rng.gen_range(OPERAND_MIN..=OPERAND_MAX);
        self.question(format!("{} + {} = ?", a, b), Category::Addition, Answer::integer(a + b))
    }

    pub fn generate_subtraction(&mut self) -> Question {
        let x = self.rng.gen_range(OPERAND_MIN..=OPERAND_MAX);
        let y = self.rng.gen_range(OPERAND_MIN..=OPERAND_MAX);
        let (a, b) = (x.max(y), x.min(y));
        self.question(format!("{} - {} = ?", a, b), Category::Subtraction, Answer::integer(a - b))
    }

    /// The multiplicand keeps four digits and the product stays within 9999.
    pub fn generate_multiplication(&mut self) -> Question {
        let b = self.rng.gen_range(2..=9);
        let max_a = OPERAND_MAX / b;
        let a = self.rng.gen_range(OPERAND_MIN..=max_a);
        self.question(format!("{} × {} = ?", a, b), Category::Multiplication, Answer::integer(a * b))
    }

    pub fn generate_division(&mut self) -> Question {
        let divisor = self.rng.gen_range(2..=99);
        let dividend = self.rng.gen_range(OPERAND_MIN..=OPERAND_MAX);
        self.question(
            format!(
                "Divide {} by {}. What is the Quotient and Remainder?",
                dividend, divisor
            ),
            Category::Division,
            Answer::Dual {
                quotient: dividend / divisor,
                remainder: dividend % divisor,
            },
        )
    }

    pub fn generate_factorization(&mut self) -> Question {
        let n = self.rng.gen_range(10..=499);
        let factors = prime_factors(n)
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.question(
            format!("List all prime factors of {} (comma separated)", n),
            Category::Factorization,
            Answer::Text(factors),
        )
    }
}

/// Prime factors of `n` in ascending order, repeated by multiplicity.
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut i = 2;
    while i * i <= n {
        while n % i == 0 {
            factors.push(i);
            n /= i;
        }
        i += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}
