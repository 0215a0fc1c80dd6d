use rand::Rng;

use crate::quiz::generator::QuestionGenerator;
use crate::quiz::{Answer, Category, Question, Scalar};

impl<R: Rng> QuestionGenerator<R> {
    /// `ax + b = c`, solve for x. Half of the time x carries one decimal digit.
    ///
    /// Values are kept in tenths so `c` is exact and the displayed equation
    /// always holds for the reported x.
    pub fn generate_equation(&mut self) -> Question {
        let a: i64 = self.rng.gen_range(2..=12);
        let x_tenths: i64 = if self.rng.gen_bool(0.5) {
            self.rng.gen_range(-20..=20) * 10
        } else {
            self.rng.gen_range(-200..=200)
        };
        let b: i64 = self.rng.gen_range(-20..=20);
        let c_tenths = a * x_tenths + b * 10;

        let sign = if b >= 0 { '+' } else { '-' };
        let text = format!(
            "Solve for x: {}x {} {} = {}",
            a,
            sign,
            b.abs(),
            format_tenths(c_tenths)
        );
        self.question(
            text,
            Category::Algebra,
            Answer::Single(Scalar::Literal(format_tenths(x_tenths))),
        )
    }
}

/// Formats a value given in tenths: `35` → `3.5`, `-40` → `-4`, `-5` → `-0.5`.
pub fn format_tenths(tenths: i64) -> String {
    if tenths % 10 == 0 {
        return (tenths / 10).to_string();
    }
    let sign = if tenths < 0 { "-" } else { "" };
    let abs = tenths.abs();
    format!("{}{}.{}", sign, abs / 10, abs % 10)
}
