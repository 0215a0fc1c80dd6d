use rand::Rng;

use crate::quiz::generator::QuestionGenerator;
use crate::quiz::{round_to, Answer, Category, Question};

/// The value of π the questions are set against.
pub const PI_APPROX: f64 = 3.14;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle { width: u32, height: u32 },
    Square { side: u32 },
    Circle { radius: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Area,
    Perimeter,
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Rectangle { .. } => "rectangle",
            Shape::Square { .. } => "square",
            Shape::Circle { .. } => "circle",
        }
    }

    pub fn measure(&self, measure: Measure) -> Answer {
        match (*self, measure) {
            (Shape::Rectangle { width, height }, Measure::Area) => Answer::integer(i64::from(width * height)),
            (Shape::Rectangle { width, height }, Measure::Perimeter) => {
                Answer::integer(i64::from(2 * (width + height)))
            }
            (Shape::Square { side }, Measure::Area) => Answer::integer(i64::from(side * side)),
            (Shape::Square { side }, Measure::Perimeter) => Answer::integer(i64::from(4 * side)),
            (Shape::Circle { radius }, Measure::Area) => {
                let r = f64::from(radius);
                Answer::decimal(round_to(PI_APPROX * r * r, 2))
            }
            (Shape::Circle { radius }, Measure::Perimeter) => {
                Answer::decimal(round_to(2.0 * PI_APPROX * f64::from(radius), 2))
            }
        }
    }

    /// Inline SVG with the dimensions written on the figure.
    pub fn diagram(&self) -> String {
        match *self {
            Shape::Rectangle { width, height } => {
                let (w, h) = (width * 12, height * 12);
                format!(
                    "<svg width=\"{sw}\" height=\"{sh}\" xmlns=\"http://www.w3.org/2000/svg\">\
<rect x=\"20\" y=\"20\" width=\"{w}\" height=\"{h}\" fill=\"none\" stroke=\"black\" stroke-width=\"2\"/>\
<text x=\"{tx}\" y=\"14\" text-anchor=\"middle\">{width} cm</text>\
<text x=\"{lx}\" y=\"{ly}\">{height} cm</text></svg>",
                    sw = w + 90,
                    sh = h + 40,
                    tx = 20 + w / 2,
                    lx = w + 26,
                    ly = 20 + h / 2,
                )
            }
            Shape::Square { side } => {
                let s = side * 12;
                format!(
                    "<svg width=\"{sw}\" height=\"{sh}\" xmlns=\"http://www.w3.org/2000/svg\">\
<rect x=\"20\" y=\"20\" width=\"{s}\" height=\"{s}\" fill=\"none\" stroke=\"black\" stroke-width=\"2\"/>\
<text x=\"{tx}\" y=\"14\" text-anchor=\"middle\">{side} cm</text></svg>",
                    sw = s + 40,
                    sh = s + 40,
                    tx = 20 + s / 2,
                )
            }
            Shape::Circle { radius } => {
                let r = radius * 10;
                let c = r + 20;
                format!(
                    "<svg width=\"{d}\" height=\"{d}\" xmlns=\"http://www.w3.org/2000/svg\">\
<circle cx=\"{c}\" cy=\"{c}\" r=\"{r}\" fill=\"none\" stroke=\"black\" stroke-width=\"2\"/>\
<line x1=\"{c}\" y1=\"{c}\" x2=\"{x2}\" y2=\"{c}\" stroke=\"black\" stroke-dasharray=\"4\"/>\
<text x=\"{tx}\" y=\"{ty}\" text-anchor=\"middle\">r = {radius} cm</text></svg>",
                    d = 2 * c,
                    x2 = c + r,
                    tx = c + r / 2,
                    ty = c - 6,
                )
            }
        }
    }
}

impl<R: Rng> QuestionGenerator<R> {
    pub fn generate_geometry(&mut self) -> Question {
        let shape = self.random_shape();
        let measure = if self.rng.gen_bool(0.5) {
            Measure::Area
        } else {
            Measure::Perimeter
        };
        let asked = match (shape, measure) {
            (Shape::Circle { .. }, Measure::Area) => "area (use π = 3.14, round to 2 decimals)",
            (Shape::Circle { .. }, Measure::Perimeter) => {
                "circumference (use π = 3.14, round to 2 decimals)"
            }
            (_, Measure::Area) => "area in cm²",
            (_, Measure::Perimeter) => "perimeter in cm",
        };

        let text = format!(
            "{}<br>Find the {} of the {} shown above.",
            shape.diagram(),
            asked,
            shape.name()
        );
        let answer = shape.measure(measure);
        self.question(text, Category::Geometry, answer)
    }

    fn random_shape(&mut self) -> Shape {
        match self.rng.gen_range(0..3) {
            0 => {
                let width = self.rng.gen_range(5..=15);
                let mut height = self.rng.gen_range(3..=10);
                while height == width {
                    height = self.rng.gen_range(3..=10);
                }
                Shape::Rectangle { width, height }
            }
            1 => Shape::Square {
                side: self.rng.gen_range(4..=12),
            },
            _ => Shape::Circle {
                radius: self.rng.gen_range(3..=9),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{Scalar, ScenarioCatalog};

    #[test]
    fn closed_forms() {
        let rect = Shape::Rectangle { width: 8, height: 5 };
        assert_eq!(rect.measure(Measure::Area), Answer::integer(40));
        assert_eq!(rect.measure(Measure::Perimeter), Answer::integer(26));

        let square = Shape::Square { side: 7 };
        assert_eq!(square.measure(Measure::Area), Answer::integer(49));
        assert_eq!(square.measure(Measure::Perimeter), Answer::integer(28));

        let circle = Shape::Circle { radius: 7 };
        assert_eq!(circle.measure(Measure::Area), Answer::decimal(153.86));
        assert_eq!(circle.measure(Measure::Perimeter), Answer::decimal(43.96));
    }

    #[test]
    fn rectangles_are_never_squares() {
        let mut generator = QuestionGenerator::seeded(ScenarioCatalog::default(), 31);
        for _ in 0..500 {
            match generator.random_shape() {
                Shape::Rectangle { width, height } => {
                    assert_ne!(width, height);
                    assert!((5..=15).contains(&width));
                    assert!((3..=10).contains(&height));
                }
                Shape::Square { side } => assert!((4..=12).contains(&side)),
                Shape::Circle { radius } => assert!((3..=9).contains(&radius)),
            }
        }
    }

    #[test]
    fn question_embeds_diagram() {
        let mut generator = QuestionGenerator::seeded(ScenarioCatalog::default(), 32);
        for _ in 0..100 {
            let question = generator.generate_geometry();
            assert!(question.question_text.starts_with("<svg"));
            assert!(question.question_text.contains("</svg>"));
            assert!(matches!(
                question.answer,
                Answer::Single(Scalar::Integer(_)) | Answer::Single(Scalar::Decimal(_))
            ));
        }
    }
}
