use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::quiz::generator::{pick, QuestionGenerator};
use crate::quiz::scenarios::{self, ChartTopic, SufficiencyLabel, SufficiencyProblem};
use crate::quiz::{Answer, Category, Question};

/// Bar values are distinct multiples of ten in [20, 90].
const BAR_VALUES: [i64; 8] = [20, 30, 40, 50, 60, 70, 80, 90];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartQuery {
    MaxLabel,
    MinLabel,
    Total,
    Difference(usize, usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub topic: ChartTopic,
    pub values: Vec<i64>,
}

impl BarChart {
    pub fn answer(&self, query: ChartQuery) -> Answer {
        match query {
            ChartQuery::MaxLabel => Answer::Text(self.label_at(self.position_by(|a, b| a > b))),
            ChartQuery::MinLabel => Answer::Text(self.label_at(self.position_by(|a, b| a < b))),
            ChartQuery::Total => Answer::integer(self.values.iter().sum()),
            ChartQuery::Difference(i, j) => Answer::integer((self.values[i] - self.values[j]).abs()),
        }
    }

    fn position_by(&self, better: impl Fn(i64, i64) -> bool) -> usize {
        let mut best = 0;
        for (i, value) in self.values.iter().enumerate() {
            if better(*value, self.values[best]) {
                best = i;
            }
        }
        best
    }

    fn label_at(&self, idx: usize) -> String {
        self.topic.labels.get(idx).cloned().unwrap_or_default()
    }

    pub fn diagram(&self) -> String {
        const BAR_WIDTH: usize = 40;
        const GAP: usize = 20;
        const BASE: usize = 120;

        let width = self.values.len() * (BAR_WIDTH + GAP) + GAP;
        let mut svg = format!(
            "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">",
            width,
            BASE + 40
        );
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"14\" text-anchor=\"middle\">{} ({})</text>",
            width / 2,
            self.topic.title,
            self.topic.unit
        ));
        for (i, (label, value)) in self.topic.labels.iter().zip(&self.values).enumerate() {
            let x = GAP + i * (BAR_WIDTH + GAP);
            let height = *value as usize;
            svg.push_str(&format!(
                "<rect x=\"{x}\" y=\"{y}\" width=\"{BAR_WIDTH}\" height=\"{height}\" fill=\"steelblue\"/>\
<text x=\"{cx}\" y=\"{vy}\" text-anchor=\"middle\">{value}</text>\
<text x=\"{cx}\" y=\"{ly}\" text-anchor=\"middle\">{label}</text>",
                y = BASE - height + 20,
                cx = x + BAR_WIDTH / 2,
                vy = BASE - height + 16,
                ly = BASE + 36,
            ));
        }
        svg.push_str("</svg>");
        svg
    }
}

impl<R: Rng> QuestionGenerator<R> {
    pub fn generate_data_interpretation(&mut self) -> Question {
        let chart = self.random_chart();
        let query = match self.rng.gen_range(0..4) {
            0 => ChartQuery::MaxLabel,
            1 => ChartQuery::MinLabel,
            3 if chart.values.len() >= 2 => {
                let pair = index::sample(&mut self.rng, chart.values.len(), 2);
                ChartQuery::Difference(pair.index(0), pair.index(1))
            }
            _ => ChartQuery::Total,
        };

        let unit = &chart.topic.unit;
        let prompt = match query {
            ChartQuery::MaxLabel => "Which category has the highest value?".to_string(),
            ChartQuery::MinLabel => "Which category has the lowest value?".to_string(),
            ChartQuery::Total => format!("What is the total across all categories (in {})?", unit),
            ChartQuery::Difference(i, j) => format!(
                "What is the difference between {} and {} (in {})?",
                chart.topic.labels[i], chart.topic.labels[j], unit
            ),
        };

        let text = format!("{}<br>{}", chart.diagram(), prompt);
        let answer = chart.answer(query);
        self.question(text, Category::DataInterpretation, answer)
    }

    pub(crate) fn random_chart(&mut self) -> BarChart {
        let usable: Vec<&ChartTopic> = self
            .catalog
            .di_topics
            .iter()
            .filter(|topic| scenarios::valid_topic(topic))
            .collect();
        let topic = match usable.choose(&mut self.rng) {
            Some(topic) => (*topic).clone(),
            None => {
                log::warn!("No usable chart topic in the catalog, using the default");
                scenarios::default_di_topics().swap_remove(0)
            }
        };
        let mut values: Vec<i64> = BAR_VALUES.to_vec();
        values.shuffle(&mut self.rng);
        values.truncate(topic.labels.len());
        BarChart { topic, values }
    }

    pub fn generate_data_sufficiency(&mut self) -> Question {
        let problem = pick(&mut self.rng, &self.catalog.ds_problems, || {
            scenarios::default_ds_problems().swap_remove(0)
        });
        let text = sufficiency_text(&problem);
        self.question(
            text,
            Category::DataSufficiency,
            Answer::text(problem.correct.as_str()),
        )
    }
}

fn sufficiency_text(problem: &SufficiencyProblem) -> String {
    let options = SufficiencyLabel::ALL
        .iter()
        .map(|label| label.as_str())
        .collect::<Vec<_>>()
        .join(" / ");
    format!(
        "{}<br>Statement I: {}<br>Statement II: {}<br>Which statement(s) are sufficient to answer the question? ({})",
        problem.question, problem.stat1, problem.stat2, options
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::ScenarioCatalog;
    use std::collections::HashSet;

    fn chart(values: Vec<i64>) -> BarChart {
        BarChart {
            topic: ChartTopic {
                title: "Fruit sold".to_string(),
                labels: vec!["Apples".into(), "Pears".into(), "Plums".into()],
                unit: "kg".to_string(),
            },
            values,
        }
    }

    #[test]
    fn chart_queries() {
        let chart = chart(vec![40, 90, 20]);
        assert_eq!(chart.answer(ChartQuery::MaxLabel), Answer::text("Pears"));
        assert_eq!(chart.answer(ChartQuery::MinLabel), Answer::text("Plums"));
        assert_eq!(chart.answer(ChartQuery::Total), Answer::integer(150));
        assert_eq!(chart.answer(ChartQuery::Difference(2, 0)), Answer::integer(20));
    }

    #[test]
    fn chart_values_are_distinct_multiples_of_ten() {
        let mut generator = QuestionGenerator::seeded(ScenarioCatalog::default(), 41);
        for _ in 0..200 {
            let chart = generator.random_chart();
            assert_eq!(chart.values.len(), chart.topic.labels.len());
            assert!(chart.values.iter().all(|v| v % 10 == 0 && (20..=90).contains(v)));
            let unique: HashSet<_> = chart.values.iter().collect();
            assert_eq!(unique.len(), chart.values.len());
        }
    }

    #[test]
    fn interpretation_question_carries_chart() {
        let mut generator = QuestionGenerator::seeded(ScenarioCatalog::default(), 42);
        for _ in 0..100 {
            let question = generator.generate_data_interpretation();
            assert_eq!(question.category, Category::DataInterpretation);
            assert!(question.question_text.starts_with("<svg"));
        }
    }

    #[test]
    fn unusable_topics_are_replaced_by_the_default() {
        let mut catalog = ScenarioCatalog::default();
        catalog.di_topics = vec![
            ChartTopic {
                title: "Empty".to_string(),
                labels: Vec::new(),
                unit: "units".to_string(),
            },
            ChartTopic {
                title: "Repeated".to_string(),
                labels: vec!["A".into(), "A".into()],
                unit: "units".to_string(),
            },
        ];
        let default_title = scenarios::default_di_topics().swap_remove(0).title;

        let mut generator = QuestionGenerator::seeded(catalog, 77);
        for _ in 0..100 {
            assert_eq!(generator.random_chart().topic.title, default_title);
            let question = generator.generate_data_interpretation();
            assert!(!question.answer.to_string().is_empty());
        }
    }

    #[test]
    fn labels_missing_for_a_value_answer_blank() {
        let mut chart = chart(vec![40, 90, 20, 95]);
        chart.topic.labels.truncate(1);
        assert_eq!(chart.answer(ChartQuery::MaxLabel), Answer::text(""));
    }

    #[test]
    fn sufficiency_answer_is_canonical() {
        let canonical: Vec<&str> = SufficiencyLabel::ALL.iter().map(|l| l.as_str()).collect();
        let mut generator = QuestionGenerator::seeded(ScenarioCatalog::default(), 43);
        for _ in 0..20 {
            let question = generator.generate_data_sufficiency();
            let Answer::Text(label) = &question.answer else {
                panic!("expected text answer");
            };
            assert!(canonical.contains(&label.as_str()));
            assert!(question.question_text.contains("Statement II"));
        }
    }
}
