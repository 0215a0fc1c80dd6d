use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::generator::{pick, QuestionGenerator};
use crate::quiz::scenarios;
use crate::quiz::{Answer, Category, Question};

/// Group sizes the cost questions are priced in.
const COST_GROUPS: [u32; 3] = [12, 20, 10];

/// Fresh draws before the work question falls back to a fixed scenario.
pub const MAX_WORK_ATTEMPTS: usize = 16;

const MAX_ALTERNATE_WORKERS: u32 = 40;

/// `workers` finish a job in `days`; how long do `new_workers` take?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkProblem {
    pub workers: u32,
    pub days: u32,
    pub new_workers: u32,
}

impl WorkProblem {
    pub fn effort(&self) -> u32 {
        self.workers * self.days
    }

    pub fn new_days(&self) -> u32 {
        self.effort() / self.new_workers
    }

    /// Falls back to 10 workers for 12 days, which always has alternates.
    fn fallback<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (workers, days) = (10, 12);
        let new_workers = alternate_workers(rng, workers, days).unwrap_or(8);
        Self {
            workers,
            days,
            new_workers,
        }
    }
}

/// A worker count other than `workers` that splits `workers * days` evenly.
pub fn alternate_workers<R: Rng + ?Sized>(rng: &mut R, workers: u32, days: u32) -> Option<u32> {
    let effort = workers * days;
    let candidates: Vec<u32> = (2..=MAX_ALTERNATE_WORKERS)
        .filter(|w| *w != workers && effort % w == 0)
        .collect();
    candidates.choose(rng).copied()
}

impl<R: Rng> QuestionGenerator<R> {
    pub fn generate_profit_loss(&mut self) -> Question {
        let name = pick(&mut self.rng, &self.catalog.profit_loss_names, || {
            scenarios::default_profit_loss_names().swap_remove(0)
        });
        let item = pick(&mut self.rng, &self.catalog.profit_loss_items, || {
            scenarios::default_profit_loss_items().swap_remove(0)
        });

        let cost: i64 = self.rng.gen_range(5..=50) * 10;
        let rate: i64 = self.rng.gen_range(1..=5) * 10;
        let gain = self.rng.gen_bool(0.5);
        let sale = if gain {
            cost * (100 + rate) / 100
        } else {
            cost * (100 - rate) / 100
        };
        let outcome = if gain { "profit" } else { "loss" };

        let setup = format!(
            "{} bought a {} for Rs. {} and sold it for Rs. {}.",
            name, item, cost, sale
        );
        let (text, answer) = if self.rng.gen_bool(0.5) {
            (
                format!("{} What is the {} amount in Rs.?", setup, outcome),
                (sale - cost).abs(),
            )
        } else {
            (format!("{} What is the {} percentage?", setup, outcome), rate)
        };
        self.question(text, Category::ProfitLoss, Answer::integer(answer))
    }

    pub fn generate_unitary(&mut self) -> Question {
        if self.rng.gen_bool(0.5) {
            self.generate_unitary_cost()
        } else {
            self.generate_unitary_work()
        }
    }

    pub fn generate_unitary_cost(&mut self) -> Question {
        let item = pick(&mut self.rng, &self.catalog.unitary_cost_items, || {
            scenarios::default_unitary_cost_items().swap_remove(0)
        });
        let group = *COST_GROUPS.choose(&mut self.rng).unwrap_or(&COST_GROUPS[0]);
        let unit_cost: u32 = self.rng.gen_range(2..=25);
        let mut target: u32 = self.rng.gen_range(2..=50);
        while target == group {
            target = self.rng.gen_range(2..=50);
        }

        let text = format!(
            "If {} {} cost Rs. {}, what is the cost of {} {} in Rs.?",
            group,
            item,
            group * unit_cost,
            target,
            item
        );
        self.question(
            text,
            Category::UnitaryMethod,
            Answer::integer(i64::from(target * unit_cost)),
        )
    }

    pub fn generate_unitary_work(&mut self) -> Question {
        let scenario = pick(&mut self.rng, &self.catalog.unitary_work_scenarios, || {
            scenarios::default_work_scenarios().swap_remove(0)
        });
        let problem = self.work_problem();

        let text = format!(
            "{} {} can {} in {} days. How many days will {} {} take to {}?",
            problem.workers,
            scenario.actor,
            scenario.task,
            problem.days,
            problem.new_workers,
            scenario.actor,
            scenario.task
        );
        self.question(
            text,
            Category::UnitaryMethod,
            Answer::integer(i64::from(problem.new_days())),
        )
    }

    pub(crate) fn work_problem(&mut self) -> WorkProblem {
        solve_work(&mut self.rng, |rng| (rng.gen_range(4..=15), rng.gen_range(4..=20)))
    }
}

/// Takes up to `MAX_WORK_ATTEMPTS` `(workers, days)` pairs from `draw` and keeps
/// the first one that has an alternate worker count.
fn solve_work<R, F>(rng: &mut R, mut draw: F) -> WorkProblem
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> (u32, u32),
{
    for attempt in 1..=MAX_WORK_ATTEMPTS {
        let (workers, days) = draw(rng);
        if let Some(new_workers) = alternate_workers(rng, workers, days) {
            return WorkProblem {
                workers,
                days,
                new_workers,
            };
        }
        log::debug!(
            "No alternate worker count for {} x {} (attempt {})",
            workers,
            days,
            attempt
        );
    }
    log::warn!(
        "No solvable work problem after {} attempts, using fallback",
        MAX_WORK_ATTEMPTS
    );
    WorkProblem::fallback(rng)
}
