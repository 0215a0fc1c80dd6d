use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::quiz::ids::IdRegistry;
use crate::quiz::scenarios::ScenarioCatalog;
use crate::quiz::{Answer, Category, Question};

/// Produces questions for every category.
///
/// The category routines live next to their helpers (`arithmetic`, `algebra`,
/// `conversions`, ...) as further `impl` blocks on this type. All of them draw
/// from the same random source and take their ids from the same registry, so a
/// generator must not be shared between requests without a lock around it.
pub struct QuestionGenerator<R = StdRng> {
    pub(crate) rng: R,
    pub(crate) ids: IdRegistry,
    pub(crate) catalog: ScenarioCatalog,
}

impl QuestionGenerator<StdRng> {
    pub fn new(catalog: ScenarioCatalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    pub fn seeded(catalog: ScenarioCatalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuestionGenerator<R> {
    pub fn with_rng(catalog: ScenarioCatalog, rng: R) -> Self {
        Self {
            rng,
            ids: IdRegistry::new(),
            catalog,
        }
    }

    pub fn ids(&self) -> &IdRegistry {
        &self.ids
    }

    pub(crate) fn question(&mut self, text: String, category: Category, answer: Answer) -> Question {
        let id = self.ids.issue(&mut self.rng);
        Question::new(id, text, category, answer)
    }

    /// Generates one question of the given category.
    pub fn generate(&mut self, category: Category) -> Question {
        match category {
            Category::Addition => self.generate_addition(),
            Category::Subtraction => self.generate_subtraction(),
            Category::Multiplication => self.generate_multiplication(),
            Category::Division => self.generate_division(),
            Category::Factorization => self.generate_factorization(),
            Category::Algebra => self.generate_equation(),
            Category::FractionToDecimal => self.generate_fraction_to_decimal(),
            Category::DecimalToPercentage => self.generate_decimal_to_percentage(),
            Category::PercentageToFraction => self.generate_percentage_to_fraction(),
            Category::Geometry => self.generate_geometry(),
            Category::DataInterpretation => self.generate_data_interpretation(),
            Category::LogicalReasoning => self.generate_logical_reasoning(),
            Category::DataSufficiency => self.generate_data_sufficiency(),
            Category::ProfitLoss => self.generate_profit_loss(),
            Category::UnitaryMethod => self.generate_unitary(),
        }
    }

    /// One question drawn from a freshly generated pool of arithmetic,
    /// factorization and conversion questions.
    pub fn generate_mixed(&mut self) -> Question {
        let mut pool = self.generate_arithmetic();
        pool.push(self.generate_factorization());
        pool.push(self.generate_conversion());

        let idx = self.rng.gen_range(0..pool.len());
        pool.swap_remove(idx)
    }
}

/// Picks a catalog entry. Catalog lists are never empty after loading, the
/// fallback only covers hand-built catalogs.
pub(crate) fn pick<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T], fallback: impl FnOnce() -> T) -> T {
    items.choose(rng).cloned().unwrap_or_else(fallback)
}
