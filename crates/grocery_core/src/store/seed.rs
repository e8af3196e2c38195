//! Starter "essential foods" data and the injectable completion source.

use crate::model::item::Item;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How the completion flag of one seeded entry is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedCompletion {
    Fixed(bool),
    Drawn,
}

/// Starter entries in display order.
pub const ESSENTIAL_FOODS: [(&str, SeedCompletion); 5] = [
    ("Bakery & Breads", SeedCompletion::Fixed(false)),
    ("Meat & Seafood", SeedCompletion::Fixed(true)),
    ("Cereals", SeedCompletion::Drawn),
    ("Pasta & Rice", SeedCompletion::Drawn),
    ("Cheese & Eggs", SeedCompletion::Drawn),
];

/// Supplies completion flags for seeded entries marked `Drawn`.
pub trait CompletionSource {
    fn next_flag(&mut self) -> bool;
}

/// Fair coin flips from a standard RNG.
pub struct RandomCompletion {
    rng: StdRng,
}

impl RandomCompletion {
    /// Seeds from OS entropy; flags differ between runs.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CompletionSource for RandomCompletion {
    fn next_flag(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Always yields the same flag.
#[derive(Debug, Clone, Copy)]
pub struct FixedCompletion(pub bool);

impl CompletionSource for FixedCompletion {
    fn next_flag(&mut self) -> bool {
        self.0
    }
}

/// Builds the five starter items with fresh ids.
pub(crate) fn essential_items(source: &mut dyn CompletionSource) -> Vec<Item> {
    ESSENTIAL_FOODS
        .iter()
        .map(|(title, completion)| {
            let is_completed = match completion {
                SeedCompletion::Fixed(flag) => *flag,
                SeedCompletion::Drawn => source.next_flag(),
            };
            Item::with_completion(*title, is_completed)
        })
        .collect()
}
