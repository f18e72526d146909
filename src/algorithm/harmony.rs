//! Color-harmony refinement for randomly assembled outfits
//!
//! Each move replaces the item occupying one role with another item from the
//! same slot, so an accepted move always changes which item is worn.

use crate::algorithm::assembler::preferred_pool;
use crate::algorithm::random::RandomSelector;
use crate::io::configuration::DEFAULT_HARMONY_ITERATIONS;
use crate::math::color::distance;
use crate::wardrobe::{ClothingItem, OutfitCandidate, SlotPools};
use rand::Rng;

/// Average pairwise color distance, lower is more cohesive
///
/// Outfits with fewer than two items score 0.
pub fn harmony_score(items: &[&ClothingItem]) -> f64 {
    let mut total = 0.0;
    let mut pairs = 0_usize;

    for (i, a) in items.iter().enumerate() {
        for b in items.iter().skip(i + 1) {
            total += distance(&a.color, &b.color);
            pairs += 1;
        }
    }

    if pairs == 0 { 0.0 } else { total / pairs as f64 }
}

/// Summary of one optimization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonyOutcome {
    /// Score before any move
    pub initial_score: f64,
    /// Score after the last accepted move
    pub final_score: f64,
    /// Number of moves kept
    pub accepted_moves: usize,
}

/// Bounded hill climb over slot substitutions
#[derive(Debug, Clone, Copy)]
pub struct HarmonyOptimizer {
    iterations: usize,
}

impl Default for HarmonyOptimizer {
    fn default() -> Self {
        Self::new(DEFAULT_HARMONY_ITERATIONS)
    }
}

impl HarmonyOptimizer {
    /// Create an optimizer running a fixed number of iterations
    pub const fn new(iterations: usize) -> Self {
        Self { iterations }
    }

    /// Iterations per candidate
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Refine a candidate in place
    ///
    /// Every iteration picks a random role and a random unused alternative
    /// from that role's slot pool (vibe-preferred as during assembly). The
    /// substitution is kept only if it strictly lowers [`harmony_score`].
    /// Runs exactly `iterations` times.
    pub fn optimize<'a, R: Rng>(
        &self,
        candidate: &mut OutfitCandidate<'a>,
        pools: &SlotPools<'a>,
        random: &mut RandomSelector<R>,
    ) -> HarmonyOutcome {
        let initial_score = harmony_score(&candidate.items);
        let mut current_score = initial_score;
        let mut accepted_moves = 0;

        for _ in 0..self.iterations {
            let Some(position) = random.index(candidate.items.len()) else {
                break;
            };
            let Some(&occupant) = candidate.items.get(position) else {
                continue;
            };

            let alternatives: Vec<&'a ClothingItem> =
                preferred_pool(pools.pool(occupant.slot), candidate.vibe.as_deref())
                    .into_iter()
                    .filter(|item| !candidate.contains(item.id))
                    .collect();
            let Some(&replacement) = random.choose(&alternatives) else {
                continue;
            };

            let mut trial = candidate.items.clone();
            if let Some(role) = trial.get_mut(position) {
                *role = replacement;
            }

            let trial_score = harmony_score(&trial);
            if trial_score < current_score {
                candidate.items = trial;
                current_score = trial_score;
                accepted_moves += 1;
            }
        }

        HarmonyOutcome {
            initial_score,
            final_score: current_score,
            accepted_moves,
        }
    }
}
