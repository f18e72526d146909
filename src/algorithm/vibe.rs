use crate::algorithm::random::RandomSelector;
use crate::wardrobe::ClothingItem;
use rand::Rng;
use std::collections::HashMap;

/// Vibe tags with the number of items carrying each, in first-appearance order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VibeTable {
    entries: Vec<(String, usize)>,
}

impl VibeTable {
    /// Count vibe occurrences across a catalog snapshot
    pub fn from_items<'i>(items: impl IntoIterator<Item = &'i ClothingItem>) -> Self {
        let mut entries: Vec<(String, usize)> = Vec::new();
        let mut positions: HashMap<&'i str, usize> = HashMap::new();

        for item in items {
            for vibe in &item.vibes {
                if let Some(&position) = positions.get(vibe.as_str()) {
                    if let Some(entry) = entries.get_mut(position) {
                        entry.1 += 1;
                    }
                } else {
                    positions.insert(vibe.as_str(), entries.len());
                    entries.push((vibe.clone(), 1));
                }
            }
        }

        Self { entries }
    }

    /// Tag and count pairs in table order
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// Number of items carrying the tag
    pub fn count(&self, vibe: &str) -> usize {
        self.entries
            .iter()
            .find(|(tag, _)| tag == vibe)
            .map_or(0, |(_, count)| *count)
    }

    /// Sum of all tag counts
    pub fn total_weight(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Whether the catalog carries no tags at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Frequency-weighted draw, `None` when there are no tags
    pub fn sample<R: Rng>(&self, random: &mut RandomSelector<R>) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }

        let weights: Vec<f64> = self
            .entries
            .iter()
            .map(|(_, count)| *count as f64)
            .collect();
        let index = random.weighted_choice(&weights);
        self.entries.get(index).map(|(tag, _)| tag.as_str())
    }
}

/// Pick a vibe with probability proportional to how many items carry it
///
/// Returns `None` for catalogs without tags, which puts assembly in unbiased mode.
pub fn pick_vibe<R: Rng>(items: &[ClothingItem], random: &mut RandomSelector<R>) -> Option<String> {
    VibeTable::from_items(items)
        .sample(random)
        .map(str::to_string)
}
