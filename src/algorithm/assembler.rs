use crate::algorithm::random::RandomSelector;
use crate::wardrobe::{ClothingItem, OutfitCandidate, SlotPools, SlotType, Strategy};
use rand::Rng;

/// Items of a pool carrying `vibe`, or the whole pool when none do
///
/// With no vibe the whole pool is returned.
pub fn preferred_pool<'a>(pool: &[&'a ClothingItem], vibe: Option<&str>) -> Vec<&'a ClothingItem> {
    let Some(vibe) = vibe else {
        return pool.to_vec();
    };

    let matching: Vec<&'a ClothingItem> = pool
        .iter()
        .copied()
        .filter(|item| item.has_vibe(vibe))
        .collect();

    if matching.is_empty() {
        pool.to_vec()
    } else {
        matching
    }
}

/// Draw one item per non-empty slot, biased toward `vibe`
///
/// Slots are visited in canonical order. Returns `None` when top, bottom, or
/// shoes could not be filled; that is a failed attempt, not an error.
pub fn assemble_one<'a, R: Rng>(
    pools: &SlotPools<'a>,
    vibe: Option<&str>,
    random: &mut RandomSelector<R>,
) -> Option<OutfitCandidate<'a>> {
    let mut items: Vec<&'a ClothingItem> = Vec::with_capacity(SlotType::ALL.len());

    for slot in SlotType::ALL {
        let source = preferred_pool(pools.pool(slot), vibe);
        if let Some(&item) = random.choose(&source) {
            items.push(item);
        }
    }

    let candidate = OutfitCandidate::new(items, vibe.map(str::to_string), Strategy::Random);
    candidate.has_required_slots().then_some(candidate)
}
