use crate::algorithm::dedup::DedupRegistry;
use crate::wardrobe::{ClothingItem, OutfitCandidate, Palette, SlotPools, SlotType, Strategy};
use tracing::debug;

/// Item in `pool` closest to any color of `palette`, skipping `exclude`
///
/// Ties go to the earliest item in catalog order. Items with unknown color
/// are still returned when nothing closer exists.
pub fn nearest_item<'a>(
    pool: &[&'a ClothingItem],
    palette: &Palette,
    exclude: &[&'a ClothingItem],
) -> Option<&'a ClothingItem> {
    let mut best: Option<(&'a ClothingItem, f64)> = None;

    for &item in pool {
        if exclude.iter().any(|used| used.id == item.id) {
            continue;
        }

        let score = palette.nearest_distance(&item.color);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((item, score)),
        }
    }

    best.map(|(item, _)| item)
}

/// Assemble the nearest-color outfit for one palette
///
/// Returns `None` when any required slot has no items.
pub fn match_palette<'a>(pools: &SlotPools<'a>, palette: &Palette) -> Option<OutfitCandidate<'a>> {
    let mut chosen: Vec<&'a ClothingItem> = Vec::with_capacity(SlotType::ALL.len());

    for slot in SlotType::REQUIRED {
        let item = nearest_item(pools.pool(slot), palette, &chosen)?;
        chosen.push(item);
    }

    for slot in SlotType::OPTIONAL {
        if let Some(item) = nearest_item(pools.pool(slot), palette, &chosen) {
            chosen.push(item);
        }
    }

    Some(OutfitCandidate::new(chosen, None, Strategy::Palette))
}

/// Run every palette in table order, keeping only outfits not yet registered
///
/// Palettes often converge on the same best items; those repeats are dropped
/// silently.
pub fn match_palettes<'a>(
    pools: &SlotPools<'a>,
    palettes: &[Palette],
    registry: &mut DedupRegistry,
) -> Vec<OutfitCandidate<'a>> {
    if !pools.covers_required() {
        debug!("palette pass skipped: a required slot has no items");
        return Vec::new();
    }

    let mut accepted = Vec::new();
    for (index, palette) in palettes.iter().enumerate() {
        let Some(candidate) = match_palette(pools, palette) else {
            continue;
        };

        if !candidate.is_valid() {
            debug!(palette = index, "palette outfit repeats an item");
            continue;
        }
        if registry.add(candidate.dedup_key()) {
            accepted.push(candidate);
        } else {
            debug!(palette = index, "palette outfit already seen");
        }
    }

    debug!(
        palettes = palettes.len(),
        accepted = accepted.len(),
        "palette pass finished"
    );
    accepted
}
