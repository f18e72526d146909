//! Tests for harmony scoring and slot-substitution refinement

#[cfg(test)]
mod tests {
    use outfitgen::algorithm::harmony::{HarmonyOptimizer, harmony_score};
    use outfitgen::algorithm::random::RandomSelector;
    use outfitgen::wardrobe::{ClothingItem, ItemId, OutfitCandidate, SlotPools, SlotType, Strategy};

    fn clashing_catalog() -> Vec<ClothingItem> {
        vec![
            ClothingItem::new(1, SlotType::Top, "#ff0000"),
            ClothingItem::new(2, SlotType::Bottom, "#000000"),
            ClothingItem::new(3, SlotType::Shoes, "#000000"),
            ClothingItem::new(4, SlotType::Top, "#000000"),
        ]
    }

    fn clashing_candidate(items: &[ClothingItem]) -> OutfitCandidate<'_> {
        OutfitCandidate::new(vec![&items[0], &items[1], &items[2]], None, Strategy::Random)
    }

    #[test]
    fn test_score_of_small_outfits() {
        let items = clashing_catalog();
        assert!(harmony_score(&[]).abs() < f64::EPSILON);
        assert!(harmony_score(&[&items[0]]).abs() < f64::EPSILON);
        assert!((harmony_score(&[&items[0], &items[1]]) - 255.0).abs() < 1e-9);
        assert!(harmony_score(&[&items[1], &items[2]]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_is_pairwise_average() {
        let items = clashing_catalog();
        let score = harmony_score(&[&items[0], &items[1], &items[2]]);
        assert!((score - 170.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_iterations_leave_candidate_untouched() {
        let items = clashing_catalog();
        let pools = SlotPools::from_items(&items);
        let mut candidate = clashing_candidate(&items);
        let before = candidate.clone();

        let outcome =
            HarmonyOptimizer::new(0).optimize(&mut candidate, &pools, &mut RandomSelector::new(1));
        assert_eq!(candidate, before);
        assert_eq!(outcome.accepted_moves, 0);
        assert!((outcome.final_score - outcome.initial_score).abs() < f64::EPSILON);
    }

    // An accepted move swaps the item worn in that role, not just a color
    // Catches optimizers that only permute a parallel color list
    #[test]
    fn test_accepted_move_replaces_item() {
        let items = clashing_catalog();
        let pools = SlotPools::from_items(&items);
        let mut candidate = clashing_candidate(&items);

        let outcome = HarmonyOptimizer::new(200).optimize(
            &mut candidate,
            &pools,
            &mut RandomSelector::new(9),
        );

        assert_eq!(
            candidate.item_for(SlotType::Top).map(|item| item.id),
            Some(ItemId(4))
        );
        assert_eq!(outcome.accepted_moves, 1);
        assert!(outcome.final_score.abs() < f64::EPSILON);
        assert!(candidate.is_valid());
    }

    // Score never gets worse and slot roles are preserved
    #[test]
    fn test_refinement_is_monotone() {
        let colors = ["#ff0000", "#00ff00", "#0000ff", "#ffffff", "#101010"];
        let mut items = Vec::new();
        for (offset, slot) in [SlotType::Top, SlotType::Bottom, SlotType::Shoes]
            .into_iter()
            .enumerate()
        {
            for (index, color) in colors.iter().enumerate() {
                items.push(ClothingItem::new((offset * 10 + index) as u64, slot, color));
            }
        }
        let pools = SlotPools::from_items(&items);

        for seed in 0..25 {
            let mut random = RandomSelector::new(seed);
            let mut candidate = OutfitCandidate::new(
                vec![&items[0], &items[6], &items[12]],
                None,
                Strategy::Random,
            );
            let outcome = HarmonyOptimizer::default().optimize(&mut candidate, &pools, &mut random);

            assert!(outcome.final_score <= outcome.initial_score);
            assert!((harmony_score(&candidate.items) - outcome.final_score).abs() < 1e-9);
            assert!(candidate.is_valid());
            let slots: Vec<SlotType> = candidate.items.iter().map(|item| item.slot).collect();
            assert_eq!(slots, vec![SlotType::Top, SlotType::Bottom, SlotType::Shoes]);
        }
    }

    #[test]
    fn test_default_iterations() {
        assert_eq!(HarmonyOptimizer::default().iterations(), 5);
    }
}
