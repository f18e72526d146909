//! Tests for vibe-biased random assembly

#[cfg(test)]
mod tests {
    use outfitgen::algorithm::assembler::{assemble_one, preferred_pool};
    use outfitgen::algorithm::random::RandomSelector;
    use outfitgen::wardrobe::{ClothingItem, ItemId, SlotPools, SlotType, Strategy};

    fn catalog() -> Vec<ClothingItem> {
        vec![
            ClothingItem::new(1, SlotType::Top, "#ff0000").with_vibes(["grunge"]),
            ClothingItem::new(2, SlotType::Top, "#00ff00"),
            ClothingItem::new(3, SlotType::Top, "#0000ff"),
            ClothingItem::new(4, SlotType::Bottom, "#111111"),
            ClothingItem::new(5, SlotType::Bottom, "#222222"),
            ClothingItem::new(6, SlotType::Shoes, "#333333"),
            ClothingItem::new(7, SlotType::Accessories, "#444444"),
        ]
    }

    #[test]
    fn test_preferred_pool_filters_by_vibe() {
        let items = catalog();
        let pools = SlotPools::from_items(&items);
        let tops = pools.pool(SlotType::Top);

        let grunge: Vec<ItemId> = preferred_pool(tops, Some("grunge"))
            .iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(grunge, vec![ItemId(1)]);
        assert_eq!(preferred_pool(tops, None).len(), 3);
    }

    // No matching items falls back to the whole pool instead of leaving the slot empty
    #[test]
    fn test_preferred_pool_falls_back() {
        let items = catalog();
        let pools = SlotPools::from_items(&items);
        assert_eq!(preferred_pool(pools.pool(SlotType::Bottom), Some("grunge")).len(), 2);
        assert!(preferred_pool(pools.pool(SlotType::Outerwear), Some("grunge")).is_empty());
    }

    #[test]
    fn test_vibe_preference_is_honored() {
        let items = catalog();
        let pools = SlotPools::from_items(&items);
        let mut random = RandomSelector::new(17);

        for _ in 0..50 {
            let candidate =
                assemble_one(&pools, Some("grunge"), &mut random).expect("complete outfit");
            assert_eq!(
                candidate.item_for(SlotType::Top).map(|item| item.id),
                Some(ItemId(1))
            );
            assert_eq!(candidate.vibe.as_deref(), Some("grunge"));
            assert_eq!(candidate.strategy, Strategy::Random);
        }
    }

    // Slots come out in canonical order and every non-empty slot is filled
    #[test]
    fn test_canonical_slot_order() {
        let items = catalog();
        let pools = SlotPools::from_items(&items);
        let mut random = RandomSelector::new(4);

        let candidate = assemble_one(&pools, None, &mut random).expect("complete outfit");
        let slots: Vec<SlotType> = candidate.items.iter().map(|item| item.slot).collect();
        assert_eq!(
            slots,
            vec![
                SlotType::Top,
                SlotType::Bottom,
                SlotType::Shoes,
                SlotType::Accessories
            ]
        );
        assert!(candidate.is_valid());
        assert_eq!(candidate.vibe, None);
    }

    // Catches partially filled outfits leaking out
    #[test]
    fn test_missing_required_slot_fails_attempt() {
        let items: Vec<ClothingItem> = catalog()
            .into_iter()
            .filter(|item| item.slot != SlotType::Shoes)
            .collect();
        let pools = SlotPools::from_items(&items);

        for seed in 0..20 {
            let mut random = RandomSelector::new(seed);
            assert!(assemble_one(&pools, None, &mut random).is_none());
        }
    }
}
