//! Tests for catalog parsing and the catalog implementations

#[cfg(test)]
mod tests {
    use outfitgen::EngineError;
    use outfitgen::io::catalog::{
        CredentialContext, InMemoryCatalog, ItemCatalog, JsonFileCatalog, items_from_json,
    };
    use outfitgen::wardrobe::{ClothingItem, ItemId, SlotType};
    use std::path::Path;

    const CATALOG: &str = r##"[
        {"id": 1, "itemType": "top", "vibes": ["vintage", " "], "color": "#F00", "imageUrl": "/uploads/1.png", "owner": "ana"},
        {"id": 2, "itemType": "pullover", "color": "#222222", "owner": "ben"},
        {"id": 3, "itemType": "hat", "color": "#333333"},
        {"id": 4, "itemType": "shoes"},
        {"id": 5, "itemType": "bottom", "color": 12}
    ]"##;

    fn parse(json: &str, credentials: &CredentialContext) -> Vec<ClothingItem> {
        items_from_json(json, Path::new("catalog.json"), credentials).expect("parse catalog")
    }

    #[test]
    fn test_bare_document() {
        let items = parse(CATALOG, &CredentialContext::anonymous());
        let ids: Vec<ItemId> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(2), ItemId(4), ItemId(5)]);

        let top = &items[0];
        assert_eq!(top.slot, SlotType::Top);
        assert_eq!(top.color.as_hex(), "#ff0000");
        assert_eq!(top.vibes.len(), 1);
        assert!(top.has_vibe("vintage"));
        assert_eq!(top.image_ref, "/uploads/1.png");
    }

    #[test]
    fn test_wrapped_document() {
        let json = format!("{{\"items\": {CATALOG}}}");
        assert_eq!(parse(&json, &CredentialContext::anonymous()).len(), 4);
    }

    // Legacy pullover items land in the outerwear slot
    #[test]
    fn test_pullover_alias() {
        let items = parse(CATALOG, &CredentialContext::anonymous());
        assert_eq!(items[1].slot, SlotType::Outerwear);
    }

    // Catches bad color data failing the whole catalog
    #[test]
    fn test_missing_or_non_string_color_is_unknown() {
        let items = parse(CATALOG, &CredentialContext::anonymous());
        assert!(items[2].color.is_unknown());
        assert!(items[3].color.is_unknown());
        assert!(!items[0].color.is_unknown());
    }

    #[test]
    fn test_owner_filter() {
        let credentials = CredentialContext::anonymous().with_owner("ana");
        let ids: Vec<ItemId> = parse(CATALOG, &credentials)
            .iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(4), ItemId(5)]);
    }

    // One bad optional field must not reject the rest of the catalog
    #[test]
    fn test_null_and_mixed_vibes_are_absorbed() {
        let json = r##"[
            {"id": 1, "itemType": "top", "vibes": ["a"], "color": "#fff"},
            {"id": 2, "itemType": "bottom", "vibes": null, "color": "#000"},
            {"id": 3, "itemType": "shoes", "vibes": ["street", 7, null, " neon "], "color": "#123"},
            {"id": 4, "itemType": "accessories", "vibes": {"not": "a list"}},
            {"id": 5, "itemType": "outerwear", "vibes": "grunge"}
        ]"##;
        let items = parse(json, &CredentialContext::anonymous());

        let ids: Vec<ItemId> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(2), ItemId(3), ItemId(4), ItemId(5)]);
        assert!(items[1].vibes.is_empty());
        assert_eq!(
            items[2].vibes.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["neon", "street"]
        );
        assert!(items[3].vibes.is_empty());
        assert!(items[4].has_vibe("grunge"));
    }

    // Catches a single unreadable record failing the whole document
    #[test]
    fn test_unreadable_record_is_skipped() {
        let json = r##"{"items": [
            {"id": "seven", "itemType": "top"},
            {"itemType": "top", "color": "#fff"},
            {"id": 2, "itemType": ["bottom"]},
            3,
            {"id": 4, "itemType": "shoes", "color": "#000"}
        ]}"##;
        let items = parse(json, &CredentialContext::anonymous());
        let ids: Vec<ItemId> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![ItemId(4)]);
    }

    #[test]
    fn test_malformed_document() {
        let result = items_from_json(
            "{\"records\": 3}",
            Path::new("catalog.json"),
            &CredentialContext::anonymous(),
        );
        assert!(matches!(result, Err(EngineError::CatalogFormat { .. })));
    }

    #[test]
    fn test_file_catalog() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, CATALOG).expect("write catalog");

        let catalog = JsonFileCatalog::new(&path);
        assert_eq!(catalog.path(), path.as_path());
        let items = catalog
            .fetch_items(&CredentialContext::anonymous())
            .expect("fetch items");
        assert_eq!(items.len(), 4);
    }

    // An unreadable catalog is a connectivity failure, not a data anomaly
    #[test]
    fn test_missing_file_is_connectivity_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let catalog = JsonFileCatalog::new(dir.path().join("absent.json"));
        assert!(matches!(
            catalog.fetch_items(&CredentialContext::anonymous()),
            Err(EngineError::Connectivity { .. })
        ));
    }

    #[test]
    fn test_in_memory_catalog() {
        let items = vec![ClothingItem::new(9, SlotType::Shoes, "#000")];
        let catalog = InMemoryCatalog::new(items.clone());
        assert_eq!(
            catalog
                .fetch_items(&CredentialContext::anonymous())
                .expect("fetch items"),
            items
        );
    }

    #[test]
    fn test_credential_builders() {
        let credentials = CredentialContext::anonymous()
            .with_token("  ")
            .with_owner("ana");
        assert_eq!(credentials.token(), None);
        assert_eq!(credentials.owner(), Some("ana"));
        assert_eq!(
            CredentialContext::anonymous().with_token("abc").token(),
            Some("abc")
        );
    }
}
