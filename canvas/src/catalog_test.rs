use super::*;

const SAMPLE: &str = r#"{
    "head": { "path": "static/assets/head", "files": ["01.png", "Group 1.png"] },
    "hair": { "path": "static/assets/hair/", "files": ["02.png"] },
    "eyes": { "path": "static/assets/eyes", "files": [] }
}"#;

// =============================================================
// Parsing
// =============================================================

#[test]
fn from_json_preserves_category_order() {
    let catalog = Catalog::from_json(SAMPLE).unwrap();
    let names: Vec<&str> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["head", "hair", "eyes"]);
}

#[test]
fn from_json_order_is_not_alphabetical() {
    let catalog = Catalog::from_json(r#"{"zeta": {"path": "z", "files": []}, "alpha": {"path": "a", "files": []}}"#)
        .unwrap();
    assert_eq!(catalog.categories()[0].name, "zeta");
    assert_eq!(catalog.categories()[1].name, "alpha");
}

#[test]
fn from_json_keeps_file_order() {
    let catalog = Catalog::from_json(SAMPLE).unwrap();
    let head = &catalog.categories()[0];
    assert_eq!(head.name, "head");
    assert_eq!(head.spec.files, vec!["01.png".to_owned(), "Group 1.png".to_owned()]);
}

#[test]
fn from_json_rejects_duplicate_category() {
    let err = Catalog::from_json(r#"{"nose": {"path": "a", "files": []}, "nose": {"path": "b", "files": []}}"#)
        .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateCategory(ref name) if name == "nose"));
}

#[test]
fn from_json_rejects_empty_name() {
    let err = Catalog::from_json(r#"{"": {"path": "a", "files": []}}"#).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyCategoryName));
}

#[test]
fn from_json_rejects_non_object() {
    let err = Catalog::from_json("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn from_json_rejects_missing_files_field() {
    assert!(Catalog::from_json(r#"{"lips": {"path": "a"}}"#).is_err());
}

#[test]
fn serde_deserialize_goes_through_validation() {
    let result: Result<Catalog, _> =
        serde_json::from_str(r#"{"lips": {"path": "a", "files": []}, "lips": {"path": "a", "files": []}}"#);
    assert!(result.is_err());
}

#[test]
fn serialize_keeps_order() {
    let catalog = Catalog::from_json(SAMPLE).unwrap();
    let json = serde_json::to_string(&catalog).unwrap();
    let head = json.find("\"head\"").unwrap();
    let hair = json.find("\"hair\"").unwrap();
    let eyes = json.find("\"eyes\"").unwrap();
    assert!(head < hair && hair < eyes);
}

#[test]
fn empty_object_is_empty_catalog() {
    let catalog = Catalog::from_json("{}").unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
}

// =============================================================
// Assets
// =============================================================

#[test]
fn asset_path_trims_trailing_slash() {
    let asset = FeatureAsset::new("hair", "static/assets/hair/", "02.png");
    assert_eq!(asset.path, "static/assets/hair/02.png");
}

#[test]
fn alt_text_uses_capitalized_category_and_stem() {
    let asset = FeatureAsset::new("hair", "static/assets/hair", "03.png");
    assert_eq!(asset.alt_text(), "Hair feature: 03");
}

#[test]
fn alt_text_keeps_spaces_in_stem() {
    let asset = FeatureAsset::new("head", "h", "Group 10.png");
    assert_eq!(asset.alt_text(), "Head feature: Group 10");
}

#[test]
fn drag_payload_carries_path_and_alt() {
    let asset = FeatureAsset::new("nose", "static/assets/nose", "05.png");
    let payload = asset.drag_payload();
    assert_eq!(payload.source_path, "static/assets/nose/05.png");
    assert_eq!(payload.alt_text, "Nose feature: 05");
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn capitalize_first_letter_only() {
    assert_eq!(capitalize("mustach"), "Mustach");
    assert_eq!(capitalize("eyeBrows"), "EyeBrows");
    assert_eq!(capitalize(""), "");
}

#[test]
fn file_stem_stops_at_first_dot() {
    assert_eq!(file_stem("01.png"), "01");
    assert_eq!(file_stem("a.b.png"), "a");
    assert_eq!(file_stem("noext"), "noext");
}
