#![allow(clippy::float_cmp)]

use super::*;

fn make_feature(z: i64) -> PlacedFeature {
    let mut f = PlacedFeature::new("static/assets/head/01.png", "Head feature: 01", 10.0, 20.0);
    f.z_index = z;
    f
}

// =============================================================
// PlacedFeature
// =============================================================

#[test]
fn new_feature_has_default_size_and_no_aspect() {
    let f = PlacedFeature::new("a.png", "A", 5.0, 6.0);
    assert_eq!(f.width, DEFAULT_FEATURE_WIDTH);
    assert_eq!(f.height, DEFAULT_FEATURE_WIDTH);
    assert_eq!(f.aspect_ratio, None);
    assert_eq!(f.z_index, 0);
    assert_eq!(f.left, 5.0);
    assert_eq!(f.top, 6.0);
}

#[test]
fn new_features_get_distinct_ids() {
    let a = PlacedFeature::new("a.png", "A", 0.0, 0.0);
    let b = PlacedFeature::new("a.png", "A", 0.0, 0.0);
    assert_ne!(a.id, b.id);
}

#[test]
fn effective_aspect_defaults_to_one() {
    let mut f = make_feature(0);
    assert_eq!(f.effective_aspect(), 1.0);
    f.aspect_ratio = Some(0.0);
    assert_eq!(f.effective_aspect(), 1.0);
    f.aspect_ratio = Some(f64::NAN);
    assert_eq!(f.effective_aspect(), 1.0);
    f.aspect_ratio = Some(2.5);
    assert_eq!(f.effective_aspect(), 2.5);
}

#[test]
fn center_is_box_midpoint() {
    let mut f = make_feature(0);
    f.width = 40.0;
    f.height = 60.0;
    assert_eq!(f.center(), Point::new(30.0, 50.0));
}

#[test]
fn contains_includes_edges() {
    let f = make_feature(0);
    assert!(f.contains(Point::new(10.0, 20.0)));
    assert!(f.contains(Point::new(110.0, 120.0)));
    assert!(f.contains(Point::new(60.0, 70.0)));
    assert!(!f.contains(Point::new(9.9, 70.0)));
    assert!(!f.contains(Point::new(60.0, 120.1)));
}

#[test]
fn css_style_lists_geometry_and_z() {
    let f = make_feature(12);
    assert_eq!(
        f.css_style(),
        "position: absolute; left: 10px; top: 20px; width: 100px; height: 100px; z-index: 12;"
    );
}

#[test]
fn css_style_positions_out_of_flow() {
    let mut f = make_feature(1);
    f.left = -4.5;
    let style = f.css_style();
    assert!(style.starts_with("position: absolute;"), "{style}");
    assert!(style.contains("left: -4.5px;"), "{style}");
}

#[test]
fn feature_serde_round_trip_keeps_fields() {
    let mut f = make_feature(3);
    f.aspect_ratio = Some(0.75);
    let json = serde_json::to_value(&f).unwrap();
    assert_eq!(json["source_path"], "static/assets/head/01.png");
    let back: PlacedFeature = serde_json::from_value(json).unwrap();
    assert_eq!(back, f);
}

// =============================================================
// PartialFeature
// =============================================================

#[test]
fn partial_serializes_only_present_fields() {
    let p = PartialFeature { left: Some(1.0), ..Default::default() };
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, r#"{"left":1.0}"#);
}

// =============================================================
// DocStore
// =============================================================

#[test]
fn store_starts_empty() {
    let store = DocStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn insert_and_get() {
    let mut store = DocStore::new();
    let f = make_feature(0);
    let id = f.id;
    store.insert(f);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&id).unwrap().source_path, "static/assets/head/01.png");
}

#[test]
fn insert_same_id_replaces_in_place() {
    let mut store = DocStore::new();
    let a = make_feature(0);
    let b = make_feature(0);
    let a_id = a.id;
    store.insert(a.clone());
    store.insert(b);
    let mut changed = a;
    changed.left = 99.0;
    store.insert(changed);
    assert_eq!(store.len(), 2);
    assert_eq!(store.iter().next().unwrap().id, a_id);
    assert_eq!(store.get(&a_id).unwrap().left, 99.0);
}

#[test]
fn remove_returns_feature_once() {
    let mut store = DocStore::new();
    let f = make_feature(0);
    let id = f.id;
    store.insert(f);
    assert!(store.remove(&id).is_some());
    assert!(store.remove(&id).is_none());
    assert!(store.is_empty());
}

#[test]
fn apply_partial_updates_only_given_fields() {
    let mut store = DocStore::new();
    let f = make_feature(0);
    let id = f.id;
    store.insert(f);
    let ok = store.apply_partial(&id, &PartialFeature { top: Some(7.0), z_index: Some(11), ..Default::default() });
    assert!(ok);
    let f = store.get(&id).unwrap();
    assert_eq!(f.left, 10.0);
    assert_eq!(f.top, 7.0);
    assert_eq!(f.z_index, 11);
}

#[test]
fn apply_partial_sets_aspect() {
    let mut store = DocStore::new();
    let f = make_feature(0);
    let id = f.id;
    store.insert(f);
    store.apply_partial(&id, &PartialFeature { aspect_ratio: Some(0.5), ..Default::default() });
    assert_eq!(store.get(&id).unwrap().aspect_ratio, Some(0.5));
}

#[test]
fn apply_partial_missing_returns_false() {
    let mut store = DocStore::new();
    assert!(!store.apply_partial(&Uuid::new_v4(), &PartialFeature::default()));
}

#[test]
fn iter_is_insertion_order() {
    let mut store = DocStore::new();
    let a = make_feature(5);
    let b = make_feature(1);
    let (a_id, b_id) = (a.id, b.id);
    store.insert(a);
    store.insert(b);
    let ids: Vec<FeatureId> = store.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![a_id, b_id]);
}

#[test]
fn sorted_features_by_z_then_insertion() {
    let mut store = DocStore::new();
    let a = make_feature(0);
    let b = make_feature(12);
    let c = make_feature(0);
    let (a_id, b_id, c_id) = (a.id, b.id, c.id);
    store.insert(a);
    store.insert(b);
    store.insert(c);
    let ids: Vec<FeatureId> = store.sorted_features().iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![a_id, c_id, b_id]);
}
