use super::*;

fn sample_palette() -> Palette {
    let catalog = Catalog::from_json(
        r#"{
            "head": { "path": "static/assets/head", "files": ["01.png", "02.png"] },
            "eyes": { "path": "static/assets/eyes", "files": ["Group 29.png"] },
            "more": { "path": "static/assets/more", "files": [] }
        }"#,
    )
    .unwrap();
    Palette::from_catalog(&catalog)
}

// =============================================================
// Construction
// =============================================================

#[test]
fn one_group_per_category_in_order() {
    let palette = sample_palette();
    let labels: Vec<&str> = palette.groups().iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, ["Head", "Eyes", "More"]);
}

#[test]
fn groups_start_collapsed() {
    let palette = sample_palette();
    assert!(palette.groups().iter().all(|g| !g.expanded));
}

#[test]
fn thumbnails_follow_file_order() {
    let palette = sample_palette();
    let head = &palette.groups()[0];
    let files: Vec<&str> = head.items.iter().map(|a| a.file_name.as_str()).collect();
    assert_eq!(files, ["01.png", "02.png"]);
    assert_eq!(head.items[1].path, "static/assets/head/02.png");
}

#[test]
fn empty_category_still_gets_a_group() {
    let palette = sample_palette();
    assert!(palette.groups()[2].items.is_empty());
}

#[test]
fn empty_catalog_gives_empty_palette() {
    let palette = Palette::from_catalog(&Catalog::default());
    assert!(palette.groups().is_empty());
}

// =============================================================
// Accordion toggle
// =============================================================

#[test]
fn toggle_expands_then_collapses() {
    let mut palette = sample_palette();
    assert_eq!(palette.toggle("eyes"), Some(true));
    assert!(palette.is_expanded("eyes"));
    assert_eq!(palette.toggle("eyes"), Some(false));
    assert!(!palette.is_expanded("eyes"));
}

#[test]
fn toggle_is_independent_per_group() {
    let mut palette = sample_palette();
    palette.toggle("head");
    palette.toggle("eyes");
    assert!(palette.is_expanded("head"));
    assert!(palette.is_expanded("eyes"));
    assert!(!palette.is_expanded("more"));

    palette.toggle("head");
    assert!(!palette.is_expanded("head"));
    assert!(palette.is_expanded("eyes"));
}

#[test]
fn toggle_unknown_category_is_noop() {
    let mut palette = sample_palette();
    let before = palette.clone();
    assert_eq!(palette.toggle("ears"), None);
    assert_eq!(palette, before);
    assert!(!palette.is_expanded("ears"));
}
