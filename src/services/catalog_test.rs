use super::*;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("sketchboard-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_catalog_in_file_order() {
    let path = temp_file(
        "catalog-ok.json",
        r#"{"head": {"path": "static/assets/head", "files": ["01.png"]},
            "eyes": {"path": "static/assets/eyes", "files": ["01.png", "02.png"]}}"#,
    );
    let catalog = load_catalog(&path).unwrap();
    let names: Vec<_> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["head", "eyes"]);
    std::fs::remove_file(path).unwrap();
}

#[test]
fn missing_file_is_read_error() {
    let path = std::env::temp_dir().join("sketchboard-does-not-exist.json");
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogLoadError::Read { .. }));
}

#[test]
fn malformed_file_is_parse_error() {
    let path = temp_file("catalog-bad.json", "[1, 2, 3]");
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogLoadError::Parse { .. }));
    assert!(err.to_string().starts_with("parse "));
    std::fs::remove_file(path).unwrap();
}

#[test]
fn bundled_catalog_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/catalog.json");
    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.categories().len(), 8);
    assert_eq!(catalog.categories()[0].name, "head");
}
