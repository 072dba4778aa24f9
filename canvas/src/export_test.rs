use super::*;
use crate::doc::PlacedFeature;
use image::Rgba;

// =============================================================
// Helpers
// =============================================================

fn solid_png(w: u32, h: u32, color: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(w, h, Rgba(color));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png).unwrap();
    buf
}

fn layer(path: &str, left: f64, top: f64, w: f64, h: f64) -> ExportLayer {
    ExportLayer { source_path: path.into(), left, top, width: w, height: h }
}

fn assets(entries: &[(&str, Vec<u8>)]) -> HashMap<String, Vec<u8>> {
    entries.iter().map(|(k, v)| ((*k).to_owned(), v.clone())).collect()
}

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

// =============================================================
// ExportPlan
// =============================================================

#[test]
fn plan_follows_paint_order() {
    let mut doc = DocStore::new();
    let mut top = PlacedFeature::new("top.png", "T", 0.0, 0.0);
    top.z_index = 11;
    let bottom = PlacedFeature::new("bottom.png", "B", 5.0, 5.0);
    doc.insert(top);
    doc.insert(bottom);

    let plan = ExportPlan::from_doc(&doc, &Viewport::new(40.0, 40.0, 300.0, 200.0));
    assert_eq!(plan.width, 300);
    assert_eq!(plan.height, 200);
    let paths: Vec<&str> = plan.layers.iter().map(|l| l.source_path.as_str()).collect();
    assert_eq!(paths, ["bottom.png", "top.png"]);
}

#[test]
fn plan_sources_are_distinct() {
    let plan = ExportPlan {
        width: 10,
        height: 10,
        layers: vec![layer("a.png", 0.0, 0.0, 1.0, 1.0), layer("b.png", 0.0, 0.0, 1.0, 1.0), layer("a.png", 0.0, 0.0, 1.0, 1.0)],
    };
    assert_eq!(plan.sources(), ["a.png", "b.png"]);
}

// =============================================================
// flatten
// =============================================================

#[test]
fn empty_plan_is_transparent_canvas() {
    let plan = ExportPlan { width: 8, height: 6, layers: vec![] };
    let img = flatten(&plan, &HashMap::new()).unwrap();
    assert_eq!(img.dimensions(), (8, 6));
    assert!(img.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn zero_sized_canvas_is_an_error() {
    let plan = ExportPlan { width: 0, height: 10, layers: vec![] };
    assert!(matches!(flatten(&plan, &HashMap::new()), Err(ExportError::EmptyCanvas)));
}

#[test]
fn layer_lands_at_its_box() {
    let plan = ExportPlan { width: 10, height: 10, layers: vec![layer("r.png", 2.0, 3.0, 4.0, 4.0)] };
    let img = flatten(&plan, &assets(&[("r.png", solid_png(4, 4, RED))])).unwrap();
    assert_eq!(img.get_pixel(2, 3).0, RED);
    assert_eq!(img.get_pixel(5, 6).0, RED);
    assert_eq!(img.get_pixel(1, 3).0[3], 0);
    assert_eq!(img.get_pixel(6, 6).0[3], 0);
}

#[test]
fn layer_is_scaled_to_box() {
    let plan = ExportPlan { width: 20, height: 20, layers: vec![layer("r.png", 0.0, 0.0, 10.0, 5.0)] };
    let img = flatten(&plan, &assets(&[("r.png", solid_png(2, 2, RED))])).unwrap();
    assert_eq!(img.get_pixel(9, 4).0[3], 255);
    assert_eq!(img.get_pixel(10, 4).0[3], 0);
    assert_eq!(img.get_pixel(9, 5).0[3], 0);
}

#[test]
fn later_layers_paint_over_earlier() {
    let plan = ExportPlan {
        width: 10,
        height: 10,
        layers: vec![layer("r.png", 0.0, 0.0, 6.0, 6.0), layer("b.png", 3.0, 3.0, 6.0, 6.0)],
    };
    let img = flatten(&plan, &assets(&[("r.png", solid_png(6, 6, RED)), ("b.png", solid_png(6, 6, BLUE))])).unwrap();
    assert_eq!(img.get_pixel(1, 1).0, RED);
    assert_eq!(img.get_pixel(4, 4).0, BLUE);
}

#[test]
fn pixels_outside_canvas_are_clipped() {
    let plan = ExportPlan { width: 4, height: 4, layers: vec![layer("r.png", -2.0, -2.0, 4.0, 4.0)] };
    let img = flatten(&plan, &assets(&[("r.png", solid_png(4, 4, RED))])).unwrap();
    assert_eq!(img.dimensions(), (4, 4));
    assert_eq!(img.get_pixel(0, 0).0, RED);
    assert_eq!(img.get_pixel(1, 1).0, RED);
    assert_eq!(img.get_pixel(2, 2).0[3], 0);
}

#[test]
fn missing_asset_is_reported() {
    let plan = ExportPlan { width: 4, height: 4, layers: vec![layer("gone.png", 0.0, 0.0, 2.0, 2.0)] };
    let err = flatten(&plan, &HashMap::new()).unwrap_err();
    assert!(matches!(err, ExportError::MissingAsset(ref p) if p == "gone.png"));
}

#[test]
fn undecodable_asset_is_reported() {
    let plan = ExportPlan { width: 4, height: 4, layers: vec![layer("bad.png", 0.0, 0.0, 2.0, 2.0)] };
    let err = flatten(&plan, &assets(&[("bad.png", b"not an image".to_vec())])).unwrap_err();
    assert!(matches!(err, ExportError::Decode { ref path, .. } if path == "bad.png"));
}

#[test]
fn zero_sized_layer_is_skipped() {
    let plan = ExportPlan { width: 4, height: 4, layers: vec![layer("none.png", 0.0, 0.0, 0.0, 3.0)] };
    let img = flatten(&plan, &HashMap::new()).unwrap();
    assert!(img.pixels().all(|p| p.0[3] == 0));
}

// =============================================================
// Encoding
// =============================================================

#[test]
fn encode_png_round_trips_dimensions() {
    let img = RgbaImage::from_pixel(7, 3, Rgba(RED));
    let png = encode_png(&img).unwrap();
    let back = image::load_from_memory(&png).unwrap();
    assert_eq!((back.width(), back.height()), (7, 3));
}

#[test]
fn data_uri_has_png_prefix() {
    let uri = png_data_uri(&[1, 2, 3]);
    assert_eq!(uri, "data:image/png;base64,AQID");
}

#[test]
fn export_data_uri_produces_png() {
    let plan = ExportPlan { width: 5, height: 5, layers: vec![layer("r.png", 1.0, 1.0, 2.0, 2.0)] };
    let uri = export_data_uri(&plan, &assets(&[("r.png", solid_png(2, 2, RED))])).unwrap();
    assert!(uri.starts_with("data:image/png;base64,iVBORw0KGgo"));
}
