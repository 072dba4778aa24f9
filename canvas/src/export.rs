//! Export: flatten the placed features into a single transparent PNG.
//!
//! The host fetches the bytes of every image the plan references, then calls
//! [`flatten`] synchronously. Layers are composited in paint order over a
//! fully transparent buffer the size of the canvas; anything outside the
//! canvas is clipped.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use std::collections::HashMap;
use std::io::Cursor;

use base64::Engine as _;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::doc::DocStore;
use crate::viewport::Viewport;

/// Errors produced while rasterizing the canvas.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The canvas has not been measured, so there is nothing to draw into.
    #[error("canvas has no size to export")]
    EmptyCanvas,
    /// The bytes for a referenced image were not supplied.
    #[error("feature image not loaded: {0}")]
    MissingAsset(String),
    /// A feature image could not be decoded.
    #[error("could not decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
    /// The flattened image could not be encoded.
    #[error("could not encode png: {0}")]
    Encode(#[source] image::ImageError),
}

/// One feature to draw, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportLayer {
    pub source_path: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything needed to rasterize the canvas, captured after deselection.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPlan {
    pub width: u32,
    pub height: u32,
    /// Layers in paint order (bottom first).
    pub layers: Vec<ExportLayer>,
}

impl ExportPlan {
    /// Snapshot the document in paint order at the viewport's size.
    #[must_use]
    pub fn from_doc(doc: &DocStore, viewport: &Viewport) -> Self {
        let layers = doc
            .sorted_features()
            .into_iter()
            .map(|f| ExportLayer {
                source_path: f.source_path.clone(),
                left: f.left,
                top: f.top,
                width: f.width,
                height: f.height,
            })
            .collect();
        Self { width: to_px(viewport.width), height: to_px(viewport.height), layers }
    }

    /// Distinct image paths referenced by the plan, in first-use order.
    #[must_use]
    pub fn sources(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for layer in &self.layers {
            if !out.contains(&layer.source_path.as_str()) {
                out.push(&layer.source_path);
            }
        }
        out
    }
}

/// Composite every layer of `plan` using the supplied image bytes, keyed by source path.
///
/// # Errors
///
/// Returns [`ExportError::EmptyCanvas`] for a zero-sized plan,
/// [`ExportError::MissingAsset`] when a layer's bytes are absent, and
/// [`ExportError::Decode`] when they are not a readable image.
pub fn flatten(plan: &ExportPlan, assets: &HashMap<String, Vec<u8>>) -> Result<RgbaImage, ExportError> {
    if plan.width == 0 || plan.height == 0 {
        return Err(ExportError::EmptyCanvas);
    }

    let mut decoded: HashMap<&str, DynamicImage> = HashMap::new();
    let mut canvas = RgbaImage::new(plan.width, plan.height);

    for layer in &plan.layers {
        let (w, h) = (to_px(layer.width), to_px(layer.height));
        if w == 0 || h == 0 {
            log::debug!("export: skipping zero-sized layer {}", layer.source_path);
            continue;
        }
        let path = layer.source_path.as_str();
        if !decoded.contains_key(path) {
            let bytes = assets
                .get(path)
                .ok_or_else(|| ExportError::MissingAsset(path.to_owned()))?;
            let img = image::load_from_memory(bytes)
                .map_err(|source| ExportError::Decode { path: path.to_owned(), source })?;
            decoded.insert(path, img);
        }
        let Some(src) = decoded.get(path) else {
            continue;
        };
        let scaled = imageops::resize(src, w, h, FilterType::Triangle);
        imageops::overlay(&mut canvas, &scaled, to_offset(layer.left), to_offset(layer.top));
    }

    log::debug!("export: flattened {} layers into {}x{}", plan.layers.len(), plan.width, plan.height);
    Ok(canvas)
}

/// Encode a flattened image as PNG bytes.
///
/// # Errors
///
/// Returns [`ExportError::Encode`] if the encoder fails.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(ExportError::Encode)?;
    Ok(buf)
}

/// Wrap PNG bytes in a `data:` URI suitable for a download link.
#[must_use]
pub fn png_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", base64::engine::general_purpose::STANDARD.encode(png))
}

/// Flatten, encode, and wrap in one step.
///
/// # Errors
///
/// Propagates any error from [`flatten`] or [`encode_png`].
pub fn export_data_uri(plan: &ExportPlan, assets: &HashMap<String, Vec<u8>>) -> Result<String, ExportError> {
    let img = flatten(plan, assets)?;
    let png = encode_png(&img)?;
    Ok(png_data_uri(&png))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_px(v: f64) -> u32 {
    if !v.is_finite() {
        return 0;
    }
    v.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[allow(clippy::cast_possible_truncation)]
fn to_offset(v: f64) -> i64 {
    if !v.is_finite() {
        return 0;
    }
    v.round() as i64
}
