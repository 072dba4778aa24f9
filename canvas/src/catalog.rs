//! Asset catalog: the static mapping from feature category to image files.
//!
//! The catalog is authored as a JSON object whose key order is meaningful
//! (it is the order categories appear in the palette), so it is decoded with a
//! hand-written map visitor into an ordered `Vec` rather than a hash map.
//!
//! ```json
//! {
//!   "head": { "path": "static/assets/head", "files": ["01.png", "02.png"] },
//!   "hair": { "path": "static/assets/hair", "files": ["01.png"] }
//! }
//! ```

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::input::DragPayload;

/// Errors produced while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document is not valid catalog JSON.
    #[error("invalid catalog json: {0}")]
    Parse(#[from] serde_json::Error),
    /// The same category name appears twice.
    #[error("duplicate catalog category: {0}")]
    DuplicateCategory(String),
    /// A category has an empty name.
    #[error("catalog category name is empty")]
    EmptyCategoryName,
}

/// One catalog entry: where a category's images live and which files it has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    /// Base URL path of the category's images, without a trailing slash.
    pub path: String,
    /// File names in display order.
    pub files: Vec<String>,
}

/// A named category in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub spec: CategorySpec,
}

/// A single feature image available in the palette. Identity is `path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeatureAsset {
    pub category: String,
    pub file_name: String,
    pub path: String,
}

impl FeatureAsset {
    /// Build an asset from its category name, the category base path, and a file name.
    #[must_use]
    pub fn new(category: &str, base_path: &str, file_name: &str) -> Self {
        Self {
            category: category.to_owned(),
            file_name: file_name.to_owned(),
            path: format!("{}/{file_name}", base_path.trim_end_matches('/')),
        }
    }

    /// Accessible description, e.g. `"Hair feature: 03"`.
    #[must_use]
    pub fn alt_text(&self) -> String {
        format!("{} feature: {}", capitalize(&self.category), file_stem(&self.file_name))
    }

    /// Transfer data attached when this asset is dragged out of the palette.
    #[must_use]
    pub fn drag_payload(&self) -> DragPayload {
        DragPayload { source_path: self.path.clone(), alt_text: self.alt_text() }
    }
}

/// The full catalog in authored order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from ordered `(name, spec)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is empty or appears more than once.
    pub fn from_entries(entries: Vec<(String, CategorySpec)>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut categories = Vec::with_capacity(entries.len());
        for (name, spec) in entries {
            if name.trim().is_empty() {
                return Err(CatalogError::EmptyCategoryName);
            }
            if !seen.insert(name.clone()) {
                return Err(CatalogError::DuplicateCategory(name));
            }
            categories.push(Category { name, spec });
        }
        Ok(Self { categories })
    }

    /// Parse a catalog from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or violates catalog rules.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(text)?;
        Self::from_entries(raw.0)
    }

    /// Categories in catalog order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns `true` if the catalog has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for c in &self.categories {
            map.serialize_entry(&c.name, &c.spec)?;
        }
        map.end()
    }
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = CatalogError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        Self::from_entries(raw.0)
    }
}

/// Order-preserving decode target for the catalog JSON object.
struct RawCatalog(Vec<(String, CategorySpec)>);

impl<'de> Deserialize<'de> for RawCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawVisitor;

        impl<'de> Visitor<'de> for RawVisitor {
            type Value = RawCatalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category name to { path, files }")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, spec)) = access.next_entry::<String, CategorySpec>()? {
                    entries.push((name, spec));
                }
                Ok(RawCatalog(entries))
            }
        }

        deserializer.deserialize_map(RawVisitor)
    }
}

/// Uppercase the first character, leaving the rest untouched (`"eyes"` → `"Eyes"`).
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// File name up to its first `.` (`"Group 1.png"` → `"Group 1"`).
#[must_use]
pub fn file_stem(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}
