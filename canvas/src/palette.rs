//! Palette model: one collapsible group of draggable thumbnails per catalog category.
//!
//! Groups start collapsed and toggle independently; any number may be open at
//! once. Nothing here is persisted.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::catalog::{Catalog, FeatureAsset, capitalize};

/// A palette section for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteGroup {
    /// Catalog category name (e.g. `"eyes"`).
    pub category: String,
    /// Header label (e.g. `"Eyes"`).
    pub label: String,
    /// Whether the thumbnail grid is visible.
    pub expanded: bool,
    /// Thumbnails in catalog order.
    pub items: Vec<FeatureAsset>,
}

/// The full palette.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    groups: Vec<PaletteGroup>,
}

impl Palette {
    /// Build the palette from the catalog, all groups collapsed.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let groups = catalog
            .categories()
            .iter()
            .map(|c| PaletteGroup {
                category: c.name.clone(),
                label: capitalize(&c.name),
                expanded: false,
                items: c
                    .spec
                    .files
                    .iter()
                    .map(|f| FeatureAsset::new(&c.name, &c.spec.path, f))
                    .collect(),
            })
            .collect();
        Self { groups }
    }

    /// Flip one group between expanded and collapsed.
    ///
    /// Returns the new state, or `None` when the category is unknown.
    pub fn toggle(&mut self, category: &str) -> Option<bool> {
        let group = self.groups.iter_mut().find(|g| g.category == category)?;
        group.expanded = !group.expanded;
        Some(group.expanded)
    }

    /// Whether the named group is expanded. Unknown categories read as collapsed.
    #[must_use]
    pub fn is_expanded(&self, category: &str) -> bool {
        self.groups
            .iter()
            .any(|g| g.category == category && g.expanded)
    }

    /// Groups in catalog order.
    #[must_use]
    pub fn groups(&self) -> &[PaletteGroup] {
        &self.groups
    }
}
