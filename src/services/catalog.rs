//! Feature catalog loading.

use std::path::{Path, PathBuf};

use canvas::catalog::{Catalog, CatalogError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    /// The catalog file could not be read.
    #[error("read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    /// The file was read but is not a valid catalog.
    #[error("parse {path}: {source}")]
    Parse { path: PathBuf, source: CatalogError },
}

/// Read and validate the catalog file.
///
/// # Errors
///
/// Returns an error if the file is unreadable or malformed.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Read { path: path.to_owned(), source })?;
    let catalog = Catalog::from_json(&text).map_err(|source| CatalogLoadError::Parse { path: path.to_owned(), source })?;
    tracing::info!(path = %path.display(), categories = catalog.len(), "catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
