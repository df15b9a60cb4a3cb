//! Catalog export and validation commands.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use riverstone_storefront::store::{CatalogLoadError, CatalogStore, seed};

/// Errors from catalog commands.
#[derive(Debug, Error)]
pub enum CatalogCommandError {
    #[error(transparent)]
    Load(#[from] CatalogLoadError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("duplicate product id: {0}")]
    DuplicateId(String),
}

/// Write the built-in seed catalog as a pretty-printed JSON export.
pub fn export(out: &Path) -> Result<(), CatalogCommandError> {
    let products = seed::products();
    let json = serde_json::to_string_pretty(&products)?;

    std::fs::write(out, json).map_err(|source| CatalogCommandError::Write {
        path: out.display().to_string(),
        source,
    })?;

    tracing::info!(products = products.len(), path = %out.display(), "Catalog exported");
    Ok(())
}

/// Parse a static catalog file and check it for duplicate ids.
pub fn validate(file: &Path) -> Result<(), CatalogCommandError> {
    let catalog = CatalogStore::from_file(file)?;

    let mut seen = HashSet::new();
    for product in catalog.list() {
        if !seen.insert(product.id.clone()) {
            return Err(CatalogCommandError::DuplicateId(product.id.into_string()));
        }
    }

    tracing::info!(products = catalog.len(), path = %file.display(), "Catalog OK");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("riverstone-cli-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_export_then_validate_round_trips() {
        let path = temp_path("export.json");
        export(&path).expect("export");
        validate(&path).expect("exported catalog is valid");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let path = temp_path("dup.json");
        let mut products = seed::products();
        if let Some(first) = products.first().cloned() {
            products.push(first);
        }
        std::fs::write(&path, serde_json::to_string(&products).expect("serialize"))
            .expect("write");

        assert!(matches!(
            validate(&path),
            Err(CatalogCommandError::DuplicateId(_))
        ));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_validate_missing_file_fails() {
        let path = temp_path("missing.json");
        assert!(matches!(
            validate(&path),
            Err(CatalogCommandError::Load(CatalogLoadError::Io { .. }))
        ));
    }
}
