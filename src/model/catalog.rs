//! The in-memory catalog and catalog file loading.

use super::{Product, ProductId};
use crate::error::{CatalogError, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Immutable, ordered product collection keyed by id.
///
/// Catalog order is the order products appear in the source document and is
/// what every filtered view preserves.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: IndexMap<ProductId, Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and blank titles.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Result<Self> {
        let mut map = IndexMap::new();
        for product in products {
            if product.title.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: product.id,
                    field: "title",
                });
            }
            let id = product.id;
            if map.insert(id, product).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
        }
        Ok(Self { products: map })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id in the full catalog.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Product at a catalog position.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Product> {
        self.products.get_index(index).map(|(_, p)| p)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

// ============================================================================
// Catalog documents
// ============================================================================

/// Serialization format of a catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Pick a format from the file extension, falling back to content sniffing.
    #[must_use]
    pub fn detect(path: Option<&Path>, content: &str) -> Self {
        let by_ext = path
            .and_then(Path::extension)
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match by_ext.as_deref() {
            Some("json") => Self::Json,
            Some("yaml" | "yml") => Self::Yaml,
            _ => {
                let trimmed = content.trim_start();
                if trimmed.starts_with('[') || trimmed.starts_with('{') {
                    Self::Json
                } else {
                    Self::Yaml
                }
            }
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Accepted top-level shapes: a bare array or `{ products: [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

impl CatalogDocument {
    fn into_products(self) -> Vec<Product> {
        match self {
            Self::List(products) | Self::Wrapped { products } => products,
        }
    }
}

/// Parse a catalog from an in-memory document.
pub fn parse_catalog_str(content: &str, format: CatalogFormat) -> Result<Catalog> {
    let doc: CatalogDocument = match format {
        CatalogFormat::Json => serde_json::from_str(content)
            .map_err(|e| CatalogError::parse("catalog JSON", e))?,
        CatalogFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| CatalogError::parse("catalog YAML", e))?,
    };
    Catalog::from_products(doc.into_products())
}

/// Read and parse a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let format = CatalogFormat::detect(Some(path), &content);
    tracing::debug!(path = %path.display(), format = format.name(), "parsing catalog");
    let catalog = parse_catalog_str(&content, format).map_err(|e| match e {
        CatalogError::Parse { source, .. } => {
            CatalogError::parse(format!("at {}", path.display()), source)
        }
        other => other,
    })?;
    tracing::info!(products = catalog.len(), "loaded catalog from {}", path.display());
    Ok(catalog)
}
