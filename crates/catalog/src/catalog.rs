use std::path::Path;
use std::sync::OnceLock;

use crate::error::{CatalogError, Result};
use crate::loader::load_categories;
use crate::model::{CategoryDefinition, CategorySummary};

const BUILTIN_CATALOG: &str = include_str!("../../../catalog/categories.toml");

/// Immutable, ordered set of category definitions.
///
/// Declaration order is significant: it is the order of [`Catalog::list`]
/// and the tie-break order used by category inference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<CategoryDefinition>,
}

impl Catalog {
    /// The bundled catalog, parsed on first use.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::from_bytes(BUILTIN_CATALOG.as_bytes()).expect("bundled catalog must be valid")
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let categories = load_categories(bytes)?;
        Ok(Self { categories })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_bytes(&bytes)?;
        log::debug!(
            "catalog: loaded {} categories from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Look up a category by id. Surrounding whitespace is ignored and an
    /// exact match wins over an ASCII case-insensitive one.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CategoryDefinition> {
        let id = id.trim();
        self.categories
            .iter()
            .find(|category| category.id() == id)
            .or_else(|| {
                self.categories
                    .iter()
                    .find(|category| category.id().eq_ignore_ascii_case(id))
            })
    }

    pub fn require(&self, id: &str) -> Result<&CategoryDefinition> {
        self.get(id).ok_or_else(|| CatalogError::UnknownCategory {
            requested: id.to_string(),
            known: self.ids().map(str::to_string).collect(),
        })
    }

    #[must_use]
    pub fn list(&self) -> Vec<CategorySummary> {
        self.categories
            .iter()
            .map(CategoryDefinition::summary)
            .collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.iter().map(CategoryDefinition::id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryDefinition> {
        self.categories.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CategoryDefinition;
    type IntoIter = std::slice::Iter<'a, CategoryDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
