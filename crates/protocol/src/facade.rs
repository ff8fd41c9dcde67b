use std::sync::Arc;

use standardizer_catalog::{Catalog, CatalogError, CatalogSettings, CategorySummary};
use standardizer_inference::{CategoryInference, InferenceResult};
use standardizer_naming::{AttributeSet, NameBuilder, ValidationResult};

use crate::tools::CategoryRules;

/// The operations the conversation layer calls, bound to one catalog.
///
/// Cloning is cheap; clones share the catalog.
#[derive(Clone, Debug)]
pub struct Standardizer {
    catalog: Arc<Catalog>,
}

impl Standardizer {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Arc::new(Catalog::builtin().clone()))
    }

    /// Catalog from `STANDARDIZER_CATALOG_PATH`, or the bundled one.
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::from_settings(&CatalogSettings::from_env())
    }

    pub fn from_settings(settings: &CatalogSettings) -> Result<Self, CatalogError> {
        Ok(Self::new(Arc::new(settings.load()?)))
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn infer_category(&self, text: &str) -> InferenceResult {
        CategoryInference::new(&self.catalog).infer(text)
    }

    #[must_use]
    pub fn build_name(&self, category_id: &str, attributes: &AttributeSet) -> ValidationResult {
        NameBuilder::new(&self.catalog).build(category_id, attributes)
    }

    #[must_use]
    pub fn list_categories(&self) -> Vec<CategorySummary> {
        self.catalog.list()
    }

    pub fn category_rules(&self, category_id: &str) -> Result<CategoryRules, CatalogError> {
        self.catalog.require(category_id).map(CategoryRules::from)
    }
}
