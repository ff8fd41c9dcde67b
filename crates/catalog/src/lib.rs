//! # Standardizer Catalog
//!
//! The article categories known to the standardizer. Each
//! [`CategoryDefinition`] carries the keywords used for inference, a
//! [`FormatTemplate`] that fixes the word order of the standardized name, and
//! one [`FieldRule`] per template placeholder.
//!
//! Catalogs are loaded from TOML or JSON and fully validated up front: a
//! placeholder without a field, a closed list without values or an unknown
//! key is a [`CatalogError`] at load time, never a runtime surprise.
//!
//! ```rust
//! use standardizer_catalog::{Catalog, FieldKind};
//!
//! let catalog = Catalog::builtin();
//! let epp = catalog.get("epp").unwrap();
//! assert_eq!(epp.format().as_str(), "{subtipo} {material} ({talla})");
//! assert_eq!(epp.field("talla").unwrap().kind(), FieldKind::ClosedList);
//! ```

mod catalog;
mod error;
mod loader;
mod model;
mod settings;
mod template;

pub use catalog::Catalog;
pub use error::{CatalogError, Result, TemplateError};
pub use loader::CATALOG_SCHEMA_VERSION;
pub use model::{CategoryDefinition, CategorySummary, FieldKind, FieldRule};
pub use settings::{CatalogSettings, CATALOG_PATH_ENV};
pub use template::FormatTemplate;
