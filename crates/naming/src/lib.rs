//! # Standardizer Naming
//!
//! Turns a category id and the attributes collected so far into a
//! standardized article name, or explains exactly what is missing or wrong.
//!
//! ```rust
//! use standardizer_catalog::Catalog;
//! use standardizer_naming::{AttributeSet, NameBuilder};
//!
//! let attributes: AttributeSet = [("subtipo", "guante"), ("material", "nitrilo"), ("talla", "l")]
//!     .into_iter()
//!     .collect();
//! let result = NameBuilder::new(Catalog::builtin()).build("EPP", &attributes);
//! assert_eq!(result.name(), Some("GUANTE NITRILO (L)"));
//! ```

mod attributes;
mod builder;
mod result;

pub use attributes::AttributeSet;
pub use builder::NameBuilder;
pub use result::{FieldIssue, ValidationResult};
