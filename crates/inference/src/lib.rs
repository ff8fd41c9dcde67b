//! # Standardizer Inference
//!
//! Guesses the catalog category of a free-text article description by
//! keyword matching, and reports how sure it is.
//!
//! ```rust
//! use standardizer_catalog::Catalog;
//! use standardizer_inference::{CategoryInference, ConfidenceTier};
//!
//! let inference = CategoryInference::new(Catalog::builtin());
//! let result = inference.infer("CODO 90 DE 1/2 PULGADA INOX 304 ROSCADA");
//! assert_eq!(result.best_category.as_deref(), Some("WOG"));
//! assert_eq!(result.confidence, ConfidenceTier::Alta);
//! ```

mod confidence;
mod engine;

pub use confidence::{ConfidenceTier, HIGH_CONFIDENCE_SCORE, MEDIUM_CONFIDENCE_SCORE};
pub use engine::{
    Alternative, CategoryInference, CategoryScore, InferenceResult, MAX_ALTERNATIVES,
};
