//! # Standardizer Protocol
//!
//! The tool-call surface a conversational orchestrator uses to standardize
//! article names:
//!
//! | Tool | Purpose |
//! |------|---------|
//! | `infer_category` | Guess the category of a free-text description |
//! | `build_name` | Build/validate the standardized name from collected attributes |
//! | `list_categories` | Enumerate categories |
//! | `category_rules` | Field requirements and vocabularies of one category |
//!
//! Tool arguments and results are JSON. Failures that are not part of a
//! tool's normal result come back as an [`ErrorEnvelope`].
//!
//! ```rust
//! use serde_json::json;
//! use standardizer_protocol::{dispatch, Standardizer};
//!
//! let standardizer = Standardizer::builtin();
//! let result = dispatch(
//!     &standardizer,
//!     "build_name",
//!     json!({ "category_id": "EPP", "attributes": { "subtipo": "guante", "talla": "l" } }),
//! )
//! .unwrap();
//! assert_eq!(result, json!({ "valid": true, "name": "GUANTE (L)" }));
//! ```

mod dispatch;
mod envelope;
mod facade;
mod tools;

pub use dispatch::{dispatch, tool_definitions, ToolDefinition};
pub use envelope::{
    ErrorEnvelope, ToolNextAction, INTERNAL, INVALID_REQUEST, UNKNOWN_CATEGORY, UNKNOWN_TOOL,
};
pub use facade::Standardizer;
pub use tools::{
    BuildNameRequest, BuildNameResponse, CategoryRules, CategoryRulesRequest, FieldRules,
    InferCategoryRequest, ListCategoriesRequest, BUILD_NAME, CATEGORY_RULES, INFER_CATEGORY,
    LIST_CATEGORIES, TOOL_NAMES,
};
