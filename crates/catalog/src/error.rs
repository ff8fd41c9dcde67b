use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Problems found while parsing or rendering a `format` template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unterminated '{{...}}' placeholder")]
    Unterminated,

    #[error("nested '{{' inside placeholder")]
    NestedBrace,

    #[error("stray '}}' (use '}}}}' for a literal brace)")]
    StrayClosingBrace,

    #[error("empty placeholder '{{}}'")]
    EmptyPlaceholder,

    #[error("no value bound for placeholder '{{{0}}}'")]
    UnboundPlaceholder(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog parse error: {0}")]
    Parse(String),

    #[error("catalog schema_version {0} is not supported (expected 1)")]
    UnsupportedSchemaVersion(u32),

    #[error("catalog declares no categories")]
    EmptyCatalog,

    #[error("category #{index} has an empty id")]
    EmptyCategoryId { index: usize },

    #[error("category '{0}' is declared more than once")]
    DuplicateCategory(String),

    #[error("category '{category}' declares field '{field}' more than once")]
    DuplicateField { category: String, field: String },

    #[error("category '{category}' lists keyword '{keyword}' more than once")]
    DuplicateKeyword { category: String, keyword: String },

    #[error("category '{category}' has an invalid format: {source}")]
    InvalidTemplate {
        category: String,
        #[source]
        source: TemplateError,
    },

    #[error("category '{category}' format uses '{{{placeholder}}}' but declares no such field")]
    PlaceholderWithoutField {
        category: String,
        placeholder: String,
    },

    #[error("category '{category}' field '{field}' does not appear in the format")]
    FieldWithoutPlaceholder { category: String, field: String },

    #[error("category '{category}' field '{field}' is a closed list without allowed_values")]
    MissingAllowedValues { category: String, field: String },

    #[error("category '{category}' field '{field}' is free text but lists allowed_values")]
    UnexpectedAllowedValues { category: String, field: String },

    #[error("unknown category '{requested}'. Known categories: {}", known.join(", "))]
    UnknownCategory {
        requested: String,
        known: Vec<String>,
    },
}
