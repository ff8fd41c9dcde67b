//! # Standardizer Normalize
//!
//! Deterministic cleanup of the raw attribute values users type while
//! describing an article ("talla chica", "20 litros", "MARCA 3M SKU 99812").
//!
//! ## Pipeline
//!
//! ```text
//! raw value
//!     │
//!     ├──> uppercase + trim
//!     ├──> strip one redundant prefix ("TALLA ", "MARCA ", "T/", ...)
//!     ├──> size synonyms (only for the `talla` field)
//!     ├──> no-information sentinels ("N/A", "-", "SIN TALLA")  ──> "" / "UNICA"
//!     ├──> unit contraction ("20 LITROS" -> "20L")
//!     ├──> embedded code removal ("SKU 123", "COD. 45")
//!     └──> whitespace collapse
//! ```
//!
//! Every function is pure: same input, same output, no I/O.
//!
//! ## Example
//!
//! ```rust
//! use standardizer_normalize::{normalize_units, normalize_value};
//!
//! assert_eq!(normalize_value("talla chica", Some("talla")), "S");
//! assert_eq!(normalize_value("SIN TALLA", Some("talla")), "UNICA");
//! assert_eq!(normalize_units("20 LITROS"), "20L");
//! ```

mod pipeline;
mod rules;
mod sizes;

pub use pipeline::{normalize_value, SIZE_FIELD, UNSPECIFIED_SIZE};
pub use rules::{
    collapse_whitespace, is_no_information, normalize_units, strip_embedded_codes,
    strip_redundant_prefixes, NO_INFORMATION_VALUES, REDUNDANT_PREFIXES,
};
pub use sizes::normalize_size;
