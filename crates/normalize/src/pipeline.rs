use crate::rules::{
    collapse_whitespace, is_no_information, normalize_units, strip_embedded_codes,
    strip_redundant_prefixes,
};
use crate::sizes::normalize_size;

/// Field whose values go through size synonyms and default to [`UNSPECIFIED_SIZE`].
pub const SIZE_FIELD: &str = "talla";

/// Size recorded when the user says there is no size ("SIN TALLA", "N/A").
pub const UNSPECIFIED_SIZE: &str = "UNICA";

/// Normalize a raw attribute value for the given field.
///
/// Empty input yields an empty string. Otherwise the value is uppercased,
/// stripped of one redundant prefix, mapped through size synonyms when `field`
/// is [`SIZE_FIELD`], checked against the no-information sentinels (which
/// short-circuit to `""`, or [`UNSPECIFIED_SIZE`] for sizes), and finally has
/// units contracted, embedded codes removed and whitespace collapsed.
///
/// The pass repeats until the value is stable, so the result is a fixed point:
/// `normalize_value(&normalize_value(v, f), f) == normalize_value(v, f)`.
#[must_use]
pub fn normalize_value(value: &str, field: Option<&str>) -> String {
    if value.is_empty() {
        return String::new();
    }

    let mut current = value.to_string();
    // Each pass that changes the value shortens it or settles it on UNICA.
    loop {
        let next = normalize_pass(&current, field);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn normalize_pass(value: &str, field: Option<&str>) -> String {
    let is_size = field == Some(SIZE_FIELD);

    let upper = value.trim().to_uppercase();
    let mut cleaned = strip_redundant_prefixes(&upper).to_string();

    if is_size {
        cleaned = normalize_size(&cleaned);
    }

    if is_no_information(&cleaned) {
        return if is_size {
            UNSPECIFIED_SIZE.to_string()
        } else {
            String::new()
        };
    }

    let cleaned = normalize_units(&cleaned);
    let cleaned = strip_embedded_codes(&cleaned);
    collapse_whitespace(&cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sizes_strip_prefix_then_map() {
        assert_eq!(normalize_value("talla chica", Some("talla")), "S");
        assert_eq!(normalize_value("T/M", Some("talla")), "M");
        assert_eq!(normalize_value("l", Some("talla")), "L");
        assert_eq!(normalize_value("TALLA 42", Some("talla")), "42");
    }

    #[test]
    fn sentinels_default_sizes_and_clear_other_fields() {
        assert_eq!(normalize_value("SIN TALLA", Some("talla")), "UNICA");
        assert_eq!(normalize_value("n/a", Some("talla")), "UNICA");
        assert_eq!(normalize_value("-", Some("color")), "");
        assert_eq!(normalize_value("sin marca", Some("marca")), "");
        assert_eq!(normalize_value("NINGUNA", None), "");
    }

    #[test]
    fn sentinel_check_precedes_unit_cleanup() {
        // "NA" is a sentinel; it must not survive as text.
        assert_eq!(normalize_value("na", Some("material")), "");
    }

    #[test]
    fn full_pipeline_on_free_text() {
        assert_eq!(
            normalize_value("  marca  bidon 20 litros SKU 99812 ", Some("presentacion")),
            "BIDON 20L"
        );
        assert_eq!(normalize_value("esmeril 7 pulgadas", None), "ESMERIL 7\"");
        assert_eq!(normalize_value("nitrilo", Some("material")), "NITRILO");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(normalize_value("", Some("talla")), "");
        assert_eq!(normalize_value("", None), "");
    }

    #[test]
    fn whitespace_only_sizes_become_unica() {
        assert_eq!(normalize_value("   ", Some("talla")), "UNICA");
        assert_eq!(normalize_value("   ", Some("material")), "");
    }

    #[test]
    fn settles_values_exposed_by_code_removal() {
        assert_eq!(normalize_value("SKU 12 N/A", Some("color")), "");
        assert_eq!(normalize_value("SKU 12 MARCA 3M", Some("marca")), "3M");
        assert_eq!(normalize_value("SKU 12", Some("talla")), "UNICA");
    }
}
