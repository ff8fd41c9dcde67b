use once_cell::sync::Lazy;
use regex::Regex;

/// Leading labels users type in front of the actual value ("TALLA M").
/// Matched case-sensitively against already uppercased text.
pub const REDUNDANT_PREFIXES: &[&str] = &[
    "MARCA ", "TALLA ", "COLOR ", "MODELO ", "TIPO ", "SIZE ", "T/", "T-", "T.",
];

/// Values meaning "no information was provided".
pub const NO_INFORMATION_VALUES: &[&str] = &[
    "SIN TALLA",
    "NO APLICA",
    "N/A",
    "NINGUNA",
    "SIN COLOR",
    "SIN MARCA",
    "NA",
    "-",
    "",
];

/// Unit contractions: a number followed by a verbose unit becomes `<number><unit>`.
/// The trigger words are disjoint, so the order of application does not matter.
static UNIT_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(\d+)\s*(?:LITROS?|LTS?)\b", "${1}L"),
        (r"(\d+)\s*(?:KILOS?|KGS?)\b", "${1}KG"),
        (r"(\d+)\s*(?:PULGADAS?|PULG\.?)\b", "${1}\""),
        (r"(\d+)\s*(?:METROS?|MTS?)\b", "${1}M"),
        (r"(\d+)\s*(?:MILIMETROS?)\b", "${1}MM"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        let regex = Regex::new(pattern).expect("unit rule pattern must compile");
        (regex, replacement)
    })
    .collect()
});

static EMBEDDED_CODES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"\s*SKU\s*\d+", r"\s*COD\.?\s*\d+"]
        .into_iter()
        .map(|pattern| Regex::new(pattern).expect("code pattern must compile"))
        .collect()
});

/// Contract verbose unit phrases into compact tokens.
///
/// `"20 LITROS"` -> `"20L"`, `"25 KGS"` -> `"25KG"`, `"7 PULGADAS"` -> `"7\""`,
/// `"6 MTS"` -> `"6M"`, `"50 MILIMETROS"` -> `"50MM"`. Each rule may fire any
/// number of times; text without units is returned unchanged.
#[must_use]
pub fn normalize_units(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, replacement) in UNIT_RULES.iter() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    out
}

/// Remove `SKU <digits>` and `COD <digits>` / `COD. <digits>` fragments
/// wherever they appear.
#[must_use]
pub fn strip_embedded_codes(text: &str) -> String {
    let mut out = text.to_string();
    for pattern in EMBEDDED_CODES.iter() {
        out = pattern.replace_all(&out, "").into_owned();
    }
    out
}

/// Remove one leading redundant prefix, if present, and trim what remains.
///
/// Only the first matching prefix is removed: `"TALLA TALLA M"` becomes
/// `"TALLA M"`.
#[must_use]
pub fn strip_redundant_prefixes(text: &str) -> &str {
    REDUNDANT_PREFIXES
        .iter()
        .find_map(|prefix| text.strip_prefix(prefix))
        .map_or(text, str::trim)
}

/// Whether an uppercased, trimmed value is one of [`NO_INFORMATION_VALUES`].
#[must_use]
pub fn is_no_information(value: &str) -> bool {
    NO_INFORMATION_VALUES.contains(&value)
}

/// Collapse whitespace runs into single spaces and trim both ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn contracts_units() {
        assert_eq!(normalize_units("20 LITROS"), "20L");
        assert_eq!(normalize_units("BIDON 5 LTS"), "BIDON 5L");
        assert_eq!(normalize_units("1 LITRO"), "1L");
        assert_eq!(normalize_units("25 KILOS"), "25KG");
        assert_eq!(normalize_units("25KGS"), "25KG");
        assert_eq!(normalize_units("7 PULGADAS"), "7\"");
        assert_eq!(normalize_units("1/2 PULGADA"), "1/2\"");
        assert_eq!(normalize_units("6 MTS"), "6M");
        assert_eq!(normalize_units("3 METROS"), "3M");
        assert_eq!(normalize_units("50 MILIMETROS"), "50MM");
    }

    #[test]
    fn unit_rules_apply_repeatedly_and_independently() {
        assert_eq!(
            normalize_units("PERFIL 50 MILIMETROS 6 METROS"),
            "PERFIL 50MM 6M"
        );
        assert_eq!(normalize_units("2 LITROS Y 3 LITROS"), "2L Y 3L");
    }

    #[test]
    fn units_require_a_word_boundary() {
        assert_eq!(normalize_units("5 LTSX"), "5 LTSX");
        assert_eq!(normalize_units("LITROS"), "LITROS");
        assert_eq!(normalize_units("20L"), "20L");
    }

    #[test]
    fn strips_codes_anywhere() {
        assert_eq!(strip_embedded_codes("GUANTE SKU 12345 NITRILO"), "GUANTE NITRILO");
        assert_eq!(strip_embedded_codes("CASCO COD. 77"), "CASCO");
        assert_eq!(strip_embedded_codes("CASCO COD 77"), "CASCO");
        assert_eq!(strip_embedded_codes("CODO 90"), "CODO 90");
    }

    #[test]
    fn strips_only_the_first_prefix() {
        assert_eq!(strip_redundant_prefixes("TALLA M"), "M");
        assert_eq!(strip_redundant_prefixes("MARCA 3M"), "3M");
        assert_eq!(strip_redundant_prefixes("T/XL"), "XL");
        assert_eq!(strip_redundant_prefixes("TALLA TALLA M"), "TALLA M");
        assert_eq!(strip_redundant_prefixes("talla m"), "talla m");
        assert_eq!(strip_redundant_prefixes("TALLAS"), "TALLAS");
    }

    #[test]
    fn recognizes_sentinels() {
        assert!(is_no_information("N/A"));
        assert!(is_no_information(""));
        assert!(is_no_information("SIN TALLA"));
        assert!(!is_no_information("n/a"));
        assert!(!is_no_information("UNICA"));
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(collapse_whitespace("  GUANTE   NITRILO \t L "), "GUANTE NITRILO L");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
