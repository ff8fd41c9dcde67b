/// Map a size written in any of its common spellings to the standard token.
///
/// The input is uppercased and trimmed first; values without a known synonym
/// are returned in that cleaned form.
#[must_use]
pub fn normalize_size(value: &str) -> String {
    let cleaned = value.trim().to_uppercase();
    match standard_size(&cleaned) {
        Some(standard) => standard.to_string(),
        None => cleaned,
    }
}

fn standard_size(value: &str) -> Option<&'static str> {
    let standard = match value {
        "SMALL" | "CHICA" | "CHICO" | "T/S" | "T-S" | "TS" => "S",
        "MEDIUM" | "MEDIANA" | "MEDIANO" | "T/M" | "T-M" | "TM" => "M",
        "LARGE" | "GRANDE" | "T/L" | "T-L" | "TL" => "L",
        "EXTRA LARGE" | "EXTRA GRANDE" | "T/XL" | "T-XL" | "TXL" => "XL",
        "XXLARGE" => "XXL",
        "XXXLARGE" => "XXXL",
        _ => return None,
    };
    Some(standard)
}
