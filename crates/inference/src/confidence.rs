use std::fmt;

use serde::{Deserialize, Serialize};

/// Scores strictly above this are [`ConfidenceTier::Alta`].
pub const HIGH_CONFIDENCE_SCORE: usize = 15;
/// Scores strictly above this (and not high) are [`ConfidenceTier::Media`].
pub const MEDIUM_CONFIDENCE_SCORE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceTier {
    #[serde(rename = "ALTA")]
    Alta,
    #[serde(rename = "MEDIA")]
    Media,
    #[serde(rename = "BAJA")]
    Baja,
}

impl ConfidenceTier {
    #[must_use]
    pub const fn from_score(score: usize) -> Self {
        if score > HIGH_CONFIDENCE_SCORE {
            Self::Alta
        } else if score > MEDIUM_CONFIDENCE_SCORE {
            Self::Media
        } else {
            Self::Baja
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alta => "ALTA",
            Self::Media => "MEDIA",
            Self::Baja => "BAJA",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(ConfidenceTier::from_score(0), ConfidenceTier::Baja);
        assert_eq!(ConfidenceTier::from_score(8), ConfidenceTier::Baja);
        assert_eq!(ConfidenceTier::from_score(9), ConfidenceTier::Media);
        assert_eq!(ConfidenceTier::from_score(15), ConfidenceTier::Media);
        assert_eq!(ConfidenceTier::from_score(16), ConfidenceTier::Alta);
    }

    #[test]
    fn wire_names_are_spanish_uppercase() {
        assert_eq!(ConfidenceTier::Media.to_string(), "MEDIA");
        assert_eq!(
            serde_json::to_string(&ConfidenceTier::Alta).unwrap(),
            "\"ALTA\""
        );
    }
}
