use serde::{Deserialize, Serialize};
use standardizer_catalog::{Catalog, CategoryDefinition};

use crate::confidence::ConfidenceTier;

/// Runner-up categories reported next to the best match.
pub const MAX_ALTERNATIVES: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub category: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceResult {
    pub best_category: Option<String>,
    pub description: Option<String>,
    pub confidence: ConfidenceTier,
    pub score: usize,
    pub matched_keywords: Vec<String>,
    pub alternatives: Vec<Alternative>,
}

impl InferenceResult {
    #[must_use]
    pub fn none() -> Self {
        Self {
            best_category: None,
            description: None,
            confidence: ConfidenceTier::Baja,
            score: 0,
            matched_keywords: Vec::new(),
            alternatives: Vec::new(),
        }
    }
}

/// Score of one category against one text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryScore<'a> {
    pub category: &'a CategoryDefinition,
    pub score: usize,
    /// Matched keywords in the category's keyword order.
    pub matched_keywords: Vec<&'a str>,
}

/// Substring keyword matcher over a catalog.
///
/// A keyword contributes its length in characters when it occurs anywhere in
/// the uppercased text, so longer (more specific) phrases outweigh short ones.
#[derive(Clone, Copy, Debug)]
pub struct CategoryInference<'a> {
    catalog: &'a Catalog,
}

impl<'a> CategoryInference<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Every category scored against `text`, best first. Ties keep catalog
    /// order; zero-score categories are included at the end.
    #[must_use]
    pub fn rank(&self, text: &str) -> Vec<CategoryScore<'a>> {
        let upper = text.to_uppercase();
        let mut scores: Vec<CategoryScore<'a>> = self
            .catalog
            .iter()
            .map(|category| score_category(category, &upper))
            .collect();
        // `sort_by` is stable.
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores
    }

    #[must_use]
    pub fn infer(&self, text: &str) -> InferenceResult {
        let mut matches = self
            .rank(text)
            .into_iter()
            .take_while(|candidate| candidate.score > 0);

        let Some(best) = matches.next() else {
            log::debug!("inference: no keyword matched");
            return InferenceResult::none();
        };

        let alternatives: Vec<Alternative> = matches
            .take(MAX_ALTERNATIVES)
            .map(|candidate| Alternative {
                category: candidate.category.id().to_string(),
                description: candidate.category.description().to_string(),
            })
            .collect();

        let confidence = ConfidenceTier::from_score(best.score);
        log::debug!(
            "inference: best={} score={} confidence={} matched={:?} alternatives={}",
            best.category.id(),
            best.score,
            confidence,
            best.matched_keywords,
            alternatives.len()
        );

        InferenceResult {
            best_category: Some(best.category.id().to_string()),
            description: Some(best.category.description().to_string()),
            confidence,
            score: best.score,
            matched_keywords: best
                .matched_keywords
                .iter()
                .map(|keyword| (*keyword).to_string())
                .collect(),
            alternatives,
        }
    }
}

fn score_category<'a>(category: &'a CategoryDefinition, upper_text: &str) -> CategoryScore<'a> {
    let matched_keywords: Vec<&'a str> = category
        .keywords()
        .iter()
        .map(String::as_str)
        .filter(|keyword| upper_text.contains(keyword))
        .collect();
    let score = matched_keywords
        .iter()
        .map(|keyword| keyword.chars().count())
        .sum();
    CategoryScore {
        category,
        score,
        matched_keywords,
    }
}
