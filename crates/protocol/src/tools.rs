use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use standardizer_catalog::{CategoryDefinition, FieldKind};
use standardizer_naming::{AttributeSet, FieldIssue, ValidationResult};

pub const INFER_CATEGORY: &str = "infer_category";
pub const BUILD_NAME: &str = "build_name";
pub const LIST_CATEGORIES: &str = "list_categories";
pub const CATEGORY_RULES: &str = "category_rules";

/// Every tool name, in the order [`crate::tool_definitions`] lists them.
pub const TOOL_NAMES: [&str; 4] = [INFER_CATEGORY, BUILD_NAME, LIST_CATEGORIES, CATEGORY_RULES];

// ============================================================================
// Tool Input Schemas
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct InferCategoryRequest {
    /// Free-text article description
    #[schemars(description = "Free-text description of the article, e.g. 'guante de nitrilo talla L'")]
    pub text: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct BuildNameRequest {
    #[schemars(description = "Category id, e.g. EPP or WOG")]
    pub category_id: String,

    /// Field name -> value collected so far
    #[schemars(
        description = "Attributes collected so far, keyed by field name. Numbers are read as text; other non-string values count as empty."
    )]
    #[serde(default)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl BuildNameRequest {
    #[must_use]
    pub fn attribute_set(&self) -> AttributeSet {
        self.attributes
            .iter()
            .map(|(field, value)| (field.as_str(), attribute_text(value)))
            .collect()
    }
}

fn attribute_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Number(number) => number.to_string(),
        serde_json::Value::Null
        | serde_json::Value::Bool(_)
        | serde_json::Value::Array(_)
        | serde_json::Value::Object(_) => String::new(),
    }
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListCategoriesRequest {}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CategoryRulesRequest {
    #[schemars(description = "Category id, e.g. EPP or WOG")]
    pub category_id: String,
}

// ============================================================================
// Tool Outputs
// ============================================================================

/// Wire form of a [`ValidationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildNameResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<FieldIssue>>,
}

impl From<&ValidationResult> for BuildNameResponse {
    fn from(result: &ValidationResult) -> Self {
        match result {
            ValidationResult::Valid { name } => Self {
                valid: true,
                name: Some(name.clone()),
                errors: None,
                missing_fields: None,
                partial_name: None,
                issues: None,
            },
            ValidationResult::Invalid {
                issues,
                missing_fields,
                partial_name,
            } => Self {
                valid: false,
                name: None,
                errors: Some(result.errors()),
                missing_fields: Some(missing_fields.clone()),
                partial_name: Some(partial_name.clone()),
                issues: Some(issues.clone()),
            },
        }
    }
}

/// What the caller needs to know to ask for the next field of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRules {
    pub id: String,
    pub name: String,
    pub description: String,
    pub format: String,
    pub fields: Vec<FieldRules>,
    /// Required field names in declaration order.
    pub required_fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRules {
    pub name: String,
    pub required: bool,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<String>,
}

impl From<&CategoryDefinition> for CategoryRules {
    fn from(category: &CategoryDefinition) -> Self {
        Self {
            id: category.id().to_string(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            format: category.format().to_string(),
            fields: category
                .fields()
                .iter()
                .map(|field| FieldRules {
                    name: field.name().to_string(),
                    required: field.required(),
                    kind: field.kind(),
                    allowed_values: field.allowed_values().to_vec(),
                })
                .collect(),
            required_fields: category
                .required_fields()
                .map(|field| field.name().to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn json_attribute_values_become_text() {
        let request: BuildNameRequest = serde_json::from_value(json!({
            "category_id": "EPP",
            "attributes": {
                "talla": 42,
                "peso": 1.5,
                "subtipo": "bota",
                "material": null,
                "color": true,
                "extra": ["a"],
            }
        }))
        .unwrap();

        let attributes = request.attribute_set();
        assert_eq!(attributes.get("talla"), Some("42"));
        assert_eq!(attributes.get("peso"), Some("1.5"));
        assert_eq!(attributes.get("subtipo"), Some("bota"));
        assert_eq!(attributes.get("material"), Some(""));
        assert_eq!(attributes.get("color"), Some(""));
        assert_eq!(attributes.get("extra"), Some(""));
    }

    #[test]
    fn attributes_default_to_empty() {
        let request: BuildNameRequest =
            serde_json::from_value(json!({ "category_id": "EPP" })).unwrap();
        assert!(request.attribute_set().is_empty());
    }

    #[test]
    fn valid_response_carries_only_the_name() {
        let response = BuildNameResponse::from(&ValidationResult::Valid {
            name: "CASCO (UNICA)".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "valid": true, "name": "CASCO (UNICA)" })
        );
    }
}
