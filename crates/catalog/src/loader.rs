use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::model::{CategoryDefinition, FieldKind, FieldRule};
use crate::template::FormatTemplate;

pub const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    schema_version: Option<u32>,
    #[serde(default)]
    categories: Vec<RawCategory>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCategory {
    id: String,
    name: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    keywords: Vec<String>,
    format: String,
    #[serde(default)]
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawField {
    name: String,
    #[serde(default)]
    required: bool,
    kind: FieldKind,
    allowed_values: Option<Vec<String>>,
}

/// Parse a JSON or TOML catalog document and validate it.
pub(crate) fn load_categories(bytes: &[u8]) -> Result<Vec<CategoryDefinition>> {
    let raw = parse_raw(bytes)?;
    categories_from_raw(raw)
}

fn parse_raw(bytes: &[u8]) -> Result<RawCatalog> {
    let value: serde_json::Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(json_err) => {
            let utf8 = std::str::from_utf8(bytes)
                .map_err(|err| CatalogError::Parse(format!("{json_err}; {err}")))?;
            let toml_value: toml::Value = toml::from_str(utf8).map_err(|toml_err| {
                CatalogError::Parse(format!(
                    "not valid JSON ({json_err}) or TOML ({toml_err})"
                ))
            })?;
            serde_json::to_value(toml_value).map_err(|err| {
                CatalogError::Parse(format!("failed to convert TOML catalog: {err}"))
            })?
        }
    };

    serde_json::from_value(value).map_err(|err| CatalogError::Parse(err.to_string()))
}

fn categories_from_raw(raw: RawCatalog) -> Result<Vec<CategoryDefinition>> {
    if let Some(schema_version) = raw.schema_version {
        if schema_version != CATALOG_SCHEMA_VERSION {
            return Err(CatalogError::UnsupportedSchemaVersion(schema_version));
        }
    }
    if raw.categories.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    let mut categories: Vec<CategoryDefinition> = Vec::with_capacity(raw.categories.len());
    for (index, raw_category) in raw.categories.into_iter().enumerate() {
        let category = category_from_raw(index, raw_category)?;
        // Lookup falls back to case-insensitive matching, so ids must be unique
        // under that comparison too.
        if categories
            .iter()
            .any(|existing| existing.id().eq_ignore_ascii_case(category.id()))
        {
            return Err(CatalogError::DuplicateCategory(category.id().to_string()));
        }
        categories.push(category);
    }
    Ok(categories)
}

fn category_from_raw(index: usize, raw: RawCategory) -> Result<CategoryDefinition> {
    let id = raw.id.trim().to_string();
    if id.is_empty() {
        return Err(CatalogError::EmptyCategoryId { index });
    }

    let name = raw
        .name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| id.clone());

    let mut keywords = Vec::with_capacity(raw.keywords.len());
    let mut seen_keywords = HashSet::new();
    for keyword in raw.keywords {
        let keyword = keyword.trim().to_uppercase();
        if keyword.is_empty() {
            continue;
        }
        if !seen_keywords.insert(keyword.clone()) {
            return Err(CatalogError::DuplicateKeyword {
                category: id,
                keyword,
            });
        }
        keywords.push(keyword);
    }

    let format =
        FormatTemplate::parse(&raw.format).map_err(|source| CatalogError::InvalidTemplate {
            category: id.clone(),
            source,
        })?;

    let mut fields: Vec<FieldRule> = Vec::with_capacity(raw.fields.len());
    for raw_field in raw.fields {
        let field = field_from_raw(&id, raw_field)?;
        if fields.iter().any(|existing| existing.name() == field.name()) {
            return Err(CatalogError::DuplicateField {
                category: id,
                field: field.name().to_string(),
            });
        }
        fields.push(field);
    }

    for placeholder in format.placeholders() {
        if !fields.iter().any(|field| field.name() == placeholder) {
            return Err(CatalogError::PlaceholderWithoutField {
                category: id,
                placeholder: placeholder.to_string(),
            });
        }
    }
    if let Some(field) = fields
        .iter()
        .find(|field| !format.has_placeholder(field.name()))
    {
        return Err(CatalogError::FieldWithoutPlaceholder {
            category: id.clone(),
            field: field.name().to_string(),
        });
    }

    log::debug!(
        "catalog: category {id} with {} keywords and {} fields",
        keywords.len(),
        fields.len()
    );

    Ok(CategoryDefinition::new(
        id,
        name,
        raw.description.trim().to_string(),
        keywords,
        format,
        fields,
    ))
}

fn field_from_raw(category: &str, raw: RawField) -> Result<FieldRule> {
    let name = raw.name.trim().to_string();

    let allowed_values = match (raw.kind, raw.allowed_values) {
        (FieldKind::ClosedList, Some(values)) => {
            let mut allowed: Vec<String> = Vec::with_capacity(values.len());
            for value in values {
                let value = value.trim().to_uppercase();
                if !value.is_empty() && !allowed.contains(&value) {
                    allowed.push(value);
                }
            }
            if allowed.is_empty() {
                return Err(CatalogError::MissingAllowedValues {
                    category: category.to_string(),
                    field: name,
                });
            }
            allowed
        }
        (FieldKind::ClosedList, None) => {
            return Err(CatalogError::MissingAllowedValues {
                category: category.to_string(),
                field: name,
            });
        }
        (FieldKind::FreeText, Some(_)) => {
            return Err(CatalogError::UnexpectedAllowedValues {
                category: category.to_string(),
                field: name,
            });
        }
        (FieldKind::FreeText, None) => Vec::new(),
    };

    Ok(FieldRule::new(name, raw.required, raw.kind, allowed_values))
}
