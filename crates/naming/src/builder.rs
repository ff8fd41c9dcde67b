use std::collections::BTreeMap;

use standardizer_catalog::{Catalog, CategoryDefinition, FieldRule, FormatTemplate};
use standardizer_normalize::{collapse_whitespace, normalize_value};

use crate::attributes::AttributeSet;
use crate::result::{FieldIssue, ValidationResult};

/// Builds and validates standardized names against a catalog.
///
/// `build` is a pure function of its arguments and the catalog: every
/// field is checked in declaration order, all issues are collected in one
/// pass, and a partial name is always produced for invalid input.
#[derive(Clone, Copy, Debug)]
pub struct NameBuilder<'a> {
    catalog: &'a Catalog,
}

impl<'a> NameBuilder<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn build(&self, category_id: &str, attributes: &AttributeSet) -> ValidationResult {
        let Some(category) = self.catalog.get(category_id) else {
            log::debug!("naming: unknown category {category_id:?}");
            return ValidationResult::Invalid {
                issues: vec![FieldIssue::UnknownCategory {
                    requested: category_id.to_string(),
                    known: self.catalog.ids().map(str::to_string).collect(),
                }],
                missing_fields: Vec::new(),
                partial_name: String::new(),
            };
        };

        log_ignored_attributes(category, attributes);

        let mut issues = Vec::new();
        let mut missing_fields = Vec::new();
        let mut rendered: BTreeMap<&str, String> = BTreeMap::new();

        for field in category.fields() {
            let raw = attributes.get(field.name()).unwrap_or("");
            let value = if raw.is_empty() {
                String::new()
            } else {
                normalize_value(raw, Some(field.name()))
            };

            if field.required() && value.is_empty() {
                issues.push(FieldIssue::MissingRequired {
                    field: field.name().to_string(),
                });
                missing_fields.push(field.name().to_string());
                rendered.insert(field.name(), format!("[{}]", field.name().to_uppercase()));
                continue;
            }

            if !value.is_empty() && !field.allows(&value) {
                issues.push(FieldIssue::NotAllowed {
                    field: field.name().to_string(),
                    value: value.clone(),
                    allowed: field.allowed_values().to_vec(),
                });
            }
            rendered.insert(field.name(), value);
        }

        finish(
            category.id(),
            category.format(),
            category.fields(),
            &rendered,
            issues,
            missing_fields,
        )
    }
}

/// Render the collected values and decide the outcome. A name that renders
/// to nothing is never valid.
fn finish(
    category_id: &str,
    format: &FormatTemplate,
    fields: &[FieldRule],
    rendered: &BTreeMap<&str, String>,
    mut issues: Vec<FieldIssue>,
    missing_fields: Vec<String>,
) -> ValidationResult {
    let name = match format.render(|placeholder| rendered.get(placeholder).map(String::as_str)) {
        Ok(text) => collapse_whitespace(&text),
        Err(err) => {
            log::debug!("naming: {category_id} failed to render: {err}");
            issues.push(FieldIssue::Render {
                message: err.to_string(),
            });
            return ValidationResult::Invalid {
                issues,
                missing_fields,
                partial_name: String::new(),
            };
        }
    };

    if issues.is_empty() && name.is_empty() {
        issues.push(FieldIssue::EmptyName {
            fields: fields.iter().map(|field| field.name().to_string()).collect(),
        });
    }

    if issues.is_empty() {
        log::debug!("naming: {category_id} -> {name}");
        ValidationResult::Valid { name }
    } else {
        log::debug!(
            "naming: {category_id} invalid with {} issue(s), partial {name:?}",
            issues.len()
        );
        ValidationResult::Invalid {
            issues,
            missing_fields,
            partial_name: name,
        }
    }
}

fn log_ignored_attributes(category: &CategoryDefinition, attributes: &AttributeSet) {
    for field in attributes.fields() {
        if category.field(field).is_none() {
            log::debug!("naming: {} ignores attribute {field:?}", category.id());
        }
    }
}
