use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use standardizer_catalog::CatalogError;

use crate::envelope::{ErrorEnvelope, ToolNextAction, UNKNOWN_CATEGORY, UNKNOWN_TOOL};
use crate::facade::Standardizer;
use crate::tools::{
    BuildNameRequest, BuildNameResponse, CategoryRulesRequest, InferCategoryRequest,
    ListCategoriesRequest, BUILD_NAME, CATEGORY_RULES, INFER_CATEGORY, LIST_CATEGORIES,
    TOOL_NAMES,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

pub fn tool_definitions() -> Result<Vec<ToolDefinition>> {
    Ok(vec![
        definition::<InferCategoryRequest>(
            INFER_CATEGORY,
            "Infer the most likely article category from a free-text description. \
             Returns best_category, confidence (ALTA/MEDIA/BAJA), matched_keywords and up to two alternatives.",
        )?,
        definition::<BuildNameRequest>(
            BUILD_NAME,
            "Build and validate the standardized name for a category from the attributes collected so far. \
             Invalid results list errors, missing_fields and a partial_name with [FIELD] markers.",
        )?,
        definition::<ListCategoriesRequest>(
            LIST_CATEGORIES,
            "List every article category with its id, name and description.",
        )?,
        definition::<CategoryRulesRequest>(
            CATEGORY_RULES,
            "Show a category's name format and, for each field, whether it is required and its allowed values.",
        )?,
    ])
}

fn definition<T: JsonSchema>(
    name: &'static str,
    description: &'static str,
) -> Result<ToolDefinition> {
    let schema = schemars::schema_for!(T);
    let input_schema = serde_json::to_value(&schema)
        .with_context(|| format!("Failed to serialize input schema for {name}"))?;
    Ok(ToolDefinition {
        name,
        description,
        input_schema,
    })
}

/// Run one tool call. `args` may be `null` for tools without arguments.
pub fn dispatch(
    standardizer: &Standardizer,
    tool: &str,
    args: Value,
) -> std::result::Result<Value, ErrorEnvelope> {
    log::debug!("dispatch: {tool}");
    match tool {
        INFER_CATEGORY => {
            let request: InferCategoryRequest = parse_args(tool, args)?;
            respond(&standardizer.infer_category(&request.text))
        }
        BUILD_NAME => {
            let request: BuildNameRequest = parse_args(tool, args)?;
            let result = standardizer.build_name(&request.category_id, &request.attribute_set());
            respond(&BuildNameResponse::from(&result))
        }
        LIST_CATEGORIES => {
            let _: ListCategoriesRequest = parse_args(tool, args)?;
            respond(&standardizer.list_categories())
        }
        CATEGORY_RULES => {
            let request: CategoryRulesRequest = parse_args(tool, args)?;
            match standardizer.category_rules(&request.category_id) {
                Ok(rules) => respond(&rules),
                Err(CatalogError::UnknownCategory { requested, known }) => {
                    Err(unknown_category(&requested, &known))
                }
                Err(err) => Err(ErrorEnvelope::internal(err.to_string())),
            }
        }
        _ => Err(ErrorEnvelope::new(UNKNOWN_TOOL, format!("Unknown tool '{tool}'"))
            .with_details(json!({ "known_tools": TOOL_NAMES }))),
    }
}

fn parse_args<T: DeserializeOwned>(
    tool: &str,
    args: Value,
) -> std::result::Result<T, ErrorEnvelope> {
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(|err| {
        ErrorEnvelope::invalid_request(format!("Invalid arguments for {tool}: {err}"))
            .with_hint("See tool_definitions() for the expected input schema")
    })
}

fn respond<T: Serialize>(value: &T) -> std::result::Result<Value, ErrorEnvelope> {
    serde_json::to_value(value)
        .context("Failed to serialize tool result")
        .map_err(|err| ErrorEnvelope::internal(format!("{err:#}")))
}

fn unknown_category(requested: &str, known: &[String]) -> ErrorEnvelope {
    ErrorEnvelope::new(
        UNKNOWN_CATEGORY,
        format!("Unknown category '{requested}'"),
    )
    .with_details(json!({ "requested": requested, "known": known }))
    .with_hint("Use one of the known category ids, or call infer_category with the article description")
    .with_next_action(ToolNextAction {
        tool: LIST_CATEGORIES.to_string(),
        args: json!({}),
        reason: "List valid category ids with descriptions".to_string(),
    })
}
