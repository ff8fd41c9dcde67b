use pretty_assertions::assert_eq;
use serde_json::json;
use standardizer_protocol::{
    dispatch, tool_definitions, Standardizer, INVALID_REQUEST, TOOL_NAMES, UNKNOWN_CATEGORY,
    UNKNOWN_TOOL,
};

fn call(tool: &str, args: serde_json::Value) -> serde_json::Value {
    dispatch(&Standardizer::builtin(), tool, args).unwrap()
}

#[test]
fn every_tool_has_a_definition_with_an_object_schema() {
    let definitions = tool_definitions().unwrap();
    let names: Vec<&str> = definitions.iter().map(|definition| definition.name).collect();
    assert_eq!(names, TOOL_NAMES.to_vec());
    for definition in &definitions {
        assert!(!definition.description.is_empty());
        assert_eq!(definition.input_schema["type"], "object", "{}", definition.name);
    }
    let build = &definitions[1];
    assert!(build.input_schema["properties"]["category_id"].is_object());
    assert!(build.input_schema["properties"]["attributes"].is_object());
}

#[test]
fn infer_category_returns_snake_case_fields() {
    let result = call(
        "infer_category",
        json!({ "text": "CODO 90 DE 1/2 PULGADA INOX 304 ROSCADA" }),
    );
    assert_eq!(result["best_category"], "WOG");
    assert_eq!(result["confidence"], "ALTA");
    assert_eq!(result["matched_keywords"], json!(["CODO", "ROSCADA", "INOX 304"]));
    assert_eq!(result["alternatives"], json!([]));
}

#[test]
fn build_name_reports_valid_names() {
    let result = call(
        "build_name",
        json!({
            "category_id": "EPP",
            "attributes": { "subtipo": "guante", "material": "nitrilo", "talla": "l" }
        }),
    );
    assert_eq!(result, json!({ "valid": true, "name": "GUANTE NITRILO (L)" }));
}

#[test]
fn build_name_reads_numbers_as_text() {
    let result = call(
        "build_name",
        json!({ "category_id": "EPP", "attributes": { "subtipo": "bota", "talla": 42 } }),
    );
    assert_eq!(result["name"], "BOTA (42)");
}

#[test]
fn build_name_reports_missing_fields() {
    let result = call(
        "build_name",
        json!({ "category_id": "EPP", "attributes": { "subtipo": "guante", "talla": false } }),
    );
    assert_eq!(result["valid"], false);
    assert_eq!(result["missing_fields"], json!(["talla"]));
    assert_eq!(result["partial_name"], "GUANTE ([TALLA])");
    assert_eq!(result["errors"], json!(["missing required field 'talla'"]));
    assert_eq!(result["issues"][0]["kind"], "missing_required");
}

#[test]
fn build_name_with_unknown_category_is_a_normal_result() {
    let result = call("build_name", json!({ "category_id": "MUEBLES" }));
    assert_eq!(result["valid"], false);
    assert_eq!(result["partial_name"], "");
    assert_eq!(result["missing_fields"], json!([]));
    assert!(result["errors"][0].as_str().unwrap().contains("EPP"));
}

#[test]
fn list_categories_accepts_null_arguments() {
    let result = call("list_categories", serde_json::Value::Null);
    let categories = result.as_array().unwrap();
    assert_eq!(categories.len(), 19);
    assert_eq!(
        categories[0],
        json!({ "id": "EPP", "name": "EPP", "description": "Elementos de Protección Personal" })
    );
}

#[test]
fn category_rules_describe_fields() {
    let rules = call("category_rules", json!({ "category_id": "epp" }));
    assert_eq!(rules["id"], "EPP");
    assert_eq!(rules["format"], "{subtipo} {material} ({talla})");
    assert_eq!(rules["required_fields"], json!(["subtipo", "talla"]));
    assert_eq!(rules["fields"][1], json!({ "name": "material", "required": false, "kind": "free_text" }));
    assert!(rules["fields"][2]["allowed_values"]
        .as_array()
        .unwrap()
        .contains(&json!("UNICA")));
}

#[test]
fn category_rules_for_unknown_category_is_an_envelope() {
    let err = dispatch(
        &Standardizer::builtin(),
        "category_rules",
        json!({ "category_id": "MUEBLES" }),
    )
    .unwrap_err();
    assert_eq!(err.code, UNKNOWN_CATEGORY);
    let details = err.details.unwrap();
    assert_eq!(details["requested"], "MUEBLES");
    assert_eq!(details["known"].as_array().unwrap().len(), 19);
    assert_eq!(err.next_actions[0].tool, "list_categories");
}

#[test]
fn unknown_tool_lists_known_tools() {
    let err = dispatch(&Standardizer::builtin(), "finalize", json!({})).unwrap_err();
    assert_eq!(err.code, UNKNOWN_TOOL);
    assert_eq!(err.details.unwrap()["known_tools"], json!(TOOL_NAMES));
}

#[test]
fn malformed_arguments_are_invalid_requests() {
    let err = dispatch(&Standardizer::builtin(), "infer_category", json!({ "texto": "casco" }))
        .unwrap_err();
    assert_eq!(err.code, INVALID_REQUEST);
    assert!(err.message.contains("infer_category"), "{}", err.message);
    assert!(err.hint.is_some());

    let err = dispatch(&Standardizer::builtin(), "build_name", json!("EPP")).unwrap_err();
    assert_eq!(err.code, INVALID_REQUEST);
}

#[test]
fn standardizer_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Standardizer>();

    let standardizer = Standardizer::builtin();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let standardizer = standardizer.clone();
            std::thread::spawn(move || standardizer.infer_category("casco").best_category)
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("EPP"));
    }
}
