use serde_json::json;
use test_log::test;

use super::*;

fn properties() -> ResponseSchema {
    ResponseSchema::from_iter([
        (
            "location_name".to_owned(),
            PropertyConfig::string("The name of the location we are in"),
        ),
        (
            "confidence".to_owned(),
            PropertyConfig::new("number", "How sure we are, from 0 to 1"),
        ),
    ])
}

#[test]
fn test_with_original_input_ordering() {
    let schema = with_original_input(&properties());

    assert_eq!(schema.keys().collect::<Vec<_>>(), vec![
        ORIGINAL_INPUT,
        "location_name",
        "confidence",
    ]);
    assert_eq!(
        schema.get(ORIGINAL_INPUT),
        Some(&PropertyConfig::string("The original user input"))
    );
}

#[test]
fn test_with_original_input_empty_properties() {
    let schema = with_original_input(&ResponseSchema::new());

    assert_eq!(schema.keys().collect::<Vec<_>>(), vec![ORIGINAL_INPUT]);
}

#[test]
fn test_with_original_input_reserved_name_dropped() {
    let mut properties = properties();
    properties.insert(
        ORIGINAL_INPUT.to_owned(),
        PropertyConfig::new("number", "not the real descriptor"),
    );

    let schema = with_original_input(&properties);

    assert_eq!(schema.keys().collect::<Vec<_>>(), vec![
        ORIGINAL_INPUT,
        "location_name",
        "confidence",
    ]);
    assert_eq!(
        schema.get(ORIGINAL_INPUT),
        Some(&PropertyConfig::string("The original user input"))
    );
}

#[test]
fn test_parameters_schema_requires_all_keys() {
    let schema = with_original_input(&properties());
    let value = parameters_schema(&schema);

    assert_eq!(value["type"], "object");
    assert_eq!(
        value["required"],
        json!(["original_input", "location_name", "confidence"])
    );
    assert_eq!(
        value["properties"]
            .as_object()
            .unwrap()
            .keys()
            .collect::<Vec<_>>(),
        vec!["original_input", "location_name", "confidence"]
    );
    assert_eq!(value["properties"]["location_name"], json!({
        "type": "string",
        "description": "The name of the location we are in",
    }));
}

#[test]
fn test_property_config_wire_shape() {
    let property = PropertyConfig::string("A description");

    assert_eq!(serde_json::to_value(&property).unwrap(), json!({
        "type": "string",
        "description": "A description",
    }));

    let parsed: PropertyConfig = serde_json::from_value(json!({
        "type": "string",
        "description": "A description",
    }))
    .unwrap();
    assert_eq!(parsed, property);
}
