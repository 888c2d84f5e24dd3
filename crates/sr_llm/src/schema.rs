//! Response schemas: the caller-supplied property set, and the
//! effective schema sent to the service.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Name of the synthetic property carrying the verbatim user input.
pub const ORIGINAL_INPUT: &str = "original_input";

/// An ordered set of response properties, keyed by property name.
///
/// Insertion order is the order the properties are sent to the
/// service, and the order the `required` list is built in.
pub type ResponseSchema = IndexMap<String, PropertyConfig>;

/// A single response property, in JSON-schema terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyConfig {
    /// JSON-schema type of the property, e.g. `string`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Human-readable description, used by the model to fill in the
    /// value.
    pub description: String,
}

impl PropertyConfig {
    /// Create a new property descriptor.
    pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
        }
    }

    /// Shorthand for a `string` property.
    #[must_use]
    pub fn string(description: impl Into<String>) -> Self {
        Self::new("string", description)
    }
}

/// The descriptor attached to the synthetic [`ORIGINAL_INPUT`]
/// property.
pub(crate) fn original_input_property() -> PropertyConfig {
    PropertyConfig::string("The original user input")
}

/// Prepend the synthetic [`ORIGINAL_INPUT`] property ahead of the
/// caller's properties, preserving the caller's internal order.
///
/// A fresh map is built rather than merging into the caller's map, so
/// the synthetic key comes first no matter what. A caller entry that
/// reuses the reserved name is dropped in favor of the synthetic
/// descriptor.
#[must_use]
pub fn with_original_input(properties: &ResponseSchema) -> ResponseSchema {
    let mut schema = ResponseSchema::with_capacity(properties.len() + 1);
    schema.insert(ORIGINAL_INPUT.to_owned(), original_input_property());

    for (name, property) in properties {
        if name == ORIGINAL_INPUT {
            continue;
        }

        schema.insert(name.clone(), property.clone());
    }

    schema
}

/// Return the JSON-schema object sent to the service: an `object` with
/// the schema's properties, every one of them required, in schema
/// order.
#[must_use]
pub fn parameters_schema(schema: &ResponseSchema) -> Value {
    let required = schema.keys().cloned().collect::<Vec<_>>();
    let properties = schema
        .iter()
        .map(|(name, property)| {
            (name.clone(), json!({
                "type": property.kind,
                "description": property.description,
            }))
        })
        .collect::<Map<_, _>>();

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
