use crate::extensions::{model_object, Extensions};
use crate::model::property::{optional_copy, optional_map, optional_string, optional_value};
use crate::model::Schema;
use crate::reference::{referenceable, ComponentKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema and example for one media type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<Schema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    example: Option<Value>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl MediaType {
    pub fn with_schema_of(schema: Schema) -> Self {
        Self {
            schema: Some(schema),
            ..Default::default()
        }
    }

    optional_value!(schema, schema_mut, set_schema, with_schema: Schema);
    optional_value!(example, example_mut, set_example, with_example: Value);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestBody {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<IndexMap<String, MediaType>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<bool>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl RequestBody {
    optional_string!(description, set_description, with_description);
    optional_map!(
        /// Media type range (e.g. `application/json`) to its description.
        content, set_content, with_content, add_content: MediaType
    );
    optional_copy!(required, set_required, with_required: bool);

    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }
}

model_object!(MediaType, RequestBody);
referenceable!(RequestBody => ComponentKind::RequestBodies);
