use crate::extensions::{model_object, Extensions};
use crate::model::ExternalDocumentation;
use crate::model::property::{
    optional_boxed, optional_copy, optional_list, optional_map, optional_string, optional_value,
};
use crate::reference::{referenceable, ComponentKind};
use crate::types::primitive::SchemaType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Either a boolean or a schema, as allowed for `additionalProperties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Boolean(bool),
    Schema(Box<Schema>),
}

impl From<bool> for AdditionalProperties {
    fn from(allowed: bool) -> Self {
        AdditionalProperties::Boolean(allowed)
    }
}

impl From<Schema> for AdditionalProperties {
    fn from(schema: Schema) -> Self {
        AdditionalProperties::Schema(Box::new(schema))
    }
}

/// The OpenAPI 3.0 schema object: a subset of JSON schema with a few
/// OpenAPI specific keywords (`nullable`, `readOnly`, `writeOnly`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    reference: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    schema_type: Option<SchemaType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    default_value: Option<Value>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    enumeration: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    nullable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    read_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    write_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    deprecated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<IndexMap<String, Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    additional_properties: Option<AdditionalProperties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Box<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    all_of: Option<Vec<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    any_of: Option<Vec<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    one_of: Option<Vec<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    not: Option<Box<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    multiple_of: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    maximum: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    exclusive_maximum: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    minimum: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    exclusive_minimum: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    max_length: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    min_length: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    max_items: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    min_items: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    unique_items: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    max_properties: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    min_properties: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    external_docs: Option<ExternalDocumentation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    example: Option<Value>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Default::default()
        }
    }

    /// An array schema whose elements match `items`.
    pub fn array_of(items: Schema) -> Self {
        Self {
            schema_type: Some(SchemaType::Array),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    optional_copy!(
        /// The `type` keyword.
        schema_type, set_schema_type, with_schema_type: SchemaType
    );
    optional_string!(format, set_format, with_format);
    optional_string!(title, set_title, with_title);
    optional_string!(description, set_description, with_description);
    optional_value!(
        /// The `default` keyword.
        default_value, default_value_mut, set_default_value, with_default_value: Value
    );
    optional_list!(
        /// The `enum` keyword.
        enumeration, set_enumeration, with_enumeration, add_enumeration: Value
    );
    optional_copy!(nullable, set_nullable, with_nullable: bool);
    optional_copy!(read_only, set_read_only, with_read_only: bool);
    optional_copy!(write_only, set_write_only, with_write_only: bool);
    optional_copy!(deprecated, set_deprecated, with_deprecated: bool);
    optional_list!(required, set_required, with_required, add_required: String);
    optional_map!(properties, set_properties, with_properties, add_property: Schema);
    optional_value!(
        additional_properties,
        additional_properties_mut,
        set_additional_properties,
        with_additional_properties: AdditionalProperties
    );
    optional_boxed!(items, set_items, with_items: Schema);
    optional_list!(all_of, set_all_of, with_all_of, add_all_of: Schema);
    optional_list!(any_of, set_any_of, with_any_of, add_any_of: Schema);
    optional_list!(one_of, set_one_of, with_one_of, add_one_of: Schema);
    optional_boxed!(not, set_not, with_not: Schema);
    optional_copy!(multiple_of, set_multiple_of, with_multiple_of: f64);
    optional_copy!(maximum, set_maximum, with_maximum: f64);
    optional_copy!(exclusive_maximum, set_exclusive_maximum, with_exclusive_maximum: bool);
    optional_copy!(minimum, set_minimum, with_minimum: f64);
    optional_copy!(exclusive_minimum, set_exclusive_minimum, with_exclusive_minimum: bool);
    optional_copy!(max_length, set_max_length, with_max_length: u64);
    optional_copy!(min_length, set_min_length, with_min_length: u64);
    optional_string!(pattern, set_pattern, with_pattern);
    optional_copy!(max_items, set_max_items, with_max_items: u64);
    optional_copy!(min_items, set_min_items, with_min_items: u64);
    optional_copy!(unique_items, set_unique_items, with_unique_items: bool);
    optional_copy!(max_properties, set_max_properties, with_max_properties: u64);
    optional_copy!(min_properties, set_min_properties, with_min_properties: u64);
    optional_value!(
        external_docs,
        external_docs_mut,
        set_external_docs,
        with_external_docs: ExternalDocumentation
    );
    optional_value!(example, example_mut, set_example, with_example: Value);

    /// Looks up a declared property by name.
    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties.as_ref().and_then(|properties| properties.get(name))
    }

    pub fn is_required(&self, property: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|required| required.iter().any(|name| name == property))
    }
}

model_object!(Schema);
referenceable!(Schema => ComponentKind::Schemas);
