use crate::extensions::{model_object, Extensions};
use crate::model::property::{optional_copy, optional_map, optional_string, optional_value};
use crate::model::{MediaType, Schema};
use crate::reference::{referenceable, ComponentKind};
use crate::types::ParameterLocation;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single operation parameter, identified by its name and location.
///
/// `name` and `in` are required by the document format but optional here,
/// since a parameter that only carries a `$ref` has neither.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Parameter {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    location: Option<ParameterLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    deprecated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    allow_empty_value: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    explode: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    allow_reserved: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<Schema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    example: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<IndexMap<String, MediaType>>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl Parameter {
    pub fn new(name: impl Into<String>, location: ParameterLocation) -> Self {
        Self {
            name: Some(name.into()),
            location: Some(location),
            // Path parameters are always required.
            required: (location == ParameterLocation::Path).then_some(true),
            ..Default::default()
        }
    }

    optional_string!(name, set_name, with_name);
    optional_copy!(
        /// The `in` field.
        location, set_location, with_location: ParameterLocation
    );
    optional_string!(description, set_description, with_description);
    optional_copy!(required, set_required, with_required: bool);
    optional_copy!(deprecated, set_deprecated, with_deprecated: bool);
    optional_copy!(allow_empty_value, set_allow_empty_value, with_allow_empty_value: bool);
    optional_string!(style, set_style, with_style);
    optional_copy!(explode, set_explode, with_explode: bool);
    optional_copy!(allow_reserved, set_allow_reserved, with_allow_reserved: bool);
    optional_value!(schema, schema_mut, set_schema, with_schema: Schema);
    optional_value!(example, example_mut, set_example, with_example: Value);
    optional_map!(content, set_content, with_content, add_content: MediaType);

    /// The (name, location) pair that identifies this parameter within a
    /// parameter list. `None` when either half is missing.
    pub fn key(&self) -> Option<(&str, ParameterLocation)> {
        match (self.name.as_deref(), self.location) {
            (Some(name), Some(location)) => Some((name, location)),
            _ => None,
        }
    }
}

model_object!(Parameter);
referenceable!(Parameter => ComponentKind::Parameters);

#[cfg(test)]
mod test {
    use crate::model::{Parameter, Schema};
    use crate::reference::Reference;
    use crate::types::primitive::SchemaType;
    use crate::types::ParameterLocation;
    use serde_json::json;

    #[test]
    fn test_path_parameter_is_required() {
        let parameter = Parameter::new("petId", ParameterLocation::Path);
        assert_eq!(parameter.required(), Some(true));
        assert_eq!(parameter.key(), Some(("petId", ParameterLocation::Path)));

        let query = Parameter::new("limit", ParameterLocation::Query);
        assert_eq!(query.required(), None);
    }

    #[test]
    fn test_reference_only_parameter_has_no_key() {
        let mut parameter = Parameter::default();
        parameter.with_reference("limitParam");
        assert_eq!(parameter.key(), None);
        assert_eq!(
            serde_json::to_value(&parameter).unwrap(),
            json!({ "$ref": "#/components/parameters/limitParam" })
        );
    }

    #[test]
    fn test_parameter_serialization() {
        let mut parameter = Parameter::new("limit", ParameterLocation::Query);
        parameter
            .with_description("How many items to return")
            .with_schema(Schema::of_type(SchemaType::Integer))
            .with_explode(false);

        let value = serde_json::to_value(&parameter).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "limit",
                "in": "query",
                "description": "How many items to return",
                "explode": false,
                "schema": { "type": "integer" }
            })
        );
        let parsed: Parameter = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, parameter);
    }
}
