use crate::extensions::{deserialize_keyed, model_object, serialize_keyed, Extensions};
use crate::model::property::{optional_map, optional_string};
use crate::model::MediaType;
use crate::reference::{referenceable, ComponentKind};
use crate::DEFAULT_RESPONSE_KEY;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single response of an operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Response {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<IndexMap<String, MediaType>>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl Response {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Default::default()
        }
    }

    optional_string!(description, set_description, with_description);
    optional_map!(content, set_content, with_content, add_content: MediaType);
}

/// Expected responses of an operation, keyed by status code (`200`, `4XX`)
/// or `default`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Responses {
    responses: IndexMap<String, Response>,
    extensions: Extensions,
}

impl Responses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn responses(&self) -> &IndexMap<String, Response> {
        &self.responses
    }

    pub fn set_responses(&mut self, responses: IndexMap<String, Response>) {
        self.responses = responses;
    }

    pub fn with_responses(&mut self, responses: IndexMap<String, Response>) -> &mut Self {
        self.set_responses(responses);
        self
    }

    /// Inserts or replaces the response for one status code.
    pub fn add_response(&mut self, status: impl Into<String>, response: Response) -> &mut Self {
        self.responses.insert(status.into(), response);
        self
    }

    pub fn response(&self, status: &str) -> Option<&Response> {
        self.responses.get(status)
    }

    pub fn default_response(&self) -> Option<&Response> {
        self.responses.get(DEFAULT_RESPONSE_KEY)
    }

    pub fn with_default_response(&mut self, response: Response) -> &mut Self {
        self.add_response(DEFAULT_RESPONSE_KEY, response)
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl Serialize for Responses {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_keyed(&self.responses, &self.extensions, serializer)
    }
}

impl<'de> Deserialize<'de> for Responses {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (responses, extensions) = deserialize_keyed(deserializer)?;
        Ok(Responses {
            responses,
            extensions,
        })
    }
}

model_object!(Response, Responses);
referenceable!(Response => ComponentKind::Responses);

#[cfg(test)]
mod test {
    use crate::extensions::Extensible;
    use crate::model::{MediaType, Response, Responses, Schema};
    use crate::types::primitive::SchemaType;
    use serde_json::json;

    #[test]
    fn test_responses_keep_status_order() {
        let mut responses = Responses::new();
        responses
            .add_response("200", Response::new("OK"))
            .add_response("404", Response::new("Not found"))
            .with_default_response(Response::new("Unexpected error"));

        let statuses: Vec<&String> = responses.responses().keys().collect();
        assert_eq!(statuses, vec!["200", "404", "default"]);
        assert_eq!(responses.response("404").unwrap().description(), Some("Not found"));
        assert_eq!(
            responses.default_response().unwrap().description(),
            Some("Unexpected error")
        );
    }

    #[test]
    fn test_responses_with_extensions_round_trip() {
        let value = json!({
            "200": {
                "description": "A pet",
                "content": { "application/json": { "schema": { "type": "object" } } }
            },
            "x-cache": "public"
        });
        let responses: Responses = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(responses.responses().len(), 1);
        assert_eq!(responses.extension("x-cache"), Some(&json!("public")));
        assert_eq!(serde_json::to_value(&responses).unwrap(), value);
    }

    #[test]
    fn test_invalid_response_entry_is_rejected() {
        let result = serde_json::from_value::<Responses>(json!({ "200": "not an object" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_response_content() {
        let mut response = Response::new("A list of pets");
        response.add_content(
            "application/json",
            MediaType::with_schema_of(Schema::array_of(Schema::of_type(SchemaType::Object))),
        );
        let content = response.content().unwrap();
        assert!(content.contains_key("application/json"));
    }
}
