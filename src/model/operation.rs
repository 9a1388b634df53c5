use crate::extensions::{model_object, Extensions};
use crate::model::property::{optional_copy, optional_list, optional_string, optional_value};
use crate::model::{
    ExternalDocumentation, Parameter, RequestBody, Response, Responses, SecurityRequirement,
    Server,
};
use serde::{Deserialize, Serialize};

/// A single API operation on a path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    external_docs: Option<ExternalDocumentation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    operation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<Vec<Parameter>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    request_body: Option<RequestBody>,

    #[serde(skip_serializing_if = "Option::is_none")]
    responses: Option<Responses>,

    #[serde(skip_serializing_if = "Option::is_none")]
    deprecated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    security: Option<Vec<SecurityRequirement>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    servers: Option<Vec<Server>>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl Operation {
    pub fn new() -> Self {
        Self::default()
    }

    optional_list!(tags, set_tags, with_tags, add_tag: String);
    optional_string!(summary, set_summary, with_summary);
    optional_string!(description, set_description, with_description);
    optional_value!(
        external_docs,
        external_docs_mut,
        set_external_docs,
        with_external_docs: ExternalDocumentation
    );
    optional_string!(
        /// Unique identifier of the operation across the whole document.
        operation_id, set_operation_id, with_operation_id
    );
    optional_list!(parameters, set_parameters, with_parameters, add_parameter: Parameter);
    optional_value!(
        request_body,
        request_body_mut,
        set_request_body,
        with_request_body: RequestBody
    );
    optional_value!(responses, responses_mut, set_responses, with_responses: Responses);
    optional_copy!(deprecated, set_deprecated, with_deprecated: bool);
    optional_list!(
        /// Overrides the document level security. An empty list removes it.
        security, set_security, with_security, add_security_requirement: SecurityRequirement
    );
    optional_list!(servers, set_servers, with_servers, add_server: Server);

    /// Adds one response, creating the responses object when absent.
    pub fn response(&mut self, status: impl Into<String>, response: Response) -> &mut Self {
        self.responses
            .get_or_insert_with(Responses::new)
            .add_response(status, response);
        self
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.unwrap_or(false)
    }
}

model_object!(Operation);

#[cfg(test)]
mod test {
    use crate::model::{Operation, Parameter, Response, SecurityRequirement};
    use crate::types::ParameterLocation;
    use serde_json::json;

    #[test]
    fn test_add_items_create_sequences() {
        let mut operation = Operation::new();
        assert_eq!(operation.tags(), None);

        operation.add_tag("pets");
        assert_eq!(operation.tags(), Some(&["pets".to_string()][..]));

        operation
            .add_tag("store")
            .add_parameter(Parameter::new("limit", ParameterLocation::Query));
        assert_eq!(operation.tags().unwrap(), ["pets", "store"]);
        assert_eq!(operation.parameters().unwrap().len(), 1);
    }

    #[test]
    fn test_unset_differs_from_empty() {
        let mut operation = Operation::new();
        assert_eq!(serde_json::to_value(&operation).unwrap(), json!({}));

        operation.with_security(Vec::new());
        assert_eq!(operation.security(), Some(&[][..]));
        assert_eq!(serde_json::to_value(&operation).unwrap(), json!({ "security": [] }));
    }

    #[test]
    fn test_response_creates_responses() {
        let mut operation = Operation::new();
        assert!(operation.responses().is_none());

        operation
            .response("200", Response::new("OK"))
            .response("200", Response::new("Still OK"));
        let responses = operation.responses().unwrap();
        assert_eq!(responses.responses().len(), 1);
        assert_eq!(responses.response("200").unwrap().description(), Some("Still OK"));
    }

    #[test]
    fn test_operation_serialization() {
        let mut requirement = SecurityRequirement::new();
        requirement.add_scheme("petstore_auth", vec!["read:pets".to_string()]);

        let mut operation = Operation::new();
        operation
            .with_operation_id("listPets")
            .with_summary("List all pets")
            .add_tag("pets")
            .add_security_requirement(requirement)
            .response("200", Response::new("A paged array of pets"))
            .with_deprecated(false);

        let value = serde_json::to_value(&operation).unwrap();
        assert_eq!(
            value,
            json!({
                "tags": ["pets"],
                "summary": "List all pets",
                "operationId": "listPets",
                "responses": { "200": { "description": "A paged array of pets" } },
                "deprecated": false,
                "security": [{ "petstore_auth": ["read:pets"] }]
            })
        );
        assert!(!operation.is_deprecated());

        let parsed: Operation = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, operation);
    }
}
