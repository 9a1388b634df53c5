use crate::extensions::{model_object, Extensions};
use crate::model::property::optional_map;
use crate::model::{Parameter, RequestBody, Response, Schema, SecurityScheme};
use crate::reference::ComponentKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reusable objects that other parts of the document refer to by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Components {
    #[serde(skip_serializing_if = "Option::is_none")]
    schemas: Option<IndexMap<String, Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    responses: Option<IndexMap<String, Response>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<IndexMap<String, Parameter>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    request_bodies: Option<IndexMap<String, RequestBody>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    security_schemes: Option<IndexMap<String, SecurityScheme>>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    optional_map!(schemas, set_schemas, with_schemas, add_schema: Schema);
    optional_map!(responses, set_responses, with_responses, add_response: Response);
    optional_map!(parameters, set_parameters, with_parameters, add_parameter: Parameter);
    optional_map!(
        request_bodies,
        set_request_bodies,
        with_request_bodies,
        add_request_body: RequestBody
    );
    optional_map!(
        security_schemes,
        set_security_schemes,
        with_security_schemes,
        add_security_scheme: SecurityScheme
    );

    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.as_ref().and_then(|schemas| schemas.get(name))
    }

    pub fn security_scheme(&self, name: &str) -> Option<&SecurityScheme> {
        self.security_schemes
            .as_ref()
            .and_then(|schemes| schemes.get(name))
    }

    /// Whether a component of the given kind is registered under `name`.
    pub fn contains(&self, kind: ComponentKind, name: &str) -> bool {
        match kind {
            ComponentKind::Schemas => Self::has_key(&self.schemas, name),
            ComponentKind::Responses => Self::has_key(&self.responses, name),
            ComponentKind::Parameters => Self::has_key(&self.parameters, name),
            ComponentKind::RequestBodies => Self::has_key(&self.request_bodies, name),
            ComponentKind::SecuritySchemes => Self::has_key(&self.security_schemes, name),
        }
    }

    fn has_key<T>(map: &Option<IndexMap<String, T>>, name: &str) -> bool {
        map.as_ref().is_some_and(|map| map.contains_key(name))
    }
}

model_object!(Components);

#[cfg(test)]
mod test {
    use crate::model::{Components, Parameter, Schema, SecurityScheme};
    use crate::reference::ComponentKind;
    use crate::types::primitive::SchemaType;
    use crate::types::ParameterLocation;
    use serde_json::json;

    #[test]
    fn test_add_components() {
        let mut components = Components::new();
        components
            .add_schema("Pet", Schema::of_type(SchemaType::Object))
            .add_parameter("limitParam", Parameter::new("limit", ParameterLocation::Query))
            .add_security_scheme("bearer", SecurityScheme::http("bearer"));

        assert!(components.contains(ComponentKind::Schemas, "Pet"));
        assert!(components.contains(ComponentKind::Parameters, "limitParam"));
        assert!(components.contains(ComponentKind::SecuritySchemes, "bearer"));
        assert!(!components.contains(ComponentKind::Responses, "Pet"));
        assert_eq!(
            components.schema("Pet").unwrap().schema_type(),
            Some(SchemaType::Object)
        );
        assert!(components.security_scheme("basic").is_none());
    }

    #[test]
    fn test_components_last_write_wins() {
        let mut components = Components::new();
        components
            .add_schema("Pet", Schema::of_type(SchemaType::Object))
            .add_schema("Pet", Schema::of_type(SchemaType::String));
        assert_eq!(components.schemas().unwrap().len(), 1);
        assert_eq!(
            components.schema("Pet").unwrap().schema_type(),
            Some(SchemaType::String)
        );
    }

    #[test]
    fn test_components_serialization() {
        let mut components = Components::new();
        components.add_security_scheme("basic", SecurityScheme::http("basic"));
        assert_eq!(
            serde_json::to_value(&components).unwrap(),
            json!({ "securitySchemes": { "basic": { "type": "http", "scheme": "basic" } } })
        );
    }
}
