use crate::extensions::{model_object, Extensions};
use crate::model::property::{optional_list, optional_map, optional_string, required_string};
use crate::DEFAULT_SERVER_URL;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A server hosting the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<IndexMap<String, ServerVariable>>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl Server {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// The server assumed when a document declares none.
    pub fn implicit() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }

    required_string!(
        /// Target host URL. May be relative and may contain `{variable}`
        /// placeholders.
        url, set_url, with_url
    );
    optional_string!(description, set_description, with_description);
    optional_map!(variables, set_variables, with_variables, add_variable: ServerVariable);

    /// Substitutes every variable placeholder in the url with its default.
    pub fn resolved_url(&self) -> String {
        let mut url = self.url.clone();
        if let Some(variables) = &self.variables {
            for (name, variable) in variables {
                url = url.replace(&format!("{{{}}}", name), variable.default_value());
            }
        }
        url
    }
}

/// A variable used for substitution in a server url template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerVariable {
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    enumeration: Option<Vec<String>>,

    #[serde(rename = "default")]
    default_value: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl ServerVariable {
    pub fn new(default_value: impl Into<String>) -> Self {
        Self {
            default_value: default_value.into(),
            ..Default::default()
        }
    }

    optional_list!(enumeration, set_enumeration, with_enumeration, add_enumeration: String);
    required_string!(default_value, set_default_value, with_default_value);
    optional_string!(description, set_description, with_description);
}

model_object!(Server, ServerVariable);

#[cfg(test)]
mod test {
    use crate::model::{Server, ServerVariable};
    use serde_json::json;

    #[test]
    fn test_server_variables() {
        let mut port = ServerVariable::new("8443");
        port.add_enumeration("8443").add_enumeration("443");
        assert_eq!(
            port.enumeration(),
            Some(&["8443".to_string(), "443".to_string()][..])
        );

        let mut server = Server::new("https://{host}:{port}/v1");
        server
            .with_description("Production")
            .add_variable("host", ServerVariable::new("api.example.com"))
            .add_variable("port", port);

        assert_eq!(server.variables().unwrap().len(), 2);
        assert_eq!(server.resolved_url(), "https://api.example.com:8443/v1");
    }

    #[test]
    fn test_implicit_server() {
        let server = Server::implicit();
        assert_eq!(server.url(), "/");
        assert_eq!(server.resolved_url(), "/");
    }

    #[test]
    fn test_server_serialization() {
        let mut server = Server::new("https://{host}");
        server.add_variable("host", ServerVariable::new("localhost"));
        let value = serde_json::to_value(&server).unwrap();
        assert_eq!(
            value,
            json!({
                "url": "https://{host}",
                "variables": { "host": { "default": "localhost" } }
            })
        );
        let parsed: Server = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, server);
    }
}
