use crate::extensions::{model_object, Extensions};
use crate::model::property::{optional_copy, optional_map, optional_string, optional_value};
use crate::reference::{referenceable, ComponentKind};
use crate::types::{ApiKeyLocation, SecuritySchemeType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One acceptable way to authorize a request: every listed scheme must be
/// satisfied, each with the listed scopes.
///
/// The object has no room for vendor extensions on the wire: every key is a
/// scheme name, including names starting with `x-`. Extensions set here stay
/// in memory only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityRequirement {
    schemes: IndexMap<String, Vec<String>>,

    #[serde(skip)]
    extensions: Extensions,
}

impl SecurityRequirement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schemes(&self) -> &IndexMap<String, Vec<String>> {
        &self.schemes
    }

    pub fn set_schemes(&mut self, schemes: IndexMap<String, Vec<String>>) {
        self.schemes = schemes;
    }

    pub fn with_schemes(&mut self, schemes: IndexMap<String, Vec<String>>) -> &mut Self {
        self.set_schemes(schemes);
        self
    }

    /// Requires the named scheme with the given scopes, replacing any scopes
    /// previously required for it.
    pub fn add_scheme(&mut self, name: impl Into<String>, scopes: Vec<String>) -> &mut Self {
        self.schemes.insert(name.into(), scopes);
        self
    }

    /// Requires the named scheme without scopes.
    pub fn add_scheme_without_scopes(&mut self, name: impl Into<String>) -> &mut Self {
        self.add_scheme(name, Vec::new())
    }

    pub fn remove_scheme(&mut self, name: &str) -> Option<Vec<String>> {
        self.schemes.shift_remove(name)
    }

    pub fn scopes(&self, name: &str) -> Option<&[String]> {
        self.schemes.get(name).map(Vec::as_slice)
    }

    /// An empty requirement makes security optional when listed among the
    /// alternatives.
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

/// A security scheme usable by operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecurityScheme {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    reference: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    scheme_type: Option<SecuritySchemeType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    location: Option<ApiKeyLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    scheme: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    bearer_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    flows: Option<OAuthFlows>,

    #[serde(skip_serializing_if = "Option::is_none")]
    open_id_connect_url: Option<String>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl SecurityScheme {
    pub fn of_type(scheme_type: SecuritySchemeType) -> Self {
        Self {
            scheme_type: Some(scheme_type),
            ..Default::default()
        }
    }

    /// An `apiKey` scheme reading the key `name` from `location`.
    pub fn api_key(name: impl Into<String>, location: ApiKeyLocation) -> Self {
        Self {
            scheme_type: Some(SecuritySchemeType::ApiKey),
            name: Some(name.into()),
            location: Some(location),
            ..Default::default()
        }
    }

    /// An `http` scheme such as `basic` or `bearer`.
    pub fn http(scheme: impl Into<String>) -> Self {
        Self {
            scheme_type: Some(SecuritySchemeType::Http),
            scheme: Some(scheme.into()),
            ..Default::default()
        }
    }

    optional_copy!(
        /// The `type` field.
        scheme_type, set_scheme_type, with_scheme_type: SecuritySchemeType
    );
    optional_string!(description, set_description, with_description);
    optional_string!(
        /// Header, query or cookie parameter name, for `apiKey` schemes.
        name, set_name, with_name
    );
    optional_copy!(location, set_location, with_location: ApiKeyLocation);
    optional_string!(scheme, set_scheme, with_scheme);
    optional_string!(bearer_format, set_bearer_format, with_bearer_format);
    optional_value!(flows, flows_mut, set_flows, with_flows: OAuthFlows);
    optional_string!(open_id_connect_url, set_open_id_connect_url, with_open_id_connect_url);
}

/// The OAuth flows supported by an `oauth2` scheme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OAuthFlows {
    #[serde(skip_serializing_if = "Option::is_none")]
    implicit: Option<OAuthFlow>,

    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<OAuthFlow>,

    #[serde(skip_serializing_if = "Option::is_none")]
    client_credentials: Option<OAuthFlow>,

    #[serde(skip_serializing_if = "Option::is_none")]
    authorization_code: Option<OAuthFlow>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl OAuthFlows {
    optional_value!(implicit, implicit_mut, set_implicit, with_implicit: OAuthFlow);
    optional_value!(password, password_mut, set_password, with_password: OAuthFlow);
    optional_value!(
        client_credentials,
        client_credentials_mut,
        set_client_credentials,
        with_client_credentials: OAuthFlow
    );
    optional_value!(
        authorization_code,
        authorization_code_mut,
        set_authorization_code,
        with_authorization_code: OAuthFlow
    );
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OAuthFlow {
    #[serde(skip_serializing_if = "Option::is_none")]
    authorization_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    token_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    scopes: Option<IndexMap<String, String>>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl OAuthFlow {
    optional_string!(authorization_url, set_authorization_url, with_authorization_url);
    optional_string!(token_url, set_token_url, with_token_url);
    optional_string!(refresh_url, set_refresh_url, with_refresh_url);
    optional_map!(
        /// Scope name to a short description of it.
        scopes, set_scopes, with_scopes, add_scope: String
    );
}

model_object!(SecurityRequirement, SecurityScheme, OAuthFlows, OAuthFlow);
referenceable!(SecurityScheme => ComponentKind::SecuritySchemes);
