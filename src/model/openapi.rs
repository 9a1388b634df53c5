use crate::error::ModelError;
use crate::extensions::{model_object, Extensions};
use crate::model::property::{optional_list, optional_value, required_string, required_value};
use crate::model::{
    Components, ExternalDocumentation, Info, Operation, PathItem, Paths, Schema,
    SecurityRequirement, SecurityScheme, Server, Tag,
};
use crate::types::version::SpecVersion;
use crate::types::HttpMethod;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// The root object of an OpenAPI document.
///
/// A default constructed document has an empty `openapi` version, an empty
/// `info`, no paths and every optional field unset. Nothing is validated on
/// write: any version string, duplicate tag names or conflicting entries are
/// accepted as given. Use [`crate::inspect::inspect`] to look for such
/// problems once the document is complete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenApi {
    openapi: String,

    info: Info,

    #[serde(skip_serializing_if = "Option::is_none")]
    servers: Option<Vec<Server>>,

    paths: Paths,

    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<Components>,

    #[serde(skip_serializing_if = "Option::is_none")]
    security: Option<Vec<SecurityRequirement>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    external_docs: Option<ExternalDocumentation>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl OpenApi {
    pub fn new(openapi: impl Into<String>, info: Info) -> Self {
        Self {
            openapi: openapi.into(),
            info,
            ..Default::default()
        }
    }

    required_string!(
        /// Semantic version of the OpenAPI specification the document uses.
        openapi, set_openapi, with_openapi
    );
    required_value!(info, info_mut, set_info, with_info: Info);
    optional_value!(
        external_docs,
        external_docs_mut,
        set_external_docs,
        with_external_docs: ExternalDocumentation
    );
    optional_list!(
        /// Declared servers. See [`OpenApi::effective_servers`] for the
        /// implicit default.
        servers, set_servers, with_servers, add_server: Server
    );
    optional_list!(
        /// Alternative security requirements; satisfying any one of them
        /// authorizes a request.
        security, set_security, with_security, add_security_requirement: SecurityRequirement
    );
    optional_list!(
        /// Tags with additional metadata. Names should be unique, which is
        /// not checked here.
        tags, set_tags, with_tags, add_tag: Tag
    );
    required_value!(paths, paths_mut, set_paths, with_paths: Paths);
    optional_value!(components, components_mut, set_components, with_components: Components);

    /// Adds a path item, replacing any item already registered under `name`.
    pub fn path(&mut self, name: impl Into<String>, item: PathItem) -> &mut Self {
        let name = name.into();
        if self.paths.has_path_item(&name) {
            log::debug!("Replacing path item '{}'", name);
        }
        self.paths.insert(name, item);
        self
    }

    /// Adds a schema to `components`, creating it when absent. An existing
    /// schema with the same name is replaced.
    pub fn schema(&mut self, name: impl Into<String>, schema: Schema) -> &mut Self {
        let name = name.into();
        let components = self.components_or_insert();
        if components.schema(&name).is_some() {
            log::debug!("Replacing schema '{}'", name);
        }
        components.add_schema(name, schema);
        self
    }

    /// Adds a security scheme to `components`, creating it when absent. An
    /// existing scheme with the same name is replaced.
    pub fn security_scheme(&mut self, name: impl Into<String>, scheme: SecurityScheme) -> &mut Self {
        let name = name.into();
        let components = self.components_or_insert();
        if components.security_scheme(&name).is_some() {
            log::debug!("Replacing security scheme '{}'", name);
        }
        components.add_security_scheme(name, scheme);
        self
    }

    fn components_or_insert(&mut self) -> &mut Components {
        self.components.get_or_insert_with(|| {
            log::debug!("Creating components section");
            Components::new()
        })
    }

    /// Servers that apply to the document: the declared ones, or a single
    /// server with url `/` when none are declared.
    pub fn effective_servers(&self) -> Cow<'_, [Server]> {
        match self.servers.as_deref() {
            Some(servers) if !servers.is_empty() => Cow::Borrowed(servers),
            _ => Cow::Owned(vec![Server::implicit()]),
        }
    }

    /// Interprets the `openapi` field.
    pub fn spec_version(&self) -> Result<SpecVersion, ModelError> {
        SpecVersion::from_str(&self.openapi)
    }

    pub fn find_tag(&self, name: &str) -> Option<&Tag> {
        self.tags
            .as_deref()
            .and_then(|tags| tags.iter().find(|tag| tag.name() == name))
    }

    /// Every operation in the document as `(path, method, operation)`, in
    /// path order and then method order.
    pub fn operations(&self) -> impl Iterator<Item = (&str, HttpMethod, &Operation)> {
        self.paths.iter().flat_map(|(path, item)| {
            item.read_operations_map()
                .into_iter()
                .map(move |(method, operation)| (path.as_str(), method, operation))
        })
    }

    pub fn find_operation_by_id(&self, operation_id: &str) -> Option<&Operation> {
        self.operations()
            .map(|(_, _, operation)| operation)
            .find(|operation| operation.operation_id() == Some(operation_id))
    }
}

model_object!(OpenApi);
