use crate::extensions::{model_object, Extensions};
use crate::model::property::{optional_list, optional_string, optional_value};
use crate::model::{Operation, Parameter, Server};
use crate::types::HttpMethod;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The operations available on a single path.
///
/// A path item may carry a `$ref` to an external definition next to local
/// fields. The model keeps both as they are and does not decide which one
/// wins; that is up to whoever resolves the reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathItem {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    get: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    put: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    post: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    delete: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    head: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    patch: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    servers: Option<Vec<Server>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<Vec<Parameter>>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl PathItem {
    pub fn new() -> Self {
        Self::default()
    }

    optional_string!(
        /// The `$ref` of this path item, stored verbatim.
        reference, set_reference, with_reference
    );
    optional_string!(
        /// Summary intended to apply to all operations in this path.
        summary, set_summary, with_summary
    );
    optional_string!(
        /// Description intended to apply to all operations in this path.
        description, set_description, with_description
    );
    optional_value!(get, get_mut, set_get, with_get: Operation);
    optional_value!(put, put_mut, set_put, with_put: Operation);
    optional_value!(post, post_mut, set_post, with_post: Operation);
    optional_value!(delete, delete_mut, set_delete, with_delete: Operation);
    optional_value!(options, options_mut, set_options, with_options: Operation);
    optional_value!(head, head_mut, set_head, with_head: Operation);
    optional_value!(patch, patch_mut, set_patch, with_patch: Operation);
    optional_value!(trace, trace_mut, set_trace, with_trace: Operation);
    optional_list!(
        /// Servers overriding the document level servers for this path.
        servers, set_servers, with_servers, add_server: Server
    );
    optional_list!(
        /// Parameters shared by every operation on this path. Operations may
        /// override an entry with the same name and location but cannot
        /// remove it.
        parameters, set_parameters, with_parameters, add_parameter: Parameter
    );

    fn slot(&self, method: HttpMethod) -> &Option<Operation> {
        match method {
            HttpMethod::Get => &self.get,
            HttpMethod::Put => &self.put,
            HttpMethod::Post => &self.post,
            HttpMethod::Delete => &self.delete,
            HttpMethod::Options => &self.options,
            HttpMethod::Head => &self.head,
            HttpMethod::Patch => &self.patch,
            HttpMethod::Trace => &self.trace,
        }
    }

    fn slot_mut(&mut self, method: HttpMethod) -> &mut Option<Operation> {
        match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Delete => &mut self.delete,
            HttpMethod::Options => &mut self.options,
            HttpMethod::Head => &mut self.head,
            HttpMethod::Patch => &mut self.patch,
            HttpMethod::Trace => &mut self.trace,
        }
    }

    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        self.slot(method).as_ref()
    }

    pub fn operation_mut(&mut self, method: HttpMethod) -> Option<&mut Operation> {
        self.slot_mut(method).as_mut()
    }

    pub fn set_operation(&mut self, method: HttpMethod, operation: Option<Operation>) {
        *self.slot_mut(method) = operation;
    }

    pub fn with_operation(&mut self, method: HttpMethod, operation: Operation) -> &mut Self {
        self.set_operation(method, Some(operation));
        self
    }

    /// Every operation that is set, in `HttpMethod::ALL` order
    /// (GET, PUT, POST, DELETE, OPTIONS, HEAD, PATCH, TRACE).
    pub fn read_operations(&self) -> Vec<&Operation> {
        HttpMethod::ALL
            .iter()
            .filter_map(|method| self.operation(*method))
            .collect()
    }

    /// The operations that are set, keyed by method, in `HttpMethod::ALL`
    /// order.
    pub fn read_operations_map(&self) -> IndexMap<HttpMethod, &Operation> {
        HttpMethod::ALL
            .iter()
            .filter_map(|method| self.operation(*method).map(|operation| (*method, operation)))
            .collect()
    }

    /// Parameters that apply to the operation for `method`: the path level
    /// parameters the operation does not override, followed by the
    /// operation's own parameters.
    ///
    /// Parameters without a name and location (pure `$ref` entries) never
    /// override anything.
    pub fn effective_parameters(&self, method: HttpMethod) -> Vec<&Parameter> {
        let inherited = self.parameters.as_deref().unwrap_or_default();
        let own = self
            .operation(method)
            .and_then(Operation::parameters)
            .unwrap_or_default();

        let overridden = |parameter: &Parameter| match parameter.key() {
            Some(key) => own.iter().any(|candidate| candidate.key() == Some(key)),
            None => false,
        };

        inherited
            .iter()
            .filter(|parameter| !overridden(*parameter))
            .chain(own.iter())
            .collect()
    }
}

model_object!(PathItem);

#[cfg(test)]
mod test {
    use crate::model::{Operation, Parameter, PathItem, Server};
    use crate::types::{HttpMethod, ParameterLocation};
    use serde_json::json;

    fn operation(id: &str) -> Operation {
        let mut operation = Operation::new();
        operation.with_operation_id(id);
        operation
    }

    #[test]
    fn test_new_path_item_is_empty() {
        let item = PathItem::new();
        assert!(item.read_operations().is_empty());
        assert!(item.read_operations_map().is_empty());
        assert_eq!(item.servers(), None);
        assert_eq!(item.parameters(), None);
        assert_eq!(item.reference(), None);
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({}));
    }

    #[test]
    fn test_read_operations_use_fixed_order() {
        let mut item = PathItem::new();
        item.with_post(operation("createPet"))
            .with_trace(operation("tracePet"))
            .with_get(operation("getPet"));

        let ids: Vec<&str> = item
            .read_operations()
            .iter()
            .filter_map(|operation| operation.operation_id())
            .collect();
        assert_eq!(ids, vec!["getPet", "createPet", "tracePet"]);
    }

    #[test]
    fn test_read_operations_map_only_has_set_methods() {
        let mut item = PathItem::new();
        item.with_post(operation("createPet"));
        item.with_get(operation("listPets"));

        let operations = item.read_operations();
        assert_eq!(operations.len(), 2);
        assert_eq!(operations[0].operation_id(), Some("listPets"));
        assert_eq!(operations[1].operation_id(), Some("createPet"));

        let map = item.read_operations_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![HttpMethod::Get, HttpMethod::Post]);
        assert_eq!(map[&HttpMethod::Post].operation_id(), Some("createPet"));
        assert!(!map.contains_key(&HttpMethod::Put));
    }

    #[test]
    fn test_method_keyed_access_matches_named_access() {
        let mut item = PathItem::new();
        for method in HttpMethod::ALL {
            item.with_operation(method, operation(method.field_name()));
        }
        assert_eq!(item.read_operations().len(), 8);
        assert_eq!(item.delete().unwrap().operation_id(), Some("delete"));
        assert_eq!(item.options().unwrap().operation_id(), Some("options"));
        assert_eq!(item.head().unwrap().operation_id(), Some("head"));
        assert_eq!(item.patch().unwrap().operation_id(), Some("patch"));
        assert_eq!(item.put().unwrap().operation_id(), Some("put"));

        item.set_operation(HttpMethod::Head, None);
        assert!(item.head().is_none());
        assert_eq!(item.read_operations().len(), 7);

        item.operation_mut(HttpMethod::Get)
            .unwrap()
            .with_summary("changed");
        assert_eq!(item.get().unwrap().summary(), Some("changed"));
    }

    #[test]
    fn test_fluent_returns_same_instance() {
        let mut item = PathItem::new();
        let address = &item as *const PathItem;
        let returned = item.with_summary("Pets") as *const PathItem;
        assert_eq!(address, returned);

        let mut plain = PathItem::new();
        plain.set_summary(Some("Pets".to_string()));
        assert_eq!(item, plain);
    }

    #[test]
    fn test_add_server_and_parameter() {
        let mut item = PathItem::new();
        item.add_server(Server::new("https://a.example.com"))
            .add_server(Server::new("https://b.example.com"))
            .add_parameter(Parameter::new("petId", ParameterLocation::Path));

        let urls: Vec<&str> = item.servers().unwrap().iter().map(Server::url).collect();
        assert_eq!(urls, vec!["https://a.example.com", "https://b.example.com"]);
        assert_eq!(item.parameters().unwrap().len(), 1);
    }

    #[test]
    fn test_reference_and_local_fields_coexist() {
        let mut item = PathItem::new();
        item.with_reference("https://example.com/paths/pets.json")
            .with_summary("Local summary")
            .with_get(operation("listPets"));

        assert_eq!(item.reference(), Some("https://example.com/paths/pets.json"));
        assert_eq!(item.summary(), Some("Local summary"));
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "$ref": "https://example.com/paths/pets.json",
                "summary": "Local summary",
                "get": { "operationId": "listPets" }
            })
        );
    }

    #[test]
    fn test_effective_parameters_override_by_name_and_location() {
        let mut inherited_id = Parameter::new("id", ParameterLocation::Path);
        inherited_id.with_description("inherited");
        let mut overriding_id = Parameter::new("id", ParameterLocation::Path);
        overriding_id.with_description("overridden");

        let mut get = operation("getPet");
        get.add_parameter(overriding_id)
            .add_parameter(Parameter::new("id", ParameterLocation::Query));

        let mut item = PathItem::new();
        item.add_parameter(inherited_id)
            .add_parameter(Parameter::new("trace", ParameterLocation::Header))
            .with_get(get)
            .with_post(operation("updatePet"));

        let parameters = item.effective_parameters(HttpMethod::Get);
        let described: Vec<(Option<&str>, Option<&str>)> = parameters
            .iter()
            .map(|parameter| (parameter.name(), parameter.description()))
            .collect();
        assert_eq!(
            described,
            vec![
                (Some("trace"), None),
                (Some("id"), Some("overridden")),
                (Some("id"), None),
            ]
        );

        assert_eq!(item.effective_parameters(HttpMethod::Post).len(), 2);
        assert_eq!(item.effective_parameters(HttpMethod::Delete).len(), 2);
    }

    #[test]
    fn test_path_item_round_trip() {
        let value = json!({
            "summary": "Pets",
            "get": { "operationId": "listPets" },
            "parameters": [{ "name": "petId", "in": "path", "required": true }],
            "x-owner": "pets-team"
        });
        let item: PathItem = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(item.read_operations().len(), 1);
        assert_eq!(serde_json::to_value(&item).unwrap(), value);
    }
}
