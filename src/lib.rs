//! An in-memory model of OpenAPI 3.0 documents.
//!
//! Documents are built with typed, chainable accessors or read from any
//! serde format, and written back with vendor extensions and key order
//! intact. [`inspect::inspect`] reports structural problems without
//! touching the tree.
//!
//! ```
//! use oasmodel::{HttpMethod, Info, OpenApi, Operation, PathItem, Response};
//!
//! let mut list_pets = Operation::new();
//! list_pets
//!     .with_operation_id("listPets")
//!     .response("200", Response::new("A list of pets"));
//!
//! let mut pets = PathItem::new();
//! pets.with_get(list_pets);
//!
//! let mut doc = OpenApi::new("3.0.3", Info::new("Petstore", "1.0.0"));
//! doc.path("/pets", pets);
//!
//! let item = doc.paths().path_item("/pets").unwrap();
//! assert!(item.operation(HttpMethod::Get).is_some());
//! ```

pub mod error;
pub mod extensions;
pub mod inspect;
pub mod model;
pub mod reference;
pub mod types;

pub use crate::error::ModelError;
pub use crate::extensions::{create, Constructible, Extensible, Extensions};
pub use crate::model::*;
pub use crate::reference::{ComponentKind, Reference};
pub use crate::types::json_pointer::JsonPointer;
pub use crate::types::primitive::SchemaType;
pub use crate::types::version::SpecVersion;
pub use crate::types::{ApiKeyLocation, HttpMethod, ParameterLocation, SecuritySchemeType};

const EXTENSION_PREFIX: &'static str = "x-";
const OPENAPI_FIELD: &'static str = "openapi";
const INFO_FIELD: &'static str = "info";
const PATHS_FIELD: &'static str = "paths";
const COMPONENTS_FIELD: &'static str = "components";
const PARAMETERS_FIELD: &'static str = "parameters";
const DEFAULT_RESPONSE_KEY: &'static str = "default";
const DEFAULT_SERVER_URL: &'static str = "/";
const FRAGMENT_PREFIX: &'static str = "#";
const PATH_SEPARATOR: &'static str = "/";
const TILDE: &'static str = "~";
const ENCODED_SLASH: &'static str = "~1";
const ENCODED_TILDE: &'static str = "~0";
