//! The OpenAPI 3.0 document tree.
//!
//! Every object is default constructible and carries vendor extensions (see
//! [`crate::extensions::Extensible`]). Fields are reached through accessors:
//! `x()` reads, `set_x()` replaces, `with_x()` replaces and returns the same
//! object for chaining, and `add_x()` appends to a sequence or inserts into a
//! map, creating it first when it is unset. Optional fields read as `None`
//! until set, so an unset list is distinguishable from an empty one.

pub(crate) mod property;

mod components;
mod external_documentation;
mod info;
mod openapi;
mod operation;
mod parameter;
mod path_item;
mod paths;
mod request_body;
mod response;
mod schema;
mod security;
mod server;
mod tag;

pub use components::Components;
pub use external_documentation::ExternalDocumentation;
pub use info::{Contact, Info, License};
pub use openapi::OpenApi;
pub use operation::Operation;
pub use parameter::Parameter;
pub use path_item::PathItem;
pub use paths::Paths;
pub use request_body::{MediaType, RequestBody};
pub use response::{Response, Responses};
pub use schema::{AdditionalProperties, Schema};
pub use security::{OAuthFlow, OAuthFlows, SecurityRequirement, SecurityScheme};
pub use server::{Server, ServerVariable};
pub use tag::Tag;
