//! Structural checks over a completed document.
//!
//! The model accepts any value on write. These checks look for the
//! constraints the document format states but the model does not enforce,
//! and report them without changing the tree.

use crate::extensions::Extensible;
use crate::model::{OpenApi, Operation, Parameter, PathItem, Schema};
use crate::types::json_pointer::JsonPointer;
use crate::types::primitive::SchemaType;
use crate::types::{HttpMethod, ParameterLocation};
use crate::{COMPONENTS_FIELD, INFO_FIELD, OPENAPI_FIELD, PARAMETERS_FIELD, PATHS_FIELD};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

/// A problem found by [`inspect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A required string is empty.
    MissingRequired { pointer: String, field: &'static str },

    /// `openapi` does not name a 3.0.x or 3.1.x version.
    UnsupportedVersion(String),

    /// Two document level tags share a name.
    DuplicateTag(String),

    /// Two parameters in the same list share a name and location.
    DuplicateParameter {
        pointer: String,
        name: String,
        location: ParameterLocation,
    },

    /// An extension key without the `x-` prefix; it would be dropped when
    /// the document is serialized.
    InvalidExtensionKey { pointer: String, key: String },

    /// A schema's `default` or `example` does not match its `type`.
    ValueTypeMismatch {
        pointer: String,
        keyword: &'static str,
        expected: SchemaType,
        found: SchemaType,
    },
}

impl Display for Issue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Issue::MissingRequired { pointer, field } => {
                write!(f, "Required field '{}' is empty at '{}'", field, pointer)
            }
            Issue::UnsupportedVersion(version) => {
                write!(f, "Unsupported version: {}", version)
            }
            Issue::DuplicateTag(name) => write!(f, "Duplicate tag: {}", name),
            Issue::DuplicateParameter {
                pointer,
                name,
                location,
            } => {
                write!(
                    f,
                    "Duplicate parameter '{}' in {} at '{}'",
                    name, location, pointer
                )
            }
            Issue::InvalidExtensionKey { pointer, key } => {
                write!(f, "Invalid extension key '{}' at '{}'", key, pointer)
            }
            Issue::ValueTypeMismatch {
                pointer,
                keyword,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Value of '{}' at '{}' is {}, expected {}",
                    keyword, pointer, found, expected
                )
            }
        }
    }
}

/// Runs every structural check over `document`. An empty result means no
/// problem was found.
pub fn inspect(document: &OpenApi) -> Vec<Issue> {
    let mut inspector = Inspector::default();
    inspector.inspect_document(document);
    inspector.issues
}

#[derive(Default)]
struct Inspector {
    issues: Vec<Issue>,
}

impl Inspector {
    fn report(&mut self, issue: Issue) {
        log::debug!("{}", issue);
        self.issues.push(issue);
    }

    fn inspect_document(&mut self, document: &OpenApi) {
        let root = JsonPointer::new();

        if document.openapi().is_empty() {
            self.missing(&root, OPENAPI_FIELD);
        } else if document.spec_version().is_err() {
            self.report(Issue::UnsupportedVersion(document.openapi().to_string()));
        }

        let mut info = root.clone();
        info.add(INFO_FIELD);
        if document.info().title().is_empty() {
            self.missing(&info, "title");
        }
        if document.info().version().is_empty() {
            self.missing(&info, "version");
        }
        self.extension_keys(&info, document.info());
        self.extension_keys(&root, document);

        self.inspect_tags(document);

        let mut paths = root.clone();
        paths.add(PATHS_FIELD);
        self.extension_keys(&paths, document.paths());
        for (name, item) in document.paths() {
            let mut pointer = paths.clone();
            pointer.add(name);
            self.inspect_path_item(&pointer, item);
        }

        if let Some(components) = document.components() {
            let mut pointer = root.clone();
            pointer.add(COMPONENTS_FIELD);
            self.extension_keys(&pointer, components);
            if let Some(schemas) = components.schemas() {
                for (name, schema) in schemas {
                    let mut schema_pointer = pointer.clone();
                    schema_pointer.add("schemas").add(name);
                    self.inspect_schema(&schema_pointer, schema);
                }
            }
        }
    }

    fn inspect_tags(&mut self, document: &OpenApi) {
        let Some(tags) = document.tags() else {
            return;
        };
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for (index, tag) in tags.iter().enumerate() {
            if !seen.insert(tag.name()) && reported.insert(tag.name()) {
                self.report(Issue::DuplicateTag(tag.name().to_string()));
            }
            let mut pointer = JsonPointer::new();
            pointer.add("tags").add(index.to_string());
            self.extension_keys(&pointer, tag);
        }
    }

    fn inspect_path_item(&mut self, pointer: &JsonPointer, item: &PathItem) {
        self.extension_keys(pointer, item);
        if let Some(parameters) = item.parameters() {
            self.inspect_parameters(pointer, parameters);
        }
        for (method, operation) in item.read_operations_map() {
            let mut operation_pointer = pointer.clone();
            operation_pointer.add(method.field_name());
            self.inspect_operation(&operation_pointer, method, operation);
        }
    }

    fn inspect_operation(&mut self, pointer: &JsonPointer, method: HttpMethod, operation: &Operation) {
        log::trace!("Inspecting {} operation at '{}'", method, pointer);
        self.extension_keys(pointer, operation);
        if let Some(parameters) = operation.parameters() {
            self.inspect_parameters(pointer, parameters);
        }
        if let Some(responses) = operation.responses() {
            let mut responses_pointer = pointer.clone();
            responses_pointer.add("responses");
            self.extension_keys(&responses_pointer, responses);
        }
    }

    fn inspect_parameters(&mut self, owner: &JsonPointer, parameters: &[Parameter]) {
        let mut pointer = owner.clone();
        pointer.add(PARAMETERS_FIELD);

        let mut seen = HashSet::new();
        for (index, parameter) in parameters.iter().enumerate() {
            if let Some((name, location)) = parameter.key() {
                if !seen.insert((name, location)) {
                    self.report(Issue::DuplicateParameter {
                        pointer: pointer.format_pointer(),
                        name: name.to_string(),
                        location,
                    });
                }
            }
            let mut parameter_pointer = pointer.clone();
            parameter_pointer.add(index.to_string());
            self.extension_keys(&parameter_pointer, parameter);
        }
    }

    fn inspect_schema(&mut self, pointer: &JsonPointer, schema: &Schema) {
        self.extension_keys(pointer, schema);
        if let Some(expected) = schema.schema_type() {
            let values = [("default", schema.default_value()), ("example", schema.example())];
            for (keyword, value) in values {
                let Some(found) = value.and_then(SchemaType::of_value) else {
                    continue;
                };
                // Integers are valid numbers.
                let compatible = found == expected
                    || (expected == SchemaType::Number && found == SchemaType::Integer);
                if !compatible {
                    self.report(Issue::ValueTypeMismatch {
                        pointer: pointer.format_pointer(),
                        keyword,
                        expected,
                        found,
                    });
                }
            }
        }
        if let Some(properties) = schema.properties() {
            for (name, property) in properties {
                let mut property_pointer = pointer.clone();
                property_pointer.add("properties").add(name);
                self.inspect_schema(&property_pointer, property);
            }
        }
        if let Some(items) = schema.items() {
            let mut items_pointer = pointer.clone();
            items_pointer.add("items");
            self.inspect_schema(&items_pointer, items);
        }
    }

    fn missing(&mut self, pointer: &JsonPointer, field: &'static str) {
        self.report(Issue::MissingRequired {
            pointer: pointer.format_pointer(),
            field,
        });
    }

    fn extension_keys(&mut self, pointer: &JsonPointer, object: &dyn Extensible) {
        let invalid: Vec<String> = object
            .extensions()
            .invalid_keys()
            .map(str::to_string)
            .collect();
        for key in invalid {
            self.report(Issue::InvalidExtensionKey {
                pointer: pointer.format_pointer(),
                key,
            });
        }
    }
}
