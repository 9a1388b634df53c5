use std::fmt::{Display, Formatter};

/// Errors raised by the few fallible operations of the model.
///
/// Mutators never fail. Errors only come from interpreting strings as one of
/// the closed enumerations in [`crate::types`], or from reading the document
/// version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The value does not name one of the eight supported HTTP methods.
    UnknownHttpMethod(String),

    /// The value is not one of `query`, `header`, `path` or `cookie`.
    UnknownParameterLocation(String),

    /// The value is not a JSON schema primitive type.
    UnknownSchemaType(String),

    /// The value is not a known security scheme type.
    UnknownSecuritySchemeType(String),

    /// The value is not a valid api key location.
    UnknownApiKeyLocation(String),

    /// The `openapi` field does not name a supported specification version.
    UnsupportedVersion(String),
}

impl ModelError {
    pub(crate) fn unknown_http_method<T>(method: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        ModelError::UnknownHttpMethod(method.to_string())
    }

    pub(crate) fn unknown_parameter_location<T>(location: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        ModelError::UnknownParameterLocation(location.to_string())
    }

    pub(crate) fn unknown_schema_type<T>(schema_type: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        ModelError::UnknownSchemaType(schema_type.to_string())
    }

    pub(crate) fn unknown_security_scheme_type<T>(scheme_type: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        ModelError::UnknownSecuritySchemeType(scheme_type.to_string())
    }

    pub(crate) fn unknown_api_key_location<T>(location: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        ModelError::UnknownApiKeyLocation(location.to_string())
    }

    pub(crate) fn unsupported_version<T>(version: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        ModelError::UnsupportedVersion(version.to_string())
    }
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::UnknownHttpMethod(method) => {
                write!(f, "Unknown HTTP method: {}", method)
            }
            ModelError::UnknownParameterLocation(location) => {
                write!(f, "Unknown parameter location: {}", location)
            }
            ModelError::UnknownSchemaType(schema_type) => {
                write!(f, "Unknown schema type: {}", schema_type)
            }
            ModelError::UnknownSecuritySchemeType(scheme_type) => {
                write!(f, "Unknown security scheme type: {}", scheme_type)
            }
            ModelError::UnknownApiKeyLocation(location) => {
                write!(f, "Unknown api key location: {}", location)
            }
            ModelError::UnsupportedVersion(version) => {
                write!(f, "Unsupported version: {}", version)
            }
        }
    }
}

impl std::error::Error for ModelError {}
