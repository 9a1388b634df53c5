use crate::extensions::{model_object, Extensions};
use crate::model::property::{optional_string, required_string};
use serde::{Deserialize, Serialize};

/// Reference to external documentation for the document, a tag, an
/// operation or a schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalDocumentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    url: String,

    #[serde(flatten)]
    extensions: Extensions,
}

impl ExternalDocumentation {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    optional_string!(description, set_description, with_description);
    required_string!(url, set_url, with_url);
}

model_object!(ExternalDocumentation);
