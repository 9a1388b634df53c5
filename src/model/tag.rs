use crate::extensions::{model_object, Extensions};
use crate::model::property::{optional_string, optional_value, required_string};
use crate::model::ExternalDocumentation;
use serde::{Deserialize, Serialize};

/// Metadata for a tag used by operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tag {
    name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    external_docs: Option<ExternalDocumentation>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    required_string!(name, set_name, with_name);
    optional_string!(description, set_description, with_description);
    optional_value!(
        external_docs,
        external_docs_mut,
        set_external_docs,
        with_external_docs: ExternalDocumentation
    );
}

model_object!(Tag);

#[cfg(test)]
mod test {
    use crate::model::{ExternalDocumentation, Tag};
    use serde_json::json;

    #[test]
    fn test_tag_with_external_docs() {
        let mut docs = ExternalDocumentation::new("https://example.com/pets");
        docs.with_description("More about pets");

        let mut tag = Tag::new("pets");
        tag.with_description("Everything about pets").with_external_docs(docs);

        assert_eq!(tag.external_docs().unwrap().url(), "https://example.com/pets");
        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            json!({
                "name": "pets",
                "description": "Everything about pets",
                "externalDocs": {
                    "description": "More about pets",
                    "url": "https://example.com/pets"
                }
            })
        );
    }

    #[test]
    fn test_setter_and_fluent_have_same_effect() {
        let mut plain = Tag::new("a");
        plain.set_name("b");
        plain.set_description(Some("desc".to_string()));

        let mut fluent = Tag::new("a");
        fluent.with_name("b").with_description("desc");

        assert_eq!(plain, fluent);
    }
}
