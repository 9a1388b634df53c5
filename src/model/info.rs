use crate::extensions::{model_object, Extensions};
use crate::model::property::{optional_string, optional_value, required_string};
use serde::{Deserialize, Serialize};

/// Metadata about the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Info {
    title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    terms_of_service: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    contact: Option<Contact>,

    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<License>,

    version: String,

    #[serde(flatten)]
    extensions: Extensions,
}

impl Info {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    required_string!(
        /// Title of the API.
        title, set_title, with_title
    );
    optional_string!(description, set_description, with_description);
    optional_string!(terms_of_service, set_terms_of_service, with_terms_of_service);
    optional_value!(contact, contact_mut, set_contact, with_contact: Contact);
    optional_value!(license, license_mut, set_license, with_license: License);
    required_string!(
        /// Version of the API document, unrelated to the `openapi` field.
        version, set_version, with_version
    );
}

/// Contact information for the exposed API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl Contact {
    optional_string!(name, set_name, with_name);
    optional_string!(url, set_url, with_url);
    optional_string!(email, set_email, with_email);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl License {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    required_string!(name, set_name, with_name);
    optional_string!(url, set_url, with_url);
}

model_object!(Info, Contact, License);

#[cfg(test)]
mod test {
    use crate::model::{Contact, Info, License};
    use serde_json::json;

    #[test]
    fn test_info_accessors() {
        let mut info = Info::new("Petstore", "1.0.0");
        assert_eq!(info.title(), "Petstore");
        assert_eq!(info.version(), "1.0.0");
        assert_eq!(info.description(), None);

        info.with_description("All the pets")
            .with_terms_of_service("https://example.com/terms")
            .with_version("1.1.0");
        assert_eq!(info.description(), Some("All the pets"));
        assert_eq!(info.terms_of_service(), Some("https://example.com/terms"));
        assert_eq!(info.version(), "1.1.0");

        info.set_description(None);
        assert_eq!(info.description(), None);
    }

    #[test]
    fn test_info_serialization() {
        let mut contact = Contact::default();
        contact.with_name("API Support").with_email("support@example.com");
        let mut license = License::new("Apache 2.0");
        license.with_url("https://www.apache.org/licenses/LICENSE-2.0.html");

        let mut info = Info::new("Petstore", "1.0.0");
        info.with_contact(contact).with_license(license);

        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({
                "title": "Petstore",
                "contact": { "name": "API Support", "email": "support@example.com" },
                "license": {
                    "name": "Apache 2.0",
                    "url": "https://www.apache.org/licenses/LICENSE-2.0.html"
                },
                "version": "1.0.0"
            })
        );
    }

    #[test]
    fn test_info_missing_required_fields_parse_as_empty() {
        let info: Info = serde_json::from_value(json!({ "description": "draft" })).unwrap();
        assert_eq!(info.title(), "");
        assert_eq!(info.version(), "");
        assert_eq!(info.description(), Some("draft"));
    }

    #[test]
    fn test_nested_mutation() {
        let mut info = Info::new("Petstore", "1.0.0");
        info.with_contact(Contact::default());
        info.contact_mut().unwrap().with_url("https://example.com");
        assert_eq!(info.contact().unwrap().url(), Some("https://example.com"));
    }
}
