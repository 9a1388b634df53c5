use crate::{ENCODED_SLASH, ENCODED_TILDE, FRAGMENT_PREFIX, PATH_SEPARATOR, TILDE};
use std::fmt::{Display, Formatter};

/// A JSON pointer (RFC 6901) into an OpenAPI document, built segment by
/// segment. Segments are escaped when added.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsonPointer(pub Vec<String>);

impl JsonPointer {
    pub fn new() -> Self {
        JsonPointer(Vec::new())
    }

    pub fn add(&mut self, segment: impl AsRef<str>) -> &mut Self {
        let segment = segment.as_ref();
        if segment.contains(TILDE) || segment.contains(PATH_SEPARATOR) {
            let segment = segment
                .replace(TILDE, ENCODED_TILDE)
                .replace(PATH_SEPARATOR, ENCODED_SLASH);
            self.0.push(segment);
        } else {
            self.0.push(segment.to_owned());
        }

        self
    }

    /// Pointer text, e.g. `/paths/~1pets/get`. The root pointer is empty.
    pub fn format_pointer(&self) -> String {
        self.0
            .iter()
            .map(|segment| format!("{}{}", PATH_SEPARATOR, segment))
            .collect()
    }

    /// Pointer as a same-document URI fragment, e.g. `#/components/schemas/Pet`.
    pub fn format_fragment(&self) -> String {
        format!("{}{}", FRAGMENT_PREFIX, self.format_pointer())
    }
}

impl Display for JsonPointer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_pointer())
    }
}

#[cfg(test)]
mod test {
    use crate::types::json_pointer::JsonPointer;
    use crate::{ENCODED_SLASH, ENCODED_TILDE};

    #[test]
    fn test_new_json_pointer() {
        let pointer = JsonPointer::new();
        assert_eq!(pointer.0.len(), 0);
        assert_eq!(pointer.format_pointer(), "");
        assert_eq!(pointer.format_fragment(), "#");
    }

    #[test]
    fn test_add_multiple_segments() {
        let mut pointer = JsonPointer::new();
        pointer.add("components").add("schemas").add("User");
        assert_eq!(pointer.0, vec!["components", "schemas", "User"]);
        assert_eq!(pointer.format_pointer(), "/components/schemas/User");
        assert_eq!(pointer.format_fragment(), "#/components/schemas/User");
    }

    #[test]
    fn test_add_segment_with_slash() {
        let mut pointer = JsonPointer::new();
        pointer.add("paths").add("/users/{id}").add("get");
        assert_eq!(pointer.0[1], format!("{}users{}{{id}}", ENCODED_SLASH, ENCODED_SLASH));
        assert_eq!(pointer.to_string(), "/paths/~1users~1{id}/get");
    }

    #[test]
    fn test_add_segment_with_tilde_and_slash() {
        let mut pointer = JsonPointer::new();
        pointer.add("user~/profile");

        // The tilde is escaped first so the slash escape is not re-encoded
        let expected = "user".to_string() + ENCODED_TILDE + ENCODED_SLASH + "profile";
        assert_eq!(pointer.0[0], expected);
        assert_eq!(pointer.format_pointer(), format!("/{}", expected));
    }
}
