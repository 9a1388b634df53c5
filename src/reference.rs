use crate::types::json_pointer::JsonPointer;
use crate::COMPONENTS_FIELD;
use std::fmt::{Display, Formatter};

/// Sections of the components object a reference can point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Schemas,
    Responses,
    Parameters,
    RequestBodies,
    SecuritySchemes,
}

impl ComponentKind {
    pub fn field_name(&self) -> &'static str {
        match self {
            ComponentKind::Schemas => "schemas",
            ComponentKind::Responses => "responses",
            ComponentKind::Parameters => "parameters",
            ComponentKind::RequestBodies => "requestBodies",
            ComponentKind::SecuritySchemes => "securitySchemes",
        }
    }

    /// Same-document reference to the named component of this kind.
    pub fn reference_to(&self, name: &str) -> String {
        let mut pointer = JsonPointer::new();
        pointer
            .add(COMPONENTS_FIELD)
            .add(self.field_name())
            .add(name);
        pointer.format_fragment()
    }
}

impl Display for ComponentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

/// Returns true when `reference` is a bare component name rather than a URI
/// or pointer.
pub fn is_simple_name(reference: &str) -> bool {
    !reference.contains(['.', '/', '#'])
}

/// Expands a bare component name to a full `#/components/...` reference.
/// Anything else is returned unchanged.
pub fn expand_reference(kind: ComponentKind, reference: &str) -> String {
    if is_simple_name(reference) {
        let expanded = kind.reference_to(reference);
        log::trace!("Expanded reference '{}' to '{}'", reference, expanded);
        expanded
    } else {
        reference.to_string()
    }
}

/// Capability of model objects that may be replaced by a `$ref` to a
/// reusable definition under `components`.
///
/// Only the reference string is stored; following it is left to whoever
/// consumes the document. Both setters expand a bare name such as `Pet`
/// into `#/components/<kind>/Pet`. Deserialized references are kept as
/// written.
pub trait Reference {
    const COMPONENT_KIND: ComponentKind;

    fn reference(&self) -> Option<&str>;

    /// Stores `reference` as given, without expansion.
    fn store_reference(&mut self, reference: Option<String>);

    fn set_reference(&mut self, reference: Option<String>) {
        let expanded = reference.map(|reference| expand_reference(Self::COMPONENT_KIND, &reference));
        self.store_reference(expanded);
    }

    fn with_reference(&mut self, reference: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.set_reference(Some(reference.into()));
        self
    }

    fn is_reference(&self) -> bool {
        self.reference().is_some()
    }
}

macro_rules! referenceable {
    ($($model:ty => $kind:expr),+ $(,)?) => {
        $(
            impl $crate::reference::Reference for $model {
                const COMPONENT_KIND: $crate::reference::ComponentKind = $kind;

                fn reference(&self) -> Option<&str> {
                    self.reference.as_deref()
                }

                fn store_reference(&mut self, reference: Option<String>) {
                    self.reference = reference;
                }
            }
        )+
    };
}

pub(crate) use referenceable;
