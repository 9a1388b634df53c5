use crate::error::ModelError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Specification line a document declares through its `openapi` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecVersion {
    V30x,
    V31x,
}

impl FromStr for SpecVersion {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("3.1") {
            Ok(SpecVersion::V31x)
        } else if s.starts_with("3.0") {
            Ok(SpecVersion::V30x)
        } else {
            Err(ModelError::unsupported_version(s))
        }
    }
}

impl Display for SpecVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecVersion::V30x => write!(f, "3.0.x"),
            SpecVersion::V31x => write!(f, "3.1.x"),
        }
    }
}
