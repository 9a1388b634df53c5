use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Primitive data types a schema object can declare in its `type` field.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Integer,
    Number,
    String,
    Boolean,
    Array,
    Object,
}

impl Display for SchemaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaType::Integer => write!(f, "integer"),
            SchemaType::Number => write!(f, "number"),
            SchemaType::String => write!(f, "string"),
            SchemaType::Boolean => write!(f, "boolean"),
            SchemaType::Array => write!(f, "array"),
            SchemaType::Object => write!(f, "object"),
        }
    }
}

impl FromStr for SchemaType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "integer" => Ok(SchemaType::Integer),
            "number" => Ok(SchemaType::Number),
            "string" => Ok(SchemaType::String),
            "boolean" => Ok(SchemaType::Boolean),
            "array" => Ok(SchemaType::Array),
            "object" => Ok(SchemaType::Object),
            _ => Err(ModelError::unknown_schema_type(s)),
        }
    }
}

impl SchemaType {
    /// Best matching schema type for an example or default value.
    ///
    /// `null` has no counterpart in OpenAPI 3.0 (it uses `nullable`), so it
    /// maps to `None`.
    pub fn of_value(value: &Value) -> Option<SchemaType> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(SchemaType::Boolean),
            Value::Number(number) if number.is_i64() || number.is_u64() => {
                Some(SchemaType::Integer)
            }
            Value::Number(_) => Some(SchemaType::Number),
            Value::String(_) => Some(SchemaType::String),
            Value::Array(_) => Some(SchemaType::Array),
            Value::Object(_) => Some(SchemaType::Object),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::types::primitive::SchemaType;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_from_str() {
        assert_eq!(SchemaType::from_str("Integer").unwrap(), SchemaType::Integer);
        assert_eq!(SchemaType::from_str("object").unwrap(), SchemaType::Object);
        assert!(SchemaType::from_str("null").is_err());
    }

    #[test]
    fn test_of_value() {
        assert_eq!(SchemaType::of_value(&json!(1)), Some(SchemaType::Integer));
        assert_eq!(SchemaType::of_value(&json!(1.5)), Some(SchemaType::Number));
        assert_eq!(SchemaType::of_value(&json!("a")), Some(SchemaType::String));
        assert_eq!(SchemaType::of_value(&json!([1])), Some(SchemaType::Array));
        assert_eq!(SchemaType::of_value(&json!({})), Some(SchemaType::Object));
        assert_eq!(SchemaType::of_value(&json!(true)), Some(SchemaType::Boolean));
        assert_eq!(SchemaType::of_value(&json!(null)), None);
    }

    #[test]
    fn test_serde_name() {
        assert_eq!(serde_json::to_value(SchemaType::Boolean).unwrap(), json!("boolean"));
    }
}
