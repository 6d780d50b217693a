use coyote_syntax::FieldType;
use indexmap::IndexMap;

static ABSENT: Value = Value::Absent;

/// Input data decoded into the shapes the validator distinguishes.
///
/// JSON `null` decodes to [`Value::Absent`]: a null field counts as not
/// passed. Object keys keep their input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Absent,
    String(String),
    Number(f64),
    Boolean(bool),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Runtime type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Absent => "undefined",
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Member lookup; missing keys and non-objects yield [`Value::Absent`].
    pub fn get(&self, key: &str) -> &Value {
        match self {
            Self::Object(map) => map.get(key).unwrap_or(&ABSENT),
            _ => &ABSENT,
        }
    }

    /// Keys of an object in input order; empty for every other shape.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let map = match self {
            Self::Object(map) => Some(map),
            _ => None,
        };
        map.into_iter().flat_map(|map| map.keys().map(String::as_str))
    }

    /// Whether this value has the declared type. Arrays require every element
    /// to have the element type.
    pub fn conforms_to(&self, field_type: FieldType) -> bool {
        match (field_type, self) {
            (FieldType::String, Self::String(_))
            | (FieldType::Number, Self::Number(_))
            | (FieldType::Boolean, Self::Boolean(_))
            | (FieldType::Object, Self::Object(_)) => true,
            (
                FieldType::StringArray | FieldType::NumberArray | FieldType::BooleanArray,
                Self::Array(items),
            ) => field_type
                .element()
                .is_some_and(|element| items.iter().all(|item| item.conforms_to(element))),
            _ => false,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Absent,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Self::from(value.clone())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
