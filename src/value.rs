use serde::{Deserialize, Serialize};

/// The scalar shapes an extensible attribute can hold.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ScalarKind {
    Integer,
    Double,
    Byte,
    String,
    Boolean,
}

/// A data kind is a scalar or an ordered list of one scalar kind. No other
/// shape is ever stored on a token.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DataKind {
    Scalar(ScalarKind),
    List(ScalarKind),
}

impl DataKind {
    /// ```
    /// use tokenext::value::DataKind;
    ///
    /// for tag in ["integer", "double", "byte", "string", "boolean"] {
    ///     let scalar = DataKind::from_tag(tag).unwrap();
    ///     let list = DataKind::from_tag(&format!("[{}]", tag)).unwrap();
    ///     assert_eq!(Some(scalar), DataKind::from_tag(scalar.tag()));
    ///     assert_eq!(Some(list), DataKind::from_tag(list.tag()));
    /// }
    /// assert_eq!(None, DataKind::from_tag("float"));
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "integer" => Some(Self::Scalar(ScalarKind::Integer)),
            "double" => Some(Self::Scalar(ScalarKind::Double)),
            "byte" => Some(Self::Scalar(ScalarKind::Byte)),
            "string" => Some(Self::Scalar(ScalarKind::String)),
            "boolean" => Some(Self::Scalar(ScalarKind::Boolean)),
            "[integer]" => Some(Self::List(ScalarKind::Integer)),
            "[double]" => Some(Self::List(ScalarKind::Double)),
            "[byte]" => Some(Self::List(ScalarKind::Byte)),
            "[string]" => Some(Self::List(ScalarKind::String)),
            "[boolean]" => Some(Self::List(ScalarKind::Boolean)),
            _ => None,
        }
    }

    /// The tag under which this kind appears in the schema document.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Scalar(ScalarKind::Integer) => "integer",
            Self::Scalar(ScalarKind::Double) => "double",
            Self::Scalar(ScalarKind::Byte) => "byte",
            Self::Scalar(ScalarKind::String) => "string",
            Self::Scalar(ScalarKind::Boolean) => "boolean",
            Self::List(ScalarKind::Integer) => "[integer]",
            Self::List(ScalarKind::Double) => "[double]",
            Self::List(ScalarKind::Byte) => "[byte]",
            Self::List(ScalarKind::String) => "[string]",
            Self::List(ScalarKind::Boolean) => "[boolean]",
        }
    }
}

/// A stored attribute value. Exactly one variant per data kind, so codec
/// dispatch is an exhaustive match instead of a runtime type probe.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Value {
    Integer(i64),
    Double(f64),
    Byte(i8),
    Str(String),
    Boolean(bool),
    Integers(Vec<i64>),
    Doubles(Vec<f64>),
    Bytes(Vec<i8>),
    Strs(Vec<String>),
    Booleans(Vec<bool>),
}

impl Value {
    pub fn str(str: &str) -> Self {
        Self::Str(String::from(str))
    }
}

impl From<&Value> for DataKind {
    /// ```
    /// use tokenext::value::{DataKind, ScalarKind, Value};
    ///
    /// assert_eq!(DataKind::from(&Value::Integer(42)), DataKind::Scalar(ScalarKind::Integer));
    /// assert_eq!(DataKind::from(&Value::Strs(vec![])), DataKind::List(ScalarKind::String));
    /// ```
    fn from(value: &Value) -> Self {
        match value {
            Value::Integer(_) => Self::Scalar(ScalarKind::Integer),
            Value::Double(_) => Self::Scalar(ScalarKind::Double),
            Value::Byte(_) => Self::Scalar(ScalarKind::Byte),
            Value::Str(_) => Self::Scalar(ScalarKind::String),
            Value::Boolean(_) => Self::Scalar(ScalarKind::Boolean),
            Value::Integers(_) => Self::List(ScalarKind::Integer),
            Value::Doubles(_) => Self::List(ScalarKind::Double),
            Value::Bytes(_) => Self::List(ScalarKind::Byte),
            Value::Strs(_) => Self::List(ScalarKind::String),
            Value::Booleans(_) => Self::List(ScalarKind::Boolean),
        }
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Self::Integer(val)
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Self::Double(val)
    }
}

impl From<i8> for Value {
    fn from(val: i8) -> Self {
        Self::Byte(val)
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Boolean(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Self::str(val)
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Self::Str(val)
    }
}

impl From<Vec<i64>> for Value {
    fn from(val: Vec<i64>) -> Self {
        Self::Integers(val)
    }
}

impl From<Vec<f64>> for Value {
    fn from(val: Vec<f64>) -> Self {
        Self::Doubles(val)
    }
}

impl From<Vec<i8>> for Value {
    fn from(val: Vec<i8>) -> Self {
        Self::Bytes(val)
    }
}

impl From<Vec<String>> for Value {
    fn from(val: Vec<String>) -> Self {
        Self::Strs(val)
    }
}

impl From<Vec<bool>> for Value {
    fn from(val: Vec<bool>) -> Self {
        Self::Booleans(val)
    }
}
