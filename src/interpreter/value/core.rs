use glam::Vec3;

use crate::interpreter::value::kind::ValueKind;

/// Represents a runtime value in the interpreter.
///
/// Every definition in a properties file evaluates to exactly one of these.
/// Values are plain data and are cloned freely.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string, taken verbatim from between the quotes of its literal.
    String(String),
    /// A vector built with `{ x, y, z }`.
    Vec3(Vec3),
    /// A single-precision float.
    Float(f32),
    /// A boolean value (`true` or `false`).
    Bool(bool),
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Vec3> for Value {
    fn from(v: Vec3) -> Self {
        Self::Vec3(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Returns the kind tag of the value.
    ///
    /// # Example
    /// ```
    /// use hotprops::interpreter::value::{core::Value, kind::ValueKind};
    ///
    /// assert_eq!(Value::from(1.5_f32).kind(), ValueKind::Float);
    /// assert_eq!(Value::from("demo").kind(), ValueKind::String);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Vec3(_) => ValueKind::Vec3,
            Self::Float(_) => ValueKind::Float,
            Self::Bool(_) => ValueKind::Bool,
        }
    }

    /// Returns the string if the value is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the vector if the value is one.
    #[must_use]
    pub const fn as_vec3(&self) -> Option<Vec3> {
        match self {
            Self::Vec3(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the float if the value is one.
    #[must_use]
    pub const fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the bool if the value is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Vec3(v) => write!(f, "{}, {}, {}", v.x, v.y, v.z),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
