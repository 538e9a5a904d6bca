use std::fmt;

/// The kind of a runtime [`Value`](super::core::Value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A string.
    String,
    /// A three-component float vector.
    Vec3,
    /// A single-precision float.
    Float,
    /// A boolean.
    Bool,
}

const NAMES: [&str; 4] = ["std::string", "glm::vec3", "float", "bool"];

impl ValueKind {
    /// Returns the readable name of the kind, spelled as its type tag.
    ///
    /// # Example
    /// ```
    /// use hotprops::interpreter::value::kind::ValueKind;
    ///
    /// assert_eq!(ValueKind::Vec3.name(), "glm::vec3");
    /// assert_eq!(ValueKind::Float.to_string(), "float");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
