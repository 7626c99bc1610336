use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An annotation on a generated member or parameter.
///
/// Member values are kept as literal code (e.g., `"\"first_name\""`, `42`,
/// `FetchType.LAZY`) in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSpec {
    /// Annotation type, usually fully qualified (e.g., "javax.annotation.Nonnull").
    pub type_name: String,
    /// Named members and their values.
    pub members: IndexMap<String, Vec<String>>,
}

impl AnnotationSpec {
    /// Create a marker annotation with no members.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            members: IndexMap::new(),
        }
    }

    /// Add a value to a named member. Repeated calls build an array value.
    pub fn member(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.members
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Add a value to the `value` member.
    pub fn value(self, value: impl Into<String>) -> Self {
        self.member("value", value)
    }

    /// Check if this annotation has no members.
    pub fn is_marker(&self) -> bool {
        self.members.is_empty()
    }

    /// Simple name of the annotation type (the part after the last `.`).
    pub fn simple_name(&self) -> &str {
        self.type_name
            .rsplit_once('.')
            .map_or(self.type_name.as_str(), |(_, name)| name)
    }
}
