//! Type references.
//!
//! The composers never look inside a [`TypeRef`]; they only pass it through
//! to the descriptors. The variants exist so hosts and renderers can agree
//! on what a type is.

use serde::{Deserialize, Serialize};

/// A reference to a type in the target type system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// A primitive type (int, boolean, etc.).
    Primitive(PrimitiveType),
    /// A named class or interface, usually fully qualified
    /// (e.g., "java.lang.String").
    Named(String),
    /// An array of the inner type.
    Array(Box<TypeRef>),
    /// A parameterized type (e.g., `java.util.List<java.lang.String>`).
    Generic {
        /// Raw type name.
        base: String,
        /// Type arguments.
        args: Vec<TypeRef>,
    },
    /// A type variable (e.g., `T`).
    Variable(String),
}

impl TypeRef {
    /// Create a primitive type reference.
    pub fn primitive(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }

    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create an array type reference.
    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Create a parameterized type reference.
    pub fn generic(base: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self::Generic {
            base: base.into(),
            args,
        }
    }

    /// Create a type variable reference.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Convenience: `java.lang.String`.
    pub fn string() -> Self {
        Self::named("java.lang.String")
    }

    /// Convenience: `java.lang.Object`.
    pub fn object() -> Self {
        Self::named("java.lang.Object")
    }

    /// Convenience: `int`.
    pub fn int() -> Self {
        Self::Primitive(PrimitiveType::Int)
    }

    /// Convenience: `long`.
    pub fn long() -> Self {
        Self::Primitive(PrimitiveType::Long)
    }

    /// Convenience: `boolean`.
    pub fn boolean() -> Self {
        Self::Primitive(PrimitiveType::Boolean)
    }

    /// Convenience: `double`.
    pub fn double() -> Self {
        Self::Primitive(PrimitiveType::Double)
    }

    /// Check if this is a primitive type.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Get the element type of an array.
    ///
    /// Returns `None` for non-array types.
    pub fn component_type(&self) -> Option<&TypeRef> {
        match self {
            Self::Array(inner) => Some(inner),
            _ => None,
        }
    }
}

/// Primitive types of the target type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveType {
    /// Get the keyword for this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}
