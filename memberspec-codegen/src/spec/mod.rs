//! Descriptor types.
//!
//! Descriptors are the output of this crate: immutable values describing a
//! source construct to be emitted.
//!
//! - [`MethodSpec`], [`FieldSpec`], [`ParamSpec`] - Member descriptors
//! - [`MethodSpecBuilder`] - Mutable accumulator finalized into a [`MethodSpec`]
//! - [`Body`], [`Documentation`], [`Template`] - Statement and doc fragments
//! - [`AnnotationSpec`] - Annotation descriptors
//! - [`TypeRef`] - Opaque type references

mod annotation;
mod code;
mod member;
mod types;

pub use annotation::AnnotationSpec;
pub use code::{Body, DocLine, Documentation, Template};
pub use member::{FieldDescription, FieldSpec, MethodSpec, MethodSpecBuilder, ParamSpec};
pub use types::{PrimitiveType, TypeRef};
