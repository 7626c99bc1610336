//! Renderer seam.
//!
//! This crate defines no output syntax. A host turns descriptors into
//! source text by implementing [`MemberRenderer`] for its target language.

use memberspec_core::ModifierSet;

use crate::spec::{AnnotationSpec, FieldSpec, MethodSpec, ParamSpec, TypeRef};

/// Trait for rendering member descriptors to language-specific code.
pub trait MemberRenderer {
    /// Render a type reference.
    fn render_type(&self, ty: &TypeRef) -> String;

    /// Render an annotation.
    fn render_annotation(&self, spec: &AnnotationSpec) -> String;

    /// Render a parameter.
    fn render_param(&self, spec: &ParamSpec) -> String;

    /// Render a field declaration.
    fn render_field(&self, spec: &FieldSpec) -> String;

    /// Render a method declaration, including documentation and body.
    fn render_method(&self, spec: &MethodSpec) -> String;

    /// Render modifiers as space-separated keywords in stored order.
    fn render_modifiers(&self, modifiers: &ModifierSet) -> String {
        modifiers
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
