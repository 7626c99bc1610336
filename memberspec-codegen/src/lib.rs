//! Member declaration builders.
//!
//! This crate turns field metadata into descriptors for fields, getters,
//! setters and general methods. Descriptors are plain values; turning them
//! into source text is the job of a [`render::MemberRenderer`] supplied by
//! the host.
//!
//! # Module Organization
//!
//! - [`spec`] - Descriptor types (MethodSpec, FieldSpec, ParamSpec, TypeRef, etc.)
//! - [`annotations`] - Annotation copying from annotated elements
//! - [`bodies`] - Canonical accessor bodies and documentation
//! - [`members`] - The member composer (MemberSpecs, MethodParts)
//! - [`config`] - Accessor naming and modifier conventions loaded from TOML
//! - [`render`] - Renderer trait implemented outside this crate

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod annotations;
pub mod bodies;
pub mod config;
pub mod members;
pub mod render;
pub mod spec;

pub use annotations::{
    AnnotatedElement, AnnotationFilter, SourceElement, accept_all, copy_annotations,
};
pub use config::{ConfigError, Conventions, SourceContext};
pub use members::{MemberSpecs, MethodParts};
pub use memberspec_core::{
    Argument, Error, Modifier, ModifierFlags, ModifierSet, NamedField, Result, translate,
};
pub use spec::{
    AnnotationSpec, Body, DocLine, Documentation, FieldDescription, FieldSpec, MethodSpec,
    MethodSpecBuilder, ParamSpec, PrimitiveType, Template, TypeRef,
};
