//! Annotation copying.
//!
//! Inputs to the composers are heterogeneous: some can report annotations,
//! most cannot. [`SourceElement::as_annotated`] is the capability probe; a
//! candidate without the capability yields no annotations rather than an
//! error. This tolerance is specific to copying and is not applied to any
//! other validation path.

use std::{fmt, sync::Arc};

use tracing::trace;

use crate::spec::{AnnotationSpec, FieldDescription, FieldSpec, MethodSpec, ParamSpec, TypeRef};

/// An element that carries annotations.
pub trait AnnotatedElement {
    /// Annotations in declaration order.
    fn annotations(&self) -> &[AnnotationSpec];
}

/// Any value that may be offered to the annotation copier.
///
/// The default implementation reports no annotation capability.
pub trait SourceElement {
    /// Downcast to the annotated-element capability, if supported.
    fn as_annotated(&self) -> Option<&dyn AnnotatedElement> {
        None
    }
}

/// Predicate deciding which annotations are copied.
#[derive(Clone)]
pub struct AnnotationFilter(Arc<dyn Fn(&AnnotationSpec) -> bool + Send + Sync>);

impl AnnotationFilter {
    /// Wrap a predicate.
    pub fn new(predicate: impl Fn(&AnnotationSpec) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    /// Only copy annotations whose type is in `type_names`.
    pub fn only<I, S>(type_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = type_names.into_iter().map(Into::into).collect();
        Self::new(move |a| names.iter().any(|n| *n == a.type_name))
    }

    /// Copy everything except annotations whose type is in `type_names`.
    pub fn except<I, S>(type_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = type_names.into_iter().map(Into::into).collect();
        Self::new(move |a| names.iter().all(|n| *n != a.type_name))
    }

    /// Evaluate the predicate.
    pub fn accepts(&self, annotation: &AnnotationSpec) -> bool {
        (self.0)(annotation)
    }
}

impl Default for AnnotationFilter {
    fn default() -> Self {
        Self::new(accept_all)
    }
}

impl fmt::Debug for AnnotationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnnotationFilter").finish_non_exhaustive()
    }
}

/// The default filter: every annotation is copied.
pub fn accept_all(_: &AnnotationSpec) -> bool {
    true
}

/// Copy the annotations of `candidate` that pass `filter`, in source order.
///
/// Returns an empty list when `candidate` cannot report annotations.
pub fn copy_annotations<C, F>(candidate: &C, filter: F) -> Vec<AnnotationSpec>
where
    C: SourceElement + ?Sized,
    F: Fn(&AnnotationSpec) -> bool,
{
    let Some(element) = candidate.as_annotated() else {
        trace!("candidate is not an annotated element, nothing to copy");
        return Vec::new();
    };

    let source = element.annotations();
    let copied: Vec<AnnotationSpec> = source.iter().filter(|&a| filter(a)).cloned().collect();
    trace!(
        kept = copied.len(),
        dropped = source.len() - copied.len(),
        "copied annotations"
    );
    copied
}

impl AnnotatedElement for MethodSpec {
    fn annotations(&self) -> &[AnnotationSpec] {
        MethodSpec::annotations(self)
    }
}

impl AnnotatedElement for FieldSpec {
    fn annotations(&self) -> &[AnnotationSpec] {
        &self.annotations
    }
}

impl AnnotatedElement for ParamSpec {
    fn annotations(&self) -> &[AnnotationSpec] {
        &self.annotations
    }
}

impl AnnotatedElement for Vec<AnnotationSpec> {
    fn annotations(&self) -> &[AnnotationSpec] {
        self
    }
}

impl SourceElement for MethodSpec {
    fn as_annotated(&self) -> Option<&dyn AnnotatedElement> {
        Some(self)
    }
}

impl SourceElement for FieldSpec {
    fn as_annotated(&self) -> Option<&dyn AnnotatedElement> {
        Some(self)
    }
}

impl SourceElement for ParamSpec {
    fn as_annotated(&self) -> Option<&dyn AnnotatedElement> {
        Some(self)
    }
}

impl SourceElement for Vec<AnnotationSpec> {
    fn as_annotated(&self) -> Option<&dyn AnnotatedElement> {
        Some(self)
    }
}

impl SourceElement for FieldDescription {}
impl SourceElement for TypeRef {}
impl SourceElement for str {}
impl SourceElement for String {}
