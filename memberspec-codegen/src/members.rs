//! Member composition.
//!
//! Every method descriptor passes through [`MemberSpecs::method_builder`],
//! which owns the structural validation (non-empty name, present body).
//! Getters and setters validate their field, then delegate to it.

use memberspec_core::{
    Argument, Error, Modifier, ModifierSet, NamedField, Result, accessor_name_for,
};
use tracing::debug;

use crate::{
    annotations::{AnnotationFilter, SourceElement, copy_annotations},
    bodies::{getter_body, getter_doc, setter_body, setter_doc},
    config::Conventions,
    spec::{
        AnnotationSpec, Body, Documentation, FieldSpec, MethodSpec, MethodSpecBuilder, ParamSpec,
        TypeRef,
    },
};

/// The discrete pieces of a method, each of which may be absent.
///
/// Absent facets are omitted from the descriptor: no return type means
/// void, no modifiers means none asserted. Only `name` and `body` are
/// required, and they are checked by [`MemberSpecs::method_builder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodParts {
    pub doc: Option<Documentation>,
    pub name: Option<String>,
    pub modifiers: Option<ModifierSet>,
    pub return_type: Option<TypeRef>,
    pub annotations: Option<Vec<AnnotationSpec>>,
    pub exceptions: Option<Vec<TypeRef>>,
    pub params: Option<Vec<ParamSpec>>,
    pub body: Option<Body>,
}

impl MethodParts {
    /// Create parts with every facet absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create parts with a method name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn doc(mut self, doc: Documentation) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn modifiers(mut self, modifiers: impl Into<ModifierSet>) -> Self {
        self.modifiers = Some(modifiers.into());
        self
    }

    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn annotations(mut self, annotations: Vec<AnnotationSpec>) -> Self {
        self.annotations = Some(annotations);
        self
    }

    pub fn exceptions(mut self, exceptions: Vec<TypeRef>) -> Self {
        self.exceptions = Some(exceptions);
        self
    }

    pub fn params(mut self, params: Vec<ParamSpec>) -> Self {
        self.params = Some(params);
        self
    }

    pub fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }
}

/// Composer for field, getter, setter and general method descriptors.
///
/// Holds only immutable conventions and the annotation filter, so one
/// instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct MemberSpecs {
    conventions: Conventions,
    annotation_filter: AnnotationFilter,
}

impl MemberSpecs {
    /// Create a composer with the default conventions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a composer with custom conventions.
    pub fn with_conventions(conventions: Conventions) -> Self {
        Self {
            conventions,
            annotation_filter: AnnotationFilter::default(),
        }
    }

    /// Replace the filter used by [`copy_annotations`](Self::copy_annotations).
    pub fn with_annotation_filter(mut self, filter: AnnotationFilter) -> Self {
        self.annotation_filter = filter;
        self
    }

    /// The conventions in effect.
    pub fn conventions(&self) -> &Conventions {
        &self.conventions
    }

    /// Assemble a method builder from parts.
    ///
    /// Fails with `InvalidArgument(MethodName)` if the name is absent or
    /// empty, and `InvalidArgument(MethodBody)` if the body is absent.
    pub fn method_builder(&self, parts: MethodParts) -> Result<MethodSpecBuilder> {
        let name = match parts.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(Error::InvalidArgument(Argument::MethodName)),
        };
        let body = parts.body.ok_or(Error::InvalidArgument(Argument::MethodBody))?;
        let param_count = parts.params.as_ref().map_or(0, Vec::len);
        let annotation_count = parts.annotations.as_ref().map_or(0, Vec::len);

        let mut builder = MethodSpecBuilder::new(name, body);
        if let Some(doc) = parts.doc {
            builder = builder.doc(doc);
        }
        if let Some(modifiers) = parts.modifiers {
            builder = builder.modifiers_from(&modifiers);
        }
        if let Some(ty) = parts.return_type {
            builder = builder.returns(ty);
        }
        if let Some(annotations) = parts.annotations {
            builder = builder.annotations(annotations);
        }
        if let Some(exceptions) = parts.exceptions {
            builder = builder.exceptions(exceptions);
        }
        if let Some(params) = parts.params {
            builder = builder.params(params);
        }

        debug!(
            method = builder.name(),
            params = param_count,
            annotations = annotation_count,
            "assembled method descriptor"
        );
        Ok(builder)
    }

    /// Assemble a finalized method from parts.
    pub fn method(&self, parts: MethodParts) -> Result<MethodSpec> {
        self.method_builder(parts).map(MethodSpecBuilder::build)
    }

    /// Getter builder for a field: `public T getX() { return this.x; }`.
    ///
    /// Fails with `InvalidArgument(Field)` if the field name is empty or the
    /// type is absent.
    pub fn getter_builder<F>(
        &self,
        field: &F,
        field_type: impl Into<Option<TypeRef>>,
    ) -> Result<MethodSpecBuilder>
    where
        F: NamedField + ?Sized,
    {
        let (field_name, field_type) = validate_field(field, field_type.into())?;

        let parts = MethodParts {
            doc: self.documentation(|| getter_doc(field_name)),
            name: Some(self.getter_name(field_name)?),
            modifiers: Some(self.conventions.accessor_modifiers().clone()),
            return_type: Some(field_type),
            annotations: None,
            exceptions: None,
            params: None,
            body: Some(getter_body(field_name)),
        };
        self.method_builder(parts)
    }

    /// Finalized getter for a field.
    pub fn getter<F>(&self, field: &F, field_type: impl Into<Option<TypeRef>>) -> Result<MethodSpec>
    where
        F: NamedField + ?Sized,
    {
        self.getter_builder(field, field_type).map(MethodSpecBuilder::build)
    }

    /// Setter builder for a field: `public void setX(final T x) { this.x = x; }`.
    ///
    /// Fails with `InvalidArgument(Field)` if the field name is empty or the
    /// type is absent.
    pub fn setter_builder<F>(
        &self,
        field: &F,
        field_type: impl Into<Option<TypeRef>>,
    ) -> Result<MethodSpecBuilder>
    where
        F: NamedField + ?Sized,
    {
        let params = self.setter_parameters(field, field_type)?;
        let field_name = field.field_name();

        let parts = MethodParts {
            doc: self.documentation(|| setter_doc(field_name)),
            name: Some(self.setter_name(field_name)?),
            modifiers: Some(self.conventions.accessor_modifiers().clone()),
            return_type: None,
            annotations: None,
            exceptions: None,
            params: Some(params),
            body: Some(setter_body(field_name)),
        };
        self.method_builder(parts)
    }

    /// Finalized setter for a field.
    pub fn setter<F>(&self, field: &F, field_type: impl Into<Option<TypeRef>>) -> Result<MethodSpec>
    where
        F: NamedField + ?Sized,
    {
        self.setter_builder(field, field_type).map(MethodSpecBuilder::build)
    }

    /// The single parameter of a setter, named after the field.
    ///
    /// Fails with `InvalidArgument(Field)` under the same rules as
    /// [`setter`](Self::setter).
    pub fn setter_parameters<F>(
        &self,
        field: &F,
        field_type: impl Into<Option<TypeRef>>,
    ) -> Result<Vec<ParamSpec>>
    where
        F: NamedField + ?Sized,
    {
        let (field_name, field_type) = validate_field(field, field_type.into())?;
        let param = self
            .conventions
            .setter_parameter_modifiers()
            .iter()
            .fold(ParamSpec::new(field_name, field_type), ParamSpec::modifier);
        Ok(vec![param])
    }

    /// Getter name under the current conventions.
    pub fn getter_name<F: NamedField + ?Sized>(&self, field: &F) -> Result<String> {
        accessor_name_for(self.conventions.getter_prefix(), field)
    }

    /// Setter name under the current conventions.
    pub fn setter_name<F: NamedField + ?Sized>(&self, field: &F) -> Result<String> {
        accessor_name_for(self.conventions.setter_prefix(), field)
    }

    /// Field declaration. Inputs are propagated as given.
    pub fn field(
        &self,
        name: impl Into<String>,
        ty: TypeRef,
        modifiers: impl IntoIterator<Item = Modifier>,
        annotations: impl IntoIterator<Item = AnnotationSpec>,
    ) -> FieldSpec {
        let spec = FieldSpec {
            name: name.into(),
            ty,
            modifiers: modifiers.into_iter().collect(),
            annotations: annotations.into_iter().collect(),
        };
        debug!(field = %spec.name, "assembled field descriptor");
        spec
    }

    /// Copy annotations from `candidate` through this composer's filter.
    pub fn copy_annotations<C>(&self, candidate: &C) -> Vec<AnnotationSpec>
    where
        C: SourceElement + ?Sized,
    {
        copy_annotations(candidate, |a: &AnnotationSpec| self.annotation_filter.accepts(a))
    }

    fn documentation(&self, doc: impl FnOnce() -> Documentation) -> Option<Documentation> {
        self.conventions.documentation().then(doc)
    }
}

fn validate_field<F: NamedField + ?Sized>(
    field: &F,
    field_type: Option<TypeRef>,
) -> Result<(&str, TypeRef)> {
    let name = field.field_name();
    if name.is_empty() {
        return Err(Error::InvalidArgument(Argument::Field));
    }
    let ty = field_type.ok_or(Error::InvalidArgument(Argument::Field))?;
    Ok((name, ty))
}
