//! Member descriptors: fields, parameters and methods.

use memberspec_core::{Argument, Error, Modifier, ModifierSet, NamedField};
use serde::{Deserialize, Serialize};

use super::{
    annotation::AnnotationSpec,
    code::{Body, DocLine, Documentation, Template},
    types::TypeRef,
};

/// A field to generate accessors for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescription {
    /// Field name.
    pub name: String,
    /// Field type.
    pub ty: TypeRef,
}

impl FieldDescription {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl NamedField for FieldDescription {
    fn field_name(&self) -> &str {
        &self.name
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TypeRef,
    /// Parameter modifiers (only `final` is meaningful).
    pub modifiers: ModifierSet,
    /// Annotations on the parameter.
    pub annotations: Vec<AnnotationSpec>,
}

impl ParamSpec {
    /// Create a parameter with no modifiers.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: ModifierSet::new(),
            annotations: Vec::new(),
        }
    }

    /// Add a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Add an annotation.
    pub fn annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }
}

impl NamedField for ParamSpec {
    fn field_name(&self) -> &str {
        &self.name
    }
}

/// A generated field declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name.
    pub name: String,
    /// Field type.
    pub ty: TypeRef,
    /// Field modifiers.
    pub modifiers: ModifierSet,
    /// Annotations on the field.
    pub annotations: Vec<AnnotationSpec>,
}

impl NamedField for FieldSpec {
    fn field_name(&self) -> &str {
        &self.name
    }
}

/// A finalized method declaration.
///
/// Built through [`MethodSpecBuilder`], which is only handed out by the
/// validating composer in [`crate::members`], or deserialized with the same
/// name check. A `MethodSpec` therefore always has a non-empty name and a
/// body (possibly with no statements). Use [`to_builder`](Self::to_builder)
/// to derive a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MethodSpecData")]
pub struct MethodSpec {
    name: String,
    doc: Option<Documentation>,
    modifiers: ModifierSet,
    return_type: Option<TypeRef>,
    annotations: Vec<AnnotationSpec>,
    exceptions: Vec<TypeRef>,
    params: Vec<ParamSpec>,
    body: Body,
}

impl MethodSpec {
    /// Method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> Option<&Documentation> {
        self.doc.as_ref()
    }

    pub fn modifiers(&self) -> &ModifierSet {
        &self.modifiers
    }

    /// Return type (None for void).
    pub fn return_type(&self) -> Option<&TypeRef> {
        self.return_type.as_ref()
    }

    pub fn annotations(&self) -> &[AnnotationSpec] {
        &self.annotations
    }

    /// Declared thrown exceptions.
    pub fn exceptions(&self) -> &[TypeRef] {
        &self.exceptions
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Reopen this method as a builder to derive a variant of it.
    pub fn to_builder(&self) -> MethodSpecBuilder {
        MethodSpecBuilder { spec: self.clone() }
    }

    /// Check if the method returns a value.
    pub fn is_void(&self) -> bool {
        self.return_type.is_none()
    }
}

/// Unchecked wire form of a [`MethodSpec`].
#[derive(Deserialize)]
struct MethodSpecData {
    name: String,
    doc: Option<Documentation>,
    modifiers: ModifierSet,
    return_type: Option<TypeRef>,
    annotations: Vec<AnnotationSpec>,
    exceptions: Vec<TypeRef>,
    params: Vec<ParamSpec>,
    body: Body,
}

impl TryFrom<MethodSpecData> for MethodSpec {
    type Error = Error;

    fn try_from(data: MethodSpecData) -> Result<Self, Self::Error> {
        if data.name.is_empty() {
            return Err(Error::InvalidArgument(Argument::MethodName));
        }
        Ok(Self {
            name: data.name,
            doc: data.doc,
            modifiers: data.modifiers,
            return_type: data.return_type,
            annotations: data.annotations,
            exceptions: data.exceptions,
            params: data.params,
            body: data.body,
        })
    }
}

/// Mutable accumulator for a [`MethodSpec`].
///
/// Holds an already-validated name and body; every further facet is
/// optional. Call [`build`](Self::build) to finalize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpecBuilder {
    spec: MethodSpec,
}

impl MethodSpecBuilder {
    pub(crate) fn new(name: String, body: Body) -> Self {
        Self {
            spec: MethodSpec {
                name,
                doc: None,
                modifiers: ModifierSet::new(),
                return_type: None,
                annotations: Vec::new(),
                exceptions: Vec::new(),
                params: Vec::new(),
                body,
            },
        }
    }

    /// The method name.
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// The modifiers accumulated so far.
    pub fn modifiers(&self) -> &ModifierSet {
        &self.spec.modifiers
    }

    /// Append documentation lines.
    pub fn doc(mut self, doc: Documentation) -> Self {
        let lines = self.spec.doc.get_or_insert_with(Documentation::new);
        for line in doc.lines() {
            lines.push(line.clone());
        }
        self
    }

    /// Append a single documentation line.
    pub fn doc_line(mut self, line: DocLine) -> Self {
        self.spec
            .doc
            .get_or_insert_with(Documentation::new)
            .push(line);
        self
    }

    /// Add a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.spec.modifiers.insert(modifier);
        self
    }

    /// Add multiple modifiers.
    pub fn modifiers_from(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.spec.modifiers.extend(modifiers);
        self
    }

    /// Replace the visibility (public, protected or private).
    pub fn access(mut self, access: Modifier) -> Self {
        self.spec.modifiers.set_access(access);
        self
    }

    /// Set the return type.
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.spec.return_type = Some(ty);
        self
    }

    /// Add an annotation.
    pub fn annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.spec.annotations.push(annotation);
        self
    }

    /// Add multiple annotations.
    pub fn annotations(mut self, annotations: impl IntoIterator<Item = AnnotationSpec>) -> Self {
        self.spec.annotations.extend(annotations);
        self
    }

    /// Declare a thrown exception.
    pub fn exception(mut self, ty: TypeRef) -> Self {
        self.spec.exceptions.push(ty);
        self
    }

    /// Declare multiple thrown exceptions.
    pub fn exceptions(mut self, types: impl IntoIterator<Item = TypeRef>) -> Self {
        self.spec.exceptions.extend(types);
        self
    }

    /// Add a parameter.
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.spec.params.push(param);
        self
    }

    /// Add multiple parameters.
    pub fn params(mut self, params: impl IntoIterator<Item = ParamSpec>) -> Self {
        self.spec.params.extend(params);
        self
    }

    /// Append a statement to the body.
    pub fn statement(mut self, stmt: Template) -> Self {
        self.spec.body.push(stmt);
        self
    }

    /// Finalize into an immutable descriptor.
    pub fn build(self) -> MethodSpec {
        self.spec
    }
}

impl From<MethodSpecBuilder> for MethodSpec {
    fn from(builder: MethodSpecBuilder) -> Self {
        builder.build()
    }
}
