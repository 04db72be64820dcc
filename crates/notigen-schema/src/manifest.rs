use crate::prelude::*;

///
/// MemberSource
/// Per-container view of pre-existing event members, supplied by the
/// discovery collaborator alongside the field sequence.
///

pub trait MemberSource {
    fn events(&self, container: &ContainerKey) -> &[EventMember];
}

///
/// Manifest
/// Serializable input for one generation pass: every annotated class with
/// its pre-existing events and annotated fields, in source order.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Manifest {
    pub classes: Vec<ClassDecl>,
}

impl Manifest {
    /// Flatten to the engine's field sequence, preserving class order and
    /// in-class field order.
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        self.classes
            .iter()
            .flat_map(|class| {
                let key = class.key();
                class.fields.iter().map(move |field| field.to_field(&key))
            })
            .collect()
    }
}

impl MemberSource for Manifest {
    fn events(&self, container: &ContainerKey) -> &[EventMember] {
        self.classes
            .iter()
            .find(|class| class.key() == *container)
            .map_or(&[], |class| class.events.as_slice())
    }
}

///
/// ClassDecl
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ClassDecl {
    pub namespace: String,
    pub ident: String,

    /// True for types nested inside another type rather than declared
    /// directly in a namespace.
    #[serde(default)]
    pub nested: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventMember>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDecl>,
}

impl ClassDecl {
    #[must_use]
    pub fn key(&self) -> ContainerKey {
        ContainerKey {
            namespace: self.namespace.clone(),
            ident: self.ident.clone(),
            namespace_child: !self.nested,
        }
    }
}

///
/// FieldDecl
/// A field as written in the manifest; `to_field` attaches the owning
/// container key.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FieldDecl {
    pub ident: String,
    pub ty: String,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default)]
    pub is_readonly: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocComment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl FieldDecl {
    #[must_use]
    pub fn to_field(&self, container: &ContainerKey) -> Field {
        Field {
            ident: self.ident.clone(),
            ty: self.ty.clone(),
            is_static: self.is_static,
            is_readonly: self.is_readonly,
            doc: self.doc.clone(),
            property_name: self.property_name.clone(),
            container: container.clone(),
            location: self.location.clone(),
        }
    }
}
