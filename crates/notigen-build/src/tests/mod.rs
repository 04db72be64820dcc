//! Engine-level suites: full generation scenarios and resolver
//! properties.

mod resolver_property;

use notigen_schema::prelude::*;

pub(crate) fn field(ident: &str, ty: &str) -> FieldDecl {
    FieldDecl {
        ident: ident.to_string(),
        ty: ty.to_string(),
        is_static: false,
        is_readonly: false,
        doc: None,
        property_name: None,
        location: None,
    }
}

pub(crate) fn class(ident: &str, fields: Vec<FieldDecl>) -> ClassDecl {
    ClassDecl {
        namespace: "UnitTest".to_string(),
        ident: ident.to_string(),
        nested: false,
        events: Vec::new(),
        fields,
    }
}

pub(crate) fn manifest(classes: Vec<ClassDecl>) -> Manifest {
    Manifest { classes }
}
