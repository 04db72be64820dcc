//! Synthesis results: property plans, generated units, and the output of
//! a full generation pass.

use crate::{format, render};
use notigen_schema::prelude::*;

///
/// PropertyPlan
/// One accepted field, resolved and ready to render.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyPlan {
    pub final_name: String,

    /// Originating backing field; never renamed, only wrapped.
    pub field_ident: String,
    pub ty: String,
    pub qualifier: Qualifier,

    /// Rewritten documentation lines, already `///`-prefixed.
    pub doc: Vec<String>,
}

impl PropertyPlan {
    /// Storage reference as it appears in the accessors.
    #[must_use]
    pub fn access(&self) -> String {
        match self.qualifier {
            Qualifier::InstanceQualified => format!("this.{}", self.field_ident),
            Qualifier::Unqualified => self.field_ident.clone(),
        }
    }
}

///
/// GeneratedUnit
/// One generated partial-type body per containing type: event scaffolding
/// plus the synthesized properties in input order.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedUnit {
    pub namespace: String,
    pub type_name: String,
    pub emit_changing: bool,
    pub emit_changed: bool,
    pub properties: Vec<PropertyPlan>,
}

impl GeneratedUnit {
    /// Output filename for the unit, fixed suffix included.
    #[must_use]
    pub fn filename(&self) -> String {
        format!("{}.generated.cs", self.type_name)
    }
}

///
/// GeneratedFile
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedFile {
    pub name: String,
    pub source: String,
}

///
/// Expansion
/// Result of one generation pass: units in first-seen container order and
/// the accumulated diagnostics.
///

#[derive(Clone, Debug, Default)]
pub struct Expansion {
    pub units: Vec<GeneratedUnit>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Expansion {
    /// Render and format every unit.
    #[must_use]
    pub fn files(&self) -> Vec<GeneratedFile> {
        self.units
            .iter()
            .map(|unit| GeneratedFile {
                name: unit.filename(),
                source: format::format_source(&render::render_unit(unit)),
            })
            .collect()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == Severity::Error)
    }
}
