//! Per-field property synthesis.

use crate::{doc, name, unit::PropertyPlan};
use notigen_schema::prelude::*;
use thiserror::Error as ThisError;

///
/// Rejection
/// Why a field yields no property. Field-scoped and non-fatal; sibling
/// fields in the same group are unaffected.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Rejection {
    #[error("cannot find suitable property name for field {field}")]
    NoSuitablePropertyName { field: String },

    #[error("readonly field {field} is not supported")]
    FieldIsReadonly { field: String },
}

impl Rejection {
    #[must_use]
    pub fn into_diagnostic(self, location: Option<SourceLocation>) -> Diagnostic {
        match self {
            Self::NoSuitablePropertyName { field } => {
                Diagnostic::no_suitable_property_name(&field, location)
            }
            Self::FieldIsReadonly { field } => Diagnostic::field_is_readonly(&field, location),
        }
    }
}

/// Synthesize the property plan for one field.
///
/// The name check runs before the readonly check, so a field failing both
/// surfaces a single deterministic rejection kind.
pub fn synthesize(field: &Field) -> Result<PropertyPlan, Rejection> {
    let final_name = name::resolve(&field.ident, field.property_name.as_deref());
    if final_name.is_empty() || final_name == field.ident {
        return Err(Rejection::NoSuitablePropertyName {
            field: field.ident.clone(),
        });
    }

    if field.is_readonly {
        return Err(Rejection::FieldIsReadonly {
            field: field.ident.clone(),
        });
    }

    let doc = field
        .doc
        .as_ref()
        .map(|block| doc::propagate(block, field, &final_name))
        .unwrap_or_default();

    Ok(PropertyPlan {
        final_name,
        field_ident: field.ident.clone(),
        ty: field.ty.clone(),
        qualifier: field.qualifier(),
        doc,
    })
}
