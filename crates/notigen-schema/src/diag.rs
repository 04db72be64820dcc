use crate::prelude::*;
use derive_more::Display;
use thiserror::Error as ThisError;

///
/// Severity
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

///
/// DiagnosticCode
/// Stable codes, one per rejection kind. The numbering is part of the
/// tool's public surface and must not be reshuffled.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum DiagnosticCode {
    #[display("NTGN001")]
    FieldIsReadonly,

    #[display("NTGN002")]
    NoSuitablePropertyName,

    #[display("NTGN003")]
    UnsupportedContainer,
}

///
/// Diagnostic
/// A non-fatal, field- or group-scoped finding. Accumulated and returned
/// alongside generated output, never raised as control flow.
///

#[derive(Clone, Debug, Deserialize, Serialize, ThisError)]
#[error("{code}: {message}")]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    fn new(code: DiagnosticCode, message: String, location: Option<SourceLocation>) -> Self {
        Self {
            code,
            severity: Severity::Error,
            message,
            location,
        }
    }

    #[must_use]
    pub fn field_is_readonly(field: &str, location: Option<SourceLocation>) -> Self {
        Self::new(
            DiagnosticCode::FieldIsReadonly,
            format!("readonly field {field} is not supported"),
            location,
        )
    }

    #[must_use]
    pub fn no_suitable_property_name(field: &str, location: Option<SourceLocation>) -> Self {
        Self::new(
            DiagnosticCode::NoSuitablePropertyName,
            format!("cannot find suitable property name for field {field}"),
            location,
        )
    }

    #[must_use]
    pub fn unsupported_container(container: &ContainerKey, location: Option<SourceLocation>) -> Self {
        Self::new(
            DiagnosticCode::UnsupportedContainer,
            format!(
                "type {} must be declared directly inside a namespace",
                container.qualified()
            ),
            location,
        )
    }
}
