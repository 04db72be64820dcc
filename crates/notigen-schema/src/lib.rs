//! Descriptor model for Notigen: field descriptors, containing-type keys,
//! pre-existing event members, doc-comment blocks, the manifest input
//! format, and the diagnostic taxonomy shared by the engine and the CLI.

pub mod diag;
pub mod manifest;
pub mod node;
pub mod types;

///
/// ANNOTATION SURFACE
///
/// Attribute names the field-discovery collaborator honors when it builds
/// the manifest. They are consumed upstream of this crate; the constants
/// exist so manifest producers and the engine agree on vocabulary.
///

/// Field-level marker, optionally carrying a `PropertyName` override.
pub const FIELD_ATTRIBUTE: &str = "AutoNotify";

/// Type-level marker that includes every non-excluded field of the type.
pub const CLASS_ATTRIBUTE: &str = "AutoNotifyClass";

/// Field-level exclusion marker, honored when the type-level marker is used.
pub const IGNORE_ATTRIBUTE: &str = "AutoNotifyIgnore";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        diag::{Diagnostic, DiagnosticCode, Severity},
        manifest::{ClassDecl, FieldDecl, Manifest, MemberSource},
        node::{ContainerKey, DocComment, EventMember, Field},
        types::{HandlerShape, Qualifier, SourceLocation},
    };
    pub use serde::{Deserialize, Serialize};
}
