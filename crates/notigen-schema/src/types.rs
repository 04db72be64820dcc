use crate::prelude::*;

///
/// WELL-KNOWN NAMES
///
/// Notification vocabulary of the target object model. The interfaces are
/// the capability markers every generated type implements; the handler
/// shapes drive conflict detection; the event idents are the member names
/// the synthesized accessors raise through.
///

pub const CHANGING_INTERFACE: &str = "System.ComponentModel.INotifyPropertyChanging";
pub const CHANGED_INTERFACE: &str = "System.ComponentModel.INotifyPropertyChanged";

pub const CHANGING_HANDLER: &str = "System.ComponentModel.PropertyChangingEventHandler";
pub const CHANGED_HANDLER: &str = "System.ComponentModel.PropertyChangedEventHandler";

pub const CHANGING_EVENT: &str = "PropertyChanging";
pub const CHANGED_EVENT: &str = "PropertyChanged";

///
/// Qualifier
/// How the generated accessors reach the backing storage.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Qualifier {
    /// Instance-owned storage, referenced through the receiver.
    InstanceQualified,
    /// Shared (static) storage, referenced by its bare identifier.
    Unqualified,
}

///
/// HandlerShape
/// Nominal event-handler type. Equality is on the resolved type name,
/// insensitive to an explicit `global::` qualifier.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HandlerShape(String);

impl HandlerShape {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn changing() -> Self {
        Self::new(CHANGING_HANDLER)
    }

    #[must_use]
    pub fn changed() -> Self {
        Self::new(CHANGED_HANDLER)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Nominal match against another shape.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        unqualified(&self.0) == unqualified(&other.0)
    }
}

fn unqualified(name: &str) -> &str {
    name.strip_prefix("global::").unwrap_or(name)
}

///
/// SourceLocation
/// Where a descriptor originated, carried onto diagnostics verbatim.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, derive_more::Display)]
#[display("{file}:{line}:{column}")]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}
