use crate::prelude::*;

///
/// ContainerKey
/// Identity of the type that owns a field. Groups descriptors during a
/// generation pass; two fields belong to the same unit iff their keys are
/// equal.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ContainerKey {
    pub namespace: String,
    pub ident: String,

    /// Whether the type is a direct child of its namespace. Nested types
    /// are rejected as generation containers.
    pub namespace_child: bool,
}

impl ContainerKey {
    pub fn new(namespace: impl Into<String>, ident: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ident: ident.into(),
            namespace_child: true,
        }
    }

    /// Namespace-qualified type name, e.g. `UnitTest.UnitTestClass`.
    #[must_use]
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.namespace, self.ident)
    }
}
