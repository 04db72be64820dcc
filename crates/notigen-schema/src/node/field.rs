use crate::prelude::*;

///
/// Field
/// One annotated backing field — the engine's sole input unit. All
/// members are fully resolved metadata; the engine never inspects live
/// symbols.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Field {
    /// Declared field name, never empty.
    pub ident: String,

    /// Declared type in display form, echoed into the generated accessors
    /// and the equality-comparer selection.
    pub ty: String,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default)]
    pub is_readonly: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocComment>,

    /// Explicit property name from the annotation, used verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,

    pub container: ContainerKey,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl Field {
    /// Storage access mode for the generated accessors.
    #[must_use]
    pub const fn qualifier(&self) -> Qualifier {
        if self.is_static {
            Qualifier::Unqualified
        } else {
            Qualifier::InstanceQualified
        }
    }

    /// Resolved documentation token for the field itself,
    /// e.g. `F:UnitTest.UnitTestClass.normalProperty`.
    #[must_use]
    pub fn doc_token(&self) -> String {
        format!("F:{}.{}", self.container.qualified(), self.ident)
    }
}
