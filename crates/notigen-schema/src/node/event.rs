use crate::prelude::*;

///
/// EventMember
/// An event declaration already present on a containing type, as reported
/// by the discovery collaborator. Only the handler type participates in
/// conflict detection; the ident is carried for reporting.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventMember {
    pub ident: String,
    pub handler: HandlerShape,
}

impl EventMember {
    pub fn new(ident: impl Into<String>, handler: HandlerShape) -> Self {
        Self {
            ident: ident.into(),
            handler,
        }
    }
}
