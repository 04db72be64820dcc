//! Detection of pre-existing notification events on a containing type.

use notigen_schema::prelude::*;

///
/// ClassContext
/// Which event declarations the unit still has to synthesize. Computed
/// once per containing-type group and applied uniformly to the unit.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClassContext {
    pub need_changing: bool,
    pub need_changed: bool,
}

/// Compare the type's existing event members against the two well-known
/// handler shapes. A member suppresses synthesis iff its handler type
/// matches nominally; member names play no part.
#[must_use]
pub fn detect(
    events: &[EventMember],
    changing: &HandlerShape,
    changed: &HandlerShape,
) -> ClassContext {
    ClassContext {
        need_changing: !events.iter().any(|event| event.handler.matches(changing)),
        need_changed: !events.iter().any(|event| event.handler.matches(changed)),
    }
}
