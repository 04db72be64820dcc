//! Class-unit assembly: grouping descriptors by containing type and
//! running the per-group pipeline.

use crate::{
    conflict::{self, ClassContext},
    property,
    unit::{Expansion, GeneratedUnit},
};
use notigen_schema::prelude::*;

/// Run one generation pass over a flat descriptor sequence.
///
/// Groups are keyed by containing type in first-seen order; in-group
/// field order is the input order. A group whose container is not a
/// direct namespace child produces a diagnostic and no unit. Every input
/// shape has a defined outcome; nothing here aborts.
#[must_use]
pub fn expand(fields: &[Field], members: &dyn MemberSource) -> Expansion {
    let mut units = Vec::new();
    let mut diagnostics = Vec::new();

    for (key, group) in group_by_container(fields) {
        if !key.namespace_child {
            let location = group.first().and_then(|field| field.location.clone());
            diagnostics.push(Diagnostic::unsupported_container(key, location));
            continue;
        }

        units.push(UnitBuilder::new(key, group).build(members.events(key), &mut diagnostics));
    }

    Expansion { units, diagnostics }
}

// Linear key scan; group order is first-seen input order.
fn group_by_container(fields: &[Field]) -> Vec<(&ContainerKey, Vec<&Field>)> {
    let mut groups: Vec<(&ContainerKey, Vec<&Field>)> = Vec::new();

    for field in fields {
        match groups.iter_mut().find(|(key, _)| **key == field.container) {
            Some((_, members)) => members.push(field),
            None => groups.push((&field.container, vec![field])),
        }
    }

    groups
}

///
/// UnitBuilder
/// One accepted containing-type group on its way to a generated unit.
///

struct UnitBuilder<'a> {
    key: &'a ContainerKey,
    fields: Vec<&'a Field>,
}

impl<'a> UnitBuilder<'a> {
    const fn new(key: &'a ContainerKey, fields: Vec<&'a Field>) -> Self {
        Self { key, fields }
    }

    fn build(self, events: &[EventMember], diagnostics: &mut Vec<Diagnostic>) -> GeneratedUnit {
        // Event scaffolding is decided once per group, before any field is
        // looked at, so an all-rejected group still gets its declarations.
        let ClassContext {
            need_changing,
            need_changed,
        } = conflict::detect(events, &HandlerShape::changing(), &HandlerShape::changed());

        let mut properties = Vec::new();
        for field in self.fields {
            match property::synthesize(field) {
                Ok(plan) => properties.push(plan),
                Err(rejection) => diagnostics.push(rejection.into_diagnostic(field.location.clone())),
            }
        }

        GeneratedUnit {
            namespace: self.key.namespace.clone(),
            type_name: self.key.ident.clone(),
            emit_changing: need_changing,
            emit_changed: need_changed,
            properties,
        }
    }
}
