//! Documentation propagation from field to generated property.

use notigen_schema::prelude::*;

/// Rewrite a field's documentation block into `///`-prefixed lines for
/// the generated property.
///
/// The opening wrapper line and the two closing lines (closing wrapper
/// plus trailing blank) are discarded; each interior line is trimmed and
/// re-prefixed. Cross-references to the field itself are rewritten to the
/// resolved field token. References to the new property name become
/// unresolved markers: the property does not exist yet at the point the
/// environment resolves documentation references.
#[must_use]
pub fn propagate(doc: &DocComment, field: &Field, final_name: &str) -> Vec<String> {
    let lines: Vec<&str> = doc.lines().collect();
    if lines.len() < 3 {
        return Vec::new();
    }

    let field_ref = cref(&field.ident);
    let field_token = cref(&field.doc_token());
    let forward_ref = cref(final_name);
    let unresolved = cref(&format!("!:{final_name}"));

    lines[1..lines.len() - 2]
        .iter()
        .map(|raw| {
            let line = raw
                .trim()
                .replace(&field_ref, &field_token)
                .replace(&forward_ref, &unresolved);

            format!("/// {line}")
        })
        .collect()
}

fn cref(target: &str) -> String {
    format!("cref=\"{target}\"")
}
