//! Property-name derivation.

/// Derive the public property name for a field.
///
/// An explicit override is returned verbatim. Otherwise the leading
/// underscores are stripped and the first remaining character is
/// upper-cased; the rest of the identifier is kept byte-for-byte
/// (`aBc` becomes `ABc`, not `Abc`). An empty result signals rejection
/// upstream.
#[must_use]
pub fn resolve(ident: &str, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_string();
    }

    let stripped = ident.trim_start_matches('_');
    let mut chars = stripped.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut resolved: String = first.to_uppercase().collect();
    resolved.push_str(chars.as_str());
    resolved
}
