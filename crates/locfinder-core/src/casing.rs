//! Field-name casing between the internal `snake_case` names and the
//! upstream's `camelCase` wire names.

/// Converts an underscore-separated identifier into `camelCase`.
///
/// The first component is kept verbatim; every following component has its
/// first character uppercased and is appended without a separator. Empty
/// components (leading, trailing or doubled underscores) contribute nothing.
///
/// ```
/// use locfinder_core::snake_to_camel;
///
/// assert_eq!(snake_to_camel("address_locality"), "addressLocality");
/// assert_eq!(snake_to_camel("radius"), "radius");
/// ```
#[must_use]
pub fn snake_to_camel(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    let mut components = ident.split('_');

    if let Some(first) = components.next() {
        out.push_str(first);
    }

    for component in components {
        let mut chars = component.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}
