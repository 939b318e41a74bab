/// Derive a definition name from a collection name.
///
/// Strips one trailing `s` and uppercases the first character. There is no
/// knowledge of irregular plurals: `news` becomes `New`.
///
/// The collection name must be non-empty; an empty name yields an empty type
/// name, which callers are expected to reject beforehand.
pub fn derive_type_name(collection_name: &str) -> String {
    let singular = collection_name
        .strip_suffix('s')
        .unwrap_or(collection_name);
    capitalize(singular)
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name of the definition generated for an object-valued property:
/// `Post` + `author` gives `PostAuthor`.
pub fn nested_type_name(parent: &str, property: &str) -> String {
    format!("{parent}{}", capitalize(property))
}
