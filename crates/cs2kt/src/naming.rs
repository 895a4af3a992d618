//! Identifier conventions.

/// Kotlin package for a C# namespace: lowercase, dots kept.
pub fn kotlin_package_name(namespace: &str) -> String {
    namespace.to_lowercase()
}

/// Lowercase the first character only (`FailureCount` -> `failureCount`).
pub fn to_camel_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether a field's modifiers make it immutable (`val` in Kotlin).
pub fn field_is_read_only<S: AsRef<str>>(modifiers: &[S]) -> bool {
    modifiers
        .iter()
        .any(|m| matches!(m.as_ref(), "readonly" | "const"))
}
