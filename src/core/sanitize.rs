//! Identifier sanitizer for generated Kotlin.
//!
//! Pure and idempotent: characters outside `[A-Za-z0-9_]` become `_`, a
//! leading digit gets a `_` prepended, and Kotlin hard keywords get a
//! trailing `_`. Sanitization never renumbers or reinterprets numeric
//! substrings, and it does not guarantee catalog-wide uniqueness; the
//! validator reports collisions.

/// Kotlin hard keywords that cannot be used as plain identifiers.
const KOTLIN_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Convert a raw base name into a valid Kotlin identifier.
pub fn sanitize(base: &str) -> String {
    let mut out: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if out.chars().next().is_none_or(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }

    if KOTLIN_KEYWORDS.contains(&out.as_str()) {
        out.push('_');
    }

    out
}
