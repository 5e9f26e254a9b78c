//! TypeScript lexical helpers.

use crate::naming::is_identifier;

/// Words that cannot name a declared type. Modules are strict code, so the
/// strict-mode reserved words are included.
const RESERVED: &[&str] = &[
    "any", "await", "bigint", "boolean", "break", "case", "catch", "class", "const", "continue",
    "debugger", "default", "delete", "do", "else", "enum", "export", "extends", "false",
    "finally", "for", "function", "if", "implements", "import", "in", "instanceof", "interface",
    "let", "never", "new", "null", "number", "object", "package", "private", "protected",
    "public", "return", "static", "string", "super", "switch", "symbol", "this", "throw", "true",
    "try", "typeof", "undefined", "unknown", "var", "void", "while", "with", "yield",
];

/// Returns true if `name` is an identifier name (`$` allowed).
#[must_use]
pub fn is_identifier_name(name: &str) -> bool {
    is_identifier(name, &['$'])
}

/// Returns true if `name` can be declared as a type.
#[must_use]
pub fn is_type_identifier(name: &str) -> bool {
    is_identifier_name(name) && !RESERVED.contains(&name)
}

/// Returns true if `name` reads as a number, which TypeScript refuses as an
/// enum member name even when quoted.
#[must_use]
pub fn is_numeric_name(name: &str) -> bool {
    if matches!(name, "NaN" | "Infinity" | "-Infinity") {
        return true;
    }
    let digits = name.strip_prefix('-').unwrap_or(name);
    !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && name
            .parse::<f64>()
            .is_ok_and(|value| value.is_finite() && value.to_string() == name)
}

/// Renders a property or enum member name, quoting it when needed.
#[must_use]
pub fn property_name(name: &str) -> String {
    if is_identifier_name(name) {
        name.to_string()
    } else {
        quote_string(name)
    }
}

/// Quotes a string as a double-quoted TypeScript string literal.
#[must_use]
pub fn quote_string(value: &str) -> String {
    let mut output = String::with_capacity(value.len() + 2);
    output.push('"');
    for c in value.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
    output.push('"');
    output
}
