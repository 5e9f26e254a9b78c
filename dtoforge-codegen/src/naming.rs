//! Identifier helpers shared by the renderers.

/// Upper-cases the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns true if `s` is a letter-or-underscore led run of letters, ASCII
/// digits, underscores and any of `extra`.
#[must_use]
pub fn is_identifier(s: &str, extra: &[char]) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let allowed = |c: char| c == '_' || extra.contains(&c);

    (is_letter(first) || allowed(first))
        && chars.all(|c| is_letter(c) || c.is_ascii_digit() || allowed(c))
}

/// Alphabetic but not a letter number such as `Ⅻ`.
fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("themeColor"), "ThemeColor");
        assert_eq!(capitalize_first("id"), "Id");
        assert_eq!(capitalize_first("RED"), "RED");
        assert_eq!(capitalize_first("éclair"), "Éclair");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("UNIFIED_ENUM_CASE", &[]));
        assert!(is_identifier("_x1", &[]));
        assert!(!is_identifier("1x", &[]));
        assert!(!is_identifier("first-name", &[]));
        assert!(!is_identifier("", &[]));
        assert!(!is_identifier("$ref", &[]));
        assert!(is_identifier("$ref", &['$']));
        assert!(is_identifier("żółw2", &[]));
    }

    #[test]
    fn test_is_identifier_rejects_other_numerics() {
        assert!(!is_identifier("x²", &[]));
        assert!(!is_identifier("Ⅻ", &[]));
        assert!(!is_identifier("level½", &[]));
    }
}
