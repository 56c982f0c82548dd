//! Keywords that carry no structural information.

/// Statement-level keywords irrelevant to declarations: control flow, exception
/// handling, and modifiers that do not affect what a member is.
///
/// Inside a method body a statement starting with one of these is discarded whole;
/// in a type body they are skipped like modifiers.
pub const IGNORED_KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "break",
    "case",
    "continue",
    "default",
    "do",
    "else",
    "finally",
    "for",
    "if",
    "native",
    "new",
    "return",
    "strictfp",
    "switch",
    "synchronized",
    "throw",
    "transient",
    "try",
    "volatile",
    "while",
];

pub fn is_ignored_keyword(token: &str) -> bool {
    IGNORED_KEYWORDS.contains(&token)
}

/// Modifiers that may precede a generic method's type parameters.
pub fn is_modifier(token: &str) -> bool {
    matches!(token, "public" | "protected" | "private" | "static" | "final" | "default")
        || is_ignored_keyword(token)
}

/// Whether `name` is a legal Java identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignored_keywords() {
        assert!(is_ignored_keyword("return"));
        assert!(is_ignored_keyword("synchronized"));
        assert!(!is_ignored_keyword("static"));
        assert!(!is_ignored_keyword("catch"));
    }

    #[test]
    fn test_is_modifier() {
        assert!(is_modifier("public"));
        assert!(is_modifier("static"));
        assert!(is_modifier("synchronized"));
        assert!(!is_modifier("List"));
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("count"));
        assert!(is_identifier("_tmp$1"));
        assert!(is_identifier("größe"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier("a.b"));
        assert!(!is_identifier("x[]"));
    }
}
