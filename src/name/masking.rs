//! Masking rules shared by every [`Name`](super::Name).
//!
//! A component is *masked* when every literal [`ESCAPE_CHARACTER`] and every
//! literal [`DEFAULT_DELIMITER`] inside it is preceded by one escape
//! character. Both characters are fixed; the per-instance delimiter of a
//! `Name` only affects human-readable rendering.

/// Character marking the following character as literal.
pub const ESCAPE_CHARACTER: char = '\\';

/// Delimiter used by the machine-readable form and by names built without
/// an explicit delimiter.
pub const DEFAULT_DELIMITER: char = '.';

/// Removes masking from a component.
///
/// An escape character followed by any character collapses to that
/// character. A trailing lone escape character is kept verbatim.
///
/// ```rust
/// use sugars_name::masking::unmask;
///
/// assert_eq!(unmask(r"Oh\.\.\."), "Oh...");
/// assert_eq!(unmask(r"a\\b"), r"a\b");
/// assert_eq!(unmask(r"tail\"), r"tail\");
/// ```
pub fn unmask(component: &str) -> String {
    let mut out = String::with_capacity(component.len());
    let mut chars = component.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE_CHARACTER {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Applies masking to literal content using the default characters.
///
/// ```rust
/// use sugars_name::masking::mask;
///
/// assert_eq!(mask("Oh..."), r"Oh\.\.\.");
/// assert_eq!(mask(r"a\b"), r"a\\b");
/// assert_eq!(mask("a/b"), "a/b");
/// ```
pub fn mask(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    for c in literal.chars() {
        if c == ESCAPE_CHARACTER || c == DEFAULT_DELIMITER {
            out.push(ESCAPE_CHARACTER);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unmask_plain() {
        assert_eq!(unmask(""), "");
        assert_eq!(unmask("oss"), "oss");
    }

    #[test]
    fn test_unmask_collapses_any_escaped_char() {
        assert_eq!(unmask(r"\."), ".");
        assert_eq!(unmask(r"\\"), r"\");
        assert_eq!(unmask(r"\/"), "/");
        assert_eq!(unmask(r"\a\b"), "ab");
    }

    #[test]
    fn test_unmask_trailing_escape() {
        assert_eq!(unmask(r"\"), r"\");
        assert_eq!(unmask(r"ab\"), r"ab\");
        // "\\\" is an escaped backslash followed by a lone one
        assert_eq!(unmask(r"\\\"), r"\\");
    }

    #[test]
    fn test_unmask_multibyte() {
        assert_eq!(unmask(r"Grü\.ße"), "Grü.ße");
        assert_eq!(unmask(r"\ü"), "ü");
    }

    #[test]
    fn test_mask_default_characters_only() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("."), r"\.");
        assert_eq!(mask(r"\"), r"\\");
        assert_eq!(mask(r"a.b\c/d#e"), r"a\.b\\c/d#e");
    }

    #[test]
    fn test_mask_then_unmask() {
        for s in ["", ".", r"\", r"\.", r".\", "...", r"\\\", "x.y.z", r"C:\dir.d"] {
            assert_eq!(unmask(&mask(s)), s);
        }
    }
}
