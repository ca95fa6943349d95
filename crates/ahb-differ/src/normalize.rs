//! Text canonicalization
//!
//! Applied before every equality test and before key construction; stored
//! data is never mutated. Key construction and field comparison must go
//! through the same function, otherwise matching breaks silently.

/// Canonicalizes extraction artifacts:
/// zero-width and soft-hyphen characters are removed, control characters
/// (except newline, carriage return, tab) are stripped, Unicode space and
/// dash variants collapse to plain space and hyphen, spurious spaces around
/// hyphens and slashes between word characters disappear, space runs
/// collapse, and the result is trimmed. Idempotent.
pub fn normalize(input: &str) -> String {
    let mut mapped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\u{00AD}' | '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}' => {}
            c if is_space_variant(c) => mapped.push(' '),
            c if is_dash_variant(c) => mapped.push('-'),
            '\n' | '\r' | '\t' => mapped.push(c),
            c if c.is_control() => {}
            c => mapped.push(c),
        }
    }
    let joined = strip_spaces_around_joiners(&mapped);
    collapse_spaces(&joined).trim().to_string()
}

fn is_space_variant(c: char) -> bool {
    matches!(
        c,
        '\u{00A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
    )
}

fn is_dash_variant(c: char) -> bool {
    matches!(c, '\u{2010}'..='\u{2015}' | '\u{2212}')
}

/// Removes spaces around `-` and `/` when both neighbours are word
/// characters ("Netz - betreiber" -> "Netz-betreiber"). A PDF extraction
/// artifact of wrapped compound words.
fn strip_spaces_around_joiners(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == ' ' || chars[i] == '-' || chars[i] == '/' {
            let mut j = i;
            while j < chars.len() && chars[j] == ' ' {
                j += 1;
            }
            if j < chars.len() && (chars[j] == '-' || chars[j] == '/') {
                let joiner = chars[j];
                let mut k = j + 1;
                while k < chars.len() && chars[k] == ' ' {
                    k += 1;
                }
                let word_before = out.chars().last().map(char::is_alphanumeric).unwrap_or(false);
                let word_after = k < chars.len() && chars[k].is_alphanumeric();
                let has_spaces = j > i || k > j + 1;
                if word_before && word_after && has_spaces {
                    out.push(joiner);
                    i = k;
                    continue;
                }
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

fn collapse_spaces(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_was_space = false;
    for c in input.chars() {
        if c == ' ' {
            if !last_was_space {
                out.push(c);
            }
            last_was_space = true;
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_zero_width_and_soft_hyphen() {
        assert_eq!(normalize("Netz\u{00AD}betreiber"), "Netzbetreiber");
        assert_eq!(normalize("a\u{200B}b\u{FEFF}c"), "abc");
    }

    #[test]
    fn test_strips_control_characters_but_keeps_whitespace_controls() {
        assert_eq!(normalize("a\u{0001}b"), "ab");
        assert_eq!(normalize("a\tb"), "a\tb");
        assert_eq!(normalize("a\nb"), "a\nb");
    }

    #[test]
    fn test_unifies_space_variants() {
        assert_eq!(normalize("a\u{00A0}b"), "a b");
        assert_eq!(normalize("a\u{2009}b"), "a b");
    }

    #[test]
    fn test_unifies_dash_variants() {
        assert_eq!(normalize("MP\u{2013}ID"), "MP-ID");
        assert_eq!(normalize("a \u{2014} b"), "a-b");
    }

    #[test]
    fn test_removes_spaces_around_hyphen_between_words() {
        assert_eq!(normalize("Netz - betreiber"), "Netz-betreiber");
        assert_eq!(normalize("Netz- betreiber"), "Netz-betreiber");
        assert_eq!(normalize("Netz -betreiber"), "Netz-betreiber");
    }

    #[test]
    fn test_removes_spaces_around_slash_between_words() {
        assert_eq!(normalize("NB / LF"), "NB/LF");
    }

    #[test]
    fn test_keeps_free_standing_dashes() {
        assert_eq!(normalize("a - - b"), "a - - b");
        assert_eq!(normalize("- b"), "- b");
        assert_eq!(normalize("a -"), "a -");
    }

    #[test]
    fn test_collapses_spaces_and_trims() {
        assert_eq!(normalize("  a   b  "), "a b");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_combined_artifacts() {
        assert_eq!(
            normalize(" MP\u{00AD}\u{2011}ID  Absender\u{00A0} / Empfänger "),
            "MP-ID Absender/Empfänger"
        );
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "\\PC*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once.clone());
        }

        #[test]
        fn normalize_never_leaves_edge_whitespace(s in "\\PC*") {
            let out = normalize(&s);
            prop_assert_eq!(out.trim(), out.as_str());
        }

        #[test]
        fn normalize_never_leaves_double_spaces(s in "\\PC*") {
            prop_assert!(!normalize(&s).contains("  "));
        }
    }
}
