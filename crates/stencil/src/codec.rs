//! Argument codec: HTML numeric character references for filter arguments.
//!
//! Filter arguments cannot contain the characters the placeholder grammar
//! reserves (`: | { } ( ) < >`); this module encodes them as numeric
//! character references for embedding and decodes them back before the
//! argument reaches a filter. Decoding is generic over code points, so any
//! character - including `]` and `/`, which [`sanitize_arg`] does not
//! emit - can be written as `&#93;` or `&#x2f;` by hand.

/// How [`sanitize_arg`] spells the replacement references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgEncoding {
    /// Decimal references: `&#58;`
    #[default]
    Decimal,
    /// Hexadecimal references, lowercase digits: `&#x3a;`
    Hex,
    /// Hexadecimal references, uppercase digits: `&#x3A;`
    HexUpper,
}

/// Characters reserved by the placeholder grammar inside filter arguments.
const RESERVED: [char; 8] = [':', '|', '{', '}', '(', ')', '<', '>'];

/// Replaces every reserved character in `arg` with its numeric character
/// reference, so the result can appear literally inside a filter argument.
///
/// # Example
///
/// ```rust
/// use stencil::codec::{sanitize_arg, ArgEncoding};
///
/// assert_eq!(sanitize_arg("a:b", ArgEncoding::Decimal), "a&#58;b");
/// assert_eq!(sanitize_arg("a:b", ArgEncoding::Hex), "a&#x3a;b");
/// ```
pub fn sanitize_arg(arg: &str, encoding: ArgEncoding) -> String {
    let mut out = String::with_capacity(arg.len());
    for c in arg.chars() {
        if RESERVED.contains(&c) {
            let code = c as u32;
            match encoding {
                ArgEncoding::Decimal => out.push_str(&format!("&#{code};")),
                ArgEncoding::Hex => out.push_str(&format!("&#x{code:x};")),
                ArgEncoding::HexUpper => out.push_str(&format!("&#x{code:X};")),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Decodes numeric character references back into literal characters.
///
/// Recognizes `&#N;` with 1-6 decimal digits and `&#xH;` with 1-5 hex
/// digits; the `x` and the hex digits are case-insensitive. Anything that
/// does not parse, or names an invalid code point, stays verbatim.
pub fn decode_arg(arg: &str) -> String {
    let mut out = String::with_capacity(arg.len());
    let mut rest = arg;
    while let Some(pos) = rest.find("&#") {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match parse_reference(rest) {
            Some((c, len)) => {
                out.push(c);
                rest = &rest[len..];
            }
            None => {
                out.push_str("&#");
                rest = &rest[2..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decodes every argument in a list. This is the engine's default
/// decoding step for filters that do not override it.
pub fn decode_args(args: &[String]) -> Vec<String> {
    args.iter().map(|a| decode_arg(a)).collect()
}

/// Parses one reference at the start of `s` (which begins with `&#`).
/// Returns the decoded character and the byte length consumed.
fn parse_reference(s: &str) -> Option<(char, usize)> {
    let bytes = s.as_bytes();
    let (radix, digits_start, max_digits) = match bytes.get(2) {
        Some(b'x') | Some(b'X') => (16, 3, 5),
        _ => (10, 2, 6),
    };
    let mut end = digits_start;
    while end < bytes.len()
        && end - digits_start < max_digits
        && (bytes[end] as char).is_digit(radix)
    {
        end += 1;
    }
    if end == digits_start || bytes.get(end) != Some(&b';') {
        return None;
    }
    let code = u32::from_str_radix(&s[digits_start..end], radix).ok()?;
    let c = char::from_u32(code)?;
    Some((c, end + 1))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    // Text mixing ordinary characters with the full reserved alphabet.
    fn arg_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 :|{}()<>]{0,40}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn decode_reverses_sanitize(arg in arg_text()) {
            for encoding in [ArgEncoding::Decimal, ArgEncoding::Hex, ArgEncoding::HexUpper] {
                prop_assert_eq!(decode_arg(&sanitize_arg(&arg, encoding)), arg.clone());
            }
        }

        #[test]
        fn sanitized_text_has_no_reserved_characters(arg in arg_text()) {
            let sanitized = sanitize_arg(&arg, ArgEncoding::Decimal);
            prop_assert!(!sanitized.chars().any(|c| RESERVED.contains(&c)));
        }

        #[test]
        fn decode_without_references_is_identity(arg in "[a-zA-Z0-9 .,!?-]{0,40}") {
            prop_assert_eq!(decode_arg(&arg), arg);
        }
    }
}
