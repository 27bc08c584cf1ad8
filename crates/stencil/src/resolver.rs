//! Property-path resolution against a parameter value tree.

use std::borrow::Cow;

use serde_json::Value;

/// Resolves a possibly nested property path against `params`.
///
/// Returns `None` when the path does not exist; `Some(&Value::Null)` is a
/// real, existing null and is distinct from "does not exist".
///
/// Two tokenization modes cover the supported path grammar:
///
/// - simple dotted paths (`a.b.c`) are split on `.`, with empty segments
///   dropped, so `a..b` and stray leading/trailing dots collapse;
/// - paths containing `[` use a token scanner that yields bare
///   identifiers, signed integers inside brackets, and quoted keys inside
///   brackets (single or double quotes, backslash escapes resolved).
///
/// `this` as the first segment refers to `params` itself and consumes no
/// lookup step; anywhere else it is an ordinary key. Resolution fails the
/// moment an intermediate value is null, is not a container, or lacks the
/// next key; out-of-range sequence indices fail like missing keys. An
/// empty path never resolves.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stencil::resolve_property;
///
/// let params = json!({"a": [0, {"value": 123}]});
/// assert_eq!(resolve_property("a.1.value", &params), Some(&json!(123)));
/// assert_eq!(resolve_property("a[1]['value']", &params), Some(&json!(123)));
/// assert_eq!(resolve_property("a.2", &params), None);
/// ```
pub fn resolve_property<'a>(path: &str, params: &'a Value) -> Option<&'a Value> {
    let segments = tokenize(path);
    let mut current = params;
    let mut resolved_any = false;
    for (i, segment) in segments.iter().enumerate() {
        if i == 0 && segment.as_ref() == "this" {
            resolved_any = true;
            continue;
        }
        current = descend(current, segment)?;
        resolved_any = true;
    }
    resolved_any.then_some(current)
}

/// One lookup step: objects by key, arrays by non-negative index.
fn descend<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => items.get(key.parse::<usize>().ok()?),
        _ => None,
    }
}

fn tokenize(path: &str) -> Vec<Cow<'_, str>> {
    if path.contains('[') {
        tokenize_accessors(path)
    } else {
        path.split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Cow::Borrowed)
            .collect()
    }
}

/// Token scanner for the verbose accessor syntax: `a[0]['key'].b`.
///
/// Yields bare identifiers, bracketed signed integers, and bracketed
/// quoted keys; dots, whitespace, and anything unrecognized are filler and
/// are skipped, the way the original grammar tolerated them.
fn tokenize_accessors(path: &str) -> Vec<Cow<'_, str>> {
    let chars: Vec<(usize, char)> = path.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let (offset, c) = chars[i];
        if c == '[' {
            if let Some((token, next)) = bracket_token(path, &chars, i) {
                tokens.push(token);
                i = next;
                continue;
            }
            i += 1;
        } else if is_ident(c) {
            let mut end = i;
            while end < chars.len() && is_ident(chars[end].1) {
                end += 1;
            }
            let end_offset = chars
                .get(end)
                .map(|&(o, _)| o)
                .unwrap_or_else(|| path.len());
            tokens.push(Cow::Borrowed(&path[offset..end_offset]));
            i = end;
        } else {
            i += 1;
        }
    }
    tokens
}

/// Parses one `[ ... ]` accessor starting at the opening bracket.
/// Returns the token and the index past the closing bracket, or `None`
/// when the accessor is malformed (the caller then skips the bracket).
fn bracket_token<'a>(
    path: &'a str,
    chars: &[(usize, char)],
    open: usize,
) -> Option<(Cow<'a, str>, usize)> {
    let mut i = open + 1;
    while matches!(chars.get(i), Some(&(_, c)) if c.is_whitespace()) {
        i += 1;
    }
    match chars.get(i) {
        Some(&(start, c)) if c == '-' || c.is_ascii_digit() => {
            let mut end = i + 1;
            while matches!(chars.get(end), Some(&(_, d)) if d.is_ascii_digit()) {
                end += 1;
            }
            if c == '-' && end == i + 1 {
                return None;
            }
            let end_offset = chars.get(end).map(|&(o, _)| o).unwrap_or_else(|| path.len());
            let token = Cow::Borrowed(&path[start..end_offset]);
            let close = expect_close(chars, end)?;
            Some((token, close))
        }
        Some(&(_, quote)) if quote == '\'' || quote == '"' => {
            let mut key = String::new();
            let mut j = i + 1;
            loop {
                match chars.get(j) {
                    None => return None,
                    Some(&(_, '\\')) => {
                        key.push(chars.get(j + 1)?.1);
                        j += 2;
                    }
                    Some(&(_, c)) if c == quote => {
                        j += 1;
                        break;
                    }
                    Some(&(_, c)) => {
                        key.push(c);
                        j += 1;
                    }
                }
            }
            let close = expect_close(chars, j)?;
            Some((Cow::Owned(key), close))
        }
        _ => None,
    }
}

/// Skips whitespace and consumes the closing `]`.
fn expect_close(chars: &[(usize, char)], mut i: usize) -> Option<usize> {
    while matches!(chars.get(i), Some(&(_, c)) if c.is_whitespace()) {
        i += 1;
    }
    match chars.get(i) {
        Some(&(_, ']')) => Some(i + 1),
        _ => None,
    }
}

/// Bare segment characters in accessor mode.
fn is_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== Dotted Mode Tests ====================

    mod dotted {
        use super::*;

        #[test]
        fn resolves_this() {
            let params = json!({"prop": 123});
            assert_eq!(resolve_property("this", &params), Some(&params));
            assert_eq!(resolve_property("this.prop", &params), Some(&json!(123)));
        }

        #[test]
        fn this_prop_equals_prop() {
            let params = json!({"prop": 123});
            assert_eq!(
                resolve_property("this.prop", &params),
                resolve_property("prop", &params)
            );
        }

        #[test]
        fn this_elsewhere_is_an_ordinary_key() {
            let params = json!({"a": {"this": 1}});
            assert_eq!(resolve_property("a.this", &params), Some(&json!(1)));
            assert_eq!(resolve_property("this.a.this", &params), Some(&json!(1)));
        }

        #[test]
        fn resolves_deep_properties() {
            let params = json!({"a": {"b": {"c": {"d": 123}}}});
            assert_eq!(resolve_property("a.b.c.d", &params), Some(&json!(123)));
        }

        #[test]
        fn missing_property_fails() {
            let params = json!({"a": {"b": null}});
            assert_eq!(resolve_property("a.b.c", &params), None);
        }

        #[test]
        fn terminal_null_exists() {
            let params = json!({"a": {"b": null}});
            assert_eq!(resolve_property("a.b", &params), Some(&Value::Null));
        }

        #[test]
        fn empty_paths_fail() {
            let params = json!({});
            assert_eq!(resolve_property("", &params), None);
            assert_eq!(resolve_property(".", &params), None);
            assert_eq!(resolve_property("...", &params), None);
        }

        #[test]
        fn redundant_dots_collapse() {
            let params = json!({"a": {"b": 1}});
            assert_eq!(resolve_property("a..b", &params), Some(&json!(1)));
            assert_eq!(resolve_property(".a.b.", &params), Some(&json!(1)));
        }

        #[test]
        fn segments_are_trimmed() {
            let params = json!({"a": {"b": 1}});
            assert_eq!(resolve_property("a . b", &params), Some(&json!(1)));
        }

        #[test]
        fn array_indexes() {
            let params = json!({"a": [0, {"value": 123}]});
            assert_eq!(resolve_property("a.1.value", &params), Some(&json!(123)));
        }

        #[test]
        fn array_index_out_of_range_fails() {
            let params = json!({"a": [0, 1]});
            assert_eq!(resolve_property("a.2", &params), None);
        }

        #[test]
        fn non_numeric_key_against_array_fails() {
            let params = json!({"a": [0, 1]});
            assert_eq!(resolve_property("a.first", &params), None);
        }

        #[test]
        fn descent_into_scalar_fails() {
            let params = json!({"a": 5});
            assert_eq!(resolve_property("a.b", &params), None);
        }
    }

    // ==================== Accessor Mode Tests ====================

    mod accessors {
        use super::*;

        #[test]
        fn numeric_index() {
            let params = json!({"bla": [10, 20, 30]});
            assert_eq!(resolve_property("bla[1]", &params), Some(&json!(20)));
        }

        #[test]
        fn quoted_keys() {
            let params = json!({"as": {"s": {"one": 1}}});
            assert_eq!(resolve_property("as['s'].one", &params), Some(&json!(1)));
            assert_eq!(resolve_property("as[\"s\"].one", &params), Some(&json!(1)));
        }

        #[test]
        fn quoted_key_with_special_characters() {
            let params = json!({"a": {"hey there": 1}});
            assert_eq!(resolve_property("a['hey there']", &params), Some(&json!(1)));
        }

        #[test]
        fn escaped_quote_resolves() {
            let params = json!({"a": {"it's": 1}});
            assert_eq!(resolve_property(r"a['it\'s']", &params), Some(&json!(1)));
        }

        #[test]
        fn whitespace_inside_brackets() {
            let params = json!({"a": [7]});
            assert_eq!(resolve_property("a[ 0 ]", &params), Some(&json!(7)));
        }

        #[test]
        fn negative_index_fails_on_arrays() {
            let params = json!({"a": [1, 2]});
            assert_eq!(resolve_property("a[-1]", &params), None);
        }

        #[test]
        fn negative_key_matches_on_objects() {
            let params = json!({"a": {"-1": "neg"}});
            assert_eq!(resolve_property("a[-1]", &params), Some(&json!("neg")));
        }

        #[test]
        fn mixed_dots_and_accessors() {
            let params = json!({"last": {"hey": {"there": 42}}});
            assert_eq!(
                resolve_property("last[\"hey\"].there", &params),
                Some(&json!(42))
            );
        }

        #[test]
        fn numeric_segment_is_a_literal_key_on_objects() {
            let params = json!({"a": {"1": "key"}});
            assert_eq!(resolve_property("a[1]", &params), Some(&json!("key")));
        }
    }
}
