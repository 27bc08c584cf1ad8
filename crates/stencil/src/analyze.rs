//! Read-only template analysis over the placeholder grammar.
//!
//! These functions share the grammar with the substitution engine but
//! resolve nothing and decode nothing - they exist for reference analysis
//! of templates before runtime: dependency extraction, linting, counting.

use stencil_parser::{Scanner, Segment};

/// One filter invocation as written in the template. `args` are the raw,
/// pre-decode argument strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRef {
    pub name: String,
    pub args: Vec<String>,
}

/// A placeholder occurrence, as returned from [`enum_variables`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// The exact matched text, including `$` and delimiters.
    pub text: String,
    /// The extracted property path.
    pub property: String,
    /// Filter invocations in chain order.
    pub filters: Vec<FilterRef>,
}

/// A fast check whether `text` contains any placeholder. Stops scanning at
/// the first match.
///
/// ```rust
/// use stencil::has_variables;
///
/// assert!(has_variables("${value}"));
/// assert!(!has_variables("some text"));
/// ```
pub fn has_variables(text: &str) -> bool {
    Scanner::new(text).any(|s| matches!(s, Segment::Placeholder(_)))
}

/// Counts non-overlapping placeholders in `text`.
///
/// ```rust
/// use stencil::count_variables;
///
/// assert_eq!(count_variables("some text"), 0);
/// assert_eq!(count_variables("${first} ${second}"), 2);
/// ```
pub fn count_variables(text: &str) -> usize {
    Scanner::new(text)
        .filter(|s| matches!(s, Segment::Placeholder(_)))
        .count()
}

/// Enumerates every placeholder in `text` as a structural descriptor,
/// without resolving values or applying filters.
pub fn enum_variables(text: &str) -> Vec<Variable> {
    Scanner::new(text)
        .filter_map(|segment| match segment {
            Segment::Placeholder(p) => Some(Variable {
                text: p.text.to_string(),
                property: p.path.to_string(),
                filters: p
                    .filters
                    .iter()
                    .map(|f| FilterRef {
                        name: f.name.to_string(),
                        args: f.args.iter().map(|a| a.to_string()).collect(),
                    })
                    .collect(),
            }),
            Segment::Text(_) => None,
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn count_matches_enumeration(text in ".{0,80}") {
            let count = count_variables(&text);
            prop_assert_eq!(count, enum_variables(&text).len());
            prop_assert_eq!(count > 0, has_variables(&text));
        }
    }
}
