//! Placeholder grammar scanner for template-variable substitution.
//!
//! This crate recognizes `$`-prefixed placeholders in five interchangeable
//! delimiter styles and splits template text into literal spans and
//! structured placeholder descriptors. It performs no value resolution and
//! no argument decoding - that is the engine's job - so the scanner can also
//! back read-only template analysis.
//!
//! # Syntax
//!
//! A placeholder is `$` followed by one of five delimiter pairs, which must
//! open and close with the *same* pair:
//!
//! - `${prop}`, `$(prop)`, `$<prop>`, `$[prop]`, `$/prop/`
//! - `${user.address.street}` - nested property access via dot notation
//! - `${items[0]}`, `${items["key"]}` - bracketed index / quoted-key access
//! - `${value | upper | pad: 10}` - pipe-delimited filter chain with
//!   colon-delimited arguments
//!
//! Mismatched pairs (`${prop)`) and anything else that fails to parse are
//! not errors: the span passes through as literal text.
//!
//! # Example
//!
//! ```rust
//! use stencil_parser::{Scanner, Segment};
//!
//! let mut segments = Scanner::new("total: ${count | pad: 3}");
//!
//! assert!(matches!(segments.next(), Some(Segment::Text("total: "))));
//! match segments.next() {
//!     Some(Segment::Placeholder(p)) => {
//!         assert_eq!(p.text, "${count | pad: 3}");
//!         assert_eq!(p.path, "count");
//!         assert_eq!(p.filters[0].name, "pad");
//!         assert_eq!(p.filters[0].args, vec!["3"]);
//!     }
//!     other => panic!("expected a placeholder, got {:?}", other),
//! }
//! ```

/// The five delimiter pairs a placeholder can use.
///
/// The closer must belong to the same pair as the opener; a `{` opened
/// placeholder terminated by `)` is not a placeholder at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delim {
    /// `${ ... }`
    Brace,
    /// `$( ... )`
    Paren,
    /// `$< ... >`
    Angle,
    /// `$[ ... ]`
    Bracket,
    /// `$/ ... /`
    Slash,
}

impl Delim {
    /// Returns the delimiter for an opening character, if any.
    pub fn from_opener(c: char) -> Option<Delim> {
        match c {
            '{' => Some(Delim::Brace),
            '(' => Some(Delim::Paren),
            '<' => Some(Delim::Angle),
            '[' => Some(Delim::Bracket),
            '/' => Some(Delim::Slash),
            _ => None,
        }
    }

    /// The opening character of this pair.
    pub fn opener(self) -> char {
        match self {
            Delim::Brace => '{',
            Delim::Paren => '(',
            Delim::Angle => '<',
            Delim::Bracket => '[',
            Delim::Slash => '/',
        }
    }

    /// The closing character of this pair.
    pub fn closer(self) -> char {
        match self {
            Delim::Brace => '}',
            Delim::Paren => ')',
            Delim::Angle => '>',
            Delim::Bracket => ']',
            Delim::Slash => '/',
        }
    }
}

/// One filter invocation inside a placeholder: a name plus raw arguments.
///
/// Arguments are trimmed but otherwise untouched - decoding of numeric
/// character references happens later, in the engine, so that filters can
/// opt out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCall<'a> {
    /// Filter name, possibly empty for malformed invocations like `|:x`.
    pub name: &'a str,
    /// Raw argument text, one entry per `:` separator.
    pub args: Vec<&'a str>,
}

/// A recognized placeholder occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// The exact matched span, including `$` and both delimiters.
    pub text: &'a str,
    /// Which delimiter pair the placeholder uses.
    pub delim: Delim,
    /// The raw property path, trimmed of surrounding whitespace.
    pub path: &'a str,
    /// Filter invocations in chain order. Empty pipe segments are dropped.
    pub filters: Vec<FilterCall<'a>>,
}

/// A span of template text: either literal text or a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text, passed through byte-for-byte.
    Text(&'a str),
    /// A recognized placeholder.
    Placeholder(Placeholder<'a>),
}

/// Left-to-right scanner over template text.
///
/// Yields [`Segment`]s covering the entire input: concatenating the `text`
/// of every segment reproduces the input exactly. A `$` that does not begin
/// a well-formed placeholder is yielded as literal text, so malformed or
/// mismatched spans survive unchanged.
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Attempts to parse a placeholder starting at `start` (the `$` byte).
    ///
    /// Returns the placeholder and the byte offset just past its closer, or
    /// `None` when the span is not a well-formed placeholder.
    fn parse_placeholder(&self, start: usize) -> Option<(Placeholder<'a>, usize)> {
        let bytes = self.input.as_bytes();
        let mut i = start + 1;
        let delim = Delim::from_opener(*bytes.get(i)? as char)?;
        let closer = delim.closer() as u8;
        i += 1;
        i = skip_ws(bytes, i);

        // Property path: identifier, then any number of `.name` steps or
        // bracket accessors, with insignificant whitespace in between.
        let path_start = i;
        if !matches!(bytes.get(i), Some(&b) if is_word(b)) {
            return None;
        }
        while matches!(bytes.get(i), Some(&b) if is_word(b)) {
            i += 1;
        }
        let mut path_end = i;
        loop {
            let mut j = skip_ws(bytes, i);
            match bytes.get(j) {
                Some(b'.') => {
                    j = skip_ws(bytes, j + 1);
                    if !matches!(bytes.get(j), Some(&b) if is_word(b)) {
                        return None;
                    }
                    while matches!(bytes.get(j), Some(&b) if is_word(b)) {
                        j += 1;
                    }
                }
                Some(b'[') => {
                    j = self.parse_accessor(j)?;
                }
                _ => break,
            }
            i = j;
            path_end = i;
        }
        let path = &self.input[path_start..path_end];

        // Optional filter chain, then the matching closer.
        let mut filters = Vec::new();
        i = skip_ws(bytes, i);
        loop {
            match bytes.get(i) {
                Some(&c) if c == closer => {
                    let end = i + 1;
                    let placeholder = Placeholder {
                        text: &self.input[start..end],
                        delim,
                        path,
                        filters,
                    };
                    return Some((placeholder, end));
                }
                Some(b'|') => {
                    i = skip_ws(bytes, i + 1);
                    let name_start = i;
                    while matches!(bytes.get(i), Some(&b) if is_word(b)) {
                        i += 1;
                    }
                    let name = &self.input[name_start..i];
                    i = skip_ws(bytes, i);
                    let mut args = Vec::new();
                    while bytes.get(i) == Some(&b':') {
                        i += 1;
                        let arg_start = i;
                        while matches!(bytes.get(i), Some(&b) if !is_reserved(b)) {
                            i += 1;
                        }
                        args.push(self.input[arg_start..i].trim());
                    }
                    // An empty pipe segment (`${v||f}`) is skipped, not an error.
                    if !name.is_empty() || !args.is_empty() {
                        filters.push(FilterCall { name, args });
                    }
                }
                _ => return None,
            }
        }
    }

    /// Parses a bracket accessor at `open` (the `[` byte): a signed integer
    /// or a quoted string with backslash escapes. Returns the offset past
    /// the closing `]`.
    fn parse_accessor(&self, open: usize) -> Option<usize> {
        let bytes = self.input.as_bytes();
        let mut j = skip_ws(bytes, open + 1);
        match *bytes.get(j)? {
            b'-' | b'0'..=b'9' => {
                if bytes[j] == b'-' {
                    j += 1;
                }
                if !matches!(bytes.get(j), Some(b'0'..=b'9')) {
                    return None;
                }
                while matches!(bytes.get(j), Some(b'0'..=b'9')) {
                    j += 1;
                }
            }
            quote @ (b'\'' | b'"') => {
                j += 1;
                loop {
                    match *bytes.get(j)? {
                        b'\\' => j += 2,
                        c if c == quote => {
                            j += 1;
                            break;
                        }
                        _ => j += 1,
                    }
                }
            }
            _ => return None,
        }
        j = skip_ws(bytes, j);
        if bytes.get(j) != Some(&b']') {
            return None;
        }
        Some(j + 1)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }
        let rest = &self.input[self.pos..];
        match rest.find('$') {
            // Literal text up to the next candidate.
            Some(offset) if offset > 0 => {
                self.pos += offset;
                Some(Segment::Text(&rest[..offset]))
            }
            Some(_) => match self.parse_placeholder(self.pos) {
                Some((placeholder, end)) => {
                    self.pos = end;
                    Some(Segment::Placeholder(placeholder))
                }
                None => {
                    // Not a placeholder: the `$` is literal text, and
                    // scanning resumes right after it so that later `$`
                    // starts still get their chance.
                    let text = &self.input[self.pos..self.pos + 1];
                    self.pos += 1;
                    Some(Segment::Text(text))
                }
            },
            None => {
                self.pos = self.input.len();
                Some(Segment::Text(rest))
            }
        }
    }
}

/// Word characters allowed in property-path segments and filter names.
fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Characters that terminate a raw filter argument. Literal occurrences
/// must be written as numeric character references instead.
fn is_reserved(b: u8) -> bool {
    matches!(
        b,
        b'|' | b':' | b'{' | b'}' | b'(' | b')' | b'<' | b'>' | b']' | b'/'
    )
}

fn skip_ws(bytes: &[u8], mut i: usize) -> usize {
    while matches!(bytes.get(i), Some(b' ' | b'\t' | b'\r' | b'\n')) {
        i += 1;
    }
    i
}
