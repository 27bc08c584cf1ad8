//! The substitution engine.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use stencil_parser::{Placeholder, Scanner, Segment};

use crate::config::Formatting;
use crate::error::FormatError;
use crate::filter::Filter;
use crate::resolver::resolve_property;

/// A substitution engine bound to one [`Formatting`] configuration.
///
/// Each call scans the input once, left to right: literal text passes
/// through byte-for-byte, every placeholder is resolved against the same
/// parameter object, run through its filter chain, and rendered with the
/// configuration's formatter. Substituted output is never re-scanned for
/// further placeholders.
///
/// Failures are all-or-nothing: the first unresolvable property or
/// unrecognized filter aborts the call with no partial output.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use stencil::{Formatter, Formatting};
///
/// struct Plain;
///
/// impl Formatting for Plain {
///     fn format(&self, value: &Value) -> String {
///         match value {
///             Value::String(s) => s.clone(),
///             other => other.to_string(),
///         }
///     }
/// }
///
/// let config = Plain;
/// let formatter = Formatter::new(&config);
/// let out = formatter
///     .format("Hello ${title} ${name}!", &json!({"title": "Mr.", "name": "Foreman"}))
///     .unwrap();
/// assert_eq!(out, "Hello Mr. Foreman!");
/// ```
pub struct Formatter<'c> {
    config: &'c dyn Formatting,
}

impl<'c> Formatter<'c> {
    /// Binds a configuration into a substitution engine.
    pub fn new(config: &'c dyn Formatting) -> Self {
        Self { config }
    }

    /// Substitutes every placeholder in `text`, serializing `params` into
    /// a value tree first.
    pub fn format<T: Serialize>(&self, text: &str, params: &T) -> Result<String, FormatError> {
        let params = serde_json::to_value(params)?;
        self.format_value(text, &params)
    }

    /// Substitutes every placeholder in `text` against an already-built
    /// parameter value.
    pub fn format_value(&self, text: &str, params: &Value) -> Result<String, FormatError> {
        let mut out = String::with_capacity(text.len());
        for segment in Scanner::new(text) {
            match segment {
                Segment::Text(t) => out.push_str(t),
                Segment::Placeholder(p) => out.push_str(&self.substitute(&p, params)?),
            }
        }
        Ok(out)
    }

    fn substitute(&self, ph: &Placeholder<'_>, params: &Value) -> Result<String, FormatError> {
        let value = match resolve_property(ph.path, params) {
            Some(v) => {
                if ph.filters.is_empty() {
                    return Ok(self.config.format(v));
                }
                v.clone()
            }
            None => self
                .config
                .default_value(ph.path, params)
                .ok_or_else(|| FormatError::PropertyNotFound(ph.path.to_string()))?,
        };
        let value = self.apply_filters(ph, value)?;
        Ok(self.config.format(&value))
    }

    /// Threads a value through the placeholder's filter chain, left to
    /// right, looking every filter up fresh.
    fn apply_filters(&self, ph: &Placeholder<'_>, mut value: Value) -> Result<Value, FormatError> {
        for call in &ph.filters {
            let raw: Vec<String> = call.args.iter().map(|a| a.to_string()).collect();
            let filter = self
                .lookup(call.name, &raw)
                .ok_or_else(|| FormatError::FilterNotRecognized(call.name.to_string()))?;
            let args = filter.decode_args(&raw);
            value = filter.transform(value, &args);
        }
        Ok(value)
    }

    fn lookup(&self, name: &str, raw_args: &[String]) -> Option<Arc<dyn Filter>> {
        self.config
            .filters()
            .and_then(|set| set.get(name))
            .cloned()
            .or_else(|| self.config.default_filter(name, raw_args))
    }
}
