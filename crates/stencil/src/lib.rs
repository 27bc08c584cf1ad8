//! # Stencil - Template-Variable Substitution
//!
//! `stencil` replaces `${...}`-style placeholders in text with values
//! resolved from a parameter object, optionally piped through a chain of
//! named filters, and rendered by a caller-supplied formatting policy.
//!
//! ## Core Concepts
//!
//! - [`Formatting`]: the configuration capability - a value formatter,
//!   an optional filter registry, and optional fallback hooks
//! - [`Filter`]: a named value transform with overridable argument decoding
//! - [`Formatter`]: the substitution engine bound to one configuration
//! - [`resolve_property`]: nested property-path resolution on its own
//! - [`has_variables`] / [`count_variables`] / [`enum_variables`]:
//!   read-only template analysis over the same grammar
//! - [`codec`]: numeric-character-reference encoding for filter arguments
//!
//! ## Syntax
//!
//! Placeholders use any of five delimiter pairs, as long as the closer
//! matches the opener: `${prop}`, `$(prop)`, `$<prop>`, `$[prop]`,
//! `$/prop/`. A mismatched pair like `${prop)` is not an error - it stays
//! literal text. Property paths support dotted names (`user.name`),
//! numeric indices (`items[0]` or `items.0`), quoted keys
//! (`row['first name']`), and `this` for the parameter object itself.
//! Filters chain left to right with `|` and take `:`-separated arguments:
//! `${price | round: 2 | currency: EUR}`.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use serde_json::{json, Value};
//! use stencil::{Filter, FilterSet, Formatter, Formatting};
//!
//! /// Serializes any value to its JSON text.
//! struct JsonFilter;
//!
//! impl Filter for JsonFilter {
//!     fn transform(&self, value: Value, _args: &[String]) -> Value {
//!         Value::String(value.to_string())
//!     }
//! }
//!
//! struct Config {
//!     filters: FilterSet,
//! }
//!
//! impl Formatting for Config {
//!     fn format(&self, value: &Value) -> String {
//!         match value {
//!             Value::String(s) => s.clone(),
//!             other => other.to_string(),
//!         }
//!     }
//!
//!     fn filters(&self) -> Option<&FilterSet> {
//!         Some(&self.filters)
//!     }
//! }
//!
//! let mut filters: FilterSet = HashMap::new();
//! filters.insert("json".into(), Arc::new(JsonFilter));
//! let config = Config { filters };
//!
//! let formatter = Formatter::new(&config);
//! let params = json!({"name": "Foreman", "address": {"no": 10}});
//!
//! let out = formatter.format("${name}: ${address | json}", &params).unwrap();
//! assert_eq!(out, r#"Foreman: {"no":10}"#);
//! ```
//!
//! ## Failure Model
//!
//! A substitution call either returns the fully substituted text or fails
//! as a whole: an unresolvable property yields
//! [`FormatError::PropertyNotFound`], an unknown filter
//! [`FormatError::FilterNotRecognized`]. The
//! [`default_value`](Formatting::default_value) and
//! [`default_filter`](Formatting::default_filter) hooks exist to convert
//! those failures into fallback behavior.
//!
//! ## See Also
//!
//! - [`stencil_parser`]: the underlying placeholder grammar scanner

pub mod analyze;
pub mod codec;
mod config;
mod error;
mod filter;
mod format;
mod resolver;

pub use analyze::{count_variables, enum_variables, has_variables, FilterRef, Variable};
pub use codec::{decode_arg, decode_args, sanitize_arg, ArgEncoding};
pub use config::Formatting;
pub use error::FormatError;
pub use filter::{Filter, FilterSet};
pub use format::Formatter;
pub use resolver::resolve_property;

// Parameter objects are serde_json value trees; re-exported so callers can
// build them without naming serde_json directly.
pub use serde_json::Value;
