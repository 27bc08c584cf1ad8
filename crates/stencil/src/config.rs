//! The formatting configuration capability.

use std::sync::Arc;

use serde_json::Value;

use crate::filter::{Filter, FilterSet};

/// Caller-supplied configuration binding a value formatter, an optional
/// filter registry, and optional fallback hooks into one capability.
///
/// Only [`format`](Self::format) is required; the optional members default
/// to "not provided". The engine holds the configuration by reference for
/// its whole lifetime and consults the registry and hooks fresh on every
/// placeholder, never caching across calls.
///
/// # Example
///
/// ```rust
/// use serde_json::Value;
/// use stencil::Formatting;
///
/// /// Plain text rendering: strings bare, everything else as JSON.
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
/// ```
pub trait Formatting {
    /// Renders the final value of a placeholder as output text.
    fn format(&self, value: &Value) -> String;

    /// The named filter registry, if this configuration carries one.
    fn filters(&self) -> Option<&FilterSet> {
        None
    }

    /// Fallback value for a property path that failed to resolve.
    ///
    /// Returning `Some` converts the would-be
    /// [`PropertyNotFound`](crate::FormatError::PropertyNotFound) failure
    /// into a substitution of the returned value (which still runs through
    /// any filter chain). Return `Some(Value::Null)` to supply an explicit
    /// null; the default declines.
    fn default_value(&self, _path: &str, _params: &Value) -> Option<Value> {
        None
    }

    /// Fallback filter for a name absent from the registry.
    ///
    /// Receives the raw, not-yet-decoded arguments of the invocation.
    /// Covers aliasing (return another registry entry), lazy loading
    /// (instantiate, stash behind interior mutability, return the handle),
    /// and composite names like `repeat_3` (parse the name, configure a
    /// stateful filter, return it). The default declines, which surfaces
    /// [`FilterNotRecognized`](crate::FormatError::FilterNotRecognized).
    fn default_filter(&self, _name: &str, _raw_args: &[String]) -> Option<Arc<dyn Filter>> {
        None
    }
}
