//! The filter capability: named value transforms applied in a chain.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::codec;

/// A named value transform, applied between property resolution and final
/// formatting.
///
/// Filters are looked up by name from [`Formatting::filters`] (or supplied
/// by [`Formatting::default_filter`]) and applied left to right:
/// `${v | f1 | f2}` feeds the output of `f1` into `f2`.
///
/// The engine treats filters as opaque: a filter may carry internal state
/// (for example, a repeat count set by the `default_filter` hook before
/// `transform` runs), and the engine never caches filter instances across
/// calls beyond what the registry itself retains. Serializing access to a
/// shared stateful filter is the configuration owner's concern.
///
/// [`Formatting::filters`]: crate::Formatting::filters
/// [`Formatting::default_filter`]: crate::Formatting::default_filter
pub trait Filter {
    /// Transforms a value, given the decoded arguments of this invocation.
    fn transform(&self, value: Value, args: &[String]) -> Value;

    /// Prepares raw arguments for [`transform`](Self::transform).
    ///
    /// The default pipes every argument through the codec, turning numeric
    /// character references back into literal characters. Override to
    /// receive the raw text verbatim, or to apply custom decoding.
    fn decode_args(&self, raw: &[String]) -> Vec<String> {
        codec::decode_args(raw)
    }
}

/// A filter registry: names to shared filter handles.
///
/// The engine reads the registry fresh on every lookup within a call, so
/// entries added between calls (or lazily from a `default_filter` hook
/// holding interior-mutable storage) are picked up without rebinding.
pub type FilterSet = HashMap<String, Arc<dyn Filter>>;
