//! Error types for substitution.

/// Errors that can abort a substitution call.
///
/// Both fatal conditions are all-or-nothing: the call produces no partial
/// output. Malformed placeholder syntax is deliberately *not* an error -
/// the scanner leaves such spans as literal text.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// A property path failed to resolve and the configuration supplied no
    /// default value for it.
    #[error("Property {0:?} does not exist")]
    PropertyNotFound(String),

    /// A filter name was absent from the registry and the configuration
    /// supplied no substitute.
    #[error("Filter {0:?} not recognized")]
    FilterNotRecognized(String),

    /// The parameter object could not be serialized into a value tree.
    #[error("Invalid parameters: {0}")]
    Params(#[from] serde_json::Error),
}
