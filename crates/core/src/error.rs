//! Parse errors for the closed identifier sets.

/// Failure to parse an identifier string.
///
/// All valid ids are compile-time constants; an unknown string at a parse
/// boundary is a caller error and is rejected rather than defaulted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Not a module id between 0 and 5.
    #[error("unknown module id: {0:?}")]
    Module(String),

    /// Not one of the three module statuses.
    #[error("unknown module status: {0:?}")]
    Status(String),

    /// Neither "general" nor a known problem id.
    #[error("unknown context id: {0:?}")]
    Context(String),
}
