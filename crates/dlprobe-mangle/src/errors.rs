//! Error types for decorated-name construction.

use derive_more::Display;

pub type MangleResult<T> = Result<T, MangleError>;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum MangleError {
    /// The decorated-name scheme implemented here is the VC x64 one;
    /// other architectures are rejected rather than approximated.
    #[display("unsupported target architecture: {_0}")]
    UnsupportedTarget(String),

    /// A type was used in a position it has no encoding for
    /// (e.g. `void` in a parameter list).
    #[display("type not representable in this position: {_0}")]
    UnrepresentableType(String),

    /// A type spelling that the parser does not recognize.
    #[display("unknown type name: {_0:?}")]
    UnknownTypeName(String),
}

impl std::error::Error for MangleError {}
