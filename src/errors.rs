//! Error types for the harness.

use derive_more::{Display, From};
use dlprobe_mangle::MangleError;
use std::path::PathBuf;

#[derive(Debug, Display, From)]
pub enum HarnessError {
    /// The library file could not be opened by the platform loader.
    #[display("failed to open library {}: {source}", path.display())]
    #[from(skip)]
    Open {
        path: PathBuf,
        source: libloading::Error,
    },

    /// A symbol expected to exist did not resolve.
    #[display("failed to resolve symbol {symbol:?}: {source}")]
    #[from(skip)]
    Resolve {
        symbol: String,
        source: libloading::Error,
    },

    /// A surface signature could not be mangled.
    #[display("{_0}")]
    Mangle(MangleError),
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Open { source, .. } | HarnessError::Resolve { source, .. } => {
                Some(source)
            }
            HarnessError::Mangle(e) => Some(e),
        }
    }
}
