//! Error types for glyph generation
//!
//! Library code returns [`SlcResult`]; the binary wraps everything in
//! `anyhow` at the boundary (see [`crate::core::runner`]).

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used throughout the library
pub type SlcResult<T> = Result<T, SlcError>;

/// Every way a generation run can fail
#[derive(Debug, Error)]
pub enum SlcError {
    /// A resolved metric would make the geometry undefined
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A glyph could not be composed
    #[error("glyph '{glyph}': {operation} failed: {reason}")]
    Geometry {
        glyph: String,
        operation: &'static str,
        reason: String,
    },

    /// Writing or reading a file failed
    #[error("failed to {operation} {}", path.display())]
    Serialization {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file could not be used
    #[error("settings file {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    /// Two catalog records share a glyph name
    #[error("glyph '{name}' is defined more than once")]
    DuplicateGlyph { name: String },

    /// The SFD reader rejected its input
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// A geometry failure that has not yet been attributed to a glyph.
///
/// Shape construction does not know which glyph it is building; the
/// [`GlyphBuilder`](crate::tools::GlyphBuilder) attaches the name.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{operation} failed: {reason}")]
pub struct GeometryFault {
    pub operation: &'static str,
    pub reason: String,
}

impl GeometryFault {
    pub fn new(operation: &'static str, reason: impl Into<String>) -> Self {
        Self {
            operation,
            reason: reason.into(),
        }
    }

    /// Attach the glyph name, producing the public error.
    pub fn in_glyph(self, glyph: &str) -> SlcError {
        SlcError::Geometry {
            glyph: glyph.to_string(),
            operation: self.operation,
            reason: self.reason,
        }
    }
}

/// Result alias for shape-level operations
pub type GeomResult<T> = Result<T, GeometryFault>;

/// Adds file context to I/O results
pub trait FileContext<T> {
    fn with_file_context(self, operation: &'static str, path: &Path) -> SlcResult<T>;
}

impl<T> FileContext<T> for io::Result<T> {
    fn with_file_context(self, operation: &'static str, path: &Path) -> SlcResult<T> {
        self.map_err(|source| SlcError::Serialization {
            operation,
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_names_glyph() {
        let err = GeometryFault::new("union", "empty ring").in_glyph("u1FB00");
        assert_eq!(
            err.to_string(),
            "glyph 'u1FB00': union failed: empty ring"
        );
    }

    #[test]
    fn test_file_context_keeps_source() {
        let io_err: io::Result<()> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        let err = io_err
            .with_file_context("write", Path::new("/tmp/out.sfd"))
            .unwrap_err();
        assert!(err.to_string().contains("/tmp/out.sfd"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
