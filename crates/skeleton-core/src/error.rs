//! Error taxonomy for scaffolding steps
//!
//! Validation failures never reach this type; they are handled at prompt
//! time with a re-prompt. Everything here is fatal to the step that hit it
//! and halts the run with the offending path attached.

use std::path::PathBuf;
use thiserror::Error;

/// A fatal scaffolding failure, carrying the path it happened on.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A stub file the skeleton is supposed to ship is missing.
    #[error("stub file missing: {path} (the skeleton appears to be corrupted)")]
    MissingStub { path: PathBuf },

    /// A file or directory could not be read.
    #[error("cannot read {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file or directory could not be written, created, or renamed.
    #[error("cannot write {path}")]
    Unwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An existing composer.json is not a valid JSON object.
    #[error("{path} is not a valid composer manifest")]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ScaffoldError {
    /// The path the failure was reported on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScaffoldError::MissingStub { path }
            | ScaffoldError::Unreadable { path, .. }
            | ScaffoldError::Unwritable { path, .. }
            | ScaffoldError::InvalidManifest { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_the_offending_path() {
        let err = ScaffoldError::MissingStub {
            path: PathBuf::from("stubs/rector.php.stub"),
        };
        assert!(err.to_string().contains("stubs/rector.php.stub"));
        assert_eq!(err.path(), std::path::Path::new("stubs/rector.php.stub"));
    }
}
