//! Error types for descriptor loading.
//!
//! Decoding a single `pom.xml` can fail with a [`DecodeError`]. Anything that
//! goes wrong while building the module tree is reported as a
//! [`DescriptorLoadError`], which always carries the module path that was being
//! loaded so the caller can tell the user exactly where the tree broke.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to turn the raw bytes of one descriptor into a [`Descriptor`](crate::descriptor::Descriptor).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file is not valid UTF-8
    #[error("descriptor is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// The file is not well-formed XML
    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The document root is something other than `<project>`
    #[error("expected a <project> root element, found <{found}>")]
    UnexpectedRoot { found: String },

    /// A `<module>` entry resolves to the declaring module's own directory
    #[error("module entry {entry:?} refers to the declaring module itself")]
    SelfModule { entry: String },
}

/// Failure to load one module of the tree.
///
/// Errors are never recovered locally: the first one aborts the whole build and
/// is handed back unchanged through every level of the recursion.
#[derive(Debug, Error)]
pub enum DescriptorLoadError {
    /// The descriptor file could not be read
    #[error("failed to read descriptor at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The descriptor file was read but could not be decoded
    #[error("failed to decode descriptor at {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

impl DescriptorLoadError {
    /// The module directory whose descriptor failed to load.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Decode { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_accessor() {
        let err = DescriptorLoadError::Read {
            path: PathBuf::from("root/child"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.path(), Path::new("root/child"));

        let err = DescriptorLoadError::Decode {
            path: PathBuf::from("root"),
            source: DecodeError::UnexpectedRoot {
                found: "settings".to_string(),
            },
        };
        assert_eq!(err.path(), Path::new("root"));
    }

    #[test]
    fn test_display_includes_path_and_cause() {
        let err = DescriptorLoadError::Read {
            path: PathBuf::from("parent/missing"),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No such file or directory",
            ),
        };
        let message = err.to_string();

        assert!(message.contains("parent/missing"));
        assert!(message.contains("No such file or directory"));
    }

    #[test]
    fn test_unexpected_root_message() {
        let err = DecodeError::UnexpectedRoot {
            found: "settings".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "expected a <project> root element, found <settings>"
        );
    }
}
