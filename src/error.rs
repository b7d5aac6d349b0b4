//! Error taxonomy for a conversion run.
//!
//! Every variant is terminal: a run either produces its full output or
//! reports one of these and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input does not have the expected GraphML or YARS-PG shape.
    #[error("{}: {reason}", path.display())]
    InputFormat { path: PathBuf, reason: String },

    /// The input could not be read or an output file could not be written.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The mapped triples could not be materialized or serialized.
    #[error("RDF build error: {0}")]
    RdfBuild(String),
}

impl ConvertError {
    pub fn input_format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ConvertError::InputFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn rdf_build(msg: impl Into<String>) -> Self {
        ConvertError::RdfBuild(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_format_display_names_path() {
        let err = ConvertError::input_format("graph.xml", "missing <graph> element");
        let msg = err.to_string();
        assert!(msg.contains("graph.xml"));
        assert!(msg.contains("missing <graph> element"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let inner = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ConvertError::io("output.ttl.gz", inner);
        assert!(err.to_string().contains("output.ttl.gz"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_rdf_build_display() {
        let err = ConvertError::rdf_build("bad label");
        assert_eq!(err.to_string(), "RDF build error: bad label");
    }
}
