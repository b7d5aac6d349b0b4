//! Output dispatch: stdout serializations, compressed files, compact display.

use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};
use crate::persistence::{Conversion, RdfSyntax, TripleStore};

/// Where and how the result of a run is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// Serialize and print.
    Stdout(RdfSyntax),
    /// Serialize, gzip and write to a fixed file name in the output directory.
    Compressed {
        syntax: RdfSyntax,
        file_name: &'static str,
    },
    /// Print the compact notation.
    Display,
}

impl OutputTarget {
    /// Target for the configured mode, with the default already resolved.
    pub fn select(config: &ConvertConfig) -> Self {
        let mode = config.effective_mode();
        match (mode.syntax(), mode.compressed_file_name()) {
            (Some(syntax), Some(file_name)) => OutputTarget::Compressed { syntax, file_name },
            (Some(syntax), None) => OutputTarget::Stdout(syntax),
            (None, _) => OutputTarget::Display,
        }
    }
}

/// Writes the run's result to `out` or to a compressed file.
///
/// Compressed modes print `File <name> created` to `out` once the file is in
/// place and return its path.
///
/// # Errors
///
/// - [`ConvertError::RdfBuild`] if serialization fails
/// - [`ConvertError::Io`] if `out` or the output file cannot be written
pub fn dispatch<W: Write>(
    config: &ConvertConfig,
    conversion: &Conversion,
    store: &TripleStore,
    out: &mut W,
) -> Result<Option<PathBuf>> {
    let target = OutputTarget::select(config);
    debug!("Output target: {:?}", target);

    let written = match target {
        OutputTarget::Stdout(syntax) => {
            let text = store.serialize(syntax)?;
            write_stdout(out, text.as_bytes())?;
            None
        }
        OutputTarget::Display => {
            write_stdout(out, conversion.compact.as_bytes())?;
            None
        }
        OutputTarget::Compressed { syntax, file_name } => {
            let text = store.serialize(syntax)?;
            let path = write_compressed(&config.output_dir, file_name, text.as_bytes())?;
            write_stdout(out, format!("File {file_name} created\n").as_bytes())?;
            Some(path)
        }
    };

    out.flush().map_err(|e| ConvertError::io("<stdout>", e))?;
    Ok(written)
}

fn write_stdout<W: Write>(out: &mut W, bytes: &[u8]) -> Result<()> {
    out.write_all(bytes)
        .map_err(|e| ConvertError::io("<stdout>", e))
}

/// Gzips `data` into `dir/file_name`, replacing any existing file.
///
/// The stream goes to a temporary file in `dir` that is renamed over the
/// target only once complete, so a failed run leaves no partial file.
///
/// # Errors
///
/// Returns [`ConvertError::Io`] naming the target path on any failure.
pub fn write_compressed(dir: &Path, file_name: &str, data: &[u8]) -> Result<PathBuf> {
    let target = dir.join(file_name);
    let io_err = |e: std::io::Error| ConvertError::io(&target, e);

    let staging = NamedTempFile::new_in(dir).map_err(io_err)?;
    let mut encoder = GzEncoder::new(staging, Compression::default());
    encoder.write_all(data).map_err(io_err)?;
    let staging = encoder.finish().map_err(io_err)?;
    staging.persist(&target).map_err(|e| io_err(e.error))?;

    info!("Wrote {} ({} bytes uncompressed)", target.display(), data.len());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputMode;
    use crate::document::{EdgeRecord, NodeRecord, PropertyGraphDocument, SourceFormat};
    use crate::persistence::GraphTransformer;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn conversion() -> Conversion {
        let doc = PropertyGraphDocument {
            edges: vec![EdgeRecord::new("e1", "n1", "n2")],
            nodes: vec![
                NodeRecord::from_values("n1", vec!["Alice".into()]),
                NodeRecord::from_values("n2", Vec::new()),
            ],
        };
        GraphTransformer::default().transform(&doc).unwrap()
    }

    fn run(config: &ConvertConfig) -> (String, Option<PathBuf>, TripleStore) {
        let conversion = conversion();
        let store = TripleStore::from_triples(&conversion.triples).unwrap();
        let mut out = Vec::new();
        let written = dispatch(config, &conversion, &store, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), written, store)
    }

    fn gunzip(path: &Path) -> String {
        let mut text = String::new();
        GzDecoder::new(std::fs::File::open(path).unwrap())
            .read_to_string(&mut text)
            .unwrap();
        text
    }

    #[test]
    fn test_select_targets() {
        let graphml = ConvertConfig::new("g", SourceFormat::GraphMl);
        let yarspg = ConvertConfig::new("g", SourceFormat::YarsPg);

        assert_eq!(
            OutputTarget::select(&graphml),
            OutputTarget::Stdout(RdfSyntax::Turtle)
        );
        assert_eq!(
            OutputTarget::select(&yarspg),
            OutputTarget::Stdout(RdfSyntax::NTriples)
        );
        assert_eq!(
            OutputTarget::select(&graphml.clone().with_mode(OutputMode::Display)),
            OutputTarget::Display
        );
        assert_eq!(
            OutputTarget::select(&yarspg.with_mode(OutputMode::CompressedRdfXml)),
            OutputTarget::Compressed {
                syntax: RdfSyntax::RdfXml,
                file_name: "output.rdf.gz"
            }
        );
    }

    #[test]
    fn test_stdout_turtle_single_trailing_newline() {
        let config = ConvertConfig::new("g", SourceFormat::GraphMl);
        let (printed, written, store) = run(&config);
        assert!(written.is_none());
        assert_eq!(printed, store.serialize(RdfSyntax::Turtle).unwrap());
        assert!(printed.ends_with('\n') && !printed.ends_with("\n\n"));
    }

    #[test]
    fn test_display_prints_compact() {
        let config =
            ConvertConfig::new("g", SourceFormat::GraphMl).with_mode(OutputMode::Display);
        let (printed, _, _) = run(&config);
        assert_eq!(
            printed,
            "(n1)-[]->(n2)\nn1:{label:\"Alice\",0:\"\",1:\"\"}\nn2:{label:\"\",0:\"\",1:\"\"}\n"
        );
    }

    #[test]
    fn test_compressed_matches_uncompressed() {
        let dir = tempfile::tempdir().unwrap();
        for (mode, syntax, name) in [
            (OutputMode::CompressedTurtle, RdfSyntax::Turtle, "output.ttl.gz"),
            (OutputMode::CompressedJsonLd, RdfSyntax::JsonLd, "output.jsonld.gz"),
            (OutputMode::CompressedRdfXml, RdfSyntax::RdfXml, "output.rdf.gz"),
            (
                OutputMode::CompressedLabelledTurtle,
                RdfSyntax::NTriples,
                "outputl.ttl.gz",
            ),
        ] {
            let config = ConvertConfig::new("g", SourceFormat::GraphMl)
                .with_mode(mode)
                .with_output_dir(dir.path());
            let (printed, written, store) = run(&config);

            let path = written.unwrap();
            assert_eq!(path, dir.path().join(name));
            assert_eq!(printed, format!("File {name} created\n"));
            assert_eq!(gunzip(&path), store.serialize(syntax).unwrap());
        }
    }

    #[test]
    fn test_compressed_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("output.ttl.gz");
        std::fs::write(&target, b"stale").unwrap();

        write_compressed(dir.path(), "output.ttl.gz", b"fresh\n").unwrap();
        assert_eq!(gunzip(&target), "fresh\n");
    }

    #[test]
    fn test_compressed_into_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let result = write_compressed(&missing, "output.ttl.gz", b"x");
        assert!(matches!(result, Err(ConvertError::Io { .. })));
        assert!(!missing.join("output.ttl.gz").exists());
    }
}
