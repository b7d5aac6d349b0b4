//! Immutable run configuration.

use std::path::{Path, PathBuf};

use crate::config::cli::Args;
use crate::document::SourceFormat;
use crate::persistence::{LiteralPolicy, RdfSyntax};

/// The single output selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    Turtle,
    /// N-Triples with explicit blank node labels.
    LabelledTurtle,
    RdfXml,
    JsonLd,
    CompressedTurtle,
    CompressedJsonLd,
    CompressedRdfXml,
    CompressedLabelledTurtle,
    /// Compact arrow/record notation.
    Display,
    /// Turtle for GraphML input, N-Triples for YARS-PG input.
    #[default]
    Default,
}

impl OutputMode {
    /// Picks the mode from the output flags. The first set flag in the order
    /// RDF/XML, JSON-LD, labelled Turtle, compressed Turtle, compressed
    /// JSON-LD, compressed RDF/XML, compressed labelled Turtle, display wins.
    ///
    /// `-t` is not part of the chain and selects [`OutputMode::Default`].
    pub fn from_flags(args: &Args) -> Self {
        if args.rdfxml {
            OutputMode::RdfXml
        } else if args.jsonld {
            OutputMode::JsonLd
        } else if args.turtlelabel {
            OutputMode::LabelledTurtle
        } else if args.cturtle {
            OutputMode::CompressedTurtle
        } else if args.cjsonld {
            OutputMode::CompressedJsonLd
        } else if args.crdfxml {
            OutputMode::CompressedRdfXml
        } else if args.cturtlel {
            OutputMode::CompressedLabelledTurtle
        } else if args.display {
            OutputMode::Display
        } else {
            OutputMode::Default
        }
    }

    /// Replaces [`OutputMode::Default`] by the concrete mode for `source`.
    pub fn resolve(self, source: SourceFormat) -> Self {
        match (self, source) {
            (OutputMode::Default, SourceFormat::GraphMl) => OutputMode::Turtle,
            (OutputMode::Default, SourceFormat::YarsPg) => OutputMode::LabelledTurtle,
            (mode, _) => mode,
        }
    }

    /// RDF syntax written by this mode; `None` for display and unresolved
    /// default.
    pub fn syntax(self) -> Option<RdfSyntax> {
        match self {
            OutputMode::Turtle | OutputMode::CompressedTurtle => Some(RdfSyntax::Turtle),
            OutputMode::LabelledTurtle | OutputMode::CompressedLabelledTurtle => {
                Some(RdfSyntax::NTriples)
            }
            OutputMode::RdfXml | OutputMode::CompressedRdfXml => Some(RdfSyntax::RdfXml),
            OutputMode::JsonLd | OutputMode::CompressedJsonLd => Some(RdfSyntax::JsonLd),
            OutputMode::Display | OutputMode::Default => None,
        }
    }

    /// Fixed file name written by the compressed modes.
    pub fn compressed_file_name(self) -> Option<&'static str> {
        match self {
            OutputMode::CompressedTurtle => Some("output.ttl.gz"),
            OutputMode::CompressedJsonLd => Some("output.jsonld.gz"),
            OutputMode::CompressedRdfXml => Some("output.rdf.gz"),
            OutputMode::CompressedLabelledTurtle => Some("outputl.ttl.gz"),
            _ => None,
        }
    }
}

/// Everything a run needs, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub source: SourceFormat,
    pub mode: OutputMode,
    pub literal_policy: LiteralPolicy,
    /// Directory receiving compressed output files.
    pub output_dir: PathBuf,
}

impl ConvertConfig {
    /// Default output mode, strict literals, files written to the current
    /// directory.
    pub fn new(input: impl Into<PathBuf>, source: SourceFormat) -> Self {
        Self {
            input: input.into(),
            source,
            mode: OutputMode::Default,
            literal_policy: LiteralPolicy::Strict,
            output_dir: PathBuf::from("."),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_literal_policy(mut self, policy: LiteralPolicy) -> Self {
        self.literal_policy = policy;
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// The output mode with the default already resolved for the source.
    pub fn effective_mode(&self) -> OutputMode {
        self.mode.resolve(self.source)
    }
}

impl From<&Args> for ConvertConfig {
    fn from(args: &Args) -> Self {
        let source = if args.yarspg {
            SourceFormat::YarsPg
        } else {
            SourceFormat::GraphMl
        };
        let policy = if args.escape_literals {
            LiteralPolicy::Escape
        } else {
            LiteralPolicy::Strict
        };
        ConvertConfig::new(&args.file, source)
            .with_mode(OutputMode::from_flags(args))
            .with_literal_policy(policy)
    }
}
