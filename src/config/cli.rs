//! Command line model of the `pgconv` binary.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Convert GraphML and YARS-PG property graphs to RDF.
///
/// Output flags are exclusive in effect: when several are given, the first
/// one in the order `-x -j -tl -ct -cj -cx -ctl -d` wins.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "pgconv")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert GraphML and YARS-PG property graphs to RDF")]
pub struct Args {
    /// Input graph document
    pub file: PathBuf,

    /// Print Turtle (same as giving no output flag)
    #[arg(short = 't', long)]
    pub turtle: bool,

    /// Print JSON-LD
    #[arg(short = 'j', long)]
    pub jsonld: bool,

    /// Print RDF/XML
    #[arg(short = 'x', long)]
    pub rdfxml: bool,

    /// Print N-Triples, one statement per line with labelled blank nodes (-tl)
    #[arg(long)]
    pub turtlelabel: bool,

    /// Write gzip-compressed Turtle to output.ttl.gz (-ct)
    #[arg(long)]
    pub cturtle: bool,

    /// Write gzip-compressed JSON-LD to output.jsonld.gz (-cj)
    #[arg(long)]
    pub cjsonld: bool,

    /// Write gzip-compressed RDF/XML to output.rdf.gz (-cx)
    #[arg(long)]
    pub crdfxml: bool,

    /// Write gzip-compressed N-Triples to outputl.ttl.gz (-ctl)
    #[arg(long)]
    pub cturtlel: bool,

    /// Print the compact arrow/record notation instead of RDF
    #[arg(short = 'd', long)]
    pub display: bool,

    /// Read the input as YARS-PG (YAML) instead of GraphML
    #[arg(short = 'y', long)]
    pub yarspg: bool,

    /// Accept literal values containing quotes, backslashes or line breaks
    #[arg(long)]
    pub escape_literals: bool,

    /// Enable verbose logging (to stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parses the process arguments, accepting the multi-letter single-dash
    /// flags as well.
    pub fn parse_env() -> Self {
        Self::parse_from(expand_legacy_flags(std::env::args_os()))
    }

    /// Like [`Args::parse_env`] over an explicit argument list, the first
    /// item being the program name.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags or a missing input file.
    pub fn try_parse_args<I, S>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self::try_parse_from(expand_legacy_flags(args))
    }
}

/// Rewrites `-tl`, `-ct`, `-cj`, `-cx` and `-ctl` to their long forms.
///
/// clap reads `-tl` as the two short flags `-t -l`, so these have to be
/// translated before parsing. Arguments after `--` are left alone.
pub fn expand_legacy_flags<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_separator {
                return arg;
            }
            if arg == "--" {
                after_separator = true;
                return arg;
            }
            let long = arg.to_str().and_then(legacy_long_form);
            match long {
                Some(long) => OsString::from(long),
                None => arg,
            }
        })
        .collect()
}

fn legacy_long_form(flag: &str) -> Option<&'static str> {
    match flag {
        "-tl" => Some("--turtlelabel"),
        "-ct" => Some("--cturtle"),
        "-cj" => Some("--cjsonld"),
        "-cx" => Some("--crdfxml"),
        "-ctl" => Some("--cturtlel"),
        _ => None,
    }
}
