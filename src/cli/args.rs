//! Command-line argument parsing for ragmatch
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// ragmatch - Retrieve the passages of a long document that matter for a query
#[derive(Parser, Debug)]
#[command(name = "ragmatch")]
#[command(author = "Jerome (Kubashen) Naidoo")]
#[command(version)]
#[command(about = "Passage retrieval and section classification for resume/job matching", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Kind of document, selecting the section taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentKind {
    Resume,
    Job,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Index a job description by section and print the context relevant to a resume
    Context {
        /// Job description text file
        #[arg(long)]
        job: PathBuf,

        /// Resume (query) text file
        #[arg(long)]
        resume: PathBuf,

        /// Number of passages to retrieve
        #[arg(long)]
        top_k: Option<usize>,

        /// Character budget for the assembled context
        #[arg(long)]
        max_length: Option<usize>,
    },

    /// Chunk a document and print the passages closest to a query
    Search {
        /// Document text file
        #[arg(long)]
        document: PathBuf,

        /// Query text
        #[arg(value_name = "QUERY")]
        query: String,

        /// Number of passages to retrieve
        #[arg(long)]
        top_k: Option<usize>,
    },

    /// Split a resume or job posting into labeled sections (JSON output)
    Sections {
        /// Document text file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Which section taxonomy to apply
        #[arg(long, value_enum, default_value_t = DocumentKind::Resume)]
        kind: DocumentKind,
    },

    /// Print keywords and skills found in a document (no model needed)
    Keywords {
        /// Document text file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Whether the subcommand needs the embedding model loaded
    pub fn needs_model(&self) -> bool {
        !matches!(self.command, Commands::Keywords { .. } | Commands::Config)
    }
}

impl Verbosity {
    /// Tracing filter level; `Normal` defers to the configured level
    pub fn log_level<'a>(&self, configured: &'a str) -> &'a str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => configured,
            Verbosity::Verbose => "debug",
            Verbosity::VeryVerbose => "trace",
        }
    }
}
