//! CLI module for ragmatch
//!
//! Handles command-line argument parsing.

pub mod args;

pub use args::{Args, Commands, DocumentKind, Verbosity};
