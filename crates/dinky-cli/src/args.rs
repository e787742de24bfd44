//! Command-line argument definitions for the Dinky CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control where the markup comes from (a file or
//! an inline string), output path, configuration file selection, and
//! logging verbosity.

use clap::Parser;

/// Command-line arguments for the Dinky markup tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input Dinky file
    #[arg(short, long, conflicts_with = "text", required_unless_present = "text")]
    pub file: Option<String>,

    /// Inline Dinky markup to process instead of a file
    #[arg(short = 'i', long = "text")]
    pub text: Option<String>,

    /// Path to the output PNG file
    #[arg(short, long, default_value = "out.png")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
