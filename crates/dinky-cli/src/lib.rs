//! CLI logic for the Dinky markup tool.
//!
//! This module contains the core CLI logic for the Dinky markup tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io};

use log::info;

use dinky::{DinkyError, DocumentBuilder};

/// Run the Dinky CLI application
///
/// This function processes the input markup (from a file or inline text)
/// through the Dinky pipeline and writes the resulting PNG to the output
/// file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `DinkyError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Encoding errors
pub fn run(args: &Args) -> Result<(), DinkyError> {
    info!(output_path = args.output; "Processing document");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Inline text takes precedence over a file path
    let source = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => {
            info!(input_path = path; "Reading input file");
            fs::read_to_string(path)?
        }
        (None, None) => {
            return Err(DinkyError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "no input was provided",
            )));
        }
    };

    // Process the markup using the DocumentBuilder API
    let builder = DocumentBuilder::new(app_config);
    let document = builder.parse(&source)?;
    let png = builder.render_png(&document)?;

    // Write output file
    fs::write(&args.output, png)?;

    info!(output_file = args.output; "PNG exported successfully");

    Ok(())
}
