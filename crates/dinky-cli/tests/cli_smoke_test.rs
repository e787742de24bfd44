//! End-to-end tests for the CLI pipeline.
//!
//! These drive `run` directly with constructed arguments and verify the
//! produced PNG files on disk.

use std::{fs, io::Write};

use dinky_cli::Args;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn args_with_defaults() -> Args {
    Args {
        file: None,
        text: None,
        output: "out.png".to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn test_file_input_produces_png() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input_path = dir.path().join("doc.dinky");
    let output_path = dir.path().join("doc.png");

    let mut input = fs::File::create(&input_path).expect("create input");
    writeln!(input, "[%title v:'Dinky!'%]").expect("write input");
    writeln!(input, "[Dinky is a text]").expect("write input");
    drop(input);

    let args = Args {
        file: Some(input_path.to_string_lossy().to_string()),
        output: output_path.to_string_lossy().to_string(),
        ..args_with_defaults()
    };

    dinky_cli::run(&args).expect("pipeline succeeds");

    let bytes = fs::read(&output_path).expect("output exists");
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);
}

#[test]
fn test_inline_text_produces_png() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output_path = dir.path().join("inline.png");

    let args = Args {
        text: Some("[hello world]".to_string()),
        output: output_path.to_string_lossy().to_string(),
        ..args_with_defaults()
    };

    dinky_cli::run(&args).expect("pipeline succeeds");

    let bytes = fs::read(&output_path).expect("output exists");
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);
}

#[test]
fn test_invalid_markup_fails_without_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output_path = dir.path().join("never.png");

    let args = Args {
        text: Some("[this block never closes".to_string()),
        output: output_path.to_string_lossy().to_string(),
        ..args_with_defaults()
    };

    assert!(dinky_cli::run(&args).is_err());
    assert!(!output_path.exists(), "no output on parse failure");
}

#[test]
fn test_missing_input_file_is_an_error() {
    let args = Args {
        file: Some("/nonexistent/input.dinky".to_string()),
        ..args_with_defaults()
    };

    assert!(dinky_cli::run(&args).is_err());
}
