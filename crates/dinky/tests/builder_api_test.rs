//! Integration tests for the DocumentBuilder API
//!
//! These tests verify that the public API works and is usable.

use dinky::{DocumentBuilder, config::AppConfig};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[test]
fn test_builder_api_exists() {
    // Just verify the API compiles and can be constructed
    let _builder = DocumentBuilder::default();
}

#[test]
fn test_parse_simple_document() {
    let source = r#"
        [%title v:'Dinky!'%]
        [Dinky is a text]
    "#;

    let builder = DocumentBuilder::default();
    let result = builder.parse(source);
    assert!(
        result.is_ok(),
        "Should parse valid document: {:?}",
        result.err()
    );
}

#[test]
fn test_render_simple_document() {
    let source = r#"
        [%title v:'Dinky!'%]
        [Dinky is a text [with a nested part]]
    "#;

    let builder = DocumentBuilder::default();
    let document = builder.parse(source).expect("Failed to parse document");
    let result = builder.render_png(&document);

    if let Ok(png) = result {
        assert!(png.len() > 8, "Output should contain PNG data");
        assert_eq!(&png[..8], &PNG_SIGNATURE, "Output should start with PNG signature");
    } else {
        panic!("Failed to render: {:?}", result.err());
    }
}

#[test]
fn test_builder_with_config() {
    let source = "[%title v:'Dinky!'%]";
    let config = AppConfig::default();

    // Just verify the API works with config
    let builder = DocumentBuilder::new(config);
    let _result = builder.parse(source);

    // If it compiles and doesn't panic, the API works
}

#[test]
fn test_parse_invalid_markup_returns_error() {
    let invalid_source = "[this block never closes";

    let builder = DocumentBuilder::default();
    let result = builder.parse(invalid_source);
    assert!(result.is_err(), "Should return error for invalid markup");
}

#[test]
fn test_builder_reusability() {
    let source1 = "[first document]";
    let source2 = "[%note% second document]";

    let builder = DocumentBuilder::default();

    // Parse and render first document
    let document1 = builder.parse(source1).expect("Failed to parse document1");
    let png1 = builder
        .render_png(&document1)
        .expect("Failed to render document1");

    // Reuse same builder for second document
    let document2 = builder.parse(source2).expect("Failed to parse document2");
    let png2 = builder
        .render_png(&document2)
        .expect("Failed to render document2");

    assert_eq!(&png1[..8], &PNG_SIGNATURE, "First PNG should be valid");
    assert_eq!(&png2[..8], &PNG_SIGNATURE, "Second PNG should be valid");
}
