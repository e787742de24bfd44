//! Dinky Core Types and Definitions
//!
//! This crate provides the foundational types for the Dinky markup
//! language. It includes:
//!
//! - **Document**: The root of a parsed document tree ([`document::Document`])
//! - **Settings**: Fixed document-level configuration ([`document::DocumentSettings`])
//! - **Block**: One node of the parsed block tree ([`block::Block`])

pub mod block;
pub mod document;
