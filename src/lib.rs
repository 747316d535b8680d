//! depreview - Interactive dependency upgrade review library
//!
//! This library provides the pipeline behind the `depreview` binary:
//! - Classifying a precomputed version analysis
//! - Presenting pending upgrades as a table and multi-select prompt
//! - Patching the selected upgrades into a JSON manifest

pub mod classify;
pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod prompt;
pub mod resolve;
