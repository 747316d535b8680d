//! Manifest loading and patching
//!
//! This module provides functionality to:
//! - Parse a JSON manifest while keeping its key order
//! - Overwrite declared version ranges with confirmed upgrades
//! - Write the result back, or to a separate output file

mod document;
mod patcher;

pub use document::{read_manifest, write_manifest, ManifestDocument};
pub use patcher::{serialize, ManifestPatcher, PatchReport, PatchRow};
