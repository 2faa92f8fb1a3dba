#![warn(missing_docs)]
//! Content definition schema + the prebuilt layout cache.
//!
//! Block and item definitions are loaded from JSON packs into id-indexed
//! registries; the HUD resolves display names through them and generates
//! the creative catalog from the item list. Layout documents prepared by
//! the asset pipeline are served by name from [`AssetCache`].

mod cache;
mod registry;

pub use cache::{AssetCache, LAYOUT_INVENTORY};
pub use registry::{BlockRegistry, ContentIndices, ItemRegistry};

use serde::Deserialize;
use thiserror::Error;

/// Minimal item definition used to generate the creative catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDefinition {
    /// Human-readable identifier (e.g., "stone").
    pub name: String,
}

/// Minimal block definition used for debug-overlay name resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockDefinition {
    /// Human-readable identifier (e.g., "stone").
    pub name: String,
}

/// Errors emitted during content pack loading.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Wrap IO errors when reading packs.
    #[error("failed to read asset pack: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde parsing issues.
    #[error("failed to parse asset pack: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON string into a list of item definitions.
pub fn load_items_from_str(input: &str) -> Result<Vec<ItemDefinition>, AssetError> {
    Ok(serde_json::from_str(input)?)
}

/// Parse a JSON string into a list of block definitions.
pub fn load_blocks_from_str(input: &str) -> Result<Vec<BlockDefinition>, AssetError> {
    Ok(serde_json::from_str(input)?)
}
