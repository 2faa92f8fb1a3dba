//! Prebuilt layout documents served by name.

use std::collections::HashMap;
use std::rc::Rc;

use voxfront_ui::UiDocument;

/// Reserved name of the player inventory layout.
pub const LAYOUT_INVENTORY: &str = "core:inventory";

/// Cache of fully indexed layout documents keyed by well-known names.
#[derive(Default)]
pub struct AssetCache {
    layouts: HashMap<String, Rc<UiDocument>>,
}

impl AssetCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prepared document under a name.
    pub fn add_layout(&mut self, name: impl Into<String>, document: Rc<UiDocument>) {
        self.layouts.insert(name.into(), document);
    }

    /// Fetch a prepared document by name.
    pub fn get_layout(&self, name: &str) -> Option<Rc<UiDocument>> {
        self.layouts.get(name).cloned()
    }
}
