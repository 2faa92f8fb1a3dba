//! Id-indexed content registries built from pack definitions.

use std::collections::HashMap;

use crate::{BlockDefinition, ItemDefinition};

/// Registry storing item definitions keyed by id (pack order).
pub struct ItemRegistry {
    definitions: Vec<ItemDefinition>,
    name_to_id: HashMap<String, u16>,
}

impl ItemRegistry {
    /// Construct a registry from the supplied definitions.
    pub fn new(definitions: Vec<ItemDefinition>) -> Self {
        let mut name_to_id = HashMap::new();
        for (id, def) in definitions.iter().enumerate() {
            name_to_id.insert(def.name.clone(), id as u16);
        }
        Self {
            definitions,
            name_to_id,
        }
    }

    /// Number of item definitions, including the reserved empty item 0.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Look up a definition by numeric id.
    pub fn definition(&self, id: u16) -> Option<&ItemDefinition> {
        self.definitions.get(id as usize)
    }

    /// Resolve an item id by its name.
    pub fn id_by_name(&self, name: &str) -> Option<u16> {
        self.name_to_id.get(name).copied()
    }
}

/// Registry storing block definitions keyed by id (pack order).
pub struct BlockRegistry {
    definitions: Vec<BlockDefinition>,
    name_to_id: HashMap<String, u16>,
}

impl BlockRegistry {
    /// Construct a registry from the supplied definitions.
    pub fn new(definitions: Vec<BlockDefinition>) -> Self {
        let mut name_to_id = HashMap::new();
        for (id, def) in definitions.iter().enumerate() {
            name_to_id.insert(def.name.clone(), id as u16);
        }
        Self {
            definitions,
            name_to_id,
        }
    }

    /// Look up a definition by numeric id.
    pub fn definition(&self, id: u16) -> Option<&BlockDefinition> {
        self.definitions.get(id as usize)
    }

    /// Resolve a block id by its name.
    pub fn id_by_name(&self, name: &str) -> Option<u16> {
        self.name_to_id.get(name).copied()
    }
}

/// Combined content lookup handed to the HUD.
pub struct ContentIndices {
    /// Item definitions (creative catalog source).
    pub items: ItemRegistry,
    /// Block definitions (debug-overlay name resolution).
    pub blocks: BlockRegistry,
}

impl ContentIndices {
    /// Bundle the two registries.
    pub fn new(items: ItemRegistry, blocks: BlockRegistry) -> Self {
        Self { items, blocks }
    }
}
