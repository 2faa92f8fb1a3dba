//! Inventory storage for the player and generated views.
//!
//! Slots hold optional [`ItemStack`]s; views bind to an inventory through a
//! shared handle and mutate it only via these slot operations.

use serde::{Deserialize, Serialize};

/// Item identifier referencing the item registry.
pub type ItemId = u16;

/// Maximum stack size for most items.
pub const DEFAULT_STACK_SIZE: u8 = 64;

/// Represents a stack of items in an inventory slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Item type identifier.
    pub item_id: ItemId,
    /// Number of items in this stack.
    pub count: u8,
}

impl ItemStack {
    /// Create a new item stack.
    pub fn new(item_id: ItemId, count: u8) -> Self {
        Self { item_id, count }
    }

    /// Check if this stack can merge with another stack.
    pub fn can_merge(&self, other: &ItemStack) -> bool {
        self.item_id == other.item_id
    }

    /// Check if this stack is at max capacity.
    pub fn is_full(&self) -> bool {
        self.count >= DEFAULT_STACK_SIZE
    }

    /// Try to add items to this stack, returning the amount that didn't fit.
    pub fn add(&mut self, amount: u8) -> u8 {
        let space = DEFAULT_STACK_SIZE.saturating_sub(self.count);
        let added = amount.min(space);
        self.count += added;
        amount - added
    }
}

/// Player or generated-view inventory with a fixed number of slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<Option<ItemStack>>,
}

impl Inventory {
    /// Create a new empty inventory with the given slot count.
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the inventory has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get an item stack from a slot.
    pub fn get(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot).and_then(|s| s.as_ref())
    }

    /// Set an item stack in a slot. Out-of-range slots are ignored.
    pub fn set(&mut self, slot: usize, stack: Option<ItemStack>) {
        if let Some(entry) = self.slots.get_mut(slot) {
            *entry = stack;
        }
    }

    /// Take an item stack from a slot, leaving it empty.
    pub fn take(&mut self, slot: usize) -> Option<ItemStack> {
        self.slots.get_mut(slot).and_then(|s| s.take())
    }

    /// Try to add an item stack, merging with existing stacks first.
    /// Returns the remainder that couldn't fit (if any).
    pub fn add_item(&mut self, mut stack: ItemStack) -> Option<ItemStack> {
        for existing in self.slots.iter_mut().flatten() {
            if existing.can_merge(&stack) && !existing.is_full() {
                let remainder = existing.add(stack.count);
                if remainder == 0 {
                    return None;
                }
                stack.count = remainder;
            }
        }

        for slot in &mut self.slots {
            if slot.is_none() {
                *slot = Some(stack);
                return None;
            }
        }

        Some(stack)
    }

    /// Count the total number of a specific item across all slots.
    pub fn count_item(&self, item_id: ItemId) -> u32 {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref())
            .filter(|stack| stack.item_id == item_id)
            .map(|stack| stack.count as u32)
            .sum()
    }
}
