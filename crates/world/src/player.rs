//! Player state surfaced to the HUD: hotbar slot selection, debug flag,
//! position, and the currently targeted voxel.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use tracing::warn;

use crate::Inventory;

/// Number of hotbar slots selectable by keys 1-9 and 0.
pub const HOTBAR_SLOTS: usize = 10;

/// The voxel the player is currently looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectedVoxel {
    /// Block id at the targeted position.
    pub id: u16,
    /// Raw block state bits, shown hex-encoded by the debug overlay.
    pub states: u16,
}

/// Player state owned by the simulation and read/mutated by the HUD.
#[derive(Debug)]
pub struct Player {
    /// World-space position (feet).
    pub position: Vec3,
    /// Whether debug overlays are enabled for this player.
    pub debug: bool,
    /// Voxel currently under the crosshair.
    pub selected_voxel: SelectedVoxel,
    inventory: Rc<RefCell<Inventory>>,
    chosen_slot: usize,
}

impl Player {
    /// Create a player with an empty inventory of the given size.
    pub fn new(inventory_size: usize) -> Self {
        Self {
            position: Vec3::ZERO,
            debug: false,
            selected_voxel: SelectedVoxel::default(),
            inventory: Rc::new(RefCell::new(Inventory::new(inventory_size))),
            chosen_slot: 0,
        }
    }

    /// Shared handle to the player inventory.
    pub fn inventory(&self) -> Rc<RefCell<Inventory>> {
        self.inventory.clone()
    }

    /// Currently chosen hotbar slot, always in `[0, HOTBAR_SLOTS)`.
    pub fn chosen_slot(&self) -> usize {
        self.chosen_slot
    }

    /// Select a hotbar slot. Out-of-range values are ignored.
    pub fn set_chosen_slot(&mut self, slot: usize) {
        if slot < HOTBAR_SLOTS {
            self.chosen_slot = slot;
        } else {
            warn!(slot, "hotbar slot out of range, keeping current selection");
        }
    }

    /// Shift the chosen slot by a scroll delta, wrapping modulo the hotbar
    /// size. Positive deltas move toward lower slots (scroll-up convention).
    pub fn cycle_chosen_slot(&mut self, delta: i32) {
        let slot = self.chosen_slot as i64 - delta as i64;
        self.chosen_slot = slot.rem_euclid(HOTBAR_SLOTS as i64) as usize;
    }

    /// Move the player to the given position.
    pub fn teleport(&mut self, position: Vec3) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn chosen_slot_ignores_out_of_range() {
        let mut player = Player::new(40);
        player.set_chosen_slot(3);
        player.set_chosen_slot(HOTBAR_SLOTS);

        assert_eq!(player.chosen_slot(), 3);
    }

    #[test]
    fn cycle_wraps_both_directions() {
        let mut player = Player::new(40);
        player.cycle_chosen_slot(1);
        assert_eq!(player.chosen_slot(), 9);

        player.cycle_chosen_slot(-3);
        assert_eq!(player.chosen_slot(), 2);
    }

    #[test]
    fn teleport_updates_position() {
        let mut player = Player::new(40);
        player.teleport(Vec3::new(1.0, 64.0, -3.0));
        assert_eq!(player.position, Vec3::new(1.0, 64.0, -3.0));
    }

    proptest! {
        #[test]
        fn cycle_stays_in_hotbar_range(start in 0usize..HOTBAR_SLOTS, delta in i32::MIN..=i32::MAX) {
            let mut player = Player::new(40);
            player.set_chosen_slot(start);
            player.cycle_chosen_slot(delta);
            prop_assert!(player.chosen_slot() < HOTBAR_SLOTS);
        }
    }
}
