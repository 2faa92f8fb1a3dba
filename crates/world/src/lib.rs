#![warn(missing_docs)]
//! World-side state consumed by the HUD: inventories, the player, and the
//! ambient world values (daytime, seed) surfaced by the debug overlay.

mod inventory;
mod player;
mod state;

pub use inventory::{Inventory, ItemId, ItemStack};
pub use player::{Player, SelectedVoxel, HOTBAR_SLOTS};
pub use state::WorldState;
