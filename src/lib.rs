#![warn(missing_docs)]
//! voxfront: the HUD and in-game UI layer of a voxel sandbox engine.
//!
//! Composes UI documents and inventory views into the heads-up display,
//! runs the per-frame state machine coordinating pause, inventory, cursor
//! lock, and menu visibility, and positions everything at draw time. The
//! rendering backend, scripting engine, and world simulation are external
//! collaborators reached through the contracts in `voxfront-ui`.

pub mod debug_panel;
pub mod hud;
pub mod settings;

pub use hud::{FpsCounter, HudContext, HudController, BIND_INVENTORY, PAGE_PAUSE};
pub use settings::{DebugSettings, GraphicsSettings, Settings};
