#![warn(missing_docs)]
//! Retained UI for the HUD layer: node trees behind shared handles, loaded
//! documents with a build-once id index, the ordered render list, and
//! inventory-bound views.
//!
//! Everything here is single-threaded and frame-synchronous; shared
//! ownership uses `Rc<RefCell<_>>` since the HUD controller and the render
//! list reference the same elements.

pub mod controls;
pub mod document;
pub mod gfx;
pub mod gui;
pub mod inventory_view;
pub mod loader;
pub mod node;
pub mod script;

pub use document::{UiDocScript, UiDocument};
pub use gfx::{Batch2D, GfxContext, RenderStats, UiCamera, UiShader, Viewport};
pub use gui::{Gui, Menu};
pub use inventory_view::{InventoryBuilder, InventoryInteraction, SlotLayout};
pub use loader::{document_from_file, document_from_str, UiError};
pub use node::{Consumer, Node, NodeKind, Supplier, WeakNode};
pub use script::{NoopUiScriptHooks, UiScriptHooks};
