//! Inventory-bound views: slot grids, the grabbed-item indicator, and the
//! shared interaction object holding the currently dragged stack.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use tracing::warn;

use voxfront_world::{Inventory, ItemStack};

use crate::node::{Node, NodeKind};

/// Slot side length in UI pixels.
pub const SLOT_SIZE: f32 = 48.0;

/// Gap between adjacent slots.
pub const SLOT_INTERVAL: f32 = 4.0;

/// Callback invoked with a copy of the clicked stack on source slots.
pub type SlotCallback = Rc<dyn Fn(&ItemStack)>;

/// Per-grid slot behavior descriptor.
#[derive(Clone, Default)]
pub struct SlotLayout {
    /// Whether slots draw a background tile.
    pub background: bool,
    /// Source slots hand out copies instead of moving their contents
    /// (creative catalog behavior).
    pub item_source: bool,
    /// Invoked with a copy of the clicked stack when `item_source` is set.
    pub on_take: Option<SlotCallback>,
}

impl SlotLayout {
    /// Create a layout with the given background/source flags.
    pub fn new(background: bool, item_source: bool) -> Self {
        Self {
            background,
            item_source,
            on_take: None,
        }
    }

    /// Attach the source-slot take callback.
    pub fn with_on_take(mut self, on_take: SlotCallback) -> Self {
        self.on_take = Some(on_take);
        self
    }
}

/// What a slot view displays.
pub enum SlotBinding {
    /// Nothing bound yet.
    Unbound,
    /// One slot of a shared inventory.
    Inventory {
        /// Bound inventory.
        inventory: Rc<RefCell<Inventory>>,
        /// Slot index within the inventory.
        slot: usize,
    },
    /// The currently grabbed stack of the shared interaction object.
    Grabbed(Rc<RefCell<InventoryInteraction>>),
}

/// Single-slot payload (grid cells and the grabbed-item indicator).
pub struct SlotData {
    /// Index within the owning grid (0 for standalone slot views).
    pub index: usize,
    /// Behavior descriptor.
    pub layout: SlotLayout,
    /// Display binding.
    pub binding: SlotBinding,
}

/// Slot-grid payload bound to an inventory.
pub struct InventoryViewData {
    /// Grid column count.
    pub columns: usize,
    /// Slot child nodes in index order.
    pub slots: Vec<Node>,
    /// Behavior shared by every slot of the grid.
    pub layout: SlotLayout,
    /// Highlighted slot (hotbar selection).
    pub selected: Option<usize>,
    /// Bound inventory, if any.
    pub inventory: Option<Rc<RefCell<Inventory>>>,
    /// Shared interaction object, if bound.
    pub interaction: Option<Rc<RefCell<InventoryInteraction>>>,
}

/// Holds the player's currently grabbed (dragged) item stack, shared across
/// all inventory-capable views.
#[derive(Default)]
pub struct InventoryInteraction {
    grabbed: Option<ItemStack>,
}

impl InventoryInteraction {
    /// Create an interaction object with nothing grabbed.
    pub fn new() -> Self {
        Self::default()
    }

    /// The grabbed stack, if any.
    pub fn grabbed(&self) -> Option<&ItemStack> {
        self.grabbed.as_ref()
    }

    /// Replace the grabbed stack.
    pub fn set_grabbed(&mut self, stack: Option<ItemStack>) {
        self.grabbed = stack;
    }

    /// Take the grabbed stack out, leaving nothing grabbed.
    pub fn take_grabbed(&mut self) -> Option<ItemStack> {
        self.grabbed.take()
    }

    /// Drop the grabbed stack. The stack simply vanishes; closing the
    /// inventory relies on this (documented behavior, not a leak to fix).
    pub fn clear_grabbed(&mut self) {
        self.grabbed = None;
    }
}

/// Create a standalone slot view (used as the grabbed-item indicator).
pub fn slot_view(layout: SlotLayout) -> Node {
    Node::new(
        NodeKind::Slot(SlotData {
            index: 0,
            layout,
            binding: SlotBinding::Unbound,
        }),
        Vec2::splat(SLOT_SIZE),
    )
}

/// Builds slot-grid views from a layout descriptor.
#[derive(Default)]
pub struct InventoryBuilder {
    columns: usize,
    slots: Vec<Node>,
    layout: SlotLayout,
    view_size: Vec2,
}

impl InventoryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a grid of `count` slots arranged in `columns` columns at
    /// `origin`, with `padding` pixels around the grid.
    pub fn add_grid(
        &mut self,
        columns: usize,
        count: usize,
        origin: Vec2,
        padding: f32,
        layout: SlotLayout,
    ) {
        assert!(columns > 0, "grid needs at least one column");
        let pitch = SLOT_SIZE + SLOT_INTERVAL;
        for i in 0..count {
            let col = (i % columns) as f32;
            let row = (i / columns) as f32;
            let slot = slot_view(layout.clone());
            slot.set_position(origin + Vec2::new(padding + col * pitch, padding + row * pitch));
            if let NodeKind::Slot(data) = &mut slot.data_mut().kind {
                data.index = self.slots.len();
            }
            self.slots.push(slot);
        }

        let rows = count.div_ceil(columns);
        let grid = Vec2::new(
            columns as f32 * pitch - SLOT_INTERVAL + padding * 2.0,
            rows as f32 * pitch - SLOT_INTERVAL + padding * 2.0,
        );
        self.view_size = self.view_size.max(origin + grid);
        self.columns = columns;
        self.layout = layout;
    }

    /// Build the inventory view node.
    pub fn build(self) -> Node {
        Node::new(
            NodeKind::Inventory(InventoryViewData {
                columns: self.columns,
                slots: self.slots,
                layout: self.layout,
                selected: None,
                inventory: None,
                interaction: None,
            }),
            self.view_size,
        )
    }
}

impl Node {
    /// Bind an inventory view to live inventory data and the shared
    /// interaction object. Slot children are rebound to matching indices.
    pub fn bind_inventory(
        &self,
        inventory: Rc<RefCell<Inventory>>,
        interaction: Rc<RefCell<InventoryInteraction>>,
    ) {
        let slots = match &mut self.data_mut().kind {
            NodeKind::Inventory(view) => {
                view.inventory = Some(inventory.clone());
                view.interaction = Some(interaction);
                view.slots.clone()
            }
            _ => {
                warn!("bind_inventory called on a non-inventory node");
                return;
            }
        };
        for slot in slots {
            if let NodeKind::Slot(data) = &mut slot.data_mut().kind {
                data.binding = SlotBinding::Inventory {
                    inventory: inventory.clone(),
                    slot: data.index,
                };
            }
        }
    }

    /// Bind a standalone slot view to the grabbed stack.
    pub fn bind_grabbed(&self, interaction: Rc<RefCell<InventoryInteraction>>) {
        match &mut self.data_mut().kind {
            NodeKind::Slot(data) => data.binding = SlotBinding::Grabbed(interaction),
            _ => warn!("bind_grabbed called on a non-slot node"),
        }
    }

    /// The inventory an inventory view is bound to, if any.
    pub fn bound_inventory(&self) -> Option<Rc<RefCell<Inventory>>> {
        match &self.data().kind {
            NodeKind::Inventory(view) => view.inventory.clone(),
            _ => None,
        }
    }

    /// Number of slots in an inventory view.
    pub fn slot_count(&self) -> usize {
        match &self.data().kind {
            NodeKind::Inventory(view) => view.slots.len(),
            _ => 0,
        }
    }

    /// Highlight a slot (hotbar selection).
    pub fn set_selected_slot(&self, slot: usize) {
        match &mut self.data_mut().kind {
            NodeKind::Inventory(view) => view.selected = Some(slot),
            _ => warn!("set_selected_slot called on a non-inventory node"),
        }
    }

    /// Currently highlighted slot.
    pub fn selected_slot(&self) -> Option<usize> {
        match &self.data().kind {
            NodeKind::Inventory(view) => view.selected,
            _ => None,
        }
    }

    /// Stack a slot view currently displays (for drawing).
    pub fn slot_stack(&self) -> Option<ItemStack> {
        match &self.data().kind {
            NodeKind::Slot(data) => match &data.binding {
                SlotBinding::Unbound => None,
                SlotBinding::Inventory { inventory, slot } => {
                    inventory.borrow().get(*slot).cloned()
                }
                SlotBinding::Grabbed(interaction) => interaction.borrow().grabbed().cloned(),
            },
            _ => None,
        }
    }

    /// Handle a click on slot `index` of an inventory view.
    ///
    /// Source grids hand a copy of the stack to the layout's take callback;
    /// regular grids swap the slot contents with the grabbed stack.
    /// Non-interactive views ignore clicks entirely.
    pub fn click_slot(&self, index: usize) {
        if !self.interactive() {
            return;
        }
        let (layout, inventory, interaction) = match &self.data().kind {
            NodeKind::Inventory(view) => (
                view.layout.clone(),
                view.inventory.clone(),
                view.interaction.clone(),
            ),
            _ => return,
        };
        let (Some(inventory), Some(interaction)) = (inventory, interaction) else {
            return;
        };

        if layout.item_source {
            let stack = inventory.borrow().get(index).cloned();
            if let (Some(stack), Some(on_take)) = (stack, &layout.on_take) {
                on_take(&stack);
            }
        } else {
            let mut inventory = inventory.borrow_mut();
            let mut interaction = interaction.borrow_mut();
            let from_slot = inventory.take(index);
            let grabbed = interaction.take_grabbed();
            inventory.set(index, grabbed);
            interaction.set_grabbed(from_slot);
        }
    }
}
