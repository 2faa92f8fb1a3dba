//! UI node tree: tagged element variants behind shared handles.
//!
//! A [`Node`] is a cheap clone of a reference-counted element. Container
//! variants (panels, inventory views) expose an ordered child list; leaves
//! terminate traversal. Layout state (position, size, visibility) lives on
//! the shared [`NodeBase`].

use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

use glam::{Vec2, Vec4};
use tracing::warn;

use crate::controls::{CheckBoxData, LabelData, PanelData, TextBoxData, TrackBarData};
use crate::inventory_view::{InventoryViewData, SlotData};

/// Zero-argument value producer re-evaluated on demand (pull-based).
pub type Supplier<T> = Rc<dyn Fn() -> T>;

/// Value sink invoked when a control commits a new value.
pub type Consumer<T> = Rc<dyn Fn(T)>;

/// Visual/layout state shared by every element variant.
#[derive(Debug)]
pub struct NodeBase {
    /// Optional identifier, unique within a document index (empty = unindexed).
    pub id: String,
    /// Position relative to the parent (or the viewport for top-level nodes).
    pub position: Vec2,
    /// Element size in UI pixels.
    pub size: Vec2,
    /// Whether the element is drawn.
    pub visible: bool,
    /// Whether the element reacts to pointer interaction.
    pub interactive: bool,
    /// Background/tint color (RGBA).
    pub color: Vec4,
}

impl NodeBase {
    fn new(size: Vec2) -> Self {
        Self {
            id: String::new(),
            position: Vec2::ZERO,
            size,
            visible: true,
            interactive: true,
            color: Vec4::new(0.0, 0.0, 0.0, 0.3),
        }
    }
}

/// Element variant payloads.
pub enum NodeKind {
    /// Container stacking children, optionally scrollable.
    Panel(PanelData),
    /// Text line, optionally supplier-driven.
    Label(LabelData),
    /// Editable text field.
    TextBox(TextBoxData),
    /// Continuous value slider.
    TrackBar(TrackBarData),
    /// Bidirectionally bound checkbox.
    CheckBox(CheckBoxData),
    /// Single inventory slot (also used as the grabbed-item indicator).
    Slot(SlotData),
    /// Grid of slots bound to an inventory.
    Inventory(InventoryViewData),
}

/// Payload of one element: shared base + variant data.
pub struct NodeData {
    /// Visual/layout state.
    pub base: NodeBase,
    /// Variant payload.
    pub kind: NodeKind,
}

/// Shared handle to one UI element.
#[derive(Clone)]
pub struct Node {
    inner: Rc<RefCell<NodeData>>,
}

impl Node {
    /// Create a node from a variant payload and initial size.
    pub fn new(kind: NodeKind, size: Vec2) -> Self {
        Self {
            inner: Rc::new(RefCell::new(NodeData {
                base: NodeBase::new(size),
                kind,
            })),
        }
    }

    pub(crate) fn data(&self) -> Ref<'_, NodeData> {
        self.inner.borrow()
    }

    pub(crate) fn data_mut(&self) -> RefMut<'_, NodeData> {
        self.inner.borrow_mut()
    }

    /// The node identifier (empty when unindexed).
    pub fn id(&self) -> String {
        self.data().base.id.clone()
    }

    /// Set the node identifier and return the handle (builder style).
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.data_mut().base.id = id.into();
        self
    }

    /// Current position.
    pub fn position(&self) -> Vec2 {
        self.data().base.position
    }

    /// Move the node.
    pub fn set_position(&self, position: Vec2) {
        self.data_mut().base.position = position;
    }

    /// Current size.
    pub fn size(&self) -> Vec2 {
        self.data().base.size
    }

    /// Resize the node.
    pub fn set_size(&self, size: Vec2) {
        self.data_mut().base.size = size;
    }

    /// Whether the node is drawn.
    pub fn visible(&self) -> bool {
        self.data().base.visible
    }

    /// Show or hide the node.
    pub fn set_visible(&self, visible: bool) {
        self.data_mut().base.visible = visible;
    }

    /// Whether the node reacts to pointer interaction.
    pub fn interactive(&self) -> bool {
        self.data().base.interactive
    }

    /// Enable or disable pointer interaction (hotbar passthrough).
    pub fn set_interactive(&self, interactive: bool) {
        self.data_mut().base.interactive = interactive;
    }

    /// Background color.
    pub fn color(&self) -> Vec4 {
        self.data().base.color
    }

    /// Set the background color.
    pub fn set_color(&self, color: Vec4) {
        self.data_mut().base.color = color;
    }

    /// Ordered children for container variants, `None` for leaves.
    pub fn children(&self) -> Option<Vec<Node>> {
        match &self.data().kind {
            NodeKind::Panel(panel) => Some(panel.children.clone()),
            NodeKind::Inventory(view) => Some(view.slots.clone()),
            _ => None,
        }
    }

    /// Append a child to a panel. Ignored (with a warning) on other variants;
    /// inventory grids are populated through [`crate::InventoryBuilder`].
    pub fn add_child(&self, child: Node) {
        match &mut self.data_mut().kind {
            NodeKind::Panel(panel) => panel.children.push(child),
            _ => warn!("add_child called on a non-panel node"),
        }
    }

    /// Whether two handles refer to the same element.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Downgrade to a non-owning handle (document index entries).
    pub fn downgrade(&self) -> WeakNode {
        WeakNode {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Advance interval listeners by `dt` seconds and recurse into children.
    pub fn act(&self, dt: f32) {
        let due = match &mut self.data_mut().kind {
            NodeKind::Panel(panel) => panel.tick_listeners(dt),
            _ => Vec::new(),
        };
        for callback in due {
            callback();
        }
        if let Some(children) = self.children() {
            for child in children {
                child.act(dt);
            }
        }
    }
}

/// Non-owning node handle; never keeps the element alive.
#[derive(Clone)]
pub struct WeakNode {
    inner: Weak<RefCell<NodeData>>,
}

impl WeakNode {
    /// Upgrade back to a strong handle if the element still exists.
    pub fn upgrade(&self) -> Option<Node> {
        self.inner.upgrade().map(|inner| Node { inner })
    }
}
