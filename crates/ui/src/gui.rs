//! Shared render list and the page-based pause menu.
//!
//! The render list is order-sensitive: paint order equals list order, so
//! `add` puts an element on top and `add_to_back` behind everything else.
//! Removal is idempotent.

use std::collections::HashMap;

use tracing::warn;

use crate::node::Node;

/// Ordered collection of top-level UI elements drawn each frame, plus the
/// exclusive input focus and the pause menu.
#[derive(Default)]
pub struct Gui {
    nodes: Vec<Node>,
    focus: Option<Node>,
    menu: Menu,
}

impl Gui {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element on top of everything currently registered.
    pub fn add(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Add an element behind everything currently registered.
    pub fn add_to_back(&mut self, node: Node) {
        self.nodes.insert(0, node);
    }

    /// Remove an element. Removing an element that is not present is a no-op.
    pub fn remove(&mut self, node: &Node) {
        self.nodes.retain(|existing| !existing.ptr_eq(node));
        if self
            .focus
            .as_ref()
            .is_some_and(|focused| focused.ptr_eq(node))
        {
            self.focus = None;
        }
    }

    /// Whether the element is currently registered.
    pub fn contains(&self, node: &Node) -> bool {
        self.nodes.iter().any(|existing| existing.ptr_eq(node))
    }

    /// Registered elements in paint order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Advance interval listeners on every registered element.
    pub fn act(&mut self, dt: f32) {
        let nodes = self.nodes.clone();
        for node in nodes {
            node.act(dt);
        }
    }

    /// Give a node exclusive input focus (or clear it with `None`).
    pub fn set_focus(&mut self, node: Option<Node>) {
        self.focus = node;
    }

    /// Whether some node holds exclusive input focus (e.g. a text box being
    /// edited); global keybindings are suppressed while caught.
    pub fn is_focus_caught(&self) -> bool {
        self.focus.is_some()
    }

    /// The pause menu.
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Mutable access to the pause menu.
    pub fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }
}

/// Page-based menu: named pages, at most one current.
#[derive(Default)]
pub struct Menu {
    pages: HashMap<String, Node>,
    current: Option<String>,
    visible: bool,
}

impl Menu {
    /// Register a page under a name.
    pub fn add_page(&mut self, name: impl Into<String>, page: Node) {
        self.pages.insert(name.into(), page);
    }

    /// Switch to a registered page; unknown names clear the current page.
    pub fn set_page(&mut self, name: &str) {
        if self.pages.contains_key(name) {
            self.current = Some(name.to_string());
        } else {
            warn!(page = name, "menu page not registered");
            self.current = None;
        }
        self.apply_visibility();
    }

    /// Clear the current page.
    pub fn reset(&mut self) {
        self.current = None;
        self.apply_visibility();
    }

    /// Name of the current page, if any.
    pub fn current_page(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Show or hide the menu (the current page follows).
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.apply_visibility();
    }

    /// Whether the menu is shown.
    pub fn visible(&self) -> bool {
        self.visible
    }

    fn apply_visibility(&self) {
        for (name, page) in &self.pages {
            let current = self.current.as_deref() == Some(name.as_str());
            page.set_visible(self.visible && current);
        }
    }
}
