//! Loaded UI documents: a root node tree plus a build-once id index.

use std::collections::HashMap;

use crate::node::{Node, WeakNode};

/// Script bindings attached to a document.
///
/// When the layout has no sidecar script this is a no-op value, which is
/// valid and not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiDocScript {
    /// Whether an `on_open` lifecycle entry point is declared.
    pub on_open: bool,
    /// Whether an `on_close` lifecycle entry point is declared.
    pub on_close: bool,
}

impl UiDocScript {
    /// Whether the descriptor declares no entry points at all.
    pub fn is_noop(&self) -> bool {
        !self.on_open && !self.on_close
    }
}

/// A loaded UI layout: root node tree, id index, and optional script
/// bindings.
///
/// The id index is built exactly once, here, by pre-order depth-first
/// traversal, and is never invalidated or rebuilt. Callers that mutate the
/// tree afterwards are responsible for knowing the index may go stale.
/// Duplicate ids are resolved silently: the node visited later in pre-order
/// wins.
pub struct UiDocument {
    id: String,
    script: UiDocScript,
    root: Node,
    env: i32,
    index: HashMap<String, WeakNode>,
}

impl UiDocument {
    /// Construct a document once all nodes exist, indexing the tree.
    pub fn new(id: impl Into<String>, script: UiDocScript, root: Node, env: i32) -> Self {
        let mut index = HashMap::new();
        collect(&mut index, &root);
        Self {
            id: id.into(),
            script,
            root,
            env,
            index,
        }
    }

    /// Document id (namespace).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The root node of the owned tree.
    pub fn root(&self) -> Node {
        self.root.clone()
    }

    /// The attached script descriptor.
    pub fn script(&self) -> &UiDocScript {
        &self.script
    }

    /// Handle into the scripting/content environment.
    pub fn environment(&self) -> i32 {
        self.env
    }

    /// Look up a node by id. Returns `None` for unknown ids and for indexed
    /// nodes that no longer exist (the index holds weak handles).
    pub fn get(&self, id: &str) -> Option<Node> {
        self.index.get(id).and_then(|weak| weak.upgrade())
    }

    /// Ids present in the index.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }
}

/// Pre-order DFS over the container hierarchy; later duplicates overwrite.
fn collect(index: &mut HashMap<String, WeakNode>, node: &Node) {
    let id = node.id();
    if !id.is_empty() {
        index.insert(id, node.downgrade());
    }
    if let Some(children) = node.children() {
        for child in &children {
            collect(index, child);
        }
    }
}
