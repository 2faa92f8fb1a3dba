//! Lifecycle hooks into the external scripting engine.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use voxfront_world::Inventory;

use crate::document::UiDocument;

/// Side-effecting lifecycle hooks invoked when inventory-capable documents
/// open and close. The core never consumes a return value.
pub trait UiScriptHooks {
    /// Invoked after a document's view is bound, before it is shown.
    fn on_ui_open(&self, document: &UiDocument, inventory: &Rc<RefCell<Inventory>>);

    /// Invoked right before the document's view is removed.
    fn on_ui_close(&self, document: &UiDocument, inventory: &Rc<RefCell<Inventory>>);
}

/// No-op hooks used when no scripting engine is attached.
pub struct NoopUiScriptHooks;

impl UiScriptHooks for NoopUiScriptHooks {
    fn on_ui_open(&self, document: &UiDocument, _inventory: &Rc<RefCell<Inventory>>) {
        debug!(document = document.id(), "ui open (no script engine)");
    }

    fn on_ui_close(&self, document: &UiDocument, _inventory: &Rc<RefCell<Inventory>>) {
        debug!(document = document.id(), "ui close (no script engine)");
    }
}
