//! Layout document loader.
//!
//! A layout file is a JSON node-definition tree (the external markup
//! toolchain compiles to this shape). A sidecar script with the same path
//! plus the script extension is loaded into the document's script
//! descriptor when present; its absence is valid and yields a no-op
//! descriptor.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::controls::{self, Orientation};
use crate::document::{UiDocScript, UiDocument};
use crate::inventory_view::{InventoryBuilder, SlotLayout};
use crate::node::Node;

/// Extension appended to the layout path to locate the sidecar script.
pub const SCRIPT_EXTENSION: &str = "lua";

/// Errors emitted while loading a layout document.
#[derive(Debug, Error)]
pub enum UiError {
    /// Wraps IO errors when reading layout files.
    #[error("failed to read layout: {0}")]
    Io(#[from] std::io::Error),
    /// Wraps serde parsing issues.
    #[error("failed to parse layout: {0}")]
    Parse(#[from] serde_json::Error),
    /// A parseable definition with values no node can be built from.
    #[error("invalid layout: {0}")]
    Layout(String),
}

/// Child stacking direction, as written in layout files.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationDef {
    /// Top-to-bottom stacking.
    #[default]
    Vertical,
    /// Left-to-right stacking.
    Horizontal,
}

/// One node definition in a layout file.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeDefinition {
    /// Container of further definitions.
    Panel {
        /// Index id (empty = unindexed).
        #[serde(default)]
        id: String,
        /// Panel size, when fixed.
        #[serde(default)]
        size: Option<[f32; 2]>,
        /// Stacking direction.
        #[serde(default)]
        orientation: OrientationDef,
        /// Whether overflow scrolls.
        #[serde(default)]
        scrollable: bool,
        /// Child definitions in paint order.
        #[serde(default)]
        children: Vec<NodeDefinition>,
    },
    /// Static or supplier-driven text line.
    Label {
        /// Index id.
        #[serde(default)]
        id: String,
        /// Initial text.
        #[serde(default)]
        text: String,
    },
    /// Editable text field.
    Textbox {
        /// Index id.
        #[serde(default)]
        id: String,
        /// Initial text.
        #[serde(default)]
        text: String,
    },
    /// Continuous value slider.
    Trackbar {
        /// Index id.
        #[serde(default)]
        id: String,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
        /// Initial value.
        #[serde(default)]
        value: f64,
        /// Step resolution.
        #[serde(default = "default_step")]
        step: f64,
    },
    /// Captioned checkbox.
    Checkbox {
        /// Index id.
        #[serde(default)]
        id: String,
        /// Caption text.
        #[serde(default)]
        label: String,
        /// Initial state.
        #[serde(default)]
        checked: bool,
    },
    /// Slot grid to be bound to an inventory at open time.
    Inventory {
        /// Index id.
        #[serde(default)]
        id: String,
        /// Grid column count.
        columns: usize,
        /// Total slot count.
        slots: usize,
        /// Padding around the grid.
        #[serde(default = "default_padding")]
        padding: f32,
    },
}

fn default_step() -> f64 {
    0.005
}

fn default_padding() -> f32 {
    8.0
}

fn build_node(def: &NodeDefinition) -> Result<Node, UiError> {
    match def {
        NodeDefinition::Panel {
            id,
            size,
            orientation,
            scrollable,
            children,
        } => {
            let size = size
                .map(|s| Vec2::new(s[0], s[1]))
                .unwrap_or(Vec2::new(250.0, 200.0));
            let node = controls::panel(size).with_id(id.clone());
            node.set_orientation(match orientation {
                OrientationDef::Vertical => Orientation::Vertical,
                OrientationDef::Horizontal => Orientation::Horizontal,
            });
            node.set_scrollable(*scrollable);
            for child in children {
                node.add_child(build_node(child)?);
            }
            node.refresh_layout();
            Ok(node)
        }
        NodeDefinition::Label { id, text } => Ok(controls::label(text.clone()).with_id(id.clone())),
        NodeDefinition::Textbox { id, text } => {
            Ok(controls::text_box(text.clone()).with_id(id.clone()))
        }
        NodeDefinition::Trackbar {
            id,
            min,
            max,
            value,
            step,
        } => {
            if min > max {
                return Err(UiError::Layout(format!(
                    "trackbar '{id}' range is inverted ({min} > {max})"
                )));
            }
            Ok(controls::track_bar(*min, *max, *value, *step, 8.0).with_id(id.clone()))
        }
        NodeDefinition::Checkbox { id, label, checked } => {
            let node = controls::check_box(label.clone(), Vec2::new(400.0, 24.0)).with_id(id.clone());
            node.set_checked(*checked);
            Ok(node)
        }
        NodeDefinition::Inventory {
            id,
            columns,
            slots,
            padding,
        } => {
            if *columns == 0 {
                return Err(UiError::Layout(format!(
                    "inventory '{id}' needs at least one column"
                )));
            }
            let mut builder = InventoryBuilder::new();
            builder.add_grid(
                *columns,
                *slots,
                Vec2::ZERO,
                *padding,
                SlotLayout::new(true, false),
            );
            Ok(builder.build().with_id(id.clone()))
        }
    }
}

/// Parse a layout document from an in-memory JSON string. The script
/// descriptor of the result is always the no-op value.
pub fn document_from_str(env: i32, namespace: &str, input: &str) -> Result<UiDocument, UiError> {
    let def: NodeDefinition = serde_json::from_str(input)?;
    let root = build_node(&def)?;
    Ok(UiDocument::new(namespace, UiDocScript::default(), root, env))
}

/// Load a layout document from a file, together with its optional sidecar
/// script (`<path>.lua`). A missing sidecar yields a no-op descriptor.
pub fn document_from_file(env: i32, namespace: &str, path: &Path) -> Result<UiDocument, UiError> {
    let text = fs::read_to_string(path)?;
    let def: NodeDefinition = serde_json::from_str(&text)?;
    let root = build_node(&def)?;

    let mut script = UiDocScript::default();
    let script_path =
        std::path::PathBuf::from(format!("{}.{}", path.display(), SCRIPT_EXTENSION));
    if script_path.is_file() {
        script = UiDocScript {
            on_open: true,
            on_close: true,
        };
        debug!(path = %script_path.display(), "loaded layout script");
    }

    Ok(UiDocument::new(namespace, script, root, env))
}
