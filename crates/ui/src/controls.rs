//! Leaf controls and panels: labels, text boxes, track bars, checkboxes.
//!
//! Controls are pull-based: a supplier closure, when present, is evaluated
//! on read so the displayed value tracks live state without an event loop.
//! Consumers run when a control commits a value back.

use glam::{Vec2, Vec4};
use tracing::warn;

use crate::node::{Consumer, Node, NodeKind, Supplier};

/// Stacking direction for panel children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Children stack top to bottom.
    Vertical,
    /// Children stack left to right.
    Horizontal,
}

pub(crate) struct IntervalEvent {
    interval: f32,
    timer: f32,
    callback: std::rc::Rc<dyn Fn()>,
}

/// Container payload: ordered children plus interval listeners.
pub struct PanelData {
    /// Ordered child elements (paint order).
    pub children: Vec<Node>,
    /// Stacking direction used by [`Node::refresh_layout`].
    pub orientation: Orientation,
    /// Inner padding in UI pixels.
    pub padding: f32,
    /// Gap between stacked children.
    pub spacing: f32,
    /// Whether overflowing content can be scrolled.
    pub scrollable: bool,
    pub(crate) listeners: Vec<IntervalEvent>,
}

impl PanelData {
    /// Advance listener timers, returning the callbacks that are due.
    pub(crate) fn tick_listeners(&mut self, dt: f32) -> Vec<std::rc::Rc<dyn Fn()>> {
        let mut due = Vec::new();
        for listener in &mut self.listeners {
            listener.timer += dt;
            if listener.timer >= listener.interval {
                listener.timer -= listener.interval;
                due.push(listener.callback.clone());
            }
        }
        due
    }
}

/// Text line payload.
pub struct LabelData {
    /// Last explicitly set text; the fallback when no supplier is bound.
    pub text: String,
    /// Live text source re-evaluated on every read.
    pub supplier: Option<Supplier<String>>,
}

/// Editable text field payload.
pub struct TextBoxData {
    /// Current committed or in-edit text.
    pub text: String,
    /// Live text source shown while not editing.
    pub supplier: Option<Supplier<String>>,
    /// Sink invoked with the typed text on commit.
    pub consumer: Option<Consumer<String>>,
    /// Produces the initial editable text when editing starts.
    pub edit_start: Option<Supplier<String>>,
    /// Whether the box currently holds edit focus.
    pub editing: bool,
}

/// Continuous slider payload.
pub struct TrackBarData {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Last value pushed through the consumer (or initial value).
    pub value: f64,
    /// Step resolution exposed to the user.
    pub step: f64,
    /// Visual track width multiplier.
    pub track_width: f32,
    /// Live value source.
    pub supplier: Option<Supplier<f64>>,
    /// Sink invoked when the user drags the bar.
    pub consumer: Option<Consumer<f64>>,
}

/// Checkbox payload bound bidirectionally to a flag.
pub struct CheckBoxData {
    /// Caption drawn next to the box.
    pub label: String,
    /// Last known checked state.
    pub checked: bool,
    /// Live flag source.
    pub supplier: Option<Supplier<bool>>,
    /// Sink invoked when the user toggles the box.
    pub consumer: Option<Consumer<bool>>,
}

/// Create an empty vertical panel of the given size.
pub fn panel(size: Vec2) -> Node {
    Node::new(
        NodeKind::Panel(PanelData {
            children: Vec::new(),
            orientation: Orientation::Vertical,
            padding: 5.0,
            spacing: 2.0,
            scrollable: false,
            listeners: Vec::new(),
        }),
        size,
    )
}

/// Create a static text label.
pub fn label(text: impl Into<String>) -> Node {
    let node = Node::new(
        NodeKind::Label(LabelData {
            text: text.into(),
            supplier: None,
        }),
        Vec2::new(100.0, 24.0),
    );
    node.set_color(Vec4::ZERO);
    node
}

/// Create a label driven by a live text supplier.
pub fn label_with_supplier(supplier: Supplier<String>) -> Node {
    let node = label("-");
    node.set_text_supplier(supplier);
    node
}

/// Create a text box with initial text.
pub fn text_box(text: impl Into<String>) -> Node {
    Node::new(
        NodeKind::TextBox(TextBoxData {
            text: text.into(),
            supplier: None,
            consumer: None,
            edit_start: None,
            editing: false,
        }),
        Vec2::new(150.0, 27.0),
    )
}

/// Create a track bar over `[min, max]` with the given step resolution.
pub fn track_bar(min: f64, max: f64, value: f64, step: f64, track_width: f32) -> Node {
    Node::new(
        NodeKind::TrackBar(TrackBarData {
            min,
            max,
            value,
            step,
            track_width,
            supplier: None,
            consumer: None,
        }),
        Vec2::new(250.0, 24.0),
    )
}

/// Create a captioned checkbox of the given size.
pub fn check_box(caption: impl Into<String>, size: Vec2) -> Node {
    Node::new(
        NodeKind::CheckBox(CheckBoxData {
            label: caption.into(),
            checked: false,
            supplier: None,
            consumer: None,
        }),
        size,
    )
}

impl Node {
    /// Set the stacking direction of a panel.
    pub fn set_orientation(&self, orientation: Orientation) {
        match &mut self.data_mut().kind {
            NodeKind::Panel(panel) => panel.orientation = orientation,
            _ => warn!("set_orientation called on a non-panel node"),
        }
    }

    /// Mark a panel as scrollable.
    pub fn set_scrollable(&self, scrollable: bool) {
        match &mut self.data_mut().kind {
            NodeKind::Panel(panel) => panel.scrollable = scrollable,
            _ => warn!("set_scrollable called on a non-panel node"),
        }
    }

    /// Run `callback` every `interval` seconds of [`Node::act`] time.
    pub fn listen_interval(&self, interval: f32, callback: impl Fn() + 'static) {
        match &mut self.data_mut().kind {
            NodeKind::Panel(panel) => panel.listeners.push(IntervalEvent {
                interval,
                timer: 0.0,
                callback: std::rc::Rc::new(callback),
            }),
            _ => warn!("listen_interval called on a non-panel node"),
        }
    }

    /// Restack panel children along its orientation and grow the panel to
    /// fit the content.
    pub fn refresh_layout(&self) {
        let (children, orientation, padding, spacing) = match &self.data().kind {
            NodeKind::Panel(panel) => (
                panel.children.clone(),
                panel.orientation,
                panel.padding,
                panel.spacing,
            ),
            _ => return,
        };

        let mut cursor = padding;
        let mut cross: f32 = 0.0;
        for child in &children {
            let size = child.size();
            match orientation {
                Orientation::Vertical => {
                    child.set_position(Vec2::new(padding, cursor));
                    cursor += size.y + spacing;
                    cross = cross.max(size.x);
                }
                Orientation::Horizontal => {
                    child.set_position(Vec2::new(cursor, padding));
                    cursor += size.x + spacing;
                    cross = cross.max(size.y);
                }
            }
        }

        let content = match orientation {
            Orientation::Vertical => Vec2::new(cross + padding * 2.0, cursor + padding),
            Orientation::Horizontal => Vec2::new(cursor + padding, cross + padding * 2.0),
        };
        let size = self.size();
        self.set_size(size.max(content));
    }

    /// Displayed text of a label or text box; evaluates the supplier when
    /// one is bound (and, for text boxes, when not editing).
    pub fn display_text(&self) -> String {
        let (supplier, stored) = match &self.data().kind {
            NodeKind::Label(label) => (label.supplier.clone(), label.text.clone()),
            NodeKind::TextBox(text_box) => {
                if text_box.editing {
                    (None, text_box.text.clone())
                } else {
                    (text_box.supplier.clone(), text_box.text.clone())
                }
            }
            _ => return String::new(),
        };
        match supplier {
            Some(supplier) => supplier(),
            None => stored,
        }
    }

    /// Overwrite the stored text of a label or text box.
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        match &mut self.data_mut().kind {
            NodeKind::Label(label) => label.text = text,
            NodeKind::TextBox(text_box) => text_box.text = text,
            _ => warn!("set_text called on a non-text node"),
        }
    }

    /// Bind a live text supplier to a label or text box.
    pub fn set_text_supplier(&self, supplier: Supplier<String>) {
        match &mut self.data_mut().kind {
            NodeKind::Label(label) => label.supplier = Some(supplier),
            NodeKind::TextBox(text_box) => text_box.supplier = Some(supplier),
            _ => warn!("set_text_supplier called on a non-text node"),
        }
    }

    /// Bind the commit sink of a text box.
    pub fn set_text_consumer(&self, consumer: Consumer<String>) {
        match &mut self.data_mut().kind {
            NodeKind::TextBox(text_box) => text_box.consumer = Some(consumer),
            _ => warn!("set_text_consumer called on a non-textbox node"),
        }
    }

    /// Bind the closure producing the initial text when editing starts.
    pub fn set_edit_start(&self, edit_start: Supplier<String>) {
        match &mut self.data_mut().kind {
            NodeKind::TextBox(text_box) => text_box.edit_start = Some(edit_start),
            _ => warn!("set_edit_start called on a non-textbox node"),
        }
    }

    /// Whether a text box currently holds edit focus.
    pub fn is_editing(&self) -> bool {
        match &self.data().kind {
            NodeKind::TextBox(text_box) => text_box.editing,
            _ => false,
        }
    }

    /// Start editing a text box, seeding the text from the edit-start
    /// closure when one is bound.
    pub fn begin_edit(&self) {
        let edit_start = match &mut self.data_mut().kind {
            NodeKind::TextBox(text_box) => {
                text_box.editing = true;
                text_box.edit_start.clone()
            }
            _ => {
                warn!("begin_edit called on a non-textbox node");
                return;
            }
        };
        if let Some(edit_start) = edit_start {
            let initial = edit_start();
            self.set_text(initial);
        }
    }

    /// Commit typed text through the consumer and end editing.
    pub fn commit_edit(&self, text: &str) {
        let consumer = match &mut self.data_mut().kind {
            NodeKind::TextBox(text_box) => {
                text_box.editing = false;
                text_box.text = text.to_string();
                text_box.consumer.clone()
            }
            _ => return,
        };
        if let Some(consumer) = consumer {
            consumer(text.to_string());
        }
    }

    /// Current track-bar value, pulled from the supplier when bound.
    pub fn track_value(&self) -> f64 {
        let (supplier, stored) = match &self.data().kind {
            NodeKind::TrackBar(bar) => (bar.supplier.clone(), bar.value),
            _ => return 0.0,
        };
        match supplier {
            Some(supplier) => supplier(),
            None => stored,
        }
    }

    /// Push a new track-bar value (clamped to the bar range) through the
    /// consumer.
    pub fn set_track_value(&self, value: f64) {
        let consumer = match &mut self.data_mut().kind {
            NodeKind::TrackBar(bar) => {
                let clamped = value.clamp(bar.min, bar.max);
                bar.value = clamped;
                bar.consumer.clone().map(|c| (c, clamped))
            }
            _ => None,
        };
        if let Some((consumer, value)) = consumer {
            consumer(value);
        }
    }

    /// Bind a live value supplier to a track bar.
    pub fn set_value_supplier(&self, supplier: Supplier<f64>) {
        match &mut self.data_mut().kind {
            NodeKind::TrackBar(bar) => bar.supplier = Some(supplier),
            _ => warn!("set_value_supplier called on a non-trackbar node"),
        }
    }

    /// Bind the value sink of a track bar.
    pub fn set_value_consumer(&self, consumer: Consumer<f64>) {
        match &mut self.data_mut().kind {
            NodeKind::TrackBar(bar) => bar.consumer = Some(consumer),
            _ => warn!("set_value_consumer called on a non-trackbar node"),
        }
    }

    /// Current checkbox state, pulled from the supplier when bound.
    pub fn checked(&self) -> bool {
        let (supplier, stored) = match &self.data().kind {
            NodeKind::CheckBox(check_box) => (check_box.supplier.clone(), check_box.checked),
            _ => return false,
        };
        match supplier {
            Some(supplier) => supplier(),
            None => stored,
        }
    }

    /// Toggle the checkbox, pushing the new state through the consumer.
    pub fn set_checked(&self, checked: bool) {
        let consumer = match &mut self.data_mut().kind {
            NodeKind::CheckBox(check_box) => {
                check_box.checked = checked;
                check_box.consumer.clone()
            }
            _ => None,
        };
        if let Some(consumer) = consumer {
            consumer(checked);
        }
    }

    /// Bind a live flag supplier to a checkbox.
    pub fn set_checked_supplier(&self, supplier: Supplier<bool>) {
        match &mut self.data_mut().kind {
            NodeKind::CheckBox(check_box) => check_box.supplier = Some(supplier),
            _ => warn!("set_checked_supplier called on a non-checkbox node"),
        }
    }

    /// Bind the flag sink of a checkbox.
    pub fn set_checked_consumer(&self, consumer: Consumer<bool>) {
        match &mut self.data_mut().kind {
            NodeKind::CheckBox(check_box) => check_box.consumer = Some(consumer),
            _ => warn!("set_checked_consumer called on a non-checkbox node"),
        }
    }
}
