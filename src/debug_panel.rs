//! The debug overlay panel: live engine readouts plus a handful of
//! bidirectionally bound controls (teleport fields, daytime/fog sliders,
//! chunk border checkbox).
//!
//! Every row is pull-based: labels re-evaluate their suppliers on read, so
//! the panel needs no per-frame refresh besides the fps window rollover.

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Vec2, Vec4};

use voxfront_ui::controls::{self, Orientation};
use voxfront_ui::Node;
use voxfront_world::Player;

use crate::hud::{FpsCounter, HudContext};

const FPS_WINDOW_SECONDS: f32 = 0.5;

/// Build the debug panel with every readout bound to live state.
pub fn create_debug_panel(ctx: &HudContext, fps: Rc<RefCell<FpsCounter>>) -> Node {
    let panel = controls::panel(Vec2::new(250.0, 200.0));
    panel.set_position(Vec2::new(10.0, 10.0));
    panel.set_visible(false);

    {
        let fps = fps.clone();
        panel.listen_interval(FPS_WINDOW_SECONDS, move || fps.borrow_mut().rollover());
    }
    {
        let fps = fps.clone();
        panel.add_child(controls::label_with_supplier(Rc::new(move || {
            format!("fps: {}", fps.borrow().text())
        })));
    }
    {
        let stats = ctx.stats.clone();
        panel.add_child(controls::label_with_supplier(Rc::new(move || {
            format!("meshes: {}", stats.borrow().meshes)
        })));
    }
    {
        let settings = ctx.settings.clone();
        panel.add_child(controls::label_with_supplier(Rc::new(move || {
            let enabled = settings.borrow().graphics.frustum_culling;
            format!(
                "frustum-culling: {}",
                if enabled { "on" } else { "off" }
            )
        })));
    }
    {
        let stats = ctx.stats.clone();
        panel.add_child(controls::label_with_supplier(Rc::new(move || {
            let stats = stats.borrow();
            format!(
                "chunks: {} visible: {}",
                stats.chunks_total, stats.chunks_visible
            )
        })));
    }
    {
        let player = ctx.player.clone();
        let content = ctx.content.clone();
        panel.add_child(controls::label_with_supplier(Rc::new(move || {
            let voxel = player.borrow().selected_voxel;
            let mut text = format!("block: {} states: {:#06x}", voxel.id, voxel.states);
            // Unknown ids keep the numeric readout without a name suffix.
            if let Some(definition) = content.blocks.definition(voxel.id) {
                text.push_str(&format!(" ({})", definition.name));
            }
            text
        })));
    }
    {
        let world = ctx.world.clone();
        panel.add_child(controls::label_with_supplier(Rc::new(move || {
            format!("seed: {}", world.borrow().seed)
        })));
    }

    for (axis, name) in ["x", "y", "z"].iter().enumerate() {
        panel.add_child(create_axis_row(ctx.player.clone(), axis, name));
    }

    {
        let world = ctx.world.clone();
        panel.add_child(controls::label_with_supplier(Rc::new(move || {
            let (hours, minutes) = world.borrow().clock_time();
            format!("time: {hours:02}:{minutes:02}")
        })));
    }
    {
        let bar = controls::track_bar(0.0, 1.0, 1.0, 0.005, 8.0);
        let world = ctx.world.clone();
        bar.set_value_supplier(Rc::new(move || world.borrow().daytime));
        let world = ctx.world.clone();
        bar.set_value_consumer(Rc::new(move |value| world.borrow_mut().daytime = value));
        panel.add_child(bar);
    }
    {
        let bar = controls::track_bar(0.0, 1.0, 0.0, 0.005, 8.0);
        let settings = ctx.settings.clone();
        bar.set_value_supplier(Rc::new(move || settings.borrow().graphics.fog));
        let settings = ctx.settings.clone();
        bar.set_value_consumer(Rc::new(move |value| {
            settings.borrow_mut().graphics.fog = value;
        }));
        panel.add_child(bar);
    }
    {
        let check = controls::check_box("Show Chunk Borders", Vec2::new(400.0, 24.0));
        let settings = ctx.settings.clone();
        check.set_checked_supplier(Rc::new(move || settings.borrow().debug.show_chunk_borders));
        let settings = ctx.settings.clone();
        check.set_checked_consumer(Rc::new(move |checked| {
            settings.borrow_mut().debug.show_chunk_borders = checked;
        }));
        panel.add_child(check);
    }

    panel.refresh_layout();
    panel
}

/// One coordinate row: axis label plus an editable teleport field. The
/// field shows the live coordinate, seeds edits with the truncated value,
/// and teleports on commit. Unparsable input is ignored.
fn create_axis_row(player: Rc<RefCell<Player>>, axis: usize, name: &str) -> Node {
    let row = controls::panel(Vec2::new(250.0, 27.0));
    row.set_orientation(Orientation::Horizontal);
    row.set_color(Vec4::ZERO);
    row.add_child(controls::label(format!("{name}: ")));

    let field = controls::text_box("");
    {
        let player = player.clone();
        field.set_text_supplier(Rc::new(move || {
            format!("{:.2}", player.borrow().position[axis])
        }));
    }
    {
        let player = player.clone();
        field.set_edit_start(Rc::new(move || {
            format!("{}", player.borrow().position[axis] as i32)
        }));
    }
    {
        let player = player.clone();
        field.set_text_consumer(Rc::new(move |text| {
            if let Ok(value) = text.trim().parse::<i32>() {
                let mut player = player.borrow_mut();
                let mut position = player.position;
                position[axis] = value as f32;
                player.teleport(position);
            }
        }));
    }
    row.add_child(field);
    row.refresh_layout();
    row
}
