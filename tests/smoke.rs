//! End-to-end pass over the public API: load a layout, compose the HUD,
//! and drive a few frames of input through the state machine.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use winit::keyboard::KeyCode;

use voxfront::{HudContext, HudController, Settings, BIND_INVENTORY, PAGE_PAUSE};
use voxfront_assets::{
    AssetCache, BlockRegistry, ContentIndices, ItemRegistry, LAYOUT_INVENTORY,
};
use voxfront_input::InputState;
use voxfront_ui::{controls, document_from_str, Gui, NoopUiScriptHooks, RenderStats, Viewport};
use voxfront_world::{Player, WorldState};

const LAYOUT: &str =
    r#"{ "type": "inventory", "id": "grid", "columns": 10, "slots": 40 }"#;

const VIEWPORT: Viewport = Viewport {
    width: 1280,
    height: 720,
};

fn build_hud() -> (
    HudController,
    InputState,
    Rc<RefCell<Gui>>,
    Rc<RefCell<Player>>,
) {
    let gui = Rc::new(RefCell::new(Gui::new()));
    {
        let pause_page = controls::panel(Vec2::new(200.0, 300.0));
        pause_page.set_visible(false);
        gui.borrow_mut().menu_mut().add_page(PAGE_PAUSE, pause_page);
    }

    let items = voxfront_assets::load_items_from_str(
        r#"[{"name":"air"},{"name":"stone"},{"name":"dirt"}]"#,
    )
    .unwrap();
    let blocks =
        voxfront_assets::load_blocks_from_str(r#"[{"name":"air"},{"name":"stone"}]"#).unwrap();

    let mut cache = AssetCache::new();
    let document = document_from_str(1, LAYOUT_INVENTORY, LAYOUT).unwrap();
    cache.add_layout(LAYOUT_INVENTORY, Rc::new(document));

    let player = Rc::new(RefCell::new(Player::new(40)));
    let hud = HudController::new(HudContext {
        gui: gui.clone(),
        player: player.clone(),
        world: Rc::new(RefCell::new(WorldState::new(0.5, 1))),
        settings: Rc::new(RefCell::new(Settings::default())),
        stats: Rc::new(RefCell::new(RenderStats::default())),
        content: Rc::new(ContentIndices::new(
            ItemRegistry::new(items),
            BlockRegistry::new(blocks),
        )),
        assets: Rc::new(cache),
        scripts: Rc::new(NoopUiScriptHooks),
    });

    (hud, InputState::new(), gui, player)
}

fn frame(hud: &mut HudController, input: &mut InputState) {
    hud.update(true, input, VIEWPORT, 1.0 / 60.0);
    input.begin_frame();
}

fn tap(hud: &mut HudController, input: &mut InputState, key: KeyCode) {
    input.inject_key_press(key);
    frame(hud, input);
    input.inject_key_release(key);
}

#[test]
fn hud_session_round_trip() {
    let (mut hud, mut input, gui, player) = build_hud();

    // First idle frame locks the cursor for first-person play.
    frame(&mut hud, &mut input);
    assert!(input.cursor_locked);
    assert!(!hud.is_pause());
    assert!(!hud.is_inventory_open());

    // Open the inventory: the loaded layout is bound and registered.
    tap(&mut hud, &mut input, BIND_INVENTORY);
    assert!(hud.is_inventory_open());
    assert!(!input.cursor_locked);

    let document = hud.inventory_document().unwrap();
    assert_eq!(document.id(), LAYOUT_INVENTORY);
    let grid = document.get("grid").unwrap();
    assert_eq!(grid.slot_count(), 40);

    // The opened view is the bound grid, backed by the player inventory.
    let view = hud.inventory_view().unwrap();
    assert!(gui.borrow().contains(view));
    let bound = view.bound_inventory().unwrap();
    assert!(Rc::ptr_eq(&bound, &player.borrow().inventory()));

    // Escape closes it again and relocks the cursor.
    tap(&mut hud, &mut input, KeyCode::Escape);
    assert!(!hud.is_inventory_open());
    assert!(input.cursor_locked);

    // Escape with nothing open pauses and shows the pause page.
    tap(&mut hud, &mut input, KeyCode::Escape);
    assert!(hud.is_pause());
    assert!(!input.cursor_locked);
    assert_eq!(gui.borrow().menu().current_page(), Some(PAGE_PAUSE));

    // Hotbar selection by digit key still works after unpausing.
    tap(&mut hud, &mut input, KeyCode::Escape);
    assert!(!hud.is_pause());
    tap(&mut hud, &mut input, KeyCode::Digit7);
    assert_eq!(player.borrow().chosen_slot(), 6);

    input.inject_scroll(-2.0);
    frame(&mut hud, &mut input);
    assert_eq!(player.borrow().chosen_slot(), 8);

    drop(hud);
    assert!(gui.borrow().nodes().is_empty());
}
