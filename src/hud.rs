//! HUD controller: owns the composed UI elements (debug panel, hotbar,
//! creative catalog, overlay, grabbed-item indicator), runs the per-frame
//! update state machine, and positions everything at draw time.
//!
//! Update and draw run frame-synchronously on one thread; shared elements
//! use `Rc<RefCell<_>>` because the render list references them too.

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Vec2, Vec4};
use tracing::{debug, warn};
use winit::keyboard::KeyCode;

use voxfront_assets::{AssetCache, ContentIndices, LAYOUT_INVENTORY};
use voxfront_input::InputState;
use voxfront_ui::controls;
use voxfront_ui::inventory_view::{self, InventoryBuilder, InventoryInteraction, SlotLayout};
use voxfront_ui::{GfxContext, Gui, Node, RenderStats, UiCamera, UiDocument, UiScriptHooks, Viewport};
use voxfront_world::{Inventory, ItemStack, Player, WorldState, HOTBAR_SLOTS};

use crate::debug_panel::create_debug_panel;
use crate::settings::Settings;

/// Key toggling the player inventory.
pub const BIND_INVENTORY: KeyCode = KeyCode::KeyE;

/// Menu page shown while paused.
pub const PAGE_PAUSE: &str = "pause";

const HOTBAR_BOTTOM_OFFSET: f32 = 65.0;
const INVENTORY_PANEL_GAP: f32 = 10.0;
const CONTENT_ACCESS_COLUMNS: usize = 8;

/// Hotbar slot selection keys in slot order (1-9, then 0 for slot 9).
const SLOT_KEYS: [KeyCode; HOTBAR_SLOTS] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
    KeyCode::Digit0,
];

/// Rolling fps sample over a half-second window, shared with the debug
/// panel label.
#[derive(Debug)]
pub struct FpsCounter {
    fps: u32,
    min: u32,
    max: u32,
    text: String,
}

impl FpsCounter {
    /// Record this frame's fps sample.
    pub fn sample(&mut self, fps: u32) {
        self.fps = fps;
        self.min = self.min.min(fps);
        self.max = self.max.max(fps);
    }

    /// Close the current window: publish `max / min` and seed the next
    /// window from the current sample.
    pub fn rollover(&mut self) {
        self.text = format!("{} / {}", self.max, self.min);
        self.min = self.fps;
        self.max = self.fps;
    }

    /// Display text of the last closed window.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            fps: 0,
            min: 0,
            max: 0,
            text: "-".to_string(),
        }
    }
}

/// Shared engine state the HUD reads and mutates. Everything arrives as an
/// explicit handle; the HUD never reaches for globals.
pub struct HudContext {
    /// Shared render list + menu.
    pub gui: Rc<RefCell<Gui>>,
    /// Player state (chosen slot, debug flag, position).
    pub player: Rc<RefCell<Player>>,
    /// Ambient world values (daytime, seed).
    pub world: Rc<RefCell<WorldState>>,
    /// Engine settings bound by the debug panel.
    pub settings: Rc<RefCell<Settings>>,
    /// Renderer statistics shown on the debug panel.
    pub stats: Rc<RefCell<RenderStats>>,
    /// Content definition lookup.
    pub content: Rc<ContentIndices>,
    /// Prebuilt layout documents.
    pub assets: Rc<AssetCache>,
    /// Scripting engine lifecycle hooks.
    pub scripts: Rc<dyn UiScriptHooks>,
}

/// Heads-up display controller.
pub struct HudController {
    ctx: HudContext,
    interaction: Rc<RefCell<InventoryInteraction>>,
    fps: Rc<RefCell<FpsCounter>>,
    camera: UiCamera,

    pause: bool,
    inventory_open: bool,

    grabbed_view: Node,
    content_access: Node,
    content_panel: Node,
    hotbar: Node,
    overlay: Node,
    debug_panel: Node,

    inventory_view: Option<Node>,
    inventory_document: Option<Rc<UiDocument>>,
}

impl HudController {
    /// Compose the HUD elements and register them with the render list.
    pub fn new(ctx: HudContext) -> Self {
        let interaction = Rc::new(RefCell::new(InventoryInteraction::new()));
        let fps = Rc::new(RefCell::new(FpsCounter::default()));

        let grabbed_view = inventory_view::slot_view(SlotLayout::new(false, false));
        grabbed_view.bind_grabbed(interaction.clone());
        grabbed_view.set_color(Vec4::ZERO);
        grabbed_view.set_interactive(false);
        grabbed_view.set_size(Vec2::ZERO);

        let content_access = Self::create_content_access(&ctx, &interaction);
        let content_panel = controls::panel(content_access.size());
        content_panel.set_color(Vec4::ZERO);
        content_panel.add_child(content_access.clone());
        content_panel.set_scrollable(true);

        let hotbar = Self::create_hotbar(&ctx, &interaction);

        let overlay = controls::panel(Vec2::splat(4000.0));
        overlay.set_color(Vec4::new(0.0, 0.0, 0.0, 0.5));

        let debug_panel = create_debug_panel(&ctx, fps.clone());

        {
            let mut gui = ctx.gui.borrow_mut();
            gui.menu_mut().reset();
            gui.add_to_back(overlay.clone());
            gui.add_to_back(hotbar.clone());
            gui.add(debug_panel.clone());
            gui.add(content_panel.clone());
            gui.add(grabbed_view.clone());
        }

        Self {
            ctx,
            interaction,
            fps,
            camera: UiCamera::new(),
            pause: false,
            inventory_open: false,
            grabbed_view,
            content_access,
            content_panel,
            hotbar,
            overlay,
            debug_panel,
            inventory_view: None,
            inventory_document: None,
        }
    }

    /// Generated read-only catalog of every item definition: one unit each,
    /// fixed-column grid. Clicking a catalog slot copies the stack into the
    /// player's chosen hotbar slot. Never persisted, rebuilt from content
    /// definitions at construction.
    fn create_content_access(
        ctx: &HudContext,
        interaction: &Rc<RefCell<InventoryInteraction>>,
    ) -> Node {
        let item_count = ctx.content.items.len();
        let catalog_len = item_count.saturating_sub(1);
        let catalog = Rc::new(RefCell::new(Inventory::new(catalog_len)));
        {
            let mut catalog = catalog.borrow_mut();
            // Item 0 is the reserved empty item and stays out of the catalog.
            for id in 1..item_count {
                catalog.set(id - 1, Some(ItemStack::new(id as u16, 1)));
            }
        }

        let player = ctx.player.clone();
        let layout = SlotLayout::new(false, true).with_on_take(Rc::new(move |stack: &ItemStack| {
            let player = player.borrow();
            let slot = player.chosen_slot();
            player.inventory().borrow_mut().set(slot, Some(stack.clone()));
        }));

        let mut builder = InventoryBuilder::new();
        builder.add_grid(CONTENT_ACCESS_COLUMNS, catalog_len, Vec2::ZERO, 8.0, layout);
        let view = builder.build();
        view.bind_inventory(catalog, interaction.clone());
        view
    }

    /// Hotbar bound live to the player inventory; non-interactive so it
    /// cannot be dragged from.
    fn create_hotbar(ctx: &HudContext, interaction: &Rc<RefCell<InventoryInteraction>>) -> Node {
        let inventory = ctx.player.borrow().inventory();

        let mut builder = InventoryBuilder::new();
        builder.add_grid(
            HOTBAR_SLOTS,
            HOTBAR_SLOTS,
            Vec2::ZERO,
            4.0,
            SlotLayout::new(true, false),
        );
        let view = builder.build();
        view.bind_inventory(inventory, interaction.clone());
        view.set_interactive(false);
        view
    }

    /// Record this frame's fps sample for the debug overlay.
    pub fn draw_debug(&mut self, fps: u32) {
        self.fps.borrow_mut().sample(fps);
    }

    /// Whether the game is paused.
    pub fn is_pause(&self) -> bool {
        self.pause
    }

    /// Whether the player inventory is open.
    pub fn is_inventory_open(&self) -> bool {
        self.inventory_open
    }

    /// The bound inventory document while the inventory is open.
    pub fn inventory_document(&self) -> Option<&Rc<UiDocument>> {
        self.inventory_document.as_ref()
    }

    /// The bound inventory view while the inventory is open.
    pub fn inventory_view(&self) -> Option<&Node> {
        self.inventory_view.as_ref()
    }

    /// Shared interaction object holding the grabbed stack.
    pub fn interaction(&self) -> Rc<RefCell<InventoryInteraction>> {
        self.interaction.clone()
    }

    /// Per-frame state machine. `visible` is false while full-screen menus
    /// suppress the HUD.
    pub fn update(&mut self, visible: bool, input: &mut InputState, viewport: Viewport, dt: f32) {
        self.ctx.gui.borrow_mut().act(dt);

        {
            let player = self.ctx.player.borrow();
            self.debug_panel.set_visible(player.debug && visible);
        }
        {
            let pause = self.pause;
            self.ctx.gui.borrow_mut().menu_mut().set_visible(pause);
        }

        if !visible && self.inventory_open {
            self.close_inventory();
        }
        // The menu was dismissed externally: follow it out of pause.
        if self.pause && self.ctx.gui.borrow().menu().current_page().is_none() {
            self.pause = false;
        }

        let focus_caught = self.ctx.gui.borrow().is_focus_caught();
        if input.key_just_pressed(KeyCode::Escape) && !focus_caught {
            if self.pause {
                self.pause = false;
                self.ctx.gui.borrow_mut().menu_mut().reset();
            } else if self.inventory_open {
                self.close_inventory();
            } else {
                self.pause = true;
                self.ctx.gui.borrow_mut().menu_mut().set_page(PAGE_PAUSE);
            }
        }
        if visible && input.key_just_pressed(BIND_INVENTORY) && !self.pause {
            if self.inventory_open {
                self.close_inventory();
            } else {
                self.open_inventory();
            }
        }
        if (self.pause || self.inventory_open) == input.cursor_locked {
            input.toggle_cursor_lock();
        }

        self.content_panel.set_visible(self.inventory_open);
        let panel_size = self.content_panel.size();
        self.content_panel
            .set_size(Vec2::new(panel_size.x, viewport.height as f32));
        self.hotbar.set_visible(visible);

        for (slot, key) in SLOT_KEYS.iter().enumerate() {
            if input.key_just_pressed(*key) {
                self.ctx.player.borrow_mut().set_chosen_slot(slot);
            }
        }
        let scroll = input.scroll_lines();
        if !self.pause && !self.inventory_open && scroll != 0 {
            self.ctx.player.borrow_mut().cycle_chosen_slot(scroll);
        }

        self.overlay.set_visible(self.pause);
    }

    fn open_inventory(&mut self) {
        let Some(document) = self.ctx.assets.get_layout(LAYOUT_INVENTORY) else {
            warn!(layout = LAYOUT_INVENTORY, "layout missing from asset cache");
            return;
        };

        self.inventory_open = true;
        // Pull the indicator out so it can be re-added above the view.
        self.ctx.gui.borrow_mut().remove(&self.grabbed_view);

        let view = document.root();
        let inventory = self.ctx.player.borrow().inventory();
        view.bind_inventory(inventory.clone(), self.interaction.clone());
        self.ctx.scripts.on_ui_open(&document, &inventory);

        {
            let mut gui = self.ctx.gui.borrow_mut();
            gui.add(view.clone());
            gui.add(self.grabbed_view.clone());
        }
        self.inventory_view = Some(view);
        self.inventory_document = Some(document);
        debug!("inventory opened");
    }

    fn close_inventory(&mut self) {
        if let (Some(view), Some(document)) =
            (self.inventory_view.take(), self.inventory_document.take())
        {
            let inventory = view
                .bound_inventory()
                .unwrap_or_else(|| self.ctx.player.borrow().inventory());
            self.ctx.scripts.on_ui_close(&document, &inventory);
            self.ctx.gui.borrow_mut().remove(&view);
        }
        self.inventory_open = false;
        // The grabbed stack vanishes on close; it is not dropped into the
        // world (documented behavior).
        self.interaction.borrow_mut().clear_grabbed();
        debug!("inventory closed");
    }

    /// Position the composed elements and queue the crosshair.
    pub fn draw(&mut self, ctx: &mut GfxContext<'_>, input: &InputState) {
        let width = ctx.viewport.width as f32;
        let height = ctx.viewport.height as f32;

        self.camera.set_fov(height);
        ctx.shader.bind(&self.camera.proj_view(ctx.viewport));
        ctx.batch.begin();

        let (chosen_slot, player_debug) = {
            let player = self.ctx.player.borrow();
            (player.chosen_slot(), player.debug)
        };

        let hotbar_size = self.hotbar.size();
        self.hotbar.set_position(Vec2::new(
            width / 2.0 - hotbar_size.x / 2.0,
            height - HOTBAR_BOTTOM_OFFSET,
        ));
        self.hotbar.set_selected_slot(chosen_slot);

        if !self.pause && input.cursor_locked && !player_debug {
            let (cx, cy) = (width / 2.0, height / 2.0);
            let dark = Vec4::new(0.2, 0.2, 0.2, 1.0);
            let bright = Vec4::new(0.9, 0.9, 0.9, 1.0);
            ctx.batch.line_width(2.0);
            ctx.batch.line(cx, cy - 6.0, cx, cy + 6.0, dark);
            ctx.batch.line(cx + 6.0, cy, cx - 6.0, cy, dark);
            ctx.batch.line(cx - 5.0, cy - 5.0, cx + 5.0, cy + 5.0, bright);
            ctx.batch.line(cx + 5.0, cy - 5.0, cx - 5.0, cy + 5.0, bright);
        }

        if self.inventory_open {
            if let Some(view) = &self.inventory_view {
                let catalog_width = self.content_access.size().x;
                let view_size = view.size();
                // Centered, but never under the right-docked catalog.
                let x = (width / 2.0 - view_size.x / 2.0)
                    .min(width - catalog_width - INVENTORY_PANEL_GAP - view_size.x);
                view.set_position(Vec2::new(x, height / 2.0 - view_size.y / 2.0));
                self.content_panel
                    .set_position(Vec2::new(width - catalog_width, 0.0));
            }
        }

        let (cursor_x, cursor_y) = input.cursor_position;
        self.grabbed_view.set_position(Vec2::new(cursor_x, cursor_y));

        ctx.batch.flush();
    }
}

impl Drop for HudController {
    fn drop(&mut self) {
        let mut gui = self.ctx.gui.borrow_mut();
        gui.remove(&self.grabbed_view);
        if let Some(view) = &self.inventory_view {
            gui.remove(view);
        }
        gui.remove(&self.hotbar);
        gui.remove(&self.overlay);
        gui.remove(&self.content_panel);
        gui.remove(&self.debug_panel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;
    use std::cell::Cell;
    use voxfront_assets::{BlockDefinition, BlockRegistry, ItemDefinition, ItemRegistry};
    use voxfront_ui::{Batch2D, UiDocScript, UiShader};

    const VIEWPORT: Viewport = Viewport {
        width: 1000,
        height: 600,
    };
    const DT: f32 = 1.0 / 60.0;

    #[derive(Default)]
    struct RecordingHooks {
        opens: Cell<usize>,
        closes: Cell<usize>,
    }

    impl UiScriptHooks for RecordingHooks {
        fn on_ui_open(&self, _document: &UiDocument, _inventory: &Rc<RefCell<Inventory>>) {
            self.opens.set(self.opens.get() + 1);
        }

        fn on_ui_close(&self, _document: &UiDocument, _inventory: &Rc<RefCell<Inventory>>) {
            self.closes.set(self.closes.get() + 1);
        }
    }

    #[derive(Default)]
    struct RecordingBatch {
        lines: Vec<[f32; 4]>,
        flushed: bool,
    }

    impl Batch2D for RecordingBatch {
        fn begin(&mut self) {
            self.lines.clear();
            self.flushed = false;
        }

        fn line_width(&mut self, _width: f32) {}

        fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, _color: Vec4) {
            self.lines.push([x1, y1, x2, y2]);
        }

        fn flush(&mut self) {
            self.flushed = true;
        }
    }

    #[derive(Default)]
    struct NullShader {
        binds: usize,
    }

    impl UiShader for NullShader {
        fn bind(&mut self, _proj_view: &Mat4) {
            self.binds += 1;
        }
    }

    struct Fixture {
        hud: HudController,
        input: InputState,
        gui: Rc<RefCell<Gui>>,
        player: Rc<RefCell<Player>>,
        hooks: Rc<RecordingHooks>,
    }

    impl Fixture {
        fn new() -> Self {
            Self::with_layout(true)
        }

        fn with_layout(layout: bool) -> Self {
            let gui = Rc::new(RefCell::new(Gui::new()));
            {
                let pause_page = controls::panel(Vec2::new(200.0, 300.0));
                pause_page.set_visible(false);
                gui.borrow_mut().menu_mut().add_page(PAGE_PAUSE, pause_page);
            }

            let player = Rc::new(RefCell::new(Player::new(40)));
            let world = Rc::new(RefCell::new(WorldState::new(0.25, 42)));
            let settings = Rc::new(RefCell::new(Settings::default()));
            let stats = Rc::new(RefCell::new(RenderStats::default()));

            let items = ["air", "stone", "dirt", "sand"]
                .iter()
                .map(|name| ItemDefinition {
                    name: name.to_string(),
                })
                .collect();
            let blocks = ["air", "stone"]
                .iter()
                .map(|name| BlockDefinition {
                    name: name.to_string(),
                })
                .collect();
            let content = Rc::new(ContentIndices::new(
                ItemRegistry::new(items),
                BlockRegistry::new(blocks),
            ));

            let mut cache = AssetCache::new();
            if layout {
                let mut builder = InventoryBuilder::new();
                builder.add_grid(10, 40, Vec2::ZERO, 8.0, SlotLayout::new(true, false));
                let document = UiDocument::new(
                    LAYOUT_INVENTORY,
                    UiDocScript {
                        on_open: true,
                        on_close: true,
                    },
                    builder.build(),
                    1,
                );
                cache.add_layout(LAYOUT_INVENTORY, Rc::new(document));
            }

            let hooks = Rc::new(RecordingHooks::default());
            let hud = HudController::new(HudContext {
                gui: gui.clone(),
                player: player.clone(),
                world,
                settings,
                stats,
                content,
                assets: Rc::new(cache),
                scripts: hooks.clone(),
            });

            Self {
                hud,
                input: InputState::new(),
                gui,
                player,
                hooks,
            }
        }

        /// Run one update with no new input.
        fn idle_frame(&mut self, visible: bool) {
            self.hud.update(visible, &mut self.input, VIEWPORT, DT);
            self.input.begin_frame();
        }

        /// Tap a key for exactly one frame.
        fn press_frame(&mut self, key: KeyCode) {
            self.input.inject_key_press(key);
            self.hud.update(true, &mut self.input, VIEWPORT, DT);
            self.input.begin_frame();
            self.input.inject_key_release(key);
        }
    }

    #[test]
    fn inventory_toggle_opens_and_closes() {
        let mut fx = Fixture::new();

        fx.press_frame(BIND_INVENTORY);
        assert!(fx.hud.is_inventory_open());
        assert!(fx.hud.inventory_view().is_some());
        assert!(fx.hud.inventory_document().is_some());
        assert_eq!(fx.hooks.opens.get(), 1);

        // The view joined the render list, the indicator stays on top.
        {
            let gui = fx.gui.borrow();
            let view = fx.hud.inventory_view().unwrap();
            assert!(gui.contains(view));
            let last = gui.nodes().last().unwrap();
            assert!(last.ptr_eq(&fx.hud.grabbed_view));
        }

        fx.press_frame(BIND_INVENTORY);
        assert!(!fx.hud.is_inventory_open());
        assert!(fx.hud.inventory_view().is_none());
        assert!(fx.hud.inventory_document().is_none());
        assert_eq!(fx.hooks.closes.get(), 1);
    }

    #[test]
    fn inventory_toggle_is_noop_while_paused() {
        let mut fx = Fixture::new();

        fx.press_frame(KeyCode::Escape);
        assert!(fx.hud.is_pause());

        fx.press_frame(BIND_INVENTORY);
        assert!(fx.hud.is_pause());
        assert!(!fx.hud.is_inventory_open());
        assert_eq!(fx.hooks.opens.get(), 0);
    }

    #[test]
    fn escape_unpauses_before_closing_inventory() {
        let mut fx = Fixture::new();

        fx.press_frame(BIND_INVENTORY);
        assert!(fx.hud.is_inventory_open());

        // Force pause while the inventory is open.
        fx.hud.pause = true;
        fx.gui.borrow_mut().menu_mut().set_page(PAGE_PAUSE);

        fx.press_frame(KeyCode::Escape);
        assert!(!fx.hud.is_pause());
        assert!(fx.hud.is_inventory_open());

        fx.press_frame(KeyCode::Escape);
        assert!(!fx.hud.is_inventory_open());
    }

    #[test]
    fn escape_enters_pause_and_shows_page() {
        let mut fx = Fixture::new();

        fx.press_frame(KeyCode::Escape);
        assert!(fx.hud.is_pause());
        assert_eq!(
            fx.gui.borrow().menu().current_page(),
            Some(PAGE_PAUSE)
        );

        fx.press_frame(KeyCode::Escape);
        assert!(!fx.hud.is_pause());
        assert_eq!(fx.gui.borrow().menu().current_page(), None);
    }

    #[test]
    fn escape_is_ignored_while_focus_is_caught() {
        let mut fx = Fixture::new();
        let text_box = controls::text_box("");
        fx.gui.borrow_mut().set_focus(Some(text_box));

        fx.press_frame(KeyCode::Escape);
        assert!(!fx.hud.is_pause());
    }

    #[test]
    fn externally_dismissed_menu_clears_pause() {
        let mut fx = Fixture::new();
        fx.press_frame(KeyCode::Escape);
        assert!(fx.hud.is_pause());

        fx.gui.borrow_mut().menu_mut().reset();
        fx.idle_frame(true);
        assert!(!fx.hud.is_pause());
    }

    #[test]
    fn hidden_hud_force_closes_inventory() {
        let mut fx = Fixture::new();

        fx.press_frame(BIND_INVENTORY);
        assert!(fx.hud.is_inventory_open());

        fx.idle_frame(false);
        assert!(!fx.hud.is_inventory_open());
        assert!(fx.hud.inventory_view().is_none());
        assert!(fx.hud.inventory_document().is_none());
        assert_eq!(fx.hooks.closes.get(), 1);
    }

    #[test]
    fn closing_inventory_clears_grabbed_stack() {
        let mut fx = Fixture::new();

        fx.press_frame(BIND_INVENTORY);
        fx.hud
            .interaction()
            .borrow_mut()
            .set_grabbed(Some(ItemStack::new(2, 5)));

        fx.press_frame(BIND_INVENTORY);
        assert!(fx.hud.interaction().borrow().grabbed().is_none());
    }

    #[test]
    fn digit_keys_select_hotbar_slots() {
        let mut fx = Fixture::new();

        fx.press_frame(KeyCode::Digit3);
        assert_eq!(fx.player.borrow().chosen_slot(), 2);

        fx.press_frame(KeyCode::Digit0);
        assert_eq!(fx.player.borrow().chosen_slot(), 9);
    }

    #[test]
    fn scroll_cycles_hotbar_with_wrap() {
        let mut fx = Fixture::new();

        fx.input.inject_scroll(1.0);
        fx.idle_frame(true);
        assert_eq!(fx.player.borrow().chosen_slot(), 9);

        fx.input.inject_scroll(-3.0);
        fx.idle_frame(true);
        assert_eq!(fx.player.borrow().chosen_slot(), 2);
    }

    #[test]
    fn scroll_is_ignored_while_inventory_is_open() {
        let mut fx = Fixture::new();
        fx.press_frame(BIND_INVENTORY);

        fx.input.inject_scroll(4.0);
        fx.idle_frame(true);
        assert_eq!(fx.player.borrow().chosen_slot(), 0);
    }

    #[test]
    fn cursor_lock_always_matches_overlay_state() {
        let mut fx = Fixture::new();

        fx.idle_frame(true);
        assert!(fx.input.cursor_locked);

        fx.press_frame(BIND_INVENTORY);
        assert!(!fx.input.cursor_locked);

        fx.press_frame(BIND_INVENTORY);
        assert!(fx.input.cursor_locked);

        fx.press_frame(KeyCode::Escape);
        assert!(!fx.input.cursor_locked);

        fx.press_frame(KeyCode::Escape);
        assert!(fx.input.cursor_locked);
    }

    #[test]
    fn overlay_and_panel_visibility_track_state() {
        let mut fx = Fixture::new();

        fx.idle_frame(true);
        assert!(!fx.hud.overlay.visible());
        assert!(!fx.hud.content_panel.visible());
        assert!(fx.hud.hotbar.visible());

        fx.press_frame(BIND_INVENTORY);
        assert!(fx.hud.content_panel.visible());
        // Catalog panel stretches to the viewport height.
        assert_eq!(fx.hud.content_panel.size().y, VIEWPORT.height as f32);

        fx.press_frame(KeyCode::Escape);
        assert!(!fx.hud.is_inventory_open());
        fx.press_frame(KeyCode::Escape);
        assert!(fx.hud.is_pause());
        assert!(fx.hud.overlay.visible());
    }

    #[test]
    fn debug_panel_visibility_gated_on_player_flag() {
        let mut fx = Fixture::new();

        fx.idle_frame(true);
        assert!(!fx.hud.debug_panel.visible());

        fx.player.borrow_mut().debug = true;
        fx.idle_frame(true);
        assert!(fx.hud.debug_panel.visible());

        fx.idle_frame(false);
        assert!(!fx.hud.debug_panel.visible());
    }

    #[test]
    fn missing_layout_keeps_inventory_closed() {
        let mut fx = Fixture::with_layout(false);

        fx.press_frame(BIND_INVENTORY);
        assert!(!fx.hud.is_inventory_open());
        assert!(fx.hud.inventory_view().is_none());
        assert_eq!(fx.hooks.opens.get(), 0);
    }

    #[test]
    fn catalog_click_copies_into_chosen_slot() {
        let mut fx = Fixture::new();
        fx.press_frame(KeyCode::Digit5);

        // Catalog slot 0 holds item id 1 ("stone").
        fx.hud.content_access.click_slot(0);

        let inventory = fx.player.borrow().inventory();
        let stack = inventory.borrow().get(4).cloned().unwrap();
        assert_eq!(stack.item_id, 1);
        assert_eq!(stack.count, 1);
    }

    #[test]
    fn draw_crosshair_only_when_locked_and_unpaused() {
        let mut fx = Fixture::new();
        fx.idle_frame(true);
        assert!(fx.input.cursor_locked);

        let mut batch = RecordingBatch::default();
        let mut shader = NullShader::default();
        let mut ctx = GfxContext {
            viewport: VIEWPORT,
            batch: &mut batch,
            shader: &mut shader,
        };
        fx.hud.draw(&mut ctx, &fx.input);
        assert_eq!(batch.lines.len(), 4);
        assert!(batch.flushed);
        assert_eq!(shader.binds, 1);

        fx.press_frame(KeyCode::Escape);
        let mut ctx = GfxContext {
            viewport: VIEWPORT,
            batch: &mut batch,
            shader: &mut shader,
        };
        fx.hud.draw(&mut ctx, &fx.input);
        assert!(batch.lines.is_empty());
    }

    #[test]
    fn draw_positions_hotbar_and_docked_panels() {
        let mut fx = Fixture::new();
        fx.press_frame(KeyCode::Digit4);
        fx.press_frame(BIND_INVENTORY);
        fx.input.inject_cursor_position(321.0, 99.0);

        let mut batch = RecordingBatch::default();
        let mut shader = NullShader::default();
        let mut ctx = GfxContext {
            viewport: VIEWPORT,
            batch: &mut batch,
            shader: &mut shader,
        };
        fx.hud.draw(&mut ctx, &fx.input);

        let width = VIEWPORT.width as f32;
        let height = VIEWPORT.height as f32;

        let hotbar = &fx.hud.hotbar;
        assert_eq!(
            hotbar.position(),
            Vec2::new(width / 2.0 - hotbar.size().x / 2.0, height - 65.0)
        );
        assert_eq!(hotbar.selected_slot(), Some(3));

        // Catalog docks flush to the right edge.
        let catalog_width = fx.hud.content_access.size().x;
        assert_eq!(
            fx.hud.content_panel.position(),
            Vec2::new(width - catalog_width, 0.0)
        );

        // Inventory view is clamped left of the catalog when centering
        // would overlap it.
        let view = fx.hud.inventory_view().unwrap();
        let clamp = width - catalog_width - 10.0 - view.size().x;
        let centered = width / 2.0 - view.size().x / 2.0;
        assert_eq!(view.position().x, centered.min(clamp));
        assert_eq!(view.position().y, height / 2.0 - view.size().y / 2.0);

        // Grabbed indicator follows the cursor.
        assert_eq!(fx.hud.grabbed_view.position(), Vec2::new(321.0, 99.0));
    }

    #[test]
    fn drop_unregisters_every_owned_element() {
        let fx = Fixture::new();
        let gui = fx.gui.clone();
        assert_eq!(gui.borrow().nodes().len(), 5);

        drop(fx);
        assert!(gui.borrow().nodes().is_empty());
    }

    #[test]
    fn fps_counter_window_rollover() {
        let mut counter = FpsCounter::default();
        assert_eq!(counter.text(), "-");

        counter.sample(120);
        counter.rollover();
        // First window still carries the zero seed for min.
        assert_eq!(counter.text(), "120 / 0");

        counter.sample(90);
        counter.sample(144);
        counter.rollover();
        assert_eq!(counter.text(), "144 / 90");
    }
}
