#![warn(missing_docs)]
//! Polled input state for the HUD layer.
//!
//! Window events are folded into per-frame state that the HUD queries each
//! update: edge-triggered key presses, an accumulated scroll delta, the
//! cursor position, and the cursor-lock flag. Synthetic injection methods
//! exist so automation and tests can drive the HUD without a window.

use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Input state tracking for a single frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently pressed.
    keys_pressed: HashSet<KeyCode>,
    /// Keys pressed this frame (edge-triggered).
    keys_just_pressed: HashSet<KeyCode>,

    /// Mouse buttons currently pressed.
    mouse_buttons: HashSet<MouseButton>,
    /// Mouse buttons pressed this frame.
    mouse_just_pressed: HashSet<MouseButton>,

    /// Cursor position in window coordinates.
    pub cursor_position: (f32, f32),

    /// Mouse wheel delta accumulated this frame, in scroll lines.
    scroll: f32,

    /// Whether the cursor is locked (first-person look).
    pub cursor_locked: bool,
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a window event to update input state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(keycode),
                        state,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => {
                    if self.keys_pressed.insert(*keycode) {
                        self.keys_just_pressed.insert(*keycode);
                    }
                }
                ElementState::Released => {
                    self.keys_pressed.remove(keycode);
                }
            },
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => {
                    if self.mouse_buttons.insert(*button) {
                        self.mouse_just_pressed.insert(*button);
                    }
                }
                ElementState::Released => {
                    self.mouse_buttons.remove(button);
                }
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = (position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                use winit::event::MouseScrollDelta;
                self.scroll += match delta {
                    MouseScrollDelta::LineDelta(_x, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
            }
            _ => {}
        }
    }

    /// Reset per-frame state (call at the start of each frame).
    pub fn begin_frame(&mut self) {
        self.keys_just_pressed.clear();
        self.mouse_just_pressed.clear();
        self.scroll = 0.0;
    }

    /// Check if a key is currently pressed.
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key was just pressed this frame.
    pub fn key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    /// Check if a mouse button is currently pressed.
    pub fn mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }

    /// Check if a mouse button was just pressed this frame.
    pub fn mouse_button_just_pressed(&self, button: MouseButton) -> bool {
        self.mouse_just_pressed.contains(&button)
    }

    /// Scroll delta accumulated this frame, truncated to whole lines.
    pub fn scroll_lines(&self) -> i32 {
        self.scroll as i32
    }

    /// Toggle cursor lock.
    pub fn toggle_cursor_lock(&mut self) {
        self.cursor_locked = !self.cursor_locked;
    }

    /// Inject a key press without a window event (automation/tests).
    pub fn inject_key_press(&mut self, key: KeyCode) {
        if self.keys_pressed.insert(key) {
            self.keys_just_pressed.insert(key);
        }
    }

    /// Inject a key release without a window event.
    pub fn inject_key_release(&mut self, key: KeyCode) {
        self.keys_pressed.remove(&key);
    }

    /// Inject scroll lines without a window event.
    pub fn inject_scroll(&mut self, lines: f32) {
        self.scroll += lines;
    }

    /// Inject a cursor position without a window event.
    pub fn inject_cursor_position(&mut self, x: f32, y: f32) {
        self.cursor_position = (x, y);
    }
}
