//! Ambient world values surfaced by the debug overlay.

use serde::{Deserialize, Serialize};

/// World-level state the HUD reads and (for daytime) writes back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    /// Time of day as a fraction (0.0 = midnight, 0.5 = noon).
    pub daytime: f64,
    /// World generation seed.
    pub seed: u64,
}

impl WorldState {
    /// Create world state at the given daytime fraction.
    pub fn new(daytime: f64, seed: u64) -> Self {
        Self { daytime, seed }
    }

    /// Convert the daytime fraction into wall-clock hours and minutes.
    pub fn clock_time(&self) -> (u32, u32) {
        let day = self.daytime.rem_euclid(1.0);
        let total_minutes = (day * 24.0 * 60.0) as u32;
        (total_minutes / 60, total_minutes % 60)
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new(0.0, 0)
    }
}
