//! Contracts toward the external rendering backend: the orthographic UI
//! camera, the 2D batch, the UI shader, and renderer statistics surfaced by
//! the debug overlay.

use glam::{Mat4, Vec4};

/// Window viewport in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Aspect ratio (width over height).
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Orthographic camera for UI space, sized to the viewport height with a
/// flipped (top-left origin) y axis.
#[derive(Debug, Clone, Copy)]
pub struct UiCamera {
    /// Vertical extent of the projection in UI pixels.
    pub fov: f32,
    /// Whether the y axis points down (UI convention).
    pub flipped: bool,
}

impl UiCamera {
    /// Create a UI camera.
    pub fn new() -> Self {
        Self {
            fov: 1.0,
            flipped: true,
        }
    }

    /// Resize the vertical extent (viewport height).
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov.max(1.0);
    }

    /// Projection-view matrix for the given viewport.
    pub fn proj_view(&self, viewport: Viewport) -> Mat4 {
        let height = self.fov;
        let width = height * viewport.aspect();
        if self.flipped {
            Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0)
        } else {
            Mat4::orthographic_rh(0.0, width, 0.0, height, -1.0, 1.0)
        }
    }
}

impl Default for UiCamera {
    fn default() -> Self {
        Self::new()
    }
}

/// 2D line/sprite batch owned by the render backend.
pub trait Batch2D {
    /// Start a new batch.
    fn begin(&mut self);

    /// Set the line width for subsequent lines.
    fn line_width(&mut self, width: f32);

    /// Queue a line segment with an RGBA color.
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Vec4);

    /// Submit everything queued since `begin`.
    fn flush(&mut self);
}

/// The UI shader owned by the render backend.
pub trait UiShader {
    /// Activate the shader with a projection-view matrix.
    fn bind(&mut self, proj_view: &Mat4);
}

/// Per-frame drawing context handed to the HUD by the renderer.
pub struct GfxContext<'a> {
    /// Current window viewport.
    pub viewport: Viewport,
    /// 2D batch to queue into.
    pub batch: &'a mut dyn Batch2D,
    /// UI shader to activate.
    pub shader: &'a mut dyn UiShader,
}

/// Renderer statistics displayed on the debug overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Live mesh count.
    pub meshes: usize,
    /// Chunks currently loaded.
    pub chunks_total: usize,
    /// Chunks that passed frustum culling this frame.
    pub chunks_visible: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn flipped_camera_maps_top_left_to_ndc_corner() {
        let mut camera = UiCamera::new();
        camera.set_fov(600.0);
        let proj = camera.proj_view(Viewport::new(800, 600));

        // Top-left UI corner lands at NDC (-1, 1).
        let corner = proj.project_point3(Vec3::new(0.0, 0.0, 0.0));
        assert!((corner.x + 1.0).abs() < 1e-5);
        assert!((corner.y - 1.0).abs() < 1e-5);

        // Bottom-right UI corner lands at NDC (1, -1).
        let corner = proj.project_point3(Vec3::new(800.0, 600.0, 0.0));
        assert!((corner.x - 1.0).abs() < 1e-5);
        assert!((corner.y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn fov_never_collapses() {
        let mut camera = UiCamera::new();
        camera.set_fov(0.0);
        assert_eq!(camera.fov, 1.0);
    }
}
