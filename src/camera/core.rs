use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Narrowest zoomed field of view in degrees.
pub const MIN_FOVY: f32 = 1.0;
/// Widest zoomed field of view in degrees.
pub const MAX_FOVY: f32 = 90.0;

/// Projection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// Perspective frustum from `fovy` and the viewport aspect ratio.
    #[default]
    Perspective,
    /// Orthographic box sized from the viewport dimensions.
    Orthographic,
}

/// Projection parameters for the flight camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Active projection mode.
    pub projection: Projection,
    /// Divisor applied to the viewport size for the orthographic extents.
    pub ortho_scale_divisor: f32,
}

impl Camera {
    /// Build camera projection parameters for a `width` x `height` viewport.
    #[must_use]
    pub fn new(options: &CameraOptions, width: u32, height: u32) -> Self {
        Self {
            fovy: options.fovy.clamp(MIN_FOVY, MAX_FOVY),
            znear: options.znear,
            zfar: options.zfar,
            width: width.max(1),
            height: height.max(1),
            projection: Projection::Perspective,
            ortho_scale_divisor: options.ortho_scale_divisor,
        }
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Build the projection matrix for the active mode.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        match self.projection {
            // perspective_rh uses [0,1] depth range (wgpu/Vulkan convention)
            Projection::Perspective => Mat4::perspective_rh(
                self.fovy.to_radians(),
                self.aspect(),
                self.znear,
                self.zfar,
            ),
            Projection::Orthographic => {
                let half_w = self.width as f32 / self.ortho_scale_divisor;
                let half_h = self.height as f32 / self.ortho_scale_divisor;
                Mat4::orthographic_rh(
                    -half_w, half_w, -half_h, half_h, -self.zfar, self.zfar,
                )
            }
        }
    }

    /// Narrow (positive `delta`) or widen the field of view, clamped to
    /// [`MIN_FOVY`]..=[`MAX_FOVY`]. A non-finite `delta` leaves the field of
    /// view unchanged.
    pub fn zoom(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        self.fovy = (self.fovy - delta).clamp(MIN_FOVY, MAX_FOVY);
    }

    /// Swap between perspective and orthographic projection.
    pub fn toggle_projection(&mut self) {
        self.projection = match self.projection {
            Projection::Perspective => Projection::Orthographic,
            Projection::Orthographic => Projection::Perspective,
        };
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 16.0 / 9.0,
            forward: [0.0, 0.0, -1.0],
            fovy: 45.0,
        }
    }

    /// Update uniform fields from a view matrix and camera parameters.
    pub fn update(
        &mut self,
        camera: &Camera,
        view: Mat4,
        position: Vec3,
        forward: Vec3,
    ) {
        self.view_proj = (camera.build_projection() * view).to_cols_array_2d();
        self.position = position.to_array();
        self.aspect = camera.aspect();
        self.forward = forward.to_array();
        self.fovy = camera.fovy;
    }
}
