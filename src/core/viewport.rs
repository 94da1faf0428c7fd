use super::constants::MIN_VIEWPORT_PX;

/// Pixel and world-space extents of the visible area.
///
/// World extents are measured on the plane `z = 0`, seen from a camera at a
/// fixed distance. They are recomputed on every resize and never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMetrics {
    pub width: f32,
    pub height: f32,
    pub cx: f32,
    pub cy: f32,
    pub aspect: f32,
    pub world_width: f32,
    pub world_height: f32,
}

impl ViewportMetrics {
    /// Derive metrics from a window size, a vertical field of view (degrees)
    /// and the camera's distance from the scene.
    ///
    /// Zero or negative pixel sizes are clamped to one pixel so the aspect
    /// ratio stays finite.
    pub fn compute(width_px: f32, height_px: f32, fov_deg: f32, distance: f32) -> Self {
        let width = sanitize_px(width_px);
        let height = sanitize_px(height_px);
        let aspect = width / height;
        let (world_width, world_height) = world_size(fov_deg, distance, aspect);
        Self {
            width,
            height,
            cx: width / 2.0,
            cy: height / 2.0,
            aspect,
            world_width,
            world_height,
        }
    }
}

/// World-space `(width, height)` visible at `distance` for the given
/// vertical field of view and aspect ratio.
#[inline]
pub fn world_size(fov_deg: f32, distance: f32, aspect: f32) -> (f32, f32) {
    let v_fov = fov_deg.to_radians();
    let height = 2.0 * (v_fov / 2.0).tan() * distance.abs();
    (height * aspect, height)
}

#[inline]
fn sanitize_px(v: f32) -> f32 {
    if v.is_finite() {
        v.max(MIN_VIEWPORT_PX)
    } else {
        MIN_VIEWPORT_PX
    }
}
