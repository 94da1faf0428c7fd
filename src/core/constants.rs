use glam::Vec3;

// Scene geometry and lighting used by the reveal animation.

// Tiles
pub const TILE_WIDTH: f32 = 12.0; // edge length of each square tile (world units)
pub const TILE_THICKNESS: f32 = 3.0;
pub const TILE_COLOR_HEX: u32 = 0xa6_4a_44;

// Lights
pub const AMBIENT_COLOR_HEX: u32 = 0xff_ff_ff;
pub const AMBIENT_INTENSITY: f32 = 0.8;
pub const POINT_COLOR_HEX: u32 = 0xff_ff_ff;
pub const POINT_INTENSITY: f32 = 1.2;
pub const POINT_RANGE: f32 = 200.0; // light fades to zero at this distance
pub const POINT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 100.0);

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0; // vertical field of view
pub const CAMERA_Z: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Tile choreography (seconds / world units)
pub const TILE_DELAY_MAX: f32 = 1.0;
pub const TILE_ROTATE_DURATION: f32 = 2.0;
pub const TILE_THROW_OFFSET: f32 = 0.5; // throw and fade start this long after the rotation
pub const TILE_THROW_DURATION: f32 = 2.0;
pub const TILE_THROW_Z: f32 = 80.0;
pub const TILE_FADE_DURATION: f32 = 2.0;

// Icon overlays
pub const ICON_SIZE: f32 = 4.0;
pub const ICON_START: Vec3 = Vec3::new(0.0, 0.0, 10.0);
pub const ICON_RADIUS: f32 = 15.0;
pub const ICON_TARGET_Z: f32 = 50.0;
pub const ICON_DELAY_MIN: f32 = 0.5;
pub const ICON_DELAY_MAX: f32 = 1.0;
pub const ICON_FLY_DURATION: f32 = 2.0;
pub const ICON_FADE_OUT_GAP: f32 = 1.0; // hold at full opacity before fading out
pub const ICON_FADE_OUT_DURATION: f32 = 2.0;
pub const ICON_RENDER_ORDER_BASE: u32 = 999;
pub const ICON_EMISSIVE_HEX: u32 = 0x33_33_33;

// Viewport
pub const MIN_VIEWPORT_PX: f32 = 1.0;

/// Convert a packed `0xRRGGBB` color to linear-ish `[r, g, b]` in 0..1.
#[inline]
pub fn rgb_from_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
