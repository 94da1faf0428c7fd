use super::camera::Camera;
use super::choreography::{icon_tweens, plan_tiles, sample_icon_motion, tile_tweens};
use super::constants::*;
use super::grid::{grid_dimensions, grid_positions};
use super::tween::{Animated, Channel, SceneObjects, Target, Timeline};
use super::viewport::ViewportMetrics;
use glam::{EulerRot, Mat4, Vec3};
use rand::Rng;

/// Fixed scene parameters read by initialization routines.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub tile_width: f32,
    pub tile_thickness: f32,
    pub tile_color: [f32; 3],
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub point_color: [f32; 3],
    pub point_intensity: f32,
    pub point_range: f32,
    pub point_position: Vec3,
    pub fov_deg: f32,
    pub camera_distance: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            tile_width: TILE_WIDTH,
            tile_thickness: TILE_THICKNESS,
            tile_color: rgb_from_hex(TILE_COLOR_HEX),
            ambient_color: rgb_from_hex(AMBIENT_COLOR_HEX),
            ambient_intensity: AMBIENT_INTENSITY,
            point_color: rgb_from_hex(POINT_COLOR_HEX),
            point_intensity: POINT_INTENSITY,
            point_range: POINT_RANGE,
            point_position: POINT_POSITION,
            fov_deg: CAMERA_FOV_DEG,
            camera_distance: CAMERA_Z,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

/// One grid cell of the background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    pub opacity: f32,
}

impl Tile {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            opacity: 1.0,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_translation(self.position) * Mat4::from_euler(EulerRot::XYZ, r.x, r.y, r.z)
    }
}

/// A logo plane that flies out during the reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconOverlay {
    pub id: u32,
    pub icon: usize,
    pub position: Vec3,
    pub opacity: f32,
    pub render_order: u32,
}

impl IconOverlay {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }
}

fn read_channel(position: Vec3, rotation: Vec3, opacity: f32, channel: Channel) -> f32 {
    match channel {
        Channel::PositionX => position.x,
        Channel::PositionY => position.y,
        Channel::PositionZ => position.z,
        Channel::RotationX => rotation.x,
        Channel::RotationY => rotation.y,
        Channel::RotationZ => rotation.z,
        Channel::Opacity => opacity,
    }
}

impl Animated for Tile {
    fn channel(&self, channel: Channel) -> f32 {
        read_channel(self.position, self.rotation, self.opacity, channel)
    }

    fn set_channel(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::PositionX => self.position.x = value,
            Channel::PositionY => self.position.y = value,
            Channel::PositionZ => self.position.z = value,
            Channel::RotationX => self.rotation.x = value,
            Channel::RotationY => self.rotation.y = value,
            Channel::RotationZ => self.rotation.z = value,
            Channel::Opacity => self.opacity = value.clamp(0.0, 1.0),
        }
    }
}

// Overlays are never rotated.
impl Animated for IconOverlay {
    fn channel(&self, channel: Channel) -> f32 {
        read_channel(self.position, Vec3::ZERO, self.opacity, channel)
    }

    fn set_channel(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::PositionX => self.position.x = value,
            Channel::PositionY => self.position.y = value,
            Channel::PositionZ => self.position.z = value,
            Channel::Opacity => self.opacity = value.clamp(0.0, 1.0),
            Channel::RotationX | Channel::RotationY | Channel::RotationZ => {}
        }
    }
}

struct Objects<'a> {
    tiles: &'a mut [Tile],
    icons: &'a mut [IconOverlay],
}

impl SceneObjects for Objects<'_> {
    fn object_mut(&mut self, target: Target) -> Option<&mut dyn Animated> {
        match target {
            Target::Tile(i) => self.tiles.get_mut(i).map(|t| t as &mut dyn Animated),
            Target::Icon(id) => self
                .icons
                .iter_mut()
                .find(|o| o.id == id)
                .map(|o| o as &mut dyn Animated),
        }
    }
}

/// Owns the reveal scene: camera, viewport, tiles, overlays and their tweens.
///
/// Typical usage:
/// - `AnimationDirector::new(config, w, h)` once at startup
/// - `resize(w, h)` on every window resize
/// - `init_scene(w, h, rng)` on page load (safe to call again)
/// - `spawn_icon(i, n, rng)` as each icon texture becomes available
/// - `advance(dt)` once per animation frame before drawing
pub struct AnimationDirector {
    config: SceneConfig,
    camera: Camera,
    viewport: ViewportMetrics,
    tiles: Vec<Tile>,
    icons: Vec<IconOverlay>,
    timeline: Timeline,
    grid: (usize, usize),
    next_icon_id: u32,
}

impl AnimationDirector {
    pub fn new(config: SceneConfig, width_px: f32, height_px: f32) -> Self {
        let viewport = ViewportMetrics::compute(
            width_px,
            height_px,
            config.fov_deg,
            config.camera_distance,
        );
        let camera = Camera::new(
            config.fov_deg,
            viewport.aspect,
            config.camera_distance,
            config.near,
            config.far,
        );
        Self {
            config,
            camera,
            viewport,
            tiles: Vec::new(),
            icons: Vec::new(),
            timeline: Timeline::new(),
            grid: (0, 0),
            next_icon_id: 0,
        }
    }

    /// Recompute viewport metrics and the camera aspect. The grid is left
    /// alone until the next `init_scene`.
    pub fn resize(&mut self, width_px: f32, height_px: f32) -> ViewportMetrics {
        self.viewport = ViewportMetrics::compute(
            width_px,
            height_px,
            self.config.fov_deg,
            self.config.camera_distance,
        );
        self.camera.set_aspect(self.viewport.aspect);
        self.viewport
    }

    /// Drop every tile, overlay and pending tween.
    pub fn reset(&mut self) {
        self.timeline.clear();
        self.tiles.clear();
        self.icons.clear();
        self.grid = (0, 0);
    }

    /// Fit to the given window size, rebuild the grid and start the reveal.
    /// Returns the number of tiles created.
    pub fn init_scene<R: Rng + ?Sized>(&mut self, width_px: f32, height_px: f32, rng: &mut R) -> usize {
        self.resize(width_px, height_px);
        self.reset();
        self.populate_grid();
        self.start_reveal(rng);
        log::info!(
            "[scene] grid {}x{} ({} tiles) world {:.1}x{:.1}",
            self.grid.0,
            self.grid.1,
            self.tiles.len(),
            self.viewport.world_width,
            self.viewport.world_height
        );
        self.tiles.len()
    }

    fn populate_grid(&mut self) {
        let (ww, wh, tw) = (
            self.viewport.world_width,
            self.viewport.world_height,
            self.config.tile_width,
        );
        self.grid = grid_dimensions(ww, wh, tw);
        self.tiles = grid_positions(ww, wh, tw).into_iter().map(Tile::at).collect();
    }

    /// Put every tile back at rest and schedule its rotate/throw/fade tweens.
    pub fn start_reveal<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let motions = plan_tiles(self.tiles.len(), rng);
        for (i, (tile, motion)) in self.tiles.iter_mut().zip(motions.iter()).enumerate() {
            tile.rotation = Vec3::ZERO;
            tile.opacity = 1.0;
            tile.position.z = 0.0;
            for tween in tile_tweens(i, motion) {
                self.timeline.schedule(tween);
            }
        }
    }

    /// Add the overlay for icon `index` of `count` and schedule its flight.
    pub fn spawn_icon<R: Rng + ?Sized>(&mut self, index: usize, count: usize, rng: &mut R) -> u32 {
        let id = self.next_icon_id;
        self.next_icon_id = self.next_icon_id.wrapping_add(1);
        self.icons.push(IconOverlay {
            id,
            icon: index,
            position: ICON_START,
            opacity: 0.0,
            render_order: ICON_RENDER_ORDER_BASE + index as u32,
        });
        let motion = sample_icon_motion(index, count, rng);
        for tween in icon_tweens(id, &motion) {
            self.timeline.schedule(tween);
        }
        log::debug!("[icons] icon {} scheduled after {:.2}s", index, motion.delay);
        id
    }

    /// Step the timeline; overlays with no tweens left are removed.
    pub fn advance(&mut self, dt_sec: f32) {
        let mut objects = Objects {
            tiles: &mut self.tiles,
            icons: &mut self.icons,
        };
        self.timeline.advance(dt_sec, &mut objects);
        let timeline = &self.timeline;
        self.icons
            .retain(|o| timeline.has_target(Target::Icon(o.id)));
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> ViewportMetrics {
        self.viewport
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tiles ordered farthest-first from the camera, for blended drawing.
    pub fn tiles_back_to_front(&self) -> Vec<&Tile> {
        let view = self.camera.view_matrix();
        let mut keyed: Vec<(f32, &Tile)> = self
            .tiles
            .iter()
            .map(|t| (view.transform_point3(t.position).z, t))
            .collect();
        // View space looks down -Z, so the most negative depth is farthest.
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        keyed.into_iter().map(|(_, t)| t).collect()
    }

    pub fn icons(&self) -> &[IconOverlay] {
        &self.icons
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn grid_size(&self) -> (usize, usize) {
        self.grid
    }

    /// True once no tween is pending or running.
    pub fn is_settled(&self) -> bool {
        self.timeline.is_idle()
    }
}
