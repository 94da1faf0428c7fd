// Host-side tests for the animation director.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}
mod viewport {
    include!("../src/core/viewport.rs");
}
mod grid {
    include!("../src/core/grid.rs");
}
mod tween {
    include!("../src/core/tween.rs");
}
mod choreography {
    include!("../src/core/choreography.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use choreography::plan_tiles;
use constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::*;

fn director(w: f32, h: f32) -> AnimationDirector {
    AnimationDirector::new(SceneConfig::default(), w, h)
}

#[test]
fn init_fills_grid_and_schedules_three_tweens_per_tile() {
    let mut d = director(1920.0, 1080.0);
    let n = d.init_scene(1920.0, 1080.0, &mut StdRng::seed_from_u64(7));
    let (cols, rows) = d.grid_size();
    assert_eq!((cols, rows), (19, 11));
    assert_eq!(n, cols * rows);
    assert_eq!(d.tiles().len(), n);
    assert_eq!(d.timeline().len(), 3 * n);
    for t in d.tiles() {
        assert_eq!(t.opacity, 1.0);
        assert_eq!(t.position.z, 0.0);
        assert_eq!(t.rotation, glam::Vec3::ZERO);
    }
    assert!(!d.is_settled());
}

#[test]
fn tiles_end_thrown_faded_and_rotated_to_plan() {
    let mut d = director(800.0, 600.0);
    let n = d.init_scene(800.0, 600.0, &mut StdRng::seed_from_u64(3));
    let plan = plan_tiles(n, &mut StdRng::seed_from_u64(3));

    // Longest tile: 1s delay + 0.5s offset + 2s throw
    for _ in 0..40 {
        d.advance(0.1);
    }
    assert!(d.is_settled());
    for (tile, motion) in d.tiles().iter().zip(plan.iter()) {
        assert_eq!(tile.opacity, 0.0);
        assert!((tile.position.z - TILE_THROW_Z).abs() < 1e-4);
        assert!((tile.rotation - motion.rotation).abs().max_element() < 1e-4);
    }
}

#[test]
fn tiles_are_untouched_before_their_delay() {
    let mut d = director(800.0, 600.0);
    let n = d.init_scene(800.0, 600.0, &mut StdRng::seed_from_u64(11));
    let plan = plan_tiles(n, &mut StdRng::seed_from_u64(11));
    let min_delay = plan.iter().map(|m| m.delay).fold(f32::MAX, f32::min);
    d.advance(min_delay * 0.5);
    assert!(d.tiles().iter().all(|t| t.opacity == 1.0 && t.position.z == 0.0));
}

#[test]
fn icon_flies_out_holds_then_disappears() {
    let mut d = director(1024.0, 768.0);
    let mut rng = StdRng::seed_from_u64(5);
    let id = d.spawn_icon(0, 5, &mut rng);
    assert_eq!(d.icons().len(), 1);
    let icon = d.icons()[0];
    assert_eq!(icon.id, id);
    assert_eq!(icon.position, ICON_START);
    assert_eq!(icon.opacity, 0.0);
    assert_eq!(icon.render_order, ICON_RENDER_ORDER_BASE);

    // Delay is under 1s, so the fly-in has finished and the fade-out has not begun
    d.advance(3.0);
    let icon = d.icons()[0];
    assert_eq!(icon.opacity, 1.0);
    assert!((icon.position.x - ICON_RADIUS).abs() < 1e-4);
    assert!((icon.position.z - ICON_TARGET_Z).abs() < 1e-4);

    d.advance(10.0);
    assert!(d.icons().is_empty());
    assert!(d.is_settled());
}

#[test]
fn icons_get_distinct_ids_and_render_orders() {
    let mut d = director(1024.0, 768.0);
    let mut rng = StdRng::seed_from_u64(8);
    let a = d.spawn_icon(1, 5, &mut rng);
    let b = d.spawn_icon(3, 5, &mut rng);
    assert_ne!(a, b);
    let orders: Vec<u32> = d.icons().iter().map(|o| o.render_order).collect();
    assert_eq!(orders, vec![ICON_RENDER_ORDER_BASE + 1, ICON_RENDER_ORDER_BASE + 3]);
}

#[test]
fn resize_updates_camera_without_rebuilding_grid() {
    let mut d = director(1920.0, 1080.0);
    let n = d.init_scene(1920.0, 1080.0, &mut StdRng::seed_from_u64(1));
    let m = d.resize(640.0, 480.0);
    assert_eq!(m.width, 640.0);
    assert!((d.camera().aspect - 640.0 / 480.0).abs() < 1e-6);
    assert_eq!(d.tiles().len(), n);
    assert_eq!(d.grid_size(), (19, 11));
}

#[test]
fn reinit_replaces_the_previous_scene() {
    let mut d = director(1920.0, 1080.0);
    let mut rng = StdRng::seed_from_u64(2);
    d.init_scene(1920.0, 1080.0, &mut rng);
    d.spawn_icon(0, 5, &mut rng);
    d.advance(0.5);
    let n = d.init_scene(640.0, 480.0, &mut rng);
    assert_eq!(d.tiles().len(), n);
    assert_eq!(d.timeline().len(), 3 * n);
    assert!(d.icons().is_empty());
    assert!(d.tiles().iter().all(|t| t.opacity == 1.0));
}

#[test]
fn degenerate_window_still_yields_a_finite_scene() {
    let mut d = director(0.0, 0.0);
    let n = d.init_scene(0.0, f32::NAN, &mut StdRng::seed_from_u64(4));
    assert!(n >= 1);
    assert_eq!(d.viewport().aspect, 1.0);
    assert!(d.camera().view_projection().is_finite());
}

#[test]
fn tile_model_matrix_places_tile_at_its_position() {
    let mut t = Tile::at(glam::Vec3::new(12.0, -6.0, 0.0));
    t.position.z = 40.0;
    let p = t.model_matrix().transform_point3(glam::Vec3::ZERO);
    assert!((p - glam::Vec3::new(12.0, -6.0, 40.0)).length() < 1e-5);
}

#[test]
fn default_config_matches_scene_constants() {
    let c = SceneConfig::default();
    assert_eq!(c.tile_width, TILE_WIDTH);
    assert_eq!(c.camera_distance, CAMERA_Z);
    assert_eq!(c.tile_color, rgb_from_hex(0xa64a44));
}

#[test]
fn tiles_are_ordered_farthest_first_for_blending() {
    let mut d = director(1280.0, 720.0);
    let n = d.init_scene(1280.0, 720.0, &mut StdRng::seed_from_u64(21));
    // Mid-reveal: some tiles thrown towards the camera, others still at rest
    d.advance(1.2);
    let ordered = d.tiles_back_to_front();
    assert_eq!(ordered.len(), n);
    assert!(ordered.windows(2).all(|w| w[0].position.z <= w[1].position.z));
    assert!(ordered.first().unwrap().position.z < ordered.last().unwrap().position.z);
}
