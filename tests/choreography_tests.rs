// Host-side tests for the tween timeline and the reveal schedule.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod tween {
    include!("../src/core/tween.rs");
}
mod choreography {
    include!("../src/core/choreography.rs");
}

use choreography::*;
use constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::PI;
use tween::*;

#[derive(Default)]
struct Dummy {
    values: [f32; 7],
}

fn slot(c: Channel) -> usize {
    match c {
        Channel::PositionX => 0,
        Channel::PositionY => 1,
        Channel::PositionZ => 2,
        Channel::RotationX => 3,
        Channel::RotationY => 4,
        Channel::RotationZ => 5,
        Channel::Opacity => 6,
    }
}

impl Animated for Dummy {
    fn channel(&self, c: Channel) -> f32 {
        self.values[slot(c)]
    }
    fn set_channel(&mut self, c: Channel, v: f32) {
        self.values[slot(c)] = v;
    }
}

struct Scene {
    tiles: Vec<Dummy>,
}

impl SceneObjects for Scene {
    fn object_mut(&mut self, target: Target) -> Option<&mut dyn Animated> {
        match target {
            Target::Tile(i) => self.tiles.get_mut(i).map(|d| d as &mut dyn Animated),
            Target::Icon(_) => None,
        }
    }
}

#[test]
fn quad_out_endpoints_and_shape() {
    assert_eq!(Ease::QuadOut.apply(0.0), 0.0);
    assert_eq!(Ease::QuadOut.apply(1.0), 1.0);
    assert_eq!(Ease::QuadOut.apply(0.5), 0.75);
    // Decelerating: ahead of linear everywhere inside (0, 1)
    for i in 1..10 {
        let t = i as f32 / 10.0;
        assert!(Ease::QuadOut.apply(t) > Ease::Linear.apply(t));
    }
    assert_eq!(Ease::QuadOut.apply(-3.0), 0.0);
    assert_eq!(Ease::QuadOut.apply(7.0), 1.0);
}

#[test]
fn tween_waits_for_its_delay() {
    let mut scene = Scene {
        tiles: vec![Dummy::default()],
    };
    let mut tl = Timeline::new();
    tl.schedule(
        Tween::new(Target::Tile(0), [(Channel::PositionZ, 80.0)])
            .delayed(1.0)
            .lasting(2.0),
    );
    tl.advance(0.9, &mut scene);
    assert_eq!(scene.tiles[0].channel(Channel::PositionZ), 0.0);
    tl.advance(1.1, &mut scene);
    let z = scene.tiles[0].channel(Channel::PositionZ);
    assert!((z - 60.0).abs() < 1e-3, "z = {z}");
    tl.advance(5.0, &mut scene);
    assert_eq!(scene.tiles[0].channel(Channel::PositionZ), 80.0);
    assert!(tl.is_idle());
}

#[test]
fn start_values_are_captured_when_tween_begins() {
    let mut scene = Scene {
        tiles: vec![Dummy::default()],
    };
    let mut tl = Timeline::new();
    tl.schedule(
        Tween::new(Target::Tile(0), [(Channel::Opacity, 1.0)])
            .lasting(1.0)
            .eased(Ease::Linear),
    );
    tl.schedule(
        Tween::new(Target::Tile(0), [(Channel::Opacity, 0.0)])
            .delayed(2.0)
            .lasting(1.0)
            .eased(Ease::Linear),
    );
    tl.advance(2.5, &mut scene);
    // Second tween starts from the 1.0 left by the first
    let o = scene.tiles[0].channel(Channel::Opacity);
    assert!((o - 0.5).abs() < 1e-5, "opacity = {o}");
}

#[test]
fn tweens_for_missing_targets_are_dropped() {
    let mut scene = Scene { tiles: vec![] };
    let mut tl = Timeline::new();
    tl.schedule(Tween::new(Target::Tile(3), [(Channel::Opacity, 0.0)]).lasting(1.0));
    tl.schedule(Tween::new(Target::Icon(0), [(Channel::Opacity, 0.0)]).lasting(1.0));
    tl.advance(0.1, &mut scene);
    assert!(tl.is_idle());
}

#[test]
fn schedule_is_relative_to_timeline_clock() {
    let mut scene = Scene {
        tiles: vec![Dummy::default()],
    };
    let mut tl = Timeline::new();
    tl.advance(10.0, &mut scene);
    tl.schedule(Tween::new(Target::Tile(0), [(Channel::Opacity, 1.0)]).delayed(0.5));
    assert_eq!(tl.tweens()[0].start, 10.5);
    assert!(tl.has_target(Target::Tile(0)));
    assert!(!tl.has_target(Target::Tile(1)));
}

#[test]
fn tile_plan_is_deterministic_under_seed() {
    let a = plan_tiles(200, &mut StdRng::seed_from_u64(42));
    let b = plan_tiles(200, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
    let c = plan_tiles(200, &mut StdRng::seed_from_u64(43));
    assert_ne!(a, c);
}

#[test]
fn tile_samples_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(9);
    let plan = plan_tiles(500, &mut rng);
    for m in &plan {
        assert!(m.delay >= 0.0 && m.delay < TILE_DELAY_MAX);
        for r in m.rotation.to_array() {
            assert!((-PI..PI).contains(&r), "rotation {r}");
        }
    }
    // Delays are staggered, not all zero
    let distinct = plan.iter().filter(|m| m.delay > 0.1).count();
    assert!(distinct > 0);
}

#[test]
fn tile_tweens_follow_the_choreography() {
    let motion = TileMotion {
        delay: 0.25,
        rotation: glam::Vec3::new(0.1, -0.2, 0.3),
    };
    let [rotate, throw, fade] = tile_tweens(7, &motion);
    assert_eq!(rotate.target, Target::Tile(7));
    assert_eq!(rotate.start, 0.25);
    assert_eq!(rotate.duration, TILE_ROTATE_DURATION);
    assert_eq!(
        rotate.targets(),
        &[
            (Channel::RotationX, 0.1),
            (Channel::RotationY, -0.2),
            (Channel::RotationZ, 0.3)
        ]
    );
    assert_eq!(throw.start, 0.75);
    assert_eq!(throw.targets(), &[(Channel::PositionZ, TILE_THROW_Z)]);
    assert_eq!(throw.ease, Ease::QuadOut);
    assert_eq!(fade.start, 0.75);
    assert_eq!(fade.targets(), &[(Channel::Opacity, 0.0)]);
}

#[test]
fn icons_fan_out_on_a_circle() {
    let first = icon_destination(0, 5);
    assert!((first.x - ICON_RADIUS).abs() < 1e-5);
    assert!(first.y.abs() < 1e-5);
    assert_eq!(first.z, ICON_TARGET_Z);
    for i in 0..5 {
        let d = icon_destination(i, 5);
        let r = (d.x * d.x + d.y * d.y).sqrt();
        assert!((r - ICON_RADIUS).abs() < 1e-4);
    }
    let second = icon_destination(1, 5);
    let angle = second.y.atan2(second.x);
    assert!((angle - 2.0 * PI / 5.0).abs() < 1e-5);
}

#[test]
fn icon_tweens_fade_in_hold_and_fade_out() {
    let mut rng = StdRng::seed_from_u64(1);
    let motion = sample_icon_motion(2, 5, &mut rng);
    assert!(motion.delay >= ICON_DELAY_MIN && motion.delay < ICON_DELAY_MAX);
    let [fly, fade_in, fade_out] = icon_tweens(11, &motion);
    assert_eq!(fly.target, Target::Icon(11));
    assert_eq!(fly.start, motion.delay);
    assert_eq!(fade_in.start, motion.delay);
    assert_eq!(fade_in.targets(), &[(Channel::Opacity, 1.0)]);
    assert!((fade_out.start - (fade_in.end() + ICON_FADE_OUT_GAP)).abs() < 1e-6);
    assert_eq!(fade_out.targets(), &[(Channel::Opacity, 0.0)]);
}
