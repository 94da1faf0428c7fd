use super::constants::*;
use super::tween::{Channel, Ease, Target, Tween};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Randomized parameters of one tile's part in the reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileMotion {
    pub delay: f32,
    pub rotation: Vec3,
}

/// Draws delay then x, y, z rotation targets, in that order.
pub fn sample_tile_motion<R: Rng + ?Sized>(rng: &mut R) -> TileMotion {
    let delay = rng.gen_range(0.0..TILE_DELAY_MAX);
    let rotation = Vec3::new(
        rng.gen_range(-PI..PI),
        rng.gen_range(-PI..PI),
        rng.gen_range(-PI..PI),
    );
    TileMotion { delay, rotation }
}

/// Sample motions for `count` tiles from a single RNG stream.
pub fn plan_tiles<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<TileMotion> {
    (0..count).map(|_| sample_tile_motion(rng)).collect()
}

/// Rotate, throw towards the camera, and fade out.
pub fn tile_tweens(index: usize, motion: &TileMotion) -> [Tween; 3] {
    let target = Target::Tile(index);
    let r = motion.rotation;
    let thrown = motion.delay + TILE_THROW_OFFSET;
    [
        Tween::new(
            target,
            [
                (Channel::RotationX, r.x),
                (Channel::RotationY, r.y),
                (Channel::RotationZ, r.z),
            ],
        )
        .delayed(motion.delay)
        .lasting(TILE_ROTATE_DURATION),
        Tween::new(target, [(Channel::PositionZ, TILE_THROW_Z)])
            .delayed(thrown)
            .lasting(TILE_THROW_DURATION)
            .eased(Ease::QuadOut),
        Tween::new(target, [(Channel::Opacity, 0.0)])
            .delayed(thrown)
            .lasting(TILE_FADE_DURATION),
    ]
}

/// Randomized parameters of one icon's flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconMotion {
    pub index: usize,
    pub delay: f32,
    pub destination: Vec3,
}

/// Icons fan out on a circle, one angular step per icon.
#[inline]
pub fn icon_destination(index: usize, count: usize) -> Vec3 {
    let step = TAU / count.max(1) as f32;
    let angle = step * index as f32;
    Vec3::new(
        angle.cos() * ICON_RADIUS,
        angle.sin() * ICON_RADIUS,
        ICON_TARGET_Z,
    )
}

pub fn sample_icon_motion<R: Rng + ?Sized>(index: usize, count: usize, rng: &mut R) -> IconMotion {
    IconMotion {
        index,
        delay: rng.gen_range(ICON_DELAY_MIN..ICON_DELAY_MAX),
        destination: icon_destination(index, count),
    }
}

/// Fly out while fading in, hold, then fade out.
pub fn icon_tweens(id: u32, motion: &IconMotion) -> [Tween; 3] {
    let target = Target::Icon(id);
    let d = motion.destination;
    let fade_out_at = motion.delay + ICON_FLY_DURATION + ICON_FADE_OUT_GAP;
    [
        Tween::new(
            target,
            [
                (Channel::PositionX, d.x),
                (Channel::PositionY, d.y),
                (Channel::PositionZ, d.z),
            ],
        )
        .delayed(motion.delay)
        .lasting(ICON_FLY_DURATION)
        .eased(Ease::QuadOut),
        Tween::new(target, [(Channel::Opacity, 1.0)])
            .delayed(motion.delay)
            .lasting(ICON_FLY_DURATION)
            .eased(Ease::QuadOut),
        Tween::new(target, [(Channel::Opacity, 0.0)])
            .delayed(fade_out_at)
            .lasting(ICON_FADE_OUT_DURATION)
            .eased(Ease::QuadOut),
    ]
}
