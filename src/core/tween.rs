use smallvec::SmallVec;

/// Easing curve applied to a tween's normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic deceleration, `1 - (1 - t)^2`.
    #[default]
    QuadOut,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// A single animatable scalar on a scene object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    PositionX,
    PositionY,
    PositionZ,
    RotationX,
    RotationY,
    RotationZ,
    Opacity,
}

/// Objects the timeline can read and write channels on.
pub trait Animated {
    fn channel(&self, channel: Channel) -> f32;
    fn set_channel(&mut self, channel: Channel, value: f32);
}

/// Handle of the scene object a tween drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Tile(usize),
    Icon(u32),
}

/// Resolves tween targets to live objects. Returning `None` drops the tween.
pub trait SceneObjects {
    fn object_mut(&mut self, target: Target) -> Option<&mut dyn Animated>;
}

pub type Channels = SmallVec<[(Channel, f32); 3]>;

/// Interpolation of up to three channels of one object towards fixed values.
///
/// Start values are captured the first time the tween is applied at or after
/// its start time, so a tween picks up whatever earlier tweens left behind.
#[derive(Clone, Debug)]
pub struct Tween {
    pub target: Target,
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
    to: Channels,
    from: Channels,
    started: bool,
}

impl Tween {
    pub fn new(target: Target, to: impl IntoIterator<Item = (Channel, f32)>) -> Self {
        Self {
            target,
            start: 0.0,
            duration: 0.0,
            ease: Ease::default(),
            to: to.into_iter().collect(),
            from: Channels::new(),
            started: false,
        }
    }

    pub fn delayed(mut self, delay: f32) -> Self {
        self.start = delay.max(0.0);
        self
    }

    pub fn lasting(mut self, duration: f32) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    pub fn eased(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    pub fn targets(&self) -> &[(Channel, f32)] {
        &self.to
    }

    #[inline]
    fn progress(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            ((now - self.start) / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Writes the value for `now` onto `obj`; returns `false` once finished.
    fn apply(&mut self, now: f32, obj: &mut dyn Animated) -> bool {
        if !self.started {
            self.from = self.to.iter().map(|&(c, _)| (c, obj.channel(c))).collect();
            self.started = true;
        }
        let k = self.ease.apply(self.progress(now));
        for (&(c, a), &(_, b)) in self.from.iter().zip(self.to.iter()) {
            obj.set_channel(c, a + (b - a) * k);
        }
        now < self.end()
    }
}

/// Poll-driven tween scheduler.
///
/// Tweens are scheduled relative to the timeline clock; `advance` moves the
/// clock forward and applies every tween that has started. Finished tweens
/// and tweens whose target disappeared are dropped.
#[derive(Debug, Default)]
pub struct Timeline {
    now: f32,
    tweens: Vec<Tween>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> f32 {
        self.now
    }

    /// Queue `tween`, treating its `start` as a delay from the current clock.
    pub fn schedule(&mut self, mut tween: Tween) {
        tween.start += self.now;
        self.tweens.push(tween);
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn has_target(&self, target: Target) -> bool {
        self.tweens.iter().any(|t| t.target == target)
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    pub fn advance(&mut self, dt_sec: f32, scene: &mut dyn SceneObjects) {
        if dt_sec.is_finite() {
            self.now += dt_sec.max(0.0);
        }
        let now = self.now;
        self.tweens.retain_mut(|tween| {
            if now < tween.start {
                return true;
            }
            match scene.object_mut(tween.target) {
                Some(obj) => tween.apply(now, obj),
                None => false,
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe(f32);

    impl Animated for Probe {
        fn channel(&self, _: Channel) -> f32 {
            self.0
        }
        fn set_channel(&mut self, _: Channel, value: f32) {
            self.0 = value;
        }
    }

    struct One(Probe);

    impl SceneObjects for One {
        fn object_mut(&mut self, _: Target) -> Option<&mut dyn Animated> {
            Some(&mut self.0)
        }
    }

    #[test]
    fn linear_tween_hits_midpoint() {
        let mut scene = One(Probe(0.0));
        let mut tl = Timeline::new();
        tl.schedule(
            Tween::new(Target::Tile(0), [(Channel::Opacity, 10.0)])
                .lasting(2.0)
                .eased(Ease::Linear),
        );
        tl.advance(1.0, &mut scene);
        assert!((scene.0 .0 - 5.0).abs() < 1e-5);
        tl.advance(5.0, &mut scene);
        assert_eq!(scene.0 .0, 10.0);
        assert!(tl.is_idle());
    }
}
