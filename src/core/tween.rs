use super::constants::{DEFAULT_TWEEN_SEC, LINE_TWEEN_SEC};
use super::math;
use super::params::Uniform;
use super::scene::SceneValues;
use smallvec::SmallVec;

/// Easing curves used by the stage transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Cubic ease-out.
    Power2Out,
    /// Exponential ease-out, exactly 1 at the end.
    ExpoOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = math::clamp(0.0, 1.0, t);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Ease::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * t)
                }
            }
        }
    }
}

/// Timing of a single tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration: f32,
    pub ease: Ease,
    pub delay: f32,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: DEFAULT_TWEEN_SEC,
            ease: Ease::Power2Out,
            delay: 0.0,
        }
    }
}

impl Transition {
    /// Shorter transition used for the progress line.
    pub fn line() -> Self {
        Self::default().with_duration(LINE_TWEEN_SEC)
    }

    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn delayed(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }
}

/// An animatable output of the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    MeshRotationX,
    LineScale,
    Uniform(Uniform),
    CameraZ,
    RevealOffset(usize),
    RevealAlpha(usize),
}

impl Channel {
    pub fn read(self, scene: &SceneValues) -> f32 {
        match self {
            Channel::MeshRotationX => scene.rotation.x,
            Channel::LineScale => scene.line_scale,
            Channel::Uniform(u) => scene.uniform(u),
            Channel::CameraZ => scene.camera_z,
            Channel::RevealOffset(i) => scene.reveals.get(i).map_or(0.0, |r| r.offset_y),
            Channel::RevealAlpha(i) => scene.reveals.get(i).map_or(1.0, |r| r.alpha),
        }
    }

    pub fn write(self, scene: &mut SceneValues, value: f32) {
        match self {
            Channel::MeshRotationX => scene.rotation.x = value,
            Channel::LineScale => scene.line_scale = value,
            Channel::Uniform(u) => scene.set_uniform(u, value),
            Channel::CameraZ => scene.camera_z = value,
            Channel::RevealOffset(i) => {
                if let Some(r) = scene.reveals.get_mut(i) {
                    r.offset_y = value;
                }
            }
            Channel::RevealAlpha(i) => {
                if let Some(r) = scene.reveals.get_mut(i) {
                    r.alpha = value;
                }
            }
        }
    }
}

/// Receiver of scroll- and pointer-driven transitions.
pub trait AnimationSink {
    fn tween_to(&mut self, channel: Channel, value: f32, transition: Transition, start: f64);
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    channel: Channel,
    // `None` until the first sampled frame captures the current value.
    from: Option<f32>,
    to: f32,
    start: f64,
    transition: Transition,
    // Render `from` while still delayed.
    immediate: bool,
}

impl Tween {
    fn begins_at(&self) -> f64 {
        self.start + self.transition.delay as f64
    }

    fn progress(&self, now: f64) -> f32 {
        if self.transition.duration <= 0.0 {
            return 1.0;
        }
        let elapsed = (now - self.begins_at()) as f32;
        math::clamp(0.0, 1.0, elapsed / self.transition.duration)
    }
}

/// Set of running tweens, at most one per channel.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    tweens: SmallVec<[Tween; 24]>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tween `channel` from whatever value it holds when the tween begins to `to`.
    ///
    /// Replaces any tween already running on the same channel.
    pub fn to(&mut self, channel: Channel, to: f32, transition: Transition, start: f64) {
        self.insert(Tween {
            channel,
            from: None,
            to,
            start,
            transition,
            immediate: false,
        });
    }

    /// Tween `channel` between explicit values, writing `from` right away.
    pub fn from_to(
        &mut self,
        channel: Channel,
        from: f32,
        to: f32,
        transition: Transition,
        start: f64,
        scene: &mut SceneValues,
    ) {
        channel.write(scene, from);
        self.insert(Tween {
            channel,
            from: Some(from),
            to,
            start,
            transition,
            immediate: true,
        });
    }

    fn insert(&mut self, tween: Tween) {
        self.tweens.retain(|t| t.channel != tween.channel);
        self.tweens.push(tween);
    }

    /// Sample every tween at `now` and write the results into `scene`.
    ///
    /// Finished tweens write their exact end value once and are dropped.
    pub fn advance(&mut self, now: f64, scene: &mut SceneValues) {
        self.tweens.retain(|tween| {
            if now < tween.begins_at() {
                if tween.immediate {
                    if let Some(from) = tween.from {
                        tween.channel.write(scene, from);
                    }
                }
                return true;
            }
            let from = match tween.from {
                Some(from) => from,
                None => {
                    let current = tween.channel.read(scene);
                    tween.from = Some(current);
                    current
                }
            };
            let t = tween.progress(now);
            if t >= 1.0 {
                tween.channel.write(scene, tween.to);
                return false;
            }
            let value = math::lerp(from, tween.to, tween.transition.ease.apply(t));
            tween.channel.write(scene, value);
            true
        });
    }

    pub fn is_active(&self, channel: Channel) -> bool {
        self.tweens.iter().any(|t| t.channel == channel)
    }

    /// Value the running tween on `channel` is heading toward.
    pub fn target(&self, channel: Channel) -> Option<f32> {
        self.tweens
            .iter()
            .find(|t| t.channel == channel)
            .map(|t| t.to)
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

impl AnimationSink for Timeline {
    fn tween_to(&mut self, channel: Channel, value: f32, transition: Transition, start: f64) {
        self.to(channel, value, transition, start);
    }
}
