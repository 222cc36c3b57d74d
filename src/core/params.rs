use super::constants::{SCROLL_ROTATION_SPAN, SOUNDCHECK_X_SPAN, SOUNDCHECK_Y_SPAN};
use super::math;
use super::scroll::ViewportState;
use super::tween::{AnimationSink, Channel, Transition};

/// Named numeric inputs of the mesh shader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Uniform {
    Frequency,
    Amplitude,
    Density,
    Strength,
    DeepPurple,
    Opacity,
}

impl Uniform {
    pub const ALL: [Uniform; 6] = [
        Uniform::Frequency,
        Uniform::Amplitude,
        Uniform::Density,
        Uniform::Strength,
        Uniform::DeepPurple,
        Uniform::Opacity,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Uniform::Frequency => 0,
            Uniform::Amplitude => 1,
            Uniform::Density => 2,
            Uniform::Strength => 3,
            Uniform::DeepPurple => 4,
            Uniform::Opacity => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Uniform::Frequency => "uFrequency",
            Uniform::Amplitude => "uAmplitude",
            Uniform::Density => "uDensity",
            Uniform::Strength => "uStrength",
            Uniform::DeepPurple => "uDeepPurple",
            Uniform::Opacity => "uOpacity",
        }
    }
}

/// Start/end pair an output is interpolated between as the page scrolls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterRange {
    pub start: f32,
    pub end: f32,
}

impl ParameterRange {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Ranges that do not move are never written by the mapper.
    #[inline]
    pub fn is_static(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn at(&self, normalized: f32) -> f32 {
        math::map_range(self.start, self.end, normalized)
    }
}

/// Declared ranges for every scroll-driven output.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamSettings {
    pub rotation: ParameterRange,
    pub line: ParameterRange,
    pub uniforms: [ParameterRange; 6],
}

impl Default for ParamSettings {
    fn default() -> Self {
        Self {
            rotation: ParameterRange::new(0.0, SCROLL_ROTATION_SPAN),
            line: ParameterRange::new(0.0, 1.0),
            uniforms: [
                ParameterRange::new(0.0, 4.0),  // uFrequency
                ParameterRange::new(4.0, 4.0),  // uAmplitude
                ParameterRange::new(1.0, 1.0),  // uDensity
                ParameterRange::new(0.0, 1.1),  // uStrength
                ParameterRange::new(1.0, 0.0),  // uDeepPurple, max 1
                ParameterRange::new(0.1, 0.66), // uOpacity, max 1
            ],
        }
    }
}

impl ParamSettings {
    #[inline]
    pub fn range(&self, uniform: Uniform) -> ParameterRange {
        self.uniforms[uniform.index()]
    }

    pub fn set_range(&mut self, uniform: Uniform, range: ParameterRange) {
        self.uniforms[uniform.index()] = range;
    }

    /// Uniform values before any scroll has happened.
    pub fn initial_uniforms(&self) -> [f32; 6] {
        self.uniforms.map(|r| r.start)
    }
}

/// Emit transitions for every non-static range at the given normalized position.
///
/// Returns the number of transitions started.
pub fn map_scroll<S: AnimationSink + ?Sized>(
    settings: &ParamSettings,
    normalized: f32,
    now: f64,
    sink: &mut S,
) -> usize {
    let mut started = 0;
    if !settings.rotation.is_static() {
        sink.tween_to(
            Channel::MeshRotationX,
            settings.rotation.at(normalized),
            Transition::default(),
            now,
        );
        started += 1;
    }
    if !settings.line.is_static() {
        sink.tween_to(
            Channel::LineScale,
            settings.line.at(normalized),
            Transition::line(),
            now,
        );
        started += 1;
    }
    for uniform in Uniform::ALL {
        let range = settings.range(uniform);
        if range.is_static() {
            continue;
        }
        sink.tween_to(
            Channel::Uniform(uniform),
            range.at(normalized),
            Transition::default(),
            now,
        );
        started += 1;
    }
    started
}

/// Pointer position mapped to the soundcheck `(x, y)` drive values.
pub fn pointer_drive(client_x: f32, client_y: f32, viewport: &ViewportState) -> (f32, f32) {
    let ux = math::round_to(client_x / viewport.width.max(1.0), 2);
    let uy = math::round_to(client_y / viewport.height.max(1.0), 2);
    (ux * SOUNDCHECK_X_SPAN, uy * SOUNDCHECK_Y_SPAN)
}

/// Drive the vertex uniforms directly from the pointer.
pub fn map_pointer<S: AnimationSink + ?Sized>(x: f32, y: f32, now: f64, sink: &mut S) {
    for (uniform, value) in [
        (Uniform::Frequency, x),
        (Uniform::Amplitude, x),
        (Uniform::Density, y),
        (Uniform::Strength, y),
    ] {
        sink.tween_to(Channel::Uniform(uniform), value, Transition::default(), now);
    }
}
