// Host-side tests for scroll-to-parameter mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod math {
    include!("../src/core/math.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}
mod params {
    include!("../src/core/params.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}
mod tween {
    include!("../src/core/tween.rs");
}

use params::*;
use scroll::ViewportState;
use std::collections::HashMap;
use tween::*;

/// Records every transition the mapper asks for.
#[derive(Default)]
struct SpySink {
    writes: Vec<(Channel, f32, Transition, f64)>,
}

impl SpySink {
    fn by_channel(&self) -> HashMap<Channel, f32> {
        self.writes.iter().map(|(c, v, _, _)| (*c, *v)).collect()
    }
}

impl AnimationSink for SpySink {
    fn tween_to(&mut self, channel: Channel, value: f32, transition: Transition, start: f64) {
        self.writes.push((channel, value, transition, start));
    }
}

fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-5, "{a} != {b}");
}

#[test]
fn static_ranges_are_never_written() {
    let settings = ParamSettings::default();
    for n in [0.0, 0.3, 1.0] {
        let mut spy = SpySink::default();
        map_scroll(&settings, n, 0.0, &mut spy);
        let written = spy.by_channel();
        assert!(!written.contains_key(&Channel::Uniform(Uniform::Amplitude)));
        assert!(!written.contains_key(&Channel::Uniform(Uniform::Density)));
    }
}

#[test]
fn mapping_hits_start_at_zero_and_end_at_one() {
    let settings = ParamSettings::default();

    let mut spy = SpySink::default();
    let started = map_scroll(&settings, 0.0, 0.0, &mut spy);
    // rotation + line + four moving uniforms
    assert_eq!(started, 6);
    let at_start = spy.by_channel();
    for uniform in Uniform::ALL {
        let range = settings.range(uniform);
        if let Some(v) = at_start.get(&Channel::Uniform(uniform)) {
            assert_eq!(*v, range.start, "{}", uniform.name());
        }
    }
    assert_eq!(at_start[&Channel::MeshRotationX], 0.0);
    assert_eq!(at_start[&Channel::LineScale], 0.0);

    let mut spy = SpySink::default();
    map_scroll(&settings, 1.0, 0.0, &mut spy);
    let at_end = spy.by_channel();
    for uniform in Uniform::ALL {
        let range = settings.range(uniform);
        if let Some(v) = at_end.get(&Channel::Uniform(uniform)) {
            assert_eq!(*v, range.end, "{}", uniform.name());
        }
    }
    assert_close(at_end[&Channel::MeshRotationX], std::f32::consts::PI);
    assert_eq!(at_end[&Channel::LineScale], 1.0);
}

#[test]
fn mapping_is_linear_between_bounds() {
    let mut settings = ParamSettings::default();
    settings.set_range(Uniform::Frequency, ParameterRange::new(0.0, 10.0));
    let mut spy = SpySink::default();
    map_scroll(&settings, 0.5, 2.0, &mut spy);
    let w = spy.by_channel();
    assert_close(w[&Channel::Uniform(Uniform::Frequency)], 5.0);
    assert_close(w[&Channel::LineScale], 0.5);
    assert_close(w[&Channel::MeshRotationX], 0.5 * std::f32::consts::PI);
    // decreasing range
    assert_close(w[&Channel::Uniform(Uniform::DeepPurple)], 0.5);
}

#[test]
fn mapper_uses_default_and_line_transitions() {
    let settings = ParamSettings::default();
    let mut spy = SpySink::default();
    map_scroll(&settings, 0.4, 3.25, &mut spy);
    for (channel, _, transition, start) in &spy.writes {
        assert_eq!(*start, 3.25);
        if *channel == Channel::LineScale {
            assert_eq!(*transition, Transition::line());
        } else {
            assert_eq!(*transition, Transition::default());
        }
    }
}

#[test]
fn every_range_static_writes_nothing() {
    let mut settings = ParamSettings::default();
    settings.rotation = ParameterRange::new(1.0, 1.0);
    settings.line = ParameterRange::new(0.5, 0.5);
    for uniform in Uniform::ALL {
        settings.set_range(uniform, ParameterRange::new(2.0, 2.0));
    }
    let mut spy = SpySink::default();
    assert_eq!(map_scroll(&settings, 0.7, 0.0, &mut spy), 0);
    assert!(spy.writes.is_empty());
}

#[test]
fn initial_uniforms_are_range_starts() {
    let settings = ParamSettings::default();
    let initial = settings.initial_uniforms();
    for uniform in Uniform::ALL {
        assert_eq!(initial[uniform.index()], settings.range(uniform).start);
    }
}

#[test]
fn uniform_names_match_shader_inputs() {
    let names: Vec<&str> = Uniform::ALL.iter().map(|u| u.name()).collect();
    assert_eq!(
        names,
        ["uFrequency", "uAmplitude", "uDensity", "uStrength", "uDeepPurple", "uOpacity"]
    );
}

#[test]
fn pointer_drive_rounds_and_scales() {
    let viewport = ViewportState::new(1000.0, 500.0);
    let (x, y) = pointer_drive(503.0, 124.0, &viewport);
    assert_close(x, 0.5 * 4.0);
    assert_close(y, 0.25 * 2.0);

    let mut spy = SpySink::default();
    map_pointer(x, y, 1.0, &mut spy);
    let w = spy.by_channel();
    assert_eq!(w.len(), 4);
    assert_close(w[&Channel::Uniform(Uniform::Frequency)], x);
    assert_close(w[&Channel::Uniform(Uniform::Amplitude)], x);
    assert_close(w[&Channel::Uniform(Uniform::Density)], y);
    assert_close(w[&Channel::Uniform(Uniform::Strength)], y);
}
