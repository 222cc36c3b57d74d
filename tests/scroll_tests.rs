// Host-side tests for the smooth scroll engine and its pure math.
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

use math::*;
use scroll::*;
use std::cell::Cell;

#[derive(Default)]
struct FakeSurface {
    scroll_y: Cell<f32>,
    content_height: Cell<f32>,
    body_height: Cell<Option<f32>>,
    offset: Cell<Option<f32>>,
}

impl ScrollSurface for FakeSurface {
    fn scroll_y(&self) -> f32 {
        self.scroll_y.get()
    }
    fn content_height(&self) -> f32 {
        self.content_height.get()
    }
    fn set_body_height(&self, px: f32) {
        self.body_height.set(Some(px));
    }
    fn set_content_offset(&self, px: f32) {
        self.offset.set(Some(px));
    }
}

fn engine_with_extent(content: f32, viewport: f32) -> SmoothScroll {
    let mut engine = SmoothScroll::new(ScrollSettings::default());
    engine.set_extent(content, viewport);
    engine
}

#[test]
fn clamp_is_idempotent() {
    let limit = 2000.0;
    for x in [-500.0, -0.5, 0.0, 1.0, 999.9, 2000.0, 2000.1, 1.0e6] {
        let once = clamp(0.0, limit, x);
        assert_eq!(clamp(0.0, limit, once), once, "x={x}");
        assert!((0.0..=limit).contains(&once));
    }
}

#[test]
fn clamp_with_degenerate_range_returns_min() {
    assert_eq!(clamp(0.0, 0.0, 42.0), 0.0);
    assert_eq!(clamp(0.0, -10.0, 42.0), 0.0);
}

#[test]
fn limit_is_content_minus_viewport_and_never_negative() {
    let surface = FakeSurface::default();
    surface.content_height.set(3000.0);
    let mut engine = SmoothScroll::new(ScrollSettings::default());
    engine.recompute_limits(&surface, &ViewportState::new(1600.0, 1000.0));
    assert_eq!(engine.state().height, 3000.0);
    assert_eq!(engine.state().limit, 2000.0);
    assert_eq!(surface.body_height.get(), Some(3000.0));

    surface.content_height.set(600.0);
    engine.recompute_limits(&surface, &ViewportState::new(1600.0, 1000.0));
    assert_eq!(engine.state().limit, 0.0);
    assert_eq!(surface.body_height.get(), Some(600.0));
}

#[test]
fn soft_approaches_hard_monotonically() {
    for ease in [0.01, 0.05, 0.3, 0.9] {
        let mut engine = SmoothScroll::new(ScrollSettings {
            ease,
            ..ScrollSettings::default()
        });
        engine.set_extent(3000.0, 1000.0);
        let mut prev_gap = f32::MAX;
        let mut steps = 0;
        loop {
            engine.step(1234.0);
            let gap = (engine.state().soft - engine.state().hard).abs();
            assert!(gap <= prev_gap, "ease={ease} gap grew {prev_gap} -> {gap}");
            prev_gap = gap;
            steps += 1;
            if gap < 0.01 {
                break;
            }
            assert!(steps < 10_000, "ease={ease} did not converge");
        }
    }
}

#[test]
fn soft_follows_scroll_back_to_zero_and_snaps() {
    let mut engine = engine_with_extent(3000.0, 1000.0);
    for _ in 0..200 {
        engine.step(800.0);
    }
    let mut steps = 0;
    while engine.state().soft != 0.0 {
        engine.step(0.0);
        steps += 1;
        assert!(steps < 10_000);
    }
    assert_eq!(engine.state().soft, 0.0);
}

#[test]
fn soft_below_epsilon_becomes_exactly_zero_next_update() {
    let mut engine = engine_with_extent(3000.0, 1000.0);
    engine.step(0.18); // 0.18 * 0.05 = 0.009
    assert_eq!(engine.state().soft, 0.0);
}

#[test]
fn update_translates_content_every_frame() {
    let surface = FakeSurface::default();
    surface.content_height.set(3000.0);
    surface.scroll_y.set(1000.0);
    let mut engine = SmoothScroll::new(ScrollSettings::default());
    engine.recompute_limits(&surface, &ViewportState::new(1200.0, 1000.0));

    let soft = engine.update(&surface);
    assert!((soft - 50.0).abs() < 1e-3);
    assert_eq!(surface.offset.get(), Some(soft));

    // Unchanged raw offset still moves the content closer
    let next = engine.update(&surface);
    assert!(next > soft);
    assert_eq!(surface.offset.get(), Some(next));
}

#[test]
fn hard_is_captured_and_normalized_at_half() {
    let mut engine = engine_with_extent(3000.0, 1000.0);
    engine.step(1000.0);
    assert_eq!(engine.state().limit, 2000.0);
    assert_eq!(engine.state().hard, 1000.0);
    assert_eq!(engine.normalize(), 0.5);
    assert_eq!(engine.state().normalized, 0.5);
}

#[test]
fn raw_offset_beyond_limit_clamps_to_limit() {
    let mut engine = engine_with_extent(3000.0, 1000.0);
    engine.step(5000.0);
    assert_eq!(engine.state().hard, 2000.0);
    assert_eq!(engine.normalize(), 1.0);
}

#[test]
fn negative_overscroll_clamps_to_zero() {
    let mut engine = engine_with_extent(3000.0, 1000.0);
    engine.step(-120.0);
    assert_eq!(engine.state().hard, 0.0);
    assert_eq!(engine.state().soft, 0.0);
}

#[test]
fn zero_limit_normalizes_to_zero() {
    let mut engine = engine_with_extent(800.0, 1000.0);
    engine.step(300.0);
    let n = engine.normalize();
    assert_eq!(n, 0.0);
    assert!(!n.is_nan());
    assert_eq!(normalize(0.0, 0.0, None), 0.0);
}

#[test]
fn normalized_stays_in_unit_range() {
    let limit = 1777.0;
    let mut h = 0.0;
    while h <= limit {
        let n = normalize(h, limit, Some(1));
        assert!((0.0..=1.0).contains(&n), "h={h} n={n}");
        let full = normalize(h, limit, None);
        assert!((0.0..=1.0).contains(&full));
        h += 13.0;
    }
}

#[test]
fn normalization_rounds_to_one_decimal_by_default() {
    assert_eq!(normalize(1234.0, 2000.0, Some(1)), 0.6);
    assert!((normalize(1234.0, 2000.0, None) - 0.617).abs() < 1e-6);
}

#[test]
fn pixel_ratio_is_capped() {
    assert_eq!(clamp_pixel_ratio(3.0, 1.5), 1.5);
    assert_eq!(clamp_pixel_ratio(1.0, 1.5), 1.0);
    assert_eq!(clamp_pixel_ratio(0.0, 1.5), 1.0);
    assert_eq!(clamp_pixel_ratio(f64::NAN, 1.5), 1.0);
}

#[test]
fn orientation_follows_viewport_aspect() {
    assert!(ViewportState::new(400.0, 800.0).is_portrait());
    assert!(!ViewportState::new(800.0, 800.0).is_portrait());
    assert!((ViewportState::new(1600.0, 800.0).aspect() - 2.0).abs() < 1e-6);
}
