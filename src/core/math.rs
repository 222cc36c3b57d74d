// Pure interpolation helpers used by the scroll engine and parameter mapper.

/// Clamp `value` into `[min, max]`.
///
/// Unlike `f32::clamp` this never panics: when `max < min` the result is `min`,
/// which keeps a degenerate scroll limit from poisoning later frames.
#[inline]
pub fn clamp(min: f32, max: f32, value: f32) -> f32 {
    value.min(max).max(min)
}

/// Move `from` toward `to` by the fraction `t`.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Map a normalized position onto the `[start, end]` range.
///
/// Weighted form so that `t = 0` and `t = 1` return `start` and `end` exactly.
#[inline]
pub fn map_range(start: f32, end: f32, t: f32) -> f32 {
    start * (1.0 - t) + end * t
}

/// Round to a fixed number of decimal places.
#[inline]
pub fn round_to(value: f32, decimals: u32) -> f32 {
    let factor = 10f32.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Normalize a raw scroll offset against the scroll limit.
///
/// Returns 0 when the content fits the viewport (`limit <= 0`) so that no
/// non-finite value ever reaches an animated output.
pub fn normalize(hard: f32, limit: f32, decimals: Option<u32>) -> f32 {
    if !limit.is_finite() || limit <= 0.0 || !hard.is_finite() {
        return 0.0;
    }
    let n = clamp(0.0, 1.0, hard / limit);
    match decimals {
        Some(d) => round_to(n, d),
        None => n,
    }
}

/// Bound the device pixel ratio used for the rendering surface.
#[inline]
pub fn clamp_pixel_ratio(device_pixel_ratio: f64, max: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(max)
    } else {
        1.0
    }
}
