use super::constants::{NORMALIZE_DECIMALS, SCROLL_EASE, SCROLL_SNAP_EPSILON};
use super::math;

/// Logical size of the window in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
}

impl ViewportState {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    pub fn is_portrait(&self) -> bool {
        self.width < self.height
    }
}

/// The part of the page the smooth scroll engine reads from and writes to.
pub trait ScrollSurface {
    /// Current native vertical scroll offset.
    fn scroll_y(&self) -> f32;
    /// Natural height of the scrollable content element.
    fn content_height(&self) -> f32;
    /// Size the document body so native scrollbars reflect the content extent.
    fn set_body_height(&self, px: f32);
    /// Translate the content element up by `px`.
    fn set_content_offset(&self, px: f32);
}

#[derive(Clone, Copy, Debug)]
pub struct ScrollSettings {
    pub ease: f32,
    pub snap_epsilon: f32,
    pub normalize_decimals: Option<u32>,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            ease: SCROLL_EASE,
            snap_epsilon: SCROLL_SNAP_EPSILON,
            normalize_decimals: NORMALIZE_DECIMALS,
        }
    }
}

/// Scroll bookkeeping shared by the engine and the parameter mapper.
///
/// - `height`: total scrollable content height
/// - `limit`: maximum meaningful raw offset, never negative
/// - `hard`: raw offset clamped to `[0, limit]`
/// - `soft`: smoothed offset trending toward `hard`, used for layout
/// - `normalized`: `hard / limit`, used for parameter mapping only
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub height: f32,
    pub limit: f32,
    pub hard: f32,
    pub soft: f32,
    pub normalized: f32,
}

/// Owns the scroll state and the raw → smoothed offset interpolation.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    settings: ScrollSettings,
    state: ScrollState,
}

impl SmoothScroll {
    pub fn new(settings: ScrollSettings) -> Self {
        Self {
            settings,
            state: ScrollState::default(),
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn settings(&self) -> &ScrollSettings {
        &self.settings
    }

    /// Re-read the content height and derive the scroll limit.
    ///
    /// Must run whenever the viewport or the content changes size.
    pub fn recompute_limits<S: ScrollSurface + ?Sized>(
        &mut self,
        surface: &S,
        viewport: &ViewportState,
    ) {
        self.set_extent(surface.content_height(), viewport.height);
        surface.set_body_height(self.state.height);
    }

    pub fn set_extent(&mut self, content_height: f32, viewport_height: f32) {
        let height = content_height.max(0.0);
        self.state.height = height;
        self.state.limit = (height - viewport_height).max(0.0);
    }

    /// Per-frame update: capture the raw offset, smooth it, and translate the content.
    pub fn update<S: ScrollSurface + ?Sized>(&mut self, surface: &S) -> f32 {
        let soft = self.step(surface.scroll_y());
        surface.set_content_offset(soft);
        soft
    }

    /// Advance the smoothing by one frame for a given raw offset.
    pub fn step(&mut self, raw: f32) -> f32 {
        let raw = if raw.is_finite() { raw } else { 0.0 };
        self.state.hard = math::clamp(0.0, self.state.limit, raw);
        let mut soft = math::lerp(self.state.soft, self.state.hard, self.settings.ease);
        if soft.abs() < self.settings.snap_epsilon {
            soft = 0.0;
        }
        self.state.soft = soft;
        soft
    }

    /// Recompute `normalized` from the latest captured `hard` offset.
    pub fn normalize(&mut self) -> f32 {
        self.state.normalized = math::normalize(
            self.state.hard,
            self.state.limit,
            self.settings.normalize_decimals,
        );
        self.state.normalized
    }
}
