use super::camera::Camera;
use super::constants::{IDLE_SPIN_PER_SEC, LANDSCAPE_SCALE, PORTRAIT_SCALE};
use super::intro;
use super::params::{self, ParamSettings};
use super::scene::{Reveal, SceneValues};
use super::schedule::{FrameDebouncer, FrameScheduler};
use super::scroll::{ScrollSettings, ScrollState, ScrollSurface, SmoothScroll, ViewportState};
use super::tween::Timeline;
use std::cell::RefCell;
use std::rc::Rc;

/// Page collaborator: the scroll surface plus the DOM outputs the stage drives.
pub trait Page: ScrollSurface {
    /// Horizontal scale of the progress line, anchored at its left edge.
    fn set_line_scale(&self, scale: f32);
    /// Position and opacity of intro element `index`.
    fn set_reveal(&self, index: usize, reveal: Reveal);
}

/// Mesh scale for the current orientation.
#[inline]
pub fn orientation_scale(viewport: &ViewportState) -> f32 {
    if viewport.is_portrait() {
        PORTRAIT_SCALE
    } else {
        LANDSCAPE_SCALE
    }
}

/// Context object holding all cross-component state of the page.
///
/// Field ownership: the scroll engine writes `hard`/`soft`, the parameter
/// mapper writes `normalized` and starts tweens, resize writes the viewport.
pub struct Stage {
    pub viewport: ViewportState,
    pub camera: Camera,
    pub scene: SceneValues,
    pub settings: ParamSettings,
    scroll: SmoothScroll,
    timeline: Timeline,
    loaded: bool,
    // Last values written to the page; seeded from the scene so only
    // animated changes reach it.
    applied_line: f32,
    applied_reveals: Vec<Reveal>,
}

impl Stage {
    pub fn new(
        viewport: ViewportState,
        settings: ParamSettings,
        scroll_settings: ScrollSettings,
        reveal_count: usize,
    ) -> Self {
        let scene = SceneValues::new(&settings, reveal_count);
        let applied_line = scene.line_scale;
        let applied_reveals = scene.reveals.clone();
        Self {
            viewport,
            camera: Camera::new(viewport.aspect()),
            scene,
            settings,
            scroll: SmoothScroll::new(scroll_settings),
            timeline: Timeline::new(),
            loaded: false,
            applied_line,
            applied_reveals,
        }
    }

    pub fn scroll(&self) -> &ScrollState {
        self.scroll.state()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Adopt a new viewport: scroll limits, orientation scale, camera aspect.
    pub fn resize<P: Page + ?Sized>(&mut self, viewport: ViewportState, page: &P) {
        self.viewport = viewport;
        self.scroll.recompute_limits(page, &self.viewport);
        self.scene.scale = orientation_scale(&self.viewport);
        self.camera.aspect = self.viewport.aspect();
    }

    /// Parameter mapper pass: normalize the latest raw offset and retarget
    /// every scroll-driven output. Returns the normalized position.
    pub fn map_scroll(&mut self, now: f64) -> f32 {
        let normalized = self.scroll.normalize();
        params::map_scroll(&self.settings, normalized, now, &mut self.timeline);
        normalized
    }

    /// Start the intro timeline. Only the first call has an effect.
    pub fn load(&mut self, now: f64) -> bool {
        if self.loaded {
            return false;
        }
        self.loaded = true;
        intro::play(&mut self.timeline, &mut self.scene, now);
        true
    }

    /// Soundcheck: drive the vertex uniforms from the pointer position.
    pub fn pointer(&mut self, client_x: f32, client_y: f32, now: f64) -> (f32, f32) {
        let (x, y) = params::pointer_drive(client_x, client_y, &self.viewport);
        params::map_pointer(x, y, now, &mut self.timeline);
        (x, y)
    }

    /// Per-frame body of the render loop, everything except the GPU draw.
    ///
    /// `now` is the monotonic time in seconds since start.
    pub fn frame<P: Page + ?Sized>(&mut self, now: f64, page: &P) {
        self.timeline.advance(now, &mut self.scene);
        self.scene.rotation.y = now as f32 * IDLE_SPIN_PER_SEC;
        self.scroll.update(page);
        self.camera.set_distance(self.scene.camera_z);
        self.flush(page);
    }

    fn flush<P: Page + ?Sized>(&mut self, page: &P) {
        if self.applied_line != self.scene.line_scale {
            page.set_line_scale(self.scene.line_scale);
            self.applied_line = self.scene.line_scale;
        }
        for (index, reveal) in self.scene.reveals.iter().enumerate() {
            let applied = &mut self.applied_reveals[index];
            if *applied != *reveal {
                page.set_reveal(index, *reveal);
                *applied = *reveal;
            }
        }
    }
}

/// Event gateway: translates load/scroll/resize/pointer triggers into stage calls.
pub struct Gateway<S: FrameScheduler + ?Sized> {
    stage: Rc<RefCell<Stage>>,
    scheduler: Rc<S>,
    debouncer: FrameDebouncer,
}

impl<S: FrameScheduler + ?Sized + 'static> Gateway<S> {
    pub fn new(stage: Rc<RefCell<Stage>>, scheduler: Rc<S>) -> Self {
        Self {
            stage,
            scheduler,
            debouncer: FrameDebouncer::new(),
        }
    }

    pub fn stage(&self) -> &Rc<RefCell<Stage>> {
        &self.stage
    }

    /// True while a parameter mapper pass is waiting for its frame.
    pub fn is_scroll_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Coalesce scroll events into at most one mapper pass per frame.
    pub fn on_scroll(&self) -> bool {
        let stage = self.stage.clone();
        self.debouncer.schedule(&*self.scheduler, move |now| {
            stage.borrow_mut().map_scroll(now);
        })
    }

    pub fn on_resize<P: Page + ?Sized>(&self, viewport: ViewportState, page: &P) {
        self.stage.borrow_mut().resize(viewport, page);
    }

    pub fn on_load(&self) -> bool {
        let now = self.scheduler.now();
        self.stage.borrow_mut().load(now)
    }

    pub fn on_pointer(&self, client_x: f32, client_y: f32) -> (f32, f32) {
        let now = self.scheduler.now();
        self.stage.borrow_mut().pointer(client_x, client_y, now)
    }
}
