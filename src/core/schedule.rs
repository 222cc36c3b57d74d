use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Work queued for the next frame; receives the frame time in seconds since start.
pub type FrameTask = Box<dyn FnOnce(f64)>;

/// Source of display frames.
///
/// The browser implementation forwards to `requestAnimationFrame`; tests use
/// [`VirtualScheduler`] to step frames deterministically.
pub trait FrameScheduler {
    fn request_frame(&self, task: FrameTask);
    /// Monotonic seconds since the scheduler was created.
    fn now(&self) -> f64;
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for Rc<T> {
    fn request_frame(&self, task: FrameTask) {
        (**self).request_frame(task)
    }

    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Deterministic scheduler driven by a virtual clock.
#[derive(Default)]
pub struct VirtualScheduler {
    now: Cell<f64>,
    frames: Cell<u64>,
    queue: RefCell<Vec<FrameTask>>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn frames(&self) -> u64 {
        self.frames.get()
    }

    /// Move the clock forward by `dt` seconds and fire one frame.
    ///
    /// Only tasks queued before the call run; anything they request lands on
    /// the following frame. Returns the number of tasks that ran.
    pub fn advance(&self, dt: f64) -> usize {
        let now = self.now.get() + dt;
        self.now.set(now);
        self.frames.set(self.frames.get() + 1);
        let tasks = std::mem::take(&mut *self.queue.borrow_mut());
        let ran = tasks.len();
        for task in tasks {
            task(now);
        }
        ran
    }
}

impl FrameScheduler for VirtualScheduler {
    fn request_frame(&self, task: FrameTask) {
        self.queue.borrow_mut().push(task);
    }

    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Single-slot frame debouncer: holds at most one pending task.
///
/// Requests made while a task is outstanding are dropped. The slot is
/// released right before the task runs, so work triggered from inside the
/// task schedules a fresh frame.
#[derive(Clone, Debug, Default)]
pub struct FrameDebouncer {
    pending: Rc<Cell<bool>>,
}

impl FrameDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Queue `task` unless one is already waiting. Returns whether it was queued.
    pub fn schedule<S, F>(&self, scheduler: &S, task: F) -> bool
    where
        S: FrameScheduler + ?Sized,
        F: FnOnce(f64) + 'static,
    {
        if self.pending.get() {
            return false;
        }
        self.pending.set(true);
        let pending = self.pending.clone();
        scheduler.request_frame(Box::new(move |now| {
            pending.set(false);
            task(now);
        }));
        true
    }
}

/// Run `body` once per frame for as long as the scheduler keeps firing.
///
/// Each invocation re-submits the loop before returning control, so there is
/// always exactly one frame outstanding.
pub fn start_loop<S, F>(scheduler: Rc<S>, body: F)
where
    S: FrameScheduler + ?Sized + 'static,
    F: FnMut(f64) + 'static,
{
    let body: Rc<RefCell<dyn FnMut(f64)>> = Rc::new(RefCell::new(body));
    submit(scheduler, body);
}

fn submit<S>(scheduler: Rc<S>, body: Rc<RefCell<dyn FnMut(f64)>>)
where
    S: FrameScheduler + ?Sized + 'static,
{
    let next = scheduler.clone();
    scheduler.request_frame(Box::new(move |now| {
        (body.borrow_mut())(now);
        submit(next, body);
    }));
}
