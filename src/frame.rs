use crate::core::{start_loop as run_every_frame, Stage};
use crate::dom::{DomPage, RafScheduler};
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct FrameContext<'a> {
    pub stage: Rc<RefCell<Stage>>,
    pub page: Rc<DomPage>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    /// One heartbeat: idle spin, tweens, smooth scroll, then a single draw.
    pub fn frame(&mut self, now: f64) {
        self.stage.borrow_mut().frame(now, &*self.page);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let stage = self.stage.borrow();
            match g.render(&stage.scene, &stage.camera) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(scheduler: Rc<RafScheduler>, frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    run_every_frame(scheduler, move |now| frame_ctx.borrow_mut().frame(now));
}
