use crate::core::math::clamp_pixel_ratio;
use crate::core::{Gateway, MAX_PIXEL_RATIO};
use crate::dom::{self, DomPage, RafScheduler};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct WindowWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub gateway: Rc<Gateway<RafScheduler>>,
    pub page: Rc<DomPage>,
    pub canvas: web::HtmlCanvasElement,
}

pub fn wire_window_handlers(w: WindowWiring) {
    wire_scroll(&w);
    wire_resize(&w);
    wire_load(&w);
}

/// Recompute viewport, scroll limits, mesh scale, camera and canvas size.
pub fn resize(w: &WindowWiring) {
    let viewport = dom::viewport(&w.window);
    w.gateway.on_resize(viewport, &*w.page);
    let ratio = clamp_pixel_ratio(w.window.device_pixel_ratio(), MAX_PIXEL_RATIO);
    dom::size_canvas(&w.canvas, &viewport, ratio);
    let limit = w.gateway.stage().borrow().scroll().limit;
    log::info!(
        "[resize] {}x{} dpr={:.2} limit={:.0}",
        viewport.width,
        viewport.height,
        ratio,
        limit
    );
}

fn wire_scroll(w: &WindowWiring) {
    let gateway = w.gateway.clone();
    let closure = Closure::wrap(Box::new(move || {
        gateway.on_scroll();
    }) as Box<dyn FnMut()>);
    _ = w
        .window
        .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_resize(w: &WindowWiring) {
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        resize(&wiring);
    }) as Box<dyn FnMut()>);
    _ = w
        .window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_load(w: &WindowWiring) {
    // The module may finish loading after the window `load` event has fired
    if w.document.ready_state() == "complete" {
        load(w);
        return;
    }
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        load(&wiring);
    }) as Box<dyn FnMut()>);
    _ = w
        .window
        .add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn load(w: &WindowWiring) {
    w.page.clear_loading();
    // Content height may change once fonts and images are in
    resize(w);
    if w.gateway.on_load() {
        log::info!("[load] intro started ({} elements)", w.page.reveal_count());
    }
}
