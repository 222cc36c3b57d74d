#![cfg(target_arch = "wasm32")]
use crate::core::{Gateway, ParamSettings, ScrollSettings, Stage};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-stage starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let page = Rc::new(dom::DomPage::from_document(&window, &document)?);
    let canvas = dom::attach_canvas(&document)?;

    // One shared context for every component; the scheduler's clock is the page clock
    let scheduler = Rc::new(dom::RafScheduler::new(window.clone()));
    let stage = Rc::new(RefCell::new(Stage::new(
        dom::viewport(&window),
        ParamSettings::default(),
        ScrollSettings::default(),
        page.reveal_count(),
    )));
    let gateway = Rc::new(Gateway::new(stage.clone(), scheduler.clone()));

    let wiring = events::WindowWiring {
        window: window.clone(),
        document: document.clone(),
        gateway: gateway.clone(),
        page: page.clone(),
        canvas: canvas.clone(),
    };
    // Size everything before the surface is created
    events::resize(&wiring);
    events::wire_window_handlers(wiring);
    if dom::soundcheck_enabled(&window) {
        log::info!("[soundcheck] pointer drives uFrequency/uAmplitude/uDensity/uStrength");
        events::wire_soundcheck(&window, gateway.clone());
    }

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        stage,
        page,
        canvas,
        gpu,
    }));
    // Start RAF loop
    frame::start_loop(scheduler, frame_ctx);
    log::info!("scroll-stage ready");

    Ok(())
}
