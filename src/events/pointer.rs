use crate::core::Gateway;
use crate::dom::RafScheduler;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Map pointer movement onto the vertex uniforms for tuning by hand.
pub fn wire_soundcheck(window: &web::Window, gateway: Rc<Gateway<RafScheduler>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let (x, y) = gateway.on_pointer(ev.client_x() as f32, ev.client_y() as f32);
        log::info!("X: {x:.2}  |  Y: {y:.2}");
    }) as Box<dyn FnMut(web::MouseEvent)>);
    _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
