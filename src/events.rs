//! DOM event wiring: wheel scrolling, window resize, mute button.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::AudioDirector;
use crate::core::constants::WHEEL_DELTA_SCALE;
use crate::core::CameraProgression;
use crate::dom;

/// Wheel input drives travel along the tunnel.
pub fn wire_wheel(window: &web::Window, camera: Rc<RefCell<CameraProgression>>) {
    let closure = Closure::wrap(Box::new(move |event: web::WheelEvent| {
        let delta = event.delta_y() as f32 * WHEEL_DELTA_SCALE;
        camera.borrow_mut().on_scroll(delta, js_sys::Date::now());
    }) as Box<dyn FnMut(web::WheelEvent)>);
    let _ = window.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Window resizes retarget the canvas backing store; the render surface
/// follows on the next frame.
pub fn wire_resize(window: &web::Window, canvas: web::HtmlCanvasElement) {
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_mute_button(document: &web::Document, audio: Rc<RefCell<AudioDirector>>) {
    dom::add_click_listener(document, "mute-btn", move || {
        AudioDirector::handle_toggle(audio.clone());
    });
}
