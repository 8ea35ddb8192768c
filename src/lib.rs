#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

use crate::core::constants::{
    NEON_TEXTURE_COUNT, PATH_CONTROL_POINTS, PATH_RADIUS, TUNNEL_RADIUS,
};
use crate::core::{CameraProgression, ClosedCurve, SceneAnimationState};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tunnelviz starting");

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

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);
    events::wire_resize(&window, canvas.clone());

    let curve = Rc::new(ClosedCurve::tunnel_path(PATH_CONTROL_POINTS, PATH_RADIUS));
    let mut rng = StdRng::from_entropy();
    let scene = SceneAnimationState::build(&curve, TUNNEL_RADIUS, NEON_TEXTURE_COUNT, &mut rng);

    let camera = Rc::new(RefCell::new(CameraProgression::new()));
    events::wire_wheel(&window, camera.clone());

    let audio = audio::AudioDirector::new(&document);
    if let Some(a) = &audio {
        audio::AudioDirector::init(a.clone());
        events::wire_mute_button(&document, a.clone());
    }

    // leak a canvas clone to satisfy the 'static surface lifetime
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let gpu = render::GpuState::new(leaked_canvas, &curve, &scene).await?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        curve,
        camera,
        scene,
        audio,
        gpu,
        canvas,
        started: Instant::now(),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
