//! Per-frame orchestration: advance the camera, animate the scene, query the
//! audio bands and hand everything to the renderer.

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::AudioDirector;
use crate::core::scene::hsl_to_rgb;
use crate::core::spectrum;
use crate::core::{CameraProgression, ClosedCurve, SceneAnimationState};
use crate::render;

pub struct FrameContext {
    pub curve: Rc<ClosedCurve>,
    pub camera: Rc<RefCell<CameraProgression>>,
    pub scene: SceneAnimationState,
    pub audio: Option<Rc<RefCell<AudioDirector>>>,
    pub gpu: render::GpuState<'static>,
    pub canvas: web::HtmlCanvasElement,
    pub started: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.started).as_secs_f32();

        let hue = spectrum::hue_at(elapsed);
        let (eye, target, boost, blur) = {
            let mut cam = self.camera.borrow_mut();
            cam.update();
            let (eye, target) = cam.camera_pose(&self.curve);
            (eye, target, cam.speed_boost(), cam.blur_strength())
        };
        let lightness = spectrum::lightness_at(boost);

        self.scene.update_colors(hue, lightness);
        self.scene.animate_moving();
        self.scene.animate_billboards(eye);

        // band energies read 0 until the audio graph goes live, which keeps
        // the silent rendition identical to the audio path with quiet input
        let (bass, mid) = match &self.audio {
            Some(a) => {
                let mut a = a.borrow_mut();
                (a.bass_level(), a.mid_level())
            }
            None => (0.0, 0.0),
        };
        let (shift_amount, shift_angle) = spectrum::rgb_shift_params(bass, elapsed);
        self.scene.apply_audio_pulse(mid);

        self.gpu.set_camera(eye, target);
        self.gpu.set_line_color(hsl_to_rgb(hue, 1.0, lightness));
        self.gpu.set_blur_strength(blur);
        self.gpu.set_chromatic_shift(shift_amount, shift_angle);

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(dt_sec, &self.scene) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
