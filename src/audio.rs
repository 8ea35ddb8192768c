//! Background music playback and spectrum analysis.
//!
//! The analyser graph is only built after a user gesture, since browsers
//! refuse to start an `AudioContext` (and `media.play()`) before one.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::core::constants::{SPECTRUM_BINS, SPECTRUM_FFT_SIZE};
use crate::core::media::{media_icon, MediaIcon};
use crate::core::spectrum;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalyzerPhase {
    /// No playback attempted yet.
    Uninitialized,
    /// Autoplay was blocked; waiting for a click on the mute button.
    AwaitingGesture,
    /// Audio graph wired, spectrum flowing.
    Active,
}

pub struct AudioDirector {
    media: web::HtmlAudioElement,
    mute_btn: web::Element,
    ctx: Option<web::AudioContext>,
    analyser: Option<web::AnalyserNode>,
    spectrum: [u8; SPECTRUM_BINS],
    phase: AnalyzerPhase,
}

impl AudioDirector {
    /// Looks up the audio element and mute button. Returns `None` (with a
    /// warning) when the page is missing either; the visuals run silent.
    pub fn new(document: &web::Document) -> Option<Rc<RefCell<Self>>> {
        let media = match document.get_element_by_id("bg-music") {
            Some(el) => match el.dyn_into::<web::HtmlAudioElement>() {
                Ok(a) => a,
                Err(_) => {
                    log::warn!("#bg-music is not an <audio> element; music disabled");
                    return None;
                }
            },
            None => {
                log::warn!("#bg-music not found; music disabled");
                return None;
            }
        };
        let mute_btn = match document.get_element_by_id("mute-btn") {
            Some(el) => el,
            None => {
                log::warn!("#mute-btn not found; music disabled");
                return None;
            }
        };
        let director = Rc::new(RefCell::new(Self {
            media,
            mute_btn,
            ctx: None,
            analyser: None,
            spectrum: [0; SPECTRUM_BINS],
            phase: AnalyzerPhase::Uninitialized,
        }));
        director.borrow().update_icon();
        Some(director)
    }

    /// Attempts autoplay. Browsers commonly reject this before a gesture,
    /// which is not an error: we park in `AwaitingGesture` and try again on
    /// the mute-button click.
    pub fn init(this: Rc<RefCell<Self>>) {
        let play = this.borrow().media.play();
        match play {
            Ok(promise) => {
                let director = this.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match JsFuture::from(promise).await {
                        Ok(_) => {
                            if let Err(err) = director.borrow_mut().ensure_pipeline() {
                                log::error!("audio pipeline setup failed: {err:?}");
                            }
                        }
                        Err(_) => {
                            log::info!("autoplay blocked; waiting for user gesture");
                            director.borrow_mut().phase = AnalyzerPhase::AwaitingGesture;
                        }
                    }
                    director.borrow().update_icon();
                });
            }
            Err(_) => {
                log::info!("autoplay unavailable; waiting for user gesture");
                this.borrow_mut().phase = AnalyzerPhase::AwaitingGesture;
                this.borrow().update_icon();
            }
        }
    }

    /// Builds the context -> source -> analyser -> destination graph once.
    fn ensure_pipeline(&mut self) -> Result<(), wasm_bindgen::JsValue> {
        if self.phase == AnalyzerPhase::Active {
            return Ok(());
        }
        let ctx = web::AudioContext::new()?;
        let source = ctx.create_media_element_source(&self.media)?;
        let analyser = ctx.create_analyser()?;
        analyser.set_fft_size(SPECTRUM_FFT_SIZE);
        analyser.set_smoothing_time_constant(0.0);
        source.connect_with_audio_node(&analyser)?;
        analyser.connect_with_audio_node(&ctx.destination())?;
        self.ctx = Some(ctx);
        self.analyser = Some(analyser);
        self.phase = AnalyzerPhase::Active;
        Ok(())
    }

    fn refresh_spectrum(&mut self) {
        if let Some(analyser) = &self.analyser {
            analyser.get_byte_frequency_data(&mut self.spectrum);
        }
    }

    /// Normalized low-band energy, or 0 before the graph is live.
    pub fn bass_level(&mut self) -> f32 {
        if self.phase != AnalyzerPhase::Active {
            return 0.0;
        }
        self.refresh_spectrum();
        spectrum::bass_energy(&self.spectrum)
    }

    /// Normalized mid-band energy, or 0 before the graph is live.
    pub fn mid_level(&mut self) -> f32 {
        if self.phase != AnalyzerPhase::Active {
            return 0.0;
        }
        self.refresh_spectrum();
        spectrum::mid_energy(&self.spectrum)
    }

    /// Mute-button click. A paused track starts (this is the gesture the
    /// browser wanted); a playing track toggles its muted flag.
    pub fn handle_toggle(this: Rc<RefCell<Self>>) {
        let paused = this.borrow().media.paused();
        if paused {
            let play = this.borrow().media.play();
            if let Ok(promise) = play {
                let director = this.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match JsFuture::from(promise).await {
                        Ok(_) => {
                            if let Err(err) = director.borrow_mut().ensure_pipeline() {
                                log::error!("audio pipeline setup failed: {err:?}");
                            }
                        }
                        Err(err) => log::warn!("playback failed: {err:?}"),
                    }
                    director.borrow().update_icon();
                });
            }
        } else {
            let muted = this.borrow().media.muted();
            this.borrow().media.set_muted(!muted);
            this.borrow().update_icon();
        }
    }

    /// Swaps the button icon to match playback state.
    pub fn update_icon(&self) {
        let icon = media_icon(self.media.paused(), self.media.muted());
        let (src, alt) = match icon {
            MediaIcon::Play => ("sound.svg", "Play"),
            MediaIcon::Unmute => ("sound.svg", "Unmute"),
            MediaIcon::Mute => ("muted.svg", "Mute"),
        };
        self.mute_btn
            .set_inner_html(&format!(r#"<img src="{src}" alt="{alt}">"#));
    }
}
