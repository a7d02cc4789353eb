use crate::constants::MEDIA_HAVE_ENOUGH_DATA;
use snowfall_core::{FFT_SIZE, SPECTRUM_BINS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Media element playback routed through an analyser:
/// `<audio> -> MediaElementSource -> Analyser(fft 2048) -> destination`.
pub struct AudioGraph {
    ctx: web::AudioContext,
    element: web::HtmlAudioElement,
    analyser: web::AnalyserNode,
    spectrum: Vec<u8>,
}

impl AudioGraph {
    pub fn new(music_path: &str) -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let element = web::HtmlAudioElement::new_with_src(music_path)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        element.set_cross_origin(Some("anonymous"));
        element.set_preload("auto");

        let source = ctx
            .create_media_element_source(&element)
            .map_err(|e| anyhow::anyhow!("MediaElementSource error: {:?}", e))?;
        let analyser = ctx
            .create_analyser()
            .map_err(|e| anyhow::anyhow!("AnalyserNode error: {:?}", e))?;
        analyser.set_fft_size(FFT_SIZE);
        source
            .connect_with_audio_node(&analyser)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        analyser
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let bins = analyser.frequency_bin_count() as usize;
        if bins != SPECTRUM_BINS {
            log::warn!("[audio] analyser reports {} bins, expected {}", bins, SPECTRUM_BINS);
        }
        log::info!("[audio] graph ready for {}", music_path);
        Ok(Self {
            ctx,
            element,
            analyser,
            spectrum: vec![0; SPECTRUM_BINS],
        })
    }

    pub fn element(&self) -> web::HtmlAudioElement {
        self.element.clone()
    }

    pub fn play(&self) {
        // Contexts start suspended until a user gesture; this runs inside the click
        if self.ctx.state() == web::AudioContextState::Suspended {
            match self.ctx.resume() {
                Ok(promise) => spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("[audio] resume rejected: {:?}", e);
                    }
                }),
                Err(e) => log::warn!("[audio] resume error: {:?}", e),
            }
        }
        match self.element.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[audio] play rejected: {:?}", e);
                }
            }),
            Err(e) => log::warn!("[audio] play error: {:?}", e),
        }
    }

    pub fn pause(&self) {
        if let Err(e) = self.element.pause() {
            log::warn!("[audio] pause error: {:?}", e);
        }
    }

    /// Refresh and return the byte frequency spectrum (one byte per bin).
    pub fn sample_spectrum(&mut self) -> &[u8] {
        self.analyser.get_byte_frequency_data(&mut self.spectrum);
        &self.spectrum
    }
}

/// Resolve with `true` once the element can play through, or `false` after
/// `timeout_ms` when it never starts loading (some mobile browsers hold media
/// until a user gesture). A load error rejects.
pub async fn wait_until_ready(
    element: web::HtmlAudioElement,
    timeout_ms: i32,
) -> anyhow::Result<bool> {
    if element.ready_state() >= MEDIA_HAVE_ENOUGH_DATA {
        return Ok(true);
    }
    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        // Only the first settle counts, so plain repeating listeners are fine
        if let Some(w) = web::window() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
        }
        let on_ready = Closure::wrap(Box::new(move || {
            let _ = resolve.call1(&JsValue::NULL, &JsValue::TRUE);
        }) as Box<dyn FnMut()>);
        let on_error = Closure::wrap(Box::new(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("media error"));
        }) as Box<dyn FnMut()>);
        let _ = element
            .add_event_listener_with_callback("canplaythrough", on_ready.as_ref().unchecked_ref());
        let _ = element.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
        on_ready.forget();
        on_error.forget();
    });
    JsFuture::from(promise)
        .await
        .map(|v| v.as_bool() == Some(true))
        .map_err(|e| anyhow::anyhow!("audio load failed: {:?}", e))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn readiness_wait_gives_up_on_an_idle_element() {
        // No src: the element never loads, so only the timeout can settle
        let element = web::HtmlAudioElement::new().unwrap();
        let ready = wait_until_ready(element, 50).await.unwrap();
        assert!(!ready);
    }

    #[wasm_bindgen_test]
    fn play_outside_a_gesture_leaves_graph_usable() {
        // Resume and play are refused without a user gesture; both only log
        let mut graph = AudioGraph::new("missing.mp3").unwrap();
        graph.play();
        graph.pause();
        let spectrum = graph.sample_spectrum();
        assert_eq!(spectrum.len(), SPECTRUM_BINS);
    }
}
