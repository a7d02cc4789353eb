#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use snowfall_core::{
    AutoScroll, Camera, FrameClock, OrbitControls, Playback, SceneConfig, SceneLayout, QUERY_KEYS,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("snowfall-web starting");

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

    let config = match SceneConfig::from_pairs(query_pairs(&window)) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            SceneConfig::default()
        }
    };
    log::info!("[config] {:?}", config);

    let container = document
        .get_element_by_id(constants::CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CONTAINER_ID))?;
    let canvas = dom::create_canvas(&document, &container)?;
    events::wire_canvas_resize(&window, &canvas);

    // A broken audio graph still leaves the scene running on a silent spectrum
    let audio = match audio::AudioGraph::new(&config.music_path) {
        Ok(a) => Some(Rc::new(RefCell::new(a))),
        Err(e) => {
            log::error!("[audio] {:?}", e);
            None
        }
    };

    let playback = Rc::new(RefCell::new(Playback::default()));
    let scroll = Rc::new(RefCell::new(AutoScroll::default()));
    events::wire_play_button(&document, playback, audio.clone(), scroll.clone());

    if let Some(a) = &audio {
        let element = a.borrow().element();
        match audio::wait_until_ready(element, constants::AUDIO_READY_TIMEOUT_MS).await {
            Ok(true) => log::info!("[audio] ready"),
            Ok(false) => log::warn!("[audio] not loaded yet; starting the scene anyway"),
            Err(e) => log::error!("[audio] {:?}", e),
        }
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let layout = SceneLayout::build(&config, &mut rng)?;
    log::info!(
        "[scene] {} fields, {} points",
        layout.fields.len(),
        layout.total_points()
    );

    let gpu = frame::init_gpu(&canvas, &layout).await;

    let orbit = Rc::new(RefCell::new(OrbitControls::default()));
    events::wire_orbit_pointer(&canvas, orbit.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        clock: FrameClock::default(),
        camera: Camera::default(),
        orbit,
        audio,
        scroll,
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

/// Decoded `(key, value)` pairs for the known config keys in `location.search`.
fn query_pairs(window: &web::Window) -> Vec<(&'static str, String)> {
    let search = window.location().search().unwrap_or_default();
    let Ok(params) = web::UrlSearchParams::new_with_str(&search) else {
        log::warn!("[config] unreadable query `{}`", search);
        return Vec::new();
    };
    QUERY_KEYS
        .iter()
        .filter_map(|&key| params.get(key).map(|value| (key, value)))
        .collect()
}
