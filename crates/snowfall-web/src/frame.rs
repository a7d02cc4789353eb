use crate::audio::AudioGraph;
use crate::dom;
use crate::render;
use snowfall_core::{AutoScroll, Camera, FrameClock, OrbitControls, SceneLayout};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub clock: FrameClock,
    pub camera: Camera,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub audio: Option<Rc<RefCell<AudioGraph>>>,
    pub scroll: Rc<RefCell<AutoScroll>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.clock.advance();

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.camera.set_viewport(w, h);
        self.orbit.borrow_mut().update(&mut self.camera);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            if let Some(audio) = &self.audio {
                g.upload_spectrum(audio.borrow_mut().sample_spectrum());
            }
            match g.render(&self.camera, &self.clock) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[gpu] surface lost; reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }

        self.step_scroll();
    }

    fn step_scroll(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let target = self.scroll.borrow_mut().update(
            instant::now(),
            dom::scroll_y(&window),
            dom::max_scroll_y(&window),
        );
        if let Some(y) = target {
            window.scroll_to_with_x_and_y(0.0, y);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    layout: &SceneLayout,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, layout).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
