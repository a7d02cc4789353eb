use crate::audio::AudioGraph;
use crate::constants::PLAY_BUTTON_SELECTOR;
use crate::dom;
use crate::input::{self, PointerDrag};
use snowfall_core::{AutoScroll, OrbitControls, Playback};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Play/pause button: relabels itself, drives the audio element and arms the
/// page scroll on the very first press.
pub fn wire_play_button(
    document: &web::Document,
    playback: Rc<RefCell<Playback>>,
    audio: Option<Rc<RefCell<AudioGraph>>>,
    scroll: Rc<RefCell<AutoScroll>>,
) {
    dom::add_click_listener(document, PLAY_BUTTON_SELECTOR, move |button| {
        let outcome = playback.borrow_mut().toggle();
        button.set_inner_html(outcome.label);
        match &audio {
            Some(a) if outcome.play => a.borrow().play(),
            Some(a) => a.borrow().pause(),
            None => log::warn!("[audio] unavailable; toggled label only"),
        }
        if outcome.schedule_scroll {
            scroll.borrow_mut().arm(instant::now());
            log::info!("[scroll] armed");
        }
    });
}

/// Drag-to-orbit on the canvas. Pointer capture keeps the drag alive when the
/// pointer leaves the element.
pub fn wire_orbit_pointer(canvas: &web::HtmlCanvasElement, orbit: Rc<RefCell<OrbitControls>>) {
    let drag = Rc::new(RefCell::new(PointerDrag::default()));

    // Pointerdown: begin drag
    {
        let drag = drag.clone();
        let orbit = orbit.clone();
        let target = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if ev.button() != 0 {
                return;
            }
            drag.borrow_mut()
                .begin(input::pointer_client(&ev), ev.pointer_id());
            orbit.borrow_mut().begin_drag();
            let _ = target.set_pointer_capture(ev.pointer_id());
        }) as Box<dyn FnMut(_)>);
        canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    // Pointermove: rotate by the pixel delta relative to the element height
    {
        let drag = drag.clone();
        let orbit = orbit.clone();
        let target = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let Some(d) = drag
                .borrow_mut()
                .delta_to(input::pointer_client(&ev), ev.pointer_id())
            else {
                return;
            };
            let height = target.client_height().max(1) as f32;
            orbit.borrow_mut().drag_by(d.x, d.y, height);
        }) as Box<dyn FnMut(_)>);
        canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    // Pointerup / pointercancel: end drag
    for kind in ["pointerup", "pointercancel"] {
        let drag = drag.clone();
        let orbit = orbit.clone();
        let target = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if drag.borrow_mut().end(ev.pointer_id()) {
                orbit.borrow_mut().end_drag();
                let _ = target.release_pointer_capture(ev.pointer_id());
            }
        }) as Box<dyn FnMut(_)>);
        canvas
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }
}

/// Keep the canvas backing store at CSS size * devicePixelRatio.
pub fn wire_canvas_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}
