#![cfg(target_arch = "wasm32")]
//! Scroll-driven morph of a floating point network into a hex-lattice crest.
//!
//! Decorative: every failure (missing element, no WebGPU) is logged and the
//! component stays disabled instead of surfacing an error to the page.

use instant::Instant;
use morph_core::{MorphConfig, MorphDriver, ProgressTracker};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod lifecycle;
mod render;

use constants::{CANVAS_ID, SECTION_ID};

/// Everything that must be released on page teardown.
struct Running {
    _loop: frame::LoopHandle,
    _listeners: Vec<events::EventListener>,
}

thread_local! {
    static RUNNING: RefCell<Option<Running>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("aegis-morph starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::warn!("morph disabled: {:#}", e);
        }
    });
    Ok(())
}

/// Stop the animation loop and remove listeners. Safe to call repeatedly.
#[wasm_bindgen]
pub fn teardown() {
    RUNNING.with(|r| r.borrow_mut().take());
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::find_canvas(&document, CANVAS_ID)?;
    let section = dom::find_section(&document, SECTION_ID)?;

    dom::sync_canvas_backing_size(&canvas);

    let config = MorphConfig::default();
    let progress = Rc::new(RefCell::new(ProgressTracker::new(config.trigger)));
    events::refresh_progress(&section, &progress);

    let mut rng = StdRng::from_entropy();
    let driver = MorphDriver::new(config, &mut rng)?;

    let Some(gpu) = frame::init_gpu(&canvas).await else {
        return Ok(());
    };

    let listeners = events::wire_scroll_and_resize(&window, &canvas, &section, &progress);
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        driver,
        progress,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame_ctx.borrow_mut().prime();
    let loop_handle = frame::start_loop(frame_ctx);

    RUNNING.with(|r| {
        *r.borrow_mut() = Some(Running {
            _loop: loop_handle,
            _listeners: listeners,
        })
    });

    let on_pagehide = Closure::wrap(Box::new(|event: web::Event| {
        let persisted = event
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|e| e.persisted());
        if lifecycle::teardown_on_pagehide(persisted) {
            teardown();
        } else {
            log::debug!("page cached, keeping morph loop");
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = window.add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref());
    on_pagehide.forget();

    Ok(())
}
