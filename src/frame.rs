use crate::render::GpuState;
use instant::Instant;
use morph_core::{MorphDriver, ProgressTracker};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub driver: MorphDriver,
    pub progress: Rc<RefCell<ProgressTracker>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: GpuState<'a>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    /// Draw the first frame before the loop starts so it is already eased.
    pub fn prime(&mut self) {
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        let progress = self.progress.borrow().progress();
        if let Err(e) = self.driver.render_now(progress, &mut self.gpu) {
            self.handle_surface_error(e);
        }
        self.last_instant = Instant::now();
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        let progress = self.progress.borrow().progress();
        if let Err(e) = self.driver.tick(dt.as_secs_f64(), progress, &mut self.gpu) {
            self.handle_surface_error(e);
        }
    }

    fn handle_surface_error(&mut self, e: wgpu::SurfaceError) {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => self.gpu.reconfigure(),
            wgpu::SurfaceError::Timeout => log::debug!("[frame] surface timeout"),
            other => log::error!("render error: {:?}", other),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("WebGPU unavailable, morph disabled: {:?}", e);
            None
        }
    }
}

type TickClosure = Closure<dyn FnMut()>;

/// Owns the `requestAnimationFrame` chain. Dropping it cancels the pending
/// frame and releases the closure, ending the loop.
pub struct LoopHandle {
    tick: Rc<RefCell<Option<TickClosure>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

fn request_frame(tick: &Rc<RefCell<Option<TickClosure>>>, raf_id: &Rc<Cell<Option<i32>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> LoopHandle {
    let tick: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &raf_clone);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &raf_id);
    LoopHandle { tick, raf_id }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure <-> Rc cycle.
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}
