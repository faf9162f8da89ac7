use crate::artwork::ArtworkLoader;
use crate::dom;
use crate::events::SharedAnalyzer;
use crate::render::CanvasPainter;
use anyhow::anyhow;
use gallery_core::{BandEnergy, FrameState, Gallery};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one frame reads and writes, owned by the loop.
pub struct FrameContext {
    pub gallery: Rc<RefCell<Gallery>>,
    pub painter: CanvasPainter,
    pub analyzer: Option<SharedAnalyzer>,
    pub artwork: ArtworkLoader,
    pub last_instant: Instant,
    pub last_state: Option<FrameState>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let bands = self
            .analyzer
            .as_ref()
            .map(|a| a.borrow_mut().get_analysis())
            .unwrap_or(BandEnergy::ZERO);

        let state = {
            let mut gallery = self.gallery.borrow_mut();
            let state = gallery.frame(dt, dom::device_pixel_ratio(), bands, &mut self.painter);
            self.artwork.preload(gallery.assignments());
            state
        };

        let is_idle = |s: FrameState| s == FrameState::Idle;
        if self.last_state.map_or(true, |prev| is_idle(prev) != is_idle(state)) {
            log::debug!("[frame] {:?}", state);
        }
        self.last_state = Some(state);
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running requestAnimationFrame loop.
pub struct FrameLoop {
    tick: Tick,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Cancel the pending frame and drop the loop closure. Idempotent.
    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure <-> cell cycle.
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(mut frame_ctx: FrameContext) -> anyhow::Result<FrameLoop> {
    let tick: Tick = Rc::new(RefCell::new(None));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // Reschedule first so every path through the frame keeps the loop alive.
        raf_clone.set(request_frame(&tick_clone));
        frame_ctx.frame();
    }) as Box<dyn FnMut()>));

    let first = request_frame(&tick).ok_or_else(|| anyhow!("requestAnimationFrame failed"))?;
    raf_id.set(Some(first));
    Ok(FrameLoop { tick, raf_id })
}
