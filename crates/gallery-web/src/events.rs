use crate::audio::MediaElementGraph;
use crate::input;
use anyhow::anyhow;
use gallery_core::{Gallery, GalleryItem, SignalAnalyzer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub type SharedAnalyzer = Rc<RefCell<SignalAnalyzer<MediaElementGraph>>>;

/// Selections queued by the gallery and delivered to the host callback once
/// the gallery borrow has been released, so the host may call back in.
pub struct SelectionOutbox {
    queue: RefCell<Vec<GalleryItem>>,
    callback: js_sys::Function,
}

impl SelectionOutbox {
    pub fn new(callback: js_sys::Function) -> Rc<Self> {
        Rc::new(Self {
            queue: RefCell::new(Vec::new()),
            callback,
        })
    }

    pub fn push(&self, item: &GalleryItem) {
        self.queue.borrow_mut().push(item.clone());
    }

    pub fn flush(&self) {
        let pending: Vec<GalleryItem> = self.queue.borrow_mut().drain(..).collect();
        for item in pending {
            let arg = match serde_json::to_string(&item)
                .map_err(|e| anyhow!("{e}"))
                .and_then(|s| js_sys::JSON::parse(&s).map_err(|e| anyhow!("{:?}", e)))
            {
                Ok(v) => v,
                Err(e) => {
                    log::warn!("[select] could not encode {}: {}", item.id, e);
                    continue;
                }
            };
            if let Err(e) = self.callback.call1(&JsValue::NULL, &arg) {
                log::warn!("[select] onSelect threw: {:?}", e);
            }
        }
    }
}

/// An event listener that detaches itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::PointerEvent)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::PointerEvent) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub gallery: Rc<RefCell<Gallery>>,
    pub analyzer: Option<SharedAnalyzer>,
    pub outbox: Rc<SelectionOutbox>,
}

/// Down/enter/leave on the canvas; move/up on the window so drags survive
/// leaving the canvas.
pub fn wire_input_handlers(w: InputWiring) -> anyhow::Result<Vec<Listener>> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let canvas: &web::EventTarget = w.canvas.as_ref();
    let window: &web::EventTarget = window.as_ref();
    Ok(vec![
        wire_pointerdown(canvas, w.clone())?,
        wire_pointermove(window, w.clone())?,
        wire_pointerup(window, w.clone())?,
        Listener::attach(canvas, "pointerenter", {
            let gallery = w.gallery.clone();
            move |_ev: web::PointerEvent| gallery.borrow_mut().pointer_enter()
        })?,
        Listener::attach(canvas, "pointerleave", {
            let gallery = w.gallery.clone();
            move |_ev: web::PointerEvent| gallery.borrow_mut().pointer_leave()
        })?,
    ])
}

fn wire_pointerdown(target: &web::EventTarget, w: InputWiring) -> anyhow::Result<Listener> {
    Listener::attach(target, "pointerdown", move |ev: web::PointerEvent| {
        // First gesture unlocks audio.
        if let Some(a) = &w.analyzer {
            a.borrow_mut().connect();
        }
        let pos = input::pointer_local_px(&ev, &w.canvas);
        w.gallery.borrow_mut().pointer_down(pos);
        let _ = w.canvas.set_pointer_capture(ev.pointer_id());
    })
}

fn wire_pointermove(target: &web::EventTarget, w: InputWiring) -> anyhow::Result<Listener> {
    Listener::attach(target, "pointermove", move |ev: web::PointerEvent| {
        let pos = input::pointer_local_px(&ev, &w.canvas);
        w.gallery.borrow_mut().pointer_move(pos);
    })
}

fn wire_pointerup(target: &web::EventTarget, w: InputWiring) -> anyhow::Result<Listener> {
    Listener::attach(target, "pointerup", move |ev: web::PointerEvent| {
        let _ = w.canvas.release_pointer_capture(ev.pointer_id());
        let pos = input::pointer_local_px(&ev, &w.canvas);
        // Release the gallery before the host callback can re-enter it.
        let _ = w.gallery.borrow_mut().pointer_up(pos);
        w.outbox.flush();
    })
}
