#![cfg(target_arch = "wasm32")]
use gallery_core::{parse_items, Gallery, GalleryConfig, SignalAnalyzer, Theme};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod artwork;
mod audio;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");
    Ok(())
}

/// Everything a mounted gallery holds on to. Dropping it tears the gallery
/// down: the frame loop stops, listeners detach, the observer disconnects and
/// late artwork loads are ignored.
struct Mounted {
    gallery: Rc<RefCell<Gallery>>,
    outbox: Rc<events::SelectionOutbox>,
    artwork: artwork::ArtworkLoader,
    alive: Rc<Cell<bool>>,
    canvas: web::HtmlCanvasElement,
    frame_loop: frame::FrameLoop,
    _listeners: Vec<events::Listener>,
    _resize: dom::ResizeWatch,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.alive.set(false);
        self.frame_loop.stop();
        self.canvas.remove();
        log::info!("[gallery] unmounted");
    }
}

#[wasm_bindgen]
pub struct GalleryHandle {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl GalleryHandle {
    /// Stop the gallery and release everything it acquired. Safe to call
    /// more than once.
    pub fn unmount(&mut self) {
        self.inner.take();
    }

    /// Replace the item list with a JSON array of items.
    pub fn set_items(&self, items_json: &str) -> Result<(), JsValue> {
        let Some(m) = &self.inner else {
            return Ok(());
        };
        let items = parse_items(items_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        m.gallery.borrow_mut().set_items(items);
        m.artwork.preload(m.gallery.borrow().assignments());
        m.outbox.flush();
        Ok(())
    }

    /// True once every requested artwork has loaded or failed.
    pub fn is_ready(&self) -> bool {
        self.inner.as_ref().is_some_and(|m| m.artwork.is_ready())
    }

    pub fn selected_id(&self) -> Option<String> {
        let m = self.inner.as_ref()?;
        let gallery = m.gallery.borrow();
        gallery.selected().map(|id| id.to_string())
    }
}

/// Mount a gallery canvas inside `container`.
///
/// `items_json` is an array of `{id, artwork?, title?, available?}`,
/// `options_json` an optional gallery config object. `on_select` receives
/// each selected item as a plain object.
#[wasm_bindgen]
pub fn mount_gallery(
    container: web::HtmlElement,
    items_json: &str,
    options_json: &str,
    audio_element: Option<web::HtmlMediaElement>,
    on_select: js_sys::Function,
) -> Result<GalleryHandle, JsValue> {
    match mount(container, items_json, options_json, audio_element, on_select) {
        Ok(m) => Ok(GalleryHandle { inner: Some(m) }),
        Err(e) => {
            log::error!("mount error: {:?}", e);
            Err(JsValue::from_str(&format!("{e:#}")))
        }
    }
}

fn mount(
    container: web::HtmlElement,
    items_json: &str,
    options_json: &str,
    audio_element: Option<web::HtmlMediaElement>,
    on_select: js_sys::Function,
) -> anyhow::Result<Mounted> {
    let config = GalleryConfig::from_json(options_json)?;
    log::set_max_level(config.level().to_level_filter());
    let items = parse_items(items_json)?;
    let radius = config.radius;

    let canvas = dom::create_canvas(&container)?;
    // From here on a failure must not leave the canvas behind.
    let ctx = match dom::context_2d(&canvas) {
        Ok(c) => c,
        Err(e) => {
            canvas.remove();
            return Err(e);
        }
    };

    let outbox = events::SelectionOutbox::new(on_select);
    let gallery = Rc::new(RefCell::new(Gallery::new(config)));
    {
        let mut g = gallery.borrow_mut();
        let theme = dom::read_accent(&container)
            .map(|accent| Theme { accent })
            .unwrap_or_default();
        g.set_theme(theme);
        let sink = outbox.clone();
        g.set_on_select(move |item| sink.push(item));
        let size = dom::element_css_size(&container);
        g.set_viewport(size.x, size.y);
        g.set_items(items);
    }

    let alive = Rc::new(Cell::new(true));
    let artwork = artwork::ArtworkLoader::new(alive.clone());
    let analyzer = audio_element.map(|el| {
        Rc::new(RefCell::new(SignalAnalyzer::new(audio::MediaElementGraph::new(el))))
    });

    let wired = (|| -> anyhow::Result<_> {
        let listeners = events::wire_input_handlers(events::InputWiring {
            canvas: canvas.clone(),
            gallery: gallery.clone(),
            analyzer: analyzer.clone(),
            outbox: outbox.clone(),
        })?;
        let resize = {
            let gallery = gallery.clone();
            dom::ResizeWatch::observe(&container, move |size| {
                gallery.borrow_mut().set_viewport(size.x, size.y);
            })?
        };
        let frame_loop = frame::start_loop(frame::FrameContext {
            gallery: gallery.clone(),
            painter: render::CanvasPainter::new(canvas.clone(), ctx, artwork.images()),
            analyzer,
            artwork: artwork.clone(),
            last_instant: Instant::now(),
            last_state: None,
        })?;
        Ok((listeners, resize, frame_loop))
    })();
    let (listeners, resize, frame_loop) = match wired {
        Ok(parts) => parts,
        Err(e) => {
            alive.set(false);
            canvas.remove();
            return Err(e.context("wiring gallery"));
        }
    };

    artwork.preload(gallery.borrow().assignments());
    log::info!(
        "[gallery] mounted items={} radius={}",
        gallery.borrow().items().len(),
        radius
    );
    outbox.flush();

    Ok(Mounted {
        gallery,
        outbox,
        artwork,
        alive,
        canvas,
        frame_loop,
        _listeners: listeners,
        _resize: resize,
    })
}
