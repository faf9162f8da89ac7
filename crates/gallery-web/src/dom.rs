use anyhow::anyhow;
use gallery_core::Rgba;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f32 {
    web::window()
        .map(|w| w.device_pixel_ratio() as f32)
        .unwrap_or(1.0)
}

/// Rounded CSS size of an element.
pub fn element_css_size(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(rect.width().round() as f32, rect.height().round() as f32)
}

/// The `--accent` custom property of `el`, when it holds a hex color.
pub fn read_accent(el: &web::Element) -> Option<Rgba> {
    let style = web::window()?.get_computed_style(el).ok()??;
    let value = style.get_property_value("--accent").ok()?;
    Rgba::parse_hex(&value)
}

pub fn create_canvas(container: &web::HtmlElement) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow!("no document"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    let _ = canvas.set_attribute(
        "style",
        "width:100%;height:100%;display:block;touch-action:none",
    );
    container
        .append_child(&canvas)
        .map_err(|e| anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("get_context: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))
}

/// ResizeObserver on an element that reports its rounded CSS size.
/// Disconnects when dropped.
pub struct ResizeWatch {
    observer: web::ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ResizeWatch {
    pub fn observe(
        el: &web::Element,
        mut on_resize: impl FnMut(Vec2) + 'static,
    ) -> anyhow::Result<Self> {
        let target = el.clone();
        let callback = Closure::wrap(Box::new(move |_entries: js_sys::Array| {
            on_resize(element_css_size(&target));
        }) as Box<dyn FnMut(js_sys::Array)>);
        let observer = web::ResizeObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("ResizeObserver: {:?}", e))?;
        observer.observe(el);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
