//! Artwork preloading.
//!
//! Each reference is fetched on its own task and decoded before it becomes
//! visible to the painter, so a tile never draws a half-loaded image.

use anyhow::anyhow;
use fnv::FnvHashMap;
use gallery_core::{Assignment, ItemId, LoadOutcome, PreloadTracker};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type ImageMap = Rc<RefCell<FnvHashMap<ItemId, web::HtmlImageElement>>>;

#[derive(Clone)]
pub struct ArtworkLoader {
    images: ImageMap,
    tracker: Rc<RefCell<PreloadTracker>>,
    alive: Rc<Cell<bool>>,
}

impl ArtworkLoader {
    pub fn new(alive: Rc<Cell<bool>>) -> Self {
        Self {
            images: Rc::new(RefCell::new(FnvHashMap::default())),
            tracker: Rc::new(RefCell::new(PreloadTracker::default())),
            alive,
        }
    }

    pub fn images(&self) -> ImageMap {
        self.images.clone()
    }

    pub fn is_ready(&self) -> bool {
        self.tracker.borrow().is_ready()
    }

    /// Start fetching any artwork in `assignments` not requested before.
    pub fn preload(&self, assignments: &[Assignment]) {
        let planned = self.tracker.borrow_mut().plan(assignments);
        for (id, src) in planned {
            let this = self.clone();
            spawn_local(async move {
                this.load_one(id, src).await;
            });
        }
    }

    async fn load_one(&self, id: ItemId, src: String) {
        let result = fetch_image(&src).await;
        if !self.alive.get() {
            return;
        }
        let outcome = match result {
            Ok(img) => {
                self.images.borrow_mut().insert(id, img);
                LoadOutcome::Loaded
            }
            Err(e) => {
                log::warn!("Artwork failed to load: {} ({})", src, e);
                LoadOutcome::Failed
            }
        };
        let mut tracker = self.tracker.borrow_mut();
        tracker.settle(outcome);
        if tracker.is_ready() {
            log::info!(
                "[artwork] ready loaded={} failed={}",
                tracker.loaded(),
                tracker.failed()
            );
        }
    }
}

async fn fetch_image(src: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow!("{:?}", e))?;
    img.set_src(src);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(img)
}
