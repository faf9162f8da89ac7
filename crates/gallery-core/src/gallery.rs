//! Gallery state machine: item layout, selection, pointer handling and the
//! per-frame step.
//!
//! A [`Gallery`] is driven from outside. The host feeds it viewport sizes,
//! pointer events and a frame tick carrying the elapsed time and the latest
//! band energies; the gallery draws through a [`Painter`] and announces
//! selections through the registered callback.

use crate::analyzer::BandEnergy;
use crate::assign::{assign_items, Assignment, AssignmentIndex};
use crate::cluster::{Cluster, MAX_RADIUS};
use crate::config::GalleryConfig;
use crate::flip::FlipSet;
use crate::hex::{hex_at_pixel, hex_distance, Axial};
use crate::item::{GalleryItem, ItemId};
use crate::paint::{Painter, Theme};
use crate::render::Scene;
use crate::view::ViewState;
use glam::Vec2;
use std::time::Duration;

pub type SelectCallback = Box<dyn FnMut(&GalleryItem)>;

/// Hex size and grid center for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub size: f32,
    pub center: Axial,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameState {
    /// No usable viewport yet; nothing was drawn.
    Idle,
    Rendered { tiles: usize },
}

pub struct Gallery {
    config: GalleryConfig,
    theme: Theme,
    cluster: Cluster,
    items: Vec<GalleryItem>,
    index: AssignmentIndex,
    focused: Option<ItemId>,
    selected: Option<ItemId>,
    view: ViewState,
    flips: FlipSet,
    bands: BandEnergy,
    on_select: Option<SelectCallback>,
    auto_selected: bool,
}

impl Gallery {
    pub fn new(mut config: GalleryConfig) -> Self {
        let cluster = Cluster::new(config.radius);
        config.radius = cluster.radius();
        Self {
            config,
            theme: Theme::default(),
            cluster,
            items: Vec::new(),
            index: AssignmentIndex::default(),
            focused: None,
            selected: None,
            view: ViewState::default(),
            flips: FlipSet::default(),
            bands: BandEnergy::ZERO,
            on_select: None,
            auto_selected: false,
        }
    }

    pub fn set_on_select(&mut self, callback: impl FnMut(&GalleryItem) + 'static) {
        self.on_select = Some(Box::new(callback));
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Replace the item list. The first non-empty list triggers the initial
    /// pick of the middle item.
    pub fn set_items(&mut self, items: Vec<GalleryItem>) {
        self.items = items;
        self.reassign();
        if !self.auto_selected && !self.items.is_empty() {
            self.auto_selected = true;
            let middle = self.items[self.items.len() / 2].clone();
            log::debug!("[gallery] initial pick {}", middle.id);
            self.select(middle);
        }
    }

    /// Change the cluster radius, clamped to [`MAX_RADIUS`].
    pub fn set_radius(&mut self, radius: u32) {
        let radius = radius.min(MAX_RADIUS);
        if radius == self.cluster.radius() {
            return;
        }
        self.config.radius = radius;
        self.cluster = Cluster::new(radius);
        self.reassign();
    }

    /// Pin `id` to the center offset (or the first item when `None`).
    pub fn set_focus(&mut self, id: Option<ItemId>) {
        if self.focused != id {
            self.focused = id;
            self.reassign();
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.view.viewport = Vec2::new(width.max(0.0), height.max(0.0));
    }

    fn reassign(&mut self) {
        let assignments = assign_items(&self.items, self.cluster.ordered(), self.focused.as_ref());
        self.index = AssignmentIndex::build(assignments);
    }

    fn select(&mut self, item: GalleryItem) {
        self.selected = Some(item.id.clone());
        self.set_focus(Some(item.id.clone()));
        if let Some(cb) = self.on_select.as_mut() {
            cb(&item);
        }
    }

    /// Hex size that fits the whole cluster into `viewport` with padding.
    pub fn hex_size(&self, viewport: Vec2) -> f32 {
        let bounds = self.cluster.bounds();
        let pad = self.config.padding;
        let scale_x = (viewport.x - pad * 2.0) / (bounds.width() + 2.0);
        let scale_y = (viewport.y - pad * 2.0) / (bounds.height() + 2.0);
        self.config.fit_scale * scale_x.min(scale_y)
    }

    /// Current size and center, or `None` while there is nothing to lay out.
    pub fn layout(&self) -> Option<Layout> {
        if !self.view.has_viewport() {
            return None;
        }
        let vp = self.view.viewport;
        let size = self.hex_size(vp);
        if !size.is_finite() || size <= 0.0 {
            return None;
        }
        let center = hex_at_pixel(vp / 2.0 - self.view.pan, size);
        Some(Layout { size, center })
    }

    /// Absolute grid cell under the pointer, when hover is active.
    pub fn hovered(&self, layout: &Layout) -> Option<Axial> {
        self.view
            .pointer
            .inside
            .then(|| hex_at_pixel(self.view.pointer.pos - self.view.pan, layout.size))
    }

    /// Assignment under viewport position `pos`, if it lies within the
    /// cluster around the current center.
    pub fn hit_test(&self, pos: Vec2) -> Option<&Assignment> {
        let layout = self.layout()?;
        let cell = hex_at_pixel(pos - self.view.pan, layout.size);
        if hex_distance(cell, layout.center) > self.cluster.radius() as i32 {
            return None;
        }
        self.index.at(cell - layout.center)
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.view.pointer.pos = pos;
        self.view.begin_drag(pos);
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        self.view.move_pointer(pos);
    }

    /// Finish a press. Short presses select the tile under the pointer,
    /// announce it and start its flip. Returns the selected id.
    pub fn pointer_up(&mut self, pos: Vec2) -> Option<ItemId> {
        let moved = self.view.end_drag(pos)?;
        if moved >= self.config.click_threshold {
            return None;
        }
        let item = self.hit_test(pos)?.item.clone();
        let id = item.id.clone();
        log::debug!("[click] select {}", id);
        self.flips.start(id.clone(), self.config.flip_duration());
        self.select(item);
        Some(id)
    }

    pub fn pointer_enter(&mut self) {
        self.view.pointer.inside = true;
    }

    pub fn pointer_leave(&mut self) {
        self.view.pointer.inside = false;
    }

    /// One frame: advance flips, then draw unless the viewport is unusable.
    pub fn frame<P: Painter + ?Sized>(
        &mut self,
        dt: Duration,
        dpr: f32,
        bands: BandEnergy,
        painter: &mut P,
    ) -> FrameState {
        self.bands = bands;
        let dt = dt.min(self.config.max_frame_dt());
        for id in self.flips.advance(dt) {
            log::debug!("[flip] done {}", id);
        }

        let Some(layout) = self.layout() else {
            return FrameState::Idle;
        };

        let vp = self.view.viewport;
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let backing = ((vp.x * dpr).floor() as u32, (vp.y * dpr).floor() as u32);
        if painter.backing_size() != backing {
            painter.resize(backing.0, backing.1, dpr);
        }
        painter.clear(vp.x, vp.y);

        let scene = Scene {
            layout,
            view: &self.view,
            cluster: &self.cluster,
            index: &self.index,
            flips: &self.flips,
            selected: self.selected.as_ref(),
            hovered: self.hovered(&layout),
            bands: self.bands,
            theme: self.theme,
            cull_margin: self.config.cull_margin,
        };
        let tiles = scene.draw(painter);
        FrameState::Rendered { tiles }
    }

    #[inline]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    #[inline]
    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    #[inline]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[inline]
    pub fn assignments(&self) -> &[Assignment] {
        self.index.assignments()
    }

    #[inline]
    pub fn selected(&self) -> Option<&ItemId> {
        self.selected.as_ref()
    }

    #[inline]
    pub fn focused(&self) -> Option<&ItemId> {
        self.focused.as_ref()
    }

    #[inline]
    pub fn flips(&self) -> &FlipSet {
        &self.flips
    }

    #[inline]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Band energies from the latest frame.
    #[inline]
    pub fn bands(&self) -> BandEnergy {
        self.bands
    }
}
