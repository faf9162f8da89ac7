use glam::Vec2;

#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    /// Last known position in viewport-local CSS pixels.
    pub pos: Vec2,
    pub inside: bool,
}

/// Snapshot taken at pointer-down.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub origin: Vec2,
    pub pan_origin: Vec2,
}

impl DragState {
    /// Distance travelled from the drag origin to `pos`.
    #[inline]
    pub fn moved(&self, pos: Vec2) -> f32 {
        pos.distance(self.origin)
    }
}

#[derive(Default, Clone, Copy, Debug)]
pub struct ViewState {
    pub pan: Vec2,
    pub pointer: PointerState,
    pub drag: DragState,
    /// Viewport size in CSS pixels. Zero in either axis means nothing to draw.
    pub viewport: Vec2,
}

impl ViewState {
    #[inline]
    pub fn has_viewport(&self) -> bool {
        self.viewport.x > 0.0 && self.viewport.y > 0.0
    }

    pub fn begin_drag(&mut self, pos: Vec2) {
        self.drag = DragState {
            active: true,
            origin: pos,
            pan_origin: self.pan,
        };
    }

    /// Record the pointer and, while dragging, pan by the raw delta from the
    /// drag origin.
    pub fn move_pointer(&mut self, pos: Vec2) {
        self.pointer.pos = pos;
        if self.drag.active {
            self.pan = self.drag.pan_origin + (pos - self.drag.origin);
        }
    }

    /// End the drag and report how far the pointer travelled since it began.
    pub fn end_drag(&mut self, pos: Vec2) -> Option<f32> {
        if !self.drag.active {
            return None;
        }
        self.drag.active = false;
        Some(self.drag.moved(pos))
    }
}
