use crate::item::ItemId;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::time::Duration;

/// A tile flip in flight. `progress` runs from 0 up to (not including) 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlipAnimation {
    pub progress: f32,
    pub duration: f32,
}

impl FlipAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            progress: 0.0,
            duration: duration.as_secs_f32(),
        }
    }

    /// Horizontal scale for the flip: one full turn of `cos` over the run.
    #[inline]
    pub fn scale_x(&self) -> f32 {
        (self.progress * std::f32::consts::TAU).cos()
    }
}

/// Active flips keyed by item id, updated in place every frame.
#[derive(Clone, Debug, Default)]
pub struct FlipSet {
    active: FnvHashMap<ItemId, FlipAnimation>,
}

impl FlipSet {
    /// Start a flip for `id`, replacing any flip already running for it.
    pub fn start(&mut self, id: ItemId, duration: Duration) {
        self.active.insert(id, FlipAnimation::new(duration));
    }

    /// Advance every flip by `dt / duration` and drop the ones that reach 1.
    /// Returns the ids that finished this step.
    pub fn advance(&mut self, dt: Duration) -> SmallVec<[ItemId; 4]> {
        let dt = dt.as_secs_f32();
        let mut finished = SmallVec::new();
        self.active.retain(|id, flip| {
            if flip.duration > 0.0 {
                flip.progress += dt / flip.duration;
            } else {
                flip.progress = 1.0;
            }
            if flip.progress >= 1.0 {
                finished.push(id.clone());
                false
            } else {
                true
            }
        });
        finished
    }

    #[inline]
    pub fn get(&self, id: &ItemId) -> Option<&FlipAnimation> {
        self.active.get(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
