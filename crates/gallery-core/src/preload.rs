use crate::assign::Assignment;
use crate::item::ItemId;
use fnv::FnvHashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// Bookkeeping for artwork fetches.
///
/// Each artwork reference is requested at most once per session. Loads and
/// failures settle alike; the set is ready once nothing is outstanding.
#[derive(Debug, Default)]
pub struct PreloadTracker {
    requested: FnvHashSet<ItemId>,
    pending: usize,
    loaded: usize,
    failed: usize,
}

impl PreloadTracker {
    /// Artwork references in `assignments` not requested yet. They are
    /// counted as pending from here on.
    pub fn plan(&mut self, assignments: &[Assignment]) -> Vec<(ItemId, String)> {
        let mut out = Vec::new();
        for a in assignments {
            let Some(src) = a.item.artwork.as_ref() else {
                continue;
            };
            if self.requested.contains(&a.item.id) {
                continue;
            }
            self.requested.insert(a.item.id.clone());
            out.push((a.item.id.clone(), src.clone()));
        }
        self.pending += out.len();
        out
    }

    pub fn settle(&mut self, outcome: LoadOutcome) {
        self.pending = self.pending.saturating_sub(1);
        match outcome {
            LoadOutcome::Loaded => self.loaded += 1,
            LoadOutcome::Failed => self.failed += 1,
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.pending == 0
    }

    #[inline]
    pub fn pending(&self) -> usize {
        self.pending
    }

    #[inline]
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    #[inline]
    pub fn failed(&self) -> usize {
        self.failed
    }
}
