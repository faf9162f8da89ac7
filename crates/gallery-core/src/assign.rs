//! Pairing of gallery items with cluster offsets.

use crate::hex::Axial;
use crate::item::{GalleryItem, ItemId};
use fnv::FnvHashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub item: GalleryItem,
    pub offset: Axial,
}

/// Bind items to offsets in topology order.
///
/// The focused item (or the first item when `focused` is absent or unknown)
/// always lands on the origin; the rest fill the remaining offsets
/// first-come, in list order. Returns `min(items, offsets)`
/// assignments, or none for an empty item list.
pub fn assign_items(
    items: &[GalleryItem],
    ordered_offsets: &[Axial],
    focused: Option<&ItemId>,
) -> Vec<Assignment> {
    let Some(first) = items.first() else {
        return Vec::new();
    };
    let centered = focused
        .and_then(|id| items.iter().find(|it| &it.id == id))
        .unwrap_or(first);
    let mut others = items.iter().filter(|it| it.id != centered.id);

    let n = items.len().min(ordered_offsets.len());
    let mut out = Vec::with_capacity(n);
    for offset in ordered_offsets.iter().take(n) {
        if *offset == Axial::ORIGIN {
            out.push(Assignment {
                item: centered.clone(),
                offset: *offset,
            });
        } else if let Some(item) = others.next() {
            out.push(Assignment {
                item: item.clone(),
                offset: *offset,
            });
        }
    }
    out
}

/// Assignments plus an offset lookup, rebuilt together.
#[derive(Clone, Debug, Default)]
pub struct AssignmentIndex {
    assignments: Vec<Assignment>,
    by_offset: FnvHashMap<Axial, usize>,
}

impl AssignmentIndex {
    pub fn build(assignments: Vec<Assignment>) -> Self {
        let by_offset = assignments
            .iter()
            .enumerate()
            .map(|(i, a)| (a.offset, i))
            .collect();
        Self {
            assignments,
            by_offset,
        }
    }

    #[inline]
    pub fn at(&self, offset: Axial) -> Option<&Assignment> {
        self.by_offset
            .get(&offset)
            .and_then(|&i| self.assignments.get(i))
    }

    #[inline]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn offset_of(&self, id: &ItemId) -> Option<Axial> {
        self.assignments
            .iter()
            .find(|a| &a.item.id == id)
            .map(|a| a.offset)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
