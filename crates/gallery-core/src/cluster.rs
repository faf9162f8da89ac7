//! Fixed-radius hex clusters and their visit order.

use crate::hex::{hex_distance, Axial};
use glam::Vec2;

/// Largest supported cluster radius.
pub const MAX_RADIUS: u32 = 64;

/// Every offset within `radius` of the origin, enumerated column by column.
/// `radius` is capped at [`MAX_RADIUS`].
pub fn make_cluster_offsets(radius: u32) -> Vec<Axial> {
    let radius = radius.min(MAX_RADIUS);
    let mut offsets = Vec::with_capacity(cluster_len(radius));
    let radius = radius as i32;
    for q in -radius..=radius {
        let r1 = (-radius).max(-q - radius);
        let r2 = radius.min(-q + radius);
        for r in r1..=r2 {
            offsets.push(Axial::new(q, r));
        }
    }
    offsets
}

/// Number of hexes within `radius`: `3R² + 3R + 1`, saturating at `usize::MAX`.
#[inline]
pub const fn cluster_len(radius: u32) -> usize {
    let r = radius as usize;
    r.saturating_mul(r)
        .saturating_mul(3)
        .saturating_add(r.saturating_mul(3))
        .saturating_add(1)
}

/// Sort offsets ring by ring, then by the angle of their unit-size pixel
/// projection. The center always comes first.
pub fn order_offsets(offsets: &[Axial]) -> Vec<Axial> {
    let mut ordered = offsets.to_vec();
    ordered.sort_by(|a, b| {
        let da = hex_distance(Axial::ORIGIN, *a);
        let db = hex_distance(Axial::ORIGIN, *b);
        da.cmp(&db).then_with(|| unit_angle(*a).total_cmp(&unit_angle(*b)))
    });
    ordered
}

#[inline]
fn unit_angle(a: Axial) -> f32 {
    let p = a.to_pixel(1.0);
    p.y.atan2(p.x)
}

/// Axis-aligned bounds of the hex centers of a cluster at unit size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl UnitBounds {
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// A cluster of offsets around a moving center, with the topology order used
/// for item assignment.
#[derive(Clone, Debug)]
pub struct Cluster {
    radius: u32,
    offsets: Vec<Axial>,
    ordered: Vec<Axial>,
    bounds: UnitBounds,
}

impl Cluster {
    /// Radii above [`MAX_RADIUS`] are clamped.
    pub fn new(radius: u32) -> Self {
        if radius > MAX_RADIUS {
            log::warn!("[cluster] radius {} clamped to {}", radius, MAX_RADIUS);
        }
        let radius = radius.min(MAX_RADIUS);
        let offsets = make_cluster_offsets(radius);
        let ordered = order_offsets(&offsets);
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for o in &offsets {
            let p = o.to_pixel(1.0);
            min = min.min(p);
            max = max.max(p);
        }
        Self {
            radius,
            offsets,
            ordered,
            bounds: UnitBounds { min, max },
        }
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Offsets in enumeration order; used for drawing.
    #[inline]
    pub fn offsets(&self) -> &[Axial] {
        &self.offsets
    }

    /// Offsets in topology order; used for assignment.
    #[inline]
    pub fn ordered(&self) -> &[Axial] {
        &self.ordered
    }

    #[inline]
    pub fn bounds(&self) -> UnitBounds {
        self.bounds
    }

    #[inline]
    pub fn contains(&self, offset: Axial) -> bool {
        hex_distance(Axial::ORIGIN, offset) <= self.radius as i32
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
