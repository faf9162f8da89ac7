// Host-side tests for cluster enumeration and ordering.

use gallery_core::*;
use std::collections::HashSet;

#[test]
fn cluster_sizes_follow_hex_numbers() {
    for (radius, expected) in [(0, 1), (1, 7), (2, 19), (3, 37), (4, 61)] {
        let offsets = make_cluster_offsets(radius);
        assert_eq!(offsets.len(), expected, "radius {radius}");
        assert_eq!(cluster_len(radius), expected);
    }
}

#[test]
fn offsets_are_unique_and_within_radius() {
    let radius = 3;
    let offsets = make_cluster_offsets(radius);
    let unique: HashSet<Axial> = offsets.iter().copied().collect();
    assert_eq!(unique.len(), offsets.len());
    for o in &offsets {
        assert!(hex_distance(Axial::ORIGIN, *o) <= radius as i32);
    }
}

#[test]
fn ordering_starts_at_center_and_walks_rings() {
    let ordered = order_offsets(&make_cluster_offsets(3));
    assert_eq!(ordered[0], Axial::ORIGIN);
    let rings: Vec<i32> = ordered
        .iter()
        .map(|o| hex_distance(Axial::ORIGIN, *o))
        .collect();
    assert!(rings.windows(2).all(|w| w[0] <= w[1]), "rings out of order: {rings:?}");
}

#[test]
fn first_ring_is_sorted_by_screen_angle() {
    let ordered = order_offsets(&make_cluster_offsets(1));
    assert_eq!(
        &ordered[1..],
        &[
            Axial::new(-1, 0),
            Axial::new(0, -1),
            Axial::new(1, -1),
            Axial::new(1, 0),
            Axial::new(0, 1),
            Axial::new(-1, 1),
        ]
    );
}

#[test]
fn ordering_is_a_permutation() {
    let offsets = make_cluster_offsets(2);
    let ordered = order_offsets(&offsets);
    let a: HashSet<Axial> = offsets.into_iter().collect();
    let b: HashSet<Axial> = ordered.into_iter().collect();
    assert_eq!(a, b);
}

#[test]
fn cluster_exposes_both_orders() {
    let cluster = Cluster::new(2);
    assert_eq!(cluster.radius(), 2);
    assert_eq!(cluster.len(), 19);
    assert!(!cluster.is_empty());
    assert_eq!(cluster.offsets(), make_cluster_offsets(2).as_slice());
    assert_eq!(cluster.ordered()[0], Axial::ORIGIN);
    assert!(cluster.contains(Axial::new(2, -2)));
    assert!(!cluster.contains(Axial::new(3, 0)));
}

#[test]
fn unit_bounds_cover_outer_ring() {
    let b = Cluster::new(1).bounds();
    assert!((b.width() - 3.0).abs() < 1e-4);
    assert!((b.height() - 2.0 * 3f32.sqrt()).abs() < 1e-4);

    let b0 = Cluster::new(0).bounds();
    assert_eq!(b0.width(), 0.0);
    assert_eq!(b0.height(), 0.0);
}

#[test]
fn huge_radius_saturates_and_caps() {
    assert_eq!(cluster_len(u32::MAX), usize::MAX);
    assert_eq!(cluster_len(MAX_RADIUS), 12_481);
    assert_eq!(make_cluster_offsets(u32::MAX).len(), cluster_len(MAX_RADIUS));
}
