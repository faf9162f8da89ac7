// Host-side tests for item-to-offset assignment.

use gallery_core::*;
use std::collections::HashSet;

fn items(n: usize) -> Vec<GalleryItem> {
    (0..n).map(|i| GalleryItem::new(format!("item{i}"))).collect()
}

fn ids(a: &[Assignment]) -> Vec<&str> {
    a.iter().map(|a| a.item.id.as_str()).collect()
}

#[test]
fn focused_item_takes_center_and_others_follow_ring_order() {
    let cluster = Cluster::new(2);
    let list = items(5);
    let focus = ItemId::from("item2");
    let out = assign_items(&list, cluster.ordered(), Some(&focus));

    assert_eq!(out.len(), 5);
    let index = AssignmentIndex::build(out);
    let at = |q, r| index.at(Axial::new(q, r)).map(|a| a.item.id.as_str());
    assert_eq!(at(0, 0), Some("item2"));
    assert_eq!(at(-1, 0), Some("item0"));
    assert_eq!(at(0, -1), Some("item1"));
    assert_eq!(at(1, -1), Some("item3"));
    assert_eq!(at(1, 0), Some("item4"));

    let empty = cluster
        .offsets()
        .iter()
        .filter(|o| index.at(**o).is_none())
        .count();
    assert_eq!(empty, 14);
}

#[test]
fn without_focus_first_item_is_centered() {
    let cluster = Cluster::new(1);
    let out = assign_items(&items(3), cluster.ordered(), None);
    assert_eq!(ids(&out), ["item0", "item1", "item2"]);
    assert_eq!(out[0].offset, Axial::ORIGIN);
    assert_eq!(out[1].offset, Axial::new(-1, 0));
}

#[test]
fn unknown_focus_falls_back_to_first_item() {
    let cluster = Cluster::new(1);
    let ghost = ItemId::from("nope");
    let out = assign_items(&items(3), cluster.ordered(), Some(&ghost));
    assert_eq!(out[0].item.id.as_str(), "item0");
    assert_eq!(out[0].offset, Axial::ORIGIN);
}

#[test]
fn empty_item_list_assigns_nothing() {
    let cluster = Cluster::new(2);
    assert!(assign_items(&[], cluster.ordered(), None).is_empty());
    let index = AssignmentIndex::build(Vec::new());
    assert!(index.is_empty());
    assert!(index.at(Axial::ORIGIN).is_none());
}

#[test]
fn assignment_is_injective_when_items_fit() {
    let cluster = Cluster::new(2);
    let list = items(12);
    let focus = ItemId::from("item7");
    let out = assign_items(&list, cluster.ordered(), Some(&focus));

    assert_eq!(out.len(), 12);
    let offsets: HashSet<Axial> = out.iter().map(|a| a.offset).collect();
    let names: HashSet<&str> = ids(&out).into_iter().collect();
    assert_eq!(offsets.len(), 12);
    assert_eq!(names.len(), 12);
    assert!(out.iter().all(|a| cluster.contains(a.offset)));
}

#[test]
fn overflow_items_are_dropped_not_doubled() {
    let cluster = Cluster::new(1);
    let list = items(10);
    let focus = ItemId::from("item9");
    let out = assign_items(&list, cluster.ordered(), Some(&focus));

    assert_eq!(out.len(), 7);
    assert_eq!(out[0].item.id.as_str(), "item9");
    let names: HashSet<&str> = ids(&out).into_iter().collect();
    assert_eq!(names.len(), 7);
    assert_eq!(ids(&out)[1..], ["item0", "item1", "item2", "item3", "item4", "item5"]);
}

#[test]
fn index_finds_offsets_by_item() {
    let cluster = Cluster::new(1);
    let index = AssignmentIndex::build(assign_items(&items(4), cluster.ordered(), None));
    assert_eq!(index.len(), 4);
    assert_eq!(index.offset_of(&ItemId::from("item0")), Some(Axial::ORIGIN));
    assert_eq!(index.offset_of(&ItemId::from("item3")), Some(Axial::new(1, -1)));
    assert_eq!(index.offset_of(&ItemId::from("missing")), None);
}
