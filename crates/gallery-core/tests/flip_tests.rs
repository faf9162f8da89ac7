// Host-side tests for tile flip animations.

use gallery_core::*;
use std::time::Duration;

const FLIP: Duration = Duration::from_millis(350);

fn step(set: &mut FlipSet, secs: f32) -> Vec<ItemId> {
    set.advance(Duration::from_secs_f32(secs)).into_vec()
}

#[test]
fn progress_advances_by_dt_over_duration() {
    let id = ItemId::from("a");
    let mut flips = FlipSet::default();
    flips.start(id.clone(), FLIP);
    assert_eq!(flips.get(&id).map(|f| f.progress), Some(0.0));

    assert!(step(&mut flips, 0.1).is_empty());
    let p = flips.get(&id).map(|f| f.progress).unwrap_or_default();
    assert!((p - 0.1 / 0.35).abs() < 1e-4, "progress {p}");
}

#[test]
fn flip_is_removed_in_the_frame_it_completes() {
    let id = ItemId::from("a");
    let mut flips = FlipSet::default();
    flips.start(id.clone(), FLIP);

    for _ in 0..3 {
        assert!(step(&mut flips, 0.1).is_empty());
    }
    assert_eq!(flips.len(), 1);

    let done = step(&mut flips, 0.1);
    assert_eq!(done, vec![id.clone()]);
    assert!(flips.get(&id).is_none());
    assert!(flips.is_empty());
}

#[test]
fn restarting_a_flip_resets_progress() {
    let id = ItemId::from("a");
    let mut flips = FlipSet::default();
    flips.start(id.clone(), FLIP);
    step(&mut flips, 0.2);
    flips.start(id.clone(), FLIP);
    assert_eq!(flips.len(), 1);
    assert_eq!(flips.get(&id).map(|f| f.progress), Some(0.0));
}

#[test]
fn independent_flips_finish_independently() {
    let a = ItemId::from("a");
    let b = ItemId::from("b");
    let mut flips = FlipSet::default();
    flips.start(a.clone(), FLIP);
    step(&mut flips, 0.2);
    flips.start(b.clone(), FLIP);

    let done = step(&mut flips, 0.2);
    assert_eq!(done, vec![a]);
    assert!(flips.get(&b).is_some());
}

#[test]
fn zero_duration_finishes_immediately() {
    let id = ItemId::from("a");
    let mut flips = FlipSet::default();
    flips.start(id.clone(), Duration::ZERO);
    assert_eq!(step(&mut flips, 0.0), vec![id]);
}

#[test]
fn scale_follows_one_cosine_turn() {
    let mut f = FlipAnimation::new(FLIP);
    assert!((f.duration - 0.35).abs() < 1e-6);
    assert!((f.scale_x() - 1.0).abs() < 1e-6);
    f.progress = 0.25;
    assert!(f.scale_x().abs() < 1e-5);
    f.progress = 0.5;
    assert!((f.scale_x() + 1.0).abs() < 1e-5);
}
