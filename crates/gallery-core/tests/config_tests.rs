// Host-side tests for gallery configuration and item parsing.

use gallery_core::*;
use std::time::Duration;

#[test]
fn empty_options_give_defaults() {
    let d = GalleryConfig::default();
    assert_eq!(GalleryConfig::from_json("").ok(), Some(d.clone()));
    assert_eq!(GalleryConfig::from_json("  {} ").ok(), Some(d.clone()));

    assert_eq!(d.radius, 2);
    assert_eq!(d.padding, 24.0);
    assert_eq!(d.fit_scale, 0.9);
    assert_eq!(d.cull_margin, 100.0);
    assert_eq!(d.click_threshold, 5.0);
    assert_eq!(d.flip_duration(), Duration::from_secs_f32(0.35));
    assert_eq!(d.max_frame_dt(), Duration::from_secs_f32(0.05));
    assert_eq!(d.level(), log::Level::Info);
}

#[test]
fn partial_options_override_selected_fields() {
    let cfg = GalleryConfig::from_json(r#"{"radius": 3, "flip_duration": 0.5, "log_level": "debug"}"#)
        .expect("valid config");
    assert_eq!(cfg.radius, 3);
    assert_eq!(cfg.flip_duration, 0.5);
    assert_eq!(cfg.padding, 24.0);
    assert_eq!(cfg.level(), log::Level::Debug);
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    let cfg = GalleryConfig::from_json(r#"{"log_level": "chatty"}"#).expect("valid config");
    assert_eq!(cfg.level(), log::Level::Info);
}

#[test]
fn invalid_values_are_rejected() {
    for json in [
        r#"{"padding": -1}"#,
        r#"{"flip_duration": 0}"#,
        r#"{"fit_scale": 0}"#,
        r#"{"click_threshold": -0.5}"#,
    ] {
        let err = GalleryConfig::from_json(json).expect_err(json);
        assert!(matches!(err, GalleryError::Config(_)), "{json}: {err}");
    }
}

#[test]
fn malformed_options_report_json_error() {
    let err = GalleryConfig::from_json("{radius:").expect_err("malformed");
    assert!(matches!(err, GalleryError::ConfigJson(_)));
    assert!(err.to_string().starts_with("malformed config"));
}

#[test]
fn items_parse_with_optional_fields() {
    let items = parse_items(
        r#"[
            {"id": "a", "artwork": "/a.png", "title": "Alpha"},
            {"id": "b"},
            {"id": "c", "title": "", "available": false}
        ]"#,
    )
    .expect("valid items");

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].artwork.as_deref(), Some("/a.png"));
    assert_eq!(items[0].label(), "Alpha");
    assert!(items[1].available);
    assert_eq!(items[1].label(), "b");
    assert!(!items[2].available);
    assert_eq!(items[2].label(), "c");
}

#[test]
fn items_without_id_are_rejected() {
    let err = parse_items(r#"[{"title": "nameless"}]"#).expect_err("missing id");
    assert!(matches!(err, GalleryError::Items(_)));
}

#[test]
fn item_serializes_with_plain_id() {
    let item = GalleryItem::new("x").with_title("X").with_artwork("/x.jpg");
    let json = serde_json::to_value(&item).expect("serialize");
    assert_eq!(json["id"], "x");
    assert_eq!(json["title"], "X");
    assert_eq!(json["available"], true);
}

#[test]
fn oversized_radius_is_rejected() {
    let err = GalleryConfig::from_json(r#"{"radius": 4294967295}"#).expect_err("radius too large");
    assert!(matches!(err, GalleryError::Config(_)), "{err}");

    let max = format!(r#"{{"radius": {MAX_RADIUS}}}"#);
    assert!(GalleryConfig::from_json(&max).is_ok());
    let over = format!(r#"{{"radius": {}}}"#, MAX_RADIUS + 1);
    assert!(GalleryConfig::from_json(&over).is_err());
}

#[test]
fn unvalidated_radius_is_clamped_not_fatal() {
    let cfg = GalleryConfig {
        radius: u32::MAX,
        ..GalleryConfig::default()
    };
    let mut g = Gallery::new(cfg);
    assert_eq!(g.cluster().radius(), MAX_RADIUS);
    assert_eq!(g.config().radius, MAX_RADIUS);

    g.set_radius(2);
    assert_eq!(g.cluster().len(), 19);
    g.set_radius(u32::MAX);
    assert_eq!(g.cluster().len(), cluster_len(MAX_RADIUS));
}
