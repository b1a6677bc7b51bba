use linked_views::api::{
    AxisLabels, LinkedViews, LinkedViewsConfig, OverlayClearBehavior, RenderStyle,
};
use linked_views::core::{CarRecord, Margin, RecordStore, Viewport};
use linked_views::render::NullRenderer;

#[test]
fn config_json_roundtrip_preserves_every_field() {
    let config = LinkedViewsConfig::default()
        .with_viewport(Viewport::new(800, 640))
        .with_margin(Margin::new(20.0, 20.0, 50.0, 50.0))
        .with_point_radius_px(3.5)
        .with_tick_count(6)
        .with_overlay_clear_behavior(OverlayClearBehavior::RevertToBaseline);

    let json = config.to_json_pretty().expect("serialize config");
    let parsed = LinkedViewsConfig::from_json_str(&json).expect("parse config");
    assert_eq!(parsed, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let parsed = LinkedViewsConfig::from_json_str(r#"{"point_radius_px": 4.0}"#)
        .expect("parse config");

    assert_eq!(parsed.point_radius_px, 4.0);
    assert_eq!(parsed.viewport, Viewport::new(600, 560));
    assert_eq!(parsed.margin, Margin::new(30.0, 30.0, 60.0, 60.0));
    assert_eq!(parsed.band_padding, 0.1);
    assert_eq!(parsed.tick_count, 10);
    assert_eq!(
        parsed.overlay_clear_behavior,
        OverlayClearBehavior::RetainLastSelection
    );
    assert_eq!(parsed.labels, AxisLabels::default());
}

#[test]
fn partial_label_override_keeps_other_titles() {
    let parsed = LinkedViewsConfig::from_json_str(r#"{"labels": {"bar_y": "Cars"}}"#)
        .expect("parse config");
    assert_eq!(parsed.labels.bar_y, "Cars");
    assert_eq!(parsed.labels.scatter_x, "Horsepower");
}

#[test]
fn overlay_behavior_uses_variant_names() {
    let parsed =
        LinkedViewsConfig::from_json_str(r#"{"overlay_clear_behavior": "RevertToBaseline"}"#)
            .expect("parse config");
    assert_eq!(
        parsed.overlay_clear_behavior,
        OverlayClearBehavior::RevertToBaseline
    );
}

#[test]
fn malformed_json_is_rejected() {
    assert!(LinkedViewsConfig::from_json_str("{ not json").is_err());
    assert!(LinkedViewsConfig::from_json_str(r#"{"tick_count": -1}"#).is_err());
}

#[test]
fn validation_rejects_out_of_range_values() {
    assert!(LinkedViewsConfig::default().validate().is_ok());
    assert!(
        LinkedViewsConfig::default()
            .with_point_radius_px(0.0)
            .validate()
            .is_err()
    );
    assert!(
        LinkedViewsConfig::default()
            .with_tick_count(0)
            .validate()
            .is_err()
    );

    let mut labels = AxisLabels::default();
    labels.scatter_y = "   ".to_owned();
    assert!(
        LinkedViewsConfig::default()
            .with_labels(labels)
            .validate()
            .is_err()
    );
}

#[test]
fn zero_axis_stroke_width_is_rejected_up_front() {
    let mut style = RenderStyle::default();
    style.axis.stroke_width = 0.0;
    let config = LinkedViewsConfig::default().with_render_style(style);
    assert!(config.validate().is_err());

    let store = RecordStore::from_records(vec![CarRecord::new(100.0, 20.0, 4.0)])
        .expect("valid records");
    assert!(LinkedViews::new(NullRenderer::default(), config, store).is_err());
}

#[test]
fn zero_selection_border_width_stays_valid() {
    let mut style = RenderStyle::default();
    style.selection_border_width = 0.0;
    let config = LinkedViewsConfig::default().with_render_style(style);
    assert!(config.validate().is_ok());
}

#[test]
fn tick_count_is_capped() {
    let at_cap = LinkedViewsConfig::default().with_tick_count(1000);
    assert!(at_cap.validate().is_ok());
    let over_cap = LinkedViewsConfig::default().with_tick_count(1001);
    assert!(over_cap.validate().is_err());

    let parsed = LinkedViewsConfig::from_json_str(r#"{"tick_count": 100000000}"#)
        .expect("parse config");
    assert!(parsed.validate().is_err());
}
