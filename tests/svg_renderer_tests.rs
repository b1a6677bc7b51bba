use linked_views::api::{LinkedViews, LinkedViewsConfig};
use linked_views::core::SelectionRegion;
use linked_views::data::{LoadOptions, load_reader};
use linked_views::render::{SurfaceKind, SvgRenderer};

const CARS: &str = "\
model,hp,mpg,cyl
Mazda RX4,110,21,6
Datsun 710,93,22.8,4
Hornet Sportabout,175,18.7,8
Duster 360,245,14.3,8
Merc 240D,62,24.4,4
";

fn views() -> LinkedViews<SvgRenderer> {
    let records = load_reader(CARS.as_bytes(), LoadOptions::default()).expect("load csv");
    LinkedViews::new(SvgRenderer::new(), LinkedViewsConfig::default(), records)
        .expect("views init")
}

#[test]
fn scatter_document_has_one_circle_per_record() {
    let mut views = views();
    views.render_all().expect("render");
    let svg = views
        .renderer()
        .document(SurfaceKind::Scatter)
        .expect("scatter document");

    assert!(svg.starts_with("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<circle ").count(), 5);
    assert!(svg.contains(">Horsepower</text>"));
    assert!(svg.contains(">Miles per gallon</text>"));
    assert!(svg.contains(r#"transform="rotate(-90 20 218)""#));
}

#[test]
fn bar_document_grows_overlay_group_while_brushing() {
    let mut views = views();
    views.render_all().expect("render");
    let before = views
        .renderer()
        .document(SurfaceKind::Bar)
        .expect("bar document")
        .to_owned();
    assert!(!before.contains("layer-Overlay"));
    assert!(before.contains(">Cylinders</text>"));

    views.brush_start(Some(SelectionRegion::new(0.0, 510.0, 0.0, 470.0)));
    assert_eq!(views.render().expect("render"), 2);
    let after = views
        .renderer()
        .document(SurfaceKind::Bar)
        .expect("bar document");
    assert!(after.contains(r#"<g class="layer-Overlay">"#));
    // Background, three baseline bars and three overlay bars.
    assert_eq!(after.matches("<rect ").count(), 7);
}

#[test]
fn brush_rectangle_is_emitted_with_border() {
    let mut views = views();
    views.brush_start(Some(SelectionRegion::new(10.0, 50.0, 20.0, 60.0)));
    views.render_all().expect("render");
    let svg = views
        .renderer()
        .document(SurfaceKind::Scatter)
        .expect("scatter document");

    assert!(svg.contains(r#"<g class="layer-Selection">"#));
    assert!(svg.contains(r#"<rect x="70" y="50" width="40" height="40""#));
}

#[test]
fn marks_carry_their_brush_class() {
    let mut views = views();
    views.render_all().expect("render");
    let scatter = views
        .renderer()
        .document(SurfaceKind::Scatter)
        .expect("scatter document")
        .to_owned();
    assert_eq!(scatter.matches(r#"class="non-brushed""#).count(), 5);
    assert_eq!(scatter.matches(r#"class="brushed""#).count(), 0);

    views.brush_start(Some(SelectionRegion::new(0.0, 510.0, 0.0, 470.0)));
    views.render().expect("render");
    let scatter = views
        .renderer()
        .document(SurfaceKind::Scatter)
        .expect("scatter document");
    assert_eq!(scatter.matches(r#"<circle cx"#).count(), 5);
    assert_eq!(scatter.matches(r#"class="brushed""#).count(), 5);

    let bar = views
        .renderer()
        .document(SurfaceKind::Bar)
        .expect("bar document");
    assert_eq!(bar.matches(r#"class="non-brushed""#).count(), 3);
    assert_eq!(bar.matches(r#"class="brushed""#).count(), 3);
}

#[test]
fn stats_track_the_last_frame() {
    let mut views = views();
    views.render_all().expect("render");
    let stats = views.renderer().last_stats();
    assert_eq!(stats.circles_drawn, 0);
    assert_eq!(stats.rects_drawn, 4);
}
