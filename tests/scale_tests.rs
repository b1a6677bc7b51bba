use approx::assert_relative_eq;
use linked_views::core::{BandScale, LinearScale, format_tick};

#[test]
fn linear_scale_maps_and_inverts() {
    let scale = LinearScale::new(0.0, 10.0, 0.0, 100.0).expect("scale");
    assert_relative_eq!(scale.map(2.5), 25.0);
    assert_relative_eq!(scale.invert(25.0), 2.5);
    assert_relative_eq!(scale.map(12.0), 120.0);
}

#[test]
fn linear_scale_supports_flipped_pixel_range() {
    let scale = LinearScale::new(15.0, 25.0, 470.0, 0.0).expect("scale");
    assert_relative_eq!(scale.map(15.0), 470.0);
    assert_relative_eq!(scale.map(25.0), 0.0);
    assert_relative_eq!(scale.map(20.0), 235.0);
}

#[test]
fn collapsed_domain_maps_to_range_midpoint() {
    let scale = LinearScale::new(130.0, 130.0, 0.0, 510.0).expect("scale");
    assert_relative_eq!(scale.map(130.0), 255.0);
    assert_relative_eq!(scale.map(999.0), 255.0);
    assert_eq!(scale.ticks(10).as_slice(), &[130.0]);
}

#[test]
fn linear_scale_rejects_non_finite_bounds() {
    assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 1.0).is_err());
    assert!(LinearScale::new(0.0, 1.0, 0.0, f64::INFINITY).is_err());
    assert!(LinearScale::from_extent(Vec::<f64>::new(), 0.0, 1.0).is_err());
}

#[test]
fn from_extent_uses_min_and_max() {
    let scale = LinearScale::from_extent([93.0, 245.0, 62.0, 110.0], 0.0, 510.0).expect("scale");
    assert_eq!(scale.domain(), (62.0, 245.0));
}

#[test]
fn ticks_use_round_steps() {
    let hp = LinearScale::new(100.0, 200.0, 0.0, 510.0).expect("scale");
    let ticks = hp.ticks(10);
    assert_eq!(ticks.len(), 11);
    assert_relative_eq!(ticks[0], 100.0);
    assert_relative_eq!(ticks[10], 200.0);
    assert_relative_eq!(hp.tick_step(10), 10.0);

    let counts = LinearScale::new(0.0, 2.0, 470.0, 0.0).expect("scale");
    let ticks = counts.ticks(10);
    assert_eq!(ticks.len(), 11);
    assert_relative_eq!(ticks[1], 0.2, epsilon = 1e-12);
    assert_relative_eq!(counts.tick_step(10), 0.2, epsilon = 1e-12);
}

#[test]
fn descending_domain_yields_descending_ticks() {
    let scale = LinearScale::new(10.0, 0.0, 0.0, 100.0).expect("scale");
    let ticks = scale.ticks(5);
    assert!(ticks.windows(2).all(|pair| pair[0] > pair[1]));
}

#[test]
fn tick_labels_follow_step_precision() {
    assert_eq!(format_tick(100.0, 10.0), "100");
    assert_eq!(format_tick(0.2, 0.2), "0.2");
    assert_eq!(format_tick(1.0, 0.2), "1.0");
}

#[test]
fn band_scale_splits_range_with_padding() {
    let band = BandScale::new([4.0, 6.0, 8.0], 0.0, 510.0, 0.1).expect("band");
    let step = 510.0 / 3.1;
    assert_relative_eq!(band.step(), step, epsilon = 1e-9);
    assert_relative_eq!(band.bandwidth(), step * 0.9, epsilon = 1e-9);

    let first = band.position(4.0).expect("band for 4");
    let last = band.position(8.0).expect("band for 8");
    assert_relative_eq!(first, step * 0.1, epsilon = 1e-9);
    assert_relative_eq!(last + band.bandwidth(), 510.0 - step * 0.1, epsilon = 1e-9);
    assert_relative_eq!(
        band.center(6.0).expect("band for 6"),
        255.0,
        epsilon = 1e-9
    );
}

#[test]
fn band_scale_ignores_duplicates_and_unknown_categories() {
    let band = BandScale::new([4.0, 4.0, 8.0], 0.0, 100.0, 0.0).expect("band");
    assert_eq!(band.domain(), &[4.0, 8.0]);
    assert_relative_eq!(band.bandwidth(), 50.0);
    assert!(band.position(6.0).is_none());
}

#[test]
fn band_scale_rejects_padding_outside_unit_interval() {
    assert!(BandScale::new([4.0], 0.0, 100.0, 1.0).is_err());
    assert!(BandScale::new([4.0], 0.0, 100.0, -0.1).is_err());
    assert!(BandScale::new([f64::NAN], 0.0, 100.0, 0.1).is_err());
}
