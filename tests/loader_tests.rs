use std::path::PathBuf;

use linked_views::LoadError;
use linked_views::core::CategoryCount;
use linked_views::core::aggregate;
use linked_views::data::{LoadOptions, load_path, load_reader};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn loads_numeric_columns_and_keeps_the_rest() {
    let input = "model,hp,mpg,cyl\nDatsun 710,93,22.8,4\nDuster 360,245,14.3,8\n";
    let store = load_reader(input.as_bytes(), LoadOptions::default()).expect("load csv");

    assert_eq!(store.len(), 2);
    let first = &store.records()[0];
    assert_eq!(first.horsepower, 93.0);
    assert_eq!(first.mpg, 22.8);
    assert_eq!(first.cylinders, 4.0);
    assert_eq!(first.extra.get("model").map(String::as_str), Some("Datsun 710"));
    assert!(!first.extra.contains_key("hp"));
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let input = " hp , mpg , cyl \n 110 , 21 , 6 \n";
    let store = load_reader(input.as_bytes(), LoadOptions::default()).expect("load csv");
    assert_eq!(store.records()[0].horsepower, 110.0);
}

#[test]
fn custom_delimiter_is_honoured() {
    let input = "hp;mpg;cyl\n110;21;6\n";
    let options = LoadOptions::default().with_delimiter(b';');
    let store = load_reader(input.as_bytes(), options).expect("load csv");
    assert_eq!(store.records()[0].cylinders, 6.0);
}

#[test]
fn missing_required_column_is_reported() {
    let input = "hp,cyl\n110,6\n";
    let err = load_reader(input.as_bytes(), LoadOptions::default()).expect_err("must fail");
    assert!(matches!(err, LoadError::MissingColumn { column: "mpg" }));
}

#[test]
fn unparsable_field_reports_row_and_column() {
    let input = "hp,mpg,cyl\n110,21,6\n?,19.2,6\n";
    let err = load_reader(input.as_bytes(), LoadOptions::default()).expect_err("must fail");
    match err {
        LoadError::InvalidField { row, column, value } => {
            assert_eq!(row, 2);
            assert_eq!(column, "hp");
            assert_eq!(value, "?");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_finite_field_is_rejected() {
    let input = "hp,mpg,cyl\n110,NaN,6\n";
    let err = load_reader(input.as_bytes(), LoadOptions::default()).expect_err("must fail");
    assert!(matches!(err, LoadError::InvalidField { column: "mpg", .. }));
}

#[test]
fn header_only_input_is_an_empty_dataset() {
    let input = "hp,mpg,cyl\n";
    let err = load_reader(input.as_bytes(), LoadOptions::default()).expect_err("must fail");
    assert!(matches!(err, LoadError::EmptyDataset));
}

#[test]
fn ragged_rows_surface_as_csv_errors() {
    let input = "hp,mpg,cyl\n110,21,6,extra\n";
    let err = load_reader(input.as_bytes(), LoadOptions::default()).expect_err("must fail");
    assert!(matches!(err, LoadError::Csv(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_path(fixture("does_not_exist.csv"), LoadOptions::default())
        .expect_err("must fail");
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn sample_fixture_aggregates_by_cylinders() {
    let store = load_path(fixture("cars_sample.csv"), LoadOptions::default()).expect("fixture");
    assert_eq!(store.len(), 10);
    assert_eq!(store.horsepower_extent(), (62.0, 245.0));
    assert_eq!(store.mpg_extent(), (14.3, 24.4));
    assert_eq!(
        aggregate(store.records()),
        vec![
            CategoryCount::new(4.0, 3),
            CategoryCount::new(6.0, 5),
            CategoryCount::new(8.0, 2),
        ]
    );
}
