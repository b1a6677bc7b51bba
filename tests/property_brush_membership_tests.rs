use linked_views::core::{CarRecord, LinearScale, RecordStore, SelectionRegion, aggregate};
use linked_views::interaction::{Membership, PointProjector};
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = CarRecord> {
    (40.0f64..250.0, 8.0f64..48.0, 3u8..9)
        .prop_map(|(hp, mpg, cyl)| CarRecord::new(hp, mpg, f64::from(cyl)))
}

fn region_strategy() -> impl Strategy<Value = SelectionRegion> {
    (-50.0f64..560.0, -50.0f64..560.0, -50.0f64..520.0, -50.0f64..520.0)
        .prop_map(|(x0, x1, y0, y1)| SelectionRegion::from_corners(x0, y0, x1, y1))
}

fn projector_for(store: &RecordStore) -> PointProjector {
    let (hp_min, hp_max) = store.horsepower_extent();
    let (mpg_min, mpg_max) = store.mpg_extent();
    PointProjector::new(
        LinearScale::new(hp_min, hp_max, 0.0, 510.0).expect("x scale"),
        LinearScale::new(mpg_min, mpg_max, 470.0, 0.0).expect("y scale"),
    )
}

proptest! {
    #[test]
    fn filtered_aggregate_is_bounded_by_baseline(
        records in prop::collection::vec(record_strategy(), 1..120),
        region in region_strategy()
    ) {
        let store = RecordStore::from_records(records).expect("valid records");
        let projector = projector_for(&store);
        let membership = Membership::from_region(&store, projector, region);

        let baseline = aggregate(store.records());
        let filtered = aggregate(membership.filter(&store));

        prop_assert_eq!(
            filtered.iter().map(|entry| entry.count).sum::<usize>(),
            membership.selected_count()
        );
        for entry in &filtered {
            let base = baseline
                .iter()
                .find(|candidate| candidate.category == entry.category)
                .expect("filtered category exists in baseline");
            prop_assert!(entry.count <= base.count);
        }
    }

    #[test]
    fn selected_records_project_inside_region(
        records in prop::collection::vec(record_strategy(), 1..120),
        region in region_strategy()
    ) {
        let store = RecordStore::from_records(records).expect("valid records");
        let projector = projector_for(&store);
        let membership = Membership::from_region(&store, projector, region);

        for (id, record) in store.iter() {
            let (x, y) = projector.project(record);
            prop_assert_eq!(membership.is_selected(id), region.contains(x, y));
        }
    }

    #[test]
    fn enlarging_region_never_drops_records(
        records in prop::collection::vec(record_strategy(), 1..120),
        region in region_strategy(),
        grow in (0.0f64..100.0, 0.0f64..100.0, 0.0f64..100.0, 0.0f64..100.0)
    ) {
        let store = RecordStore::from_records(records).expect("valid records");
        let projector = projector_for(&store);
        let (left, right, top, bottom) = grow;
        let larger = SelectionRegion::new(
            region.x_min - left,
            region.x_max + right,
            region.y_min - top,
            region.y_max + bottom,
        );

        let inner = Membership::from_region(&store, projector, region);
        let outer = Membership::from_region(&store, projector, larger);

        prop_assert!(inner.selected_count() <= outer.selected_count());
        for id in inner.selected_ids() {
            prop_assert!(outer.is_selected(id));
        }
    }

    #[test]
    fn growing_sides_to_infinity_never_drops_records(
        records in prop::collection::vec(record_strategy(), 1..120),
        region in region_strategy(),
        open in (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>())
    ) {
        let store = RecordStore::from_records(records).expect("valid records");
        let projector = projector_for(&store);
        let side = |unbounded: bool, bound: f64, infinity: f64| {
            if unbounded { infinity } else { bound }
        };
        let (left, right, top, bottom) = open;
        let larger = SelectionRegion::new(
            side(left, region.x_min, f64::NEG_INFINITY),
            side(right, region.x_max, f64::INFINITY),
            side(top, region.y_min, f64::NEG_INFINITY),
            side(bottom, region.y_max, f64::INFINITY),
        );

        let inner = Membership::from_region(&store, projector, region);
        let outer = Membership::from_region(&store, projector, larger);

        for id in inner.selected_ids() {
            prop_assert!(outer.is_selected(id));
        }
    }

    #[test]
    fn unbounded_region_selects_every_record(
        records in prop::collection::vec(record_strategy(), 1..120)
    ) {
        let store = RecordStore::from_records(records).expect("valid records");
        let everything = SelectionRegion::new(
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
        );
        let membership = Membership::from_region(&store, projector_for(&store), everything);
        prop_assert_eq!(membership.selected_count(), store.len());
    }
}
