//! End-to-end checks across distances, boxes and polygons.

use geokit::{
    distance_haversine, BoundingBox, Coordinate, Distance, ErrorKind, GeoError, Polygon,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn box_polygon_round_trip() {
    init_tracing();

    let bbox = BoundingBox::new(Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 10.0)).unwrap();
    let polygon = bbox.to_polygon();

    assert_eq!(polygon.len(), 5);
    assert!(polygon.is_closed());
    assert_eq!(polygon.to_bounding_box().unwrap(), bbox);
    assert!(polygon.contains(&bbox.center()));
}

#[test]
fn expanded_box_edges_sit_at_the_requested_distance() {
    init_tracing();

    let bbox = BoundingBox::new(Coordinate::new(40.0, -75.0), Coordinate::new(41.0, -73.0)).unwrap();
    let distance = Distance::from_string("25 km").unwrap();
    let expanded = bbox.expand(distance);

    let south_gap = distance_haversine(
        &bbox.south_west(),
        &Coordinate::new(expanded.south_west().latitude, bbox.south_west().longitude),
    );
    let east_gap = distance_haversine(
        &bbox.north_east(),
        &Coordinate::new(bbox.north_east().latitude, expanded.north_east().longitude),
    );

    assert!((south_gap.meters() - 25_000.0).abs() < 0.01, "{}", south_gap);
    // Heading east bends the great circle towards the equator, so the gap
    // measured along the original parallel comes out a little short.
    assert!(east_gap.meters() <= 25_000.0 + 0.01, "{}", east_gap);
    assert!(east_gap.meters() > 24_900.0, "{}", east_gap);

    let restored = expanded.shrink(distance);
    assert!((restored.south_west().latitude - 40.0).abs() < 1e-9);
    assert!((restored.north_east().latitude - 41.0).abs() < 1e-9);
}

#[test]
fn polygon_built_from_box_across_antimeridian_misreads_containment() {
    init_tracing();

    let bbox = BoundingBox::new(Coordinate::new(-10.0, 170.0), Coordinate::new(10.0, -170.0)).unwrap();
    let on_antimeridian = Coordinate::new(0.0, 180.0);

    assert!(bbox.contains(&on_antimeridian));
    assert!(!bbox.to_polygon().contains(&on_antimeridian));
}

#[test]
fn errors_are_classified() {
    init_tracing();

    let unit = Distance::new(1000.0, "foo").unwrap_err();
    let parse = Distance::from_string("1000foo").unwrap_err();
    let inverted = BoundingBox::new(Coordinate::new(10.0, 0.0), Coordinate::new(0.0, 0.0)).unwrap_err();
    let empty = Polygon::empty().to_bounding_box().unwrap_err();

    assert_eq!(unit.kind(), ErrorKind::InvalidArgument);
    assert_eq!(parse.kind(), ErrorKind::InvalidArgument);
    assert_eq!(inverted.kind(), ErrorKind::Logic);
    assert_eq!(empty, GeoError::EmptyPolygon);
}

#[test]
fn union_of_polygon_bounds() {
    let west = Polygon::from_pairs(&[(0.0, 170.0), (5.0, 175.0), (-5.0, 172.0)]).unwrap();
    let east = Polygon::from_pairs(&[(2.0, -175.0), (8.0, -172.0)]).unwrap();

    let a = west.to_bounding_box().unwrap();
    let b = east.to_bounding_box().unwrap();
    let union = a.union(&b);

    assert_eq!(union, b.union(&a));
    assert!(union.crosses_antimeridian());
    assert_eq!(union.south_west(), Coordinate::new(-5.0, 170.0));
    assert_eq!(union.north_east(), Coordinate::new(8.0, -172.0));
}
