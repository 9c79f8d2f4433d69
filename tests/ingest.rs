//! Ingest real las files written with the `las` crate.

use las::{Builder, Color, Point, Writer, point::Classification, point::Format};
use las_ingest::{Error, PointCloud};
use tempfile::NamedTempFile;

fn write(format: u8, points: &[Point]) -> NamedTempFile {
    let tempfile = NamedTempFile::new().unwrap();
    let mut builder = Builder::from((1, 2));
    builder.point_format = Format::new(format).unwrap();
    let mut writer = Writer::from_path(tempfile.path(), builder.into_header().unwrap()).unwrap();
    writer.write_points(points).unwrap();
    writer.close().unwrap();
    tempfile
}

fn ten_points(low_points: &[usize], color: Option<Color>) -> Vec<Point> {
    (0..10)
        .map(|i| Point {
            x: 100. + i as f64,
            y: 200. - i as f64,
            z: i as f64 / 4.,
            classification: if low_points.contains(&i) {
                Classification::LowPoint
            } else {
                Classification::Ground
            },
            color,
            ..Default::default()
        })
        .collect()
}

#[test]
fn ten_points_two_low() {
    let tempfile = write(0, &ten_points(&[2, 7], None));
    let mut cloud = PointCloud::open(tempfile.path()).unwrap();
    assert_eq!(10, cloud.declared_point_count());

    assert_eq!(8, cloud.ingest(true).unwrap());
    assert!(!cloud.has_colors());
    assert!(cloud.colors().is_empty());

    assert_eq!(10, cloud.ingest(false).unwrap());
    assert!(!cloud.has_colors());
    assert!(cloud.colors().is_empty());
    cloud.close();
}

#[test]
fn open_nonexistent() {
    let err = PointCloud::open("tests/data/nonexistent.las").unwrap_err();
    assert!(matches!(err, Error::Open { .. }));
}

#[test]
fn bounds_come_from_the_header() {
    let tempfile = write(0, &ten_points(&[0, 9], None));
    let mut cloud = PointCloud::open(tempfile.path()).unwrap();
    let bounds = *cloud.bounds();
    assert_eq!([100., 191., 0., 109., 200., 2.25], bounds);

    // the extreme points are low points, the bounds still cover them
    assert_eq!(8, cloud.ingest(true).unwrap());
    assert_eq!(&bounds, cloud.bounds());
    let min_x = cloud
        .positions()
        .chunks_exact(3)
        .map(|xyz| xyz[0])
        .fold(f32::INFINITY, f32::min);
    assert_eq!(101., min_x);
}

#[test]
fn ingest_is_idempotent() {
    let tempfile = write(2, &ten_points(&[4], Some(Color::new(1000, 20000, 65535))));
    let mut cloud = PointCloud::open(tempfile.path()).unwrap();
    for filter_noise in [true, false] {
        let count = cloud.ingest(filter_noise).unwrap();
        let positions = cloud.positions().to_vec();
        let colors = cloud.colors().to_vec();
        assert_eq!(count, cloud.ingest(filter_noise).unwrap());
        assert_eq!(positions, cloud.positions());
        assert_eq!(colors, cloud.colors());
    }
}

#[test]
fn filtering_never_keeps_more() {
    let tempfile = write(0, &ten_points(&[1, 3, 5], None));
    let mut cloud = PointCloud::open(tempfile.path()).unwrap();
    let unfiltered = cloud.ingest(false).unwrap();
    let filtered = cloud.ingest(true).unwrap();
    assert_eq!(10, unfiltered);
    assert_eq!(7, filtered);
    assert!(cloud.declared_point_count() >= unfiltered);
}

#[test]
fn colors() {
    let tempfile = write(3, &{
        let mut points = ten_points(&[], Some(Color::new(0, 257, 65535)));
        for point in &mut points {
            point.gps_time = Some(1.);
        }
        points
    });
    let mut cloud = PointCloud::open(tempfile.path()).unwrap();
    assert!(cloud.header().has_color);
    assert_eq!(10, cloud.ingest(true).unwrap());
    assert!(cloud.has_colors());
    assert_eq!(4 * 10, cloud.colors().len());
    for rgba in cloud.colors().chunks_exact(4) {
        assert_eq!(&[0, 1, 255, 0], rgba);
    }
}

#[test]
fn positions_are_interleaved() {
    let tempfile = write(0, &ten_points(&[], None));
    let mut cloud = PointCloud::open(tempfile.path()).unwrap();
    cloud.ingest(false).unwrap();
    assert_eq!(30, cloud.positions().len());
    assert_eq!(&[103., 197., 0.75], &cloud.positions()[9..12]);
}

#[test]
fn empty_file() {
    let tempfile = write(2, &[]);
    let mut cloud = PointCloud::open(tempfile.path()).unwrap();
    assert_eq!(0, cloud.declared_point_count());
    assert_eq!(0, cloud.ingest(true).unwrap());
    assert!(!cloud.has_colors());
    assert!(cloud.positions().is_empty());
}
