use std::fs;
use std::sync::Arc;

use geo_wkx::error::WkxError;
use geo_wkx::io::settings::{Encoding, WkbWriterSettings};
use geo_wkx::io::wkb::{WkbReader, WkbWriter};
use geo_wkx::io::wkt::{parse_wkt, WktReader, WktWriter};
use geo_wkx::Geometry;

fn sample() -> Vec<Geometry> {
    [
        "point (-10.1 15.5)",
        "linestring z (-10.1 15.5 100.5, 20.2 -25.5 200.5)",
        "polygon m empty",
        "geometrycollection (multipoint ((1.0 2.0),empty),point empty)",
    ]
    .into_iter()
    .map(|wkt| parse_wkt(wkt).unwrap())
    .collect()
}

#[test]
fn wkb_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("geometries.wkb");

    let mut writer = WkbWriter::create(&path, Arc::new(WkbWriterSettings::new())).unwrap();
    for geometry in sample() {
        writer.write(&geometry).unwrap();
    }
    writer.finish().unwrap();

    let read = WkbReader::open(&path)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(read, sample());
}

#[test]
fn wkb_writer_flushes_on_drop() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dropped.wkb");
    {
        let mut writer = WkbWriter::create(&path, Arc::new(WkbWriterSettings::new())).unwrap();
        writer.write(&sample()[0]).unwrap();
    }
    assert_eq!(fs::metadata(&path).unwrap().len(), 21);
}

#[test]
fn create_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("existing.wkb");
    fs::write(&path, vec![0xFF; 100]).unwrap();

    let writer = WkbWriter::create(&path, Arc::new(WkbWriterSettings::new())).unwrap();
    writer.finish().unwrap();
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn big_endian_does_not_create_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.wkb");
    let settings = Arc::new(WkbWriterSettings::new().with_encoding(Encoding::BigEndian));

    let err = WkbWriter::create(&path, settings).unwrap_err();
    assert!(matches!(err, WkxError::NotSupported(_)));
    assert!(!path.exists());
}

#[test]
fn empty_path_is_an_argument_error() {
    let err = WkbWriter::create("", Arc::new(WkbWriterSettings::new())).unwrap_err();
    assert!(matches!(err, WkxError::InvalidArgument(_)));
    assert!(matches!(
        WktReader::open("").err(),
        Some(WkxError::InvalidArgument(_))
    ));
}

#[test]
fn wkt_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("geometries.wkt");

    let mut writer = WktWriter::create(&path).unwrap();
    for geometry in sample() {
        writer.write(&geometry).unwrap();
    }
    writer.finish().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert_eq!(text.lines().next(), Some("point (-10.1 15.5)"));

    let read = WktReader::open(&path)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(read, sample());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = WkbReader::open(dir.path().join("missing.wkb")).err();
    assert!(matches!(err, Some(WkxError::IOError(_))));
}
