use std::fs;

use tempfile::tempdir;

use super::*;

#[test]
fn reads_rows_in_file_order() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("crops.csv");
    fs::write(&path, "id,CropName\n1,Wheat\n2,Barley\n").expect("write");

    let mut rows = read_rows(&path).expect("read");
    assert_eq!(rows.headers(), ["id", "CropName"]);

    let first = rows.next().expect("first").expect("row");
    assert_eq!(
        first.iter().collect::<Vec<_>>(),
        [("id", "1"), ("CropName", "Wheat")]
    );
    let second = rows.next().expect("second").expect("row");
    assert_eq!(
        second.iter().collect::<Vec<_>>(),
        [("id", "2"), ("CropName", "Barley")]
    );
    assert!(rows.next().is_none());
}

#[test]
fn strips_bom_from_first_header() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("croptypes.csv");
    fs::write(&path, "\u{feff}id,Name\n1,Wheat\n").expect("write");

    let rows = read_rows(&path).expect("read");
    assert_eq!(rows.headers(), ["id", "Name"]);
}

#[test]
fn values_keep_their_whitespace() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("crops.csv");
    fs::write(&path, "id,Name\n1, Wheat \n").expect("write");

    let mut rows = read_rows(&path).expect("read");
    let row = rows.next().expect("row").expect("row");
    assert_eq!(row.iter().collect::<Vec<_>>(), [("id", "1"), ("Name", " Wheat ")]);
}

#[test]
fn column_count_mismatch_is_malformed() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("crops.csv");
    fs::write(&path, "id,Name,CoverCrop\n1,Wheat\n").expect("write");

    let mut rows = read_rows(&path).expect("read");
    let err = rows.next().expect("row").expect_err("must fail");
    assert!(matches!(
        err,
        InputError::MalformedRow {
            line: 2,
            expected: 3,
            found: 2,
        }
    ));
}

#[test]
fn header_only_export_yields_no_rows() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("crops.csv");
    fs::write(&path, "id,Name\n").expect("write");

    let mut rows = read_rows(&path).expect("read");
    assert!(rows.next().is_none());
}

#[test]
fn empty_export_yields_no_rows() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("crops.csv");
    fs::write(&path, "").expect("write");

    let mut rows = read_rows(&path).expect("read");
    assert!(rows.next().is_none());
}

#[cfg(feature = "gz")]
#[test]
fn reads_gzipped_exports() {
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("crops.csv.gz");
    let file = fs::File::create(&path).expect("create");
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(b"id,CropName\n1,Wheat\n").expect("write");
    encoder.finish().expect("finish");

    let mut rows = read_rows(&path).expect("read");
    let row = rows.next().expect("row").expect("row");
    assert_eq!(row.iter().collect::<Vec<_>>(), [("id", "1"), ("CropName", "Wheat")]);
}
