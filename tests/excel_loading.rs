use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use sheetpair::error::{Error, LoadError, TableError, TransformError};
use sheetpair::pipeline::{compute, series_schema};
use sheetpair::{Config, Table};

enum Value<'a> {
    Num(f64),
    Str(&'a str),
}

fn write_xlsx(path: &Path, sheet: &str, origin: (u32, u16), rows: &[&[Option<Value>]]) {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name(sheet).unwrap();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (r, c) = (origin.0 + r as u32, origin.1 + c as u16);
            match cell {
                Some(Value::Num(n)) => {
                    ws.write_number(r, c, *n).unwrap();
                }
                Some(Value::Str(s)) => {
                    ws.write_string(r, c, *s).unwrap();
                }
                None => {}
            }
        }
    }
    wb.save(path).unwrap();
}

fn n(v: f64) -> Option<Value<'static>> {
    Some(Value::Num(v))
}

fn s(v: &str) -> Option<Value<'_>> {
    Some(Value::Str(v))
}

fn header() -> [Option<Value<'static>>; 3] {
    [s("numberSetOne"), s("numberSetTwo"), s("wordSetOne")]
}

fn fixture_pair(dir: &TempDir) -> (PathBuf, PathBuf) {
    let first = dir.path().join("Data1.xlsx");
    let second = dir.path().join("Data2.xlsx");
    write_xlsx(
        &first,
        "Sheet1",
        (0, 0),
        &[
            &header(),
            &[n(2.0), n(100.0), s("foo")],
            &[n(3.0), n(20.0), s("bar")],
            &[n(4.0), n(9.0)],
        ],
    );
    write_xlsx(
        &second,
        "Sheet1",
        (0, 0),
        &[
            &header(),
            &[n(10.0), n(10.0), s("baz")],
            &[n(10.0), n(5.0), s("qux")],
            &[n(10.0), n(3.0)],
        ],
    );
    (first, second)
}

#[test]
fn computes_payload_from_two_workbooks() {
    let dir = TempDir::new().unwrap();
    let (first, second) = fixture_pair(&dir);

    let payload = compute(&Config::new(first, second).with_id("someone@example.com")).unwrap();

    assert_eq!(payload.id, "someone@example.com");
    assert_eq!(payload.number_set_one, vec![20, 30, 40]);
    assert_eq!(payload.number_set_two, vec![10, 4, 3]);
    assert_eq!(payload.word_set_one, vec!["foo baz", "bar qux"]);
}

#[test]
fn header_offset_and_undeclared_columns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("offset.xlsx");
    write_xlsx(
        &path,
        "Data",
        (2, 1),
        &[
            &[s("wordSetOne"), s("comment"), s("numberSetOne")],
            &[n(7.0), s("skip"), s("42")],
            &[s("word"), s("skip"), n(5.9)],
        ],
    );

    let table = Table::from_path(&path, &series_schema().unwrap(), None).unwrap();

    assert_eq!(table.column_count(), 2);
    assert!(table.column("comment").is_none());
    assert_eq!(table.text_at("wordSetOne", 0), Some("7.0"));
    assert_eq!(table.text_at("wordSetOne", 1), Some("word"));
    assert_eq!(table.integer_at("numberSetOne", 0), Some(42));
    assert_eq!(table.integer_at("numberSetOne", 1), Some(5));
    assert_eq!(table.length("numberSetTwo"), 0);
}

#[test]
fn parse_error_reports_sheet_row() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.xlsx");
    write_xlsx(
        &path,
        "Sheet1",
        (1, 0),
        &[&[s("numberSetOne")], &[n(1.0)], &[s("one")]],
    );

    match Table::from_path(&path, &series_schema().unwrap(), None) {
        Err(TableError::Parse { row, column, raw, .. }) => {
            assert_eq!(row, 4);
            assert_eq!(column, "numberSetOne");
            assert_eq!(raw, "one");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn named_sheet_must_exist() {
    let dir = TempDir::new().unwrap();
    let (first, _) = fixture_pair(&dir);

    let err = Table::from_path(&first, &series_schema().unwrap(), Some("Missing")).unwrap_err();
    assert!(matches!(err, TableError::Load(LoadError::SheetNotFound(name)) if name == "Missing"));

    let table = Table::from_path(&first, &series_schema().unwrap(), Some("Sheet1")).unwrap();
    assert_eq!(table.length("numberSetOne"), 3);
}

#[test]
fn length_mismatch_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    let (first, _) = fixture_pair(&dir);
    let short = dir.path().join("short.xlsx");
    write_xlsx(
        &short,
        "Sheet1",
        (0, 0),
        &[&header(), &[n(1.0), n(1.0), s("x")]],
    );

    let err = compute(&Config::new(first, short)).unwrap_err();
    assert!(matches!(
        err,
        Error::Transform(TransformError::LengthMismatch { left: 3, right: 1, .. })
    ));
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.xlsx");

    let err = Table::from_path(&missing, &series_schema().unwrap(), None).unwrap_err();
    assert!(matches!(err, TableError::Load(_)));
}
