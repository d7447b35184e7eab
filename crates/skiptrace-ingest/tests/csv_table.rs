use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use skiptrace_ingest::{IngestError, read_csv_from_reader, read_csv_table};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn reads_headers_and_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("leads.csv");
    fs::write(
        &path,
        "Mail House Number,Mail Street Name,Mail City,Mail State,Mail ZIP/ZIP+4\n\
         123,Main St,Springfield,IL,62704\n\
         ,,,,\n\
         9, Elm  Ave ,Shelbyville,IL,62565\n",
    )
    .expect("write csv");

    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(
        table.headers,
        vec![
            "Mail House Number",
            "Mail Street Name",
            "Mail City",
            "Mail State",
            "Mail ZIP/ZIP+4"
        ]
    );
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[1][1], " Elm  Ave ");
}

#[test]
fn quoted_cells_with_commas() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("quoted.csv");
    fs::write(&path, "HOUSE NUMBER,STREET NAME\n\"12\",\"Main St, Apt 4\"\n").expect("write csv");

    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.rows, vec![vec!["12".to_string(), "Main St, Apt 4".to_string()]]);
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_csv_table(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn header_only_file_has_no_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("header.csv");
    fs::write(&path, "CITY,STATE,ZIP\n").expect("write csv");

    let table = read_csv_table(&path).expect("read csv");
    assert!(table.is_empty());
    assert_eq!(table.upper_headers(), vec!["CITY", "STATE", "ZIP"]);
}

#[test]
fn skipped_blank_records_are_logged() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .finish();

    let data = "CITY,STATE\n,,\nSpringfield,IL\n , \n";
    let table = tracing::subscriber::with_default(subscriber, || {
        read_csv_from_reader(data.as_bytes(), "inline")
    })
    .expect("read csv");

    assert_eq!(table.len(), 1);
    let output = logs.contents();
    assert!(output.contains("skipped blank records"), "{output}");
    assert!(output.contains("skipped=2"), "{output}");
}
