//! Tests for CSV loading from disk.

use std::fs;

use pledge_ingest::{IngestError, ensure_data_rows, parse_patrons, read_csv_rows};

const HEADER: &str = "Name,Email,Discord,Patron Status,Follows You,Free Member,Free Trial,\
Lifetime Amount,Pledge Amount,Charge Frequency,Tier,Addressee,Street,City,State,Zip,Country,\
Phone,Patronage Since Date,Last Charge Date,Last Charge Status,Additional Details,User ID,\
Last Updated,Currency,Max Posts,Access Expiration,Next Charge Date,Full country name,\
Subscription Source";

fn data_row(name: &str, tier: &str, status: &str) -> String {
    let mut fields = vec![String::new(); 30];
    fields[0] = name.to_string();
    fields[10] = tier.to_string();
    fields[20] = status.to_string();
    fields.join(",")
}

#[test]
fn reads_export_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("pledges.csv");
    let contents = format!(
        "{HEADER}\n{}\n{}\nshort,row\n",
        data_row("Alice", "Gold", "Paid"),
        data_row("Bob", "Free", "Paid")
    );
    fs::write(&path, contents).expect("write csv");

    let rows = read_csv_rows(&path).expect("read csv");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0][0], "Name");
    ensure_data_rows(&rows, &path).expect("has data rows");

    let parsed = parse_patrons(&rows);
    assert_eq!(parsed.patrons.len(), 2);
    assert_eq!(parsed.free_tier, 1);
    assert_eq!(parsed.skipped_rows, 1);
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.csv");
    let err = read_csv_rows(&path).expect_err("missing file");
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn header_only_export_is_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("pledges.csv");
    fs::write(&path, format!("{HEADER}\n")).expect("write csv");

    let rows = read_csv_rows(&path).expect("read csv");
    let err = ensure_data_rows(&rows, &path).expect_err("no data rows");
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}

#[test]
fn latin1_name_does_not_abort_the_read() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("pledges.csv");
    let mut contents = format!("{HEADER}\n").into_bytes();
    contents.extend_from_slice(data_row("Jos\u{0}", "Gold", "Paid").as_bytes());
    contents.push(b'\n');
    // Latin-1 'é' in place of the NUL placeholder.
    let placeholder = contents.iter().position(|byte| *byte == 0).expect("placeholder");
    contents[placeholder] = 0xE9;
    fs::write(&path, contents).expect("write csv");

    let rows = read_csv_rows(&path).expect("read csv");
    let parsed = parse_patrons(&rows);
    assert_eq!(parsed.patrons.len(), 1);
    assert_eq!(parsed.patrons[0].name, "Jos\u{FFFD}");
    assert_eq!(parsed.patrons[0].tier, "Gold");
}
