use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `rows` (header excluded) to a temporary actions CSV.
pub fn actions_file(rows: &[[&str; 2]]) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    let mut wtr = csv::Writer::from_path(file.path()).unwrap();
    wtr.write_record(["action", "value"]).unwrap();
    for row in rows {
        wtr.write_record(row).unwrap();
    }
    wtr.flush().unwrap();
    file
}

#[allow(dead_code)]
pub fn write_product(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{json}").unwrap();
    file
}
