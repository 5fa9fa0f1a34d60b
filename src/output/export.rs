//! CSV and JSON writers for ranked fantasy averages.
//!
//! Both files carry the same records in the same order; existing files are
//! overwritten.

use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};

use crate::Result;

use super::{FantasyAverage, OUTPUT_HEADERS};

fn create_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Write records as CSV with a header row to any writer.
///
/// The header is written even when there are no records.
pub fn write_csv_to<W: Write>(writer: W, records: &[FantasyAverage]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(OUTPUT_HEADERS)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write records as a JSON array of objects to any writer.
pub fn write_json_to<W: Write>(writer: W, records: &[FantasyAverage]) -> Result<()> {
    let mut writer = writer;
    serde_json::to_writer(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

pub fn write_csv(path: &Path, records: &[FantasyAverage]) -> Result<()> {
    create_parent_dir(path)?;
    let file = fs::File::create(path)?;
    write_csv_to(BufWriter::new(file), records)
}

pub fn write_json(path: &Path, records: &[FantasyAverage]) -> Result<()> {
    create_parent_dir(path)?;
    let file = fs::File::create(path)?;
    write_json_to(BufWriter::new(file), records)
}
