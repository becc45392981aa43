use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::record::PatientRecord;
use super::{csv_header, DatasetError, DatasetFormat};

/// Write records to `path`, replacing any existing file.
///
/// Floats use Rust's shortest round-trip formatting, so the same records
/// always produce the same bytes and re-reading is exact.
pub fn write_dataset(
    path: &Path,
    records: &[PatientRecord],
    format: DatasetFormat,
) -> Result<usize, DatasetError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = BufWriter::new(File::create(path)?);

    match format {
        DatasetFormat::Csv => write_csv(&mut file, records)?,
        DatasetFormat::Jsonl => {
            for record in records {
                writeln!(file, "{}", serde_json::to_string(record)?)?;
            }
        }
    }

    file.flush()?;
    log::info!(
        "Wrote {} dataset records ({}) to {}",
        records.len(),
        format.as_str(),
        path.display()
    );
    Ok(records.len())
}

fn write_csv(file: &mut impl Write, records: &[PatientRecord]) -> std::io::Result<()> {
    writeln!(file, "{}", csv_header())?;

    for r in records {
        writeln!(
            file,
            "{},{},{},{},{},{}",
            r.heart_rate,
            r.oxygen_level,
            r.temperature,
            r.blood_pressure,
            r.respiratory_rate,
            r.risk_score
        )?;
    }

    Ok(())
}
