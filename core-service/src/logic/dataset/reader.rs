use std::fs;
use std::path::Path;

use super::record::PatientRecord;
use super::{csv_header, DatasetError, DatasetFormat, COLUMN_COUNT};

/// Read a dataset file written by [`write_dataset`](super::write_dataset).
///
/// Blank lines are skipped. Line numbers in errors are 1-based and count
/// the header.
pub fn read_dataset(path: &Path, format: DatasetFormat) -> Result<Vec<PatientRecord>, DatasetError> {
    let content = fs::read_to_string(path)?;

    let records = match format {
        DatasetFormat::Csv => parse_csv(&content)?,
        DatasetFormat::Jsonl => parse_jsonl(&content)?,
    };

    log::info!("Read {} dataset records from {}", records.len(), path.display());
    Ok(records)
}

pub fn parse_csv(content: &str) -> Result<Vec<PatientRecord>, DatasetError> {
    let mut lines = content.lines().enumerate();
    let expected = csv_header();

    let header = lines.next().map(|(_, l)| l.trim_end_matches('\r')).unwrap_or("");
    if header != expected {
        return Err(DatasetError::Header {
            expected,
            found: header.to_string(),
        });
    }

    let mut records = Vec::new();
    for (idx, line) in lines {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_csv_row(line, idx + 1)?);
    }

    Ok(records)
}

fn parse_csv_row(line: &str, line_no: usize) -> Result<PatientRecord, DatasetError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != COLUMN_COUNT {
        return Err(DatasetError::Row {
            line: line_no,
            reason: format!("expected {} columns, found {}", COLUMN_COUNT, fields.len()),
        });
    }

    let mut row = [0.0f64; COLUMN_COUNT];
    for (i, field) in fields.iter().enumerate() {
        row[i] = field.trim().parse::<f64>().map_err(|e| DatasetError::Row {
            line: line_no,
            reason: format!("column {}: {:?}: {}", i + 1, field, e),
        })?;
    }

    Ok(PatientRecord::from_row(row))
}

pub fn parse_jsonl(content: &str) -> Result<Vec<PatientRecord>, DatasetError> {
    let mut records = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str::<PatientRecord>(line).map_err(|e| DatasetError::Row {
            line: idx + 1,
            reason: e.to_string(),
        })?;
        records.push(record);
    }

    Ok(records)
}
