//! CSV export for the canned reports.
//!
//! A report table is written out as plain CSV so the data can leave the
//! dashboard and land in a spreadsheet.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::views::ReportTable;

/// Errors that can occur while exporting a report.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot create '{path}': {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes a single report as CSV: header row first, then the data rows.
pub fn write_csv<W: Write>(
    report: &ReportTable,
    writer: W,
) -> Result<(), csv::Error> {
    let mut out = csv::Writer::from_writer(writer);
    write_records(&mut out, report)?;
    out.flush().map_err(csv::Error::from)?;
    Ok(())
}

fn write_records<W: Write>(
    out: &mut csv::Writer<W>,
    report: &ReportTable,
) -> Result<(), csv::Error> {
    out.write_record(&report.header)?;
    for row in &report.rows {
        out.write_record(row)?;
    }
    Ok(())
}

/// Writes one or more report tables to a file, each preceded by its title
/// row and separated by a blank record. Multi-table reports (the status
/// report) land in a single file.
pub fn export_to_file(
    reports: &[ReportTable],
    path: &Path,
) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.display().to_string(),
        source,
    })?;

    // Titles and headers have different widths, so the writer must accept
    // variable-length records.
    let mut out = csv::WriterBuilder::new().flexible(true).from_writer(file);

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            out.write_record([""])?;
        }
        out.write_record([report.title.as_str()])?;
        write_records(&mut out, report)?;
    }

    out.flush().map_err(csv::Error::from)?;
    info!(path = %path.display(), reports = reports.len(), "report exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::views::threshold_report;
    use kiddie_core::store::seed_accounts;

    #[test]
    fn write_csv_emits_header_then_rows() {
        let report = threshold_report(&seed_accounts(), dec!(2700));
        let mut buf = Vec::new();

        write_csv(&report, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Account ID,Minor Name"));
        assert!(lines[1].starts_with("UTMA001,John Smith Jr.,$3.9K,$1.2K"));
        assert!(lines[2].starts_with("UTMA004,Emma Wilson,$6.3K,$3.6K"));
    }

    #[test]
    fn write_csv_of_an_empty_report_is_just_the_header() {
        let report = threshold_report(&seed_accounts(), dec!(10000));
        let mut buf = Vec::new();

        write_csv(&report, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
