//! CSV downloads of reports and list pages.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use export_tracker_core::reports::Report;

/// Errors writing a report out.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The report has no data rows.
    #[error("No data to export")]
    Empty,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize a report as CSV: one header row, then one row per record.
///
/// # Errors
///
/// Returns `ExportError::Empty` if the report has no rows, or a CSV/I/O
/// error if writing fails.
pub fn to_csv(report: &Report) -> Result<Vec<u8>, ExportError> {
    if report.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&report.headers)?;
    for row in &report.rows {
        writer.write_record(row.iter().map(ToString::to_string))?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

/// Download file name for a report.
#[must_use]
pub fn file_name(report: &Report) -> String {
    format!("{}.csv", report.file_stem)
}

/// A report rendered as a `text/csv` attachment.
#[derive(Debug)]
pub struct CsvDownload {
    file_name: String,
    body: Vec<u8>,
}

impl CsvDownload {
    /// Render `report` for download.
    ///
    /// # Errors
    ///
    /// See [`to_csv`].
    pub fn new(report: &Report) -> Result<Self, ExportError> {
        Ok(Self {
            file_name: file_name(report),
            body: to_csv(report)?,
        })
    }
}

impl IntoResponse for CsvDownload {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", self.file_name);
        (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.body,
        )
            .into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use export_tracker_core::reports::{ReportKind, ReportSources, build};

    use super::*;
    use crate::db::fixtures::fixtures;
    use crate::db::{DataSource, DemoStore};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn test_empty_report_is_rejected() {
        let report = build(ReportKind::OrderSummary, &ReportSources::default(), today());
        let err = to_csv(&report).unwrap_err();
        assert!(matches!(err, ExportError::Empty));
        assert_eq!(err.to_string(), "No data to export");
    }

    #[tokio::test]
    async fn test_report_csv_has_header_and_rows() {
        assert!(!fixtures(today()).orders.is_empty());
        let source = DataSource::Demo(DemoStore::seeded(today()));
        let snapshot = source.snapshot().await.unwrap();
        let report = build(ReportKind::OrderSummary, &snapshot.sources(), today());

        let csv = String::from_utf8(to_csv(&report).unwrap()).unwrap();
        let mut lines = csv.lines();
        let header = lines.next().unwrap();
        assert_eq!(header, report.headers.join(","));
        assert_eq!(lines.count(), snapshot.orders.len());
        assert!(csv.contains("EXP-2026-001"));
        assert_eq!(file_name(&report), "order-summary-report.csv");
    }

    #[test]
    fn test_download_headers() {
        let mut report = build(ReportKind::OrderSummary, &ReportSources::default(), today());
        report.rows.push(vec![
            export_tracker_core::reports::Cell::text("x");
            report.headers.len()
        ]);
        let response = CsvDownload::new(&report).unwrap().into_response();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/csv; charset=utf-8"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"order-summary-report.csv\""
        );
    }
}
