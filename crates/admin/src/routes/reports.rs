//! Report catalogue and CSV downloads.

use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};
use tracing::instrument;

use export_tracker_core::reports::{ReportKind, UnknownReport, build};

use crate::{error::AppError, export::CsvDownload, state::AppState};

use super::{PageContext, render};

/// Catalogue entry.
#[derive(Debug, Clone)]
pub struct ReportCardView {
    pub title: String,
    pub description: String,
    pub href: String,
}

impl From<ReportKind> for ReportCardView {
    fn from(kind: ReportKind) -> Self {
        Self {
            title: kind.title().to_string(),
            description: kind.description().to_string(),
            href: format!("/reports/{}", kind.slug()),
        }
    }
}

/// Reports page template.
#[derive(Template)]
#[template(path = "reports/index.html")]
pub struct ReportsTemplate {
    pub page: PageContext,
    pub reports: Vec<ReportCardView>,
}

/// Report catalogue page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let template = ReportsTemplate {
        page: PageContext::new(&state, "/reports"),
        reports: ReportKind::ALL.into_iter().map(ReportCardView::from).collect(),
    };
    render(&template)
}

/// Build and download one catalogue report as of today.
///
/// # Errors
///
/// Returns `404` for an unknown slug and `400` when the report has no rows.
#[instrument(skip(state))]
pub async fn download(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<CsvDownload, AppError> {
    let kind: ReportKind = slug
        .parse()
        .map_err(|e: UnknownReport| AppError::NotFound(e.to_string()))?;

    let data = state.data().snapshot().await?;
    let report = build(kind, &data.sources(), state.today());
    tracing::info!(report = kind.slug(), rows = report.rows.len(), "Report generated");
    Ok(CsvDownload::new(&report)?)
}
