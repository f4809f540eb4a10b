//! Request handlers for the dashboard API

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use duel_application::RunComparisonUseCase;
use duel_domain::{
    ComparisonResult, DomainError, FormattedRecord, MetricsCatalog, Model, ModelResponse,
    Question, Subject, SubjectTable,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};

use super::page;
use crate::progress::reporter::LogProgress;

/// Shared state of the dashboard server
pub struct AppState {
    /// Comparison use case, built once with the injected clients
    pub comparison: Arc<RunComparisonUseCase>,
    /// Precomputed evaluation tables
    pub catalog: Arc<MetricsCatalog>,
}

/// Error body returned by the JSON API
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Rejections produced by the handlers
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    Page(minijinja::Error),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<minijinja::Error> for ApiError {
    fn from(err: minijinja::Error) -> Self {
        Self::Page(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(err) => {
                let status = match err {
                    DomainError::EmptyQuestion => StatusCode::UNPROCESSABLE_ENTITY,
                    DomainError::UnknownSubject(_) => StatusCode::NOT_FOUND,
                    DomainError::InvalidExecutionMode(_) => StatusCode::BAD_REQUEST,
                };
                (status, err.to_string())
            }
            Self::Page(err) => {
                error!("Failed to render dashboard page: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to render dashboard page".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Row of the cross-subject bar chart
#[derive(Debug, Serialize)]
pub struct SubjectSummaryView {
    pub subject: Subject,
    pub title: &'static str,
    pub cloud: f64,
    pub local: f64,
}

/// Scores of both models along a list of metrics
#[derive(Debug, Default, Serialize)]
pub struct ChartSeries {
    pub metrics: Vec<&'static str>,
    pub cloud: Vec<f64>,
    pub local: Vec<f64>,
}

impl ChartSeries {
    fn from_records<'a>(records: impl Iterator<Item = &'a duel_domain::MetricsRecord>) -> Self {
        records.fold(Self::default(), |mut series, record| {
            series.metrics.push(record.metric.as_str());
            series.cloud.push(record.cloud_score);
            series.local.push(record.local_score);
            series
        })
    }
}

/// One subject table ready for display
#[derive(Debug, Serialize)]
pub struct MetricsTableView {
    pub subject: Subject,
    pub title: &'static str,
    pub rows: Vec<FormattedRecord>,
    /// Every metric except the final score
    pub radar: ChartSeries,
    pub bar: ChartSeries,
}

impl From<&SubjectTable> for MetricsTableView {
    fn from(table: &SubjectTable) -> Self {
        Self {
            subject: table.subject,
            title: table.subject.title(),
            rows: table.formatted_rows(),
            radar: ChartSeries::from_records(table.radar_records()),
            bar: ChartSeries::from_records(table.records.iter()),
        }
    }
}

/// Body of `POST /api/compare`
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub question: String,
}

/// One model's answer as shown in the "Try Models" tab
#[derive(Debug, Serialize)]
pub struct ResponseView {
    pub model: String,
    pub display_name: String,
    pub text: String,
    pub elapsed_seconds: f64,
    /// Two decimals, as rendered next to the answer
    pub elapsed_display: String,
    pub succeeded: bool,
}

impl From<&ModelResponse> for ResponseView {
    fn from(response: &ModelResponse) -> Self {
        let Ok(model) = response.model.parse::<Model>();
        Self {
            model: response.model.clone(),
            display_name: model.display_name().to_string(),
            text: response.text.clone(),
            elapsed_seconds: response.elapsed_seconds,
            elapsed_display: response.formatted_elapsed(),
            succeeded: response.succeeded,
        }
    }
}

/// Response of `POST /api/compare`, cloud first
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub question: String,
    pub mode: String,
    pub cloud: ResponseView,
    pub local: ResponseView,
}

impl From<&ComparisonResult> for CompareResponse {
    fn from(result: &ComparisonResult) -> Self {
        Self {
            question: result.question.clone(),
            mode: result.mode.to_string(),
            cloud: ResponseView::from(&result.cloud),
            local: ResponseView::from(&result.local),
        }
    }
}

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let html = page::render(
        state.comparison.cloud_model(),
        state.comparison.local_model(),
    )?;
    Ok(Html(html))
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "math-duel",
    }))
}

pub async fn list_subjects(State(state): State<Arc<AppState>>) -> Json<Vec<SubjectSummaryView>> {
    let rows = state
        .catalog
        .subject_summary()
        .into_iter()
        .map(|summary| SubjectSummaryView {
            subject: summary.subject,
            title: summary.subject.title(),
            cloud: summary.cloud,
            local: summary.local,
        })
        .collect();
    Json(rows)
}

pub async fn list_metrics(State(state): State<Arc<AppState>>) -> Json<Vec<MetricsTableView>> {
    Json(
        state
            .catalog
            .tables()
            .iter()
            .map(MetricsTableView::from)
            .collect(),
    )
}

pub async fn get_metrics(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<MetricsTableView>, ApiError> {
    debug!("Metrics requested for {}", slug);

    let subject: Subject = slug.parse()?;
    let table = state
        .catalog
        .table(subject)
        .ok_or_else(|| DomainError::UnknownSubject(slug.clone()))?;
    Ok(Json(MetricsTableView::from(table)))
}

pub async fn compare(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    let question = Question::try_from(request.question)?;
    info!("Comparison requested ({} chars)", question.content().len());

    let result = state
        .comparison
        .execute_with_progress(&question, &LogProgress)
        .await;
    Ok(Json(CompareResponse::from(&result)))
}
