use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use hue_engine::{DeltaEMetric, PaletteAnalyzer, SortKey};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::server::AppState;
use crate::services::export::{css_variables, tailwind_config, token_map_json};
use crate::services::{decode_image, ColorRecord, PaletteReport};

/// Smallest palette size accepted over HTTP
pub const MIN_K: usize = 3;
/// Largest palette size accepted over HTTP
pub const MAX_K: usize = 12;

/// Extraction parameters; unset fields use the configured defaults
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExtractQuery {
    /// Number of colors (3-12)
    pub k: Option<usize>,
    /// "de2000" (default) or "de76"
    pub metric: Option<String>,
    /// "weight" (default), "hue" or "luminance"
    pub sort: Option<String>,
    /// Random seed
    pub seed: Option<u64>,
    /// Match colors against the reference palette (default true)
    pub matches: Option<bool>,
}

/// Extracted palette with copy-ready renderings
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExtractResponse {
    /// Colors in the requested order
    pub palette: Vec<ColorRecord>,
    /// CSS custom properties block
    pub css: String,
    /// JSON object mapping `color-N` to Tailwind tokens
    pub tokens: String,
    /// `tailwind.config.js` snippet
    pub tailwind_config: String,
    /// The image had fewer distinct colors than requested
    pub degenerate: bool,
    /// Metric used for matching: "de2000" or "de76"
    pub metric: String,
}

fn build_analyzer(
    state: &AppState,
    query: &ExtractQuery,
) -> Result<(PaletteAnalyzer, DeltaEMetric), ApiError> {
    let defaults = &state.config.extraction;

    if let Some(k) = query.k {
        if !(MIN_K..=MAX_K).contains(&k) {
            return Err(ApiError::BadRequest(format!(
                "k must be between {MIN_K} and {MAX_K}, got {k}"
            )));
        }
    }

    let metric: DeltaEMetric = match &query.metric {
        Some(m) => m.parse()?,
        None => defaults.metric()?,
    };
    let sort: SortKey = match &query.sort {
        Some(s) => s.parse()?,
        None => defaults.sort()?,
    };

    let mut options = defaults.options();
    if let Some(k) = query.k {
        options = options.k(k);
    }
    if let Some(seed) = query.seed {
        options = options.seed(seed);
    }
    options.validate()?;

    let analyzer = PaletteAnalyzer::new(state.palette.clone())
        .options(options)
        .metric(metric)
        .sort_by(sort)
        .with_matches(query.matches.unwrap_or(true));
    Ok((analyzer, metric))
}

/// Extract a palette from an uploaded image
///
/// The request body is the raw image file (PNG, JPEG, WebP, GIF or BMP).
#[utoipa::path(
    post,
    path = "/api/extract",
    request_body(content = Vec<u8>, description = "Raw image bytes", content_type = "application/octet-stream"),
    params(ExtractQuery),
    responses(
        (status = 200, description = "Palette extracted", body = ExtractResponse),
        (status = 400, description = "Undecodable image or invalid parameters"),
        (status = 422, description = "Image contains no pixels"),
    ),
    tag = "Palette"
)]
pub async fn handle_extract(
    State(state): State<AppState>,
    query: Result<Query<ExtractQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Json<ExtractResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let (analyzer, metric) = build_analyzer(&state, &query)?;

    if body.is_empty() {
        return Err(hue_engine::EngineError::EmptyImage.into());
    }

    let analysis = tokio::task::spawn_blocking(move || {
        let image = decode_image(&body)?;
        analyzer.analyze(&image).map_err(ApiError::from)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Extraction task failed: {e}")))??;

    let report = PaletteReport::from(&analysis);
    tracing::info!(
        colors = report.palette.len(),
        metric = metric.as_str(),
        degenerate = analysis.degenerate,
        "Palette extracted"
    );

    Ok(Json(ExtractResponse {
        css: css_variables(&report.palette),
        tokens: token_map_json(&report.palette),
        tailwind_config: tailwind_config(&report.palette),
        degenerate: analysis.degenerate,
        metric: metric.as_str().to_string(),
        palette: report.palette,
    }))
}
