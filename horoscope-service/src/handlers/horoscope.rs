use crate::dtos::{
    GenerateRequest, GenerateResponse, ReadingListResponse, ReadingQueryParams,
    DEFAULT_QUERY_LIMIT,
};
use crate::models::{ReadingFilter, ZodiacSign};
use crate::services::{generate, record_reading_generated, record_store_query, ReadingStore};
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use service_core::error::AppError;
use validator::Validate;

fn parse_sign(raw: &str) -> Result<ZodiacSign, AppError> {
    raw.parse::<ZodiacSign>()
        .map_err(|e| AppError::BadRequest(anyhow::Error::new(e)))
}

fn require_store(state: &AppState) -> Result<&dyn ReadingStore, AppError> {
    state.store.as_deref().ok_or_else(|| {
        AppError::StoreUnavailable("No reading store is configured".to_string())
    })
}

#[tracing::instrument(skip(state))]
pub async fn list_readings(
    State(state): State<AppState>,
    Query(params): Query<ReadingQueryParams>,
) -> Result<Json<ReadingListResponse>, AppError> {
    let sign = parse_sign(&params.sign)?;
    params.validate()?;

    let store = require_store(&state)?;
    let filter = ReadingFilter::new(sign, params.scope_date);
    let limit = params.limit.unwrap_or(DEFAULT_QUERY_LIMIT);

    let results = match store.query(&filter, limit).await {
        Ok(results) => {
            record_store_query("ok");
            results
        }
        Err(e) => {
            record_store_query("error");
            return Err(e);
        }
    };

    tracing::debug!(sign = %sign, count = results.len(), "Readings fetched");

    Ok(Json(ReadingListResponse { results }))
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_reading(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let sign = parse_sign(&request.sign)?;
    let scope_date = request
        .scope_date
        .unwrap_or_else(|| Utc::now().date_naive());

    let reading = generate(sign, scope_date);

    let store = require_store(&state)?;
    let id = store.insert(&reading).await?;
    record_reading_generated(sign);

    tracing::info!(
        reading_id = %id,
        sign = %sign,
        scope_date = %scope_date,
        "Reading generated"
    );

    Ok(Json(GenerateResponse { id, reading }))
}
