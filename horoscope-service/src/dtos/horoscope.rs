use crate::models::{Reading, StoredReading};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_QUERY_LIMIT: i64 = 10;

#[derive(Debug, Deserialize, Validate)]
pub struct ReadingQueryParams {
    pub sign: String,
    pub scope_date: Option<NaiveDate>,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadingListResponse {
    pub results: Vec<StoredReading>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub sign: String,
    pub scope_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub id: String,
    pub reading: Reading,
}
