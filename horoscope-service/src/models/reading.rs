use super::ZodiacSign;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A generated horoscope. Immutable once produced by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub sign: ZodiacSign,
    /// Serialized as `YYYY-MM-DD`.
    pub scope_date: NaiveDate,
    pub headline: String,
    pub description: String,
    pub mood: String,
    pub lucky_number: u32,
    pub lucky_color: String,
    pub keywords: Vec<String>,
    pub compatibility: ZodiacSign,
}

/// A reading as returned by a store, with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredReading {
    pub id: String,
    #[serde(flatten)]
    pub reading: Reading,
    /// RFC 3339 insertion timestamp.
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingFilter {
    pub sign: ZodiacSign,
    pub scope_date: Option<NaiveDate>,
}

impl ReadingFilter {
    pub fn new(sign: ZodiacSign, scope_date: Option<NaiveDate>) -> Self {
        Self { sign, scope_date }
    }

    pub fn matches(&self, reading: &Reading) -> bool {
        reading.sign == self.sign && self.scope_date.map_or(true, |d| d == reading.scope_date)
    }
}
