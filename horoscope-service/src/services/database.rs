use super::store::{ReadingStore, READINGS_COLLECTION};
use crate::models::{Reading, ReadingFilter, StoredReading, ZodiacSign};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime as BsonDateTime, Document},
    options::{FindOptions, IndexOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

/// On-disk shape of a reading. `scope_date` is a BSON datetime at midnight UTC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub sign: ZodiacSign,
    pub scope_date: BsonDateTime,
    pub headline: String,
    pub description: String,
    pub mood: String,
    pub lucky_number: u32,
    pub lucky_color: String,
    pub keywords: Vec<String>,
    pub compatibility: ZodiacSign,
    pub created_at: BsonDateTime,
}

pub fn date_to_bson(date: NaiveDate) -> BsonDateTime {
    BsonDateTime::from_chrono(date.and_time(NaiveTime::MIN).and_utc())
}

pub fn bson_to_date(value: BsonDateTime) -> NaiveDate {
    value.to_chrono().date_naive()
}

impl ReadingDocument {
    pub fn from_reading(reading: &Reading) -> Self {
        Self {
            id: None,
            sign: reading.sign,
            scope_date: date_to_bson(reading.scope_date),
            headline: reading.headline.clone(),
            description: reading.description.clone(),
            mood: reading.mood.clone(),
            lucky_number: reading.lucky_number,
            lucky_color: reading.lucky_color.clone(),
            keywords: reading.keywords.clone(),
            compatibility: reading.compatibility,
            created_at: BsonDateTime::now(),
        }
    }

    /// Surfaces `_id` as a hex `id` and the date as `YYYY-MM-DD`.
    pub fn into_stored(self) -> Result<StoredReading, AppError> {
        let id = self.id.ok_or_else(|| {
            AppError::DatabaseError(anyhow::anyhow!("Stored reading is missing its _id"))
        })?;

        Ok(StoredReading {
            id: id.to_hex(),
            reading: Reading {
                sign: self.sign,
                scope_date: bson_to_date(self.scope_date),
                headline: self.headline,
                description: self.description,
                mood: self.mood,
                lucky_number: self.lucky_number,
                lucky_color: self.lucky_color,
                keywords: self.keywords,
                compatibility: self.compatibility,
            },
            created_at: self.created_at.to_chrono().to_rfc3339(),
        })
    }
}

pub fn filter_document(filter: &ReadingFilter) -> Document {
    let mut query = doc! { "sign": filter.sign.as_str() };
    if let Some(date) = filter.scope_date {
        query.insert("scope_date", date_to_bson(date));
    }
    query
}

#[derive(Clone)]
pub struct MongoReadingStore {
    client: MongoClient,
    db: Database,
}

impl MongoReadingStore {
    /// The driver connects lazily, so this only fails on a malformed URI or
    /// unresolvable SRV record. Reachability is checked by `ping`.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            // The URI may embed credentials, so it is never logged.
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for horoscope-service");

        let sign_date_index = IndexModel::builder()
            .keys(doc! { "sign": 1, "scope_date": 1 })
            .options(
                IndexOptions::builder()
                    .name("sign_scope_date_idx".to_string())
                    .build(),
            )
            .build();

        self.readings()
            .create_index(sign_date_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create sign/scope_date index: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created index on {}.(sign, scope_date)", READINGS_COLLECTION);

        Ok(())
    }

    pub fn readings(&self) -> Collection<ReadingDocument> {
        self.db.collection(READINGS_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl ReadingStore for MongoReadingStore {
    async fn insert(&self, reading: &Reading) -> Result<String, AppError> {
        let document = ReadingDocument::from_reading(reading);
        let result = self
            .readings()
            .insert_one(&document, None)
            .await
            .map_err(|e| {
                tracing::error!(sign = %reading.sign, "Failed to insert reading: {}", e);
                AppError::from(e)
            })?;

        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| {
                AppError::DatabaseError(anyhow::anyhow!(
                    "Insert returned a non-ObjectId identifier: {}",
                    result.inserted_id
                ))
            })
    }

    async fn query(
        &self,
        filter: &ReadingFilter,
        limit: i64,
    ) -> Result<Vec<StoredReading>, AppError> {
        let find_options = FindOptions::builder().limit(limit).build();

        let cursor = self
            .readings()
            .find(filter_document(filter), find_options)
            .await
            .map_err(|e| {
                tracing::error!(sign = %filter.sign, "Failed to query readings: {}", e);
                AppError::from(e)
            })?;

        let documents: Vec<ReadingDocument> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect readings: {}", e);
            AppError::from(e)
        })?;

        documents
            .into_iter()
            .map(ReadingDocument::into_stored)
            .collect()
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    fn database_name(&self) -> String {
        self.db.name().to_string()
    }

    async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db
            .list_collection_names(None)
            .await
            .map_err(AppError::from)
    }
}
