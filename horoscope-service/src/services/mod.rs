pub mod database;
pub mod diagnostics;
pub mod generator;
pub mod metrics;
pub mod store;

pub use database::MongoReadingStore;
pub use diagnostics::{collect_diagnostics, DiagnosticReport};
pub use generator::generate;
pub use metrics::{get_metrics, init_metrics, record_reading_generated, record_store_query};
pub use store::{MemoryReadingStore, ReadingStore, READINGS_COLLECTION};
