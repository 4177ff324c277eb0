pub mod health;
pub mod horoscope;

pub use health::{diagnostics, health_check, metrics_endpoint, readiness_check, root};
pub use horoscope::{generate_reading, list_readings};
