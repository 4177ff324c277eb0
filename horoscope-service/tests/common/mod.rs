#![allow(dead_code)]

use horoscope_service::config::{DatabaseSettings, HoroscopeConfig};
use horoscope_service::services::{MemoryReadingStore, ReadingStore};
use horoscope_service::startup::{AppState, Application};
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub fn test_config() -> HoroscopeConfig {
    HoroscopeConfig {
        common: CoreConfig {
            port: 0,
            log_level: "warn".to_string(),
        },
        database: DatabaseSettings::default(),
        otlp_endpoint: None,
    }
}

pub fn memory_state() -> (AppState, Arc<MemoryReadingStore>) {
    let store = Arc::new(MemoryReadingStore::new());
    let state = AppState {
        config: test_config(),
        store: Some(store.clone() as Arc<dyn ReadingStore>),
    };
    (state, store)
}

pub fn storeless_state() -> AppState {
    AppState {
        config: test_config(),
        store: None,
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn(store: Option<Arc<dyn ReadingStore>>) -> Self {
        let app = Application::build_with_store(test_config(), store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(&address).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
