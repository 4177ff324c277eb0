//! Deterministic horoscope generation backed by a pluggable reading store.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
