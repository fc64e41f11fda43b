//! Shared configuration and error types for the FX services.
//!
//! This crate provides common pieces used by both services:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{
    CurrencyServiceConfig, ExchangeRateServiceConfig, RateServiceClientConfig, ServerConfig,
};
pub use error::{AppError, AppResult};
