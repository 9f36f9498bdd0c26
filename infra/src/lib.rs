//! # CampusHub Infrastructure
//!
//! Infrastructure layer for the CampusHub backend: MySQL implementations of
//! the core repository traits and the outbound mail service.

pub mod database;
pub mod mail;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Mail service error: {0}")]
    Mail(String),
}
