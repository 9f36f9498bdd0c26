//! Request handling support

pub mod error;

pub use error::ApiError;
