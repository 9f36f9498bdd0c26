//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - Repository pattern implementations
//!
//! The table layout the repositories expect is in `schema.sql` at the crate
//! root.

pub mod connection;
pub mod mysql;

pub use connection::create_pool;
pub use mysql::{
    MySqlForumRepository, MySqlItemRepository, MySqlOtpRepository, MySqlPostRepository,
    MySqlProjectRepository, MySqlUserRepository,
};
