//! Route handlers

pub mod auth;
pub mod forums;
pub mod items;
pub mod otp;
pub mod projects;
pub mod users;
