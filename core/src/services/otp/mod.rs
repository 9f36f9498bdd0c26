//! One-time-code issuance and verification

pub mod service;
pub mod traits;

pub use service::{OtpService, OtpServiceConfig};
pub use traits::MailService;
