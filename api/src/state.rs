//! Shared application state

use std::sync::Arc;

use hub_core::repositories::{
    ForumRepository, ItemRepository, OtpRepository, PostRepository, ProjectRepository,
    UserRepository,
};
use hub_core::services::auth::AuthService;
use hub_core::services::otp::MailService;

/// Application state holding the shared services and repositories.
///
/// Generic over the auth-path implementations so tests run the same handlers
/// against the in-memory mocks; the flat CRUD repositories are trait objects.
pub struct AppState<U, O, M>
where
    U: UserRepository,
    O: OtpRepository,
    M: MailService,
{
    pub auth_service: Arc<AuthService<U, O, M>>,
    pub users: Arc<U>,
    pub items: Arc<dyn ItemRepository>,
    pub forums: Arc<dyn ForumRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub projects: Arc<dyn ProjectRepository>,
}
