//! User directory endpoint DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Profile update; only these fields are mutable through the API
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[validate(email(message = "invalid email format"))]
    pub email: Option<String>,
}
