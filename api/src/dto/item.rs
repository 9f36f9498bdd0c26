//! Marketplace item endpoint DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
}

/// Item update; mutable fields only, anything else in the payload is ignored
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateItemRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: Option<f64>,
}
