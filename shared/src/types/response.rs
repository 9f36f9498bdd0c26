//! API response envelope
//!
//! Every HTTP response carries the uniform `{"status": "success" | "error"}`
//! shape, with `data`, `message`, `results` or `errors` filled in as the
//! endpoint requires.

use serde::{Deserialize, Serialize};

/// Response status discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// A single field-level validation violation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Name of the offending field
    pub field: String,
    /// Human-readable description of the violation
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub status: ResponseStatus,

    /// Response payload (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Informational or error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Number of results for list endpoints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<usize>,

    /// Field-level validation violations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with payload
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: Some(data),
            message: None,
            results: None,
            errors: None,
        }
    }

    /// Create a successful list response with a result count
    pub fn success_with_results(data: T, results: usize) -> Self {
        Self {
            results: Some(results),
            ..Self::success(data)
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

impl ApiResponse<()> {
    /// Create a successful response carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: None,
            message: Some(message.into()),
            results: None,
            errors: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: None,
            message: Some(message.into()),
            results: None,
            errors: None,
        }
    }

    /// Create a validation-failure response listing every violation
    pub fn validation(errors: Vec<FieldViolation>) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: None,
            message: None,
            results: None,
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success(serde_json::json!({"id": 1}));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["id"], 1);
        assert!(json.get("message").is_none());
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_error_envelope_shape() {
        let response = ApiResponse::error("Invalid credentials");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Invalid credentials");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_validation_envelope_lists_all_violations() {
        let response = ApiResponse::validation(vec![
            FieldViolation::new("email", "invalid email format"),
            FieldViolation::new("password", "must be at least 6 characters"),
        ]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["errors"].as_array().unwrap().len(), 2);
        assert_eq!(json["errors"][0]["field"], "email");
    }

    #[test]
    fn test_results_count() {
        let response = ApiResponse::success_with_results(vec![1, 2, 3], 3);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["results"], 3);
    }
}
