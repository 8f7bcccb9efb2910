// ABOUTME: Unified error types for profile validation and pipeline evaluation
// ABOUTME: Defines ErrorCode taxonomy, AppError, and a serializable error response body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every hard failure of the calculator is an [`AppError`] carrying an
//! [`ErrorCode`]. Errors abort profile construction entirely; there is no
//! partial result. Soft conditions (such as an unrecognized weekly rate) are
//! not errors and are reported as warnings on the result instead.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Standard error codes used throughout the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Profile enumerations (1000-1999)
    /// Sex is not one of MALE/FEMALE
    InvalidSex = 1000,
    /// Activity level code is not in the activity factor table
    InvalidActivityLevel = 1001,
    /// Weight goal is not one of MAINTAIN/LOSE/GAIN
    InvalidWeightGoal = 1002,

    // Numeric validation (3000-3999)
    /// Input is malformed (e.g. NaN or infinite)
    InvalidInput = 3000,
    /// Input is outside the accepted range
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Configuration failed validation
    ConfigInvalid = 6002,

    // Internal (9000-9999)
    /// Output serialization failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidSex => "Sex must be MALE or FEMALE",
            Self::InvalidActivityLevel => "The activity level is not recognized",
            Self::InvalidWeightGoal => "Weight goal must be MAINTAIN, LOSE or GAIN",
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization failed",
        }
    }

    /// Whether the error stems from caller input rather than the environment
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSex
                | Self::InvalidActivityLevel
                | Self::InvalidWeightGoal
                | Self::InvalidInput
                | Self::ValueOutOfRange
        )
    }
}

/// Unified error type for the calculator
#[derive(Debug, Clone, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional key-value context (offending field, value, bounds)
    pub details: Value,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Object(Map::new()),
        }
    }

    /// Attach structured details to the error
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Sex string could not be mapped onto a supported value
    #[must_use]
    pub fn invalid_sex(value: &str) -> Self {
        Self::new(ErrorCode::InvalidSex, format!("Invalid sex: '{value}'"))
            .with_details(serde_json::json!({ "field": "sex", "value": value }))
    }

    /// Activity code is not in the factor table
    #[must_use]
    pub fn invalid_activity_level(value: &str) -> Self {
        Self::new(
            ErrorCode::InvalidActivityLevel,
            format!("Invalid activity level: '{value}'"),
        )
        .with_details(serde_json::json!({ "field": "activity_level", "value": value }))
    }

    /// Weight goal is not one of the supported goals
    #[must_use]
    pub fn invalid_weight_goal(value: &str) -> Self {
        Self::new(
            ErrorCode::InvalidWeightGoal,
            format!("Invalid weight goal: '{value}'"),
        )
        .with_details(serde_json::json!({ "field": "weight_goal", "value": value }))
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Numeric field outside its accepted range
    #[must_use]
    pub fn out_of_range(field: &str, value: f64, min: f64, max: f64) -> Self {
        Self::new(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be between {min} and {max}, got {value}"),
        )
        .with_details(serde_json::json!({
            "field": field,
            "value": value,
            "min": min,
            "max": max,
        }))
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Error body emitted by front-ends that serialize failures
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Inner error payload of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured context, omitted when empty
    #[serde(skip_serializing_if = "is_empty_details", default)]
    pub details: Value,
}

fn is_empty_details(details: &Value) -> bool {
    match details {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string())
    }
}
