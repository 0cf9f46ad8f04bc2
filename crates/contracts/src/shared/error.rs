//! Error taxonomy of the admin surface.
//!
//! Every failure of a user action ends up here and is turned into a
//! transient notification by the UI. Nothing in this enum is fatal.

use serde::Serialize;
use thiserror::Error;

/// Generic text shown for store-level failures.
pub const OPERATION_FAILED_MESSAGE: &str = "Operation failed. Please try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum AdminError {
    /// A required field is missing or malformed
    #[error("{0}")]
    Validation(String),

    /// `(name, country)` already taken by another destination
    #[error("Destination already exists: {name}, {country}")]
    Duplicate { name: String, country: String },

    /// Delete guard: the destination is referenced by packages
    #[error("{name} cannot be deleted because it is currently used in {packages} package(s).")]
    InUse { name: String, packages: u32 },

    /// Referenced record is absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Network or persistence failure reported by a store
    #[error("Operation failed: {0}")]
    Operation(String),
}

pub type AdminResult<T> = Result<T, AdminError>;

impl AdminError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn operation(message: impl Into<String>) -> Self {
        Self::Operation(message.into())
    }

    /// Text for the notification shown to the admin user.
    ///
    /// Store failures never leak transport details, the user only learns
    /// that the action can be retried.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Duplicate { .. } => "This destination already exists".to_string(),
            Self::InUse { .. } => self.to_string(),
            Self::NotFound(what) => format!("{what} was not found"),
            Self::Operation(_) => OPERATION_FAILED_MESSAGE.to_string(),
        }
    }

    /// Whether the error is caused by user input rather than the environment.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::Duplicate { .. } | Self::InUse { .. } | Self::NotFound(_) => {
                true
            }
            Self::Operation(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_errors_hide_details() {
        let err = AdminError::operation("HTTP 502");
        assert_eq!(err.user_message(), OPERATION_FAILED_MESSAGE);
        assert!(!err.is_expected());
    }

    #[test]
    fn in_use_message_names_package_count() {
        let err = AdminError::InUse {
            name: "Goa".into(),
            packages: 3,
        };
        assert_eq!(
            err.user_message(),
            "Goa cannot be deleted because it is currently used in 3 package(s)."
        );
        assert!(err.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let err = AdminError::validation("Please fill in all required fields");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "Validation");
        assert_eq!(json["details"], "Please fill in all required fields");
    }
}
