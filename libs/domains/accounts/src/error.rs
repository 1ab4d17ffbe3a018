use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::{ErrorCode, error_response};
use thiserror::Error;

pub const DUPLICATE_EMAIL_MESSAGE: &str = "Account with this email already exists";
pub const NOT_FOUND_MESSAGE: &str = "Account not found";

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Holds the conflicting (normalized) email
    #[error("Account with email '{0}' already exists")]
    DuplicateEmail(String),

    /// Holds the requested id as sent by the caller
    #[error("Account not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error discriminant the HTTP layer maps to a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountErrorKind {
    Validation,
    Conflict,
    NotFound,
    Unknown,
}

pub type AccountResult<T> = Result<T, AccountError>;

impl AccountError {
    pub fn kind(&self) -> AccountErrorKind {
        match self {
            AccountError::Validation(_) => AccountErrorKind::Validation,
            AccountError::DuplicateEmail(_) => AccountErrorKind::Conflict,
            AccountError::NotFound(_) => AccountErrorKind::NotFound,
            AccountError::Internal(_) => AccountErrorKind::Unknown,
        }
    }

    /// Text shown to API clients.
    pub fn message(&self) -> String {
        match self {
            AccountError::Validation(msg) | AccountError::Internal(msg) => msg.clone(),
            AccountError::DuplicateEmail(_) => DUPLICATE_EMAIL_MESSAGE.to_string(),
            AccountError::NotFound(_) => NOT_FOUND_MESSAGE.to_string(),
        }
    }
}

impl AccountErrorKind {
    /// Conflicts answer 400.
    pub fn status(self) -> StatusCode {
        match self {
            AccountErrorKind::Validation | AccountErrorKind::Conflict => StatusCode::BAD_REQUEST,
            AccountErrorKind::NotFound => StatusCode::NOT_FOUND,
            AccountErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(self) -> ErrorCode {
        match self {
            AccountErrorKind::Validation => ErrorCode::ValidationError,
            AccountErrorKind::Conflict => ErrorCode::Conflict,
            AccountErrorKind::NotFound => ErrorCode::NotFound,
            AccountErrorKind::Unknown => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let kind = self.kind();

        match kind {
            AccountErrorKind::Unknown => {
                tracing::error!(error_code = kind.error_code().code(), error = %self, "Account request failed")
            }
            _ => tracing::info!(error_code = kind.error_code().code(), error = %self, "Account request rejected"),
        }

        error_response(kind.status(), self.message(), kind.error_code())
    }
}
