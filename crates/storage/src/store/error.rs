#![forbid(unsafe_code)]

use ic_core::fields::FieldError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("not found")]
    NotFound,
    #[error("forbidden")]
    Forbidden,
    /// A required field is missing or the model is unknown. Shown to the user.
    #[error("{0}")]
    Validation(String),
    /// The operation is refused because something else still references the row.
    #[error("{0}")]
    Conflict(String),
    /// Stored rows break the single-master ownership of details and items.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO",
            Self::Sql(_) => "STORE",
            Self::NotFound => "NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION",
            Self::Conflict(_) => "CONFLICT",
            Self::Invariant(_) => "INVARIANT",
        }
    }

    /// HTTP status the request boundary answers with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Forbidden => 403,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Io(_) | Self::Sql(_) | Self::Invariant(_) => 500,
        }
    }

    /// Text safe to flash back to the user. Infrastructure details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) | Self::Conflict(message) => message.clone(),
            Self::NotFound => "Not Found".to_string(),
            Self::Forbidden => "Forbidden".to_string(),
            Self::Io(_) | Self::Sql(_) | Self::Invariant(_) => {
                "Internal Server Error".to_string()
            }
        }
    }

    /// Validation and conflict errors re-render the form; the rest abort the request.
    pub fn is_recoverable_by_user(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Conflict(_))
    }
}

impl From<FieldError> for StoreError {
    fn from(value: FieldError) -> Self {
        Self::Validation(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ic_core::fields::{FieldError, NAME_REQUIRED};

    #[test]
    fn boundary_mapping_is_fixed_per_kind() {
        let cases = [
            (StoreError::NotFound, 404, "NOT_FOUND"),
            (StoreError::Forbidden, 403, "FORBIDDEN"),
            (StoreError::Validation("x".to_string()), 400, "VALIDATION"),
            (StoreError::Conflict("x".to_string()), 409, "CONFLICT"),
            (StoreError::Invariant("x".to_string()), 500, "INVARIANT"),
        ];
        for (err, status, code) in cases {
            assert_eq!(err.status_code(), status);
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn field_errors_become_flashable_validation_messages() {
        let err = StoreError::from(FieldError::Required(NAME_REQUIRED));
        assert!(err.is_recoverable_by_user());
        assert_eq!(err.user_message(), "Name is required.");
        assert_eq!(StoreError::Forbidden.user_message(), "Forbidden");
        assert!(!StoreError::NotFound.is_recoverable_by_user());
    }
}
