//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`SedesError`]
//! via `#[from]`. There are no `String` variants.

/// Name under which the Sede resource reports errors and alerts.
pub const ENTITY_NAME: &str = "sede";

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum SedesError {
    /// The request carries an identifier in an unacceptable state.
    #[error("invalid request")]
    InvalidRequest(#[from] InvalidRequestError),

    /// The addressed record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Identifier-state problems detected before touching the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRequestError {
    /// A new record was submitted with an identifier already set.
    #[error("A new sede cannot already have an ID")]
    IdExists,
    /// An update was submitted without an identifier in the body.
    #[error("Invalid id")]
    IdNull,
    /// The body identifier does not match the path identifier.
    #[error("Invalid ID")]
    IdInvalid,
    /// An update targets an identifier with no stored record.
    #[error("Entity not found")]
    IdNotFound,
}

impl InvalidRequestError {
    /// Machine-readable key reported to clients.
    #[must_use]
    pub fn error_key(self) -> &'static str {
        match self {
            Self::IdExists => "idexists",
            Self::IdNull => "idnull",
            Self::IdInvalid => "idinvalid",
            Self::IdNotFound => "idnotfound",
        }
    }
}

/// A lookup found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_stable_error_keys() {
        assert_eq!(InvalidRequestError::IdExists.error_key(), "idexists");
        assert_eq!(InvalidRequestError::IdNull.error_key(), "idnull");
        assert_eq!(InvalidRequestError::IdInvalid.error_key(), "idinvalid");
        assert_eq!(InvalidRequestError::IdNotFound.error_key(), "idnotfound");
    }

    #[test]
    fn should_convert_invalid_request_into_top_level_error() {
        let err: SedesError = InvalidRequestError::IdNull.into();
        assert!(matches!(
            err,
            SedesError::InvalidRequest(InvalidRequestError::IdNull)
        ));
    }

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Sede",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Sede 42 not found");
    }
}
