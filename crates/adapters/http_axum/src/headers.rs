//! Informational alert headers attached to mutating responses.
//!
//! For an application named `sedesApp`, creating sede `3` yields
//! `X-sedesApp-alert: sedesApp.sede.created` and `X-sedesApp-params: 3`.

use axum::http::header::InvalidHeaderName;
use axum::http::{HeaderMap, HeaderName, HeaderValue};

/// Builds the alert headers for one application name.
#[derive(Debug, Clone)]
pub struct AlertHeaders {
    application_name: String,
    alert: HeaderName,
    params: HeaderName,
}

impl AlertHeaders {
    /// Prepare header names for `application_name`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHeaderName`] if the name cannot appear in a header
    /// name (spaces, separators, non-ASCII).
    pub fn new(application_name: impl Into<String>) -> Result<Self, InvalidHeaderName> {
        let application_name = application_name.into();
        let alert = HeaderName::from_bytes(format!("X-{application_name}-alert").as_bytes())?;
        let params = HeaderName::from_bytes(format!("X-{application_name}-params").as_bytes())?;
        Ok(Self {
            application_name,
            alert,
            params,
        })
    }

    #[must_use]
    pub fn created(&self, entity: &str, param: &str) -> HeaderMap {
        self.build(entity, "created", param)
    }

    #[must_use]
    pub fn updated(&self, entity: &str, param: &str) -> HeaderMap {
        self.build(entity, "updated", param)
    }

    #[must_use]
    pub fn deleted(&self, entity: &str, param: &str) -> HeaderMap {
        self.build(entity, "deleted", param)
    }

    fn build(&self, entity: &str, action: &str, param: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let message = format!("{}.{entity}.{action}", self.application_name);
        match (HeaderValue::from_str(&message), HeaderValue::from_str(param)) {
            (Ok(message), Ok(param)) => {
                headers.insert(self.alert.clone(), message);
                headers.insert(self.params.clone(), param);
            }
            _ => tracing::warn!(%message, param, "skipping alert headers with invalid value"),
        }
        headers
    }
}
