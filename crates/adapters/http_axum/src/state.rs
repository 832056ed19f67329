//! Shared application state for axum handlers.

use std::sync::Arc;

use sedes_app::ports::SedeRepository;
use sedes_app::services::sede_service::SedeService;

use crate::headers::AlertHeaders;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Sede CRUD service.
    pub sede_service: Arc<SedeService<R>>,
    /// Alert header builder for mutating responses.
    pub alerts: Arc<AlertHeaders>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            sede_service: Arc::clone(&self.sede_service),
            alerts: Arc::clone(&self.alerts),
        }
    }
}

impl<R> AppState<R>
where
    R: SedeRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(sede_service: SedeService<R>, alerts: AlertHeaders) -> Self {
        Self {
            sede_service: Arc::new(sede_service),
            alerts: Arc::new(alerts),
        }
    }
}
