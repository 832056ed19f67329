//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod sedes;

use axum::Router;
use axum::routing::get;

use sedes_app::ports::SedeRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: SedeRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/sedes", get(sedes::list::<R>).post(sedes::create::<R>))
        .route(
            "/sedes/{id}",
            get(sedes::get::<R>)
                .put(sedes::update::<R>)
                .patch(sedes::partial_update::<R>)
                .delete(sedes::delete::<R>),
        )
}
