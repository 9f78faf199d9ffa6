pub mod health;
pub mod pacientes;
pub mod sesiones;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /pacientes          list (GET), create (POST)
/// /sesiones           list (GET), create (POST)
/// /sesiones/{id}      partial update (PUT)
/// /stats              aggregate counts and rates (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/pacientes", pacientes::router())
        .nest("/sesiones", sesiones::router())
        .merge(stats::router())
}
