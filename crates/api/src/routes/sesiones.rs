//! Routes for the `sesiones` resource.
//!
//! Sessions reference exactly one patient, which must exist at creation
//! time. They are mutated only through the partial update and never
//! deleted.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};
use psicoagenda_core::error::CoreError;
use psicoagenda_core::types::DbId;
use psicoagenda_db::models::sesion::{CreateSesion, UpdateSesion};
use psicoagenda_db::repositories::{PacienteRepo, SesionRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /sesiones
///
/// List all sessions joined with patient names, most recent date first.
pub async fn list_sesiones(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sesiones = SesionRepo::list(&state.pool).await?;

    Ok(Json(sesiones))
}

/// POST /sesiones
///
/// Create a session for an existing patient. Attendance and payment
/// flags default to false when absent.
pub async fn create_sesion(
    State(state): State<AppState>,
    Json(input): Json<CreateSesion>,
) -> AppResult<impl IntoResponse> {
    // The referenced patient must exist at creation time.
    if PacienteRepo::find_by_id(&state.pool, input.paciente_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Paciente",
            id: input.paciente_id,
        }));
    }

    let sesion = SesionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        sesion_id = sesion.id,
        paciente_id = sesion.paciente_id,
        "Sesion created"
    );

    Ok((StatusCode::CREATED, Json(sesion)))
}

/// PUT /sesiones/{id}
///
/// Partially update a session's attendance/payment flags and notes.
/// Fields absent from the body are left unchanged.
pub async fn update_sesion(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSesion>,
) -> AppResult<impl IntoResponse> {
    let sesion = SesionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sesion",
            id,
        }))?;

    tracing::info!(sesion_id = sesion.id, "Sesion updated");

    Ok(Json(sesion))
}

/// Session routes mounted at `/sesiones`.
///
/// ```text
/// GET  /        -> list_sesiones
/// POST /        -> create_sesion
/// PUT  /{id}    -> update_sesion
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sesiones).post(create_sesion))
        .route("/{id}", put(update_sesion))
}
