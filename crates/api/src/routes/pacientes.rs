//! Routes for the `pacientes` resource.
//!
//! Patients are append-only: they can be created and listed, never
//! updated or deleted.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use psicoagenda_core::error::CoreError;
use psicoagenda_db::models::paciente::CreatePaciente;
use psicoagenda_db::repositories::PacienteRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /pacientes
///
/// List all patients, newest first.
pub async fn list_pacientes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pacientes = PacienteRepo::list(&state.pool).await?;

    Ok(Json(pacientes))
}

/// POST /pacientes
///
/// Create a patient. `nombre` is required and must be non-empty.
pub async fn create_paciente(
    State(state): State<AppState>,
    Json(input): Json<CreatePaciente>,
) -> AppResult<impl IntoResponse> {
    if input.nombre.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "nombre must not be empty".to_string(),
        )));
    }

    let paciente = PacienteRepo::create(&state.pool, &input).await?;

    tracing::info!(paciente_id = paciente.id, "Paciente created");

    Ok((StatusCode::CREATED, Json(paciente)))
}

/// Patient routes mounted at `/pacientes`.
///
/// ```text
/// GET  /    -> list_pacientes
/// POST /    -> create_paciente
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_pacientes).post(create_paciente))
}
