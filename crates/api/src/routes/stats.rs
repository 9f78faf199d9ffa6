//! Aggregate stats route.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use psicoagenda_core::stats::ResumenPractica;
use psicoagenda_db::repositories::{PacienteRepo, SesionRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /stats
///
/// Patient and session counts plus attendance/payment rates as
/// one-decimal percentage strings. Rates are 0.0% with no sessions.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<ResumenPractica>> {
    let total_pacientes = PacienteRepo::count(&state.pool).await?;
    let (total_sesiones, asistencias, pagos) = SesionRepo::flag_counts(&state.pool).await?;

    Ok(Json(ResumenPractica::from_counts(
        total_pacientes,
        total_sesiones,
        asistencias,
        pagos,
    )))
}

/// Mount the stats route.
pub fn router() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}
