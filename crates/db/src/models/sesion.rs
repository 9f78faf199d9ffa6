//! Session model and DTOs.

use chrono::NaiveDate;
use psicoagenda_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A session joined with the referenced patient's name.
///
/// This is the only read shape the API exposes: listings, creation and
/// update responses all carry `paciente_nombre` so the caller never has to
/// resolve the reference itself.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SesionConPaciente {
    pub id: DbId,
    pub paciente_id: DbId,
    pub paciente_nombre: String,
    pub fecha: NaiveDate,
    pub asistio: bool,
    pub pago: bool,
    pub notas: Option<String>,
    pub creado_en: Timestamp,
}

/// DTO for creating a new session.
///
/// Both flags default to `false` when absent from the request body. Notes
/// cannot be set at creation time; they arrive through [`UpdateSesion`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSesion {
    pub paciente_id: DbId,
    pub fecha: NaiveDate,
    #[serde(default)]
    pub asistio: bool,
    #[serde(default)]
    pub pago: bool,
}

/// DTO for partially updating a session.
///
/// Only fields present in the request body are applied; absent fields
/// leave the stored values untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSesion {
    pub asistio: Option<bool>,
    pub pago: Option<bool>,
    pub notas: Option<String>,
}
