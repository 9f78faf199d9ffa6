//! Patient model and DTOs.

use psicoagenda_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pacientes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Paciente {
    pub id: DbId,
    pub nombre: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub creado_en: Timestamp,
}

/// DTO for creating a new patient.
///
/// `nombre` is required and must be non-empty after trimming; the check
/// happens at the API boundary so the repository only ever sees valid input.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaciente {
    pub nombre: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
}
