//! Repository for the `pacientes` table.

use chrono::Utc;
use psicoagenda_core::types::DbId;

use crate::models::paciente::{CreatePaciente, Paciente};
use crate::DbPool;

/// Column list for `pacientes` queries.
const PACIENTE_COLUMNS: &str = "id, nombre, email, telefono, creado_en";

/// Provides CRUD operations for patients.
///
/// Patients are append-only: there is no update or delete.
pub struct PacienteRepo;

impl PacienteRepo {
    /// Insert a new patient and return the stored row.
    ///
    /// The id and creation timestamp are assigned here; validation of
    /// `nombre` happens before this call.
    pub async fn create(pool: &DbPool, input: &CreatePaciente) -> Result<Paciente, sqlx::Error> {
        let query = format!(
            "INSERT INTO pacientes (nombre, email, telefono, creado_en) \
             VALUES (?, ?, ?, ?) \
             RETURNING {PACIENTE_COLUMNS}"
        );
        sqlx::query_as::<_, Paciente>(&query)
            .bind(input.nombre.trim())
            .bind(input.email.as_deref())
            .bind(input.telefono.as_deref())
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// List all patients, newest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Paciente>, sqlx::Error> {
        let query = format!(
            "SELECT {PACIENTE_COLUMNS} FROM pacientes \
             ORDER BY creado_en DESC, id DESC"
        );
        sqlx::query_as::<_, Paciente>(&query).fetch_all(pool).await
    }

    /// Find a patient by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Paciente>, sqlx::Error> {
        let query = format!("SELECT {PACIENTE_COLUMNS} FROM pacientes WHERE id = ?");
        sqlx::query_as::<_, Paciente>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of patients.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM pacientes")
            .fetch_one(pool)
            .await
    }
}
