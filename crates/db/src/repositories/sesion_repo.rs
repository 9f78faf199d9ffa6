//! Repository for the `sesiones` table.
//!
//! All read shapes join `pacientes` so callers always receive the
//! referenced patient's name alongside the session.

use chrono::Utc;
use psicoagenda_core::types::DbId;

use crate::models::sesion::{CreateSesion, SesionConPaciente, UpdateSesion};
use crate::DbPool;

/// Column list for joined `sesiones` queries (`s` = sesiones, `p` = pacientes).
const SESION_COLUMNS: &str = "\
    s.id, s.paciente_id, p.nombre AS paciente_nombre, s.fecha, \
    s.asistio, s.pago, s.notas, s.creado_en";

/// Provides create, list, and partial-update operations for sessions.
///
/// Sessions are never deleted.
pub struct SesionRepo;

impl SesionRepo {
    /// Insert a new session and return it joined with the patient name.
    ///
    /// The caller must have resolved `paciente_id` to an existing patient;
    /// the foreign key is the last line of defence, not the primary check.
    /// The insert and the read-back run in one transaction.
    pub async fn create(
        pool: &DbPool,
        input: &CreateSesion,
    ) -> Result<SesionConPaciente, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO sesiones (paciente_id, fecha, asistio, pago, creado_en) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(input.paciente_id)
        .bind(input.fecha)
        .bind(input.asistio)
        .bind(input.pago)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        let id = result.last_insert_rowid();
        let query = format!(
            "SELECT {SESION_COLUMNS} FROM sesiones s \
             JOIN pacientes p ON p.id = s.paciente_id \
             WHERE s.id = ?"
        );
        let sesion = sqlx::query_as::<_, SesionConPaciente>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(sesion)
    }

    /// List all sessions joined with patient names, most recent date first.
    pub async fn list(pool: &DbPool) -> Result<Vec<SesionConPaciente>, sqlx::Error> {
        let query = format!(
            "SELECT {SESION_COLUMNS} FROM sesiones s \
             JOIN pacientes p ON p.id = s.paciente_id \
             ORDER BY s.fecha DESC, s.id DESC"
        );
        sqlx::query_as::<_, SesionConPaciente>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a session by its ID, joined with the patient name.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<SesionConPaciente>, sqlx::Error> {
        let query = format!(
            "SELECT {SESION_COLUMNS} FROM sesiones s \
             JOIN pacientes p ON p.id = s.paciente_id \
             WHERE s.id = ?"
        );
        sqlx::query_as::<_, SesionConPaciente>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial update to a session.
    ///
    /// Fields absent from `input` keep their stored values. Returns `None`
    /// when the id does not exist.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateSesion,
    ) -> Result<Option<SesionConPaciente>, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sesiones SET \
                 asistio = COALESCE(?, asistio), \
                 pago = COALESCE(?, pago), \
                 notas = COALESCE(?, notas) \
             WHERE id = ?",
        )
        .bind(input.asistio)
        .bind(input.pago)
        .bind(input.notas.as_deref())
        .bind(id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Self::find_by_id(pool, id).await
    }

    /// Session count plus how many have each flag set, in one query.
    pub async fn flag_counts(pool: &DbPool) -> Result<(i64, i64, i64), sqlx::Error> {
        sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(asistio), 0), COALESCE(SUM(pago), 0) \
             FROM sesiones",
        )
        .fetch_one(pool)
        .await
    }
}
