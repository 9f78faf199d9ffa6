//! Smoke tests for pool construction and connectivity.

use sqlx::SqlitePool;

#[sqlx::test]
async fn health_check_succeeds_on_live_pool(pool: SqlitePool) {
    psicoagenda_db::health_check(&pool)
        .await
        .expect("health check should succeed against a live pool");
}

#[sqlx::test]
async fn migrations_create_both_tables(pool: SqlitePool) {
    // #[sqlx::test] has already applied ./migrations; both tables must exist.
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let names: Vec<&str> = tables.iter().map(|(n,)| n.as_str()).collect();
    assert!(names.contains(&"pacientes"), "missing pacientes table: {names:?}");
    assert!(names.contains(&"sesiones"), "missing sesiones table: {names:?}");
}
