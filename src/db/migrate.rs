use rusqlite::{Connection, OptionalExtension, Result};

/// Ordered schema migrations: (version, description, sql).
/// A version is applied once and recorded in the `log` table.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20260301_0001_create_kv_store",
        "Created kv table for persisted session state",
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    ),
    (
        "20260412_0002_log_operation_index",
        "Indexed log by operation and target",
        r#"
        CREATE INDEX IF NOT EXISTS idx_log_operation_target ON log(operation, target);
        "#,
    ),
];

/// Ensure that the `log` table exists. Migrations are tracked inside it, so
/// it has to be created before anything else.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Versions already recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

/// Public entry point: run all pending migrations inside one transaction each.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, description, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        conn.execute_batch("BEGIN;")?;
        let applied = conn.execute_batch(sql).and_then(|_| {
            conn.execute(
                "INSERT INTO log (date, operation, target, message)
                 VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
                [version, description],
            )
        });

        match applied {
            Ok(_) => {
                conn.execute_batch("COMMIT;")?;
                tracing::debug!(version, "migration applied");
            }
            Err(e) => {
                let _ = conn.execute_batch("ROLLBACK;");
                tracing::error!(version, error = %e, "migration failed");
                return Err(e);
            }
        }
    }

    Ok(())
}
