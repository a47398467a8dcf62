// [libs/infra/db-turso/src/schema.rs]
/**
 * =================================================================
 * APARATO: COORDINATION DATABASE SCHEMA (V4.0 - THREE TABLE STRATA)
 * CLASIFICACIÓN: INFRASTRUCTURE LAYER (ESTRATO L3)
 * RESPONSABILIDAD: GOBERNANZA ESTRUCTURAL E IDEMPOTENCIA TOTAL
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. DP-UNIQ AT STORAGE: La unicidad de la huella X se sella con
 *    UNIQUE(x_coord) en la tabla, no en el llamador.
 * 2. IDEMPOTENCIA: CREATE IF NOT EXISTS permite re-ignición en
 *    caliente sobre un Ledger ya poblado.
 * 3. PERFORMANCE: Índices de aceleración para el lookup de huellas
 *    y el despacho FIFO por estado.
 * =================================================================
 */

use anyhow::{Context, Result};
use libsql::Connection;
use tracing::{debug, info, instrument};

/**
 * ESTRATO 1: SOLIDIFICACIÓN (Génesis de Tablas)
 * Define las tres entidades del Ledger de coordinación.
 */
const TACTICAL_TABLES: &[(&str, &str)] = &[
    ("TABLE_DISTINGUISHED_POINTS", r#"
        CREATE TABLE IF NOT EXISTS distinguished_points (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            x_coord TEXT NOT NULL,
            distance TEXT NOT NULL,
            kang_type INTEGER NOT NULL,
            client_id TEXT NOT NULL,
            found_at TEXT NOT NULL,
            UNIQUE(x_coord)
        );
    "#),
    ("TABLE_WORK_RANGES", r#"
        CREATE TABLE IF NOT EXISTS work_ranges (
            range_id TEXT PRIMARY KEY,
            start_hex TEXT NOT NULL,
            end_hex TEXT NOT NULL,
            bit_range INTEGER NOT NULL,
            dp_bits INTEGER NOT NULL,
            assigned_to TEXT,
            assigned_at TEXT,
            status TEXT DEFAULT 'pending'
        );
    "#),
    ("TABLE_SERVER_STATE", r#"
        CREATE TABLE IF NOT EXISTS server_state (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
    "#),
];

/**
 * ESTRATO 2: ENDURECIMIENTO (Índices de Aceleración)
 * Optimiza el lookup de huellas X y el despacho FIFO por estado.
 */
const ACCELERATION_INDEXES: &[(&str, &str)] = &[
    ("IDX_DP_X_COORD", "CREATE INDEX IF NOT EXISTS idx_dp_x_coord ON distinguished_points(x_coord);"),
    ("IDX_WORK_STATUS", "CREATE INDEX IF NOT EXISTS idx_work_status ON work_ranges(status);"),
];

/**
 * Ejecuta la secuencia maestra de sincronización del esquema estructural.
 *
 * # Errors:
 * Retorna error si alguna tabla base falla en solidificarse, indicando
 * un colapso en el enlace con el sustrato.
 */
#[instrument(skip(database_connection))]
pub async fn apply_full_coordination_schema(database_connection: &Connection) -> Result<()> {
    info!("🏗️ [SCHEMA_ENGINE]: Initiating structural synchronization V4.0...");

    solidify_base_strata(database_connection).await?;
    harden_access_layer(database_connection).await?;

    info!("✅ [SCHEMA_ENGINE]: Coordination Ledger V4.0 level and certified.");
    Ok(())
}

async fn solidify_base_strata(db: &Connection) -> Result<()> {
    for (identifier, sql) in TACTICAL_TABLES {
        debug!("  ↳ Solidifying: {}", identifier);
        db.execute(*sql, ()).await
            .with_context(|| format!("CRITICAL_SOLIDIFICATION_FAULT: {}", identifier))?;
    }
    Ok(())
}

async fn harden_access_layer(db: &Connection) -> Result<()> {
    for (identifier, sql) in ACCELERATION_INDEXES {
        debug!("  ↳ Hardening: {}", identifier);
        db.execute(*sql, ()).await
            .with_context(|| format!("CRITICAL_HARDENING_FAULT: {}", identifier))?;
    }
    Ok(())
}
