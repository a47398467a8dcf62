// [libs/infra/db-turso/src/repositories/work_range/queries.rs]
/*!
 * =================================================================
 * APARATO: WORK LEDGER SQL STORE (V4.0 - FIFO EXCLUSIVITY)
 * CLASIFICACIÓN: INFRASTRUCTURE SQL (ESTRATO L3)
 * RESPONSABILIDAD: DEFINICIÓN DE SENTENCIAS ATÓMICAS DEL LEDGER
 *
 * # Mathematical Proof (ACID Consistency):
 * Las consultas utilizan guardias de estado (WHERE status = 'pending')
 * para garantizar que la transición de propiedad sea una operación
 * atómica indivisible sobre el sustrato libSQL.
 * =================================================================
 */

// --- ESTRATO DE REGENERACIÓN ---

/// Recupera el identificador más alto jamás emitido.
/// El ordinal continúa creciendo a través de reconfiguraciones.
pub const FIND_HIGHEST_RANGE_ORDINAL: &str = r#"
    SELECT range_id FROM work_ranges
    ORDER BY range_id DESC
    LIMIT 1
"#;

/// Purga exclusivamente las unidades en cola.
/// Una unidad asignada sobrevive a toda reconfiguración.
pub const PURGE_PENDING_CHUNKS: &str = r#"
    DELETE FROM work_ranges WHERE status = 'pending'
"#;

/// Inicializa una nueva unidad de trabajo en estado de cola.
pub const INITIALIZE_CHUNK: &str = r#"
    INSERT INTO work_ranges
        (range_id, start_hex, end_hex, bit_range, dp_bits, status)
    VALUES (?1, ?2, ?3, ?4, ?5, 'pending')
"#;

// --- ESTRATO DE ASIGNACIÓN EXCLUSIVA ---

/// Localiza la unidad en cola con el identificador más bajo (FIFO).
pub const FIND_NEXT_PENDING_CHUNK: &str = r#"
    SELECT range_id, start_hex, end_hex, bit_range, dp_bits
    FROM work_ranges
    WHERE status = 'pending'
    ORDER BY range_id
    LIMIT 1
"#;

/// Sella la propiedad de la unidad de forma atómica.
/// La guardia de estado impide la doble entrega bajo carrera.
pub const CLAIM_CHUNK: &str = r#"
    UPDATE work_ranges
    SET assigned_to = ?1,
        assigned_at = ?2,
        status = 'assigned'
    WHERE range_id = ?3 AND status = 'pending'
"#;

// --- ESTRATO DE OBSERVACIÓN ---

/// Conteo de unidades por estado del ciclo de vida.
pub const COUNT_BY_STATUS: &str = r#"
    SELECT status, COUNT(*) FROM work_ranges
    GROUP BY status
"#;

// --- ESTRATO DE RECUPERACIÓN (EXTENSIÓN OPT-IN) ---

/// Devuelve a la cola las unidades asignadas cuya marca temporal
/// quedó por debajo del umbral de reclamación.
pub const RECLAIM_STALE_CHUNKS: &str = r#"
    UPDATE work_ranges
    SET status = 'pending',
        assigned_to = NULL,
        assigned_at = NULL
    WHERE status = 'assigned' AND assigned_at < ?1
"#;
