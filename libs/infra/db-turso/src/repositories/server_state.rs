// [libs/infra/db-turso/src/repositories/server_state.rs]
/*!
 * =================================================================
 * APARATO: SERVER STATE REPOSITORY (V4.0 - SINGLETON CELL)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: PERSISTENCIA ATÓMICA DEL ESTADO DE BÚSQUEDA
 *
 * # Logic:
 * La celda clave/valor persiste el registro singleton completo en
 * cada cambio: no existen escrituras parciales. La lectura al
 * arranque es la única vía de supervivencia a un reinicio.
 * =================================================================
 */

use crate::errors::DbError;
use crate::TursoClient;
use kangaroo_domain_models::SearchStateRecord;
use libsql::params;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Repositorio de autoridad única para la celda de estado singleton.
pub struct ServerStateRepository {
    /// Cliente táctico para el enlace con el Ledger.
    database_client: TursoClient,
}

impl ServerStateRepository {
    /// Inicializa una nueva instancia del repositorio.
    #[must_use]
    pub fn new(database_client: TursoClient) -> Self {
        Self { database_client }
    }

    /**
     * Persiste el registro completo de búsqueda como ráfaga atómica.
     *
     * # Errors:
     * - `DbError::TransactionError`: Fallo del sellado atómico.
     */
    #[instrument(skip(self, search_state))]
    pub async fn persist(&self, search_state: &SearchStateRecord) -> Result<(), DbError> {
        let ledger_connection = self.database_client.get_connection()?;

        let atomic_state_transaction = ledger_connection
            .transaction()
            .await
            .map_err(|_| DbError::TransactionError)?;

        let state_rows: [(&str, String); 8] = [
            ("range_start", search_state.range_start.clone()),
            ("range_end", search_state.range_end.clone()),
            ("pubkey", search_state.pubkey.clone()),
            ("dp_bits", search_state.dp_bits.to_string()),
            ("bit_range", search_state.bit_range.to_string()),
            ("chunk_size", search_state.chunk_size.clone()),
            ("solved", search_state.solved.to_string()),
            ("solution", search_state.solution.clone().unwrap_or_default()),
        ];

        for (state_key, state_value) in state_rows {
            atomic_state_transaction
                .execute(
                    "INSERT OR REPLACE INTO server_state (key, value) VALUES (?1, ?2)",
                    params![state_key, state_value],
                )
                .await?;
        }

        atomic_state_transaction
            .commit()
            .await
            .map_err(|_| DbError::TransactionError)?;

        debug!("💾 [STATE_CELL]: Search state batch sealed (solved={}).", search_state.solved);
        Ok(())
    }

    /**
     * Reconstruye el registro singleton desde el Ledger.
     *
     * Retorna `None` si el servidor jamás fue configurado.
     *
     * # Errors:
     * - `DbError::MappingError`: Campos numéricos corruptos en la celda.
     */
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<Option<SearchStateRecord>, DbError> {
        let ledger_connection = self.database_client.get_connection()?;

        let mut state_query_result = ledger_connection
            .query("SELECT key, value FROM server_state", ())
            .await?;

        let mut state_map: HashMap<String, String> = HashMap::new();
        while let Some(state_row) = state_query_result.next().await? {
            let state_key: String = state_row.get(0)?;
            let state_value: String = state_row.get(1)?;
            state_map.insert(state_key, state_value);
        }

        // Sin clave pública no existe configuración previa.
        let Some(pubkey) = state_map.get("pubkey").filter(|value| !value.is_empty()) else {
            return Ok(None);
        };

        let parse_numeric_field = |field_key: &str| -> Result<u32, DbError> {
            state_map
                .get(field_key)
                .and_then(|raw_value| raw_value.parse::<u32>().ok())
                .ok_or_else(|| DbError::MappingError(format!("STATE_FIELD_CORRUPTED: {}", field_key)))
        };

        let solution_value = state_map.get("solution").cloned().unwrap_or_default();

        Ok(Some(SearchStateRecord {
            range_start: state_map.get("range_start").cloned().unwrap_or_default(),
            range_end: state_map.get("range_end").cloned().unwrap_or_default(),
            pubkey: pubkey.clone(),
            dp_bits: parse_numeric_field("dp_bits")?,
            bit_range: parse_numeric_field("bit_range")?,
            chunk_size: state_map.get("chunk_size").cloned().unwrap_or_default(),
            solved: state_map.get("solved").map(|value| value == "true").unwrap_or(false),
            solution: if solution_value.is_empty() { None } else { Some(solution_value) },
        }))
    }
}
