// [libs/infra/db-turso/src/repositories/work_range/mod.rs]
/*!
 * =================================================================
 * APARATO: WORK RANGE REPOSITORY (V4.2 - TACTICAL LEDGER GUARD)
 * CLASIFICACIÓN: INFRASTRUCTURE LAYER (ESTRATO L3)
 * RESPONSABILIDAD: GESTIÓN DEL CICLO DE VIDA DE UNIDADES DE TRABAJO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. MONOTONIC ORDINALS: El identificador de unidad crece de forma
 *    estrictamente monótona a través de reconfiguraciones; jamás se
 *    recicla un range_id.
 * 2. ASSIGNED SURVIVES: La regeneración purga únicamente la cola;
 *    una unidad asignada conserva su propietario.
 * 3. FIFO DISPATCH: El despacho entrega siempre el ordinal más bajo
 *    en cola, independiente de la identidad del solicitante.
 *
 * # Mathematical Proof (Transactional Exclusivity):
 * El repositorio implementa un semáforo ACID. Al encapsular la
 * búsqueda y el sellado de propiedad dentro de una transacción con
 * guardia de estado, cada range_id se entrega a lo sumo una vez.
 * =================================================================
 */

pub mod math;
pub mod queries;

use crate::errors::DbError;
use crate::TursoClient;
use kangaroo_domain_models::{ChunkStatus, WorkChunk};
use libsql::params;
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

use self::math::RangeCalculator;
use self::queries as sql_registry;

/// Repositorio de autoridad única para el inventario de unidades de trabajo.
pub struct WorkRangeRepository {
    /// Cliente táctico para el enlace con el Ledger.
    database_client: TursoClient,
}

impl WorkRangeRepository {
    /// Inicializa una nueva instancia del repositorio.
    #[must_use]
    pub fn new(database_client: TursoClient) -> Self {
        Self { database_client }
    }

    /**
     * Regenera el inventario de unidades para un intervalo global.
     *
     * Purga la cola vigente (las unidades asignadas sobreviven) y
     * cristaliza las nuevas losetas con ordinales que continúan la
     * secuencia histórica.
     *
     * # Errors:
     * - `DbError::MappingError`: Partición degenerada o fronteras corruptas.
     * - `DbError::TransactionError`: Fallo del sellado atómico.
     *
     * @returns Cantidad de unidades cristalizadas.
     */
    #[instrument(skip(self))]
    pub async fn rebuild(
        &self,
        range_start_hexadecimal: &str,
        range_end_hexadecimal: &str,
        chunk_stride_hexadecimal: &str,
        bit_range: u32,
        dp_bits: u32,
    ) -> Result<usize, DbError> {
        let partition_slices = RangeCalculator::partition(
            range_start_hexadecimal,
            range_end_hexadecimal,
            chunk_stride_hexadecimal,
        )
        .map_err(|partition_fault| DbError::MappingError(partition_fault.to_string()))?;

        let ledger_connection = self.database_client.get_connection()?;
        let rebuild_transaction = ledger_connection
            .transaction()
            .await
            .map_err(|_| DbError::TransactionError)?;

        // --- FASE 1: CONTINUIDAD DEL ORDINAL HISTÓRICO ---
        let mut highest_ordinal_query = rebuild_transaction
            .query(sql_registry::FIND_HIGHEST_RANGE_ORDINAL, ())
            .await?;

        let next_ordinal_seed = match highest_ordinal_query.next().await? {
            Some(ordinal_row) => {
                let highest_range_identifier: String = ordinal_row.get(0)?;
                Self::parse_range_ordinal(&highest_range_identifier)? + 1
            }
            None => 0,
        };

        // --- FASE 2: PURGA EXCLUSIVA DE LA COLA ---
        rebuild_transaction
            .execute(sql_registry::PURGE_PENDING_CHUNKS, ())
            .await?;

        // --- FASE 3: CRISTALIZACIÓN DE LAS NUEVAS LOSETAS ---
        let crystallized_count = partition_slices.len();
        for (slice_offset, (slice_start, slice_end)) in partition_slices.into_iter().enumerate() {
            let range_identifier =
                format!("range_{:06}", next_ordinal_seed + slice_offset as u64);

            rebuild_transaction
                .execute(
                    sql_registry::INITIALIZE_CHUNK,
                    params![
                        range_identifier,
                        slice_start,
                        slice_end,
                        bit_range as i64,
                        dp_bits as i64
                    ],
                )
                .await?;
        }

        rebuild_transaction
            .commit()
            .await
            .map_err(|_| DbError::TransactionError)?;

        info!("✨ [LEDGER]: {} work units crystallized from ordinal {}.",
            crystallized_count, next_ordinal_seed);
        Ok(crystallized_count)
    }

    /**
     * Reclama la siguiente unidad en cola para un cliente (FIFO estricto).
     *
     * # Errors:
     * - `DbError::TransactionError`: Fallo del túnel transaccional.
     *
     * @returns La unidad sellada, o `None` si la cola está vacía.
     */
    #[instrument(skip(self, assignment_timestamp))]
    pub async fn claim_next(
        &self,
        client_identifier: &str,
        assignment_timestamp: &str,
    ) -> Result<Option<WorkChunk>, DbError> {
        let ledger_connection = self.database_client.get_connection()?;
        let claim_transaction = ledger_connection
            .transaction()
            .await
            .map_err(|_| DbError::TransactionError)?;

        let mut pending_chunk_query = claim_transaction
            .query(sql_registry::FIND_NEXT_PENDING_CHUNK, ())
            .await?;

        let Some(chunk_row) = pending_chunk_query.next().await? else {
            return Ok(None);
        };

        let range_identifier: String = chunk_row.get(0)?;
        let slice_start_hexadecimal: String = chunk_row.get(1)?;
        let slice_end_hexadecimal: String = chunk_row.get(2)?;
        let bit_range: i64 = chunk_row.get(3)?;
        let dp_bits: i64 = chunk_row.get(4)?;

        let sealed_rows = claim_transaction
            .execute(
                sql_registry::CLAIM_CHUNK,
                params![client_identifier, assignment_timestamp, range_identifier.clone()],
            )
            .await?;

        if sealed_rows == 0 {
            // La guardia de estado venció a una carrera: la unidad dejó
            // de estar en cola entre la búsqueda y el sellado.
            warn!("⚠️ [LEDGER]: Unit {} escaped the claim guard.", range_identifier);
            return Ok(None);
        }

        claim_transaction
            .commit()
            .await
            .map_err(|_| DbError::TransactionError)?;

        info!("🚀 [DISPATCH]: Unit {} sealed for client {}.", range_identifier, client_identifier);

        Ok(Some(WorkChunk {
            range_id: range_identifier,
            start_hex: slice_start_hexadecimal,
            end_hex: slice_end_hexadecimal,
            bit_range: bit_range as u32,
            dp_bits: dp_bits as u32,
            status: ChunkStatus::Assigned,
            assigned_to: Some(client_identifier.to_string()),
            assigned_at: Some(assignment_timestamp.to_string()),
        }))
    }

    /**
     * Conteo de unidades por estado del ciclo de vida.
     */
    pub async fn counts_by_status(&self) -> Result<BTreeMap<String, u64>, DbError> {
        let ledger_connection = self.database_client.get_connection()?;

        let mut status_census_query = ledger_connection
            .query(sql_registry::COUNT_BY_STATUS, ())
            .await?;

        let mut status_census = BTreeMap::new();
        while let Some(census_row) = status_census_query.next().await? {
            let status_literal: String = census_row.get(0)?;
            let unit_count: i64 = census_row.get(1)?;
            status_census.insert(status_literal, unit_count as u64);
        }

        Ok(status_census)
    }

    /**
     * Devuelve a la cola las unidades asignadas más antiguas que el umbral.
     * Extensión opt-in: el núcleo jamás revoca propiedad por sí mismo.
     *
     * @returns Cantidad de unidades reclamadas.
     */
    #[instrument(skip(self))]
    pub async fn reclaim_stale(
        &self,
        expiration_threshold_timestamp: &str,
    ) -> Result<u64, DbError> {
        let ledger_connection = self.database_client.get_connection()?;

        let reclaimed_rows = ledger_connection
            .execute(
                sql_registry::RECLAIM_STALE_CHUNKS,
                params![expiration_threshold_timestamp],
            )
            .await?;

        if reclaimed_rows > 0 {
            info!("♻️  [RECOVERY]: {} stale work units returned to the queue.", reclaimed_rows);
        }

        Ok(reclaimed_rows)
    }

    /// Extrae el ordinal numérico de un identificador `range_NNNNNN`.
    fn parse_range_ordinal(range_identifier: &str) -> Result<u64, DbError> {
        range_identifier
            .strip_prefix("range_")
            .and_then(|ordinal_digits| ordinal_digits.parse::<u64>().ok())
            .ok_or_else(|| {
                DbError::MappingError(format!("RANGE_ORDINAL_CORRUPTED: {}", range_identifier))
            })
    }
}
