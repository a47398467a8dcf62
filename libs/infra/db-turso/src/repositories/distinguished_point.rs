// [libs/infra/db-turso/src/repositories/distinguished_point.rs]
/*!
 * =================================================================
 * APARATO: DISTINGUISHED POINT REPOSITORY (V4.1 - DP-UNIQ GUARD)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: PERSISTENCIA IDEMPOTENTE DE HUELLAS DE COLISIÓN
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. FIRST INSERT OWNS: La unicidad de x_coord se delega al motor
 *    (UNIQUE + INSERT OR IGNORE); el insert perdedor de una carrera
 *    se degrada a duplicado silencioso, nunca a sobrescritura.
 * 2. LINEARIZABLE LOOKUPS: Las lecturas sobre la misma huella
 *    observan siempre la fila propietaria del slot.
 *
 * # Mathematical Proof (Content-Addressed Dedup):
 * La tabla es un mapa inyectivo x_coord → evidencia. El índice único
 * convierte la detección de colisiones en un lookup O(log N) previo
 * a cada inserción.
 * =================================================================
 */

use crate::errors::DbError;
use crate::TursoClient;
use kangaroo_domain_models::{DistinguishedPoint, WalkType};
use libsql::params;
use tracing::{debug, instrument};

/// Veredicto de una inserción idempotente sobre la huella X.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// La fila fue cristalizada; el emisor posee el slot.
    Inserted,
    /// El slot ya tenía propietario; la fila existente queda intacta.
    Duplicate,
}

/// Repositorio de autoridad única para el almacén de puntos distinguidos.
pub struct DistinguishedPointRepository {
    /// Cliente táctico para el enlace con el Ledger.
    database_client: TursoClient,
}

impl DistinguishedPointRepository {
    /// Inicializa una nueva instancia del repositorio.
    #[must_use]
    pub fn new(database_client: TursoClient) -> Self {
        Self { database_client }
    }

    /**
     * Busca la evidencia propietaria de una huella X exacta.
     *
     * # Errors:
     * - `DbError::QueryError`: Rechazo del motor libSQL.
     * - `DbError::MappingError`: Discriminante de familia corrupto en la fila.
     */
    #[instrument(skip(self))]
    pub async fn lookup(
        &self,
        x_coordinate: &str,
    ) -> Result<Option<DistinguishedPoint>, DbError> {
        let ledger_connection = self.database_client.get_connection()?;

        let mut fingerprint_query_result = ledger_connection
            .query(
                "SELECT distance, kang_type, client_id, found_at \
                 FROM distinguished_points WHERE x_coord = ?1",
                params![x_coordinate],
            )
            .await?;

        let Some(evidence_row) = fingerprint_query_result.next().await? else {
            return Ok(None);
        };

        let stored_distance: String = evidence_row.get(0)?;
        let walk_discriminant: i64 = evidence_row.get(1)?;
        let discoverer_client: String = evidence_row.get(2)?;
        let found_at_timestamp: String = evidence_row.get(3)?;

        let walk_type = WalkType::from_wire_discriminant(walk_discriminant).ok_or_else(|| {
            DbError::MappingError(format!("WALK_DISCRIMINANT_CORRUPTED: {}", walk_discriminant))
        })?;

        Ok(Some(DistinguishedPoint {
            x_coord: x_coordinate.to_string(),
            distance: stored_distance,
            walk_type,
            client_id: discoverer_client,
            found_at: found_at_timestamp,
        }))
    }

    /**
     * Inserción idempotente sobre la huella X.
     *
     * El motor resuelve la carrera entre inserciones concurrentes: la
     * fila perdedora retorna `InsertOutcome::Duplicate` sin alterar la
     * evidencia residente.
     *
     * # Errors:
     * - `DbError::QueryError`: Rechazo del motor libSQL.
     */
    #[instrument(skip(self, distance_hexadecimal, found_at_timestamp))]
    pub async fn insert(
        &self,
        x_coordinate: &str,
        distance_hexadecimal: &str,
        walk_type: WalkType,
        client_identifier: &str,
        found_at_timestamp: &str,
    ) -> Result<InsertOutcome, DbError> {
        let ledger_connection = self.database_client.get_connection()?;

        let crystallized_rows = ledger_connection
            .execute(
                "INSERT OR IGNORE INTO distinguished_points \
                 (x_coord, distance, kang_type, client_id, found_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    x_coordinate,
                    distance_hexadecimal,
                    walk_type.to_wire_discriminant(),
                    client_identifier,
                    found_at_timestamp
                ],
            )
            .await?;

        if crystallized_rows == 0 {
            debug!("♻️ [DP_STORE]: Fingerprint {} already owned. Silent duplicate.", x_coordinate);
            return Ok(InsertOutcome::Duplicate);
        }

        debug!("📌 [DP_STORE]: Fingerprint {} crystallized for unit {}.", x_coordinate, client_identifier);
        Ok(InsertOutcome::Inserted)
    }

    /**
     * Cardinalidad total del almacén de huellas.
     */
    pub async fn count(&self) -> Result<u64, DbError> {
        let ledger_connection = self.database_client.get_connection()?;

        let mut cardinality_query_result = ledger_connection
            .query("SELECT COUNT(*) FROM distinguished_points", ())
            .await?;

        let Some(cardinality_row) = cardinality_query_result.next().await? else {
            return Ok(0);
        };

        let fingerprint_count: i64 = cardinality_row.get(0)?;
        Ok(fingerprint_count as u64)
    }
}
