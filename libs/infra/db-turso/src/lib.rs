// [libs/infra/db-turso/src/lib.rs]
/*!
 * =================================================================
 * APARATO: INFRA DB LIBRARY ROOT (V4.0 - TACTICAL LEDGER)
 * CLASIFICACIÓN: INFRASTRUCTURE LAYER (ESTRATO L3)
 * RESPONSABILIDAD: AUTORIDAD ÚNICA DE PERSISTENCIA DEL COORDINADOR
 *
 * # Logic:
 * Tres tablas, un único escritor: el coordinador. Este estrato
 * garantiza DP-UNIQ en la capa de almacenamiento y la exclusividad
 * transaccional de la asignación de unidades de trabajo.
 * =================================================================
 */

/// Cliente de conexión al sustrato libSQL (local, remoto o RAM anclada).
pub mod client;
/// Catálogo semántico de fallos de persistencia.
pub mod errors;
/// Repositorios de autoridad única por tabla del Ledger.
pub mod repositories;
/// Gobernanza estructural e idempotencia del esquema.
pub mod schema;

pub use client::TursoClient;
pub use errors::DbError;
