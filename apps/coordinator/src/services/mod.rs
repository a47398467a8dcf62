// [apps/coordinator/src/services/mod.rs]
/*!
 * =================================================================
 * APARATO: SERVICE REGISTRY (V4.0 - COMMAND CORE)
 * CLASIFICACIÓN: APPLICATION SERVICES (ESTRATO L1-APP)
 * RESPONSABILIDAD: REGISTRO DEL COORDINADOR Y DAEMONS DE MANTENIMIENTO
 * =================================================================
 */

/// El coordinador serializado: único escritor del Ledger.
pub mod coordinator;
/// Daemon opt-in de reclamación de unidades estancadas.
pub mod reaper;

pub use coordinator::SearchCoordinator;
pub use reaper::spawn_chunk_reaper;
