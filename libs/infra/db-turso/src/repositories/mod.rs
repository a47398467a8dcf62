// [libs/infra/db-turso/src/repositories/mod.rs]
/*!
 * =================================================================
 * APARATO: REPOSITORY REGISTRY (V4.0 - SINGLE WRITER)
 * CLASIFICACIÓN: INFRASTRUCTURE LAYER (ESTRATO L3)
 * RESPONSABILIDAD: REGISTRO DE AUTORIDADES ÚNICAS POR TABLA
 * =================================================================
 */

/// Almacén de puntos distinguidos (unicidad de huella X).
pub mod distinguished_point;
/// Celda clave/valor del estado singleton de búsqueda.
pub mod server_state;
/// Ledger de unidades de trabajo con ciclo de vida exclusivo.
pub mod work_range;

pub use distinguished_point::{DistinguishedPointRepository, InsertOutcome};
pub use server_state::ServerStateRepository;
pub use work_range::WorkRangeRepository;
