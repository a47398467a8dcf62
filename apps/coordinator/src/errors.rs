// [apps/coordinator/src/errors.rs]
/*!
 * =================================================================
 * APARATO: COORDINATOR ERROR CATALOG (V4.0 - PROTOCOL TRIAGE)
 * CLASIFICACIÓN: APPLICATION LAYER (ESTRATO L3)
 * RESPONSABILIDAD: TAXONOMÍA DE FALLOS Y SU PROYECCIÓN AL PROTOCOLO
 *
 * # Logic:
 * Ningún fallo de este catálogo termina el proceso: cada variante se
 * proyecta a una respuesta de rechazo del protocolo y el servidor
 * continúa operando.
 * =================================================================
 */

use kangaroo_domain_solver::SolverError;
use kangaroo_infra_db::DbError;
use thiserror::Error;

/// Catálogo soberano de fallos del coordinador.
#[derive(Error, Debug)]
pub enum CoordinatorError {
    /// Material de entrada ilegible: prefijo SEC1 prohibido, campos no
    /// hexadecimales, rango invertido o familia de caminata desconocida.
    #[error("[L3_COORD_FAULT]: MALFORMED_INPUT -> {0}")]
    MalformedInput(String),

    /// Reconfiguración rechazada: la búsqueda alcanzó su estrato terminal.
    #[error("[L3_COORD_FAULT]: SEARCH_ALREADY_SOLVED")]
    AlreadySolved,

    /// El sustrato de persistencia rechazó la operación.
    #[error("[L3_COORD_FAULT]: STORAGE_UNAVAILABLE -> {0}")]
    Storage(#[from] DbError),

    /// El resolutor rechazó el contexto de búsqueda forjado.
    #[error("[L3_COORD_FAULT]: RESOLVER_CONTEXT_REJECTED -> {0}")]
    Solver(#[from] SolverError),
}

impl CoordinatorError {
    /// Mensaje nominal proyectado a las respuestas del protocolo.
    #[must_use]
    pub fn protocol_message(&self) -> String {
        match self {
            Self::MalformedInput(_) => "malformed-input".to_string(),
            Self::AlreadySolved => "Search already solved".to_string(),
            Self::Storage(_) => "storage-unavailable".to_string(),
            Self::Solver(_) => "malformed-input".to_string(),
        }
    }
}
