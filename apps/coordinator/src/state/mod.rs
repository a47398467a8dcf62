// [apps/coordinator/src/state/mod.rs]
/*!
 * =================================================================
 * APARATO: SOVEREIGN STATE ORCHESTRATOR (V4.0 - COMPOSITION ROOT)
 * CLASIFICACIÓN: APPLICATION STATE (ESTRATO L1-APP)
 * RESPONSABILIDAD: PLACA BASE DE DEPENDENCIAS DEL COORDINADOR
 *
 * # Logic:
 * El coordinador es estado global mutable por naturaleza; aquí se
 * modela como dependencia inyectada en la superficie de peticiones,
 * con construcción y ciclo de vida explícitos en el Kernel.
 * =================================================================
 */

use crate::services::coordinator::SearchCoordinator;
use kangaroo_infra_db::TursoClient;
use std::sync::Arc;

/**
 * Contenedor de estado compartido (Thread-Safe) para el coordinador.
 */
#[derive(Clone)]
pub struct AppState {
    /// Cliente táctico para el Motor A (libSQL).
    pub database_client: TursoClient,
    /// Coordinador serializado de la búsqueda (único escritor del Ledger).
    pub search_coordinator: Arc<SearchCoordinator>,
}

impl AppState {
    /// Forja el estado maestro inyectando las dependencias selladas.
    #[must_use]
    pub fn new(database_client: TursoClient, search_coordinator: Arc<SearchCoordinator>) -> Self {
        Self { database_client, search_coordinator }
    }
}
