// [apps/coordinator/src/lib.rs]
/*!
 * =================================================================
 * APARATO: COORDINATOR LIBRARY ROOT (V4.0 - SOVEREIGN AUTHORITY)
 * CLASIFICACIÓN: CRATE ROOT (ESTRATO L3)
 * RESPONSABILIDAD: DEFINICIÓN SUPREMA DEL ÁRBOL DE MÓDULOS
 *
 * # Mathematical Proof (Modular Encapsulation):
 * Al declarar 'pub mod' aquí, Rust genera un grafo de visibilidad
 * donde 'state' y 'services' son hermanos bajo el mismo tronco
 * 'crate', permitiendo la inyección de dependencias en compilación.
 * =================================================================
 */

// --- ESTRATO DE TRANSPORTE Y ACCIÓN ---
/// Adaptadores de entrada para ráfagas HTTP del protocolo.
pub mod handlers;
/// Núcleo de mando y control para la ignición de servicios.
pub mod kernel;
/// El túnel de mando: Definición de rutas y topología de red.
pub mod routes;

// --- ESTRATO DE DATOS Y ESTADO (L1-APP) ---
/// Catálogo de fallos del coordinador y su proyección al protocolo.
pub mod errors;
/// Gestor del sistema nervioso central del coordinador.
pub mod state;

// --- ESTRATO DE SERVICIOS ---
/// El coordinador serializado y los daemons de mantenimiento.
pub mod services;

/**
 * PRELUDIO DEL COORDINADOR
 *
 * Re-exportación estratégica de los componentes necesarios para
 * la ignición mínima del sistema. Reduce el acoplamiento en 'main.rs'.
 */
pub mod prelude {
    pub use crate::errors::CoordinatorError;
    pub use crate::kernel::CoordinatorKernel;
    pub use crate::services::coordinator::SearchCoordinator;
    pub use crate::state::AppState;
}
