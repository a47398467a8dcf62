// [libs/domain/solver/src/lib.rs]
/*!
 * =================================================================
 * APARATO: COLLISION SOLVER HUB (V4.0 - SOTA ALIGNED)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: AUTORIDAD ÚNICA DE RECUPERACIÓN DE ESCALARES
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PURE ARITHMETIC: El resolutor no suspende, no persiste y no
 *    comparte estado mutable; consume un contexto de búsqueda
 *    inmutable forjado en la configuración.
 * 2. ORACLE INJECTION: La certificación del candidato se delega al
 *    oráculo de curva L1, intercambiable sin tocar este estrato.
 * 3. HONEST OUTCOMES: Los casos salvaje-salvaje se clasifican y se
 *    reportan como candidatos irresueltos; jamás se fabrica un escalar.
 * =================================================================
 */

/// Contexto inmutable de búsqueda forjado en la configuración.
pub mod context;
/// Catálogo de fallos del estrato de resolución.
pub mod errors;
/// Clasificación de solvencia y recuperación tame-wild.
pub mod resolver;

pub use context::SearchContext;
pub use errors::SolverError;
pub use resolver::{CollisionCase, CollisionResolver, Resolution};
