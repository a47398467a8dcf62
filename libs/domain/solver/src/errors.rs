// [libs/domain/solver/src/errors.rs]
/*!
 * =================================================================
 * APARATO: SOLVER ERROR CATALOG (V2.0 - SOBERANO)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: CATALOGACIÓN SEMÁNTICA DE FALLOS DE RESOLUCIÓN
 * =================================================================
 */

use kangaroo_core_math::errors::MathError;
use thiserror::Error;

/// Catálogo soberano de fallos del resolutor de colisiones.
#[derive(Error, Debug)]
pub enum SolverError {
    /// La anchura de búsqueda declarada no admite un medio-rango.
    #[error("[L2_SOLVER_FAULT]: BIT_RANGE_DEGENERATE -> {0}")]
    DegenerateBitRange(u32),

    /// Fallo aritmético o criptográfico propagado desde el estrato L1.
    #[error("[L2_SOLVER_FAULT]: MATH_STRATA_REJECTION -> {0}")]
    MathError(#[from] MathError),
}
