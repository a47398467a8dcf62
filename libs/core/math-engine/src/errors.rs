// [libs/core/math-engine/src/errors.rs]
/*!
 * =================================================================
 * APARATO: MATH ERROR CATALOG (V2.2 - SOBERANO)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: CATALOGACIÓN SEMÁNTICA DE FALLOS CRIPTOGRÁFICOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PANOPTICON COMPLIANCE: Mensajes con prefijos de estrato para su
 *    renderizado cromático en el rastro forense.
 * 2. ZERO ABBREVIATIONS: Nomenclatura nominal absoluta.
 * =================================================================
 */

use thiserror::Error;

/// Catálogo soberano de fallos del motor matemático L1.
#[derive(Error, Debug)]
pub enum MathError {
    /// El material de clave no respeta el formato SEC1 o el rango permitido.
    #[error("[L1_MATH_FAULT]: INVALID_KEY_FORMAT -> {0}")]
    InvalidKeyFormat(String),

    /// Un campo hexadecimal contiene dígitos ilegales o longitud prohibida.
    #[error("[L1_MATH_FAULT]: MALFORMED_HEXADECIMAL -> {0}")]
    MalformedHexadecimal(String),

    /// El buffer recibido no coincide con la longitud canónica esperada.
    #[error("[L1_MATH_FAULT]: INVALID_LENGTH -> expected {expected}, got {got}")]
    InvalidLength {
        /// Longitud canónica que el aparato exigía.
        expected: usize,
        /// Longitud física del material recibido.
        got: usize,
    },

    /// Fallo devuelto por la librería criptográfica subyacente.
    #[error("[L1_MATH_FAULT]: ELLIPTIC_CURVE_REJECTION -> {0}")]
    EllipticCurveError(#[from] secp256k1::Error),

    /// Una operación U256 desbordó el espacio de 256 bits.
    #[error("[L1_MATH_FAULT]: U256_SPACE_EXHAUSTED -> {0}")]
    ArithmeticOverflow(String),

    /// Un intervalo o paso de partición carece de anchura útil.
    #[error("[L1_MATH_FAULT]: DEGENERATE_INTERVAL -> {0}")]
    DegenerateInterval(String),
}
