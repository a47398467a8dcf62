// [libs/core/math-engine/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: CORE MATH MASTER HUB (V4.0 - LAMBDA SYNC)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: ORQUESTACIÓN DE PRIMITIVAS MODULARES Y ORÁCULO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. COORDINATOR GRADE: Este estrato sirve al camino de peticiones
 *    del coordinador, no a un bucle caliente de minería. Las cadenas
 *    de acarreo son portables y deterministas en toda arquitectura.
 * 2. ORACLE INJECTION: El oráculo de curva es un trait intercambiable,
 *    permitiendo la certificación estructural u holográfica (k·G)
 *    sin tocar el contrato del resolutor L2.
 * 3. NOMINAL PURITY: Nomenclatura nominal absoluta en primitivas.
 *
 * # Mathematical Proof (Modular Integrity):
 * Toda la aritmética de recuperación de escalares opera módulo n
 * (el orden del grupo secp256k1). Como n > 2^255, cualquier valor de
 * 256 bits se reduce con una única sustracción condicional.
 * =================================================================
 */

/// Operaciones aritméticas U256 crudas con acarreo y préstamo portables.
pub mod arithmetic;
/// Catálogo de fallos criptográficos y matemáticos del sistema.
pub mod errors;
/// Oráculo de curva: contexto de certificación y veredictos k·G.
pub mod oracle;
/// Gestión segura de escalares secretos (Private Keys).
pub mod private_key;
/// Descriptores tipados de claves públicas SEC1 (comprimidas y extendidas).
pub mod public_key;
/// Aritmética modulo n (Orden de la curva secp256k1).
pub mod scalar;

/**
 * PRELUDIO MATEMÁTICO SOBERANO
 *
 * Única autoridad de importación autorizada para los estratos superiores
 * (L2-Solver y L3-Coordinator). Centraliza la nomenclatura nominal.
 */
pub mod prelude {
    // Aritmética U256 (Portable carry chains)
    pub use crate::arithmetic::{
        bit_length_u256_big_endian,
        ceiling_log2_u256_big_endian,
        compare_u256_big_endian,
        decode_hexadecimal_to_u256_big_endian,
        encode_u256_trimmed_hexadecimal,
        power_of_two_u256_big_endian,
        shift_right_one_bit_u256_big_endian,
        subtract_u256_big_endian,
        U256_BYTE_SIZE,
    };

    // Primitivas de Identidad Criptográfica
    pub use crate::errors::MathError;
    pub use crate::oracle::{
        global_context, CurveOracle, FullCurveEngine, StructuralOracle,
        SECP256K1_GENERATOR_X_HEXADECIMAL, SECP256K1_GENERATOR_Y_HEXADECIMAL,
    };
    pub use crate::private_key::SafePrivateKey;
    pub use crate::public_key::PublicKeyDescriptor;
    pub use crate::scalar::{Scalar, SECP256K1_CURVE_ORDER_N};
}
