// [libs/core/math-engine/src/oracle.rs]
/*!
 * =================================================================
 * APARATO: CURVE ORACLE ENGINE (V3.1 - DUAL CERTIFICATION)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: CONTEXTO DE CERTIFICACIÓN Y VEREDICTOS K·G
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PLUGGABLE TRUTH: El oráculo es un trait inyectado en el resolutor.
 *    El contrato del resolutor es idéntico bajo certificación
 *    estructural o bajo multiplicación escalar real.
 * 2. CONTEXT LOCALITY: El singleton secp256k1 vive junto a su único
 *    consumidor; ningún otro estrato multiplica puntos.
 * 3. HONEST STUB: El oráculo estructural acepta todo candidato y lo
 *    declara; jamás finge haber ejecutado k·G.
 * 4. FULL ENGINE: La certificación holográfica deriva k·G con el
 *    contexto pre-computado y compara la serialización SEC1 contra
 *    el descriptor objetivo.
 *
 * # Mathematical Proof (Soundness of Full Certification):
 * Si serialize(k·G) coincide bit a bit con el objetivo SEC1, entonces
 * k es el logaritmo discreto buscado: la serialización SEC1 es
 * inyectiva sobre los puntos del grupo.
 * =================================================================
 */

use crate::errors::MathError;
use crate::private_key::SafePrivateKey;
use crate::public_key::PublicKeyDescriptor;
use secp256k1::{All, PublicKey, Secp256k1};
use std::sync::LazyLock;
use tracing::debug;

/// Contexto secp256k1 compartido por todas las certificaciones del proceso.
///
/// Las tablas de pre-cómputo de G se forjan una única vez, en el primer
/// candidato certificado; cada colisión posterior las reutiliza sin coste.
static CERTIFICATION_CONTEXT: LazyLock<Secp256k1<All>> = LazyLock::new(Secp256k1::new);

/// Acceso al contexto de certificación del proceso.
#[inline]
#[must_use]
pub fn global_context() -> &'static Secp256k1<All> {
    &CERTIFICATION_CONTEXT
}

/// Coordenada X afín del punto generador G de secp256k1.
pub const SECP256K1_GENERATOR_X_HEXADECIMAL: &str =
    "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

/// Coordenada Y afín del punto generador G de secp256k1.
pub const SECP256K1_GENERATOR_Y_HEXADECIMAL: &str =
    "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

/// Contrato del oráculo de curva consumido por el resolutor de colisiones.
pub trait CurveOracle: Send + Sync {
    /**
     * Certifica un escalar candidato contra el descriptor objetivo.
     *
     * Retorna `Ok(true)` si el oráculo avala que `candidate · G` produce
     * la clave pública objetivo (o si el oráculo opera en modo estructural
     * y delega la validación de rango al llamador).
     *
     * # Errors:
     * Fallos internos de la librería criptográfica. El rechazo de un
     * candidato NO es un error: es `Ok(false)`.
     */
    fn certify_scalar_against_target(
        &self,
        candidate_scalar_bytes: &[u8; 32],
        target_descriptor: &PublicKeyDescriptor,
    ) -> Result<bool, MathError>;

    /// Etiqueta nominal del oráculo para el rastro forense.
    fn nominal_identifier(&self) -> &'static str;
}

/// Oráculo estructural: acepta todo candidato dentro del rango privado.
///
/// Es el modo por defecto del coordinador: honesto sobre su alcance,
/// intercambiable por el motor completo sin tocar el resolutor.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralOracle;

impl CurveOracle for StructuralOracle {
    fn certify_scalar_against_target(
        &self,
        _candidate_scalar_bytes: &[u8; 32],
        _target_descriptor: &PublicKeyDescriptor,
    ) -> Result<bool, MathError> {
        // La validación estructural 0 < k < n pertenece al resolutor;
        // este oráculo declara explícitamente que no ejecuta k·G.
        Ok(true)
    }

    fn nominal_identifier(&self) -> &'static str {
        "STRUCTURAL_ORACLE"
    }
}

/// Motor de certificación completa: deriva k·G y compara la forma SEC1.
#[derive(Debug, Default, Clone, Copy)]
pub struct FullCurveEngine;

impl CurveOracle for FullCurveEngine {
    fn certify_scalar_against_target(
        &self,
        candidate_scalar_bytes: &[u8; 32],
        target_descriptor: &PublicKeyDescriptor,
    ) -> Result<bool, MathError> {
        // Un candidato fuera del rango privado (nulo) no es certificable.
        let Ok(private_key_handle) = SafePrivateKey::from_bytes(candidate_scalar_bytes) else {
            debug!("🧪 [ORACLE]: Candidate outside private range. Certification denied.");
            return Ok(false);
        };

        let derived_point =
            PublicKey::from_secret_key(global_context(), private_key_handle.as_inner());

        let derived_sec1_hexadecimal = match target_descriptor {
            PublicKeyDescriptor::Compressed { .. } => hex::encode(derived_point.serialize()),
            PublicKeyDescriptor::Uncompressed { .. } => {
                hex::encode(derived_point.serialize_uncompressed())
            }
        };

        Ok(derived_sec1_hexadecimal == target_descriptor.to_sec1_hexadecimal())
    }

    fn nominal_identifier(&self) -> &'static str {
        "FULL_CURVE_ENGINE"
    }
}
