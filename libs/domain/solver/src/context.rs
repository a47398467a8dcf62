// [libs/domain/solver/src/context.rs]
/*!
 * =================================================================
 * APARATO: SEARCH CONTEXT FORGE (V3.0 - IMMUTABLE STRATA)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: CONTEXTO INMUTABLE DE BÚSQUEDA PARA EL RESOLUTOR
 *
 * # Logic:
 * El coordinador posee el estado de búsqueda; el resolutor solo
 * necesita tres hechos congelados: el descriptor objetivo, el inicio
 * del rango y el medio-rango H = 2^(bit_range − 1). Este aparato los
 * proyecta a residuos módulo n una única vez, rompiendo el ciclo de
 * dependencias entre coordinador y resolutor.
 * =================================================================
 */

use crate::errors::SolverError;
use kangaroo_core_math::arithmetic::{
    decode_hexadecimal_to_u256_big_endian, power_of_two_u256_big_endian,
};
use kangaroo_core_math::public_key::PublicKeyDescriptor;
use kangaroo_core_math::scalar::Scalar;

/// Contexto inmutable de búsqueda, forjado en la configuración y
/// compartido por referencia con cada invocación del resolutor.
#[derive(Debug, Clone)]
pub struct SearchContext {
    /// Descriptor tipado de la clave pública objetivo.
    target_descriptor: PublicKeyDescriptor,
    /// Inicio del rango global como residuo módulo n.
    range_start_residue: Scalar,
    /// Medio-rango H = 2^(bit_range − 1) como residuo módulo n.
    half_range_residue: Scalar,
    /// Anchura en bits de la búsqueda.
    bit_range: u32,
}

impl SearchContext {
    /**
     * Forja el contexto a partir de los parámetros de configuración.
     *
     * # Errors:
     * - `SolverError::DegenerateBitRange`: bit_range nulo o fuera del
     *   espacio U256 (el medio-rango no sería proyectable).
     * - `SolverError::MathError`: inicio de rango no hexadecimal.
     */
    pub fn forge(
        target_descriptor: PublicKeyDescriptor,
        range_start_hexadecimal: &str,
        bit_range: u32,
    ) -> Result<Self, SolverError> {
        if bit_range == 0 || bit_range > 256 {
            return Err(SolverError::DegenerateBitRange(bit_range));
        }

        let range_start_buffer = decode_hexadecimal_to_u256_big_endian(range_start_hexadecimal)?;
        let half_range_buffer = power_of_two_u256_big_endian(bit_range - 1)?;

        Ok(Self {
            target_descriptor,
            range_start_residue: Scalar::from_u256_big_endian(range_start_buffer),
            half_range_residue: Scalar::from_u256_big_endian(half_range_buffer),
            bit_range,
        })
    }

    /// Descriptor tipado del objetivo de la búsqueda.
    #[must_use]
    pub fn target_descriptor(&self) -> &PublicKeyDescriptor {
        &self.target_descriptor
    }

    /// Inicio del rango global como residuo módulo n.
    #[must_use]
    pub fn range_start_residue(&self) -> &Scalar {
        &self.range_start_residue
    }

    /// Medio-rango H como residuo módulo n.
    #[must_use]
    pub fn half_range_residue(&self) -> &Scalar {
        &self.half_range_residue
    }

    /// Anchura en bits de la búsqueda configurada.
    #[must_use]
    pub fn bit_range(&self) -> u32 {
        self.bit_range
    }
}
