// [libs/infra/db-turso/src/repositories/work_range/math.rs]
/*!
 * =================================================================
 * APARATO: RANGE PARTITION CALCULATOR (V4.0 - U256 SLICER)
 * CLASIFICACIÓN: INFRASTRUCTURE MATH (ESTRATO L3)
 * RESPONSABILIDAD: PARTICIÓN DETERMINISTA DEL ESPACIO DE ESCALARES
 *
 * # Mathematical Proof (Half-Open Tiling):
 * El intervalo global [start, end) se recubre con losetas
 * [c, min(c + paso, end)) consecutivas y disjuntas. La última loseta
 * se trunca en end, garantizando cobertura exacta sin solapamiento.
 * =================================================================
 */

use kangaroo_core_math::arithmetic::{
    add_u256_big_endian, compare_u256_big_endian, decode_hexadecimal_to_u256_big_endian,
    encode_u256_trimmed_hexadecimal,
};
use kangaroo_core_math::errors::MathError;
use std::cmp::Ordering;

/// Motor de cálculo de particiones U256 del Ledger.
pub struct RangeCalculator;

impl RangeCalculator {
    /**
     * Particiona [start, end) en losetas semiabiertas de anchura fija.
     *
     * Retorna los pares (inicio, fin) en hexadecimal minúscula recortada,
     * en orden ascendente de inicio.
     *
     * # Errors:
     * - `MathError::DegenerateInterval`: paso nulo o end <= start.
     * - `MathError::MalformedHexadecimal`: fronteras ilegibles.
     */
    pub fn partition(
        range_start_hexadecimal: &str,
        range_end_hexadecimal: &str,
        chunk_stride_hexadecimal: &str,
    ) -> Result<Vec<(String, String)>, MathError> {
        let range_start = decode_hexadecimal_to_u256_big_endian(range_start_hexadecimal)?;
        let range_end = decode_hexadecimal_to_u256_big_endian(range_end_hexadecimal)?;
        let chunk_stride = decode_hexadecimal_to_u256_big_endian(chunk_stride_hexadecimal)?;

        if chunk_stride.iter().all(|&byte_value| byte_value == 0) {
            return Err(MathError::DegenerateInterval("CHUNK_STRIDE_NULL".to_string()));
        }
        if compare_u256_big_endian(&range_end, &range_start) != Ordering::Greater {
            return Err(MathError::DegenerateInterval("RANGE_END_BELOW_START".to_string()));
        }

        let mut partition_slices = Vec::new();
        let mut current_boundary = range_start;

        while compare_u256_big_endian(&current_boundary, &range_end) == Ordering::Less {
            // Un desbordamiento del paso significa que la loseta excede el
            // espacio U256: se trunca directamente en la frontera final.
            let tentative_end = add_u256_big_endian(&current_boundary, &chunk_stride)
                .unwrap_or(range_end);

            let slice_end = if compare_u256_big_endian(&tentative_end, &range_end)
                == Ordering::Greater
            {
                range_end
            } else {
                tentative_end
            };

            partition_slices.push((
                encode_u256_trimmed_hexadecimal(&current_boundary, false),
                encode_u256_trimmed_hexadecimal(&slice_end, false),
            ));

            current_boundary = slice_end;
        }

        Ok(partition_slices)
    }
}
