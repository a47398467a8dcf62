// [libs/core/math-engine/src/arithmetic.rs]
/*!
 * =================================================================
 * APARATO: CORE ARITHMETIC KERNEL (V4.1 - PORTABLE CHAINS)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: OPERACIONES U256 BIG-ENDIAN Y CÓDEC HEXADECIMAL
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PORTABLE DETERMINISM: Cadenas de acarreo y préstamo byte a byte,
 *    idénticas en x86_64 y ARM. El coordinador no posee Hot-Path de
 *    minería que justifique ensamblador.
 * 2. CODEC SOVEREIGNTY: Decodificación hexadecimal tolerante a longitud
 *    impar (convención de los clientes C++) y renderizado recortado
 *    sin ceros a la izquierda.
 * 3. NOMINAL PURITY: Erradicación total de abreviaciones.
 * =================================================================
 */

use crate::errors::MathError;
use std::cmp::Ordering;

/// Longitud canónica de un escalar de 256 bits en bytes.
pub const U256_BYTE_SIZE: usize = 32;

/// Cantidad máxima de dígitos hexadecimales representables en U256.
pub const U256_HEX_DIGITS: usize = 64;

/**
 * Decodifica una cadena hexadecimal (1 a 64 dígitos, longitud impar
 * permitida) en un buffer Big-Endian de 256 bits alineado a la derecha.
 *
 * # Errors:
 * - `MathError::MalformedHexadecimal`: Dígitos ilegales o cadena vacía.
 * - `MathError::InvalidLength`: Más de 64 dígitos hexadecimales.
 */
pub fn decode_hexadecimal_to_u256_big_endian(
    hexadecimal_input: &str
) -> Result<[u8; U256_BYTE_SIZE], MathError> {
    let normalized_digits = hexadecimal_input.trim();

    if normalized_digits.is_empty() {
        return Err(MathError::MalformedHexadecimal("EMPTY_FIELD".to_string()));
    }
    if normalized_digits.len() > U256_HEX_DIGITS {
        return Err(MathError::InvalidLength {
            expected: U256_HEX_DIGITS,
            got: normalized_digits.len(),
        });
    }

    // Tolerancia a longitud impar: se antepone un nibble nulo.
    let padded_digits = if normalized_digits.len() % 2 == 0 {
        normalized_digits.to_string()
    } else {
        format!("0{}", normalized_digits)
    };

    let decoded_payload = hex::decode(&padded_digits)
        .map_err(|codec_fault| MathError::MalformedHexadecimal(codec_fault.to_string()))?;

    let mut result_buffer = [0u8; U256_BYTE_SIZE];
    result_buffer[U256_BYTE_SIZE - decoded_payload.len()..].copy_from_slice(&decoded_payload);
    Ok(result_buffer)
}

/**
 * Renderiza un buffer U256 como hexadecimal recortado (sin ceros a la
 * izquierda). El valor nulo se renderiza como "0".
 *
 * # Arguments:
 * * `use_uppercase` - Convención de salida: los escalares resueltos se
 *   emiten en mayúsculas, el resto del sistema opera en minúsculas.
 */
#[must_use]
pub fn encode_u256_trimmed_hexadecimal(
    value_buffer: &[u8; U256_BYTE_SIZE],
    use_uppercase: bool
) -> String {
    let full_render = hex::encode(value_buffer);
    let trimmed_render = full_render.trim_start_matches('0');

    let final_render = if trimmed_render.is_empty() { "0" } else { trimmed_render };

    if use_uppercase {
        final_render.to_uppercase()
    } else {
        final_render.to_string()
    }
}

/**
 * Compara dos escalares de 256 bits en formato Big-Endian.
 */
#[inline]
#[must_use]
pub fn compare_u256_big_endian(
    alpha_buffer: &[u8; U256_BYTE_SIZE],
    beta_buffer: &[u8; U256_BYTE_SIZE]
) -> Ordering {
    alpha_buffer.cmp(beta_buffer)
}

/**
 * Adición completa U256 + U256 con detección de desbordamiento.
 */
pub fn add_u256_big_endian(
    alpha_operand: &[u8; U256_BYTE_SIZE],
    beta_operand: &[u8; U256_BYTE_SIZE]
) -> Result<[u8; U256_BYTE_SIZE], MathError> {
    let mut result_buffer = [0u8; U256_BYTE_SIZE];
    let mut carry_accumulator = 0u16;

    for byte_index in (0..U256_BYTE_SIZE).rev() {
        let partial_sum = (alpha_operand[byte_index] as u16) +
                          (beta_operand[byte_index] as u16) +
                          carry_accumulator;
        result_buffer[byte_index] = (partial_sum & 0xFF) as u8;
        carry_accumulator = partial_sum >> 8;
    }

    if carry_accumulator > 0 {
        return Err(MathError::ArithmeticOverflow("U256_ADDITION_OVERFLOW".to_string()));
    }

    Ok(result_buffer)
}

/**
 * Sustracción U256 - U256 con detección de préstamo (Borrow).
 */
pub fn subtract_u256_big_endian(
    minuend: &[u8; U256_BYTE_SIZE],
    subtrahend: &[u8; U256_BYTE_SIZE]
) -> Result<[u8; U256_BYTE_SIZE], MathError> {
    let mut result_buffer = [0u8; U256_BYTE_SIZE];
    let mut borrow_accumulator = 0i16;

    for byte_index in (0..U256_BYTE_SIZE).rev() {
        let difference = (minuend[byte_index] as i16) -
                         (subtrahend[byte_index] as i16) -
                         borrow_accumulator;
        if difference < 0 {
            result_buffer[byte_index] = (difference + 256) as u8;
            borrow_accumulator = 1;
        } else {
            result_buffer[byte_index] = difference as u8;
            borrow_accumulator = 0;
        }
    }

    if borrow_accumulator > 0 {
        return Err(MathError::ArithmeticOverflow("U256_SUBTRACTION_UNDERFLOW".to_string()));
    }

    Ok(result_buffer)
}

/**
 * Desplazamiento lógico de un bit a la derecha (división entera por 2).
 * Requerido por la convención WILD2 de distancias duplicadas.
 */
#[must_use]
pub fn shift_right_one_bit_u256_big_endian(
    value_buffer: &[u8; U256_BYTE_SIZE]
) -> [u8; U256_BYTE_SIZE] {
    let mut result_buffer = [0u8; U256_BYTE_SIZE];
    let mut carried_bit = 0u8;

    for byte_index in 0..U256_BYTE_SIZE {
        let current_byte = value_buffer[byte_index];
        result_buffer[byte_index] = (current_byte >> 1) | (carried_bit << 7);
        carried_bit = current_byte & 0x01;
    }

    result_buffer
}

/**
 * Longitud en bits del valor (posición del bit más significativo + 1).
 * El valor nulo posee longitud cero.
 */
#[must_use]
pub fn bit_length_u256_big_endian(value_buffer: &[u8; U256_BYTE_SIZE]) -> u32 {
    for (byte_index, byte_value) in value_buffer.iter().enumerate() {
        if *byte_value != 0 {
            let bits_below = ((U256_BYTE_SIZE - 1 - byte_index) as u32) * 8;
            return bits_below + (8 - byte_value.leading_zeros());
        }
    }
    0
}

/**
 * Logaritmo binario por exceso: ⌈log₂(v)⌉.
 *
 * # Mathematical Proof:
 * Para v ≥ 2, ⌈log₂(v)⌉ equivale a la longitud en bits de (v − 1).
 * Para v ∈ {0, 1} el resultado es 0 por convención.
 */
#[must_use]
pub fn ceiling_log2_u256_big_endian(value_buffer: &[u8; U256_BYTE_SIZE]) -> u32 {
    let one_buffer = {
        let mut unit = [0u8; U256_BYTE_SIZE];
        unit[U256_BYTE_SIZE - 1] = 1;
        unit
    };

    match compare_u256_big_endian(value_buffer, &one_buffer) {
        Ordering::Less | Ordering::Equal => 0,
        Ordering::Greater => {
            // Infalible: value > 1 garantiza la ausencia de préstamo.
            let predecessor = subtract_u256_big_endian(value_buffer, &one_buffer)
                .unwrap_or([0u8; U256_BYTE_SIZE]);
            bit_length_u256_big_endian(&predecessor)
        }
    }
}

/**
 * Construye el valor 2^exponent como buffer U256.
 *
 * # Errors:
 * Retorna `MathError::ArithmeticOverflow` si el exponente excede 255.
 */
pub fn power_of_two_u256_big_endian(
    exponent: u32
) -> Result<[u8; U256_BYTE_SIZE], MathError> {
    if exponent > 255 {
        return Err(MathError::ArithmeticOverflow("EXPONENT_BEYOND_U256".to_string()));
    }

    let mut result_buffer = [0u8; U256_BYTE_SIZE];
    let byte_index = U256_BYTE_SIZE - 1 - (exponent / 8) as usize;
    result_buffer[byte_index] = 1u8 << (exponent % 8);
    Ok(result_buffer)
}
