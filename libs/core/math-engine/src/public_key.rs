// [libs/core/math-engine/src/public_key.rs]
/*!
 * =================================================================
 * APARATO: PUBLIC KEY DESCRIPTOR ENGINE (V3.0 - SUM TYPED)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: PARSEO SEC1 ÚNICO Y DESCRIPTOR TIPADO DEL OBJETIVO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PARSE ONCE: La clave pública objetivo se valida una única vez en
 *    la configuración de búsqueda; el resto del sistema consume el
 *    descriptor tipado, nunca la cadena cruda.
 * 2. SUM TYPE SOVEREIGNTY: El formato (comprimido/extendido) es un
 *    invariante del tipo, no una inspección de prefijos dispersa.
 * 3. NOMINAL PURITY: Nomenclatura nominal absoluta.
 * =================================================================
 */

use crate::errors::MathError;

/// Longitud en dígitos hexadecimales de una clave SEC1 comprimida (33 bytes).
const COMPRESSED_SEC1_HEX_LENGTH: usize = 66;
/// Longitud en dígitos hexadecimales de una clave SEC1 extendida (65 bytes).
const UNCOMPRESSED_SEC1_HEX_LENGTH: usize = 130;

/// Descriptor tipado de la clave pública objetivo, producido una única
/// vez durante la configuración de la búsqueda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKeyDescriptor {
    /// Formato SEC1 comprimido: prefijo de paridad + coordenada X.
    Compressed {
        /// Coordenada X en hexadecimal minúscula (64 dígitos).
        x_coordinate_hexadecimal: String,
        /// Paridad de la coordenada Y (true si el prefijo era 0x03).
        y_parity_is_odd: bool,
    },
    /// Formato SEC1 extendido: prefijo 0x04 + coordenadas X e Y.
    Uncompressed {
        /// Coordenada X en hexadecimal minúscula (64 dígitos).
        x_coordinate_hexadecimal: String,
        /// Coordenada Y en hexadecimal minúscula (64 dígitos).
        y_coordinate_hexadecimal: String,
    },
}

impl PublicKeyDescriptor {
    /**
     * Parsea una clave pública SEC1 en hexadecimal hacia su descriptor tipado.
     *
     * # Errors:
     * - Prefijo fuera de {02, 03, 04}.
     * - Longitud incompatible con el prefijo declarado.
     * - Cuerpo con dígitos hexadecimales ilegales.
     */
    pub fn parse(public_key_hexadecimal: &str) -> Result<Self, MathError> {
        let normalized_material = public_key_hexadecimal.trim().to_lowercase();

        if normalized_material.len() < 2 {
            return Err(MathError::InvalidKeyFormat("SEC1_MATERIAL_TOO_SHORT".to_string()));
        }

        // La integridad hexadecimal se audita antes que la estructura.
        if hex::decode(&normalized_material).is_err() {
            return Err(MathError::MalformedHexadecimal("SEC1_BODY_NOT_HEXADECIMAL".to_string()));
        }

        match &normalized_material[..2] {
            prefix @ ("02" | "03") => {
                if normalized_material.len() != COMPRESSED_SEC1_HEX_LENGTH {
                    return Err(MathError::InvalidLength {
                        expected: COMPRESSED_SEC1_HEX_LENGTH,
                        got: normalized_material.len(),
                    });
                }
                Ok(Self::Compressed {
                    x_coordinate_hexadecimal: normalized_material[2..].to_string(),
                    y_parity_is_odd: prefix == "03",
                })
            }
            "04" => {
                if normalized_material.len() != UNCOMPRESSED_SEC1_HEX_LENGTH {
                    return Err(MathError::InvalidLength {
                        expected: UNCOMPRESSED_SEC1_HEX_LENGTH,
                        got: normalized_material.len(),
                    });
                }
                Ok(Self::Uncompressed {
                    x_coordinate_hexadecimal: normalized_material[2..66].to_string(),
                    y_coordinate_hexadecimal: normalized_material[66..].to_string(),
                })
            }
            illegal_prefix => Err(MathError::InvalidKeyFormat(format!(
                "SEC1_PREFIX_REJECTED: {}",
                illegal_prefix
            ))),
        }
    }

    /**
     * Reconstruye la representación SEC1 hexadecimal canónica (minúscula).
     */
    #[must_use]
    pub fn to_sec1_hexadecimal(&self) -> String {
        match self {
            Self::Compressed { x_coordinate_hexadecimal, y_parity_is_odd } => {
                let parity_prefix = if *y_parity_is_odd { "03" } else { "02" };
                format!("{}{}", parity_prefix, x_coordinate_hexadecimal)
            }
            Self::Uncompressed { x_coordinate_hexadecimal, y_coordinate_hexadecimal } => {
                format!("04{}{}", x_coordinate_hexadecimal, y_coordinate_hexadecimal)
            }
        }
    }
}
