// [libs/core/math-engine/src/scalar.rs]
/*!
 * =================================================================
 * APARATO: SCALAR MODULAR ENGINE (V4.2 - RING COMPLETE)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: ARITMÉTICA MODULO N (ORDEN DE LA CURVA SECP256K1)
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. RING CLOSURE: El aparato expone adición y sustracción cerradas
 *    módulo n, el corazón de la recuperación de escalares por colisión.
 * 2. ATOMIC REDUCTION: La reducción k mod n aprovecha que n > 2^255,
 *    eliminando bucles: una única sustracción condicional basta.
 * 3. ZERO TOLERANCE RELAXED: A diferencia del material de clave privada,
 *    los escalares intermedios de recuperación admiten el valor nulo.
 *
 * # Mathematical Proof (Single Conditional Subtract):
 * Sea v un valor de 256 bits arbitrario. Como 2^256 < 2n, se cumple
 * v < 2n, por lo que v mod n ∈ {v, v − n}. Análogamente a + b < 2n
 * para a, b < n, cerrando la adición con la misma sustracción.
 * =================================================================
 */

/// El orden 'n' de la curva secp256k1 en representación Little-Endian (Limb 64-bit).
/// n = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141
pub const SECP256K1_CURVE_ORDER_N: [u64; 4] = [
    0xBFD25E8CD0364141, // Limb 0 (Low)
    0xBAAEDCE6AF48A03B, // Limb 1
    0xFFFFFFFFFFFFFFFE, // Limb 2
    0xFFFFFFFFFFFFFFFF, // Limb 3 (High)
];

/// Residuo del anillo Z_n sobre el orden del grupo secp256k1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar {
    /// Palabras de 64 bits que componen el residuo (Little-Endian).
    scalar_limbs: [u64; 4],
}

/// Adición de precisión múltiple con acarreo saliente.
#[inline(always)]
fn limbs_add(alpha: &[u64; 4], beta: &[u64; 4]) -> ([u64; 4], u64) {
    let mut result_limbs = [0u64; 4];
    let mut carry_accumulator: u128 = 0;

    for limb_index in 0..4 {
        let partial_sum = (alpha[limb_index] as u128)
            + (beta[limb_index] as u128)
            + carry_accumulator;
        result_limbs[limb_index] = partial_sum as u64;
        carry_accumulator = partial_sum >> 64;
    }

    (result_limbs, carry_accumulator as u64)
}

/// Sustracción de precisión múltiple con préstamo saliente.
#[inline(always)]
fn limbs_subtract(minuend: &[u64; 4], subtrahend: &[u64; 4]) -> ([u64; 4], u64) {
    let mut result_limbs = [0u64; 4];
    let mut borrow_accumulator: u64 = 0;

    for limb_index in 0..4 {
        let (partial_difference, first_borrow) =
            minuend[limb_index].overflowing_sub(subtrahend[limb_index]);
        let (final_difference, second_borrow) =
            partial_difference.overflowing_sub(borrow_accumulator);

        result_limbs[limb_index] = final_difference;
        borrow_accumulator = u64::from(first_borrow) + u64::from(second_borrow);
    }

    (result_limbs, borrow_accumulator)
}

impl Scalar {
    /**
     * Construye un residuo módulo n a partir de un buffer Big-Endian de 32 bytes.
     *
     * # Mathematical Proof:
     * Si el input es >= n, se aplica una reducción modular de un solo paso
     * ya que 2n > 2^256. El valor nulo es un residuo legítimo del anillo.
     */
    #[must_use]
    pub fn from_u256_big_endian(input_bytes: [u8; 32]) -> Self {
        let mut scalar_limbs = [0u64; 4];
        for (limb_index, limb_reference) in scalar_limbs.iter_mut().enumerate() {
            let byte_start_offset = (3 - limb_index) * 8;
            *limb_reference = u64::from_be_bytes(
                input_bytes[byte_start_offset..byte_start_offset + 8]
                    .try_into()
                    .expect("U256_LIMB_WINDOW_INVARIANT"),
            );
        }

        let mut candidate_residue = Self { scalar_limbs };

        // Protocolo de Reducción Atómica
        if candidate_residue.is_greater_than_or_equal_to_order() {
            let (reduced_limbs, _) =
                limbs_subtract(&candidate_residue.scalar_limbs, &SECP256K1_CURVE_ORDER_N);
            candidate_residue.scalar_limbs = reduced_limbs;
        }

        candidate_residue
    }

    /**
     * Compara el residuo actual contra el orden n.
     *
     * # Performance:
     * Escaneo de palabras de alta significancia (High-to-Low), O(1).
     */
    #[inline(always)]
    #[must_use]
    pub fn is_greater_than_or_equal_to_order(&self) -> bool {
        for limb_index in (0..4).rev() {
            if self.scalar_limbs[limb_index] > SECP256K1_CURVE_ORDER_N[limb_index] {
                return true;
            }
            if self.scalar_limbs[limb_index] < SECP256K1_CURVE_ORDER_N[limb_index] {
                return false;
            }
        }
        true
    }

    /**
     * Adición cerrada en el anillo: (self + other) mod n.
     */
    #[must_use]
    pub fn add_modular(&self, other_residue: &Self) -> Self {
        let (raw_sum_limbs, carry_out) = limbs_add(&self.scalar_limbs, &other_residue.scalar_limbs);

        let mut result = Self { scalar_limbs: raw_sum_limbs };

        // Con acarreo saliente la suma real supera 2^256 > n: la sustracción
        // envolvente de n devuelve el residuo exacto. Sin acarreo aplica la
        // reducción condicional estándar.
        if carry_out != 0 {
            let (wrapped_limbs, _) = limbs_subtract(&result.scalar_limbs, &SECP256K1_CURVE_ORDER_N);
            result.scalar_limbs = wrapped_limbs;
        } else if result.is_greater_than_or_equal_to_order() {
            let (reduced_limbs, _) = limbs_subtract(&result.scalar_limbs, &SECP256K1_CURVE_ORDER_N);
            result.scalar_limbs = reduced_limbs;
        }

        result
    }

    /**
     * Sustracción cerrada en el anillo: (self − other) mod n.
     */
    #[must_use]
    pub fn subtract_modular(&self, other_residue: &Self) -> Self {
        let (raw_difference_limbs, borrow_out) =
            limbs_subtract(&self.scalar_limbs, &other_residue.scalar_limbs);

        if borrow_out == 0 {
            return Self { scalar_limbs: raw_difference_limbs };
        }

        // Préstamo saliente: el resultado envolvió el espacio de 256 bits.
        // Sumar n de forma envolvente re-proyecta el residuo al anillo.
        let (normalized_limbs, _) = limbs_add(&raw_difference_limbs, &SECP256K1_CURVE_ORDER_N);
        Self { scalar_limbs: normalized_limbs }
    }

    /**
     * Determina si el residuo es el elemento nulo del anillo.
     */
    #[inline(always)]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.scalar_limbs.iter().all(|&limb_value| limb_value == 0)
    }

    /**
     * Transforma el residuo en un buffer Big-Endian de 32 bytes.
     * Utilizado para la exportación del escalar recuperado y su certificación.
     */
    #[must_use]
    pub fn to_u256_big_endian(&self) -> [u8; 32] {
        let mut output_bytes = [0u8; 32];
        for limb_index in 0..4 {
            let byte_start_offset = (3 - limb_index) * 8;
            let limb_bytes = self.scalar_limbs[limb_index].to_be_bytes();
            output_bytes[byte_start_offset..byte_start_offset + 8].copy_from_slice(&limb_bytes);
        }
        output_bytes
    }
}
