// [tests/mirror/libs/core/math_engine/scalar_modular_logic.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DE LÓGICA MODULAR (V4.0 - RING TORTURE)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: AUDITORÍA DEL ANILLO MODULO N Y EL CÓDEC U256
 *
 * # Mathematical Proof (Recovery Composition):
 * La fórmula de recuperación (t − w + H + S) mod n es una composición
 * de operaciones cerradas del anillo; este certificador la audita
 * contra vectores calculados de forma independiente.
 * =================================================================
 */

#[cfg(test)]
mod tests {
    use kangaroo_core_math::arithmetic::{
        decode_hexadecimal_to_u256_big_endian, encode_u256_trimmed_hexadecimal,
        shift_right_one_bit_u256_big_endian,
    };
    use kangaroo_core_math::scalar::Scalar;

    fn residue(hexadecimal: &str) -> Scalar {
        Scalar::from_u256_big_endian(
            decode_hexadecimal_to_u256_big_endian(hexadecimal).expect("DECODEC_FAULT"),
        )
    }

    fn render(value: &Scalar) -> String {
        encode_u256_trimmed_hexadecimal(&value.to_u256_big_endian(), true)
    }

    /**
     * CERTIFICACIÓN: Composición completa de la fórmula de recuperación
     * sobre vectores de referencia del protocolo.
     */
    #[test]
    fn certify_recovery_composition_vectors() {
        println!("\n🧪 [PROVING_GROUNDS]: Auditing (t − w + H + S) mod n composition...");

        // Vector 1: t=0x10, w=0x08, H=0x80, S=0 → 0x88
        let composed = residue("10")
            .subtract_modular(&residue("08"))
            .add_modular(&residue("80"))
            .add_modular(&residue("0"));
        assert_eq!(render(&composed), "88", "L1_RING_FAULT: Vector 1 deviated.");

        // Vector 2 (WILD2): t=0x20, w=0x10 → w/2=0x08, H=0x80 → 0x98
        let halved_wild = shift_right_one_bit_u256_big_endian(
            &decode_hexadecimal_to_u256_big_endian("10").expect("DECODEC_FAULT"),
        );
        let composed_wild2 = residue("20")
            .subtract_modular(&Scalar::from_u256_big_endian(halved_wild))
            .add_modular(&residue("80"));
        assert_eq!(render(&composed_wild2), "98", "L1_RING_FAULT: Vector 2 deviated.");

        // Vector 3: desplazamiento por inicio de rango S=0x100 → 0x188
        let composed_shifted = residue("10")
            .subtract_modular(&residue("08"))
            .add_modular(&residue("80"))
            .add_modular(&residue("100"));
        assert_eq!(render(&composed_shifted), "188", "L1_RING_FAULT: Vector 3 deviated.");

        println!("✅ RING: Recovery composition certified across 3 vectors.");
    }

    /**
     * CERTIFICACIÓN: El envolvimiento negativo cruza el orden n con
     * exactitud bit-perfecta.
     */
    #[test]
    fn certify_negative_wrap_through_order() {
        // t=0x08, w=0x10 → t − w = n − 8; + H(0x80) → n − 8 + 0x80 = 0x78 mod n
        let wrapped = residue("08")
            .subtract_modular(&residue("10"))
            .add_modular(&residue("80"));
        assert_eq!(render(&wrapped), "78", "L1_RING_FAULT: Negative wrap deviated.");
    }

    /**
     * CERTIFICACIÓN: Distancias de 22 bytes (convención del protocolo)
     * atraviesan el códec sin truncamiento.
     */
    #[test]
    fn certify_wide_distance_codec() {
        let wide_distance_hexadecimal = "f".repeat(44);
        let decoded = decode_hexadecimal_to_u256_big_endian(&wide_distance_hexadecimal)
            .expect("DECODEC_FAULT");

        assert_eq!(
            encode_u256_trimmed_hexadecimal(&decoded, false),
            wide_distance_hexadecimal,
            "L1_CODEC_FAULT: 22-byte distance truncated."
        );

        // La mitad entera conserva la anchura menos un bit.
        let halved = shift_right_one_bit_u256_big_endian(&decoded);
        assert_eq!(
            encode_u256_trimmed_hexadecimal(&halved, false),
            format!("7{}", "f".repeat(43)),
            "L1_CODEC_FAULT: Wide halving deviated."
        );
    }
}
