// [tests/mirror/libs/core/math_engine/curve_oracle_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DEL ORÁCULO DE CURVA (V4.0 - K·G PARITY)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: AUDITORÍA DE CERTIFICACIÓN HOLOGRÁFICA k·G
 *
 * # Mathematical Proof (Oracle Soundness):
 * Para todo escalar k derivamos Q = k·G con la librería criptográfica
 * y exigimos que el oráculo completo certifique exactamente k (y
 * rechace k ± 1) contra el descriptor de Q.
 * =================================================================
 */

#[cfg(test)]
mod tests {
    use kangaroo_core_math::oracle::{global_context, CurveOracle, FullCurveEngine};
    use kangaroo_core_math::public_key::PublicKeyDescriptor;
    use secp256k1::{PublicKey, SecretKey};

    fn scalar_buffer(scalar_value: u64) -> [u8; 32] {
        let mut buffer = [0u8; 32];
        buffer[24..].copy_from_slice(&scalar_value.to_be_bytes());
        buffer
    }

    fn derive_target_descriptor(scalar_value: u64, use_compression: bool) -> PublicKeyDescriptor {
        let secret_key =
            SecretKey::from_slice(&scalar_buffer(scalar_value)).expect("SECRET_MATERIAL_FAULT");
        let derived_point = PublicKey::from_secret_key(global_context(), &secret_key);

        let sec1_hexadecimal = if use_compression {
            hex::encode(derived_point.serialize())
        } else {
            hex::encode(derived_point.serialize_uncompressed())
        };

        PublicKeyDescriptor::parse(&sec1_hexadecimal).expect("DESCRIPTOR_FAULT")
    }

    /**
     * CERTIFICACIÓN: Paridad k·G sobre una malla de escalares en ambos
     * formatos SEC1.
     */
    #[test]
    fn certify_oracle_parity_grid() {
        println!("\n🧪 [PROVING_GROUNDS]: Auditing k·G certification parity...");
        let mut anomalies_detected = 0u32;

        for scalar_value in [1u64, 2, 42, 0xFFFF, 0xDEAD_BEEF] {
            for use_compression in [true, false] {
                let descriptor = derive_target_descriptor(scalar_value, use_compression);

                let genuine_verdict = FullCurveEngine
                    .certify_scalar_against_target(&scalar_buffer(scalar_value), &descriptor)
                    .expect("ORACLE_FAULT");
                if !genuine_verdict {
                    println!("   ❌ Genuine scalar {:#x} denied (compressed={}).", scalar_value, use_compression);
                    anomalies_detected += 1;
                }

                let forged_verdict = FullCurveEngine
                    .certify_scalar_against_target(&scalar_buffer(scalar_value + 1), &descriptor)
                    .expect("ORACLE_FAULT");
                if forged_verdict {
                    println!("   ❌ Forged scalar {:#x} certified (compressed={}).", scalar_value + 1, use_compression);
                    anomalies_detected += 1;
                }
            }
        }

        assert_eq!(anomalies_detected, 0, "La paridad del oráculo ha sido comprometida.");
        println!("✅ ORACLE: Parity grid certified (5 scalars × 2 formats).");
    }
}
