// [libs/core/math-engine/src/private_key.rs]
// =================================================================
// APARATO: PRIVATE KEY MANAGER (V2.1 - ORACLE GRADE)
// RESPONSABILIDAD: GESTIÓN SEGURA DE ESCALARES SECRETOS CANDIDATOS
// =================================================================

use crate::errors::MathError;
use secp256k1::SecretKey;

/// Wrapper seguro para una clave privada de curva elíptica secp256k1.
/// Garantiza: 0 < k < n
#[derive(Debug, Clone)]
pub struct SafePrivateKey {
    inner: SecretKey,
}

impl SafePrivateKey {
    /// Intenta construir una clave privada a partir de bytes crudos.
    ///
    /// # Errors:
    /// Retorna `MathError` si la longitud no es canónica o si el escalar
    /// cae fuera del rango privado permitido (nulo o >= n).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MathError> {
        if bytes.len() != 32 {
            return Err(MathError::InvalidLength {
                expected: 32,
                got: bytes.len(),
            });
        }

        let secret_key = SecretKey::from_slice(bytes).map_err(MathError::EllipticCurveError)?;

        Ok(Self { inner: secret_key })
    }

    /// Serializa la clave a 32 bytes.
    #[inline]
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.inner.secret_bytes()
    }

    /// Referencia al objeto interno (Zero-Copy).
    #[inline(always)]
    #[must_use]
    pub fn as_inner(&self) -> &SecretKey {
        &self.inner
    }
}
