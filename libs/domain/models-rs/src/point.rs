// [libs/domain/models-rs/src/point.rs]
/*!
 * =================================================================
 * APARATO: DISTINGUISHED POINT MODELS (V3.1 - WALK TYPED)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: CONTRATOS DE PUNTOS DISTINGUIDOS Y FAMILIAS DE CAMINATA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. TYPED WALKS: La familia de caminata es un enum cerrado; los
 *    discriminantes del cable (0/1/2) se validan una sola vez en la
 *    frontera de ingesta.
 * 2. IMMUTABLE EVIDENCE: Un punto distinguido nunca muta tras su
 *    inserción; el primer insert exitoso posee el slot.
 * =================================================================
 */

use serde::{Deserialize, Serialize};

/// Familia de caminata pseudo-aleatoria del algoritmo de los Canguros.
///
/// TAME parte de un escalar conocido; WILD parte del offset objetivo
/// desconocido. WILD2 acumula distancias duplicadas respecto a WILD1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalkType {
    /// Caminata domesticada (discriminante de cable 0).
    Tame,
    /// Caminata salvaje primaria (discriminante de cable 1).
    Wild1,
    /// Caminata salvaje de distancia duplicada (discriminante de cable 2).
    Wild2,
}

impl WalkType {
    /// Valida un discriminante de cable hacia la familia tipada.
    #[must_use]
    pub fn from_wire_discriminant(wire_value: i64) -> Option<Self> {
        match wire_value {
            0 => Some(Self::Tame),
            1 => Some(Self::Wild1),
            2 => Some(Self::Wild2),
            _ => None,
        }
    }

    /// Proyecta la familia hacia su discriminante de cable canónico.
    #[must_use]
    pub fn to_wire_discriminant(self) -> i64 {
        match self {
            Self::Tame => 0,
            Self::Wild1 => 1,
            Self::Wild2 => 2,
        }
    }

    /// Determina si la familia pertenece al estrato salvaje.
    #[must_use]
    pub fn is_wild(self) -> bool {
        !matches!(self, Self::Tame)
    }

    /// Etiqueta nominal para el rastro forense.
    #[must_use]
    pub fn nominal_label(self) -> &'static str {
        match self {
            Self::Tame => "TAME",
            Self::Wild1 => "WILD1",
            Self::Wild2 => "WILD2",
        }
    }
}

/// Punto distinguido tal como se ingesta desde el cable (pre-validación).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmittedPoint {
    /// Huella de la coordenada X (12 bytes, 24 dígitos hexadecimales).
    pub x_coord: String,
    /// Distancia acumulada de la caminata (22 bytes, hexadecimal sin signo).
    pub distance: String,
    /// Discriminante de familia crudo (0=TAME, 1=WILD1, 2=WILD2).
    pub kang_type: i64,
}

/// Punto distinguido cristalizado en el Ledger (evidencia inmutable).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistinguishedPoint {
    /// Huella de la coordenada X (propietaria única del slot).
    pub x_coord: String,
    /// Distancia acumulada en hexadecimal sin signo.
    pub distance: String,
    /// Familia de caminata sellada en la inserción.
    pub walk_type: WalkType,
    /// Identificador opaco del cliente descubridor.
    pub client_id: String,
    /// Marca temporal RFC3339 del servidor en la inserción.
    pub found_at: String,
}
