// [libs/domain/solver/src/resolver.rs]
/*!
 * =================================================================
 * APARATO: COLLISION RESOLUTION ENGINE (V4.2 - SOTA RECOVERY)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: SOLVENCIA DE COLISIONES Y RECUPERACIÓN DE ESCALARES
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SYMMETRIC CONTRACT: El veredicto es invariante ante el
 *    intercambio de los dos puntos en colisión.
 * 2. WILD2 CONVENTION: La familia WILD2 acumula distancias duplicadas;
 *    la recuperación divide la distancia cruda entre 2 (división
 *    entera sin signo) antes de proyectar al anillo.
 * 3. NO FABRICATION: Los casos salvaje-salvaje quedan clasificados
 *    como candidatos irresueltos hasta que exista la reconstrucción
 *    de puntos; el estrato terminal exige un escalar certificado.
 *
 * # Mathematical Proof (Tame-Wild Recovery):
 * Sea t la distancia domesticada, w la salvaje, H = 2^(bit_range − 1)
 * y S el inicio del rango. La convergencia de ambas caminatas en la
 * misma X implica:
 *
 * ```text
 * k = (t − w + H) mod n          (WILD1)
 * k = (t − ⌊w/2⌋ + H) mod n      (WILD2)
 * k_final = (k + S) mod n
 * ```
 * =================================================================
 */

use crate::context::SearchContext;
use crate::errors::SolverError;
use kangaroo_core_math::arithmetic::{
    compare_u256_big_endian, decode_hexadecimal_to_u256_big_endian,
    encode_u256_trimmed_hexadecimal, shift_right_one_bit_u256_big_endian, U256_BYTE_SIZE,
};
use kangaroo_core_math::oracle::CurveOracle;
use kangaroo_core_math::scalar::Scalar;
use kangaroo_domain_models::WalkType;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Clasificación de solvencia de una colisión entre dos caminatas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionCase {
    /// Dos caminatas TAME: sin información sobre el offset objetivo.
    DegenerateTame,
    /// Misma familia salvaje con distancia idéntica: el propio punto.
    SelfCollision,
    /// TAME contra cualquier familia salvaje: recuperable.
    TameWild,
    /// Misma familia salvaje con distancias distintas.
    SameWild,
    /// WILD1 contra WILD2.
    MixedWild,
}

impl CollisionCase {
    /// Etiqueta nominal del caso para el rastro forense y el panel.
    #[must_use]
    pub fn nominal_label(self) -> &'static str {
        match self {
            Self::DegenerateTame => "degenerate-tame",
            Self::SelfCollision => "self-collision",
            Self::TameWild => "tame-wild",
            Self::SameWild => "same-wild",
            Self::MixedWild => "mixed-wild",
        }
    }
}

/// Veredicto del resolutor para una colisión observada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Escalar recuperado y certificado (hexadecimal MAYÚSCULA).
    Solved {
        /// El escalar privado recuperado.
        scalar_hexadecimal: String,
    },
    /// Candidato recuperado pero rechazado por la certificación.
    Rejected {
        /// El candidato descartado (hexadecimal MAYÚSCULA).
        candidate_hexadecimal: String,
    },
    /// Colisión genuina que este estrato aún no puede finalizar.
    Unresolved {
        /// Clasificación del caso irresuelto.
        collision_case: CollisionCase,
    },
    /// Colisión sin información recuperable.
    Unsolvable {
        /// Clasificación del caso degenerado.
        collision_case: CollisionCase,
    },
}

/// Motor de resolución de colisiones del coordinador.
///
/// Aritmética pura: no suspende, no persiste, no comparte estado mutable.
pub struct CollisionResolver {
    /// Contexto inmutable forjado en la configuración.
    search_context: SearchContext,
    /// Oráculo de certificación inyectado (estructural o completo).
    curve_oracle: Arc<dyn CurveOracle>,
}

impl CollisionResolver {
    /// Construye el resolutor con su contexto congelado y el oráculo inyectado.
    #[must_use]
    pub fn new(search_context: SearchContext, curve_oracle: Arc<dyn CurveOracle>) -> Self {
        Self { search_context, curve_oracle }
    }

    /// Acceso de lectura al contexto de búsqueda congelado.
    #[must_use]
    pub fn search_context(&self) -> &SearchContext {
        &self.search_context
    }

    /**
     * Clasifica la solvencia de una colisión (simétrica en sus argumentos).
     */
    #[must_use]
    pub fn classify_collision(
        first_walk: WalkType,
        first_distance: &[u8; U256_BYTE_SIZE],
        second_walk: WalkType,
        second_distance: &[u8; U256_BYTE_SIZE],
    ) -> CollisionCase {
        match (first_walk, second_walk) {
            (WalkType::Tame, WalkType::Tame) => CollisionCase::DegenerateTame,
            (WalkType::Tame, _) | (_, WalkType::Tame) => CollisionCase::TameWild,
            (alpha_family, beta_family) if alpha_family == beta_family => {
                if compare_u256_big_endian(first_distance, second_distance) == Ordering::Equal {
                    CollisionCase::SelfCollision
                } else {
                    CollisionCase::SameWild
                }
            }
            _ => CollisionCase::MixedWild,
        }
    }

    /**
     * Resuelve una colisión entre el punto residente y el recién ingresado.
     *
     * El contrato es simétrico: intercambiar ambos puntos produce el
     * mismo veredicto.
     *
     * # Errors:
     * Retorna `SolverError` si las distancias no son hexadecimales
     * válidas (la frontera de ingesta debe haberlas validado antes).
     */
    pub fn resolve_collision(
        &self,
        x_coordinate_hexadecimal: &str,
        first_distance_hexadecimal: &str,
        first_walk: WalkType,
        second_distance_hexadecimal: &str,
        second_walk: WalkType,
    ) -> Result<Resolution, SolverError> {
        let first_distance = decode_hexadecimal_to_u256_big_endian(first_distance_hexadecimal)?;
        let second_distance = decode_hexadecimal_to_u256_big_endian(second_distance_hexadecimal)?;

        let collision_case =
            Self::classify_collision(first_walk, &first_distance, second_walk, &second_distance);

        info!(
            "🎯 [COLLISION]: x={} case={} families=({},{})",
            x_coordinate_hexadecimal,
            collision_case.nominal_label(),
            first_walk.nominal_label(),
            second_walk.nominal_label()
        );

        match collision_case {
            CollisionCase::DegenerateTame | CollisionCase::SelfCollision => {
                debug!(
                    "🚫 [RESOLVER]: Case {} carries no recoverable information.",
                    collision_case.nominal_label()
                );
                Ok(Resolution::Unsolvable { collision_case })
            }
            CollisionCase::SameWild | CollisionCase::MixedWild => {
                // La reconstrucción salvaje-salvaje exige operaciones de
                // punto que este estrato no fabrica: candidato irresuelto.
                info!(
                    "🧩 [RESOLVER]: Case {} registered as unresolved candidate.",
                    collision_case.nominal_label()
                );
                Ok(Resolution::Unresolved { collision_case })
            }
            CollisionCase::TameWild => {
                let (tame_distance, wild_distance, wild_walk) = if first_walk == WalkType::Tame {
                    (first_distance, second_distance, second_walk)
                } else {
                    (second_distance, first_distance, first_walk)
                };

                let candidate_residue =
                    self.recover_tame_wild(&tame_distance, &wild_distance, wild_walk);
                Ok(self.certify_candidate(candidate_residue))
            }
        }
    }

    /**
     * Recuperación tame-wild en el anillo módulo n.
     */
    fn recover_tame_wild(
        &self,
        tame_distance: &[u8; U256_BYTE_SIZE],
        wild_distance: &[u8; U256_BYTE_SIZE],
        wild_walk: WalkType,
    ) -> Scalar {
        // Convención WILD2: la distancia cruda viaja duplicada.
        let effective_wild_distance = if wild_walk == WalkType::Wild2 {
            shift_right_one_bit_u256_big_endian(wild_distance)
        } else {
            *wild_distance
        };

        let tame_residue = Scalar::from_u256_big_endian(*tame_distance);
        let wild_residue = Scalar::from_u256_big_endian(effective_wild_distance);

        tame_residue
            .subtract_modular(&wild_residue)
            .add_modular(self.search_context.half_range_residue())
            .add_modular(self.search_context.range_start_residue())
    }

    /**
     * Certificación estructural y de oráculo del candidato recuperado.
     */
    fn certify_candidate(&self, candidate_residue: Scalar) -> Resolution {
        let candidate_bytes = candidate_residue.to_u256_big_endian();
        let candidate_hexadecimal = encode_u256_trimmed_hexadecimal(&candidate_bytes, true);

        // Validación estructural: 0 < k < n (el residuo ya garantiza k < n).
        if candidate_residue.is_zero() {
            warn!("⚠️ [RESOLVER]: Candidate collapsed to the null residue. Rejected.");
            return Resolution::Rejected { candidate_hexadecimal };
        }

        match self.curve_oracle.certify_scalar_against_target(
            &candidate_bytes,
            self.search_context.target_descriptor(),
        ) {
            Ok(true) => {
                info!(
                    "🔑 [RESOLVER]: Candidate {} certified by {}.",
                    candidate_hexadecimal,
                    self.curve_oracle.nominal_identifier()
                );
                Resolution::Solved { scalar_hexadecimal: candidate_hexadecimal }
            }
            Ok(false) => {
                warn!(
                    "⚠️ [RESOLVER]: Candidate {} denied by {}.",
                    candidate_hexadecimal,
                    self.curve_oracle.nominal_identifier()
                );
                Resolution::Rejected { candidate_hexadecimal }
            }
            Err(oracle_fault) => {
                warn!("💀 [RESOLVER]: Oracle collapse during certification: {}", oracle_fault);
                Resolution::Rejected { candidate_hexadecimal }
            }
        }
    }
}
