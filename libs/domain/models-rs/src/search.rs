// [libs/domain/models-rs/src/search.rs]
/*!
 * =================================================================
 * APARATO: SEARCH STATE MODELS (V3.0 - TERMINAL STICKY)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: ESTADO SINGLETON DE BÚSQUEDA Y EVIDENCIA DE COLISIÓN
 *
 * # Logic:
 * El registro de búsqueda es un singleton write-once en su estrato
 * terminal: una vez solved=true, la solución queda congelada y toda
 * reconfiguración es rechazada aguas arriba.
 * =================================================================
 */

use crate::point::WalkType;
use serde::{Deserialize, Serialize};

/// Registro singleton de parámetros y estado terminal de la búsqueda.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStateRecord {
    /// Inicio del rango global de escalares (hexadecimal minúscula).
    pub range_start: String,
    /// Fin exclusivo del rango global (hexadecimal minúscula).
    pub range_end: String,
    /// Clave pública objetivo SEC1 (hexadecimal minúscula).
    pub pubkey: String,
    /// Bits nulos exigidos a la coordenada X de un punto distinguido.
    pub dp_bits: u32,
    /// Anchura en bits del rango: ⌈log₂(range_end − range_start)⌉.
    pub bit_range: u32,
    /// Tamaño de cada unidad de trabajo (hexadecimal minúscula).
    pub chunk_size: String,
    /// Estrato terminal: write-once.
    pub solved: bool,
    /// Escalar recuperado (hexadecimal MAYÚSCULA), congelado con solved.
    pub solution: Option<String>,
}

/// Evidencia de una colisión observada que el resolutor no pudo
/// finalizar (TAME-TAME, auto-colisión o estratos salvajes cruzados).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollisionDescriptor {
    /// Huella X donde ambas caminatas convergieron.
    pub x_coord: String,
    /// Distancia del punto residente en el Ledger.
    pub stored_distance: String,
    /// Familia del punto residente.
    pub stored_walk_type: WalkType,
    /// Distancia del punto recién ingresado.
    pub submitted_distance: String,
    /// Familia del punto recién ingresado.
    pub submitted_walk_type: WalkType,
    /// Clasificación nominal del caso (p. ej. "mixed-wild").
    pub collision_case: String,
    /// Marca temporal RFC3339 de la observación.
    pub observed_at: String,
}
