// [libs/domain/models-rs/src/api.rs]
/*!
 * =================================================================
 * APARATO: WIRE CONTRACT MODELS (V3.2 - STRICT SHAPES)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: CONTRATOS DEL PROTOCOLO REQUEST/RESPONSE
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. STRICT INGESTION: Todas las peticiones portan
 *    'deny_unknown_fields'; un campo desconocido es rechazo inmediato.
 * 2. SPARSE REPLIES: Los campos opcionales se omiten del JSON cuando
 *    son nulos, preservando la forma histórica del protocolo.
 * =================================================================
 */

use crate::point::SubmittedPoint;
use crate::search::CollisionDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Petición de configuración de búsqueda (operación 1 del protocolo).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigureRequest {
    /// Inicio del rango global de escalares (hexadecimal).
    pub start_range: String,
    /// Fin exclusivo del rango global (hexadecimal).
    pub end_range: String,
    /// Clave pública objetivo SEC1 (hexadecimal).
    pub pubkey: String,
    /// Bits nulos exigidos a un punto distinguido.
    pub dp_bits: u32,
    /// Tamaño de cada unidad de trabajo (hexadecimal).
    pub range_size: String,
}

/// Veredicto de la configuración.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigureReply {
    /// Aceptación o rechazo de la configuración.
    pub success: bool,
    /// Mensaje nominal del veredicto.
    pub message: String,
}

/// Petición de asignación de trabajo (operación 2 del protocolo).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetWorkRequest {
    /// Identificador opaco del cliente solicitante.
    pub client_id: String,
}

/// Sobre de trabajo entregado a un cliente del enjambre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkDescriptor {
    /// Identificador de la unidad de trabajo.
    pub range_id: String,
    /// Inicio del intervalo asignado (hexadecimal).
    pub start_range: String,
    /// Fin exclusivo del intervalo asignado (hexadecimal).
    pub end_range: String,
    /// Anchura en bits de la búsqueda global.
    pub bit_range: u32,
    /// Bits de punto distinguido vigentes.
    pub dp_bits: u32,
    /// Clave pública objetivo (eco de la configuración).
    pub pubkey: String,
}

/// Veredicto de la asignación de trabajo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetWorkReply {
    /// Existencia de trabajo disponible.
    pub success: bool,
    /// Sobre de trabajo (presente solo en éxito).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work: Option<WorkDescriptor>,
    /// Diagnóstico nominal (presente solo en rechazo).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Ráfaga de puntos distinguidos reportada por un cliente (operación 3).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmitPointsRequest {
    /// Identificador opaco del cliente emisor.
    pub client_id: String,
    /// Puntos distinguidos de la ráfaga, en orden de descubrimiento.
    pub points: Vec<SubmittedPoint>,
}

/// Veredicto de la ingesta de puntos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitPointsReply {
    /// "success" (ráfaga absorbida) o "solved" (búsqueda terminada).
    pub status: String,
    /// Cantidad de puntos de la ráfaga procesados.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_processed: Option<usize>,
    /// Escalar recuperado (hexadecimal MAYÚSCULA) en estado terminal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    /// Diagnóstico nominal (presente solo en rechazo de la ráfaga).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Vista de los parámetros de búsqueda para el panel de estado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRangeView {
    /// Inicio del rango global (ausente si no hay configuración).
    pub start: Option<String>,
    /// Fin exclusivo del rango global.
    pub end: Option<String>,
    /// Clave pública objetivo.
    pub pubkey: Option<String>,
    /// Bits de punto distinguido.
    pub dp_bits: Option<u32>,
}

/// Instantánea de estado del coordinador (operación 4 del protocolo).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReply {
    /// Estrato terminal de la búsqueda.
    pub solved: bool,
    /// Escalar recuperado, congelado tras el primer veredicto certificado.
    pub solution: Option<String>,
    /// Cardinalidad del almacén de puntos distinguidos.
    pub dp_count: u64,
    /// Conteo de unidades de trabajo por estado del ciclo de vida.
    pub work_ranges: BTreeMap<String, u64>,
    /// Parámetros vigentes de la búsqueda.
    pub search_range: SearchRangeView,
    /// Colisiones observadas que el resolutor no pudo finalizar.
    pub unresolved_collisions: Vec<CollisionDescriptor>,
}
