// [libs/domain/models-rs/src/work.rs]
/*!
 * =================================================================
 * APARATO: WORK LEDGER MODELS (V3.0 - CHUNK LIFECYCLE)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: CONTRATOS DE UNIDADES DE TRABAJO Y SUS ESTADOS
 *
 * # Mathematical Proof (Exclusive Assignment):
 * El ciclo de vida pending → assigned es una transición de propiedad:
 * el Ledger garantiza que cada range_id se entrega a lo sumo a un
 * cliente, en orden FIFO estricto por identificador.
 * =================================================================
 */

use serde::{Deserialize, Serialize};

/// Estados del ciclo de vida de una unidad de trabajo en el Ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChunkStatus {
    /// En cola, lista para ser reclamada.
    Pending,
    /// Propiedad sellada por un cliente; jamás se revoca automáticamente.
    Assigned,
    /// Barrido completado y reportado.
    Completed,
    /// Barrido abortado por el cliente.
    Failed,
}

impl ChunkStatus {
    /// Proyección hacia el literal de persistencia.
    #[must_use]
    pub fn as_persistence_literal(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Reconstrucción desde el literal de persistencia.
    #[must_use]
    pub fn from_persistence_literal(literal: &str) -> Option<Self> {
        match literal {
            "pending" => Some(Self::Pending),
            "assigned" => Some(Self::Assigned),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// Unidad de trabajo soberana: intervalo semiabierto [start, end) del
/// espacio de escalares, con los parámetros de caza del enjambre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkChunk {
    /// Identificador lexicográficamente creciente (range_000000, ...).
    pub range_id: String,
    /// Inicio del intervalo en hexadecimal minúscula.
    pub start_hex: String,
    /// Fin exclusivo del intervalo en hexadecimal minúscula.
    pub end_hex: String,
    /// Anchura en bits de la búsqueda global (⌈log₂(end − start)⌉).
    pub bit_range: u32,
    /// Cantidad de bits nulos que define un punto distinguido.
    pub dp_bits: u32,
    /// Estado del ciclo de vida.
    pub status: ChunkStatus,
    /// Cliente propietario (sellado en la transición a assigned).
    pub assigned_to: Option<String>,
    /// Marca temporal RFC3339 de la asignación.
    pub assigned_at: Option<String>,
}
