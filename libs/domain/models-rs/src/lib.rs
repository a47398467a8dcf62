// [libs/domain/models-rs/src/lib.rs]
/*!
 * =================================================================
 * APARATO: DOMAIN MODELS MASTER HUB (V3.0 - LAMBDA CONTRACTS)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: AUTORIDAD ÚNICA DE CONTRATOS DEL ECOSISTEMA
 *
 * # Logic:
 * Este estrato define los contratos compartidos entre el Ledger (L3),
 * el resolutor de colisiones (L2) y la superficie de peticiones (L3-API).
 * Ningún otro estrato redefine estas formas.
 * =================================================================
 */

/// Contratos de la superficie de peticiones (Wire DTOs).
pub mod api;
/// Puntos distinguidos y familias de caminata del enjambre.
pub mod point;
/// Estado singleton de búsqueda y descriptores de colisión.
pub mod search;
/// Unidades de trabajo del Ledger y su ciclo de vida.
pub mod work;

pub use api::{
    ConfigureReply, ConfigureRequest, GetWorkReply, GetWorkRequest, SearchRangeView,
    StatusReply, SubmitPointsReply, SubmitPointsRequest, WorkDescriptor,
};
pub use point::{DistinguishedPoint, SubmittedPoint, WalkType};
pub use search::{CollisionDescriptor, SearchStateRecord};
pub use work::{ChunkStatus, WorkChunk};
