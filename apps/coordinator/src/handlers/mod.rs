// [apps/coordinator/src/handlers/mod.rs]
/*!
 * =================================================================
 * APARATO: HANDLER REGISTRY (V4.0 - PROTOCOL ADAPTERS)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L3)
 * RESPONSABILIDAD: REGISTRO DE ADAPTADORES DE ENTRADA HTTP
 * =================================================================
 */

/// Adaptadores del protocolo de coordinación (configure/work/points/status).
pub mod search;
/// Renderizado de la interfaz de estado público.
pub mod visual;
