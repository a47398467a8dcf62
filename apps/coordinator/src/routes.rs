// INICIO DEL ARCHIVO [apps/coordinator/src/routes.rs]
/*!
 * =================================================================
 * APARATO: SOVEREIGN ROUTING MATRIX (V4.0 - PROTOCOL TOPOLOGY)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L3)
 * RESPONSABILIDAD: TOPOLOGÍA DE RED DEL PROTOCOLO DE COORDINACIÓN
 *
 * VISION HIPER-HOLÍSTICA:
 * Cuatro operaciones lógicas, una superficie mínima:
 * 1. REST Táctico (configure / get_work / submit_points / status).
 * 2. Panel visual de diagnóstico en la raíz.
 * =================================================================
 */

use crate::handlers::{search, visual};
use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

pub fn create_coordination_router(application_shared_state: AppState) -> Router {
    // Escudo de Red: Permite CORS para paneles de operación externos
    let network_security_shield = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    // ESTRATO TÁCTICO: Operaciones del Protocolo de Coordinación
    let coordination_protocol_stratum = Router::new()
        // Configuración de la búsqueda global
        .route("/configure", post(search::SearchProtocolHandler::handle_configure))
        // Negociación de unidades de trabajo (FIFO exclusivo)
        .route("/get_work", post(search::SearchProtocolHandler::handle_get_work))
        // Ingesta de puntos distinguidos y resolución de colisiones
        .route("/submit_points", post(search::SearchProtocolHandler::handle_submit_points))
        // Instantánea de estado del coordinador
        .route("/status", get(search::SearchProtocolHandler::handle_status));

    // COMPOSICIÓN GLOBAL (Root Topology)
    Router::new()
        .route("/", get(visual::handle_visual_landing))
        .route("/health", get(|| async { "STATUS_OK" }))
        .nest("/api", coordination_protocol_stratum)
        .layer(network_security_shield)
        .with_state(application_shared_state)
}
// FIN DEL ARCHIVO [apps/coordinator/src/routes.rs]
