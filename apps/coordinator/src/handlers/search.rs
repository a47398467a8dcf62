// [apps/coordinator/src/handlers/search.rs]
/*!
 * =================================================================
 * APARATO: SEARCH PROTOCOL HANDLER (V4.2 - THIN ADAPTER)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L3)
 * RESPONSABILIDAD: PROYECCIÓN DEL PROTOCOLO SOBRE EL COORDINADOR
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SHAPE-ONLY VALIDATION: Este estrato valida exclusivamente la
 *    forma JSON (campos desconocidos incluidos); toda la semántica
 *    vive en el coordinador L1-APP.
 * 2. NO FAULT ESCAPES: Un fallo de dominio se proyecta a una
 *    respuesta de rechazo; el proceso jamás muere por una ráfaga.
 * =================================================================
 */

use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kangaroo_domain_models::{
    ConfigureReply, ConfigureRequest, GetWorkReply, GetWorkRequest, SubmitPointsReply,
    SubmitPointsRequest,
};
use tracing::{instrument, warn};

/// Autoridad de adaptación del protocolo de coordinación.
pub struct SearchProtocolHandler;

impl SearchProtocolHandler {
    /**
     * Endpoint: POST /api/configure
     *
     * Proyecta la directiva de configuración sobre el coordinador.
     * El material malformado (JSON ilegible, campos desconocidos o
     * semántica inválida) produce un rechazo de protocolo, nunca un 500.
     */
    #[instrument(skip(application_state, configure_payload))]
    pub async fn handle_configure(
        State(application_state): State<AppState>,
        configure_payload: Result<Json<ConfigureRequest>, JsonRejection>,
    ) -> Json<ConfigureReply> {
        let Ok(Json(configure_directive)) = configure_payload else {
            return Json(ConfigureReply {
                success: false,
                message: "malformed-input".to_string(),
            });
        };

        match application_state.search_coordinator.configure(&configure_directive).await {
            Ok(()) => Json(ConfigureReply {
                success: true,
                message: "Search configured successfully".to_string(),
            }),
            Err(configuration_fault) => {
                warn!("⛔ [CONFIGURE_REJECTED]: {}", configuration_fault);
                Json(ConfigureReply {
                    success: false,
                    message: configuration_fault.protocol_message(),
                })
            }
        }
    }

    /**
     * Endpoint: POST /api/get_work
     *
     * Negocia la entrega exclusiva de una unidad de trabajo.
     */
    #[instrument(skip(application_state, work_payload))]
    pub async fn handle_get_work(
        State(application_state): State<AppState>,
        work_payload: Result<Json<GetWorkRequest>, JsonRejection>,
    ) -> Json<GetWorkReply> {
        let Ok(Json(work_request)) = work_payload else {
            return Json(GetWorkReply {
                success: false,
                work: None,
                message: Some("malformed-input".to_string()),
            });
        };

        match application_state
            .search_coordinator
            .get_work(&work_request.client_id)
            .await
        {
            Ok(Some(work_descriptor)) => Json(GetWorkReply {
                success: true,
                work: Some(work_descriptor),
                message: None,
            }),
            Ok(None) => Json(GetWorkReply {
                success: false,
                work: None,
                message: Some("No work available".to_string()),
            }),
            Err(dispatch_fault) => {
                warn!("⚠️ [DISPATCH_FAULT]: {}", dispatch_fault);
                Json(GetWorkReply {
                    success: false,
                    work: None,
                    message: Some(dispatch_fault.protocol_message()),
                })
            }
        }
    }

    /**
     * Endpoint: POST /api/submit_points
     *
     * Absorbe una ráfaga de puntos distinguidos. En estado terminal la
     * respuesta repite la solución congelada sin tocar el almacén.
     */
    #[instrument(skip(application_state, points_payload))]
    pub async fn handle_submit_points(
        State(application_state): State<AppState>,
        points_payload: Result<Json<SubmitPointsRequest>, JsonRejection>,
    ) -> Json<SubmitPointsReply> {
        let Ok(Json(points_burst)) = points_payload else {
            return Json(SubmitPointsReply {
                status: "error".to_string(),
                points_processed: None,
                solution: None,
                message: Some("malformed-input".to_string()),
            });
        };

        match application_state
            .search_coordinator
            .submit_points(&points_burst.client_id, &points_burst.points)
            .await
        {
            Ok(ingestion_verdict) => Json(ingestion_verdict),
            Err(ingestion_fault) => {
                warn!("⚠️ [INGESTION_REJECTED]: {}", ingestion_fault);
                Json(SubmitPointsReply {
                    status: "error".to_string(),
                    points_processed: None,
                    solution: None,
                    message: Some(ingestion_fault.protocol_message()),
                })
            }
        }
    }

    /**
     * Endpoint: GET /api/status
     *
     * Instantánea de estado para operadores y paneles.
     */
    #[instrument(skip(application_state))]
    pub async fn handle_status(
        State(application_state): State<AppState>,
    ) -> impl IntoResponse {
        match application_state.search_coordinator.status().await {
            Ok(status_snapshot) => (StatusCode::OK, Json(status_snapshot)).into_response(),
            Err(snapshot_fault) => {
                warn!("⚠️ [STATUS_FAULT]: {}", snapshot_fault);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": snapshot_fault.protocol_message() })),
                )
                    .into_response()
            }
        }
    }
}
