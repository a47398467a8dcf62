// INICIO DEL ARCHIVO [apps/coordinator/src/kernel.rs]
/**
 * =================================================================
 * APARATO: COORDINATOR SOVEREIGN KERNEL (V4.1 - GUARD ACTIVE)
 * CLASIFICACIÓN: COMPOSITION ROOT (ESTRATO L1-APP)
 * RESPONSABILIDAD: BOOTSTRAP DE INFRAESTRUCTURA E IGNICIÓN SEGURA
 *
 * VISION HIPER-HOLÍSTICA:
 * Actúa como la placa base donde se conectan persistencia, oráculo
 * y superficie de peticiones. La ignición establece el enlace con el
 * Ledger y rehidrata el estado de búsqueda ANTES de abrir el socket
 * TCP, previniendo que un cliente observe un coordinador amnésico.
 * =================================================================
 */

use crate::errors::CoordinatorError;
use crate::routes::create_coordination_router;
use crate::services::coordinator::SearchCoordinator;
use crate::services::reaper::spawn_chunk_reaper;
use crate::state::AppState;
use kangaroo_core_math::oracle::CurveOracle;
use kangaroo_infra_db::TursoClient;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, instrument};

pub struct CoordinatorKernel {
    pub server_network_host: String,
    pub server_network_port: u16,
    pub application_shared_state: AppState,
    /// Umbral opcional de reclamación de unidades estancadas (opt-in).
    pub reclaim_after_seconds: Option<u64>,
}

impl CoordinatorKernel {
    /**
     * Realiza la ignición del cliente táctico y el coordinador.
     * Establece la conexión al Ledger antes de levantar servicios.
     *
     * # Errors:
     * Retorna `CoordinatorError` ante colapso del enlace de datos o
     * celda de estado corrupta: fallo de arranque irrecuperable.
     */
    #[instrument(skip(database_access_token, curve_oracle))]
    pub async fn ignite(
        database_connection_url: &str,
        database_access_token: Option<String>,
        curve_oracle: Arc<dyn CurveOracle>,
        listening_host: String,
        listening_port: u16,
        reclaim_after_seconds: Option<u64>,
    ) -> Result<Self, CoordinatorError> {
        let database_client =
            TursoClient::connect(database_connection_url, database_access_token).await?;

        let search_coordinator =
            Arc::new(SearchCoordinator::ignite(database_client.clone(), curve_oracle).await?);

        Ok(Self {
            server_network_host: listening_host,
            server_network_port: listening_port,
            application_shared_state: AppState::new(database_client, search_coordinator),
            reclaim_after_seconds,
        })
    }

    /**
     * Lanza las operaciones autónomas y el servidor HTTP principal.
     * Solo retorna ante un colapso del runtime de red.
     */
    pub async fn launch_coordination_operations(self) {
        let shared_application_state = self.application_shared_state.clone();

        // --- 1. DAEMON DE RECLAMACIÓN (EXTENSIÓN OPT-IN) ---
        // Sin directiva del operador, una asignación es perpetua.
        if let Some(reclaim_threshold) = self.reclaim_after_seconds {
            spawn_chunk_reaper(shared_application_state.clone(), reclaim_threshold).await;
        }

        // --- 2. IGNICIÓN DEL TRANSPORTE HTTP (AXUM) ---
        let coordination_router = create_coordination_router(shared_application_state);

        let bind_address: SocketAddr =
            match format!("{}:{}", self.server_network_host, self.server_network_port).parse() {
                Ok(resolved_address) => resolved_address,
                Err(address_fault) => {
                    error!("💀 [KERNEL_COLLAPSE]: Illegal bind coordinates: {}", address_fault);
                    std::process::exit(1);
                }
            };

        info!("🚀 [KERNEL_ONLINE]: Lambda Coordinator listening at {}", bind_address);

        let tcp_listener = match tokio::net::TcpListener::bind(bind_address).await {
            Ok(bound_listener) => bound_listener,
            Err(bind_fault) => {
                error!("💀 [KERNEL_COLLAPSE]: Failed to bind network port: {}", bind_fault);
                std::process::exit(1);
            }
        };

        if let Err(server_error) = axum::serve(tcp_listener, coordination_router).await {
            error!("💀 [KERNEL_COLLAPSE]: Runtime failure: {}", server_error);
            std::process::exit(1);
        }
    }
}
// FIN DEL ARCHIVO [apps/coordinator/src/kernel.rs]
