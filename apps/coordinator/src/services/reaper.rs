// [apps/coordinator/src/services/reaper.rs]
/**
 * =================================================================
 * APARATO: CHUNK REAPER SERVICE (V4.0 - OPT-IN RECOVERY)
 * CLASIFICACIÓN: BACKGROUND INFRASTRUCTURE (ESTRATO L4)
 * RESPONSABILIDAD: RECLAMACIÓN DE UNIDADES DE TRABAJO ESTANCADAS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. STRICTLY OPT-IN: Sin la directiva de reclamación del operador,
 *    una unidad asignada conserva su propietario indefinidamente;
 *    este daemon jamás se activa por defecto.
 * 2. SERIALIZED RECOVERY: La reclamación pasa por el mismo punto de
 *    linealización que el despacho, eliminando carreras con claims
 *    en vuelo.
 * =================================================================
 */

use crate::state::AppState;
use chrono::{Duration as ChronoDuration, Utc};
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};

/// Cadencia del ciclo de mantenimiento del daemon.
const REAPER_CYCLE_SECONDS: u64 = 60;

/**
 * Inicia el servicio de reclamación perpetua en el runtime de Tokio.
 *
 * @param application_state Referencia al estado neural inyectado.
 * @param reclaim_after_seconds Umbral de antigüedad de una asignación.
 */
pub async fn spawn_chunk_reaper(application_state: AppState, reclaim_after_seconds: u64) {
    let mut maintenance_ticker = interval(Duration::from_secs(REAPER_CYCLE_SECONDS));

    tokio::spawn(async move {
        info!(
            "💀 [REAPER_ACTIVE]: Stale assignment recovery armed (threshold {}s).",
            reclaim_after_seconds
        );

        loop {
            maintenance_ticker.tick().await;

            let expiration_threshold_timestamp =
                (Utc::now() - ChronoDuration::seconds(reclaim_after_seconds as i64)).to_rfc3339();

            match application_state
                .search_coordinator
                .reclaim_stale_assignments(&expiration_threshold_timestamp)
                .await
            {
                Ok(reclaimed_units) if reclaimed_units > 0 => {
                    info!("💀 [REAPER_CLEANUP]: {} stale units returned to the queue.", reclaimed_units);
                }
                Ok(_) => {}
                Err(recovery_fault) => {
                    warn!("⚠️ [REAPER_BYPASS]: Recovery cycle incomplete: {}", recovery_fault);
                }
            }
        }
    });
}
