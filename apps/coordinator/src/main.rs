// [apps/coordinator/src/main.rs]
/*!
 * =================================================================
 * APARATO: COORDINATOR MAIN ENTRY POINT (V4.1 - GOLD MASTER)
 * CLASIFICACIÓN: APPLICATION SHELL (ESTRATO L3)
 * RESPONSABILIDAD: BOOTSTRAP DE INFRAESTRUCTURA E IGNICIÓN SEGURA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. ORACLE SELECTION: La certificación k·G completa se activa con
 *    '--full-verification'; por defecto opera el oráculo estructural
 *    honesto, preservando el contrato histórico del protocolo.
 * 2. OPT-IN RECOVERY: '--reclaim-after-secs' arma el daemon de
 *    reclamación; en su ausencia una asignación es perpetua.
 * 3. EXIT DISCIPLINE: Todo fallo de arranque irrecuperable termina
 *    el proceso con código distinto de cero; una vez en línea, el
 *    proceso corre indefinidamente.
 * =================================================================
 */

use clap::Parser;
use dotenvy::dotenv;
use kangaroo_coordinator::prelude::*;
use kangaroo_core_math::oracle::{CurveOracle, FullCurveEngine, StructuralOracle};
use kangaroo_shared_heimdall::init_tracing;
use std::sync::Arc;
use tracing::{error, info};

/// Configuración de argumentos del centro de mando Lambda.
#[derive(Parser, Debug)]
#[command(
    author = "Raz Podesta <metaShark Tech>",
    version = "4.1",
    about = "Coordinador Lambda: distribución de rangos, almacén de puntos distinguidos y resolución de colisiones ECDLP sobre secp256k1."
)]
struct CommandArguments {
    /// Dirección de red de escucha del servidor.
    #[arg(long, default_value = "0.0.0.0", env = "COORDINATOR_HOST")]
    host: String,

    /// Puerto TCP de escucha del servidor.
    #[arg(long, default_value_t = 8080, env = "COORDINATOR_PORT")]
    port: u16,

    /// Ubicación del Ledger táctico (ruta local o URL libsql remota).
    #[arg(long, default_value = "kangaroo_server.db", env = "DATABASE_URL")]
    db: String,

    /// Activa la certificación k·G completa contra la clave objetivo.
    #[arg(long, default_value_t = false)]
    full_verification: bool,

    /// Umbral en segundos para reclamar asignaciones estancadas (opt-in).
    #[arg(long)]
    reclaim_after_secs: Option<u64>,
}

/**
 * Punto de ignición supremo del binario del Coordinador.
 */
fn main() {
    // 1. CARGA DE ENTORNO SOBERANO
    // Hidrata las variables de .env en el espacio de nombres del proceso.
    dotenv().ok();

    // 2. INICIALIZACIÓN DE OBSERVABILIDAD NEURAL (HEIMDALL)
    init_tracing("kangaroo_coordinator");

    // 3. PARSEO DE DIRECTIVAS DE MANDO
    let cli_configuration = CommandArguments::parse();

    // 4. SELECCIÓN DEL ORÁCULO DE CERTIFICACIÓN
    let curve_oracle: Arc<dyn CurveOracle> = if cli_configuration.full_verification {
        Arc::new(FullCurveEngine)
    } else {
        Arc::new(StructuralOracle)
    };
    info!("🔮 [ORACLE]: Certification engine armed: {}", curve_oracle.nominal_identifier());

    // 5. CONFIGURACIÓN DEL RUNTIME SOBERANO
    let runtime_coordinator = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(ignited_runtime) => ignited_runtime,
        Err(runtime_fault) => {
            error!("💀 [IGNITION_FAILED]: Runtime construction collapsed: {}", runtime_fault);
            std::process::exit(1);
        }
    };

    runtime_coordinator.block_on(async {
        info!("🛰️  [COMMAND_CENTER]: Global ignition sequence starting...");

        let database_access_token = std::env::var("TURSO_AUTH_TOKEN").ok();

        // 6. CONSTRUCCIÓN DEL KERNEL SOBERANO (ESTRATO L1-APP)
        // El Kernel orquesta la sinapsis entre L3 (DB) y la API.
        let kernel_instance = match CoordinatorKernel::ignite(
            &cli_configuration.db,
            database_access_token,
            curve_oracle,
            cli_configuration.host.clone(),
            cli_configuration.port,
            cli_configuration.reclaim_after_secs,
        )
        .await
        {
            Ok(ignited_kernel) => ignited_kernel,
            Err(ignition_fault) => {
                error!("💀 [IGNITION_FAILED]: Kernel bootstrap collapsed: {}", ignition_fault);
                std::process::exit(1);
            }
        };

        // 7. IGNICIÓN DE OPERACIONES DE COORDINACIÓN
        info!(
            "🚀 [COORDINATOR_ONLINE]: System fully operational on {}:{}.",
            cli_configuration.host, cli_configuration.port
        );
        kernel_instance.launch_coordination_operations().await;
    });
}
