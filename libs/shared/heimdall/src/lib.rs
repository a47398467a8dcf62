// [libs/shared/heimdall/src/lib.rs]
/*!
 * =================================================================
 * APARATO: HEIMDALL NEURAL OBSERVER (V4.0 - LAMBDA TUNED)
 * CLASIFICACIÓN: SHARED UTILITY (ESTRATO L4)
 * RESPONSABILIDAD: GESTIÓN DE TELEMETRÍA, TRAZADO Y CAPTURA DE PÁNICOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. DOMAIN STRATA FILTER: El filtro por defecto ilumina los cinco
 *    estratos del coordinador (API, resolutor, Ledger, matemática)
 *    y silencia el ruido de transporte y del motor libSQL.
 * 2. FORMAT OVERRIDE: KANGAROO_LOG_JSON fuerza tramas JSON planas
 *    para ingesta Cloud aun en builds de desarrollo; sin la variable
 *    decide el perfil de compilación.
 * 3. PHOENIX SHIELD: El hook de pánico identifica el hilo colapsado
 *    y deja constancia de que el estado de búsqueda sobrevive en el
 *    Ledger; un handler caído no invalida la caza.
 * =================================================================
 */

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt as formatting_layer, EnvFilter};
use tracing::{error, info};
use std::panic;

/// Estratos del dominio iluminados por el filtro por defecto.
const DOMAIN_STRATA_TARGETS: &[&str] = &[
    "kangaroo_coordinator",
    "kangaroo_domain_solver",
    "kangaroo_infra_db",
    "kangaroo_core_math",
    "kangaroo_shared_heimdall",
];

/// Ruido de infraestructura degradado: transporte HTTP y motor libSQL.
const INFRASTRUCTURE_NOISE_DIRECTIVES: &[&str] =
    &["tower_http=warn", "hyper=warn", "libsql=error"];

/// Forja las directivas de filtrado por defecto del coordinador.
fn forge_default_filter_directives(service_nominal_identifier: &str) -> String {
    let domain_severity_level = if cfg!(debug_assertions) { "debug" } else { "info" };

    let mut filter_directives: Vec<String> = DOMAIN_STRATA_TARGETS
        .iter()
        .map(|stratum_target| format!("{}={}", stratum_target, domain_severity_level))
        .collect();

    // El binario puede correr bajo un nombre de servicio propio (tests,
    // despliegues renombrados): se ilumina junto a los estratos fijos.
    if !DOMAIN_STRATA_TARGETS.contains(&service_nominal_identifier) {
        filter_directives.push(format!("{}={}", service_nominal_identifier, domain_severity_level));
    }

    filter_directives.extend(INFRASTRUCTURE_NOISE_DIRECTIVES.iter().map(ToString::to_string));
    filter_directives.join(",")
}

/// Determina si la emisión debe ser JSON plano (ingesta Cloud).
///
/// KANGAROO_LOG_JSON=1/true fuerza JSON; cualquier otro valor explícito
/// fuerza el modo compacto; sin la variable decide el perfil de build.
fn is_json_emission_requested() -> bool {
    match std::env::var("KANGAROO_LOG_JSON") {
        Ok(raw_directive) => matches!(raw_directive.trim(), "1" | "true" | "TRUE"),
        Err(_) => !cfg!(debug_assertions),
    }
}

/// Inicializa el sistema de trazas Heimdall con blindaje de pánicos soberano.
///
/// # Comportamiento:
/// - Desarrollo: Logs interactivos compactos con resaltado de color.
/// - Producción (o KANGAROO_LOG_JSON): Estructura JSON plana.
/// - RUST_LOG, si está presente, reemplaza íntegramente el filtro por defecto.
///
/// # Errors:
/// Retorna pánico si otro suscriptor global ya ha sido inicializado en el runtime.
pub fn init_tracing(service_nominal_identifier: &str) {
    // 1. CONFIGURACIÓN DEL FILTRO DE ESTRATOS (Sovereign Filter)
    let environmental_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        forge_default_filter_directives(service_nominal_identifier).into()
    });

    // 2. CONSTRUCCIÓN DE LA ARQUITECTURA DE SUSCRIPCIÓN (Dual Mode)
    if is_json_emission_requested() {
        tracing_subscriber::registry()
            .with(environmental_filter)
            .with(formatting_layer::layer().json().flatten_event(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(environmental_filter)
            .with(formatting_layer::layer().compact().with_target(false))
            .init();
    }

    // 3. PROTOCOLO PHOENIX SHIELD (Global Panic Hook)
    // Un hilo de handler colapsado no invalida la caza: las huellas, la
    // cola y el estrato terminal permanecen sellados en el Ledger. El
    // hook deja el rastro forense necesario para la autopsia.
    let service_id_snapshot = service_nominal_identifier.to_string();

    panic::set_hook(Box::new(move |panic_metadata| {
        let collapsed_thread_label = std::thread::current()
            .name()
            .unwrap_or("unnamed_worker")
            .to_string();

        let panic_location = panic_metadata.location()
            .map(|location| format!("{}:{}:{}", location.file(), location.line(), location.column()))
            .unwrap_or_else(|| "UNKNOWN_STRATA_COORDINATES".to_string());

        let panic_payload_message = panic_metadata.payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| panic_metadata.payload().downcast_ref::<String>().map(|s| s.as_str()))
            .unwrap_or("UNDEFINED_KERNEL_COLLAPSE_PAYLOAD");

        error!(
            target: "panic_monitor",
            service = %service_id_snapshot,
            thread = %collapsed_thread_label,
            estrato = %panic_location,
            "🔥 [CRITICAL_PANIC]: Thread [{}] collapsed. Ledger state remains sealed. Analysis: {}",
            collapsed_thread_label,
            panic_payload_message
        );
    }));

    info!(
        "👁️  [HEIMDALL_ONLINE]: Observability strata levelized for [{}]. Phoenix Shield ACTIVE.",
        service_nominal_identifier
    );
}
