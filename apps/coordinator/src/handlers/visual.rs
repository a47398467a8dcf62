// INICIO DEL ARCHIVO [apps/coordinator/src/handlers/visual.rs]
/**
 * =================================================================
 * APARATO: VISUAL TERMINAL GATEWAY (V4.0 - RAW STATIC)
 * CLASIFICACIÓN: API ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: RENDERIZADO DE INTERFAZ DE ESTADO PÚBLICO
 *
 * VISION HIPER-HOLÍSTICA:
 * Implementa una Landing Page de diagnóstico utilizando strings
 * crudos de Rust. Esto elimina la dependencia de motores de
 * templating y acelera la compilación del binario.
 * =================================================================
 */

use crate::state::AppState;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

pub async fn handle_visual_landing(State(application_state): State<AppState>) -> impl IntoResponse {
    let status_snapshot = application_state.search_coordinator.status().await.ok();

    let (solved_label, solution_label, fingerprint_count, range_label, dp_bits_label) =
        match &status_snapshot {
            Some(snapshot) => (
                if snapshot.solved { "SOLVED" } else { "HUNTING" }.to_string(),
                snapshot.solution.clone().unwrap_or_else(|| "—".to_string()),
                snapshot.dp_count.to_string(),
                match (&snapshot.search_range.start, &snapshot.search_range.end) {
                    (Some(start), Some(end)) => format!("{} → {}", start, end),
                    _ => "UNCONFIGURED".to_string(),
                },
                snapshot
                    .search_range
                    .dp_bits
                    .map(|bits| bits.to_string())
                    .unwrap_or_else(|| "—".to_string()),
            ),
            None => (
                "DEGRADED".to_string(),
                "—".to_string(),
                "—".to_string(),
                "LEDGER_UNREACHABLE".to_string(),
                "—".to_string(),
            ),
        };

    // Renderizado atómico sin overhead de templating engine
    Html(format!(r#"
    <!DOCTYPE html>
    <html lang="en">
    <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
        <title>KANGAROO // COMMANDER</title>
        <link href="https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;800&display=swap" rel="stylesheet">
        <style>
            body {{ font-family: 'JetBrains Mono', monospace; background-color: #050505; color: #10b981;
                   display: flex; flex-direction: column; align-items: center; padding: 48px 16px; }}
            .panel {{ max-width: 640px; width: 100%; background: rgba(0,0,0,0.5); padding: 40px;
                     border-radius: 24px; border: 1px solid rgba(16,185,129,0.2); }}
            .label {{ font-size: 9px; color: #52525b; text-transform: uppercase; font-weight: 800; }}
            .value {{ color: #ffffff; font-weight: bold; margin-top: 4px; word-break: break-all; }}
            h1 {{ font-weight: 800; font-style: italic; text-transform: uppercase; letter-spacing: -1px; }}
            .cell {{ padding: 16px; background: rgba(24,24,27,0.3); border-radius: 12px;
                    border: 1px solid rgba(255,255,255,0.05); margin-top: 16px; }}
            footer {{ margin-top: 40px; font-size: 8px; color: #27272a;
                     text-transform: uppercase; letter-spacing: 1em; }}
        </style>
    </head>
    <body>
        <div class="panel">
            <header>
                <h1>Kangaroo_L3</h1>
                <p class="label">Lambda_Coordinator // V4.0</p>
            </header>
            <div class="cell"><p class="label">Search_Stratum</p><p class="value">{solved}</p></div>
            <div class="cell"><p class="label">Solution</p><p class="value">{solution}</p></div>
            <div class="cell"><p class="label">Distinguished_Points</p><p class="value">{dp_count}</p></div>
            <div class="cell"><p class="label">Scalar_Range</p><p class="value">{range}</p></div>
            <div class="cell"><p class="label">DP_Bits</p><p class="value">{dp_bits}</p></div>
        </div>
        <footer>Archaeology_of_Entropy // 2026</footer>
    </body>
    </html>
    "#,
        solved = solved_label,
        solution = solution_label,
        dp_count = fingerprint_count,
        range = range_label,
        dp_bits = dp_bits_label,
    ))
}
// FIN DEL ARCHIVO [apps/coordinator/src/handlers/visual.rs]
