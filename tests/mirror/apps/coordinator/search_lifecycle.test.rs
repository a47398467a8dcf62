// [tests/mirror/apps/coordinator/search_lifecycle.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DE CICLO DE VIDA DE BÚSQUEDA (V4.1 - ZENITH)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L3-MIRROR
 * RESPONSABILIDAD: AUDITORÍA DE PARTICIÓN, FIFO Y EXCLUSIVIDAD
 *
 * # Mathematical Proof (Exclusive Assignment):
 * Para todo entrelazado de solicitudes, cada range_id se entrega a lo
 * sumo a un cliente. El certificador dispara solicitudes concurrentes
 * y exige la inyectividad del conjunto de identificadores entregados.
 * =================================================================
 */

#[cfg(test)]
mod tests {
    use kangaroo_coordinator::prelude::SearchCoordinator;
    use kangaroo_core_math::oracle::StructuralOracle;
    use kangaroo_domain_models::ConfigureRequest;
    use kangaroo_infra_db::TursoClient;
    use std::collections::HashSet;
    use std::sync::Arc;

    async fn forge_coordinator(nominal_identifier: &str) -> Arc<SearchCoordinator> {
        let database_client = TursoClient::connect(
            &format!("file:{}?mode=memory&cache=shared", nominal_identifier),
            None,
        )
        .await
        .expect("CRITICAL_FAULT: Failed to anchor in-memory tactical ledger.");

        Arc::new(
            SearchCoordinator::ignite(database_client, Arc::new(StructuralOracle))
                .await
                .expect("IGNITION_FAULT: Coordinator bootstrap collapsed."),
        )
    }

    fn legal_directive(start_range: &str, end_range: &str, range_size: &str) -> ConfigureRequest {
        ConfigureRequest {
            start_range: start_range.to_string(),
            end_range: end_range.to_string(),
            pubkey: format!("02{}", "ab".repeat(32)),
            dp_bits: 4,
            range_size: range_size.to_string(),
        }
    }

    /**
     * CERTIFICACIÓN: Recorrido mono-cliente completo
     * [Configure → 4×Dispatch FIFO → Agotamiento].
     */
    #[tokio::test]
    async fn certify_single_client_walkthrough() {
        println!("\n🦘 [INICIO]: Auditing single-client search walkthrough...");
        let mut accumulated_anomalies_count = 0u32;

        let coordinator = forge_coordinator("mem_lifecycle_walkthrough_v4").await;
        coordinator
            .configure(&legal_directive("100", "200", "40"))
            .await
            .expect("CONFIGURE_FAULT");

        let expected_dispatch_order = [
            ("range_000000", "100", "140"),
            ("range_000001", "140", "180"),
            ("range_000002", "180", "1c0"),
            ("range_000003", "1c0", "200"),
        ];

        for (expected_identifier, expected_start, expected_end) in expected_dispatch_order {
            let work_envelope = coordinator
                .get_work("unit_alpha")
                .await
                .expect("DISPATCH_FAULT")
                .expect("QUEUE_VOID: Pending unit vanished.");

            if work_envelope.range_id != expected_identifier
                || work_envelope.start_range != expected_start
                || work_envelope.end_range != expected_end
            {
                println!("   ❌ FALLO: Despacho desviado en {}.", work_envelope.range_id);
                accumulated_anomalies_count += 1;
            }

            // El sobre ecoa la configuración vigente.
            if work_envelope.dp_bits != 4
                || work_envelope.bit_range != 8
                || work_envelope.pubkey != format!("02{}", "ab".repeat(32))
            {
                println!("   ❌ FALLO: Eco de configuración desviado en {}.", work_envelope.range_id);
                accumulated_anomalies_count += 1;
            }
        }

        // Quinta solicitud: cola agotada.
        if coordinator.get_work("unit_alpha").await.expect("DISPATCH_FAULT").is_some() {
            println!("   ❌ FALLO: El coordinador entregó trabajo inexistente.");
            accumulated_anomalies_count += 1;
        }

        assert_eq!(accumulated_anomalies_count, 0, "El ciclo de vida ha sido comprometido.");
        println!("🏁 [INFORME]: Single-client walkthrough certified.");
    }

    /**
     * CERTIFICACIÓN: Inyectividad de la asignación bajo solicitudes
     * concurrentes de múltiples identidades.
     */
    #[tokio::test]
    async fn certify_exclusive_assignment_under_concurrency() {
        let coordinator = forge_coordinator("mem_lifecycle_concurrent_v4").await;
        coordinator
            .configure(&legal_directive("0", "200", "40"))
            .await
            .expect("CONFIGURE_FAULT");

        let mut dispatch_tasks = Vec::new();
        for claimant_index in 0..8 {
            let coordinator_reference = coordinator.clone();
            dispatch_tasks.push(tokio::spawn(async move {
                coordinator_reference
                    .get_work(&format!("unit_{:02}", claimant_index))
                    .await
                    .expect("DISPATCH_FAULT")
            }));
        }

        let mut delivered_identifiers = HashSet::new();
        let mut delivered_count = 0usize;
        for dispatch_task in dispatch_tasks {
            if let Some(work_envelope) = dispatch_task.await.expect("TASK_FAULT") {
                delivered_count += 1;
                assert!(
                    delivered_identifiers.insert(work_envelope.range_id.clone()),
                    "EXCLUSIVITY_BREACH: {} delivered twice.",
                    work_envelope.range_id
                );
            }
        }

        // [0, 0x200) con paso 0x40 → 8 unidades exactas para 8 solicitudes.
        assert_eq!(delivered_count, 8);
        println!("✅ DISPATCH: Injective assignment certified under concurrency.");
    }

    /**
     * CERTIFICACIÓN: La reconfiguración regenera la cola sin revocar
     * asignaciones y sin reciclar ordinales.
     */
    #[tokio::test]
    async fn certify_reconfiguration_preserves_outstanding_work() {
        let coordinator = forge_coordinator("mem_lifecycle_reconfig_v4").await;

        coordinator
            .configure(&legal_directive("100", "200", "40"))
            .await
            .expect("CONFIGURE_FAULT");
        let outstanding_envelope = coordinator
            .get_work("unit_alpha")
            .await
            .expect("DISPATCH_FAULT")
            .expect("QUEUE_VOID");
        assert_eq!(outstanding_envelope.range_id, "range_000000");

        coordinator
            .configure(&legal_directive("1000", "1100", "80"))
            .await
            .expect("RECONFIGURE_FAULT");

        let status_snapshot = coordinator.status().await.expect("STATUS_FAULT");
        assert_eq!(status_snapshot.work_ranges.get("assigned"), Some(&1));
        assert_eq!(status_snapshot.work_ranges.get("pending"), Some(&2));

        // El siguiente despacho continúa la secuencia histórica de ordinales.
        let regenerated_envelope = coordinator
            .get_work("unit_beta")
            .await
            .expect("DISPATCH_FAULT")
            .expect("QUEUE_VOID");
        assert_eq!(regenerated_envelope.range_id, "range_000004");
        assert_eq!(regenerated_envelope.start_range, "1000");
    }

    /**
     * CERTIFICACIÓN: Sin configuración previa no existe trabajo.
     */
    #[tokio::test]
    async fn certify_unconfigured_dispatch_refusal() {
        let coordinator = forge_coordinator("mem_lifecycle_virgin_v4").await;
        assert!(coordinator.get_work("unit_alpha").await.expect("DISPATCH_FAULT").is_none());
    }
}
