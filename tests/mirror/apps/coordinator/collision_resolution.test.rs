// [tests/mirror/apps/coordinator/collision_resolution.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DE RESOLUCIÓN DE COLISIONES (V4.2 - GRIAL)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L3-MIRROR
 * RESPONSABILIDAD: AUDITORÍA DEL CAMINO COLISIÓN → ESCALAR → TERMINAL
 *
 * # Mathematical Proof (Terminal Stickiness):
 * El primer escalar certificado congela la búsqueda. Toda ráfaga
 * posterior debe observar la misma solución sin alterar la
 * cardinalidad del almacén de huellas.
 * =================================================================
 */

#[cfg(test)]
mod tests {
    use kangaroo_coordinator::errors::CoordinatorError;
    use kangaroo_coordinator::prelude::SearchCoordinator;
    use kangaroo_core_math::oracle::{global_context, CurveOracle, FullCurveEngine, StructuralOracle};
    use kangaroo_domain_models::{ConfigureRequest, SubmittedPoint};
    use kangaroo_infra_db::TursoClient;
    use secp256k1::{PublicKey, SecretKey};
    use std::sync::Arc;

    async fn forge_coordinator(
        nominal_identifier: &str,
        curve_oracle: Arc<dyn CurveOracle>,
    ) -> SearchCoordinator {
        let database_client = TursoClient::connect(
            &format!("file:{}?mode=memory&cache=shared", nominal_identifier),
            None,
        )
        .await
        .expect("CRITICAL_FAULT: Failed to anchor in-memory tactical ledger.");

        SearchCoordinator::ignite(database_client, curve_oracle)
            .await
            .expect("IGNITION_FAULT: Coordinator bootstrap collapsed.")
    }

    /// Directiva canónica: [0, 0x100) → bit_range=8, H=0x80, S=0.
    fn canonical_directive(pubkey: &str) -> ConfigureRequest {
        ConfigureRequest {
            start_range: "0".to_string(),
            end_range: "100".to_string(),
            pubkey: pubkey.to_string(),
            dp_bits: 4,
            range_size: "40".to_string(),
        }
    }

    fn point(x_coord: &str, distance: &str, kang_type: i64) -> SubmittedPoint {
        SubmittedPoint {
            x_coord: x_coord.to_string(),
            distance: distance.to_string(),
            kang_type,
        }
    }

    fn placeholder_pubkey() -> String {
        format!("02{}", "ab".repeat(32))
    }

    /**
     * CERTIFICACIÓN: Colisión TAME×WILD1 → (0x10 − 0x08 + 0x80) = 0x88.
     */
    #[tokio::test]
    async fn certify_tame_wild1_collision_seals_search() {
        println!("\n🎯 [INICIO]: Auditing TAME×WILD1 collision path...");
        let coordinator =
            forge_coordinator("mem_collision_w1_v4", Arc::new(StructuralOracle)).await;
        coordinator
            .configure(&canonical_directive(&placeholder_pubkey()))
            .await
            .expect("CONFIGURE_FAULT");

        let absorption_verdict = coordinator
            .submit_points("unit_alpha", &[point("aa", "10", 0)])
            .await
            .expect("INGESTION_FAULT");
        assert_eq!(absorption_verdict.status, "success");
        assert_eq!(absorption_verdict.points_processed, Some(1));

        let terminal_verdict = coordinator
            .submit_points("unit_beta", &[point("aa", "08", 1)])
            .await
            .expect("INGESTION_FAULT");
        assert_eq!(terminal_verdict.status, "solved");
        assert_eq!(terminal_verdict.solution.as_deref(), Some("88"));

        let status_snapshot = coordinator.status().await.expect("STATUS_FAULT");
        assert!(status_snapshot.solved);
        assert_eq!(status_snapshot.solution.as_deref(), Some("88"));
        println!("✅ COLLISION: TAME×WILD1 sealed at 0x88.");
    }

    /**
     * CERTIFICACIÓN: Colisión TAME×WILD2 con mitad entera
     * → (0x20 − 0x10/2 + 0x80) = 0x98.
     */
    #[tokio::test]
    async fn certify_tame_wild2_halving_collision() {
        let coordinator =
            forge_coordinator("mem_collision_w2_v4", Arc::new(StructuralOracle)).await;
        coordinator
            .configure(&canonical_directive(&placeholder_pubkey()))
            .await
            .expect("CONFIGURE_FAULT");

        coordinator
            .submit_points("unit_alpha", &[point("bb", "20", 0)])
            .await
            .expect("INGESTION_FAULT");

        let terminal_verdict = coordinator
            .submit_points("unit_beta", &[point("bb", "10", 2)])
            .await
            .expect("INGESTION_FAULT");
        assert_eq!(terminal_verdict.status, "solved");
        assert_eq!(terminal_verdict.solution.as_deref(), Some("98"));
    }

    /**
     * CERTIFICACIÓN: Envío duplicado → una sola huella; la respuesta
     * refleja la longitud de la ráfaga.
     */
    #[tokio::test]
    async fn certify_duplicate_submission_idempotence() {
        let coordinator =
            forge_coordinator("mem_collision_dup_v4", Arc::new(StructuralOracle)).await;
        coordinator
            .configure(&canonical_directive(&placeholder_pubkey()))
            .await
            .expect("CONFIGURE_FAULT");

        let duplicate_burst = [point("cc", "10", 1), point("cc", "10", 1)];
        let absorption_verdict = coordinator
            .submit_points("unit_alpha", &duplicate_burst)
            .await
            .expect("INGESTION_FAULT");

        assert_eq!(absorption_verdict.status, "success");
        assert_eq!(absorption_verdict.points_processed, Some(2));

        let repeated_verdict = coordinator
            .submit_points("unit_alpha", &[point("cc", "10", 1)])
            .await
            .expect("INGESTION_FAULT");
        assert_eq!(repeated_verdict.status, "success");

        let status_snapshot = coordinator.status().await.expect("STATUS_FAULT");
        assert_eq!(status_snapshot.dp_count, 1, "DP-UNIQ VIOLATED: Duplicate grew the store.");
        assert!(!status_snapshot.solved);
    }

    /**
     * CERTIFICACIÓN: Idempotencia post-terminal: toda ráfaga posterior
     * observa la solución congelada sin crecer el almacén.
     */
    #[tokio::test]
    async fn certify_post_terminal_stickiness() {
        let coordinator =
            forge_coordinator("mem_collision_sticky_v4", Arc::new(StructuralOracle)).await;
        coordinator
            .configure(&canonical_directive(&placeholder_pubkey()))
            .await
            .expect("CONFIGURE_FAULT");

        coordinator
            .submit_points("unit_alpha", &[point("aa", "10", 0)])
            .await
            .expect("INGESTION_FAULT");
        coordinator
            .submit_points("unit_beta", &[point("aa", "08", 1)])
            .await
            .expect("INGESTION_FAULT");

        let fingerprint_count_at_seal =
            coordinator.status().await.expect("STATUS_FAULT").dp_count;

        // Ráfaga post-terminal con material nuevo.
        let frozen_verdict = coordinator
            .submit_points("unit_gamma", &[point("ff", "33", 2), point("fe", "44", 1)])
            .await
            .expect("INGESTION_FAULT");
        assert_eq!(frozen_verdict.status, "solved");
        assert_eq!(frozen_verdict.solution.as_deref(), Some("88"));

        // El trabajo también queda congelado.
        assert!(coordinator.get_work("unit_gamma").await.expect("DISPATCH_FAULT").is_none());

        // La reconfiguración es rechazada en el estrato terminal.
        let reconfiguration_rejection = coordinator
            .configure(&canonical_directive(&placeholder_pubkey()))
            .await;
        assert!(matches!(reconfiguration_rejection, Err(CoordinatorError::AlreadySolved)));

        let status_snapshot = coordinator.status().await.expect("STATUS_FAULT");
        assert_eq!(
            status_snapshot.dp_count, fingerprint_count_at_seal,
            "TERMINAL_BREACH: Post-terminal burst grew the store."
        );
        println!("✅ TERMINAL: Stickiness certified across bursts.");
    }

    /**
     * CERTIFICACIÓN: Colisión salvaje-salvaje → candidato irresuelto
     * expuesto por status, jamás estrato terminal.
     */
    #[tokio::test]
    async fn certify_wild_wild_unresolved_retention() {
        let coordinator =
            forge_coordinator("mem_collision_wild_v4", Arc::new(StructuralOracle)).await;
        coordinator
            .configure(&canonical_directive(&placeholder_pubkey()))
            .await
            .expect("CONFIGURE_FAULT");

        coordinator
            .submit_points("unit_alpha", &[point("dd", "10", 1)])
            .await
            .expect("INGESTION_FAULT");
        let crossing_verdict = coordinator
            .submit_points("unit_beta", &[point("dd", "08", 2)])
            .await
            .expect("INGESTION_FAULT");

        assert_eq!(crossing_verdict.status, "success");

        let status_snapshot = coordinator.status().await.expect("STATUS_FAULT");
        assert!(!status_snapshot.solved, "FABRICATION: Wild-wild case sealed the search.");
        assert_eq!(status_snapshot.unresolved_collisions.len(), 1);
        assert_eq!(status_snapshot.unresolved_collisions[0].collision_case, "mixed-wild");
        assert_eq!(status_snapshot.unresolved_collisions[0].x_coord, "dd");
    }

    /**
     * CERTIFICACIÓN: Ráfaga con familia desconocida → rechazo íntegro
     * sin mutación del almacén.
     */
    #[tokio::test]
    async fn certify_malformed_batch_rejection() {
        let coordinator =
            forge_coordinator("mem_collision_malformed_v4", Arc::new(StructuralOracle)).await;
        coordinator
            .configure(&canonical_directive(&placeholder_pubkey()))
            .await
            .expect("CONFIGURE_FAULT");

        let contaminated_burst = [point("aa", "10", 0), point("bb", "20", 7)];
        let rejection = coordinator.submit_points("unit_alpha", &contaminated_burst).await;
        assert!(matches!(rejection, Err(CoordinatorError::MalformedInput(_))));

        // Ni siquiera el punto legal de la ráfaga debe haber aterrizado.
        let status_snapshot = coordinator.status().await.expect("STATUS_FAULT");
        assert_eq!(status_snapshot.dp_count, 0, "BORDER_BREACH: Partial batch absorbed.");
    }

    /**
     * CERTIFICACIÓN: Bucle completo con el oráculo k·G: el candidato
     * forjado se descarta, el genuino sella la búsqueda.
     */
    #[tokio::test]
    async fn certify_full_oracle_end_to_end() {
        println!("\n🔮 [INICIO]: Auditing full-oracle certification loop...");

        // Objetivo real: Q = 0x2a·G en forma comprimida.
        let mut genuine_scalar_buffer = [0u8; 32];
        genuine_scalar_buffer[31] = 0x2a;
        let secret_key =
            SecretKey::from_slice(&genuine_scalar_buffer).expect("SECRET_MATERIAL_FAULT");
        let target_pubkey_hexadecimal = hex::encode(
            PublicKey::from_secret_key(global_context(), &secret_key).serialize(),
        );

        let coordinator =
            forge_coordinator("mem_collision_oracle_v4", Arc::new(FullCurveEngine)).await;
        coordinator
            .configure(&canonical_directive(&target_pubkey_hexadecimal))
            .await
            .expect("CONFIGURE_FAULT");

        // Evidencia salvaje residente: w = 0x80.
        coordinator
            .submit_points("unit_alpha", &[point("ee", "80", 1)])
            .await
            .expect("INGESTION_FAULT");

        // Candidato forjado: (0x2b − 0x80 + 0x80) = 0x2b ≠ 0x2a → descarte.
        let denied_verdict = coordinator
            .submit_points("unit_beta", &[point("ee", "2b", 0)])
            .await
            .expect("INGESTION_FAULT");
        assert_eq!(denied_verdict.status, "success", "ORACLE_BREACH: Forged candidate sealed.");
        assert!(!coordinator.status().await.expect("STATUS_FAULT").solved);

        // Candidato genuino: (0x2a − 0x80 + 0x80) = 0x2a → sellado.
        let sealed_verdict = coordinator
            .submit_points("unit_gamma", &[point("ee", "2a", 0)])
            .await
            .expect("INGESTION_FAULT");
        assert_eq!(sealed_verdict.status, "solved");
        assert_eq!(sealed_verdict.solution.as_deref(), Some("2A"));
        println!("✅ ORACLE: Full k·G loop certified at 0x2A.");
    }
}
