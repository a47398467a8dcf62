// [tests/mirror/apps/coordinator/configure_validation.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DE CONFIGURACIÓN (V4.0 - BORDER SHIELD)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L3-MIRROR
 * RESPONSABILIDAD: AUDITORÍA DE RECHAZO DE MATERIAL MALFORMADO
 *
 * # Logic:
 * Toda directiva ilegible debe rechazarse SIN tocar el Ledger: ni
 * estado, ni unidades de trabajo, ni huellas.
 * =================================================================
 */

#[cfg(test)]
mod tests {
    use kangaroo_coordinator::errors::CoordinatorError;
    use kangaroo_coordinator::prelude::SearchCoordinator;
    use kangaroo_core_math::oracle::StructuralOracle;
    use kangaroo_domain_models::ConfigureRequest;
    use kangaroo_infra_db::TursoClient;
    use std::sync::Arc;

    async fn forge_coordinator(nominal_identifier: &str) -> SearchCoordinator {
        let database_client = TursoClient::connect(
            &format!("file:{}?mode=memory&cache=shared", nominal_identifier),
            None,
        )
        .await
        .expect("CRITICAL_FAULT: Failed to anchor in-memory tactical ledger.");

        SearchCoordinator::ignite(database_client, Arc::new(StructuralOracle))
            .await
            .expect("IGNITION_FAULT: Coordinator bootstrap collapsed.")
    }

    fn configure_directive(
        start_range: &str,
        end_range: &str,
        pubkey: &str,
        range_size: &str,
    ) -> ConfigureRequest {
        ConfigureRequest {
            start_range: start_range.to_string(),
            end_range: end_range.to_string(),
            pubkey: pubkey.to_string(),
            dp_bits: 4,
            range_size: range_size.to_string(),
        }
    }

    /**
     * CERTIFICACIÓN: Prefijo SEC1 prohibido → rechazo sin estado.
     */
    #[tokio::test]
    async fn certify_malformed_pubkey_rejection() {
        println!("\n🛡️  [INICIO]: Auditing malformed pubkey rejection...");
        let coordinator = forge_coordinator("mem_cfg_pubkey_v4").await;

        let illegal_directive =
            configure_directive("100", "200", &format!("00{}", "ab".repeat(32)), "40");

        let rejection = coordinator.configure(&illegal_directive).await;
        assert!(
            matches!(rejection, Err(CoordinatorError::MalformedInput(_))),
            "BORDER_BREACH: Illegal SEC1 prefix absorbed."
        );

        // El Ledger debe permanecer virgen.
        let status_snapshot = coordinator.status().await.expect("STATUS_FAULT");
        assert!(status_snapshot.search_range.start.is_none());
        assert!(status_snapshot.work_ranges.is_empty());
        assert_eq!(status_snapshot.dp_count, 0);
        println!("✅ BORDER: Malformed pubkey rejected with zero state mutation.");
    }

    /**
     * CERTIFICACIÓN: Rango invertido, campos no hexadecimales y paso
     * nulo → rechazo uniforme.
     */
    #[tokio::test]
    async fn certify_degenerate_directive_rejections() {
        let coordinator = forge_coordinator("mem_cfg_degenerate_v4").await;
        let legal_pubkey = format!("02{}", "ab".repeat(32));

        let degenerate_directives = [
            configure_directive("200", "100", &legal_pubkey, "40"),
            configure_directive("100", "100", &legal_pubkey, "40"),
            configure_directive("zz", "200", &legal_pubkey, "40"),
            configure_directive("100", "g0", &legal_pubkey, "40"),
            configure_directive("100", "200", &legal_pubkey, "0"),
            configure_directive("100", "200", &legal_pubkey, "not-hex"),
        ];

        for (directive_index, illegal_directive) in degenerate_directives.iter().enumerate() {
            let rejection = coordinator.configure(illegal_directive).await;
            assert!(
                matches!(rejection, Err(CoordinatorError::MalformedInput(_))),
                "BORDER_BREACH: Degenerate directive {} absorbed.",
                directive_index
            );
        }

        let status_snapshot = coordinator.status().await.expect("STATUS_FAULT");
        assert!(status_snapshot.search_range.start.is_none());
        assert!(status_snapshot.work_ranges.is_empty());
    }

    /**
     * CERTIFICACIÓN: La forma del cable rechaza campos desconocidos
     * antes de alcanzar al coordinador.
     */
    #[test]
    fn certify_wire_shape_strictness() {
        let contaminated_material = format!(
            r#"{{"start_range":"100","end_range":"200","pubkey":"02{}","dp_bits":4,"range_size":"40","backdoor":true}}"#,
            "ab".repeat(32)
        );
        assert!(
            serde_json::from_str::<ConfigureRequest>(&contaminated_material).is_err(),
            "WIRE_BREACH: Unknown field absorbed by the configure contract."
        );
    }

    /**
     * CERTIFICACIÓN: Una directiva legal queda sellada y la anchura en
     * bits se deriva por exceso.
     */
    #[tokio::test]
    async fn certify_legal_directive_sealing() {
        let coordinator = forge_coordinator("mem_cfg_legal_v4").await;
        let legal_pubkey = format!("02{}", "ab".repeat(32));

        coordinator
            .configure(&configure_directive("100", "200", &legal_pubkey, "40"))
            .await
            .expect("CONFIGURE_FAULT: Legal directive rejected.");

        let status_snapshot = coordinator.status().await.expect("STATUS_FAULT");
        assert_eq!(status_snapshot.search_range.start.as_deref(), Some("100"));
        assert_eq!(status_snapshot.search_range.end.as_deref(), Some("200"));
        assert_eq!(status_snapshot.search_range.pubkey.as_deref(), Some(legal_pubkey.as_str()));
        assert_eq!(status_snapshot.search_range.dp_bits, Some(4));
        assert_eq!(status_snapshot.work_ranges.get("pending"), Some(&4));
        assert!(!status_snapshot.solved);
    }
}
