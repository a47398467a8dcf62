// [tests/mirror/libs/infra/db_turso/dp_store_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DEL ALMACÉN DE HUELLAS (V4.0 - DP-UNIQ)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L3-MIRROR
 * RESPONSABILIDAD: AUDITORÍA DE UNICIDAD E IDEMPOTENCIA DE INSERCIÓN
 *
 * # Mathematical Proof (First Insert Owns):
 * El almacén es un mapa inyectivo x_coord → evidencia. El test
 * certifica que la segunda inserción sobre la misma huella se degrada
 * a duplicado sin alterar la fila propietaria.
 * =================================================================
 */

#[cfg(test)]
mod tests {
    use kangaroo_domain_models::WalkType;
    use kangaroo_infra_db::repositories::{DistinguishedPointRepository, InsertOutcome};
    use kangaroo_infra_db::TursoClient;

    async fn forge_memory_ledger(nominal_identifier: &str) -> TursoClient {
        TursoClient::connect(
            &format!("file:{}?mode=memory&cache=shared", nominal_identifier),
            None,
        )
        .await
        .expect("CRITICAL_FAULT: Failed to anchor in-memory tactical ledger.")
    }

    /**
     * CERTIFICACIÓN: El primer insert posee el slot; el segundo se
     * degrada a duplicado silencioso sin sobrescritura.
     */
    #[tokio::test]
    async fn certify_fingerprint_slot_ownership() {
        println!("\n🗄️  [INICIO]: Auditing DP-UNIQ slot ownership...");
        let ledger = forge_memory_ledger("mem_dp_ownership_v4").await;
        let repository = DistinguishedPointRepository::new(ledger);

        let first_verdict = repository
            .insert("aabbccddeeff001122334455", "1f40", WalkType::Tame, "unit_alpha", "2026-08-01T00:00:00+00:00")
            .await
            .expect("INSERT_FAULT");
        assert_eq!(first_verdict, InsertOutcome::Inserted);

        // Carrera simulada: misma huella, material divergente.
        let second_verdict = repository
            .insert("aabbccddeeff001122334455", "9999", WalkType::Wild1, "unit_beta", "2026-08-01T00:00:01+00:00")
            .await
            .expect("INSERT_FAULT");
        assert_eq!(second_verdict, InsertOutcome::Duplicate, "DP-UNIQ VIOLATED: Second insert won the slot.");

        // La evidencia residente pertenece íntegramente al primer emisor.
        let resident_evidence = repository
            .lookup("aabbccddeeff001122334455")
            .await
            .expect("LOOKUP_FAULT")
            .expect("SLOT_VOID: Owner evidence vanished.");

        assert_eq!(resident_evidence.distance, "1f40");
        assert_eq!(resident_evidence.walk_type, WalkType::Tame);
        assert_eq!(resident_evidence.client_id, "unit_alpha");

        assert_eq!(repository.count().await.expect("COUNT_FAULT"), 1);
        println!("✅ DP_STORE: Slot ownership certified.");
    }

    /**
     * CERTIFICACIÓN: El lookup sobre huella ausente retorna vacío y la
     * cardinalidad refleja huellas distintas, no envíos.
     */
    #[tokio::test]
    async fn certify_lookup_and_cardinality_semantics() {
        let ledger = forge_memory_ledger("mem_dp_cardinality_v4").await;
        let repository = DistinguishedPointRepository::new(ledger);

        assert!(repository.lookup("00ff").await.expect("LOOKUP_FAULT").is_none());
        assert_eq!(repository.count().await.expect("COUNT_FAULT"), 0);

        for (fingerprint, family) in [("aa", WalkType::Tame), ("bb", WalkType::Wild1), ("cc", WalkType::Wild2)] {
            repository
                .insert(fingerprint, "10", family, "unit_alpha", "2026-08-01T00:00:00+00:00")
                .await
                .expect("INSERT_FAULT");
        }

        assert_eq!(repository.count().await.expect("COUNT_FAULT"), 3);
    }
}
