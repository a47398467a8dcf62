// [apps/coordinator/src/services/coordinator.rs]
/*!
 * =================================================================
 * APARATO: SEARCH COORDINATOR ENGINE (V4.3 - SINGLE WRITER)
 * CLASIFICACIÓN: APPLICATION SERVICE (ESTRATO L1-APP)
 * RESPONSABILIDAD: ORQUESTACIÓN SERIALIZADA DE LA BÚSQUEDA ECDLP
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SINGLE LINEARIZATION POINT: Un único Mutex serializa configure,
 *    get_work, submit_points y status. No existe bloqueo de grano
 *    más fino: el Ledger tiene un solo escritor.
 * 2. TERMINAL STICKINESS: El primer escalar certificado congela la
 *    búsqueda; toda ráfaga posterior observa la misma solución sin
 *    tocar el almacén.
 * 3. BATCH TIE-BREAK: Dentro de una ráfaga los puntos se procesan en
 *    orden de envío; la primera colisión certificada corta la ráfaga
 *    y las colisiones restantes se ignoran.
 *
 * # Mathematical Proof (First Verified Wins):
 * Sea B1, B2 un par de ráfagas concurrentes con colisiones válidas.
 * El Mutex impone un orden total: la primera en sellar solved=true
 * persiste su escalar; la segunda observa el estrato terminal en su
 * entrada y retorna la solución congelada.
 * =================================================================
 */

use crate::errors::CoordinatorError;
use chrono::Utc;
use kangaroo_core_math::arithmetic::{
    ceiling_log2_u256_big_endian, compare_u256_big_endian, decode_hexadecimal_to_u256_big_endian,
    encode_u256_trimmed_hexadecimal, subtract_u256_big_endian,
};
use kangaroo_core_math::oracle::CurveOracle;
use kangaroo_core_math::public_key::PublicKeyDescriptor;
use kangaroo_domain_models::{
    CollisionDescriptor, ConfigureRequest, SearchStateRecord, SubmitPointsReply, SubmittedPoint,
    WalkType, WorkDescriptor,
};
use kangaroo_domain_solver::{CollisionResolver, Resolution, SearchContext};
use kangaroo_infra_db::repositories::{
    DistinguishedPointRepository, ServerStateRepository, WorkRangeRepository,
};
use kangaroo_infra_db::TursoClient;
use std::cmp::Ordering;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// Estado mutable de búsqueda protegido por el punto de linealización.
struct CoordinationCore {
    /// Registro singleton vigente (None hasta la primera configuración).
    search_state: Option<SearchStateRecord>,
    /// Resolutor forjado con el contexto congelado de la configuración.
    collision_resolver: Option<CollisionResolver>,
    /// Evidencia de colisiones que el resolutor no pudo finalizar.
    unresolved_collisions: Vec<CollisionDescriptor>,
}

/// Punto distinguido ya validado en la frontera de ingesta.
struct ValidatedPoint {
    x_coordinate: String,
    distance_hexadecimal: String,
    distance_value: [u8; 32],
    walk_type: WalkType,
}

/// Coordinador soberano de la búsqueda: único escritor de las tres
/// tablas del Ledger y autoridad del estrato terminal.
pub struct SearchCoordinator {
    dp_repository: DistinguishedPointRepository,
    work_repository: WorkRangeRepository,
    state_repository: ServerStateRepository,
    curve_oracle: Arc<dyn CurveOracle>,
    guarded_core: Mutex<CoordinationCore>,
}

impl SearchCoordinator {
    /**
     * Ignición del coordinador: conecta repositorios y rehidrata el
     * estado de búsqueda desde el Ledger (la recuperación ante caídas
     * es exactamente "lo que el almacén contiene").
     *
     * # Errors:
     * - `CoordinatorError::Storage`: El Ledger rechazó la lectura.
     * - `CoordinatorError::MalformedInput`: Celda de estado corrupta.
     */
    #[instrument(skip(database_client, curve_oracle))]
    pub async fn ignite(
        database_client: TursoClient,
        curve_oracle: Arc<dyn CurveOracle>,
    ) -> Result<Self, CoordinatorError> {
        let state_repository = ServerStateRepository::new(database_client.clone());
        let rehydrated_state = state_repository.load().await?;

        let collision_resolver = match &rehydrated_state {
            Some(record) => {
                info!(
                    "🧬 [COORDINATOR]: Search state rehydrated (solved={}, range=[{}..{}]).",
                    record.solved, record.range_start, record.range_end
                );
                Some(Self::forge_resolver(record, &curve_oracle)?)
            }
            None => {
                info!("🧬 [COORDINATOR]: Virgin ledger. Awaiting configuration directive.");
                None
            }
        };

        Ok(Self {
            dp_repository: DistinguishedPointRepository::new(database_client.clone()),
            work_repository: WorkRangeRepository::new(database_client.clone()),
            state_repository,
            curve_oracle,
            guarded_core: Mutex::new(CoordinationCore {
                search_state: rehydrated_state,
                collision_resolver,
                unresolved_collisions: Vec::new(),
            }),
        })
    }

    /**
     * Configura (o reconfigura) la búsqueda global.
     *
     * La reconfiguración regenera la cola de trabajo sin revocar las
     * unidades ya asignadas y sin tocar el almacén de huellas.
     *
     * # Errors:
     * - `CoordinatorError::AlreadySolved`: El estrato terminal es inmutable.
     * - `CoordinatorError::MalformedInput`: Material de entrada ilegible.
     * - `CoordinatorError::Storage`: El Ledger rechazó la escritura.
     */
    #[instrument(skip(self, directive))]
    pub async fn configure(&self, directive: &ConfigureRequest) -> Result<(), CoordinatorError> {
        let mut core_guard = self.guarded_core.lock().await;

        if core_guard.search_state.as_ref().is_some_and(|record| record.solved) {
            return Err(CoordinatorError::AlreadySolved);
        }

        // --- FASE 1: VALIDACIÓN ÚNICA DEL MATERIAL DE ENTRADA ---
        let target_descriptor = PublicKeyDescriptor::parse(&directive.pubkey)
            .map_err(|parse_fault| CoordinatorError::MalformedInput(parse_fault.to_string()))?;

        let range_start = decode_hexadecimal_to_u256_big_endian(&directive.start_range)
            .map_err(|fault| CoordinatorError::MalformedInput(format!("start_range: {}", fault)))?;
        let range_end = decode_hexadecimal_to_u256_big_endian(&directive.end_range)
            .map_err(|fault| CoordinatorError::MalformedInput(format!("end_range: {}", fault)))?;
        let chunk_stride = decode_hexadecimal_to_u256_big_endian(&directive.range_size)
            .map_err(|fault| CoordinatorError::MalformedInput(format!("range_size: {}", fault)))?;

        if compare_u256_big_endian(&range_end, &range_start) != Ordering::Greater {
            return Err(CoordinatorError::MalformedInput("RANGE_END_BELOW_START".to_string()));
        }
        if chunk_stride.iter().all(|&byte_value| byte_value == 0) {
            return Err(CoordinatorError::MalformedInput("CHUNK_STRIDE_NULL".to_string()));
        }

        // --- FASE 2: DERIVACIÓN DE LA ANCHURA DE BÚSQUEDA ---
        // Infalible: end > start quedó certificado arriba.
        let range_width = subtract_u256_big_endian(&range_end, &range_start)
            .map_err(|fault| CoordinatorError::MalformedInput(fault.to_string()))?;
        let bit_range = ceiling_log2_u256_big_endian(&range_width).max(1);

        let search_record = SearchStateRecord {
            range_start: encode_u256_trimmed_hexadecimal(&range_start, false),
            range_end: encode_u256_trimmed_hexadecimal(&range_end, false),
            pubkey: target_descriptor.to_sec1_hexadecimal(),
            dp_bits: directive.dp_bits,
            bit_range,
            chunk_size: encode_u256_trimmed_hexadecimal(&chunk_stride, false),
            solved: false,
            solution: None,
        };

        // --- FASE 3: FORJA DEL RESOLUTOR Y SELLADO DURADERO ---
        let collision_resolver = Self::forge_resolver(&search_record, &self.curve_oracle)?;

        self.state_repository.persist(&search_record).await?;

        let crystallized_units = self
            .work_repository
            .rebuild(
                &search_record.range_start,
                &search_record.range_end,
                &search_record.chunk_size,
                bit_range,
                directive.dp_bits,
            )
            .await?;

        info!(
            "🛰️  [COORDINATOR]: Search configured [{}..{}] dp_bits={} bit_range={} units={}.",
            search_record.range_start, search_record.range_end,
            directive.dp_bits, bit_range, crystallized_units
        );

        core_guard.search_state = Some(search_record);
        core_guard.collision_resolver = Some(collision_resolver);
        Ok(())
    }

    /**
     * Reclama la siguiente unidad de trabajo para un cliente.
     *
     * Retorna `None` si la búsqueda está resuelta, no configurada o la
     * cola quedó vacía. El sobre entregado ecoa la clave objetivo y los
     * bits de punto distinguido vigentes.
     */
    #[instrument(skip(self))]
    pub async fn get_work(
        &self,
        client_identifier: &str,
    ) -> Result<Option<WorkDescriptor>, CoordinatorError> {
        let core_guard = self.guarded_core.lock().await;

        let Some(search_record) = &core_guard.search_state else {
            return Ok(None);
        };
        if search_record.solved {
            debug!("🏁 [COORDINATOR]: Terminal stratum reached. Unit {} dismissed.", client_identifier);
            return Ok(None);
        }

        let assignment_timestamp = Utc::now().to_rfc3339();
        let claimed_chunk = self
            .work_repository
            .claim_next(client_identifier, &assignment_timestamp)
            .await?;

        Ok(claimed_chunk.map(|chunk| WorkDescriptor {
            range_id: chunk.range_id,
            start_range: chunk.start_hex,
            end_range: chunk.end_hex,
            bit_range: chunk.bit_range,
            dp_bits: chunk.dp_bits,
            pubkey: search_record.pubkey.clone(),
        }))
    }

    /**
     * Absorbe una ráfaga de puntos distinguidos en orden de envío.
     *
     * Contrato de la ráfaga:
     * - Huella nueva → inserción (el perdedor de una carrera se degrada
     *   a duplicado silencioso).
     * - Huella residente idéntica → duplicado silencioso.
     * - Huella residente divergente → resolutor; el primer escalar
     *   certificado sella el estrato terminal y corta la ráfaga.
     *
     * # Errors:
     * - `CoordinatorError::MalformedInput`: Algún punto ilegible; la
     *   ráfaga completa se rechaza sin tocar el almacén.
     * - `CoordinatorError::Storage`: El Ledger rechazó una operación.
     */
    #[instrument(skip(self, submitted_points), fields(batch = submitted_points.len()))]
    pub async fn submit_points(
        &self,
        client_identifier: &str,
        submitted_points: &[SubmittedPoint],
    ) -> Result<SubmitPointsReply, CoordinatorError> {
        // La frontera valida la ráfaga completa antes de tocar estado.
        let validated_points = Self::validate_batch(submitted_points)?;

        let mut core_guard = self.guarded_core.lock().await;
        let CoordinationCore { search_state, collision_resolver, unresolved_collisions } =
            &mut *core_guard;

        if let Some(record) = search_state.as_ref() {
            if record.solved {
                return Ok(SubmitPointsReply {
                    status: "solved".to_string(),
                    points_processed: None,
                    solution: record.solution.clone(),
                    message: None,
                });
            }
        }

        for point in &validated_points {
            let Some(resident_evidence) = self.dp_repository.lookup(&point.x_coordinate).await?
            else {
                let found_at_timestamp = Utc::now().to_rfc3339();
                self.dp_repository
                    .insert(
                        &point.x_coordinate,
                        &point.distance_hexadecimal,
                        point.walk_type,
                        client_identifier,
                        &found_at_timestamp,
                    )
                    .await?;
                continue;
            };

            // Evidencia idéntica (familia y distancia): duplicado silencioso.
            let resident_distance =
                decode_hexadecimal_to_u256_big_endian(&resident_evidence.distance)
                    .map_err(|fault| {
                        CoordinatorError::Storage(kangaroo_infra_db::DbError::MappingError(
                            fault.to_string(),
                        ))
                    })?;
            if resident_evidence.walk_type == point.walk_type
                && compare_u256_big_endian(&resident_distance, &point.distance_value)
                    == Ordering::Equal
            {
                debug!("♻️ [COORDINATOR]: Identical evidence at {}. Silent duplicate.", point.x_coordinate);
                continue;
            }

            let Some(resolver) = collision_resolver.as_ref() else {
                warn!("⚠️ [COORDINATOR]: Collision at {} observed without resolver. Dropped.", point.x_coordinate);
                continue;
            };

            let resolution = resolver.resolve_collision(
                &point.x_coordinate,
                &resident_evidence.distance,
                resident_evidence.walk_type,
                &point.distance_hexadecimal,
                point.walk_type,
            );

            match resolution {
                Ok(Resolution::Solved { scalar_hexadecimal }) => {
                    let Some(record) = search_state.as_ref() else {
                        warn!("💀 [COORDINATOR]: Certified scalar without search state. Dropped.");
                        continue;
                    };

                    let mut terminal_record = record.clone();
                    terminal_record.solved = true;
                    terminal_record.solution = Some(scalar_hexadecimal.clone());

                    self.state_repository.persist(&terminal_record).await?;
                    *search_state = Some(terminal_record);

                    info!("🏆 [COLLISION_FOUND]: Search sealed. Solution: {}", scalar_hexadecimal);

                    // Tie-break: la primera certificación corta la ráfaga.
                    return Ok(SubmitPointsReply {
                        status: "solved".to_string(),
                        points_processed: None,
                        solution: Some(scalar_hexadecimal),
                        message: None,
                    });
                }
                Ok(Resolution::Rejected { candidate_hexadecimal }) => {
                    warn!(
                        "⚠️ [VERIFICATION_FAILED]: Candidate {} at {} discarded. Search continues.",
                        candidate_hexadecimal, point.x_coordinate
                    );
                }
                Ok(Resolution::Unresolved { collision_case }) => {
                    info!(
                        "🧩 [UNRESOLVED_CANDIDATE]: Case {} retained at {}.",
                        collision_case.nominal_label(), point.x_coordinate
                    );
                    unresolved_collisions.push(CollisionDescriptor {
                        x_coord: point.x_coordinate.clone(),
                        stored_distance: resident_evidence.distance.clone(),
                        stored_walk_type: resident_evidence.walk_type,
                        submitted_distance: point.distance_hexadecimal.clone(),
                        submitted_walk_type: point.walk_type,
                        collision_case: collision_case.nominal_label().to_string(),
                        observed_at: Utc::now().to_rfc3339(),
                    });
                }
                Ok(Resolution::Unsolvable { collision_case }) => {
                    debug!(
                        "🚫 [UNSOLVABLE]: Case {} at {} carries no information.",
                        collision_case.nominal_label(), point.x_coordinate
                    );
                }
                Err(resolution_fault) => {
                    warn!(
                        "⚠️ [RESOLVER_FAULT]: Collision at {} aborted: {}. Batch continues.",
                        point.x_coordinate, resolution_fault
                    );
                }
            }
        }

        Ok(SubmitPointsReply {
            status: "success".to_string(),
            points_processed: Some(submitted_points.len()),
            solution: None,
            message: None,
        })
    }

    /**
     * Instantánea de estado bajo el punto de linealización.
     */
    #[instrument(skip(self))]
    pub async fn status(&self) -> Result<kangaroo_domain_models::StatusReply, CoordinatorError> {
        let core_guard = self.guarded_core.lock().await;

        let fingerprint_count = self.dp_repository.count().await?;
        let work_range_census = self.work_repository.counts_by_status().await?;

        let (solved, solution, search_range) = match &core_guard.search_state {
            Some(record) => (
                record.solved,
                record.solution.clone(),
                kangaroo_domain_models::SearchRangeView {
                    start: Some(record.range_start.clone()),
                    end: Some(record.range_end.clone()),
                    pubkey: Some(record.pubkey.clone()),
                    dp_bits: Some(record.dp_bits),
                },
            ),
            None => (
                false,
                None,
                kangaroo_domain_models::SearchRangeView {
                    start: None,
                    end: None,
                    pubkey: None,
                    dp_bits: None,
                },
            ),
        };

        Ok(kangaroo_domain_models::StatusReply {
            solved,
            solution,
            dp_count: fingerprint_count,
            work_ranges: work_range_census,
            search_range,
            unresolved_collisions: core_guard.unresolved_collisions.clone(),
        })
    }

    /**
     * Devuelve a la cola las unidades asignadas más antiguas que el
     * umbral. Serializado bajo el mismo Mutex que el despacho.
     * Extensión opt-in del daemon de recuperación.
     */
    #[instrument(skip(self))]
    pub async fn reclaim_stale_assignments(
        &self,
        expiration_threshold_timestamp: &str,
    ) -> Result<u64, CoordinatorError> {
        let _core_guard = self.guarded_core.lock().await;
        Ok(self.work_repository.reclaim_stale(expiration_threshold_timestamp).await?)
    }

    /// Forja el resolutor desde un registro de búsqueda sellado.
    fn forge_resolver(
        search_record: &SearchStateRecord,
        curve_oracle: &Arc<dyn CurveOracle>,
    ) -> Result<CollisionResolver, CoordinatorError> {
        let target_descriptor = PublicKeyDescriptor::parse(&search_record.pubkey)
            .map_err(|parse_fault| CoordinatorError::MalformedInput(parse_fault.to_string()))?;

        let search_context = SearchContext::forge(
            target_descriptor,
            &search_record.range_start,
            search_record.bit_range,
        )?;

        Ok(CollisionResolver::new(search_context, curve_oracle.clone()))
    }

    /// Valida la ráfaga completa en la frontera: ningún punto ilegible
    /// alcanza el almacén.
    fn validate_batch(
        submitted_points: &[SubmittedPoint],
    ) -> Result<Vec<ValidatedPoint>, CoordinatorError> {
        submitted_points
            .iter()
            .map(|point| {
                let normalized_fingerprint = point.x_coord.trim().to_lowercase();
                if normalized_fingerprint.is_empty()
                    || !normalized_fingerprint.bytes().all(|digit| digit.is_ascii_hexdigit())
                {
                    return Err(CoordinatorError::MalformedInput(format!(
                        "x_coord: {}",
                        point.x_coord
                    )));
                }

                let distance_value = decode_hexadecimal_to_u256_big_endian(&point.distance)
                    .map_err(|fault| {
                        CoordinatorError::MalformedInput(format!("distance: {}", fault))
                    })?;

                let walk_type = WalkType::from_wire_discriminant(point.kang_type).ok_or_else(
                    || CoordinatorError::MalformedInput(format!("kang_type: {}", point.kang_type)),
                )?;

                Ok(ValidatedPoint {
                    x_coordinate: normalized_fingerprint,
                    distance_hexadecimal: point.distance.trim().to_lowercase(),
                    distance_value,
                    walk_type,
                })
            })
            .collect()
    }
}
