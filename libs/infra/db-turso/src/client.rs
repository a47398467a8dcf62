// INICIO DEL ARCHIVO [libs/infra/db-turso/src/client.rs]
/*!
 * =================================================================
 * APARATO: DATABASE CONNECTION CLIENT (V5.0 - TYPED LOCATION)
 * CLASIFICACIÓN: INFRASTRUCTURE LAYER (ESTRATO L3)
 * RESPONSABILIDAD: GESTIÓN DE ENLACES TÁCTICOS Y PERSISTENCIA ACID
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PARSE ONCE: La ubicación del Ledger se clasifica una única vez
 *    en un tipo suma (disco, memoria anclada, remoto); el resto del
 *    cliente consume el descriptor, nunca la URL cruda.
 * 2. SINGLE BOOTSTRAP LINK: El coordinador es un proceso de escritor
 *    único; una sola conexión de arranque sincroniza el esquema y,
 *    en modo memoria, se retiene como ancla de persistencia.
 * 3. TOKEN DISCIPLINE: El token remoto se exige en la clasificación,
 *    antes de encender el driver, no a mitad del enlace.
 *
 * # Mathematical Proof (In-Memory Consistency):
 * Con cache=shared, la base en RAM vive mientras exista al menos una
 * conexión abierta. Retener la conexión de arranque garantiza que el
 * esquema sincronizado sea visible para todo hilo posterior.
 * =================================================================
 */

use crate::errors::DbError;
use crate::schema::apply_full_coordination_schema;
use libsql::{Builder, Connection, Database};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Ubicación clasificada del Ledger táctico.
enum LedgerLocation {
    /// Archivo local en disco (el modo nominal del coordinador).
    LocalFile(String),
    /// Base en RAM con caché compartido (cámara de pruebas).
    AnchoredMemory(String),
    /// Cluster libSQL remoto con token de acceso.
    Remote {
        url: String,
        access_token: String,
    },
}

impl LedgerLocation {
    /// Clasifica la URL del Ledger una única vez.
    ///
    /// # Errors:
    /// - URL vacía.
    /// - URL remota sin token de acceso.
    fn classify(
        database_connection_url: &str,
        database_access_token: Option<String>,
    ) -> Result<Self, DbError> {
        if database_connection_url.is_empty() {
            return Err(DbError::ConnectionError(
                "CRITICAL_FAULT: DATABASE_URL_UNDEFINED".into(),
            ));
        }

        if database_connection_url.starts_with("libsql://")
            || database_connection_url.starts_with("https://")
        {
            let access_token = database_access_token.ok_or_else(|| {
                DbError::ConnectionError(
                    "SECURITY_FAULT: Remote access denied (Token missing)".into(),
                )
            })?;
            return Ok(Self::Remote {
                url: database_connection_url.to_string(),
                access_token,
            });
        }

        if database_connection_url.contains(":memory:")
            || database_connection_url.contains("mode=memory")
        {
            return Ok(Self::AnchoredMemory(database_connection_url.to_string()));
        }

        Ok(Self::LocalFile(database_connection_url.to_string()))
    }

    /// Etiqueta nominal de la ubicación para el rastro forense.
    fn nominal_label(&self) -> &'static str {
        match self {
            Self::LocalFile(_) => "LOCAL_DISK",
            Self::AnchoredMemory(_) => "ANCHORED_MEMORY",
            Self::Remote { .. } => "REMOTE_CLUSTER",
        }
    }
}

/// Cliente táctico de conexión al sustrato de persistencia del coordinador.
#[derive(Clone)]
pub struct TursoClient {
    internal_database_driver: Arc<Database>,
    /// Conexión de arranque retenida en modo memoria: mantiene viva la
    /// base compartida evitando que SQLite la purgue.
    _memory_persistence_anchor: Option<Arc<Connection>>,
}

impl TursoClient {
    /// Establece el enlace con el sustrato y sincroniza el esquema.
    ///
    /// # Errors:
    /// Retorna `DbError::ConnectionError` ante ubicación ilegible, fallo
    /// de ignición del driver o colapso del bootstrap estructural.
    #[instrument(skip(database_access_token))]
    pub async fn connect(
        database_connection_url: &str,
        database_access_token: Option<String>,
    ) -> Result<Self, DbError> {
        let ledger_location =
            LedgerLocation::classify(database_connection_url, database_access_token)?;

        info!(
            "🔌 [DATABASE]: Initiating tactical link ({}) to [{}]",
            ledger_location.nominal_label(),
            database_connection_url
        );

        let database_driver = match &ledger_location {
            LedgerLocation::Remote { url, access_token } => {
                Builder::new_remote(url.clone(), access_token.clone()).build().await
            }
            LedgerLocation::LocalFile(path) | LedgerLocation::AnchoredMemory(path) => {
                Builder::new_local(path).build().await
            }
        }
        .map_err(|e| DbError::ConnectionError(format!("DRIVER_IGNITION_FAILURE: {}", e)))?;

        let shared_driver = Arc::new(database_driver);

        // Una única conexión de arranque sincroniza el esquema de las
        // tres tablas del coordinador.
        let bootstrap_connection = shared_driver
            .connect()
            .map_err(|e| DbError::ConnectionError(format!("BOOTSTRAP_LINK_FAULT: {}", e)))?;

        apply_full_coordination_schema(&bootstrap_connection)
            .await
            .map_err(|e| DbError::ConnectionError(format!("SCHEMA_SYNC_FAULT: {}", e)))?;

        // En modo memoria esa misma conexión se retiene como ancla; en
        // disco o remoto se libera al salir de este alcance.
        let memory_persistence_anchor = match ledger_location {
            LedgerLocation::AnchoredMemory(_) => {
                info!("⚓ [DATABASE]: Memory strata solidified and anchored.");
                Some(Arc::new(bootstrap_connection))
            }
            LedgerLocation::LocalFile(_) | LedgerLocation::Remote { .. } => None,
        };

        Ok(Self {
            internal_database_driver: shared_driver,
            _memory_persistence_anchor: memory_persistence_anchor,
        })
    }

    /// Asigna una conexión viva del pool del driver.
    ///
    /// # Errors:
    /// Retorna `DbError::ConnectionError` si el driver rechaza la asignación.
    pub fn get_connection(&self) -> Result<Connection, DbError> {
        self.internal_database_driver.connect().map_err(|e| {
            error!("⚠️ [POOL_FAULT]: Connection allocation failed: {}", e);
            DbError::ConnectionError(e.to_string())
        })
    }
}
