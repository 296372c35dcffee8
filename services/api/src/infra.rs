use career_compass::config::AppConfig;
use career_compass::error::AppError;
use career_compass::workflows::assessment::{
    RepositoryError, ScoringEngine, SessionId, SessionRecord, SessionRepository,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl InMemorySessionRepository {
    fn records(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<SessionId, SessionRecord>>, RepositoryError>
    {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("session store mutex poisoned".to_string()))
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records()?;
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records()?;
        if guard.contains_key(&record.session_id) {
            guard.insert(record.session_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records()?;
        Ok(guard.get(id).cloned())
    }
}

/// Build the scoring engine from configuration, letting a CLI path override `APP_CATALOG_PATH`.
pub(crate) fn load_engine(catalog: Option<PathBuf>) -> Result<ScoringEngine, AppError> {
    let mut config = AppConfig::load()?;
    if catalog.is_some() {
        config.assessment.catalog_path = catalog;
    }
    Ok(config.assessment.scoring_engine()?)
}
