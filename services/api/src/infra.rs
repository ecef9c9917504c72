use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use rg16::assessment::{
    AssessmentId, AssessmentRecord, AssessmentStore, KeyedRecord, ModuleId, StoreError,
    StoreSnapshot,
};

use crate::file_store::JsonFileStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentStore {
    snapshot: Arc<Mutex<StoreSnapshot>>,
}

impl InMemoryAssessmentStore {
    fn with_snapshot<T>(
        &self,
        apply: impl FnOnce(&mut StoreSnapshot) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = self
            .snapshot
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))?;
        apply(&mut guard)
    }
}

impl AssessmentStore for InMemoryAssessmentStore {
    fn create(&self, record: AssessmentRecord) -> Result<AssessmentRecord, StoreError> {
        self.with_snapshot(|snapshot| snapshot.insert_assessment(record))
    }

    fn get(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, StoreError> {
        self.with_snapshot(|snapshot| Ok(snapshot.assessment(id)))
    }

    fn active_modules(&self, id: &AssessmentId) -> Result<BTreeSet<ModuleId>, StoreError> {
        self.with_snapshot(|snapshot| Ok(snapshot.active_modules(id)))
    }

    fn upsert(&self, record: KeyedRecord) -> Result<KeyedRecord, StoreError> {
        self.with_snapshot(|snapshot| Ok(snapshot.apply_upsert(record)))
    }
}

/// Store selected at startup: in memory unless a file path is configured.
pub(crate) enum ConfiguredStore {
    Memory(InMemoryAssessmentStore),
    File(JsonFileStore),
}

impl ConfiguredStore {
    pub(crate) fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(JsonFileStore::new(path)),
            None => Self::Memory(InMemoryAssessmentStore::default()),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Memory(_) => "memory".to_string(),
            Self::File(store) => format!("file:{}", store.path().display()),
        }
    }

    fn inner(&self) -> &dyn AssessmentStore {
        match self {
            Self::Memory(store) => store,
            Self::File(store) => store,
        }
    }
}

impl AssessmentStore for ConfiguredStore {
    fn create(&self, record: AssessmentRecord) -> Result<AssessmentRecord, StoreError> {
        self.inner().create(record)
    }

    fn get(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, StoreError> {
        self.inner().get(id)
    }

    fn active_modules(&self, id: &AssessmentId) -> Result<BTreeSet<ModuleId>, StoreError> {
        self.inner().active_modules(id)
    }

    fn upsert(&self, record: KeyedRecord) -> Result<KeyedRecord, StoreError> {
        self.inner().upsert(record)
    }
}
