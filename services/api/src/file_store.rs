use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rg16::assessment::{
    AssessmentId, AssessmentRecord, AssessmentStore, KeyedRecord, ModuleId, StoreError,
    StoreSnapshot,
};
use tracing::debug;
use uuid::Uuid;

/// Store that keeps the whole snapshot in one JSON document.
///
/// Every write reloads the file, applies the change and replaces the file via
/// a sibling temp file and rename, all under one process-wide lock.
pub(crate) struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StoreSnapshot, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(StoreSnapshot::default()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(StoreSnapshot::default()),
            Err(err) => Err(unavailable(&self.path, err)),
        }
    }

    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| unavailable(parent, err))?;
        }

        let bytes = serde_json::to_vec_pretty(snapshot)?;
        let temp = self.path.with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        fs::write(&temp, bytes).map_err(|err| unavailable(&temp, err))?;
        if let Err(err) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(unavailable(&self.path, err));
        }

        debug!(
            path = %self.path.display(),
            assessments = snapshot.assessments.len(),
            orders = snapshot.orders.len(),
            "store saved"
        );
        Ok(())
    }

    fn read<T>(&self, read: impl FnOnce(&StoreSnapshot) -> T) -> Result<T, StoreError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        let snapshot = self.load()?;
        Ok(read(&snapshot))
    }

    fn write<T>(
        &self,
        write: impl FnOnce(&mut StoreSnapshot) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        let mut snapshot = self.load()?;
        let value = write(&mut snapshot)?;
        self.save(&snapshot)?;
        Ok(value)
    }
}

fn unavailable(path: &Path, err: std::io::Error) -> StoreError {
    StoreError::Unavailable(format!("{}: {err}", path.display()))
}

impl AssessmentStore for JsonFileStore {
    fn create(&self, record: AssessmentRecord) -> Result<AssessmentRecord, StoreError> {
        self.write(|snapshot| snapshot.insert_assessment(record))
    }

    fn get(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, StoreError> {
        self.read(|snapshot| snapshot.assessment(id))
    }

    fn active_modules(&self, id: &AssessmentId) -> Result<BTreeSet<ModuleId>, StoreError> {
        self.read(|snapshot| snapshot.active_modules(id))
    }

    fn upsert(&self, record: KeyedRecord) -> Result<KeyedRecord, StoreError> {
        self.write(|snapshot| Ok(snapshot.apply_upsert(record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rg16::assessment::{
        AnswerMap, AssessmentSubmission, EntitlementRecord, EntitlementStatus, OrderRecord,
        OrderStatus,
    };
    use std::sync::Arc;

    fn record() -> AssessmentRecord {
        let computed = AssessmentSubmission {
            version: "v1".to_string(),
            mode: None,
            duration_ms: None,
            answers: AnswerMap::new(),
        }
        .compute()
        .expect("published version");
        AssessmentRecord::from_computed(computed, Utc::now())
    }

    fn grant(id: AssessmentId, module: ModuleId) -> KeyedRecord {
        let now = Utc::now();
        KeyedRecord::Entitlement(EntitlementRecord {
            assessment_id: id,
            module,
            sku: "deep_report_v1".to_string(),
            status: EntitlementStatus::Active,
            created_at: now,
            updated_at: now,
        })
    }

    #[test]
    fn records_survive_reopening_the_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("store.json");
        let store = JsonFileStore::new(&path);

        let created = store.create(record()).expect("create succeeds");
        store
            .upsert(grant(created.id, ModuleId::DeepReport))
            .expect("grant succeeds");

        let reopened = JsonFileStore::new(&path);
        assert_eq!(
            reopened.get(&created.id).expect("read succeeds"),
            Some(created.clone())
        );
        assert_eq!(
            reopened.active_modules(&created.id).expect("read succeeds"),
            BTreeSet::from([ModuleId::DeepReport])
        );
        let leftovers: Vec<_> = fs::read_dir(path.parent().expect("parent"))
            .expect("list dir")
            .filter_map(Result::ok)
            .filter(|entry| entry.path() != path)
            .collect();
        assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
    }

    #[test]
    fn missing_or_blank_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get(&AssessmentId::generate()).expect("read"), None);

        let blank = dir.path().join("blank.json");
        fs::write(&blank, "\n").expect("write blank");
        let store = JsonFileStore::new(&blank);
        assert!(store
            .active_modules(&AssessmentId::generate())
            .expect("read")
            .is_empty());
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("store.json");
        fs::write(&path, "{ not json").expect("write");

        let err = JsonFileStore::new(&path)
            .get(&AssessmentId::generate())
            .expect_err("corrupt file");
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn duplicate_ids_conflict() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonFileStore::new(dir.path().join("store.json"));
        let record = record();
        store.create(record.clone()).expect("first insert");
        assert!(matches!(store.create(record), Err(StoreError::Conflict)));
    }

    #[test]
    fn order_upserts_keep_creation_time() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonFileStore::new(dir.path().join("store.json"));
        let first = Utc::now();
        let order = OrderRecord {
            order_ref: "cs_file_1".to_string(),
            assessment_id: AssessmentId::generate(),
            sku: "deep_report_v1".to_string(),
            status: OrderStatus::Pending,
            amount: 999,
            currency: "cny".to_string(),
            created_at: first,
            updated_at: first,
        };
        store
            .upsert(KeyedRecord::Order(order.clone()))
            .expect("pending order");

        let later = first + Duration::minutes(2);
        let stored = store
            .upsert(KeyedRecord::Order(OrderRecord {
                status: OrderStatus::Paid,
                created_at: later,
                updated_at: later,
                ..order
            }))
            .expect("paid order");

        let KeyedRecord::Order(stored) = stored else {
            panic!("order upsert returns an order");
        };
        assert_eq!(stored.created_at, first);
        assert_eq!(stored.status, OrderStatus::Paid);
    }

    #[test]
    fn concurrent_grants_are_not_lost() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = Arc::new(JsonFileStore::new(dir.path().join("store.json")));
        let id = AssessmentId::generate();

        let handles: Vec<_> = ModuleId::ordered()
            .into_iter()
            .map(|module| {
                let store = store.clone();
                std::thread::spawn(move || store.upsert(grant(id, module)).expect("grant"))
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread");
        }

        assert_eq!(
            store.active_modules(&id).expect("read").len(),
            ModuleId::ordered().len()
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_http_submissions_all_reach_the_file() {
        use axum::body::Body;
        use axum::http::{header, Request, StatusCode};
        use rg16::assessment::{assessment_router, AssessmentService};
        use tower::ServiceExt;

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("store.json");
        let service = AssessmentService::new(Arc::new(JsonFileStore::new(&path)), false);
        let router = assessment_router(Arc::new(service));

        let requests: Vec<_> = (0..8)
            .map(|_| {
                let router = router.clone();
                tokio::spawn(async move {
                    let request = Request::post("/api/v1/assessments")
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from(r#"{"version": "v2", "answers": {"j001": 4}}"#))
                        .expect("request builds");
                    router.oneshot(request).await.expect("router responds").status()
                })
            })
            .collect();
        for request in requests {
            assert_eq!(request.await.expect("request task"), StatusCode::CREATED);
        }

        let reopened = JsonFileStore::new(&path);
        let stored = reopened.read(|snapshot| snapshot.assessments.len()).expect("read");
        assert_eq!(stored, 8);
    }
}
