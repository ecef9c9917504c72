use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::{json, Value};

use crate::assessment::bank::{big_five, ItemShape, Trait};
use crate::assessment::domain::{AnswerMap, AnswerValue};
use crate::assessment::entitlements::ModuleId;
use crate::assessment::repository::{
    AssessmentId, AssessmentRecord, AssessmentStore, KeyedRecord, StoreError, StoreSnapshot,
};
use crate::assessment::{assessment_router, AssessmentService};

/// Per-item pace used for fixtures: comfortably above every speed floor.
pub(super) const FIXTURE_MS_PER_ITEM: u64 = 4_000;

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) snapshot: Arc<Mutex<StoreSnapshot>>,
}

impl MemoryStore {
    pub(super) fn snapshot(&self) -> StoreSnapshot {
        self.snapshot.lock().expect("store mutex poisoned").clone()
    }
}

impl AssessmentStore for MemoryStore {
    fn create(&self, record: AssessmentRecord) -> Result<AssessmentRecord, StoreError> {
        let mut guard = self.snapshot.lock().expect("store mutex poisoned");
        guard.insert_assessment(record)
    }

    fn get(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, StoreError> {
        let guard = self.snapshot.lock().expect("store mutex poisoned");
        Ok(guard.assessment(id))
    }

    fn active_modules(&self, id: &AssessmentId) -> Result<BTreeSet<ModuleId>, StoreError> {
        let guard = self.snapshot.lock().expect("store mutex poisoned");
        Ok(guard.active_modules(id))
    }

    fn upsert(&self, record: KeyedRecord) -> Result<KeyedRecord, StoreError> {
        let mut guard = self.snapshot.lock().expect("store mutex poisoned");
        Ok(guard.apply_upsert(record))
    }
}

pub(super) struct UnavailableStore;

impl AssessmentStore for UnavailableStore {
    fn create(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn get(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn active_modules(&self, _id: &AssessmentId) -> Result<BTreeSet<ModuleId>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn upsert(&self, _record: KeyedRecord) -> Result<KeyedRecord, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service(paywall_bypass: bool) -> (AssessmentService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = AssessmentService::new(store.clone(), paywall_bypass);
    (service, store)
}

pub(super) fn router_with_service(service: AssessmentService<MemoryStore>) -> axum::Router {
    assessment_router(Arc::new(service))
}

fn insert_all(answers: &mut AnswerMap, ids: impl IntoIterator<Item = String>, value: &str) {
    for id in ids {
        answers.insert(id, AnswerValue::Choice(value.to_string()));
    }
}

/// Function-bank answers of a respondent leaning hard on Ni with Te support.
pub(super) fn intj_answers() -> AnswerMap {
    let mut answers = AnswerMap::new();

    // Se Si Ne Ni Te Ti Fe Fi, then the reverse-keyed twins.
    let calibration = [1, 2, 2, 5, 5, 3, 2, 4, 5, 4, 4, 1, 1, 3, 4, 2];
    for (idx, value) in calibration.into_iter().enumerate() {
        answers.insert(format!("j{:03}", idx + 1), AnswerValue::Ordinal(value));
    }

    insert_all(&mut answers, (101..=112).map(|n| format!("j{n}")), "D");
    insert_all(&mut answers, (201..=212).map(|n| format!("j{n}")), "A");
    insert_all(&mut answers, ["j203".to_string(), "j208".to_string()], "D");
    insert_all(&mut answers, (301..=306).map(|n| format!("j{n}")), "B");
    insert_all(&mut answers, (311..=316).map(|n| format!("j{n}")), "B");
    insert_all(&mut answers, (321..=326).map(|n| format!("j{n}")), "A");
    insert_all(&mut answers, (331..=336).map(|n| format!("j{n}")), "B");
    answers
}

/// Aspect-bank answers scoring 100 on every aspect of `high` and 25 elsewhere.
pub(super) fn big_five_answers(high: &[Trait]) -> AnswerMap {
    let mut answers = AnswerMap::new();
    for question in big_five::bank().questions {
        let ItemShape::Calibration {
            category,
            reverse_keyed,
        } = question.shape
        else {
            continue;
        };
        let value = match (high.contains(&category.parent()), reverse_keyed) {
            (true, false) => 5,
            (true, true) => 1,
            (false, false) => 2,
            (false, true) => 4,
        };
        answers.insert(question.id.to_string(), AnswerValue::Ordinal(value));
    }
    answers
}

pub(super) fn submission_payload(version: &str, answers: &AnswerMap) -> Value {
    json!({
        "version": version,
        "durationMs": answers.len() as u64 * FIXTURE_MS_PER_ITEM,
        "answers": answers,
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
