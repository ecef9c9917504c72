//! Integration specifications for the questionnaire engine.
//!
//! Scenarios drive the public scoring entry points, the service facade and the
//! HTTP router without reaching into private modules.

mod common {
    use std::collections::BTreeSet;
    use std::sync::{Arc, Mutex};

    use rg16::assessment::{
        AnswerMap, AnswerValue, AssessmentId, AssessmentRecord, AssessmentService,
        AssessmentStore, KeyedRecord, ModuleId, StoreError, StoreSnapshot,
    };

    #[derive(Default, Clone)]
    pub(super) struct SnapshotStore {
        snapshot: Arc<Mutex<StoreSnapshot>>,
    }

    impl AssessmentStore for SnapshotStore {
        fn create(&self, record: AssessmentRecord) -> Result<AssessmentRecord, StoreError> {
            self.snapshot
                .lock()
                .expect("store mutex poisoned")
                .insert_assessment(record)
        }

        fn get(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, StoreError> {
            Ok(self.snapshot.lock().expect("store mutex poisoned").assessment(id))
        }

        fn active_modules(&self, id: &AssessmentId) -> Result<BTreeSet<ModuleId>, StoreError> {
            Ok(self
                .snapshot
                .lock()
                .expect("store mutex poisoned")
                .active_modules(id))
        }

        fn upsert(&self, record: KeyedRecord) -> Result<KeyedRecord, StoreError> {
            Ok(self
                .snapshot
                .lock()
                .expect("store mutex poisoned")
                .apply_upsert(record))
        }
    }

    pub(super) fn service() -> Arc<AssessmentService<SnapshotStore>> {
        Arc::new(AssessmentService::new(
            Arc::new(SnapshotStore::default()),
            false,
        ))
    }

    fn choice(answers: &mut AnswerMap, id: String, option: &str) {
        answers.insert(id, AnswerValue::Choice(option.to_string()));
    }

    /// Function-bank answers of a respondent with an Fi-Ne-Si-Te stack.
    pub(super) fn infp_answers() -> AnswerMap {
        let mut answers = AnswerMap::new();

        // Se Si Ne Ni Te Ti Fe Fi, reverse-keyed twins mirrored.
        let endorsement = [1, 3, 4, 1, 2, 1, 1, 5];
        for (idx, value) in endorsement.into_iter().enumerate() {
            answers.insert(format!("j{:03}", idx + 1), AnswerValue::Ordinal(value));
            answers.insert(format!("j{:03}", idx + 9), AnswerValue::Ordinal(6 - value));
        }

        for n in 101..=112 {
            let option = if n % 4 == 0 { "B" } else { "C" };
            choice(&mut answers, format!("j{n}"), option);
        }
        for n in 201..=212 {
            choice(&mut answers, format!("j{n}"), "D");
        }
        for (block, option) in [(300, "B"), (310, "A"), (320, "A"), (330, "B")] {
            for n in 1..=6 {
                choice(&mut answers, format!("j{}", block + n), option);
            }
        }
        answers
    }

    /// Aspect-bank answers: every item at 4, reverse-keyed items at 2.
    pub(super) fn agreeing_answers() -> AnswerMap {
        rg16::assessment::bank::big_five::bank()
            .questions
            .iter()
            .map(|question| {
                let value = match question.shape {
                    rg16::assessment::bank::ItemShape::Calibration {
                        reverse_keyed: true,
                        ..
                    } => 2,
                    _ => 4,
                };
                (question.id.to_string(), AnswerValue::Ordinal(value))
            })
            .collect()
    }
}

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::*;
use rg16::assessment::bank::CognitiveFunction;
use rg16::assessment::{
    assessment_router, build_report, classify_type, score_categories, AnswerMap,
    AssessmentError, BankVersion, JungType, Report, TypeResult,
};

async fn send(router: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router responds");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, serde_json::from_slice(&body).expect("json payload"))
}

fn post(uri: &str, payload: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

#[test]
fn function_answers_flow_through_score_classify_and_report() {
    let answers = infp_answers();
    let scored = score_categories(BankVersion::V2, &answers, Some(64 * 5_000));
    let type_result = classify_type(&scored.scores);

    let TypeResult::Stack(stack) = &type_result else {
        panic!("v2 yields a stack result");
    };
    assert_eq!(stack.selected, JungType::Infp);
    assert_eq!(stack.alternates.len(), 3);
    assert!(stack
        .alternates
        .iter()
        .all(|alternate| alternate.type_id != JungType::Infp));
    assert!(scored.quality.warnings.is_empty(), "{:?}", scored.quality.warnings);

    let report = build_report(&scored.scores, &scored.quality, &type_result, &answers)
        .expect("versions match");
    let Report::Jung(report) = report else {
        panic!("v2 yields a function report");
    };
    let scores: Vec<u8> = report.functions.iter().map(|section| section.score).collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(report.functions[0].function, CognitiveFunction::Fi);
    assert_eq!(report.functions[0].evidence.len(), 4);
    assert!(report
        .functions
        .iter()
        .all(|section| section.evidence.len() <= 4));
    assert_eq!(
        report.baseline.as_ref().map(|placement| placement.row.type_id),
        Some(JungType::Infp)
    );
}

#[test]
fn outputs_are_deterministic() {
    let answers = infp_answers();
    let render = |answers: &AnswerMap| {
        let scored = score_categories(BankVersion::V2, answers, None);
        let type_result = classify_type(&scored.scores);
        let report = build_report(&scored.scores, &scored.quality, &type_result, answers)
            .expect("versions match");
        serde_json::to_string(&(&scored.scores, &scored.quality, &type_result, &report))
            .expect("serializes")
    };
    assert_eq!(render(&answers), render(&answers.clone()));
}

#[test]
fn reports_refuse_mismatched_versions() {
    let big_five = score_categories(BankVersion::V1, &agreeing_answers(), None);
    let functions = score_categories(BankVersion::V2, &infp_answers(), None);

    let err = build_report(
        &big_five.scores,
        &big_five.quality,
        &classify_type(&functions.scores),
        &AnswerMap::new(),
    )
    .expect_err("mismatched versions");
    assert!(matches!(err, AssessmentError::VersionMismatch { .. }));
}

#[tokio::test]
async fn paid_order_unlocks_the_big_five_report() {
    let router = assessment_router(service());

    let (status, receipt) = send(
        &router,
        post(
            "/api/v1/assessments",
            json!({"version": "v1", "mode": "quick", "duration_ms": 300_000, "answers": agreeing_answers()}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(receipt["type_label"], "ENFJ-T");
    let id = receipt["assessment_id"].as_str().expect("id").to_string();

    let orders = format!("/api/v1/assessments/{id}/orders");
    let (status, pending) = send(
        &router,
        post(&orders, json!({"order_ref": "cs_9", "sku": "deep_report_v1", "status": "pending"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pending["granted"], json!([]));
    assert_eq!(pending["order"]["amount"], 999);

    let (_, locked) = send(&router, get(&format!("/api/v1/assessments/{id}"))).await;
    assert!(locked.get("report").is_none());
    assert_eq!(locked["mode"], "quick");

    let (status, _) = send(
        &router,
        post(&orders, json!({"order_ref": "cs_9", "sku": "deep_report_v1", "status": "paid"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, unlocked) = send(&router, get(&format!("/api/v1/assessments/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unlocked["report"]["version"], "v1");
    assert_eq!(unlocked["report"]["type_label"], "ENFJ-T");
    assert_eq!(unlocked["report"]["traits"].as_array().map(Vec::len), Some(5));
    assert_eq!(unlocked["report"]["aspects"].as_array().map(Vec::len), Some(10));
    assert_eq!(unlocked["report"]["sections"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn unsupported_versions_never_reach_the_store() {
    let router = assessment_router(service());

    let (status, body) = send(
        &router,
        post("/api/v1/assessments", json!({"version": "v0", "answers": {}})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.contains("unsupported questionnaire version")));
}
