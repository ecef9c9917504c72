//! Questionnaire scoring, type classification, report synthesis, and the
//! store-backed service that exposes them.
//!
//! Data flows one way: bank → category scores → {type result, quality index}
//! → report. Every stage up to the service is a pure function of its inputs.

pub mod bank;
pub mod baseline;
pub mod classify;
pub mod domain;
pub mod entitlements;
pub mod pipeline;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use baseline::{BaselinePlacement, BaselineRow, TypeBaseline, DEFAULT_BASELINE};
pub use classify::{BinaryTypeResult, ConfidenceTier, JungType, StackTypeResult};
pub use domain::{
    AnswerMap, AnswerValue, AssessmentError, AssessmentMode, BankVersion, CategoryScore,
    QualityIndex,
};
pub use entitlements::{find_sku, ModuleId, Sku};
pub use pipeline::{
    build_report, classify_type, score_categories, AssessmentSubmission, ComputedAssessment,
    ScorePack, ScoredAssessment, TypeResult,
};
pub use report::Report;
pub use repository::{
    AssessmentId, AssessmentRecord, AssessmentStore, EntitlementRecord, EntitlementStatus,
    KeyedRecord, OrderRecord, OrderStatus, StoreError, StoreSnapshot,
};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError};
pub use views::{AssessmentResultView, OrderReceipt, OrderSubmission, SubmissionReceipt};
