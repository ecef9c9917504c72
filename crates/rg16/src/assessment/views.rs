use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classify::ConfidenceTier;
use super::domain::{AssessmentMode, BankVersion, QualityIndex};
use super::entitlements::ModuleId;
use super::pipeline::{ScorePack, TypeResult};
use super::report::Report;
use super::repository::{AssessmentId, AssessmentRecord, OrderRecord, OrderStatus};

/// Response to a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub assessment_id: AssessmentId,
    pub type_label: String,
    pub confidence: f64,
    pub tier: ConfidenceTier,
    pub quality: QualityIndex,
}

impl AssessmentRecord {
    pub fn receipt(&self) -> SubmissionReceipt {
        SubmissionReceipt {
            assessment_id: self.id,
            type_label: self.type_result.label(),
            confidence: self.type_result.confidence(),
            tier: self.type_result.tier(),
            quality: self.quality.clone(),
        }
    }
}

/// Result page payload. `report` is present only when the deep report is
/// unlocked for this assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResultView {
    pub assessment_id: AssessmentId,
    pub created_at: DateTime<Utc>,
    pub version: BankVersion,
    pub mode: AssessmentMode,
    pub type_label: String,
    pub scores: ScorePack,
    pub type_result: TypeResult,
    pub quality: QualityIndex,
    pub unlocked_modules: Vec<ModuleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<Report>,
}

/// Order notification as received from the payment callback.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderSubmission {
    pub order_ref: String,
    pub sku: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub amount: Option<u32>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderReceipt {
    pub order: OrderRecord,
    /// Modules granted by this call; empty unless the order is paid.
    pub granted: Vec<ModuleId>,
}
