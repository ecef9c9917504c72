use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::domain::{AnswerMap, AssessmentMode, BankVersion, QualityIndex};
use super::entitlements::ModuleId;
use super::pipeline::{ComputedAssessment, ScorePack, TypeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentId(pub Uuid);

impl AssessmentId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for AssessmentId {
    type Err = uuid::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(raw.trim()).map(Self)
    }
}

/// Persisted submission together with everything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: BankVersion,
    pub mode: AssessmentMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    pub answers: AnswerMap,
    pub scores: ScorePack,
    pub type_result: TypeResult,
    pub quality: QualityIndex,
}

impl AssessmentRecord {
    pub fn from_computed(computed: ComputedAssessment, now: DateTime<Utc>) -> Self {
        Self {
            id: AssessmentId::generate(),
            created_at: now,
            updated_at: now,
            version: computed.version,
            mode: computed.mode,
            duration_ms: computed.duration_ms,
            answers: computed.answers,
            scores: computed.scores,
            type_result: computed.type_result,
            quality: computed.quality,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl OrderStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

/// Settled payment, keyed by the provider's order reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_ref: String,
    pub assessment_id: AssessmentId,
    pub sku: String,
    pub status: OrderStatus,
    pub amount: u32,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitlementStatus {
    Active,
    Revoked,
}

/// One unlocked module for one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementRecord {
    pub assessment_id: AssessmentId,
    pub module: ModuleId,
    pub sku: String,
    pub status: EntitlementStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Records that are written by key rather than created fresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KeyedRecord {
    Order(OrderRecord),
    Entitlement(EntitlementRecord),
}

/// Storage abstraction so the service can run against memory or disk.
pub trait AssessmentStore: Send + Sync {
    fn create(&self, record: AssessmentRecord) -> Result<AssessmentRecord, StoreError>;
    fn get(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, StoreError>;
    fn active_modules(&self, id: &AssessmentId) -> Result<BTreeSet<ModuleId>, StoreError>;
    /// Inserts or replaces by key. The first `created_at` seen for a key is kept.
    fn upsert(&self, record: KeyedRecord) -> Result<KeyedRecord, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("record already exists")]
    Conflict,
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Whole store contents. Both store implementations keep one of these and
/// apply every operation to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub assessments: BTreeMap<AssessmentId, AssessmentRecord>,
    #[serde(default)]
    pub orders: BTreeMap<String, OrderRecord>,
    #[serde(default)]
    pub entitlements: BTreeMap<AssessmentId, BTreeMap<ModuleId, EntitlementRecord>>,
}

impl StoreSnapshot {
    pub fn insert_assessment(
        &mut self,
        record: AssessmentRecord,
    ) -> Result<AssessmentRecord, StoreError> {
        if self.assessments.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        self.assessments.insert(record.id, record.clone());
        Ok(record)
    }

    pub fn assessment(&self, id: &AssessmentId) -> Option<AssessmentRecord> {
        self.assessments.get(id).cloned()
    }

    pub fn active_modules(&self, id: &AssessmentId) -> BTreeSet<ModuleId> {
        self.entitlements
            .get(id)
            .map(|modules| {
                modules
                    .values()
                    .filter(|entitlement| entitlement.status == EntitlementStatus::Active)
                    .map(|entitlement| entitlement.module)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn apply_upsert(&mut self, record: KeyedRecord) -> KeyedRecord {
        match record {
            KeyedRecord::Order(mut order) => {
                if let Some(previous) = self.orders.get(&order.order_ref) {
                    order.created_at = previous.created_at;
                }
                self.orders.insert(order.order_ref.clone(), order.clone());
                KeyedRecord::Order(order)
            }
            KeyedRecord::Entitlement(mut entitlement) => {
                let modules = self.entitlements.entry(entitlement.assessment_id).or_default();
                if let Some(previous) = modules.get(&entitlement.module) {
                    entitlement.created_at = previous.created_at;
                }
                modules.insert(entitlement.module, entitlement.clone());
                KeyedRecord::Entitlement(entitlement)
            }
        }
    }
}
