use std::sync::Arc;

use axum::http::StatusCode;
use chrono::Utc;
use tracing::{debug, info, warn};

use super::domain::AssessmentError;
use super::entitlements::{find_sku, ModuleId};
use super::pipeline::{build_report, AssessmentSubmission};
use super::repository::{
    AssessmentId, AssessmentRecord, AssessmentStore, EntitlementRecord, EntitlementStatus,
    KeyedRecord, OrderRecord, OrderStatus, StoreError,
};
use super::views::{AssessmentResultView, OrderReceipt, OrderSubmission};

/// Service composing the scoring pipeline with the store and paywall.
pub struct AssessmentService<S> {
    store: Arc<S>,
    paywall_bypass: bool,
}

impl<S> AssessmentService<S>
where
    S: AssessmentStore + 'static,
{
    pub fn new(store: Arc<S>, paywall_bypass: bool) -> Self {
        Self {
            store,
            paywall_bypass,
        }
    }

    /// Score, classify, and persist a submission.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let computed = submission.compute()?;
        if !computed.malformed.is_empty() {
            debug!(
                count = computed.malformed.len(),
                "ignored malformed answer values"
            );
        }

        let record = AssessmentRecord::from_computed(computed, Utc::now());
        let stored = self.store.create(record)?;
        info!(
            assessment_id = %stored.id,
            version = %stored.version,
            type_label = %stored.type_result.label(),
            quality = stored.quality.index,
            "assessment stored"
        );
        Ok(stored)
    }

    pub fn get(&self, id: &AssessmentId) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self.store.get(id)?.ok_or(StoreError::NotFound)?;
        Ok(record)
    }

    /// Modules visible for an assessment; everything when the paywall is bypassed.
    pub fn unlocked_modules(
        &self,
        id: &AssessmentId,
    ) -> Result<Vec<ModuleId>, AssessmentServiceError> {
        if self.paywall_bypass {
            return Ok(ModuleId::ordered().to_vec());
        }
        Ok(self.store.active_modules(id)?.into_iter().collect())
    }

    pub fn result_view(
        &self,
        id: &AssessmentId,
    ) -> Result<AssessmentResultView, AssessmentServiceError> {
        let record = self.get(id)?;
        let unlocked_modules = self.unlocked_modules(id)?;

        let report = if unlocked_modules.contains(&ModuleId::DeepReport) {
            Some(build_report(
                &record.scores,
                &record.quality,
                &record.type_result,
                &record.answers,
            )?)
        } else {
            None
        };

        Ok(AssessmentResultView {
            assessment_id: record.id,
            created_at: record.created_at,
            version: record.version,
            mode: record.mode,
            type_label: record.type_result.label(),
            scores: record.scores,
            type_result: record.type_result,
            quality: record.quality,
            unlocked_modules,
            report,
        })
    }

    /// Upserts the order and, when it is paid, grants the SKU's modules.
    pub fn record_order(
        &self,
        id: &AssessmentId,
        order: OrderSubmission,
    ) -> Result<OrderReceipt, AssessmentServiceError> {
        self.get(id)?;
        let sku = find_sku(&order.sku).ok_or_else(|| {
            warn!(assessment_id = %id, sku = %order.sku, "order for unknown sku");
            AssessmentServiceError::UnknownSku(order.sku.clone())
        })?;

        let now = Utc::now();
        let stored = self.store.upsert(KeyedRecord::Order(OrderRecord {
            order_ref: order.order_ref,
            assessment_id: *id,
            sku: sku.id.to_string(),
            status: order.status,
            amount: order.amount.unwrap_or(sku.unit_amount),
            currency: order.currency.unwrap_or_else(|| sku.currency.to_string()),
            created_at: now,
            updated_at: now,
        }))?;
        let KeyedRecord::Order(order) = stored else {
            let detail = "store returned a non-order record".to_string();
            return Err(StoreError::Unavailable(detail).into());
        };

        let mut granted = Vec::new();
        if order.status == OrderStatus::Paid {
            for module in sku.modules {
                self.store.upsert(KeyedRecord::Entitlement(EntitlementRecord {
                    assessment_id: *id,
                    module: *module,
                    sku: sku.id.to_string(),
                    status: EntitlementStatus::Active,
                    created_at: now,
                    updated_at: now,
                }))?;
                granted.push(*module);
            }
            info!(
                assessment_id = %id,
                order_ref = %order.order_ref,
                modules = granted.len(),
                "entitlements granted"
            );
        } else {
            debug!(
                assessment_id = %id,
                order_ref = %order.order_ref,
                status = order.status.label(),
                "order recorded without grant"
            );
        }

        Ok(OrderReceipt { order, granted })
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("unknown sku: {0}")]
    UnknownSku(String),
    #[error("malformed order: {0}")]
    MalformedOrder(String),
}

impl AssessmentServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Assessment(AssessmentError::VersionMismatch { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Assessment(_) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::Conflict) => StatusCode::CONFLICT,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UnknownSku(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MalformedOrder(_) => StatusCode::BAD_REQUEST,
        }
    }
}
