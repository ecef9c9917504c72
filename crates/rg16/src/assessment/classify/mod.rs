//! Type classification from category scores.
//!
//! Two classifiers share one result vocabulary: [`stack`] matches the eight
//! function scores against the 16 fixed stacks, [`dimensions`] reads four
//! independent binary letters off the trait scores.

pub mod compatibility;
pub mod dimensions;
pub mod stack;

use serde::{Deserialize, Serialize};

pub use compatibility::{compatibility_profile, CompatibilityProfile, PairingKind};
pub use dimensions::{classify_dimensions, Axis, AxisReading, BinaryTypeResult, Suffix, SuffixTag};
pub use stack::{
    classify_stack, FunctionProfile, FunctionStack, JungType, StackDiagnostics, StackTypeResult,
    TypeMatch,
};

/// How decisive a classification is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
    /// Binary classifier's lowest tier: at least one axis sits near 50.
    Borderline,
}

impl ConfidenceTier {
    pub const HIGH_AT: f64 = 0.75;
    pub const MEDIUM_AT: f64 = 0.60;

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Borderline => "Borderline",
        }
    }

    /// Tier for the 16-way stack match.
    pub fn for_stack(confidence: f64) -> Self {
        Self::banded(confidence, Self::Low)
    }

    /// Tier for the four-letter binary reading.
    pub fn for_dimensions(confidence: f64) -> Self {
        Self::banded(confidence, Self::Borderline)
    }

    fn banded(confidence: f64, floor: Self) -> Self {
        if confidence >= Self::HIGH_AT {
            Self::High
        } else if confidence >= Self::MEDIUM_AT {
            Self::Medium
        } else {
            floor
        }
    }
}
