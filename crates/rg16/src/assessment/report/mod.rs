//! Narrative report synthesis: bands, template tables, and evidence citations.

mod big_five;
mod evidence;
mod jung;
mod templates;

use serde::Serialize;

pub use big_five::{build_big_five_report, AspectRead, BigFiveReport, TraitRead};
pub use evidence::{collect_evidence, ChosenAnswer, EvidenceCitation, EvidenceCaps};
pub use jung::{build_jung_report, FunctionSection, JungReport, LevelCard};

/// Scores at or below this are `low`.
pub const LOW_BAND_MAX: u8 = 40;
/// Scores at or above this are `high`.
pub const HIGH_BAND_MIN: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Low,
    Mid,
    High,
}

impl Band {
    pub const fn of(score: u8) -> Self {
        if score <= LOW_BAND_MAX {
            Self::Low
        } else if score >= HIGH_BAND_MIN {
            Self::High
        } else {
            Self::Mid
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "lower",
            Self::Mid => "moderate",
            Self::High => "higher",
        }
    }
}

/// Titled group of bullet lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub title: String,
    pub bullets: Vec<String>,
}

/// Derived, read-only report. The variant always matches the bank version of
/// the scores it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "version")]
pub enum Report {
    #[serde(rename = "v1")]
    BigFive(BigFiveReport),
    #[serde(rename = "v2")]
    Jung(Box<JungReport>),
}

impl Report {
    pub fn headline(&self) -> &str {
        match self {
            Report::BigFive(report) => &report.headline,
            Report::Jung(report) => &report.headline,
        }
    }
}
