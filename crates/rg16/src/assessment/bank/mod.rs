//! Versioned, immutable question banks.
//!
//! A bank is static data: the order of `questions` is the canonical bank order
//! used by every downstream stage (dispersion, repeat runs, evidence order).

pub mod big_five;
pub mod jung;

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use super::domain::{AnswerMap, BankVersion};

pub use big_five::{Aspect, Trait};
pub use jung::CognitiveFunction;

/// Neutral midpoint substituted for unanswered calibration items.
pub const LIKERT_MIDPOINT: u8 = 3;

/// Labels shown next to each point of the 1..=5 agreement scale.
pub const LIKERT_SCALE: [(u8, &str, &str); 5] = [
    (1, "Strongly disagree", "Almost never true of me"),
    (2, "Disagree", "Mostly not true of me"),
    (3, "Unsure", "About half and half"),
    (4, "Agree", "Mostly true of me"),
    (5, "Strongly agree", "Almost always true of me"),
];

/// A scored dimension. `ALL` fixes the canonical order used for reporting.
pub trait Category: Copy + Eq + Ord + Hash + Debug + Serialize + Send + Sync + 'static {
    const ALL: &'static [Self];

    fn code(self) -> &'static str;

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|candidate| *candidate == self)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Calibration,
    Forced,
    Situational,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceOption<C: 'static> {
    pub id: &'static str,
    pub category: C,
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemShape<C: 'static> {
    Calibration { category: C, reverse_keyed: bool },
    Forced(&'static [ChoiceOption<C>]),
    Situational(&'static [ChoiceOption<C>]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question<C: 'static> {
    pub id: &'static str,
    pub prompt: &'static str,
    pub shape: ItemShape<C>,
}

/// How a single item was answered, after validating the raw value against the
/// item's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Missing,
    Malformed,
    Ordinal(u8),
    /// Zero-based position of the chosen option.
    Choice(usize),
}

impl Response {
    pub const fn is_answered(self) -> bool {
        matches!(self, Response::Ordinal(_) | Response::Choice(_))
    }
}

impl<C: Category> Question<C> {
    pub const fn calibration(id: &'static str, category: C, prompt: &'static str) -> Self {
        Self {
            id,
            prompt,
            shape: ItemShape::Calibration {
                category,
                reverse_keyed: false,
            },
        }
    }

    pub const fn reversed(id: &'static str, category: C, prompt: &'static str) -> Self {
        Self {
            id,
            prompt,
            shape: ItemShape::Calibration {
                category,
                reverse_keyed: true,
            },
        }
    }

    pub const fn forced(
        id: &'static str,
        prompt: &'static str,
        options: &'static [ChoiceOption<C>],
    ) -> Self {
        Self {
            id,
            prompt,
            shape: ItemShape::Forced(options),
        }
    }

    pub const fn situational(
        id: &'static str,
        prompt: &'static str,
        options: &'static [ChoiceOption<C>],
    ) -> Self {
        Self {
            id,
            prompt,
            shape: ItemShape::Situational(options),
        }
    }

    pub const fn kind(&self) -> QuestionKind {
        match self.shape {
            ItemShape::Calibration { .. } => QuestionKind::Calibration,
            ItemShape::Forced(_) => QuestionKind::Forced,
            ItemShape::Situational(_) => QuestionKind::Situational,
        }
    }

    /// Options offered by a forced or situational item; empty for calibration.
    pub const fn options(&self) -> &'static [ChoiceOption<C>] {
        match self.shape {
            ItemShape::Calibration { .. } => &[],
            ItemShape::Forced(options) | ItemShape::Situational(options) => options,
        }
    }

    /// Categories this item can move.
    pub fn target_categories(&self) -> Vec<C> {
        match self.shape {
            ItemShape::Calibration { category, .. } => vec![category],
            ItemShape::Forced(options) | ItemShape::Situational(options) => {
                options.iter().map(|option| option.category).collect()
            }
        }
    }

    pub fn resolve(&self, answers: &AnswerMap) -> Response {
        let Some(value) = answers.get(self.id).filter(|value| !value.is_null()) else {
            return Response::Missing;
        };

        match self.shape {
            ItemShape::Calibration { .. } => value
                .as_ordinal()
                .map_or(Response::Malformed, Response::Ordinal),
            ItemShape::Forced(options) | ItemShape::Situational(options) => value
                .as_choice()
                .and_then(|raw| {
                    let raw = raw.trim();
                    options.iter().position(|option| option.id == raw)
                })
                .map_or(Response::Malformed, Response::Choice),
        }
    }
}

impl<C: 'static> ChoiceOption<C> {
    pub const fn new(
        id: &'static str,
        category: C,
        title: &'static str,
        detail: &'static str,
    ) -> Self {
        Self {
            id,
            category,
            title,
            detail,
        }
    }
}

/// Published bank: a version tag plus its items in canonical order.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank<C: 'static> {
    pub version: BankVersion,
    pub questions: &'static [Question<C>],
}

impl<C: Category> QuestionBank<C> {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, id: &str) -> Option<&'static Question<C>> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn calibration_items(&self) -> impl Iterator<Item = &'static Question<C>> {
        self.questions
            .iter()
            .filter(|question| question.kind() == QuestionKind::Calibration)
    }
}
