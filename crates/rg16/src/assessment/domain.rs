use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Score assigned to a category that no item in the bank can reach.
pub const NEUTRAL_SCORE: u8 = 50;

/// Published questionnaire versions. Each selects a question bank together with
/// the scoring and classification constants it was released with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BankVersion {
    /// Big Five aspects, four-letter binary type.
    #[serde(rename = "v1")]
    V1,
    /// Jungian functions, 16-way stack match.
    #[serde(rename = "v2")]
    V2,
}

impl BankVersion {
    pub const fn ordered() -> [Self; 2] {
        [Self::V1, Self::V2]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }

    pub const fn default_mode(self) -> AssessmentMode {
        match self {
            Self::V1 => AssessmentMode::Quick,
            Self::V2 => AssessmentMode::Full,
        }
    }
}

impl fmt::Display for BankVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BankVersion {
    type Err = AssessmentError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|version| version.label() == raw.trim())
            .ok_or_else(|| AssessmentError::UnsupportedVersion(raw.to_string()))
    }
}

/// Length of the questionnaire the respondent chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentMode {
    Quick,
    Full,
}

impl AssessmentMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Full => "full",
        }
    }
}

/// Raw answer as submitted. Ordinals arrive as numbers or numeric strings,
/// option identifiers as strings; anything else is kept so it can be reported
/// as malformed instead of failing the whole submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Ordinal(i64),
    Choice(String),
    Other(serde_json::Value),
}

impl AnswerValue {
    /// Likert value in `1..=5`, if the answer is one.
    pub fn as_ordinal(&self) -> Option<u8> {
        let value = match self {
            AnswerValue::Ordinal(value) => *value,
            AnswerValue::Choice(raw) => {
                let raw = raw.trim();
                match raw.parse::<i64>() {
                    Ok(value) => value,
                    Err(_) => whole_number(raw.parse::<f64>().ok()?)?,
                }
            }
            AnswerValue::Other(serde_json::Value::Number(number)) => {
                whole_number(number.as_f64()?)?
            }
            AnswerValue::Other(_) => return None,
        };
        u8::try_from(value)
            .ok()
            .filter(|value| (1..=5).contains(value))
    }

    /// True for an explicit JSON `null`, which counts as unanswered.
    pub fn is_null(&self) -> bool {
        matches!(self, AnswerValue::Other(serde_json::Value::Null))
    }

    /// Option identifier, with numbers rendered as their decimal text.
    pub fn as_choice(&self) -> Option<Cow<'_, str>> {
        match self {
            AnswerValue::Choice(raw) => Some(Cow::Borrowed(raw.as_str())),
            AnswerValue::Ordinal(value) => Some(Cow::Owned(value.to_string())),
            AnswerValue::Other(_) => None,
        }
    }
}

/// `4.0` is a Likert 4; fractional or non-finite values are not ordinals.
fn whole_number(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && value.abs() <= 1e6).then_some(value as i64)
}

impl From<u8> for AnswerValue {
    fn from(value: u8) -> Self {
        AnswerValue::Ordinal(i64::from(value))
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Choice(value.to_string())
    }
}

/// Sparse map of question id to answer. Unanswered ids are simply absent.
pub type AnswerMap = BTreeMap<String, AnswerValue>;

/// Aggregated score for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore<C> {
    pub category: C,
    pub raw: f64,
    pub max_attainable: f64,
    pub normalized: u8,
}

impl<C> CategoryScore<C> {
    pub fn from_totals(category: C, raw: f64, max_attainable: f64) -> Self {
        let normalized = if max_attainable > 0.0 {
            (100.0 * raw / max_attainable).round().clamp(0.0, 100.0) as u8
        } else {
            NEUTRAL_SCORE
        };

        Self {
            category,
            raw,
            max_attainable,
            normalized,
        }
    }
}

/// Answer reliability summary. Computed once per submission and never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityIndex {
    pub answered: usize,
    pub total: usize,
    pub completion_ratio: f64,
    pub dispersion: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_bias_share: Option<f64>,
    pub longest_repeat_run: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_response_time_ms: Option<u64>,
    pub index: u8,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// An answer whose value lies outside its item's domain. It is dropped from
/// scoring and surfaced as a quality warning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MalformedAnswer {
    pub question_id: String,
    pub value: AnswerValue,
}

/// Errors raised at the boundary of the assessment engine. Everything past
/// version resolution is total and reports problems as quality warnings.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("unsupported questionnaire version: {0}")]
    UnsupportedVersion(String),
    #[error("malformed submission: {0}")]
    MalformedSubmission(String),
    #[error("{scores} scores cannot be reported with a {result} type result")]
    VersionMismatch {
        scores: BankVersion,
        result: BankVersion,
    },
}
