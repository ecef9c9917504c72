//! Version dispatch over the scoring, classification, and report stages.

use serde::{Deserialize, Serialize};

use super::bank::{big_five, jung, Aspect, CognitiveFunction, Trait};
use super::classify::{
    classify_dimensions, classify_stack, BinaryTypeResult, ConfidenceTier, FunctionProfile,
    StackTypeResult,
};
use super::domain::{
    AnswerMap, AssessmentError, AssessmentMode, BankVersion, CategoryScore, MalformedAnswer,
    QualityIndex,
};
use super::report::{build_big_five_report, build_jung_report, Report};
use super::scoring::{
    assess, collect_responses, malformed_answers, mean_score, score_responses, BIG_FIVE_QUALITY,
    JUNG_QUALITY,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BigFiveScores {
    pub aspects: Vec<CategoryScore<Aspect>>,
    /// Each trait is the rounded mean of its two aspects.
    pub traits: Vec<CategoryScore<Trait>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JungScores {
    pub functions: Vec<CategoryScore<CognitiveFunction>>,
}

/// Category scores tagged with the bank version that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "version")]
pub enum ScorePack {
    #[serde(rename = "v1")]
    BigFive(BigFiveScores),
    #[serde(rename = "v2")]
    Jung(JungScores),
}

impl ScorePack {
    pub const fn version(&self) -> BankVersion {
        match self {
            ScorePack::BigFive(_) => BankVersion::V1,
            ScorePack::Jung(_) => BankVersion::V2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "version")]
pub enum TypeResult {
    #[serde(rename = "v1")]
    Binary(BinaryTypeResult),
    #[serde(rename = "v2")]
    Stack(StackTypeResult),
}

impl TypeResult {
    pub const fn version(&self) -> BankVersion {
        match self {
            TypeResult::Binary(_) => BankVersion::V1,
            TypeResult::Stack(_) => BankVersion::V2,
        }
    }

    /// Display label: four letters with the A/T suffix, or the stack type code.
    pub fn label(&self) -> String {
        match self {
            TypeResult::Binary(result) => {
                format!("{}-{}", result.letters, result.suffix.tag.letter())
            }
            TypeResult::Stack(result) => result.selected.to_string(),
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            TypeResult::Binary(result) => result.confidence,
            TypeResult::Stack(result) => result.confidence,
        }
    }

    pub fn tier(&self) -> ConfidenceTier {
        match self {
            TypeResult::Binary(result) => result.tier,
            TypeResult::Stack(result) => result.tier,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredAssessment {
    pub scores: ScorePack,
    pub quality: QualityIndex,
    pub malformed: Vec<MalformedAnswer>,
}

fn derive_traits(aspects: &[CategoryScore<Aspect>]) -> Vec<CategoryScore<Trait>> {
    Trait::ordered()
        .into_iter()
        .map(|trait_id| {
            let parts: Vec<&CategoryScore<Aspect>> = aspects
                .iter()
                .filter(|score| trait_id.aspects().contains(&score.category))
                .collect();
            let normalized: Vec<u8> = parts.iter().map(|score| score.normalized).collect();
            CategoryScore {
                category: trait_id,
                raw: parts.iter().map(|score| score.raw).sum(),
                max_attainable: parts.iter().map(|score| score.max_attainable).sum(),
                normalized: mean_score(&normalized),
            }
        })
        .collect()
}

/// Scores the bank selected by `version` and assesses answer quality.
pub fn score_categories(
    version: BankVersion,
    answers: &AnswerMap,
    duration_ms: Option<u64>,
) -> ScoredAssessment {
    match version {
        BankVersion::V1 => {
            let responses = collect_responses(&big_five::bank(), answers);
            let aspects = score_responses(&responses);
            ScoredAssessment {
                scores: ScorePack::BigFive(BigFiveScores {
                    traits: derive_traits(&aspects),
                    aspects,
                }),
                quality: assess(&responses, duration_ms, &BIG_FIVE_QUALITY),
                malformed: malformed_answers(&responses, answers),
            }
        }
        BankVersion::V2 => {
            let responses = collect_responses(&jung::bank(), answers);
            ScoredAssessment {
                scores: ScorePack::Jung(JungScores {
                    functions: score_responses(&responses),
                }),
                quality: assess(&responses, duration_ms, &JUNG_QUALITY),
                malformed: malformed_answers(&responses, answers),
            }
        }
    }
}

pub fn classify_type(scores: &ScorePack) -> TypeResult {
    match scores {
        ScorePack::BigFive(pack) => TypeResult::Binary(classify_dimensions(&pack.traits)),
        ScorePack::Jung(pack) => {
            TypeResult::Stack(classify_stack(&FunctionProfile::from_scores(&pack.functions)))
        }
    }
}

/// Composes the narrative report. Scores and type result must come from the
/// same bank version.
pub fn build_report(
    scores: &ScorePack,
    quality: &QualityIndex,
    type_result: &TypeResult,
    answers: &AnswerMap,
) -> Result<Report, AssessmentError> {
    match (scores, type_result) {
        (ScorePack::BigFive(pack), TypeResult::Binary(result)) => Ok(Report::BigFive(
            build_big_five_report(&pack.traits, &pack.aspects, result, quality),
        )),
        (ScorePack::Jung(pack), TypeResult::Stack(result)) => Ok(Report::Jung(Box::new(
            build_jung_report(&pack.functions, result, quality, answers),
        ))),
        _ => Err(AssessmentError::VersionMismatch {
            scores: scores.version(),
            result: type_result.version(),
        }),
    }
}

/// Submission payload as received at the boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentSubmission {
    pub version: String,
    #[serde(default)]
    pub mode: Option<AssessmentMode>,
    #[serde(default, alias = "durationMs")]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub answers: AnswerMap,
}

/// Everything derived from one submission, ready to persist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedAssessment {
    pub version: BankVersion,
    pub mode: AssessmentMode,
    pub duration_ms: Option<u64>,
    pub answers: AnswerMap,
    pub scores: ScorePack,
    pub quality: QualityIndex,
    pub type_result: TypeResult,
    pub malformed: Vec<MalformedAnswer>,
}

impl AssessmentSubmission {
    pub fn from_json(value: serde_json::Value) -> Result<Self, AssessmentError> {
        serde_json::from_value(value)
            .map_err(|err| AssessmentError::MalformedSubmission(err.to_string()))
    }

    /// Resolves the version, then scores and classifies. Only an unknown
    /// version fails; bad answer values surface as quality warnings.
    pub fn compute(self) -> Result<ComputedAssessment, AssessmentError> {
        let version: BankVersion = self.version.parse()?;
        let scored = score_categories(version, &self.answers, self.duration_ms);
        let type_result = classify_type(&scored.scores);

        Ok(ComputedAssessment {
            version,
            mode: self.mode.unwrap_or(version.default_mode()),
            duration_ms: self.duration_ms,
            answers: self.answers,
            scores: scored.scores,
            quality: scored.quality,
            type_result,
            malformed: scored.malformed,
        })
    }
}
