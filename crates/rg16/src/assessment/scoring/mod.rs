//! Category aggregation under partial data.

pub mod quality;

use super::bank::{Category, ItemShape, Question, QuestionBank, Response, LIKERT_MIDPOINT};
use super::domain::{AnswerMap, CategoryScore, MalformedAnswer, QualityIndex};

pub use quality::{assess, QualityRules, QualityWeights, BIG_FIVE_QUALITY, JUNG_QUALITY};

/// One bank item paired with how it was answered.
#[derive(Debug, Clone, Copy)]
pub struct ItemResponse<C: 'static> {
    pub question: &'static Question<C>,
    pub response: Response,
}

impl<C: Category> ItemResponse<C> {
    /// Likert value used for scoring; missing and malformed answers fall back
    /// to the neutral midpoint. `None` for choice items.
    pub fn calibration_value(&self) -> Option<u8> {
        match self.question.shape {
            ItemShape::Calibration { .. } => Some(match self.response {
                Response::Ordinal(value) => value,
                _ => LIKERT_MIDPOINT,
            }),
            _ => None,
        }
    }

    /// Position of the chosen option for an answered choice item.
    pub fn choice_position(&self) -> Option<usize> {
        match self.response {
            Response::Choice(position) => Some(position),
            _ => None,
        }
    }
}

/// Resolves every bank item against the answer map, in bank order.
pub fn collect_responses<C: Category>(
    bank: &QuestionBank<C>,
    answers: &AnswerMap,
) -> Vec<ItemResponse<C>> {
    bank.questions
        .iter()
        .map(|question| ItemResponse {
            question,
            response: question.resolve(answers),
        })
        .collect()
}

pub fn malformed_answers<C: Category>(
    responses: &[ItemResponse<C>],
    answers: &AnswerMap,
) -> Vec<MalformedAnswer> {
    responses
        .iter()
        .filter(|item| item.response == Response::Malformed)
        .filter_map(|item| {
            answers.get(item.question.id).map(|value| MalformedAnswer {
                question_id: item.question.id.to_string(),
                value: value.clone(),
            })
        })
        .collect()
}

/// Aggregates responses into one score per category, in `C::ALL` order.
///
/// Calibration items always count: a missing value scores as the midpoint.
/// Choice items add one attainable point to every offered category whether or
/// not they were answered, and one raw point to the chosen category.
pub fn score_responses<C: Category>(responses: &[ItemResponse<C>]) -> Vec<CategoryScore<C>> {
    let mut raw = vec![0.0_f64; C::ALL.len()];
    let mut max = vec![0.0_f64; C::ALL.len()];

    for item in responses {
        match item.question.shape {
            ItemShape::Calibration {
                category,
                reverse_keyed,
            } => {
                let value = item.calibration_value().unwrap_or(LIKERT_MIDPOINT);
                let weight = f64::from(value - 1) / 4.0;
                let slot = category.position();
                raw[slot] += if reverse_keyed { 1.0 - weight } else { weight };
                max[slot] += 1.0;
            }
            ItemShape::Forced(options) | ItemShape::Situational(options) => {
                for option in options {
                    max[option.category.position()] += 1.0;
                }
                if let Some(chosen) = item.choice_position().and_then(|idx| options.get(idx)) {
                    raw[chosen.category.position()] += 1.0;
                }
            }
        }
    }

    C::ALL
        .iter()
        .zip(raw.into_iter().zip(max))
        .map(|(category, (raw, max))| CategoryScore::from_totals(*category, raw, max))
        .collect()
}

/// Scores a bank and assesses answer quality in one pass over the answers.
pub fn score<C: Category>(
    bank: &QuestionBank<C>,
    answers: &AnswerMap,
    duration_ms: Option<u64>,
    rules: &QualityRules,
) -> (Vec<CategoryScore<C>>, QualityIndex) {
    let responses = collect_responses(bank, answers);
    let scores = score_responses(&responses);
    let quality = assess(&responses, duration_ms, rules);
    (scores, quality)
}

/// Rounded mean of already-normalized scores; 50 when empty.
pub fn mean_score(values: &[u8]) -> u8 {
    if values.is_empty() {
        return super::domain::NEUTRAL_SCORE;
    }
    let sum: f64 = values.iter().map(|value| f64::from(*value)).sum();
    (sum / values.len() as f64).round() as u8
}
