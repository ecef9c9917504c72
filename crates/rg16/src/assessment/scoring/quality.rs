use super::ItemResponse;
use crate::assessment::bank::{Category, Response};
use crate::assessment::domain::QualityIndex;

/// Relative weight of each reliability component in the final index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityWeights {
    pub completion: f64,
    pub variance: f64,
    pub choice_bias: f64,
    pub straight_line: f64,
    pub speed: f64,
}

/// Which ordered sequence straight-lining is measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatBasis {
    /// Every calibration value in bank order, missing as the midpoint.
    CalibrationValues,
    /// Option positions of answered choice items, in bank order.
    ChoicePositions,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionBiasRule {
    /// `clamp(1 - share) / normalizer` feeds the choice-bias component.
    pub normalizer: f64,
    pub warning_share: f64,
    pub warning_min_choices: usize,
}

/// Published constants for one bank version. Never edited once released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityRules {
    pub weights: QualityWeights,
    pub variance_divisor: f64,
    pub speed_floor_ms: f64,
    pub speed_ceiling_ms: f64,
    pub repeat_basis: RepeatBasis,
    pub position_bias: Option<PositionBiasRule>,
    pub low_dispersion_below: f64,
    pub repeat_warning_share: f64,
    pub repeat_warning_min_len: usize,
    pub fast_response_below_ms: f64,
}

pub const BIG_FIVE_QUALITY: QualityRules = QualityRules {
    weights: QualityWeights {
        completion: 0.35,
        variance: 0.25,
        choice_bias: 0.0,
        straight_line: 0.20,
        speed: 0.20,
    },
    variance_divisor: 1.2,
    speed_floor_ms: 400.0,
    speed_ceiling_ms: 1200.0,
    repeat_basis: RepeatBasis::CalibrationValues,
    position_bias: None,
    low_dispersion_below: 0.55,
    repeat_warning_share: 0.55,
    repeat_warning_min_len: 0,
    fast_response_below_ms: 450.0,
};

pub const JUNG_QUALITY: QualityRules = QualityRules {
    weights: QualityWeights {
        completion: 0.38,
        variance: 0.18,
        choice_bias: 0.18,
        straight_line: 0.14,
        speed: 0.12,
    },
    variance_divisor: 1.2,
    speed_floor_ms: 500.0,
    speed_ceiling_ms: 1400.0,
    repeat_basis: RepeatBasis::ChoicePositions,
    position_bias: Some(PositionBiasRule {
        normalizer: 0.6,
        warning_share: 0.72,
        warning_min_choices: 10,
    }),
    low_dispersion_below: 0.6,
    repeat_warning_share: 0.5,
    repeat_warning_min_len: 12,
    fast_response_below_ms: 520.0,
};

pub const INCOMPLETE_WARNING: &str =
    "Not every question was answered; the result is less reliable.";
pub const LOW_DISPERSION_WARNING: &str =
    "Agreement ratings are very uniform; answer as you really are rather than as you think you should.";
pub const POSITION_BIAS_WARNING: &str =
    "Choices lean heavily towards one option position (A/B/C/D); some answers may have been clicked through.";
pub const REPEAT_RUN_WARNING: &str =
    "Many consecutive answers in the same position; slow down and answer from genuine preference.";
pub const FAST_RESPONSE_WARNING: &str =
    "Answers came in very quickly; slowing down improves stability.";

pub(crate) fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Population standard deviation; 0 for fewer than two values.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Length of the longest run of equal adjacent elements; 0 when empty.
pub fn longest_repeat_run<T: PartialEq>(sequence: &[T]) -> usize {
    let mut longest = 0;
    let mut run = 0;
    for (idx, value) in sequence.iter().enumerate() {
        run = if idx > 0 && sequence[idx - 1] == *value {
            run + 1
        } else {
            1
        };
        longest = longest.max(run);
    }
    longest
}

/// Largest share of any single option position; 1.0 when no choices were made.
pub fn max_position_share(positions: &[usize]) -> f64 {
    if positions.is_empty() {
        return 1.0;
    }
    let mut counts = std::collections::BTreeMap::<usize, usize>::new();
    for position in positions {
        *counts.entry(*position).or_default() += 1;
    }
    let top = counts.values().copied().max().unwrap_or(0);
    top as f64 / positions.len() as f64
}

fn speed_score(avg_ms: Option<f64>, floor: f64, ceiling: f64) -> f64 {
    match avg_ms {
        None => 1.0,
        Some(avg) if avg <= floor => 0.0,
        Some(avg) if avg >= ceiling => 1.0,
        Some(avg) => (avg - floor) / (ceiling - floor),
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Derives the reliability index for a set of resolved responses. Never fails:
/// every anomaly becomes a warning.
pub fn assess<C: Category>(
    responses: &[ItemResponse<C>],
    duration_ms: Option<u64>,
    rules: &QualityRules,
) -> QualityIndex {
    let total = responses.len();
    let answered = responses
        .iter()
        .filter(|item| item.response.is_answered())
        .count();
    let malformed = responses
        .iter()
        .filter(|item| item.response == Response::Malformed)
        .count();

    let completion = if total == 0 {
        0.0
    } else {
        answered as f64 / total as f64
    };

    let calibration: Vec<u8> = responses
        .iter()
        .filter_map(ItemResponse::calibration_value)
        .collect();
    let dispersion = population_std_dev(
        &calibration
            .iter()
            .map(|value| f64::from(*value))
            .collect::<Vec<_>>(),
    );

    let positions: Vec<usize> = responses
        .iter()
        .filter_map(ItemResponse::choice_position)
        .collect();

    let (repeat_run, repeat_len) = match rules.repeat_basis {
        RepeatBasis::CalibrationValues => (longest_repeat_run(&calibration), calibration.len()),
        RepeatBasis::ChoicePositions => (longest_repeat_run(&positions), positions.len()),
    };

    let avg_ms = match duration_ms {
        Some(duration) if total > 0 => Some(duration as f64 / total as f64),
        _ => None,
    };

    let position_share = rules
        .position_bias
        .map(|_| max_position_share(&positions));

    let weights = rules.weights;
    let variance_score = clamp01(dispersion / rules.variance_divisor);
    let choice_bias_score = match (rules.position_bias, position_share) {
        (Some(rule), Some(share)) => clamp01(1.0 - share) / rule.normalizer,
        _ => 0.0,
    };
    let straight_line_score = if repeat_len == 0 {
        1.0
    } else {
        clamp01(1.0 - repeat_run as f64 / repeat_len as f64)
    };
    let speed = speed_score(avg_ms, rules.speed_floor_ms, rules.speed_ceiling_ms);

    let weighted = weights.completion * clamp01(completion)
        + weights.variance * variance_score
        + weights.choice_bias * choice_bias_score
        + weights.straight_line * straight_line_score
        + weights.speed * speed;
    let index = (100.0 * weighted).round().clamp(0.0, 100.0) as u8;

    let mut warnings = Vec::new();
    if completion < 1.0 {
        warnings.push(INCOMPLETE_WARNING.to_string());
    }
    if dispersion < rules.low_dispersion_below {
        warnings.push(LOW_DISPERSION_WARNING.to_string());
    }
    if let (Some(rule), Some(share)) = (rules.position_bias, position_share) {
        if positions.len() >= rule.warning_min_choices && share > rule.warning_share {
            warnings.push(POSITION_BIAS_WARNING.to_string());
        }
    }
    let repeat_threshold = (repeat_len as f64 * rules.repeat_warning_share).ceil() as usize;
    if repeat_len > 0
        && repeat_len >= rules.repeat_warning_min_len
        && repeat_run >= repeat_threshold
    {
        warnings.push(REPEAT_RUN_WARNING.to_string());
    }
    if avg_ms.is_some_and(|avg| avg < rules.fast_response_below_ms) {
        warnings.push(FAST_RESPONSE_WARNING.to_string());
    }
    if malformed > 0 {
        warnings.push(format!(
            "{malformed} answer value(s) were outside the item's allowed range and were ignored."
        ));
    }

    QualityIndex {
        answered,
        total,
        completion_ratio: completion,
        dispersion: round_to(dispersion, 2),
        position_bias_share: position_share.map(|share| round_to(share, 3)),
        longest_repeat_run: repeat_run,
        avg_response_time_ms: avg_ms.map(|avg| avg.round() as u64),
        index,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::bank::{big_five, jung, QuestionKind};
    use crate::assessment::domain::{AnswerMap, AnswerValue};
    use crate::assessment::scoring::collect_responses;

    #[test]
    fn repeat_run_handles_edges() {
        assert_eq!(longest_repeat_run::<u8>(&[]), 0);
        assert_eq!(longest_repeat_run(&[1]), 1);
        assert_eq!(longest_repeat_run(&[1, 1, 2, 2, 2, 1]), 3);
    }

    #[test]
    fn std_dev_is_population_form() {
        assert_eq!(population_std_dev(&[3.0]), 0.0);
        assert!((population_std_dev(&[1.0, 5.0]) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn empty_big_five_answers_warn_and_lose_completion() {
        let responses = collect_responses(&big_five::bank(), &AnswerMap::new());
        let quality = assess(&responses, None, &BIG_FIVE_QUALITY);
        assert_eq!(quality.answered, 0);
        assert_eq!(quality.total, 60);
        assert_eq!(quality.completion_ratio, 0.0);
        assert_eq!(quality.dispersion, 0.0);
        assert_eq!(quality.longest_repeat_run, 60);
        assert!(quality.position_bias_share.is_none());
        assert!(quality.warnings.contains(&INCOMPLETE_WARNING.to_string()));
        assert!(quality.warnings.contains(&LOW_DISPERSION_WARNING.to_string()));
        assert!(quality.warnings.contains(&REPEAT_RUN_WARNING.to_string()));
        // Only the speed component survives with no duration.
        assert_eq!(quality.index, 20);
    }

    #[test]
    fn same_position_on_every_choice_is_flagged() {
        let bank = jung::bank();
        let mut answers = AnswerMap::new();
        for question in bank.questions {
            let value = match question.kind() {
                QuestionKind::Calibration => AnswerValue::Ordinal(3),
                QuestionKind::Forced | QuestionKind::Situational => AnswerValue::from("A"),
            };
            answers.insert(question.id.to_string(), value);
        }
        let responses = collect_responses(&bank, &answers);
        let quality = assess(&responses, Some(64 * 900), &JUNG_QUALITY);

        assert_eq!(quality.completion_ratio, 1.0);
        assert_eq!(quality.position_bias_share, Some(1.0));
        assert_eq!(quality.longest_repeat_run, 48);
        assert_eq!(quality.avg_response_time_ms, Some(900));
        assert!(quality.warnings.contains(&POSITION_BIAS_WARNING.to_string()));
        assert!(quality.warnings.contains(&REPEAT_RUN_WARNING.to_string()));
        assert!(quality.warnings.contains(&LOW_DISPERSION_WARNING.to_string()));
        assert!(!quality.warnings.contains(&INCOMPLETE_WARNING.to_string()));
        // .38 completion + 0 variance + 0 bias + 0 straight-line + .12 * 4/9 speed.
        assert_eq!(quality.index, 43);
    }

    #[test]
    fn fast_answers_are_warned() {
        let responses = collect_responses(&big_five::bank(), &AnswerMap::new());
        let quality = assess(&responses, Some(60 * 300), &BIG_FIVE_QUALITY);
        assert_eq!(quality.avg_response_time_ms, Some(300));
        assert!(quality.warnings.contains(&FAST_RESPONSE_WARNING.to_string()));
        assert_eq!(quality.index, 0);
    }

    #[test]
    fn malformed_values_add_a_notice() {
        let mut answers = AnswerMap::new();
        answers.insert("j101".to_string(), AnswerValue::from("Z"));
        let responses = collect_responses(&jung::bank(), &answers);
        let quality = assess(&responses, None, &JUNG_QUALITY);
        assert_eq!(quality.answered, 0);
        assert!(quality
            .warnings
            .iter()
            .any(|warning| warning.contains("were ignored")));
    }
}
