use serde::{Deserialize, Serialize};

use super::ConfidenceTier;
use crate::assessment::bank::Trait;
use crate::assessment::domain::{CategoryScore, NEUTRAL_SCORE};
use crate::assessment::scoring::quality::{clamp01, round_to};

/// Logistic scale for the four letter axes.
pub const AXIS_SCALE: f64 = 8.0;
/// Logistic scale for the A/T suffix.
pub const SUFFIX_SCALE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    #[serde(rename = "EI")]
    ExtraversionIntroversion,
    #[serde(rename = "NS")]
    IntuitionSensing,
    #[serde(rename = "FT")]
    FeelingThinking,
    #[serde(rename = "JP")]
    JudgingPerceiving,
}

impl Axis {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::ExtraversionIntroversion,
            Self::IntuitionSensing,
            Self::FeelingThinking,
            Self::JudgingPerceiving,
        ]
    }

    /// Trait whose score drives the axis.
    pub const fn source(self) -> Trait {
        match self {
            Self::ExtraversionIntroversion => Trait::Extraversion,
            Self::IntuitionSensing => Trait::Openness,
            Self::FeelingThinking => Trait::Agreeableness,
            Self::JudgingPerceiving => Trait::Conscientiousness,
        }
    }

    /// Letter for a low score and a high score.
    pub const fn poles(self) -> (char, char) {
        match self {
            Self::ExtraversionIntroversion => ('I', 'E'),
            Self::IntuitionSensing => ('S', 'N'),
            Self::FeelingThinking => ('T', 'F'),
            Self::JudgingPerceiving => ('P', 'J'),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisReading {
    pub axis: Axis,
    pub left: char,
    pub right: char,
    pub score: u8,
    pub p_right: f64,
    pub confidence: f64,
    pub letter: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuffixTag {
    #[serde(rename = "A")]
    Assertive,
    #[serde(rename = "T")]
    Turbulent,
}

impl SuffixTag {
    pub const fn letter(self) -> char {
        match self {
            Self::Assertive => 'A',
            Self::Turbulent => 'T',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Suffix {
    pub tag: SuffixTag,
    pub p_turbulent: f64,
    pub confidence: f64,
    pub basis: Trait,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryTypeResult {
    pub letters: String,
    pub dimensions: Vec<AxisReading>,
    pub confidence: f64,
    pub tier: ConfidenceTier,
    pub suffix: Suffix,
}

fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn trait_score(traits: &[CategoryScore<Trait>], wanted: Trait) -> u8 {
    traits
        .iter()
        .find(|score| score.category == wanted)
        .map_or(NEUTRAL_SCORE, |score| score.normalized)
}

fn read_axis(axis: Axis, score: u8) -> AxisReading {
    let (left, right) = axis.poles();
    let p_right = logistic((f64::from(score) - 50.0) / AXIS_SCALE);
    AxisReading {
        axis,
        left,
        right,
        score,
        p_right,
        confidence: clamp01((p_right - 0.5).abs() * 2.0),
        letter: if p_right >= 0.5 { right } else { left },
    }
}

/// Reads four independent letters off the trait scores. Overall confidence is
/// the weakest axis; a 50 on any axis makes the whole reading borderline.
pub fn classify_dimensions(traits: &[CategoryScore<Trait>]) -> BinaryTypeResult {
    let dimensions: Vec<AxisReading> = Axis::ordered()
        .into_iter()
        .map(|axis| read_axis(axis, trait_score(traits, axis.source())))
        .collect();

    let letters: String = dimensions.iter().map(|reading| reading.letter).collect();
    let confidence = round_to(
        dimensions
            .iter()
            .map(|reading| reading.confidence)
            .fold(1.0, f64::min),
        3,
    );

    let neuroticism = trait_score(traits, Trait::Neuroticism);
    let p_turbulent = logistic((f64::from(neuroticism) - 50.0) / SUFFIX_SCALE);
    let suffix = Suffix {
        tag: if p_turbulent > 0.5 {
            SuffixTag::Turbulent
        } else {
            SuffixTag::Assertive
        },
        p_turbulent: round_to(p_turbulent, 3),
        confidence: round_to(clamp01((p_turbulent - 0.5).abs() * 2.0), 3),
        basis: Trait::Neuroticism,
    };

    BinaryTypeResult {
        letters,
        dimensions,
        confidence,
        tier: ConfidenceTier::for_dimensions(confidence),
        suffix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traits(values: [(Trait, u8); 5]) -> Vec<CategoryScore<Trait>> {
        values
            .into_iter()
            .map(|(category, normalized)| CategoryScore {
                category,
                raw: 0.0,
                max_attainable: 0.0,
                normalized,
            })
            .collect()
    }

    #[test]
    fn neutral_scores_are_borderline_with_right_poles() {
        let result = classify_dimensions(&[]);
        assert_eq!(result.letters, "ENFJ");
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.tier, ConfidenceTier::Borderline);
        assert_eq!(result.suffix.tag, SuffixTag::Assertive);
    }

    #[test]
    fn extreme_scores_read_with_high_confidence() {
        let result = classify_dimensions(&traits([
            (Trait::Openness, 10),
            (Trait::Conscientiousness, 90),
            (Trait::Extraversion, 5),
            (Trait::Agreeableness, 12),
            (Trait::Neuroticism, 85),
        ]));
        assert_eq!(result.letters, "ISTJ");
        assert_eq!(result.tier, ConfidenceTier::High);
        assert!(result.confidence > 0.9);
        assert_eq!(result.suffix.tag, SuffixTag::Turbulent);
        assert_eq!(result.suffix.basis, Trait::Neuroticism);
    }

    #[test]
    fn weakest_axis_sets_overall_confidence() {
        let result = classify_dimensions(&traits([
            (Trait::Openness, 90),
            (Trait::Conscientiousness, 90),
            (Trait::Extraversion, 90),
            (Trait::Agreeableness, 56),
            (Trait::Neuroticism, 50),
        ]));
        let weakest = result.dimensions[2].confidence;
        assert_eq!(result.confidence, round_to(weakest, 3));
        assert_eq!(result.tier, ConfidenceTier::Borderline);
    }
}
