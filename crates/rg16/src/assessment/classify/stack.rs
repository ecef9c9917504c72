use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConfidenceTier;
use crate::assessment::bank::{Category, CognitiveFunction};
use crate::assessment::domain::{CategoryScore, NEUTRAL_SCORE};
use crate::assessment::scoring::quality::{clamp01, round_to};

use CognitiveFunction::{Fe, Fi, Ne, Ni, Se, Si, Te, Ti};

/// Slot weights for dominant, auxiliary, tertiary, inferior.
pub const SLOT_WEIGHTS: [f64; 4] = [0.38, 0.30, 0.20, 0.12];
/// A top-two gap of this many points is full confidence on its own.
pub const FULL_CONFIDENCE_GAP: f64 = 18.0;
pub const GAP_SHARE: f64 = 0.65;
pub const PAIR_CLARITY_SHARE: f64 = 0.35;
pub const ALTERNATE_COUNT: usize = 3;

/// The closed 16-type taxonomy, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JungType {
    Istj,
    Isfj,
    Infj,
    Intj,
    Istp,
    Isfp,
    Infp,
    Intp,
    Estp,
    Esfp,
    Enfp,
    Entp,
    Estj,
    Esfj,
    Enfj,
    Entj,
}

/// Ordered four-slot signature of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionStack {
    pub dominant: CognitiveFunction,
    pub auxiliary: CognitiveFunction,
    pub tertiary: CognitiveFunction,
    pub inferior: CognitiveFunction,
}

impl FunctionStack {
    const fn new(
        dominant: CognitiveFunction,
        auxiliary: CognitiveFunction,
        tertiary: CognitiveFunction,
        inferior: CognitiveFunction,
    ) -> Self {
        Self {
            dominant,
            auxiliary,
            tertiary,
            inferior,
        }
    }

    pub const fn slots(&self) -> [CognitiveFunction; 4] {
        [self.dominant, self.auxiliary, self.tertiary, self.inferior]
    }

    pub fn contains(&self, function: CognitiveFunction) -> bool {
        self.slots().contains(&function)
    }
}

impl fmt::Display for FunctionStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {} → {} → {}",
            self.dominant.code(),
            self.auxiliary.code(),
            self.tertiary.code(),
            self.inferior.code()
        )
    }
}

impl JungType {
    pub const fn ordered() -> [Self; 16] {
        [
            Self::Istj,
            Self::Isfj,
            Self::Infj,
            Self::Intj,
            Self::Istp,
            Self::Isfp,
            Self::Infp,
            Self::Intp,
            Self::Estp,
            Self::Esfp,
            Self::Enfp,
            Self::Entp,
            Self::Estj,
            Self::Esfj,
            Self::Enfj,
            Self::Entj,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Istj => "ISTJ",
            Self::Isfj => "ISFJ",
            Self::Infj => "INFJ",
            Self::Intj => "INTJ",
            Self::Istp => "ISTP",
            Self::Isfp => "ISFP",
            Self::Infp => "INFP",
            Self::Intp => "INTP",
            Self::Estp => "ESTP",
            Self::Esfp => "ESFP",
            Self::Enfp => "ENFP",
            Self::Entp => "ENTP",
            Self::Estj => "ESTJ",
            Self::Esfj => "ESFJ",
            Self::Enfj => "ENFJ",
            Self::Entj => "ENTJ",
        }
    }

    pub const fn stack(self) -> FunctionStack {
        match self {
            Self::Istj => FunctionStack::new(Si, Te, Fi, Ne),
            Self::Isfj => FunctionStack::new(Si, Fe, Ti, Ne),
            Self::Infj => FunctionStack::new(Ni, Fe, Ti, Se),
            Self::Intj => FunctionStack::new(Ni, Te, Fi, Se),
            Self::Istp => FunctionStack::new(Ti, Se, Ni, Fe),
            Self::Isfp => FunctionStack::new(Fi, Se, Ni, Te),
            Self::Infp => FunctionStack::new(Fi, Ne, Si, Te),
            Self::Intp => FunctionStack::new(Ti, Ne, Si, Fe),
            Self::Estp => FunctionStack::new(Se, Ti, Fe, Ni),
            Self::Esfp => FunctionStack::new(Se, Fi, Te, Ni),
            Self::Enfp => FunctionStack::new(Ne, Fi, Te, Si),
            Self::Entp => FunctionStack::new(Ne, Ti, Fe, Si),
            Self::Estj => FunctionStack::new(Te, Si, Ne, Fi),
            Self::Esfj => FunctionStack::new(Fe, Si, Ne, Ti),
            Self::Enfj => FunctionStack::new(Fe, Ni, Se, Ti),
            Self::Entj => FunctionStack::new(Te, Ni, Se, Fi),
        }
    }
}

impl fmt::Display for JungType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for JungType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|type_id| type_id.code().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| format!("unknown type code: {raw}"))
    }
}

/// Normalized score per function, indexed in canonical function order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionProfile([u8; 8]);

impl FunctionProfile {
    /// Functions absent from `scores` read as neutral.
    pub fn from_scores(scores: &[CategoryScore<CognitiveFunction>]) -> Self {
        let mut values = [NEUTRAL_SCORE; 8];
        for score in scores {
            values[score.category.position()] = score.normalized;
        }
        Self(values)
    }

    pub fn get(&self, function: CognitiveFunction) -> u8 {
        self.0[function.position()]
    }

    /// Absolute score difference between a function and its opposite.
    pub fn pair_difference(&self, pair: (CognitiveFunction, CognitiveFunction)) -> u8 {
        self.get(pair.0).abs_diff(self.get(pair.1))
    }

    /// Smallest opposite-pair difference as a fraction of the scale.
    pub fn pair_clarity(&self) -> f64 {
        CognitiveFunction::opposite_pairs()
            .into_iter()
            .map(|pair| self.pair_difference(pair))
            .min()
            .map_or(0.0, |diff| f64::from(diff) / 100.0)
    }

    /// Opposite pair with the smallest difference; ties keep reporting order.
    pub fn weakest_pair(&self) -> (CognitiveFunction, CognitiveFunction) {
        let pairs = CognitiveFunction::opposite_pairs();
        let mut weakest = pairs[0];
        for pair in pairs.into_iter().skip(1) {
            if self.pair_difference(pair) < self.pair_difference(weakest) {
                weakest = pair;
            }
        }
        weakest
    }

    /// Functions ordered by score, highest first; ties keep canonical order.
    pub fn ranked(&self) -> Vec<CognitiveFunction> {
        let mut functions = CognitiveFunction::ordered().to_vec();
        functions.sort_by(|a, b| self.get(*b).cmp(&self.get(*a)));
        functions
    }

    pub fn match_score(&self, stack: &FunctionStack) -> f64 {
        let weighted: f64 = stack
            .slots()
            .iter()
            .zip(SLOT_WEIGHTS)
            .map(|(function, weight)| weight * f64::from(self.get(*function)))
            .sum();
        round_to(weighted, 2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeMatch {
    #[serde(rename = "type")]
    pub type_id: JungType,
    pub score: f64,
    pub stack: FunctionStack,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackDiagnostics {
    pub gap: f64,
    pub pair_clarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackTypeResult {
    pub selected: JungType,
    pub stack: FunctionStack,
    pub match_score: f64,
    pub confidence: f64,
    pub tier: ConfidenceTier,
    /// Best three matches, the selection included.
    pub alternates: Vec<TypeMatch>,
    pub diagnostics: StackDiagnostics,
}

/// Ranks all 16 stacks against the function profile and derives confidence
/// from the top-two gap and the weakest opposite pair.
pub fn classify_stack(profile: &FunctionProfile) -> StackTypeResult {
    let mut matches: Vec<TypeMatch> = JungType::ordered()
        .into_iter()
        .map(|type_id| {
            let stack = type_id.stack();
            TypeMatch {
                type_id,
                score: profile.match_score(&stack),
                stack,
            }
        })
        .collect();
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));

    let best = matches[0];
    let second = matches.get(1).copied().unwrap_or(best);
    let gap = (best.score - second.score).max(0.0);
    let gap_confidence = clamp01(gap / FULL_CONFIDENCE_GAP);
    let pair_clarity = profile.pair_clarity();
    let confidence = round_to(
        clamp01(GAP_SHARE * gap_confidence + PAIR_CLARITY_SHARE * pair_clarity),
        3,
    );

    StackTypeResult {
        selected: best.type_id,
        stack: best.stack,
        match_score: best.score,
        confidence,
        tier: ConfidenceTier::for_stack(confidence),
        alternates: matches.into_iter().take(ALTERNATE_COUNT).collect(),
        diagnostics: StackDiagnostics {
            gap: round_to(gap, 2),
            pair_clarity: round_to(pair_clarity, 3),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn type_codes_parse_case_insensitively() {
        assert_eq!("intj".parse::<JungType>(), Ok(JungType::Intj));
        assert_eq!(" ESFP ".parse::<JungType>(), Ok(JungType::Esfp));
        assert!("INTX".parse::<JungType>().is_err());
    }

    fn profile(values: [(CognitiveFunction, u8); 8]) -> FunctionProfile {
        let scores: Vec<_> = values
            .into_iter()
            .map(|(function, normalized)| CategoryScore {
                category: function,
                raw: 0.0,
                max_attainable: 0.0,
                normalized,
            })
            .collect();
        FunctionProfile::from_scores(&scores)
    }

    #[test]
    fn taxonomy_signatures_are_unique_and_balanced() {
        let signatures: HashSet<_> = JungType::ordered().iter().map(|t| t.stack()).collect();
        assert_eq!(signatures.len(), 16);
        for function in CognitiveFunction::ordered() {
            let dominant = JungType::ordered()
                .iter()
                .filter(|t| t.stack().dominant == function)
                .count();
            assert_eq!(dominant, 2, "{function:?}");
        }
    }

    #[test]
    fn uniform_profile_is_low_confidence_and_keeps_taxonomy_order() {
        let result = classify_stack(&FunctionProfile::from_scores(&[]));
        assert_eq!(result.selected, JungType::Istj);
        assert_eq!(result.match_score, 50.0);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.tier, ConfidenceTier::Low);
        let alternates: Vec<_> = result.alternates.iter().map(|m| m.type_id).collect();
        assert_eq!(alternates, vec![JungType::Istj, JungType::Isfj, JungType::Infj]);
        assert_eq!(result.diagnostics.pair_clarity, 0.0);
    }

    #[test]
    fn clear_ni_te_profile_selects_intj() {
        let profile = profile([
            (Se, 10),
            (Si, 40),
            (Ne, 20),
            (Ni, 95),
            (Te, 85),
            (Ti, 30),
            (Fe, 25),
            (Fi, 60),
        ]);
        let result = classify_stack(&profile);
        assert_eq!(result.selected, JungType::Intj);
        assert_eq!(result.stack.dominant, Ni);
        // .38*95 + .30*85 + .20*60 + .12*10
        assert_eq!(result.match_score, 74.8);
        assert_eq!(result.alternates[0].type_id, JungType::Intj);
        assert_eq!(result.diagnostics.pair_clarity, 0.3);
        assert!(result.confidence > 0.0 && result.confidence <= 1.0);
    }

    #[test]
    fn weakest_pair_breaks_ties_in_reporting_order() {
        let profile = profile([
            (Se, 50),
            (Si, 60),
            (Ne, 20),
            (Ni, 80),
            (Te, 70),
            (Ti, 60),
            (Fe, 10),
            (Fi, 90),
        ]);
        assert_eq!(profile.weakest_pair(), (Se, Si));
        assert_eq!(profile.pair_clarity(), 0.1);
        assert_eq!(profile.ranked()[0], Fi);
    }
}
