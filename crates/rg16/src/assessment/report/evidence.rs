use serde::Serialize;

use crate::assessment::bank::{
    CognitiveFunction, ItemShape, QuestionBank, QuestionKind, Response, LIKERT_SCALE,
};
use crate::assessment::classify::FunctionStack;
use crate::assessment::domain::AnswerMap;
use crate::assessment::scoring::collect_responses;

/// Calibration items at or above this keyed endorsement count as evidence.
pub const ENDORSEMENT_THRESHOLD: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChosenAnswer {
    pub id: String,
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceCitation {
    pub function: CognitiveFunction,
    pub question_id: &'static str,
    pub kind: QuestionKind,
    pub prompt: &'static str,
    pub chosen: ChosenAnswer,
}

/// Citation limits per function section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvidenceCaps {
    pub default: usize,
    /// Limit for the selected type's dominant and auxiliary functions.
    pub lead: usize,
}

impl Default for EvidenceCaps {
    fn default() -> Self {
        Self {
            default: 3,
            lead: 4,
        }
    }
}

impl EvidenceCaps {
    pub fn for_function(&self, function: CognitiveFunction, stack: &FunctionStack) -> usize {
        if function == stack.dominant || function == stack.auxiliary {
            self.lead
        } else {
            self.default
        }
    }
}

/// Answered items that point at `function`, in bank order: choices resolving
/// to it first, then endorsed calibration items, truncated to `cap`.
pub fn collect_evidence(
    bank: &QuestionBank<CognitiveFunction>,
    answers: &AnswerMap,
    function: CognitiveFunction,
    cap: usize,
) -> Vec<EvidenceCitation> {
    let responses = collect_responses(bank, answers);

    let choices = responses.iter().filter_map(|item| {
        let options = item.question.options();
        let chosen = item.choice_position().and_then(|idx| options.get(idx))?;
        (chosen.category == function).then(|| EvidenceCitation {
            function,
            question_id: item.question.id,
            kind: item.question.kind(),
            prompt: item.question.prompt,
            chosen: ChosenAnswer {
                id: chosen.id.to_string(),
                title: chosen.title.to_string(),
                detail: chosen.detail.to_string(),
            },
        })
    });

    let endorsed = responses.iter().filter_map(|item| {
        let ItemShape::Calibration {
            category,
            reverse_keyed,
        } = item.question.shape
        else {
            return None;
        };
        let Response::Ordinal(value) = item.response else {
            return None;
        };
        let keyed = if reverse_keyed { 6 - value } else { value };
        if category != function || keyed < ENDORSEMENT_THRESHOLD {
            return None;
        }
        let title = LIKERT_SCALE
            .iter()
            .find(|(point, _, _)| *point == value)
            .map_or("", |(_, label, _)| *label);
        Some(EvidenceCitation {
            function,
            question_id: item.question.id,
            kind: QuestionKind::Calibration,
            prompt: item.question.prompt,
            chosen: ChosenAnswer {
                id: value.to_string(),
                title: title.to_string(),
                detail: "(calibration item)".to_string(),
            },
        })
    });

    choices.chain(endorsed).take(cap).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::bank::jung;
    use crate::assessment::domain::AnswerValue;

    #[test]
    fn choices_come_before_endorsed_calibration_items() {
        let bank = jung::bank();
        let mut answers = AnswerMap::new();
        // j001 is an Se calibration item; j101 option A is Se.
        answers.insert("j001".to_string(), AnswerValue::Ordinal(5));
        answers.insert("j101".to_string(), AnswerValue::from("A"));

        let evidence = collect_evidence(&bank, &answers, CognitiveFunction::Se, 3);
        assert_eq!(evidence.len(), 2);
        assert_eq!(evidence[0].question_id, "j101");
        assert_eq!(evidence[0].kind, QuestionKind::Situational);
        assert_eq!(evidence[1].question_id, "j001");
        assert_eq!(evidence[1].chosen.id, "5");
        assert_eq!(evidence[1].chosen.title, "Strongly agree");
    }

    #[test]
    fn weak_endorsement_and_other_functions_are_not_cited() {
        let bank = jung::bank();
        let mut answers = AnswerMap::new();
        answers.insert("j001".to_string(), AnswerValue::Ordinal(3));
        answers.insert("j101".to_string(), AnswerValue::from("B"));

        assert!(collect_evidence(&bank, &answers, CognitiveFunction::Se, 3).is_empty());
    }

    #[test]
    fn cap_truncates_citations() {
        let bank = jung::bank();
        let mut answers = AnswerMap::new();
        for id in ["j101", "j102", "j103", "j104", "j105"] {
            answers.insert(id.to_string(), AnswerValue::from("A"));
        }
        let evidence = collect_evidence(&bank, &answers, CognitiveFunction::Se, 2);
        let ids: Vec<_> = evidence.iter().map(|citation| citation.question_id).collect();
        assert_eq!(ids, vec!["j101", "j102"]);
    }

    #[test]
    fn lead_functions_get_the_larger_cap() {
        let caps = EvidenceCaps::default();
        let stack = crate::assessment::classify::JungType::Intj.stack();
        assert_eq!(caps.for_function(CognitiveFunction::Ni, &stack), 4);
        assert_eq!(caps.for_function(CognitiveFunction::Te, &stack), 4);
        assert_eq!(caps.for_function(CognitiveFunction::Fi, &stack), 3);
    }
}
