use serde::Serialize;

use super::evidence::{collect_evidence, EvidenceCaps, EvidenceCitation};
use super::templates::function_lines;
use super::Band;
use crate::assessment::bank::{jung, Category, CognitiveFunction};
use crate::assessment::baseline::{BaselinePlacement, DEFAULT_BASELINE};
use crate::assessment::classify::{
    compatibility_profile, CompatibilityProfile, ConfidenceTier, FunctionProfile, StackTypeResult,
};
use crate::assessment::domain::{AnswerMap, CategoryScore, QualityIndex};

const SUMMARY: &str = "We first measure how much you rely on each of the eight cognitive functions (Se/Si/Ne/Ni/Te/Ti/Fe/Fi), then infer your type by matching function stacks. Each function below is grounded in everyday situations and backed by the choices you made on key questions.";

const METHOD_NOTES: [&str; 4] = [
    "A function here describes a preferred path, not a level of ability.",
    "The stack is inferred from the classic four-slot model; answering conditions and item coverage affect it.",
    "The level reflects how stable and consistent this result is across situations, not how good a person you are.",
    "Use the result as vocabulary for explaining conflicts and recovery, not as a fixed label.",
];

/// Where the result stands today and how to make it more stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelCard {
    pub current: &'static str,
    pub target: &'static str,
    pub diagnosis: Vec<String>,
    pub upgrade_plan: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSection {
    pub function: CognitiveFunction,
    pub name: &'static str,
    pub score: u8,
    pub band: Band,
    pub tagline: &'static str,
    pub title: String,
    pub reality: &'static [&'static str],
    pub blind_spots: &'static [&'static str],
    pub evidence: Vec<EvidenceCitation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JungReport {
    pub headline: String,
    pub summary: &'static str,
    pub stack_line: String,
    pub dom_aux_line: String,
    /// Stack tier, with borderline folded into low.
    pub level: ConfidenceTier,
    pub level_card: LevelCard,
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
    pub functions: Vec<FunctionSection>,
    pub notes: Vec<String>,
    pub compatibility: CompatibilityProfile,
    pub baseline: Option<BaselinePlacement>,
}

fn function_label(function: CognitiveFunction) -> String {
    format!("{} ({})", function.code(), function.label())
}

fn percent(fraction: f64) -> i64 {
    (fraction * 100.0).round() as i64
}

fn level_of(tier: ConfidenceTier) -> ConfidenceTier {
    match tier {
        ConfidenceTier::Borderline => ConfidenceTier::Low,
        other => other,
    }
}

fn level_card(
    level: ConfidenceTier,
    profile: &FunctionProfile,
    result: &StackTypeResult,
    quality: &QualityIndex,
) -> LevelCard {
    let (weak_a, weak_b) = profile.weakest_pair();
    let weak_diff = profile.pair_difference((weak_a, weak_b));
    let stack = result.stack;

    let quality_line = match quality.warnings.first() {
        Some(warning) => format!("Answer quality {}/100; note: {warning}", quality.index),
        None => format!(
            "Answer quality {}/100; the result looks stable.",
            quality.index
        ),
    };
    let diagnosis = vec![
        format!(
            "Current level: {} (confidence {}%, type gap {}, pair clarity {}%).",
            level.label(),
            percent(result.confidence),
            result.diagnostics.gap,
            percent(result.diagnostics.pair_clarity)
        ),
        format!(
            "The hardest pair to tell apart is {}/{} ({weak_diff} points apart); it is the distinction to watch when moving up a level.",
            weak_a.code(),
            weak_b.code()
        ),
        quality_line,
    ];

    match level {
        ConfidenceTier::High => LevelCard {
            current: "High (stable stage)",
            target: "Goal: hold the high level and widen how far it transfers.",
            diagnosis,
            upgrade_plan: vec![
                format!(
                    "While leaning on your dominant and auxiliary strengths, keep developing less-used functions, especially steady expression of {} under stress.",
                    stack.inferior.code()
                ),
                format!(
                    "Keep training the weakest pair {}/{} so complex situations don't collapse you onto a single path.",
                    weak_a.code(),
                    weak_b.code()
                ),
                "Turn what works into reusable templates: review sheets, conversation scripts, decision checklists.".to_string(),
            ],
        },
        ConfidenceTier::Medium => LevelCard {
            current: "Medium (formative stage)",
            target: "Goal: move from medium to high by strengthening consistency across situations.",
            diagnosis,
            upgrade_plan: vec![
                format!(
                    "At least twice a week, deliberately use your tertiary function {} on a familiar task to widen your range.",
                    stack.tertiary.code()
                ),
                format!(
                    "Prepare a stress plan for your inferior function {}: when you feel impulsive or frozen, run a fixed three-step calm-down routine.",
                    stack.inferior.code()
                ),
                "Each month, review work, relationships and time alone to check the same stack shows up in all three.".to_string(),
            ],
        },
        ConfidenceTier::Low | ConfidenceTier::Borderline => LevelCard {
            current: "Low (starting stage)",
            target: "Goal: move from low to medium by first improving stability and function separation.",
            diagnosis,
            upgrade_plan: vec![
                format!(
                    "Keep a decision log for 14 days: record one key decision a day and note which path you used (for example {}/{}).",
                    stack.dominant.code(),
                    stack.auxiliary.code()
                ),
                format!(
                    "Run A/B practice on {}/{}: solve the same problem both ways and compare which feels more natural and works better.",
                    weak_a.code(),
                    weak_b.code()
                ),
                "Retake the assessment in two weeks under the same conditions (time, state, pace) to reduce noise.".to_string(),
            ],
        },
    }
}

/// Builds the narrative for an eight-function result.
pub fn build_jung_report(
    functions: &[CategoryScore<CognitiveFunction>],
    result: &StackTypeResult,
    quality: &QualityIndex,
    answers: &AnswerMap,
) -> JungReport {
    let bank = jung::bank();
    let profile = FunctionProfile::from_scores(functions);
    let stack = result.stack;
    let level = level_of(result.tier);
    let caps = EvidenceCaps::default();

    let ranked = profile.ranked();
    let top: Vec<String> = ranked.iter().take(2).map(|f| function_label(*f)).collect();
    let bottom: Vec<String> = ranked
        .iter()
        .skip(ranked.len().saturating_sub(2))
        .map(|f| function_label(*f))
        .collect();

    let strengths = vec![
        format!("Your strengths concentrate in {}.", top.join(" + ")),
        format!("Your function stack is {stack} (classic four-slot stack)."),
        format!(
            "Your most natural way to take in the world and decide is likely {} + {}.",
            function_label(stack.dominant),
            function_label(stack.auxiliary)
        ),
    ];
    let risks = vec![
        format!("Your less-used areas are most likely {}.", bottom.join(", ")),
        format!(
            "Under heavy stress you may overcompensate through {} (impulsiveness, avoidance, overstimulation or over-control).",
            function_label(stack.inferior)
        ),
    ];

    let sections = ranked
        .iter()
        .map(|function| {
            let function = *function;
            let score = profile.get(function);
            let band = Band::of(score);
            let lines = function_lines(function, band);
            FunctionSection {
                function,
                name: function.label(),
                score,
                band,
                tagline: function.tagline(),
                title: format!("{} · {} ({score}/100)", function_label(function), band.label()),
                reality: lines.reality,
                blind_spots: lines.blind_spots,
                evidence: collect_evidence(
                    &bank,
                    answers,
                    function,
                    caps.for_function(function, &stack),
                ),
            }
        })
        .collect();

    let mut notes = quality.warnings.clone();
    notes.extend(METHOD_NOTES.iter().map(|note| note.to_string()));

    JungReport {
        headline: format!("Your type is {}", result.selected),
        summary: SUMMARY,
        stack_line: format!("Function stack: {stack}"),
        dom_aux_line: format!(
            "Dominant / auxiliary: {} + {} (confidence {}% / {})",
            function_label(stack.dominant),
            function_label(stack.auxiliary),
            percent(result.confidence),
            level.label()
        ),
        level,
        level_card: level_card(level, &profile, result, quality),
        strengths,
        risks,
        functions: sections,
        notes,
        compatibility: compatibility_profile(result.selected),
        baseline: DEFAULT_BASELINE.placement(result.selected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::classify::classify_stack;
    use crate::assessment::classify::JungType;
    use CognitiveFunction::{Fe, Fi, Ne, Ni, Se, Si, Te, Ti};

    fn scores(values: [(CognitiveFunction, u8); 8]) -> Vec<CategoryScore<CognitiveFunction>> {
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

    fn quality() -> QualityIndex {
        QualityIndex {
            answered: 64,
            total: 64,
            completion_ratio: 1.0,
            dispersion: 1.1,
            position_bias_share: Some(0.3),
            longest_repeat_run: 3,
            avg_response_time_ms: Some(2_000),
            index: 92,
            warnings: Vec::new(),
        }
    }

    fn intj_scores() -> Vec<CategoryScore<CognitiveFunction>> {
        scores([
            (Se, 10),
            (Si, 40),
            (Ne, 20),
            (Ni, 95),
            (Te, 85),
            (Ti, 30),
            (Fe, 25),
            (Fi, 60),
        ])
    }

    #[test]
    fn sections_are_sorted_by_score_and_lines_name_the_stack() {
        let functions = intj_scores();
        let result = classify_stack(&FunctionProfile::from_scores(&functions));
        let report = build_jung_report(&functions, &result, &quality(), &AnswerMap::new());

        assert_eq!(report.headline, "Your type is INTJ");
        assert_eq!(report.stack_line, "Function stack: Ni → Te → Fi → Se");
        let order: Vec<_> = report.functions.iter().map(|s| s.function).collect();
        assert_eq!(order, vec![Ni, Te, Fi, Si, Ti, Fe, Ne, Se]);
        assert_eq!(report.functions[0].band, Band::High);
        assert_eq!(report.functions[7].band, Band::Low);
        assert!(report.strengths[0].contains("Ni (Introverted Intuition) + Te"));
        assert!(report.risks[0].contains("Ne (Extraverted Intuition), Se"));
        assert_eq!(report.notes.len(), METHOD_NOTES.len());
    }

    #[test]
    fn level_card_reports_weakest_pair_and_tier_plan() {
        let functions = intj_scores();
        let result = classify_stack(&FunctionProfile::from_scores(&functions));
        let report = build_jung_report(&functions, &result, &quality(), &AnswerMap::new());

        // Se/Si differ by 30, Ne/Ni 75, Te/Ti 55, Fe/Fi 35.
        assert!(report.level_card.diagnosis[1].contains("Se/Si (30 points apart)"));
        assert!(report.level_card.diagnosis[2].contains("92/100"));
        assert_eq!(report.level_card.upgrade_plan.len(), 3);
        assert_eq!(report.level, level_of(result.tier));
    }

    #[test]
    fn uniform_profile_lands_on_low_level_and_includes_baseline() {
        let result = classify_stack(&FunctionProfile::from_scores(&[]));
        let report = build_jung_report(&[], &result, &quality(), &AnswerMap::new());

        assert_eq!(report.level, ConfidenceTier::Low);
        assert_eq!(report.level_card.current, "Low (starting stage)");
        let baseline = report.baseline.expect("every type has a baseline row");
        assert_eq!(baseline.row.type_id, JungType::Istj);
        assert_eq!(baseline.row.rank, 1);
        assert_eq!(report.compatibility.secure.len(), 2);
    }

    #[test]
    fn evidence_is_attached_per_function() {
        let functions = intj_scores();
        let result = classify_stack(&FunctionProfile::from_scores(&functions));
        let mut answers = AnswerMap::new();
        answers.insert("j101".to_string(), "D".into());
        answers.insert("j102".to_string(), "D".into());
        let report = build_jung_report(&functions, &result, &quality(), &answers);

        let ni = report
            .functions
            .iter()
            .find(|section| section.function == Ni)
            .expect("Ni section");
        assert_eq!(ni.evidence.len(), 2);
        assert!(ni.evidence.iter().all(|citation| citation.function == Ni));
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let functions = intj_scores();
        let result = classify_stack(&FunctionProfile::from_scores(&functions));
        let first = build_jung_report(&functions, &result, &quality(), &AnswerMap::new());
        let second = build_jung_report(&functions, &result, &quality(), &AnswerMap::new());
        assert_eq!(first, second);
    }
}
