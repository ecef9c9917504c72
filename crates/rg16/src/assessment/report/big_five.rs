use serde::Serialize;

use super::templates::{aspect_read, trait_read};
use super::{Band, ReportSection, HIGH_BAND_MIN};
use crate::assessment::bank::{Aspect, Trait};
use crate::assessment::classify::BinaryTypeResult;
use crate::assessment::domain::{CategoryScore, QualityIndex, NEUTRAL_SCORE};

/// Agreeableness below this shifts the growth advice to assertiveness.
const LOW_AGREEABLENESS_BELOW: u8 = 45;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitRead {
    #[serde(rename = "trait")]
    pub trait_id: Trait,
    pub score: u8,
    pub band: Band,
    pub title: String,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AspectRead {
    pub aspect: Aspect,
    pub parent: Trait,
    pub score: u8,
    pub band: Band,
    pub title: String,
    pub hint: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BigFiveReport {
    pub headline: String,
    pub summary: &'static str,
    /// Letters plus the A/T suffix, e.g. `INTJ-T`.
    pub type_label: String,
    pub traits: Vec<TraitRead>,
    pub aspects: Vec<AspectRead>,
    pub sections: Vec<ReportSection>,
    pub notes: Vec<String>,
}

const SUMMARY: &str = "This result is not a stamp but a projection of you onto continuous dimensions. Use it as shared vocabulary: to describe preferences faster, anticipate friction points, and choose recovery habits that fit.";

fn score_of<C: Copy + PartialEq>(scores: &[CategoryScore<C>], wanted: C) -> u8 {
    scores
        .iter()
        .find(|score| score.category == wanted)
        .map_or(NEUTRAL_SCORE, |score| score.normalized)
}

fn pick(condition: bool, when: &str, otherwise: &str) -> String {
    let line = if condition { when } else { otherwise };
    line.to_string()
}

fn sections(traits: &[CategoryScore<Trait>]) -> Vec<ReportSection> {
    let high = |trait_id: Trait| score_of(traits, trait_id) >= HIGH_BAND_MIN;
    let extraverted = high(Trait::Extraversion);
    let agreeable = high(Trait::Agreeableness);
    let conscientious = high(Trait::Conscientiousness);

    vec![
        ReportSection {
            title: "Communication & collaboration".to_string(),
            bullets: vec![
                pick(
                    extraverted,
                    "You move collaboration forward by talking it through; aligning out loud in meetings works well for you.",
                    "You do best drafting in your head first and then sharing a short conclusion, so live discussion does not drain you.",
                ),
                pick(
                    agreeable,
                    "Check how the other person feels before proposing a plan and you will be more persuasive.",
                    "Write standards and boundaries down clearly; you will be more comfortable and more effective.",
                ),
                pick(
                    conscientious,
                    "You naturally carry process and cadence, but avoid pulling everyone into your own standard.",
                    "Give yourself a minimum viable process instead of relying on willpower alone.",
                ),
            ],
        },
        ReportSection {
            title: "Stress & recovery".to_string(),
            bullets: vec![
                pick(
                    high(Trait::Neuroticism),
                    "Under pressure you tend to spiral inward; externalise worries by writing them down and splitting them into steps.",
                    "You are relatively steady, but take regular emotional stock so you don't just numbly push through.",
                ),
                pick(
                    extraverted,
                    "You recover best through good company or physical activity.",
                    "You recover best through solitude, walks and low-stimulation settings.",
                ),
                pick(
                    conscientious,
                    "Disrupted plans may make you restless; building in buffer time helps a lot.",
                    "Piled-up tasks may make you anxious; cutting work into 15-minute blocks helps.",
                ),
            ],
        },
        ReportSection {
            title: "Growth strategy".to_string(),
            bullets: vec![
                pick(
                    high(Trait::Openness),
                    "Turn exploration into output: reserve one fixed weekly slot to capture what you learned.",
                    "Make change predictable: start with one small habit so new things become familiar.",
                ),
                pick(
                    score_of(traits, Trait::Agreeableness) < LOW_AGREEABLENESS_BELOW,
                    "Practise being gentle but firm: state your position, then give the other side a way out.",
                    "Practise being clear without taking responsibility for others: empathise while keeping your boundaries.",
                ),
                "Treat your least certain dimension as a variable: when you feel like two types, look at which situations tip that axis.".to_string(),
            ],
        },
    ]
}

/// Builds the narrative for a five-trait result.
pub fn build_big_five_report(
    traits: &[CategoryScore<Trait>],
    aspects: &[CategoryScore<Aspect>],
    result: &BinaryTypeResult,
    quality: &QualityIndex,
) -> BigFiveReport {
    let trait_reads = Trait::ordered()
        .into_iter()
        .map(|trait_id| {
            let score = score_of(traits, trait_id);
            let band = Band::of(score);
            TraitRead {
                trait_id,
                score,
                band,
                title: format!("{} · {}", trait_id.label(), band.label()),
                text: trait_read(trait_id, band),
            }
        })
        .collect();

    let aspect_reads = Aspect::ordered()
        .into_iter()
        .map(|aspect| {
            let score = score_of(aspects, aspect);
            let band = Band::of(score);
            AspectRead {
                aspect,
                parent: aspect.parent(),
                score,
                band,
                title: format!("{} · {}", aspect.label(), band.label()),
                hint: aspect.hint(),
                text: aspect_read(band),
            }
        })
        .collect();

    let mut notes = quality.warnings.clone();
    notes.push(
        "The -A/-T suffix is derived from Neuroticism (emotional sensitivity) and is not part of the classic four-letter model."
            .to_string(),
    );
    notes.push(
        "Type clarity (high / medium / borderline) is set by the least certain of the four dimensions."
            .to_string(),
    );

    BigFiveReport {
        headline: format!("Your type is {}", result.letters),
        summary: SUMMARY,
        type_label: format!("{}-{}", result.letters, result.suffix.tag.letter()),
        traits: trait_reads,
        aspects: aspect_reads,
        sections: sections(traits),
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::classify::classify_dimensions;

    fn trait_scores(values: [u8; 5]) -> Vec<CategoryScore<Trait>> {
        Trait::ordered()
            .into_iter()
            .zip(values)
            .map(|(category, normalized)| CategoryScore {
                category,
                raw: 0.0,
                max_attainable: 0.0,
                normalized,
            })
            .collect()
    }

    fn quality(warnings: Vec<String>) -> QualityIndex {
        QualityIndex {
            answered: 60,
            total: 60,
            completion_ratio: 1.0,
            dispersion: 1.2,
            position_bias_share: None,
            longest_repeat_run: 2,
            avg_response_time_ms: None,
            index: 90,
            warnings,
        }
    }

    #[test]
    fn reads_cover_every_trait_and_aspect() {
        let traits = trait_scores([70, 30, 50, 65, 20]);
        let result = classify_dimensions(&traits);
        let report = build_big_five_report(&traits, &[], &result, &quality(Vec::new()));

        assert_eq!(report.traits.len(), 5);
        assert_eq!(report.aspects.len(), 10);
        assert_eq!(report.traits[0].band, Band::High);
        assert_eq!(report.traits[0].title, "Openness · higher");
        assert_eq!(report.traits[1].band, Band::Low);
        // Missing aspect scores read as neutral.
        assert!(report.aspects.iter().all(|read| read.band == Band::Mid));
        assert_eq!(report.headline, format!("Your type is {}", result.letters));
    }

    #[test]
    fn sections_follow_trait_thresholds() {
        let traits = trait_scores([40, 80, 80, 30, 75]);
        let result = classify_dimensions(&traits);
        let report = build_big_five_report(&traits, &[], &result, &quality(Vec::new()));

        let titles: Vec<_> = report.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Communication & collaboration", "Stress & recovery", "Growth strategy"]
        );
        assert!(report.sections[0].bullets[0].contains("talking it through"));
        assert!(report.sections[1].bullets[0].contains("spiral inward"));
        assert!(report.sections[2].bullets[1].contains("gentle but firm"));
        assert!(report.sections.iter().all(|s| s.bullets.len() == 3));
    }

    #[test]
    fn warnings_lead_the_notes() {
        let traits = trait_scores([50; 5]);
        let result = classify_dimensions(&traits);
        let report = build_big_five_report(
            &traits,
            &[],
            &result,
            &quality(vec!["Some questions were left unanswered.".to_string()]),
        );
        assert_eq!(report.notes.len(), 3);
        assert_eq!(report.notes[0], "Some questions were left unanswered.");
    }
}
