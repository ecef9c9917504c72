use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use rg16::assessment::bank::{big_five, jung, ChoiceOption, CognitiveFunction, ItemShape, Trait};
use rg16::assessment::report::{BigFiveReport, JungReport};
use rg16::assessment::{
    build_report, AnswerMap, AnswerValue, AssessmentMode, AssessmentService, AssessmentSubmission,
    BankVersion, ComputedAssessment, JungType, OrderStatus, OrderSubmission, QualityIndex, Report,
    ScorePack, TypeResult,
};
use rg16::config::TelemetryConfig;
use rg16::error::AppError;
use rg16::telemetry::{self, LogSink};
use serde::Serialize;
use tracing::warn;

use crate::infra::InMemoryAssessmentStore;

/// Average time per item reported by the synthetic respondent.
const DEMO_MS_PER_ITEM: u64 = 6_500;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding an answer map or a full submission
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Questionnaire version (v1 or v2); overrides the file's own version
    #[arg(long)]
    pub(crate) bank_version: Option<String>,
    /// Total answering time in milliseconds
    #[arg(long)]
    pub(crate) duration_ms: Option<u64>,
    /// Include the full narrative report in the output
    #[arg(long)]
    pub(crate) report: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Questionnaire version answered by the synthetic respondent (v1 or v2)
    #[arg(long, default_value = "v2")]
    pub(crate) bank_version: String,
    /// Type the synthetic respondent leans towards
    #[arg(long = "type", default_value = "INTJ")]
    pub(crate) type_code: JungType,
}

#[derive(Debug, Serialize)]
struct ScoreOutput {
    version: BankVersion,
    mode: AssessmentMode,
    type_label: String,
    type_result: TypeResult,
    scores: ScorePack,
    quality: QualityIndex,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<Report>,
}

fn init_cli_logging(level: &str) -> Result<(), AppError> {
    let config = TelemetryConfig {
        log_level: level.to_string(),
    };
    telemetry::init_with_sink(&config, LogSink::Stderr)?;
    Ok(())
}

pub(crate) fn load_submission(raw: &str, args: &ScoreArgs) -> Result<AssessmentSubmission, AppError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let mut submission = if value.get("answers").is_some_and(serde_json::Value::is_object) {
        AssessmentSubmission::from_json(value)?
    } else {
        AssessmentSubmission {
            version: BankVersion::V2.to_string(),
            mode: None,
            duration_ms: None,
            answers: serde_json::from_value(value)?,
        }
    };

    if let Some(version) = &args.bank_version {
        submission.version = version.clone();
    }
    if args.duration_ms.is_some() {
        submission.duration_ms = args.duration_ms;
    }
    Ok(submission)
}

fn score_output(computed: ComputedAssessment, with_report: bool) -> Result<ScoreOutput, AppError> {
    let report = if with_report {
        Some(build_report(
            &computed.scores,
            &computed.quality,
            &computed.type_result,
            &computed.answers,
        )?)
    } else {
        None
    };

    Ok(ScoreOutput {
        version: computed.version,
        mode: computed.mode,
        type_label: computed.type_result.label(),
        type_result: computed.type_result,
        scores: computed.scores,
        quality: computed.quality,
        report,
    })
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    init_cli_logging("warn")?;

    let raw = fs::read_to_string(&args.answers)?;
    let computed = load_submission(&raw, &args)?.compute()?;
    for malformed in &computed.malformed {
        warn!(question_id = %malformed.question_id, "answer value ignored");
    }

    let output = score_output(computed, args.report)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Answers of a respondent whose preferences follow `type_id`'s stack.
///
/// Calibration items are endorsed by slot (5, 4, 3, 2 and 1 off-stack). Choice
/// items pick the highest-ranked offered function, except that a quarter of the
/// items offering the auxiliary go to the tertiary instead.
pub(crate) fn synthetic_function_answers(type_id: JungType) -> AnswerMap {
    let stack = type_id.stack();
    let rank = |function: CognitiveFunction| {
        stack
            .slots()
            .iter()
            .position(|slot| *slot == function)
            .unwrap_or(4)
    };
    let preferred = |options: &'static [ChoiceOption<CognitiveFunction>]| {
        options.iter().min_by_key(|option| rank(option.category))
    };

    let mut answers = AnswerMap::new();
    let mut auxiliary_items = 0_usize;
    for question in jung::bank().questions {
        let value = match question.shape {
            ItemShape::Calibration {
                category,
                reverse_keyed,
            } => {
                let endorsement = 5 - rank(category).min(4) as i64;
                let value = if reverse_keyed { 6 - endorsement } else { endorsement };
                AnswerValue::Ordinal(value)
            }
            ItemShape::Forced(options) => match preferred(options) {
                Some(option) => AnswerValue::Choice(option.id.to_string()),
                None => continue,
            },
            ItemShape::Situational(options) => {
                let tertiary = options
                    .iter()
                    .find(|option| option.category == stack.tertiary);
                let offers_auxiliary = options
                    .iter()
                    .any(|option| option.category == stack.auxiliary);
                if offers_auxiliary {
                    auxiliary_items += 1;
                }
                let chosen = match tertiary {
                    Some(option) if offers_auxiliary && auxiliary_items % 4 == 0 => Some(option),
                    _ => preferred(options),
                };
                match chosen {
                    Some(option) => AnswerValue::Choice(option.id.to_string()),
                    None => continue,
                }
            }
        };
        answers.insert(question.id.to_string(), value);
    }
    answers
}

/// Answers of a respondent at 75 on the traits behind `type_id`'s letters and
/// 25 elsewhere, Neuroticism included.
pub(crate) fn synthetic_aspect_answers(type_id: JungType) -> AnswerMap {
    let code = type_id.code();
    let high = |trait_id: Trait| match trait_id {
        Trait::Extraversion => code.starts_with('E'),
        Trait::Openness => code.contains('N'),
        Trait::Agreeableness => code.contains('F'),
        Trait::Conscientiousness => code.ends_with('J'),
        Trait::Neuroticism => false,
    };

    big_five::bank()
        .questions
        .iter()
        .filter_map(|question| match question.shape {
            ItemShape::Calibration {
                category,
                reverse_keyed,
            } => {
                let value = match (high(category.parent()), reverse_keyed) {
                    (true, false) | (false, true) => 4,
                    (true, true) | (false, false) => 2,
                };
                Some((question.id.to_string(), AnswerValue::Ordinal(value)))
            }
            _ => None,
        })
        .collect()
}

fn synthetic_submission(version: BankVersion, type_id: JungType) -> AssessmentSubmission {
    let answers = match version {
        BankVersion::V1 => synthetic_aspect_answers(type_id),
        BankVersion::V2 => synthetic_function_answers(type_id),
    };
    AssessmentSubmission {
        version: version.to_string(),
        mode: None,
        duration_ms: Some(answers.len() as u64 * DEMO_MS_PER_ITEM),
        answers,
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    init_cli_logging("info")?;

    let version: BankVersion = args.bank_version.parse()?;
    let service = AssessmentService::new(Arc::new(InMemoryAssessmentStore::default()), false);

    println!("RG16 assessment demo");
    println!(
        "Synthetic respondent leaning {} on the {} questionnaire",
        args.type_code, version
    );

    let record = service.submit(synthetic_submission(version, args.type_code))?;
    let receipt = record.receipt();
    println!("\nSubmission {}", receipt.assessment_id);
    println!(
        "  Type: {} (confidence {:.2}, {})",
        receipt.type_label,
        receipt.confidence,
        receipt.tier.label()
    );
    println!(
        "  Answer quality: {}/100 ({} of {} answered)",
        receipt.quality.index, receipt.quality.answered, receipt.quality.total
    );
    for warning in &receipt.quality.warnings {
        println!("  ! {warning}");
    }

    let locked = service.result_view(&record.id)?;
    if locked.report.is_none() {
        println!("\nDeep report locked; purchasing deep_report_v1");
    }

    let order = service.record_order(
        &record.id,
        OrderSubmission {
            order_ref: format!("demo-{}", record.id),
            sku: "deep_report_v1".to_string(),
            status: OrderStatus::Paid,
            amount: None,
            currency: None,
        },
    )?;
    let granted: Vec<String> = order.granted.iter().map(|module| module.to_string()).collect();
    println!(
        "  Order {} {} ({} {}), unlocked: {}",
        order.order.order_ref,
        order.order.status.label(),
        order.order.amount,
        order.order.currency,
        granted.join(", ")
    );

    let unlocked = service.result_view(&record.id)?;
    match &unlocked.report {
        Some(report) => {
            println!();
            for line in render_report(report) {
                println!("{line}");
            }
        }
        None => println!("\nReport still locked"),
    }
    Ok(())
}

pub(crate) fn render_report(report: &Report) -> Vec<String> {
    match report {
        Report::BigFive(report) => render_big_five(report),
        Report::Jung(report) => render_jung(report),
    }
}

fn render_big_five(report: &BigFiveReport) -> Vec<String> {
    let mut lines = vec![report.headline.clone(), report.summary.to_string()];

    lines.push("\nTraits".to_string());
    for read in &report.traits {
        lines.push(format!(
            "- {:<18} {:>3}  {}",
            read.trait_id.label(),
            read.score,
            read.band.label()
        ));
    }

    for section in &report.sections {
        lines.push(format!("\n{}", section.title));
        lines.extend(section.bullets.iter().map(|bullet| format!("- {bullet}")));
    }

    render_notes(&mut lines, &report.notes);
    lines
}

fn render_jung(report: &JungReport) -> Vec<String> {
    let mut lines = vec![
        report.headline.clone(),
        report.stack_line.clone(),
        report.dom_aux_line.clone(),
    ];

    let card = &report.level_card;
    lines.push(format!("\nLevel: {} (target {})", card.current, card.target));
    lines.extend(card.diagnosis.iter().map(|line| format!("- {line}")));
    lines.push("Upgrade plan".to_string());
    lines.extend(card.upgrade_plan.iter().map(|line| format!("- {line}")));

    lines.push("\nFunctions".to_string());
    for section in &report.functions {
        lines.push(format!(
            "- {} {:>3}  {:<8} {} ({} cited answers)",
            section.name,
            section.score,
            section.band.label(),
            section.tagline,
            section.evidence.len()
        ));
    }

    if let Some(baseline) = &report.baseline {
        lines.push(format!("\n{}", baseline.summary));
    }

    render_notes(&mut lines, &report.notes);
    lines
}

fn render_notes(lines: &mut Vec<String>, notes: &[String]) {
    if notes.is_empty() {
        return;
    }
    lines.push("\nNotes".to_string());
    lines.extend(notes.iter().map(|note| format!("- {note}")));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_args() -> ScoreArgs {
        ScoreArgs {
            answers: PathBuf::from("answers.json"),
            bank_version: None,
            duration_ms: None,
            report: false,
        }
    }

    #[test]
    fn function_respondent_lands_on_the_requested_type() {
        for type_id in JungType::ordered() {
            let computed = synthetic_submission(BankVersion::V2, type_id)
                .compute()
                .expect("published version");
            assert_eq!(computed.type_result.label(), type_id.code());
            assert_eq!(computed.quality.answered, computed.quality.total);
        }
    }

    #[test]
    fn aspect_respondent_reads_the_same_letters() {
        for type_id in [JungType::Intj, JungType::Esfp, JungType::Enfj] {
            let computed = synthetic_submission(BankVersion::V1, type_id)
                .compute()
                .expect("published version");
            assert_eq!(
                computed.type_result.label(),
                format!("{}-A", type_id.code())
            );
        }
    }

    #[test]
    fn bare_answer_maps_default_to_the_function_bank() {
        let submission =
            load_submission(r#"{"j001": 5, "j101": "D"}"#, &score_args()).expect("parses");
        assert_eq!(submission.version, "v2");
        assert_eq!(submission.answers.len(), 2);
    }

    #[test]
    fn flags_override_a_full_submission() {
        let raw = r#"{"version": "v2", "durationMs": 1000, "answers": {"q001": 4}}"#;
        let args = ScoreArgs {
            bank_version: Some("v1".to_string()),
            duration_ms: Some(240_000),
            ..score_args()
        };
        let submission = load_submission(raw, &args).expect("parses");
        assert_eq!(submission.version, "v1");
        assert_eq!(submission.duration_ms, Some(240_000));
    }

    #[test]
    fn score_output_includes_report_on_request() {
        let computed = synthetic_submission(BankVersion::V2, JungType::Infp)
            .compute()
            .expect("published version");
        let without = score_output(computed.clone(), false).expect("output");
        assert!(without.report.is_none());

        let with = score_output(computed, true).expect("output");
        let json = serde_json::to_value(&with).expect("serializes");
        assert_eq!(json["type_label"], "INFP");
        assert_eq!(json["report"]["version"], "v2");
    }

    #[test]
    fn rendered_reports_lead_with_the_headline() {
        let computed = synthetic_submission(BankVersion::V1, JungType::Istj)
            .compute()
            .expect("published version");
        let report = score_output(computed, true)
            .expect("output")
            .report
            .expect("report requested");
        let lines = render_report(&report);
        assert_eq!(lines.first().map(String::as_str), Some(report.headline()));
        assert!(lines.iter().any(|line| line == "\nTraits"));
    }
}
