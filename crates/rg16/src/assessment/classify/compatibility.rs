use serde::{Deserialize, Serialize};

use super::stack::{FunctionStack, JungType};
use crate::assessment::bank::{Category, CognitiveFunction};
use crate::assessment::scoring::quality::round_to;

pub const PICKS_PER_KIND: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingKind {
    /// Easy to be understood by; low escalation risk.
    Secure,
    /// Strong pull through contrast.
    Spark,
    /// Most likely to misread each other under stress.
    Friction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub kind: PairingKind,
    #[serde(rename = "type")]
    pub type_id: JungType,
    pub score: f64,
    /// Why the pairing ranks here, or what triggers friction.
    pub reason: String,
    /// What helps: a sweet action for attraction, a repair move for friction.
    pub advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityProfile {
    pub secure: Vec<Pairing>,
    pub spark: Vec<Pairing>,
    pub friction: Vec<Pairing>,
    pub emotional_needs: Vec<String>,
    pub share_line: String,
    pub model_notes: Vec<String>,
}

fn secure_score(me: &FunctionStack, other: &FunctionStack) -> f64 {
    let other_lead = [other.dominant, other.auxiliary];
    let mut score = 0.0;
    if other.dominant == me.auxiliary {
        score += 2.8;
    }
    if other.auxiliary == me.dominant {
        score += 2.6;
    }
    if other.dominant == me.dominant {
        score += 1.1;
    }
    if other.auxiliary == me.auxiliary {
        score += 1.1;
    }
    if other_lead.contains(&me.inferior) {
        score += 0.9;
    }
    if other_lead.contains(&me.dominant.opposite()) {
        score -= 0.6;
    }
    score
}

fn spark_score(me: &FunctionStack, other: &FunctionStack) -> f64 {
    let mut score = 0.0;
    if other.dominant == me.inferior {
        score += 3.2;
    }
    if other.auxiliary == me.inferior {
        score += 1.4;
    }
    if other.dominant == me.dominant.opposite() {
        score += 1.6;
    }
    if other.auxiliary == me.auxiliary.opposite() {
        score += 1.2;
    }
    if other.dominant == me.dominant && other.auxiliary == me.auxiliary {
        score -= 1.0;
    }
    score
}

fn friction_score(me: &FunctionStack, other: &FunctionStack) -> f64 {
    let other_lead = [other.dominant, other.auxiliary];
    let mut score = 0.0;
    if other.dominant == me.dominant.opposite() {
        score += 2.6;
    }
    if other.auxiliary == me.auxiliary.opposite() {
        score += 2.2;
    }
    if other.dominant == me.auxiliary.opposite() {
        score += 1.2;
    }
    if other.auxiliary == me.dominant.opposite() {
        score += 1.1;
    }
    if !other_lead.contains(&me.dominant) && !other_lead.contains(&me.auxiliary) {
        score += 0.8;
    }
    if other.dominant == me.inferior {
        score += 1.2;
    }
    score
}

fn secure_reason(me: &FunctionStack, other: &FunctionStack) -> String {
    if other.dominant == me.auxiliary || other.auxiliary == me.dominant {
        format!(
            "Their leading functions pick up your everyday {}/{}, so you feel understood with little effort.",
            me.dominant.code(),
            me.auxiliary.code()
        )
    } else if other.dominant == me.inferior || other.auxiliary == me.inferior {
        format!(
            "They gently draw out your less-used {}, which gives the relationship a sense of growth.",
            me.inferior.code()
        )
    } else {
        "You tend to agree on how decisions are made and voiced, so conflicts escalate less often."
            .to_string()
    }
}

fn spark_reason(me: &FunctionStack, other: &FunctionStack) -> String {
    if other.dominant == me.inferior {
        format!(
            "Their dominant {} lands right on your quiet {}: a pull that is hard to ignore.",
            other.dominant.code(),
            me.inferior.code()
        )
    } else {
        "You process information along very different paths, which makes for strong novelty and contrast."
            .to_string()
    }
}

fn secure_advice(me: &FunctionStack) -> String {
    format!(
        "Share feelings before conclusions ({} before {}) to deepen closeness.",
        me.auxiliary.code(),
        me.dominant.code()
    )
}

const SPARK_ADVICE: &str =
    "Build shared experiences first, then talk values and boundaries; things progress more smoothly.";

fn friction_trigger(me: &FunctionStack, other: &FunctionStack) -> String {
    format!(
        "You lean {}/{} and they lean {}/{}; under stress it is easy to read a style difference as a character flaw.",
        me.dominant.code(),
        me.auxiliary.code(),
        other.dominant.code(),
        other.auxiliary.code()
    )
}

fn friction_repair(me: &FunctionStack, other: &FunctionStack) -> String {
    format!(
        "In conflict, open with one line of empathy in their {} register, then give one workable boundary in your {} style.",
        other.auxiliary.code(),
        me.auxiliary.code()
    )
}

/// Two lines on what the dominant function looks for in a partner.
pub fn emotional_needs(dominant: CognitiveFunction) -> [&'static str; 2] {
    match dominant {
        CognitiveFunction::Se => [
            "You are drawn to people with presence who are ready to do things together.",
            "You need real feedback and shared experiences; empty promises don't work on you.",
        ],
        CognitiveFunction::Si => [
            "You value stability and predictability; steady reliability lets you commit quickly.",
            "You want your details remembered and your long-term rhythm respected, not rushed.",
        ],
        CognitiveFunction::Ne => [
            "You light up around people who brainstorm and imagine the future with you.",
            "You need novelty and possibility; unchanging routines wear you down.",
        ],
        CognitiveFunction::Ni => [
            "You are drawn to people who read your deeper motives, not just your surface.",
            "You need a long-term sense of direction, ideally a future story you build together.",
        ],
        CognitiveFunction::Te => [
            "You are drawn to people who take responsibility and get things done.",
            "You need aligned goals and clear boundaries; vague back-and-forth drains you.",
        ],
        CognitiveFunction::Ti => [
            "You are drawn to people whose reasoning is clean and makes sense.",
            "You need room for calm, rational talk; explosive confrontations make you withdraw.",
        ],
        CognitiveFunction::Fe => [
            "You are drawn to people who respond to feelings and sense the warmth of a relationship.",
            "You need to feel cared for and to share small rituals; the cold shoulder unsettles you.",
        ],
        CognitiveFunction::Fi => [
            "You are drawn to people who are sincere and share your values.",
            "You need respect and boundaries; not being forced to change is your core safety.",
        ],
    }
}

fn top_picks(mut pairings: Vec<Pairing>) -> Vec<Pairing> {
    pairings.sort_by(|a, b| b.score.total_cmp(&a.score));
    pairings.truncate(PICKS_PER_KIND);
    pairings
}

fn codes(pairings: &[Pairing]) -> String {
    pairings
        .iter()
        .map(|pairing| pairing.type_id.code())
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Ranks the other 15 types against `selected` by three fixed rule sets.
/// Spark picks never repeat a secure pick; friction picks may.
pub fn compatibility_profile(selected: JungType) -> CompatibilityProfile {
    let me = selected.stack();
    let candidates: Vec<(JungType, FunctionStack)> = JungType::ordered()
        .into_iter()
        .filter(|candidate| *candidate != selected)
        .map(|candidate| (candidate, candidate.stack()))
        .collect();

    let secure = top_picks(
        candidates
            .iter()
            .map(|(type_id, other)| Pairing {
                kind: PairingKind::Secure,
                type_id: *type_id,
                score: round_to(secure_score(&me, other), 2),
                reason: secure_reason(&me, other),
                advice: secure_advice(&me),
            })
            .collect(),
    );

    let spark = top_picks(
        candidates
            .iter()
            .filter(|(type_id, _)| !secure.iter().any(|pick| pick.type_id == *type_id))
            .map(|(type_id, other)| Pairing {
                kind: PairingKind::Spark,
                type_id: *type_id,
                score: round_to(spark_score(&me, other), 2),
                reason: spark_reason(&me, other),
                advice: SPARK_ADVICE.to_string(),
            })
            .collect(),
    );

    let friction = top_picks(
        candidates
            .iter()
            .map(|(type_id, other)| Pairing {
                kind: PairingKind::Friction,
                type_id: *type_id,
                score: round_to(friction_score(&me, other), 2),
                reason: friction_trigger(&me, other),
                advice: friction_repair(&me, other),
            })
            .collect(),
    );

    let share_line = format!(
        "My type is {selected}. Most stable matches: {}. Highest-spark matches: {}.",
        codes(&secure),
        codes(&spark)
    );

    CompatibilityProfile {
        secure,
        spark,
        friction,
        emotional_needs: emotional_needs(me.dominant)
            .iter()
            .map(|line| line.to_string())
            .collect(),
        share_line,
        model_notes: vec![
            "Pairings combine three factors from social psychology: similarity attraction, complementary gain, and the cost of repairing conflict.".to_string(),
            "They describe how likely two styles are to get along or pull at each other, not a verdict; maturity and communication habits still decide.".to_string(),
        ],
    }
}
