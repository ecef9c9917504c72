use serde::{Deserialize, Serialize};

use super::{Category, Question, QuestionBank};
use crate::assessment::domain::BankVersion;

/// Big Five trait, derived from its two aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Trait {
    #[serde(rename = "O")]
    Openness,
    #[serde(rename = "C")]
    Conscientiousness,
    #[serde(rename = "E")]
    Extraversion,
    #[serde(rename = "A")]
    Agreeableness,
    #[serde(rename = "N")]
    Neuroticism,
}

impl Trait {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Openness,
            Self::Conscientiousness,
            Self::Extraversion,
            Self::Agreeableness,
            Self::Neuroticism,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Openness => "Openness",
            Self::Conscientiousness => "Conscientiousness",
            Self::Extraversion => "Extraversion",
            Self::Agreeableness => "Agreeableness",
            Self::Neuroticism => "Neuroticism",
        }
    }

    pub const fn aspects(self) -> [Aspect; 2] {
        match self {
            Self::Openness => [Aspect::Intellect, Aspect::Openness],
            Self::Conscientiousness => [Aspect::Industriousness, Aspect::Orderliness],
            Self::Extraversion => [Aspect::Enthusiasm, Aspect::Assertiveness],
            Self::Agreeableness => [Aspect::Compassion, Aspect::Politeness],
            Self::Neuroticism => [Aspect::Volatility, Aspect::Withdrawal],
        }
    }
}

impl Category for Trait {
    const ALL: &'static [Self] = &Self::ordered();

    fn code(self) -> &'static str {
        match self {
            Self::Openness => "O",
            Self::Conscientiousness => "C",
            Self::Extraversion => "E",
            Self::Agreeableness => "A",
            Self::Neuroticism => "N",
        }
    }
}

/// One of the ten Big Five aspects scored directly by the `v1` bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Aspect {
    #[serde(rename = "O_Intellect")]
    Intellect,
    #[serde(rename = "O_Openness")]
    Openness,
    #[serde(rename = "C_Industriousness")]
    Industriousness,
    #[serde(rename = "C_Orderliness")]
    Orderliness,
    #[serde(rename = "E_Enthusiasm")]
    Enthusiasm,
    #[serde(rename = "E_Assertiveness")]
    Assertiveness,
    #[serde(rename = "A_Compassion")]
    Compassion,
    #[serde(rename = "A_Politeness")]
    Politeness,
    #[serde(rename = "N_Volatility")]
    Volatility,
    #[serde(rename = "N_Withdrawal")]
    Withdrawal,
}

impl Aspect {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::Intellect,
            Self::Openness,
            Self::Industriousness,
            Self::Orderliness,
            Self::Enthusiasm,
            Self::Assertiveness,
            Self::Compassion,
            Self::Politeness,
            Self::Volatility,
            Self::Withdrawal,
        ]
    }

    pub const fn parent(self) -> Trait {
        match self {
            Self::Intellect | Self::Openness => Trait::Openness,
            Self::Industriousness | Self::Orderliness => Trait::Conscientiousness,
            Self::Enthusiasm | Self::Assertiveness => Trait::Extraversion,
            Self::Compassion | Self::Politeness => Trait::Agreeableness,
            Self::Volatility | Self::Withdrawal => Trait::Neuroticism,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Intellect => "Intellectual exploration",
            Self::Openness => "Openness to experience",
            Self::Industriousness => "Drive and follow-through",
            Self::Orderliness => "Order and planning",
            Self::Enthusiasm => "Warm engagement",
            Self::Assertiveness => "Assertive expression",
            Self::Compassion => "Empathic care",
            Self::Politeness => "Courtesy and restraint",
            Self::Volatility => "Emotional volatility",
            Self::Withdrawal => "Withdrawal under pressure",
        }
    }

    pub const fn hint(self) -> &'static str {
        match self {
            Self::Intellect => "abstract thinking, appetite for learning, grasp of concepts",
            Self::Openness => "curiosity, aesthetics, acceptance of new experiences",
            Self::Industriousness => "self-motivation, persistence, pushing goals forward",
            Self::Orderliness => "tidiness, planning, structure",
            Self::Enthusiasm => "outgoing energy, friendliness, positive emotion",
            Self::Assertiveness => "speaking up, influence, taking the lead",
            Self::Compassion => "empathy, consideration, attending to how others feel",
            Self::Politeness => "respect for rules, avoiding offence, a sense of proportion",
            Self::Volatility => "irritability, being easily set off, emotional swings",
            Self::Withdrawal => "worry, avoidance, shrinking back under pressure",
        }
    }
}

impl Category for Aspect {
    const ALL: &'static [Self] = &Self::ordered();

    fn code(self) -> &'static str {
        match self {
            Self::Intellect => "O_Intellect",
            Self::Openness => "O_Openness",
            Self::Industriousness => "C_Industriousness",
            Self::Orderliness => "C_Orderliness",
            Self::Enthusiasm => "E_Enthusiasm",
            Self::Assertiveness => "E_Assertiveness",
            Self::Compassion => "A_Compassion",
            Self::Politeness => "A_Politeness",
            Self::Volatility => "N_Volatility",
            Self::Withdrawal => "N_Withdrawal",
        }
    }
}

pub fn bank() -> QuestionBank<Aspect> {
    QuestionBank {
        version: BankVersion::V1,
        questions: &QUESTIONS,
    }
}

use Aspect::*;

// Ten aspects, six items each; the fourth and sixth item of every block are reverse-keyed.
static QUESTIONS: [Question<Aspect>; 60] = [
    Question::calibration("q001", Intellect, "I like to take complicated problems apart and think them through."),
    Question::calibration("q002", Intellect, "When I meet a new concept I go and look it up until I understand it."),
    Question::calibration("q003", Intellect, "I enjoy the moments when learning suddenly opens my mind."),
    Question::reversed("q004", Intellect, "Abstract theory usually doesn't interest me much."),
    Question::calibration("q005", Intellect, "I will spend time understanding the principles behind a system."),
    Question::reversed("q006", Intellect, "I prefer to decide on gut feel rather than analyse deeply."),
    Question::calibration("q007", Openness, "New experiences and unfamiliar cultures draw me in."),
    Question::calibration("q008", Openness, "I like trying different forms of expression such as writing, music or visuals."),
    Question::calibration("q009", Openness, "I often wonder what would happen if things were done another way."),
    Question::reversed("q010", Openness, "I prefer familiar routines and am reluctant to try new things."),
    Question::calibration("q011", Openness, "Art, aesthetics or design noticeably shape my experience."),
    Question::reversed("q012", Openness, "Imagination isn't practical, so I don't spend much effort on it."),
    Question::calibration("q013", Industriousness, "I can keep pushing a task forward until it is finished."),
    Question::calibration("q014", Industriousness, "I set goals for myself and act on them."),
    Question::calibration("q015", Industriousness, "I stay engaged even when nobody is checking on me."),
    Question::reversed("q016", Industriousness, "I often put things off until the last minute."),
    Question::calibration("q017", Industriousness, "I am more of a doer than a thinker-about-doing."),
    Question::reversed("q018", Industriousness, "I tend to give up halfway once the excitement fades."),
    Question::calibration("q019", Orderliness, "I like to put things in order and give them structure."),
    Question::calibration("q020", Orderliness, "Before starting, I tend to plan the route and the steps."),
    Question::calibration("q021", Orderliness, "I use lists, calendars or systems to run my life or work."),
    Question::reversed("q022", Orderliness, "I don't care much about order; doing things as they occur to me is fine."),
    Question::calibration("q023", Orderliness, "How tidy my surroundings are affects my focus."),
    Question::reversed("q024", Orderliness, "I find it hard to stick to a fixed process or habit."),
    Question::calibration("q025", Enthusiasm, "A good conversation recharges me."),
    Question::calibration("q026", Enthusiasm, "I get carried along by the mood of a room and carry others along too."),
    Question::calibration("q027", Enthusiasm, "I express happiness and excitement quite naturally."),
    Question::reversed("q028", Enthusiasm, "Long stretches of socialising leave me clearly drained."),
    Question::calibration("q029", Enthusiasm, "I would rather share my joy than keep it to myself."),
    Question::reversed("q030", Enthusiasm, "I prefer being alone and don't enjoy lively gatherings."),
    Question::calibration("q031", Assertiveness, "In a group I don't mind stating my view and pushing for a decision."),
    Question::calibration("q032", Assertiveness, "I dare to ask for what I need and to refuse what is unreasonable."),
    Question::calibration("q033", Assertiveness, "At critical moments I am willing to step up and take responsibility."),
    Question::reversed("q034", Assertiveness, "I usually avoid being the centre of attention or giving orders."),
    Question::calibration("q035", Assertiveness, "Even when we disagree, I am willing to say things plainly."),
    Question::reversed("q036", Assertiveness, "I tend to stay quiet and let others set the pace."),
    Question::calibration("q037", Compassion, "I quickly pick up on changes in other people's feelings."),
    Question::calibration("q038", Compassion, "I care that the other person feels understood, not just that the job gets done."),
    Question::calibration("q039", Compassion, "I am willing to put energy into others' feelings and needs."),
    Question::reversed("q040", Compassion, "When people get emotional I usually find it a nuisance."),
    Question::calibration("q041", Compassion, "I care whether what I say might hurt someone."),
    Question::reversed("q042", Compassion, "I focus on whether facts are right, not on how people feel."),
    Question::calibration("q043", Politeness, "I try to stay polite and measured even when I disagree."),
    Question::calibration("q044", Politeness, "I don't need to win the argument; I would rather keep the relationship intact."),
    Question::calibration("q045", Politeness, "I tend to follow the rules and am reluctant to overstep."),
    Question::reversed("q046", Politeness, "Being a bit harsh is fine by me; if it offends, so be it."),
    Question::calibration("q047", Politeness, "I am willing to give ground in exchange for smoother cooperation."),
    Question::reversed("q048", Politeness, "I often voice displeasure through sarcasm or sharp remarks."),
    Question::calibration("q049", Volatility, "Small things sometimes make me suddenly irritable."),
    Question::calibration("q050", Volatility, "Under pressure my mood swings noticeably."),
    Question::calibration("q051", Volatility, "When things go badly I am easier to set off."),
    Question::reversed("q052", Volatility, "I usually keep my emotions steady and rarely blow up."),
    Question::calibration("q053", Volatility, "My emotions sometimes leak into conversations and my tone gets sharp."),
    Question::reversed("q054", Volatility, "I rarely make impulsive decisions because of my mood."),
    Question::calibration("q055", Withdrawal, "I worry about bad things that might happen in the future."),
    Question::calibration("q056", Withdrawal, "I get nervous in unfamiliar or uncertain situations."),
    Question::calibration("q057", Withdrawal, "Under stress I would rather hide away and process things alone."),
    Question::reversed("q058", Withdrawal, "I am rarely anxious and usually relaxed."),
    Question::calibration("q059", Withdrawal, "I replay things I have done, worrying about what I got wrong."),
    Question::reversed("q060", Withdrawal, "Even when something big happens I calm down quickly."),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::bank::ItemShape;

    #[test]
    fn every_aspect_has_six_items_with_two_reversed() {
        for aspect in Aspect::ordered() {
            let items: Vec<_> = bank()
                .questions
                .iter()
                .filter_map(|question| match question.shape {
                    ItemShape::Calibration {
                        category,
                        reverse_keyed,
                    } if category == aspect => Some(reverse_keyed),
                    _ => None,
                })
                .collect();
            assert_eq!(items.len(), 6, "{aspect:?}");
            assert_eq!(items.iter().filter(|reversed| **reversed).count(), 2);
        }
    }

    #[test]
    fn traits_cover_every_aspect_once() {
        let covered: Vec<Aspect> = Trait::ordered()
            .into_iter()
            .flat_map(Trait::aspects)
            .collect();
        assert_eq!(covered, Aspect::ordered().to_vec());
        assert!(covered.iter().all(|aspect| aspect.parent().aspects().contains(aspect)));
    }
}
