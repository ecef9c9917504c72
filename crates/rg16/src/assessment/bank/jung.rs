use serde::{Deserialize, Serialize};

use super::{Category, ChoiceOption, Question, QuestionBank};
use crate::assessment::domain::BankVersion;

/// The eight Jungian cognitive functions scored by the `v2` bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CognitiveFunction {
    Se,
    Si,
    Ne,
    Ni,
    Te,
    Ti,
    Fe,
    Fi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    Perceiving,
    Judging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attitude {
    Extraverted,
    Introverted,
}

impl CognitiveFunction {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Se,
            Self::Si,
            Self::Ne,
            Self::Ni,
            Self::Te,
            Self::Ti,
            Self::Fe,
            Self::Fi,
        ]
    }

    /// The four opposite-attitude pairs, in reporting order.
    pub const fn opposite_pairs() -> [(Self, Self); 4] {
        [
            (Self::Se, Self::Si),
            (Self::Ne, Self::Ni),
            (Self::Te, Self::Ti),
            (Self::Fe, Self::Fi),
        ]
    }

    /// Same function in the other attitude.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Se => Self::Si,
            Self::Si => Self::Se,
            Self::Ne => Self::Ni,
            Self::Ni => Self::Ne,
            Self::Te => Self::Ti,
            Self::Ti => Self::Te,
            Self::Fe => Self::Fi,
            Self::Fi => Self::Fe,
        }
    }

    pub const fn kind(self) -> FunctionKind {
        match self {
            Self::Se | Self::Si | Self::Ne | Self::Ni => FunctionKind::Perceiving,
            Self::Te | Self::Ti | Self::Fe | Self::Fi => FunctionKind::Judging,
        }
    }

    pub const fn attitude(self) -> Attitude {
        match self {
            Self::Se | Self::Ne | Self::Te | Self::Fe => Attitude::Extraverted,
            Self::Si | Self::Ni | Self::Ti | Self::Fi => Attitude::Introverted,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Se => "Extraverted Sensing",
            Self::Si => "Introverted Sensing",
            Self::Ne => "Extraverted Intuition",
            Self::Ni => "Introverted Intuition",
            Self::Te => "Extraverted Thinking",
            Self::Ti => "Introverted Thinking",
            Self::Fe => "Extraverted Feeling",
            Self::Fi => "Introverted Feeling",
        }
    }

    pub const fn brief(self) -> &'static str {
        match self {
            Self::Se => "live perception / direct action",
            Self::Si => "remembered experience / reliable reuse",
            Self::Ne => "branching possibilities / associative leaps",
            Self::Ni => "pattern insight / converging on the thread",
            Self::Te => "efficient structure / external standards",
            Self::Ti => "conceptual models / internal consistency",
            Self::Fe => "shared harmony / reading the room",
            Self::Fi => "personal values / authenticity",
        }
    }

    pub const fn tagline(self) -> &'static str {
        match self {
            Self::Se => "Trust the moment and test it by acting.",
            Self::Si => "Lean on what has worked and aim for reliability.",
            Self::Ne => "Open the idea space first and see more roads.",
            Self::Ni => "Grasp the essence and see where it is heading.",
            Self::Te => "Get it done and let results speak.",
            Self::Ti => "Make the logic hold before acting.",
            Self::Fe => "Keep communication smooth so people can follow.",
            Self::Fi => "Stay true to yourself to go the distance.",
        }
    }
}

impl Category for CognitiveFunction {
    const ALL: &'static [Self] = &Self::ordered();

    fn code(self) -> &'static str {
        match self {
            Self::Se => "Se",
            Self::Si => "Si",
            Self::Ne => "Ne",
            Self::Ni => "Ni",
            Self::Te => "Te",
            Self::Ti => "Ti",
            Self::Fe => "Fe",
            Self::Fi => "Fi",
        }
    }
}

pub fn bank() -> QuestionBank<CognitiveFunction> {
    QuestionBank {
        version: BankVersion::V2,
        questions: &QUESTIONS,
    }
}

use CognitiveFunction::{Fe, Fi, Ne, Ni, Se, Si, Te, Ti};

const fn opt(
    id: &'static str,
    category: CognitiveFunction,
    title: &'static str,
    detail: &'static str,
) -> ChoiceOption<CognitiveFunction> {
    ChoiceOption::new(id, category, title, detail)
}

// Bank order: 16 calibration items (the second eight reverse-keyed), 12
// perceiving situations, 12 judging situations, then 24 forced pairs.
static QUESTIONS: [Question<CognitiveFunction>; 64] = [
    Question::calibration("j001", Se, "I would rather get moving and adjust as I go."),
    Question::calibration("j002", Si, "I naturally compare new situations with past experience to find a proven approach."),
    Question::calibration("j003", Ne, "One idea often sets off many possibilities and extensions for me."),
    Question::calibration("j004", Ni, "I tend to condense information into one core conclusion or trend."),
    Question::calibration("j005", Te, "I care most about whether a plan can be executed efficiently."),
    Question::calibration("j006", Ti, "I keep questioning definitions and boundaries until the logic is consistent."),
    Question::calibration("j007", Fe, "I notice people's moods and the setting, and adjust how I speak so things go smoothly."),
    Question::calibration("j008", Fi, "What matters most is whether something fits my own values and true feelings."),
    Question::reversed("j009", Se, "Without enough preparation I would rather wait and watch than try straight away."),
    Question::reversed("j010", Si, "I rarely look at how things were done before; I prefer starting from scratch."),
    Question::reversed("j011", Ne, "I don't enjoy open-ended discussion and want to settle on a direction quickly."),
    Question::reversed("j012", Ni, "I trust step-by-step trial more than sudden insight."),
    Question::reversed("j013", Te, "I care whether a concept is elegant and won't compromise it for efficiency."),
    Question::reversed("j014", Ti, "As long as it solves the problem, I don't mind if the principle isn't fully sound."),
    Question::reversed("j015", Fe, "I usually state conclusions directly without checking whether people can take them in."),
    Question::reversed("j016", Fi, "To keep the peace or the pace, I will usually set my real opinion aside."),
    Question::situational(
        "j101",
        "Your first time in an unfamiliar city, with little time. How do you explore?",
        &[
            opt("A", Se, "Just go", "Head out and follow whatever catches your eye."),
            opt("B", Si, "Go with experience", "Check a guide or map first and choose the safest route and pace."),
            opt("C", Ne, "Wander and wonder", "Let interesting spots spark ideas and follow your curiosity."),
            opt("D", Ni, "Find the thread", "Work out the city's character first and visit only the key places."),
        ],
    ),
    Question::situational(
        "j102",
        "You get a new project with incomplete information. What do you do first?",
        &[
            opt("A", Se, "Try it", "Build a small working sample and fill gaps from the feedback."),
            opt("B", Si, "Find a precedent", "Look for past cases or existing solutions and reuse a proven path."),
            opt("C", Ne, "Branch out", "List several possible directions, then pick the most interesting or feasible."),
            opt("D", Ni, "Set the direction", "Converge on one working hypothesis, then gather evidence around it."),
        ],
    ),
    Question::situational(
        "j103",
        "Reading a long article or watching a talk, what sticks with you most?",
        &[
            opt("A", Se, "The live impact", "The images, tone, highlights and striking moments."),
            opt("B", Si, "Key details", "The structure, details and parts that match past experience."),
            opt("C", Ne, "New connections", "The new ideas and possibilities it sparks and what can be combined."),
            opt("D", Ni, "The core message", "What it is ultimately saying and the trend behind it."),
        ],
    ),
    Question::situational(
        "j104",
        "A friend describes a complicated problem. How do you make sense of it?",
        &[
            opt("A", Se, "Rebuild the scene", "Work out what happened, who said what and what the setting was."),
            opt("B", Si, "Compare with experience", "Match it against similar cases you have seen to find the pattern."),
            opt("C", Ne, "Open up options", "Offer several explanations and paths so they see more choices."),
            opt("D", Ni, "Find the hidden logic", "Ask a few key questions and pin down the root cause."),
        ],
    ),
    Question::situational(
        "j105",
        "You are deciding with noisy information. What do you trust?",
        &[
            opt("A", Se, "What is visible now", "Facts you can verify on the spot and immediate feedback."),
            opt("B", Si, "Stable evidence", "Long-run data and patterns that have held up before."),
            opt("C", Ne, "Latent possibilities", "Hidden windows of opportunity; keep a few fallback routes."),
            opt("D", Ni, "Where it is heading", "Judge where this ends up and which path fits the trend."),
        ],
    ),
    Question::situational(
        "j106",
        "Planning the year ahead, which sounds most like you?",
        &[
            opt("A", Se, "Book experiences", "Schedule the things you want to do and feel first."),
            opt("B", Si, "Steady the rhythm", "Stabilise routines and systems before considering change."),
            opt("C", Ne, "Leave room", "Keep the future flexible so new chances can come in."),
            opt("D", Ni, "Pick the main axis", "Fix one central goal and make everything else serve it."),
        ],
    ),
    Question::situational(
        "j107",
        "At a busy event with lots going on, what do you tend to do?",
        &[
            opt("A", Se, "Find the action", "Scan the room and join whatever is most worth joining."),
            opt("B", Si, "Follow the programme", "Follow the agenda and note key details so nothing important is missed."),
            opt("C", Ne, "Connect people", "Link people and topics together to find new combinations."),
            opt("D", Ni, "Distil the theme", "Quickly read the event's real theme and focus on what matters."),
        ],
    ),
    Question::situational(
        "j108",
        "Learning a new skill, which sounds most like you?",
        &[
            opt("A", Se, "Hands on", "Start doing it and learn by correcting mistakes."),
            opt("B", Si, "Build the basics", "Follow the steps, build a solid base, then raise the difficulty."),
            opt("C", Ne, "Play with it", "Try lots of variations to find the feel and what is fun."),
            opt("D", Ni, "Grasp the framework", "Understand the core framework, then practise within it."),
        ],
    ),
    Question::situational(
        "j109",
        "Reading someone's profile or CV, what do you focus on?",
        &[
            opt("A", Se, "Delivery and action", "What they have done and whether they can start straight away."),
            opt("B", Si, "A steady record", "Whether their history is consistent, reliable and predictable."),
            opt("C", Ne, "Potential", "What they could grow into and what fresh thinking they bring."),
            opt("D", Ni, "Motive and direction", "What they really want and whether their long-term path is clear."),
        ],
    ),
    Question::situational(
        "j110",
        "Sorting out a messy idea, what is your habit?",
        &[
            opt("A", Se, "Draft it out", "Write or build something first, then adjust from the result."),
            opt("B", Si, "Put it in order", "Lay out the details along a timeline or steps until it is stable."),
            opt("C", Ne, "Map connections", "Join the dots into a web and see what new directions grow."),
            opt("D", Ni, "Find one sentence", "Force yourself to state the point in one line, then expand."),
        ],
    ),
    Question::situational(
        "j111",
        "Someone asks your advice. What do you ask first?",
        &[
            opt("A", Se, "The concrete situation", "Where are you right now and what visible facts have happened?"),
            opt("B", Si, "Past patterns", "What did you do last time something similar happened, and how did it go?"),
            opt("C", Ne, "Other options", "What if you did it differently? Which roads haven't you tried?"),
            opt("D", Ni, "The key variable", "What really decides the outcome, and what do you care about most?"),
        ],
    ),
    Question::situational(
        "j112",
        "Faced with an open-ended brief, where do you start?",
        &[
            opt("A", Se, "From reality", "Find one concrete, visible entry point and ground it."),
            opt("B", Si, "From the known", "Find existing patterns and reusable structure, then extend."),
            opt("C", Ne, "From divergence", "List the possibilities first, then filter slowly."),
            opt("D", Ni, "From the essence", "Ask what it fundamentally solves, then derive the route."),
        ],
    ),
    Question::situational(
        "j201",
        "The team disagrees and time is short. What do you do first?",
        &[
            opt("A", Te, "Set the target", "Pin down goals, metrics and deadline, then pick the option that hits them."),
            opt("B", Ti, "Untangle the logic", "Clarify the concepts and assumptions and find the contradiction."),
            opt("C", Fe, "Align people", "Hear what everyone cares about so they are willing to move together."),
            opt("D", Fi, "Hold the line", "Confirm which principles are non-negotiable, then choose within the rest."),
        ],
    ),
    Question::situational(
        "j202",
        "You are reviewing a proposal. What do you focus on?",
        &[
            opt("A", Te, "Feasibility and cost", "Whether resources, cost, risk and delivery path are clear."),
            opt("B", Ti, "Definitions and consistency", "Whether concepts are rigorous and the reasoning has no holes."),
            opt("C", Fe, "Collaboration and impact", "Its effect on teamwork, customers, relationships and morale."),
            opt("D", Fi, "Values and sincerity", "Whether it conflicts with your values or would feel wrong to do."),
        ],
    ),
    Question::situational(
        "j203",
        "A colleague pins the blame on you and you are annoyed. How do you handle it?",
        &[
            opt("A", Te, "Establish the facts", "Write down facts, process and responsibilities so the issue can be fixed."),
            opt("B", Ti, "Expose the flaw", "Point out the holes in their account and bring it back to logic."),
            opt("C", Fe, "Protect the relationship", "Calm things down in public and talk it out privately."),
            opt("D", Fi, "State your limit", "Say clearly what you won't accept and choose by your values."),
        ],
    ),
    Question::situational(
        "j204",
        "Making an important choice about career, partnership or a relationship, what do you rely on?",
        &[
            opt("A", Te, "Outcome and path", "Which route best reaches the goal and whether it is controllable."),
            opt("B", Ti, "Principle and coherence", "Whether it fits your model of the world and the reasoning holds."),
            opt("C", Fe, "People and climate", "Its effect on others and whether it builds lasting agreement."),
            opt("D", Fi, "Inner values", "Whether you can live with it and it meets your own standards."),
        ],
    ),
    Question::situational(
        "j205",
        "A friend comes to you in emotional crisis. What is your natural response?",
        &[
            opt("A", Te, "Solve the problem", "Break the problem down and give a workable next step."),
            opt("B", Ti, "Find the cause", "Ask what happened and help them straighten out the chain of events."),
            opt("C", Fe, "Empathise and stay", "Help them feel understood and soothed so the feeling can settle."),
            opt("D", Fi, "Respect their feelings", "Honour their feelings and pace without deciding for them."),
        ],
    ),
    Question::situational(
        "j206",
        "Writing something important such as a report, article or speech, what do you care about?",
        &[
            opt("A", Te, "Conclusion and action", "A clear conclusion that drives decisions and action."),
            opt("B", Ti, "Logic and precision", "Rigorous argument and exact definitions nobody can pick apart."),
            opt("C", Fe, "The audience", "Whether listeners can follow and the rhythm feels comfortable."),
            opt("D", Fi, "Authenticity", "Whether it is genuine and true to your inner values."),
        ],
    ),
    Question::situational(
        "j207",
        "You hit an unreasonable rule or process. What do you do?",
        &[
            opt("A", Te, "Make it work", "Get the process running first, then improve it step by step."),
            opt("B", Ti, "Question its basis", "Ask why it exists and point out where the logic is inconsistent."),
            opt("C", Fe, "Weigh relationship cost", "Consider whether pushing a change would hurt relationships, then pick your moment."),
            opt("D", Fi, "Take a values stand", "If it crosses your values you won't go along with it."),
        ],
    ),
    Question::situational(
        "j208",
        "Which criticism hits you hardest?",
        &[
            opt("A", Te, "You're inefficient", "That you slow things down or aren't results-driven."),
            opt("B", Ti, "You're sloppy", "That your logic doesn't hold or your concepts are muddled."),
            opt("C", Fe, "You're tactless", "That you ignore the setting, hurt people or make them uncomfortable."),
            opt("D", Fi, "You're insincere", "That you betrayed your intentions or didn't stand by your values."),
        ],
    ),
    Question::situational(
        "j209",
        "Fast or right: which sounds most like you?",
        &[
            opt("A", Te, "Ship it", "Get it deliverable first, then iterate."),
            opt("B", Ti, "Explain it", "Get the principle clear first or it hurts more later."),
            opt("C", Fe, "Bring people along", "Make sure the people involved accept it or nothing moves."),
            opt("D", Fi, "Stay true", "Don't violate your own standards, or success won't feel right."),
        ],
    ),
    Question::situational(
        "j210",
        "You are mentoring a newcomer. How do you naturally go about it?",
        &[
            opt("A", Te, "Tasks and standards", "Give clear goals, standards, cadence and reviews."),
            opt("B", Ti, "Principles and frameworks", "Explain the underlying principles so they can reason it out."),
            opt("C", Fe, "Build trust first", "Create safety and a rhythm of communication so they dare to ask and fail."),
            opt("D", Fi, "Respect their motives", "Learn what they care about and align growth with it."),
        ],
    ),
    Question::situational(
        "j211",
        "In a negotiation or argument, what is your usual weapon?",
        &[
            opt("A", Te, "Facts and leverage", "Use data, cost, resources and feasibility to drive the outcome."),
            opt("B", Ti, "Logic and definitions", "Use definitions, reasoning and consistency to take their case apart."),
            opt("C", Fe, "Relationship and consensus", "Use agreement, face and mood to keep things sustainable."),
            opt("D", Fi, "Values and position", "Mark your boundaries so they know why you hold firm."),
        ],
    ),
    Question::situational(
        "j212",
        "When you must make an imperfect decision, what hurts most?",
        &[
            opt("A", Te, "Worse results", "That it will slow things down or stop them getting done."),
            opt("B", Ti, "Unclean logic", "That it is inconsistent and will blow up later."),
            opt("C", Fe, "Damaged relationships", "That it embarrasses people or erodes trust."),
            opt("D", Fi, "Betraying yourself", "That it goes against your values and disappoints you in yourself."),
        ],
    ),
    Question::forced(
        "j301",
        "Travelling or running errands, you are more likely to",
        &[
            opt("A", Se, "Look as you go", "Decide on the spot and reroute when something catches you."),
            opt("B", Si, "Keep your rhythm", "Follow the plan and a familiar pace; steadier and easier."),
        ],
    ),
    Question::forced(
        "j302",
        "Learning a new skill, you rely more on",
        &[
            opt("A", Se, "Practice", "Start practising and iterate quickly on feedback."),
            opt("B", Si, "Steps", "Build the basics step by step and accumulate steadily."),
        ],
    ),
    Question::forced(
        "j303",
        "Which information do you trust more?",
        &[
            opt("A", Se, "Visible now", "Facts and sensations you can check on the spot."),
            opt("B", Si, "Proven over time", "Experience and patterns that have held up repeatedly."),
        ],
    ),
    Question::forced(
        "j304",
        "Facing a last-minute change, you are more likely to",
        &[
            opt("A", Se, "Adapt immediately", "Adjust on the spot and stabilise the situation first."),
            opt("B", Si, "Return to process", "Get back to the established routine, then adjust."),
        ],
    ),
    Question::forced(
        "j305",
        "Which state do you enjoy more?",
        &[
            opt("A", Se, "Fully present", "Physically engaged, attention on what is real."),
            opt("B", Si, "Steady and in control", "A stable rhythm with things going as expected."),
        ],
    ),
    Question::forced(
        "j306",
        "When choosing, you lean towards",
        &[
            opt("A", Se, "Try it and see", "Give it a go and let the result decide the next step."),
            opt("B", Si, "Assess the risk", "Weigh past experience and risk before moving."),
        ],
    ),
    Question::forced(
        "j311",
        "Entering a new field, you are more like",
        &[
            opt("A", Ne, "Branch out", "Spread out the possibilities first, then narrow down."),
            opt("B", Ni, "Converge", "Settle on a directional hypothesis, then add evidence."),
        ],
    ),
    Question::forced(
        "j312",
        "In discussions, you more often",
        &[
            opt("A", Ne, "Offer new angles", "Keep proposing new perspectives and possible routes."),
            opt("B", Ni, "Close in on the thread", "Keep closing in on a more essential explanation."),
        ],
    ),
    Question::forced(
        "j313",
        "Which ability do you trust more?",
        &[
            opt("A", Ne, "Opening options", "Seeing more possibilities and not blocking any road."),
            opt("B", Ni, "Seeing the trajectory", "Seeing trends and endings and setting direction early."),
        ],
    ),
    Question::forced(
        "j314",
        "When you are stuck, what gets you unstuck?",
        &[
            opt("A", Ne, "A new approach", "Change tack and look for a new combination."),
            opt("B", Ni, "Back to the essence", "Return to the heart of the problem and cut the side branches."),
        ],
    ),
    Question::forced(
        "j315",
        "Which content draws you in more?",
        &[
            opt("A", Ne, "Novel and imaginative", "Content that sparks associations and pushes boundaries."),
            opt("B", Ni, "Insight and foresight", "Content that explains trends and points to the essence."),
        ],
    ),
    Question::forced(
        "j316",
        "Facing information overload, you tend to",
        &[
            opt("A", Ne, "Skim widely", "Scan broadly first for inspiration and connections."),
            opt("B", Ni, "Pick one thread", "Choose one line and dig in so the conclusion gets clearer."),
        ],
    ),
    Question::forced(
        "j321",
        "When solving problems, you care more that it",
        &[
            opt("A", Te, "Delivers", "The solution lands and drives results."),
            opt("B", Ti, "Makes sense", "The concepts are rigorous and the reasoning is consistent."),
        ],
    ),
    Question::forced(
        "j322",
        "Which compliment lands harder?",
        &[
            opt("A", Te, "Reliable and efficient", "You got it done, and quickly."),
            opt("B", Ti, "Deep thinker", "Your logic is strong and your views are rigorous."),
        ],
    ),
    Question::forced(
        "j323",
        "Which mess do you hate more?",
        &[
            opt("A", Te, "Execution chaos", "Nobody owns it, no milestones, endless delay."),
            opt("B", Ti, "Conceptual chaos", "Vague definitions and logic that contradicts itself."),
        ],
    ),
    Question::forced(
        "j324",
        "When deciding, you would rather rely on",
        &[
            opt("A", Te, "External standards", "Metrics, cost, return and feasibility."),
            opt("B", Ti, "An internal model", "Principles, definitions and logical consistency."),
        ],
    ),
    Question::forced(
        "j325",
        "Which language do you use more to persuade?",
        &[
            opt("A", Te, "Outcomes", "What results or gains this will bring."),
            opt("B", Ti, "Principles", "Why it holds up logically."),
        ],
    ),
    Question::forced(
        "j326",
        "In a dispute, you lean towards",
        &[
            opt("A", Te, "Moving forward", "Reach a workable agreement first, then iterate."),
            opt("B", Ti, "Precision", "Get the concepts straight before concluding."),
        ],
    ),
    Question::forced(
        "j331",
        "When deciding, what do you weigh first?",
        &[
            opt("A", Fe, "Effect on people", "Whether everyone can accept it and the relationship will last."),
            opt("B", Fi, "Authenticity", "Whether it fits your values and how you truly feel."),
        ],
    ),
    Question::forced(
        "j332",
        "Which would you fear becoming more?",
        &[
            opt("A", Fe, "Someone who embarrasses others", "Making things awkward, hurting relationships, spoiling the mood."),
            opt("B", Fi, "Someone who sold out", "Going against your values just to please others."),
        ],
    ),
    Question::forced(
        "j333",
        "Which working atmosphere do you prefer?",
        &[
            opt("A", Fe, "Smooth collaboration", "People look out for each other and communication flows."),
            opt("B", Fi, "Shared values", "Aligned goals and values, never doing things against conscience."),
        ],
    ),
    Question::forced(
        "j334",
        "How do you usually disagree?",
        &[
            opt("A", Fe, "Tactfully", "Align on feelings and position first, then raise the difference."),
            opt("B", Fi, "Directly", "Say plainly what you care about and what you won't accept."),
        ],
    ),
    Question::forced(
        "j335",
        "Which content moves you more?",
        &[
            opt("A", Fe, "Collective resonance", "Content that makes many people feel something together."),
            opt("B", Fi, "Personal truth", "Deeply private, honest expression true to oneself."),
        ],
    ),
    Question::forced(
        "j336",
        "When people misunderstand you, what hurts more?",
        &[
            opt("A", Fe, "A broken connection", "That the misunderstanding damages the relationship or teamwork."),
            opt("B", Fi, "A denied self", "That your values and authenticity are being dismissed."),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::bank::{ItemShape, QuestionKind};

    #[test]
    fn opposites_are_involutions_within_a_kind() {
        for function in CognitiveFunction::ordered() {
            let opposite = function.opposite();
            assert_ne!(opposite, function);
            assert_eq!(opposite.opposite(), function);
            assert_eq!(opposite.kind(), function.kind());
            assert_ne!(opposite.attitude(), function.attitude());
        }
    }

    #[test]
    fn bank_has_expected_item_mix() {
        let bank = bank();
        let count = |kind| bank.questions.iter().filter(|q| q.kind() == kind).count();
        assert_eq!(bank.len(), 64);
        assert_eq!(count(QuestionKind::Calibration), 16);
        assert_eq!(count(QuestionKind::Situational), 24);
        assert_eq!(count(QuestionKind::Forced), 24);
    }

    #[test]
    fn each_function_has_one_plain_and_one_reversed_calibration_item() {
        for function in CognitiveFunction::ordered() {
            let keyed: Vec<bool> = bank()
                .calibration_items()
                .filter_map(|question| match question.shape {
                    ItemShape::Calibration {
                        category,
                        reverse_keyed,
                    } if category == function => Some(reverse_keyed),
                    _ => None,
                })
                .collect();
            assert_eq!(keyed, vec![false, true], "{function:?}");
        }
    }

    #[test]
    fn forced_items_pit_opposites_against_each_other() {
        for question in bank().questions {
            if question.kind() == QuestionKind::Forced {
                let options = question.options();
                assert_eq!(options[0].id, "A");
                assert_eq!(options[1].category, options[0].category.opposite());
            }
        }
    }
}
