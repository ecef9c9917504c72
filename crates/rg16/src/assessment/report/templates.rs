use super::Band;
use crate::assessment::bank::{CognitiveFunction, Trait};

/// Reality and blind-spot lines for one function at one band.
pub(crate) struct FunctionLines {
    pub reality: &'static [&'static str],
    pub blind_spots: &'static [&'static str],
}

pub(crate) fn trait_read(trait_id: Trait, band: Band) -> &'static str {
    match (trait_id, band) {
        (Trait::Neuroticism, Band::High) => "You are more prone to tension, worry or mood swings and benefit from explicit recovery strategies.",
        (Trait::Neuroticism, Band::Low) => "You are steadier overall and handle pressure well, though you may overlook emotional signals.",
        (Trait::Neuroticism, Band::Mid) => "You wobble under pressure but usually return to a stable range.",
        (Trait::Extraversion, Band::High) => "You draw energy from interaction and are keen to speak up and push things forward.",
        (Trait::Extraversion, Band::Low) => "You process inwardly, need solitude to recover, and feel intense socialising more sharply.",
        (Trait::Extraversion, Band::Mid) => "You balance company and solitude and switch between them as the setting requires.",
        (Trait::Openness, Band::High) => "New ideas and experiences drive you; you enjoy exploring and rebuilding.",
        (Trait::Openness, Band::Low) => "You prefer practical, familiar paths and value stability, predictability and delivery.",
        (Trait::Openness, Band::Mid) => "You can explore and also land things: open on demand.",
        (Trait::Agreeableness, Band::High) => "You weigh relationships and others' feelings and lean towards repair in conflict.",
        (Trait::Agreeableness, Band::Low) => "You are direct and value standards and boundaries, though you can come across as hard.",
        (Trait::Agreeableness, Band::Mid) => "You move between empathy and principle depending on the situation.",
        (Trait::Conscientiousness, Band::High) => "You are self-disciplined, drive goals forward and like to bring things into a controllable structure.",
        (Trait::Conscientiousness, Band::Low) => "You are spontaneous and flexible but may lose out on long projects and compounding habits.",
        (Trait::Conscientiousness, Band::Mid) => "You combine drive with flexibility and can build structure when you need it.",
    }
}

pub(crate) fn aspect_read(band: Band) -> &'static str {
    match band {
        Band::High => "This looks like a stable strength: you reach for it naturally to solve problems.",
        Band::Low => "This looks like a rarely used capacity: it needs outside structure or clear motivation to engage.",
        Band::Mid => "This looks like an adjustable zone: you move between the two ends as situations change.",
    }
}

pub(crate) fn function_lines(function: CognitiveFunction, band: Band) -> FunctionLines {
    use CognitiveFunction::*;

    match (function, band) {
        (Se, Band::High) => FunctionLines {
            reality: &[
                "You trust what is visible right now: look at the scene, act first, get feedback.",
                "Change makes you sharper: you react fast and catch windows of opportunity.",
                "Talk with no testable action feels like wasted time to you.",
            ],
            blind_spots: &[
                "Immediate stimulus can set your pace: chasing what works now may hide long-term costs.",
                "In a noisy environment it can be harder to hear what you really want.",
            ],
        },
        (Se, Band::Low) => FunctionLines {
            reality: &[
                "You rely less on being on the scene: you think it through or study the structure before moving.",
                "Last-minute changes bother you more; you prefer predictable rhythm and preparation.",
                "You are better at running a scenario in your head before acting.",
            ],
            blind_spots: &[
                "You may miss chances where simply trying would answer the question, turning testable issues into imagined ones.",
                "When a quick response is needed you can feel pushed and get irritated.",
            ],
        },
        (Se, Band::Mid) => FunctionLines {
            reality: &[
                "You switch between preparing and acting: hands-on when needed, observant when needed.",
                "You value what can be verified and calibrate judgement with real feedback.",
                "You dislike pure talk but don't charge in blindly either.",
            ],
            blind_spots: &[
                "Under heavy pressure you may swing briefly between procrastination and impulsiveness.",
            ],
        },
        (Si, Band::High) => FunctionLines {
            reality: &[
                "You trust what has proven reliable: experience, process and steady rhythm reassure you.",
                "You are sensitive to detail and habit and notice quickly when something differs from before.",
                "You make things stable: reviewing, consolidating and reusing them into lasting systems.",
            ],
            blind_spots: &[
                "New ways of working take you longer to warm to; you want solid evidence before taking risks.",
                "You may treat what worked before as what will work next and react slowly at turning points.",
            ],
        },
        (Si, Band::Low) => FunctionLines {
            reality: &[
                "You don't like being bound by the past and would rather start over or try another way.",
                "Your tolerance for fixed routine is low; repetition and drills can irritate you.",
                "You rely on present or future signals more than on history.",
            ],
            blind_spots: &[
                "You may underrate infrastructure: steady rhythm and consolidation decide long-term compounding.",
                "You can treat avoidable pitfalls as something you must step into yourself once.",
            ],
        },
        (Si, Band::Mid) => FunctionLines {
            reality: &[
                "You return to experience and process when needed without being tied to them.",
                "You can reuse the past and also update your approach when necessary.",
            ],
            blind_spots: &[
                "When things change fast you may hesitate between holding steady and updating.",
            ],
        },
        (Ne, Band::High) => FunctionLines {
            reality: &[
                "You see a road network rather than one road and list several options naturally.",
                "You connect unrelated points into new approaches and insights.",
                "Open discussion makes you stronger; brainstorming clears your head.",
            ],
            blind_spots: &[
                "Too many possibilities: without a way to converge you may keep switching direction.",
                "You may underestimate execution cost and assume trying it will solve everything.",
            ],
        },
        (Ne, Band::Low) => FunctionLines {
            reality: &[
                "You dislike branching out and prefer to fix a direction early and go deep.",
                "You care about consistency and a main thread and have less patience for open-ended talk.",
                "You are better at doing one thing thoroughly than opening many threads at once.",
            ],
            blind_spots: &[
                "You may miss alternative routes; when the main path fails, practise preparing a few more.",
            ],
        },
        (Ne, Band::Mid) => FunctionLines {
            reality: &[
                "You can diverge and converge: offer alternatives and settle on a direction when needed.",
            ],
            blind_spots: &[
                "Under high uncertainty you may keep wondering whether you have explored enough.",
            ],
        },
        (Ni, Band::High) => FunctionLines {
            reality: &[
                "You focus on where things ultimately point, distilling themes and trends into an inner judgement.",
                "You converge well: however messy the information, you close in on the key variable.",
                "You have moments of sudden understanding, as if fragments snapped into a picture.",
            ],
            blind_spots: &[
                "You may converge too early, settling before there is enough evidence and missing real feedback.",
                "Asked to explain your process, you may feel you simply know without being able to say why.",
            ],
        },
        (Ni, Band::Low) => FunctionLines {
            reality: &[
                "You rely less on insight and more on step-by-step trials or laying information out for discussion.",
                "You prefer visible evidence and repeatable process to a feeling about the future.",
            ],
            blind_spots: &[
                "You may underrate trend and direction: hard work costs more when the direction is off.",
            ],
        },
        (Ni, Band::Mid) => FunctionLines {
            reality: &[
                "You can distil the main thread when needed while keeping some openness.",
            ],
            blind_spots: &[
                "Under stress you may suddenly become stubborn and accept only one explanation.",
            ],
        },
        (Te, Band::High) => FunctionLines {
            reality: &[
                "You look first at how to get it done: goals, metrics, path, resources, cadence.",
                "You turn chaos into execution by defining ownership, splitting tasks and setting milestones.",
                "You let results speak; delivering matters more than persuading.",
            ],
            blind_spots: &[
                "You can seem forceful or results-only and overlook people's emotional cost and long-term trust.",
                "When the model is incomplete you may suppress uncertainty with process and explore less.",
            ],
        },
        (Te, Band::Low) => FunctionLines {
            reality: &[
                "External efficiency standards don't drive you; logic, values or relationships matter more.",
                "You may be wary of processes and metrics that flatten what is real and complex.",
            ],
            blind_spots: &[
                "Long-term delivery can suffer: without cadence and milestones, things slide to the last minute.",
            ],
        },
        (Te, Band::Mid) => FunctionLines {
            reality: &[
                "You can drive with goals and structure when needed while leaving room for thinking and people.",
            ],
            blind_spots: &[
                "In highly uncertain settings you may hesitate over whether to impose structure right away.",
            ],
        },
        (Ti, Band::High) => FunctionLines {
            reality: &[
                "You need things to make sense: definitions, boundaries and chains of reasoning must be clean.",
                "You build an internal model first so every detail fits one logic.",
                "Authority alone doesn't sway you; you trust the logic itself.",
            ],
            blind_spots: &[
                "You can get stuck on precision and hold off acting until it is fully explained.",
                "When others are emotional you may correct errors first, and they feel you didn't meet their feelings.",
            ],
        },
        (Ti, Band::Low) => FunctionLines {
            reality: &[
                "Conceptual precision matters less to you than progress, values or smooth relationships.",
                "You move into action or alignment faster instead of reasoning it over and over.",
            ],
            blind_spots: &[
                "In complex systems you may fall into logic traps; vague definitions cause bigger rework later.",
            ],
        },
        (Ti, Band::Mid) => FunctionLines {
            reality: &["You can clean up the logic when needed without getting carried away."],
            blind_spots: &[
                "In heated disputes you may be forced to choose between precision and progress.",
            ],
        },
        (Fe, Band::High) => FunctionLines {
            reality: &[
                "You care whether the room is in tune: mood, feelings and relationship cost shape your judgement.",
                "You align people so those with different positions keep working together.",
                "You adjust how you speak so others can take in your message.",
            ],
            blind_spots: &[
                "You may over-accommodate, pushing your needs back until you suddenly burst or burn out.",
                "You may delay conflict to keep the peace and let problems pile up.",
            ],
        },
        (Fe, Band::Low) => FunctionLines {
            reality: &[
                "Atmosphere doesn't drive you; you state conclusions and value clarity.",
                "You have little patience for managing appearances and prefer making relationship costs explicit.",
            ],
            blind_spots: &[
                "You may hurt people unintentionally: you state facts, they hear judgement.",
            ],
        },
        (Fe, Band::Mid) => FunctionLines {
            reality: &[
                "You balance relationships and facts: you look after people when it matters and stay clear.",
            ],
            blind_spots: &[
                "When tired you may suddenly withdraw from socialising, which others read as coldness.",
            ],
        },
        (Fi, Band::High) => FunctionLines {
            reality: &[
                "You check decisions against inner values first: authenticity, meaning and boundaries matter.",
                "You are hard to assimilate: even unseen, you hold to what matters to you.",
                "You are sensitive to acting against conscience and lose motivation quickly when values are crossed.",
            ],
            blind_spots: &[
                "You can seem hard to negotiate with once you see a values conflict.",
                "When asked to explain, you may only want to say it just doesn't feel right.",
            ],
        },
        (Fi, Band::Low) => FunctionLines {
            reality: &[
                "Personal values don't come first; you weigh external standards or collaboration more.",
                "You may be better at choosing what serves the whole than what feels right to you.",
            ],
            blind_spots: &[
                "You may neglect your own truth; suppressing feelings for long leads to exhaustion or sudden disconnection.",
            ],
        },
        (Fi, Band::Mid) => FunctionLines {
            reality: &[
                "You move between values and cooperation: firm when it counts, flexible when it helps.",
            ],
            blind_spots: &[
                "In prolonged conflict you may enter a phase of asking what you really want.",
            ],
        },
    }
}
