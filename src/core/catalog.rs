//! # Built-in Catalog
//!
//! The course shipped with the binary: a grade-5 media-literacy unit on
//! deconstructing "green" marketing claims. Plain data construction, no
//! logic — `--course <file.json>` swaps in a different course without
//! touching this module.

use crate::core::content::{
    Course, Highlight, Lesson, PathStep, RenderableBlock, Resources, SelfStudy, Step,
};

/// Build the built-in course. Infallible by construction; `main` still
/// runs [`Course::validate`] on it like any other course source.
pub fn builtin_course() -> Course {
    Course {
        title: "Green for Real | Deconstructing Green Myths".to_string(),
        subtitle: "Grade 5 media literacy × consumer decisions × sustainability".to_string(),
        tags: vec![
            "Media literacy".to_string(),
            "Social studies / sustainability".to_string(),
            "Consumer choices".to_string(),
            "Anti-greenwashing".to_string(),
            "Group inquiry".to_string(),
        ],
        highlights: vec![
            Highlight {
                title: "Core idea".to_string(),
                description: "Break the myth that an eco label means a product is \
                              actually eco-friendly. Students learn to spot claims, \
                              check them against information, and make more deliberate \
                              consumer choices."
                    .to_string(),
            },
            Highlight {
                title: "Design origin".to_string(),
                description: "Starts from students' everyday life: treat every purchase \
                              as a choice, connect it to resource use and environmental \
                              impact, and practice thinking one step further."
                    .to_string(),
            },
            Highlight {
                title: "Competency goals".to_string(),
                description: "Understand how consumer choices relate to environmental \
                              impact, compare claims against data, and try changing one \
                              purchase while being able to explain why."
                    .to_string(),
            },
        ],
        path: vec![
            PathStep {
                title: "Personal choice".to_string(),
                badge: "start from daily life".to_string(),
                description: "A small everyday spending scenario: what would you do with \
                              pocket change on the way home?"
                    .to_string(),
            },
            PathStep {
                title: "Habit reflection".to_string(),
                badge: "needs vs. wants".to_string(),
                description: "Look back at the spending moments in your own day or week."
                    .to_string(),
            },
            PathStep {
                title: "System link".to_string(),
                badge: "a choice is a vote".to_string(),
                description: "Three purchase cards: which way of producing and living \
                              does each one support?"
                    .to_string(),
            },
            PathStep {
                title: "Trade-off analysis".to_string(),
                badge: "money × sustainability".to_string(),
                description: "Put a choice on a balance scale: personal benefit on one \
                              side, environmental impact on the other."
                    .to_string(),
            },
            PathStep {
                title: "Myth busting".to_string(),
                badge: "claims vs. data".to_string(),
                description: "The paper straw case: why is it called eco-friendly, and \
                              which angles does that claim leave out?"
                    .to_string(),
            },
            PathStep {
                title: "Taking action".to_string(),
                badge: "one small change".to_string(),
                description: "Design one feasible small action and be able to explain \
                              the reasoning behind it."
                    .to_string(),
            },
        ],
        lessons: vec![lesson_one(), lesson_two()],
        self_study: self_study(),
        resources: Resources {
            title: "Teaching resources".to_string(),
            subtitle: "Put worksheets, slides, and reading material behind a cloud link \
                       and offer it here as a QR code. No real assets in this preview."
                .to_string(),
        },
    }
}

fn lesson_one() -> Lesson {
    Lesson {
        id: "l1".to_string(),
        title: "Lesson 1 | How spending connects to the environment".to_string(),
        meta: "40 min | warm-up 5 / development 30 / wrap-up 5".to_string(),
        subtitle: "Turn 'spending money' into a choice worth thinking about: needs, \
                   convenience, preference, and environmental impact."
            .to_string(),
        content: RenderableBlock::Stack {
            children: vec![
                RenderableBlock::Columns {
                    columns: vec![
                        RenderableBlock::Card {
                            title: "Warm-up (about 5 min)".to_string(),
                            body: vec![
                                RenderableBlock::Labeled {
                                    label: "Scenario prompt".to_string(),
                                    text: "You have a little pocket money on the way home \
                                           from school. How do you use it?"
                                        .to_string(),
                                },
                                RenderableBlock::List {
                                    items: vec![
                                        "Drinks or snacks".to_string(),
                                        "Stationery or small items".to_string(),
                                        "Spend nothing and save it".to_string(),
                                    ],
                                },
                                RenderableBlock::Text {
                                    text: "Uses a small everyday amount so no prior \
                                           big-purchase experience is assumed."
                                        .to_string(),
                                },
                            ],
                        },
                        RenderableBlock::Card {
                            title: "Wrap-up (about 5 min)".to_string(),
                            body: vec![
                                RenderableBlock::Labeled {
                                    label: "One-sentence close".to_string(),
                                    text: "\"I realized spending money isn't just buying \
                                           things — it's also ____.\""
                                        .to_string(),
                                },
                                RenderableBlock::Text {
                                    text: "Teacher sums up: how we spend is what way of \
                                           living we support."
                                        .to_string(),
                                },
                            ],
                        },
                    ],
                },
                RenderableBlock::Card {
                    title: "Development (about 30 min)".to_string(),
                    body: vec![
                        RenderableBlock::Card {
                            title: "Activity 1 | My small purchases in a day".to_string(),
                            body: vec![
                                RenderableBlock::Text {
                                    text: "Mark the moments in a day when money might be \
                                           spent, then judge each as a need or a want."
                                        .to_string(),
                                },
                                RenderableBlock::List {
                                    items: vec![
                                        "If you didn't buy it, would life be affected?"
                                            .to_string(),
                                        "Is it convenience, trend, or a real need?"
                                            .to_string(),
                                    ],
                                },
                            ],
                        },
                        RenderableBlock::Card {
                            title: "Activity 2 | Three purchase cards: who do you support?"
                                .to_string(),
                            body: vec![
                                RenderableBlock::Text {
                                    text: "Groups discuss three cards, pick one, and give \
                                           their reasons."
                                        .to_string(),
                                },
                                RenderableBlock::List {
                                    items: vec![
                                        "Single-use: cheap and convenient".to_string(),
                                        "Reusable: takes a bit more thought".to_string(),
                                        "Not buying: keep the money".to_string(),
                                    ],
                                },
                            ],
                        },
                        RenderableBlock::Card {
                            title: "Activity 3 | The money × sustainability scale".to_string(),
                            body: vec![
                                RenderableBlock::Text {
                                    text: "Put the choice on a balance scale: yourself on \
                                           the left (convenience, price, preference), the \
                                           environment on the right (resources, waste, \
                                           energy)."
                                        .to_string(),
                                },
                                RenderableBlock::Text {
                                    text: "No standard answer — the practice is saying \
                                           \"here is why I chose this\"."
                                        .to_string(),
                                },
                            ],
                        },
                    ],
                },
            ],
        },
    }
}

fn lesson_two() -> Lesson {
    Lesson {
        id: "l2".to_string(),
        title: "Lesson 2 | Is the green claim true? (the paper straw case)".to_string(),
        meta: "40 min | warm-up 5 / development 30 / wrap-up 5".to_string(),
        subtitle: "Not a paper-vs-plastic showdown: practice taking a claim apart and \
                   finding the angles it leaves out."
            .to_string(),
        content: RenderableBlock::Stack {
            children: vec![
                RenderableBlock::Columns {
                    columns: vec![
                        RenderableBlock::Card {
                            title: "Warm-up (about 5 min)".to_string(),
                            body: vec![
                                RenderableBlock::Labeled {
                                    label: "Experience prompt".to_string(),
                                    text: "Have you seen a shop say \"we switched to paper \
                                           straws for the environment\"?"
                                        .to_string(),
                                },
                                RenderableBlock::Text {
                                    text: "Follow up: why is it called eco-friendly, and \
                                           do we have the full picture?"
                                        .to_string(),
                                },
                            ],
                        },
                        RenderableBlock::Card {
                            title: "Wrap-up (about 5 min)".to_string(),
                            body: vec![
                                RenderableBlock::Labeled {
                                    label: "Media-literacy one-liner".to_string(),
                                    text: "\"To judge whether something is green, one \
                                           statement isn't enough — you have to look at \
                                           ____.\""
                                        .to_string(),
                                },
                                RenderableBlock::Text {
                                    text: "Teacher closes: ads give reasons that look \
                                           good; we learn to think one step further."
                                        .to_string(),
                                },
                            ],
                        },
                    ],
                },
                RenderableBlock::Card {
                    title: "Development (about 30 min)".to_string(),
                    body: vec![
                        RenderableBlock::Card {
                            title: "Activity 1 | Match claim cards to information cards"
                                .to_string(),
                            body: vec![
                                RenderableBlock::Text {
                                    text: "Groups pair claims with information and find \
                                           the ones that only tell half the story."
                                        .to_string(),
                                },
                                RenderableBlock::List {
                                    items: vec![
                                        "Claim: made of paper, biodegradable".to_string(),
                                        "Information: needs a waterproof coating, breaks \
                                         easily, still costs energy"
                                            .to_string(),
                                    ],
                                },
                            ],
                        },
                        RenderableBlock::Card {
                            title: "Activity 2 | The life of one straw".to_string(),
                            body: vec![
                                RenderableBlock::Text {
                                    text: "Trace manufacture, packaging, use, and disposal, \
                                           and keep asking: what did we miss?"
                                        .to_string(),
                                },
                                RenderableBlock::List {
                                    items: vec![
                                        "If it breaks quickly, how many do you take?"
                                            .to_string(),
                                        "Used once and thrown away — where does it end up?"
                                            .to_string(),
                                    ],
                                },
                            ],
                        },
                        RenderableBlock::Card {
                            title: "Activity 3 | Comparing is not picking a side".to_string(),
                            body: vec![
                                RenderableBlock::Text {
                                    text: "The class lists the problems plastic straws \
                                           cause and the problems paper straws solve or \
                                           add — many angles, not either-or."
                                        .to_string(),
                                },
                                RenderableBlock::Text {
                                    text: "Goal: students can explain their judgment, not \
                                           recite an answer."
                                        .to_string(),
                                },
                            ],
                        },
                    ],
                },
            ],
        },
    }
}

fn self_study() -> SelfStudy {
    SelfStudy {
        title: "Self-study route | walking the deconstruction loop alone".to_string(),
        subtitle: "The classroom activities as a solo task route: read the claim, find \
                   evidence, fill the gaps, draw a (provisional) conclusion, take a \
                   small action."
            .to_string(),
        steps: vec![
            Step {
                title: "Step 1 | Pick a green claim".to_string(),
                badge: "5-8 min".to_string(),
                points: vec![
                    "Choose a product or slogan marketed as eco-friendly — a drink shop, \
                     stationery, a household item."
                        .to_string(),
                    "Write the claim down: what exactly does it say? (biodegradable, less \
                     plastic, ocean-friendly...)"
                        .to_string(),
                ],
            },
            Step {
                title: "Step 2 | Turn the claim into checkable questions".to_string(),
                badge: "8-10 min".to_string(),
                points: vec![
                    "What evidence would this claim need?".to_string(),
                    "Which part of the story might it be telling — manufacture, transport, \
                     use, or disposal?"
                        .to_string(),
                ],
            },
            Step {
                title: "Step 3 | Read the information cards".to_string(),
                badge: "10-12 min".to_string(),
                points: vec![
                    "Read two or three cards of facts, figures, or short explanations."
                        .to_string(),
                    "Mark each as supporting the claim or complicating it.".to_string(),
                ],
            },
            Step {
                title: "Step 4 | Draw a provisional conclusion".to_string(),
                badge: "5-8 min".to_string(),
                points: vec![
                    "Use the sentence frame: \"For now I think ____, because ____; but I \
                     still want to know ____.\""
                        .to_string(),
                    "Avoid absolutes — conclusions come with conditions, not black and \
                     white."
                        .to_string(),
                ],
            },
            Step {
                title: "Step 5 | A small, trackable action".to_string(),
                badge: "5-8 min".to_string(),
                points: vec![
                    "Pick one change you can actually make: buy once less a week, switch \
                     to reusable, or don't buy at all."
                        .to_string(),
                    "Write down: what will I do, for how long, and how will I know I did \
                     it?"
                        .to_string(),
                ],
            },
        ],
        deliverables: vec![
            "A claim-deconstruction card (the claim plus its checkable questions)"
                .to_string(),
            "A provisional-conclusion paragraph (including what I still want to know)"
                .to_string(),
            "A trackable one-week action plan".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_course_is_valid() {
        let course = builtin_course();
        assert!(course.validate().is_ok());
    }

    #[test]
    fn test_builtin_course_shape() {
        let course = builtin_course();
        assert_eq!(course.highlights.len(), 3);
        assert_eq!(course.path.len(), 6);
        assert_eq!(course.lessons.len(), 2);
        assert_eq!(course.self_study.steps.len(), 5);
        assert_eq!(course.self_study.deliverables.len(), 3);
        assert_eq!(course.lessons[0].id, "l1");
        assert_eq!(course.lessons[1].id, "l2");
    }

    #[test]
    fn test_builtin_course_round_trips_as_json() {
        // The built-in catalog doubles as the reference course file format.
        let course = builtin_course();
        let json = serde_json::to_string_pretty(&course).unwrap();
        let parsed = crate::core::content::Course::from_json(&json).unwrap();
        assert_eq!(parsed, course);
    }
}
