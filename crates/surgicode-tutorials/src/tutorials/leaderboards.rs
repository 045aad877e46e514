use surgicode_core::models::{Category, Placement, Step, Tutorial};

pub fn tutorial() -> Tutorial {
    Tutorial {
        id: "leaderboards".to_string(),
        title: "Leaderboards and friends".to_string(),
        description: "Achievements, friend groups and friendly competition.".to_string(),
        category: Category::Advanced,
        estimated_minutes: 3,
        steps: vec![
            Step::new(
                "leaderboard",
                "Leaderboard",
                "Rank by case count or RVUs within your program.",
            )
            .targeting("[data-tour='leaderboard']", Placement::Bottom),
            Step::new(
                "achievements",
                "Achievements",
                "Badges unlock as you hit logging milestones.",
            )
            .targeting("[data-tour='achievements']", Placement::Top),
            Step::new(
                "friend-groups",
                "Friend groups",
                "Invite co-residents to a private group with its own board.",
            )
            .with_callout("Only totals are shared, never case details."),
        ],
        prerequisites: Vec::new(),
    }
}
