use surgicode_core::models::{Category, Placement, Step, Tutorial};

pub fn tutorial() -> Tutorial {
    Tutorial {
        id: "resident-tracking".to_string(),
        title: "Tracking training requirements".to_string(),
        description: "See how your logged cases count toward case minimums.".to_string(),
        category: Category::Workflow,
        estimated_minutes: 4,
        steps: vec![
            Step::new(
                "requirements-overview",
                "Requirements",
                "Your program's case minimums are listed by defined category.",
            )
            .targeting("[data-tour='requirements']", Placement::Bottom),
            Step::new(
                "category-progress",
                "Progress by category",
                "Bars fill as cases are credited to each category.",
            )
            .targeting("[data-tour='category-bars']", Placement::Right)
            .with_tips(["Surgeon chief and surgeon junior roles count separately."]),
            Step::new(
                "log-from-case",
                "Credit a case",
                "Any saved case can be credited from its detail page.",
            ),
            Step::new(
                "export-log",
                "Export",
                "Download your log for program review.",
            )
            .targeting("[data-tour='export-log']", Placement::Left),
        ],
        prerequisites: vec!["case-logging".to_string()],
    }
}
