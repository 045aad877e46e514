use surgicode_core::models::{Category, Placement, Step, Tutorial};

/// First-run orientation: the dashboard and how to get around.
pub fn tutorial() -> Tutorial {
    Tutorial {
        id: "basics".to_string(),
        title: "Welcome to SurgiCode".to_string(),
        description: "A quick tour of the dashboard and the main navigation.".to_string(),
        category: Category::Basics,
        estimated_minutes: 3,
        steps: vec![
            Step::new(
                "welcome",
                "Welcome",
                "SurgiCode turns your operative notes into billable CPT codes and keeps \
                 your case log in one place.",
            )
            .targeting("body", Placement::Center),
            Step::new(
                "dashboard",
                "Your dashboard",
                "Recent cases, this month's RVU total and your resident requirements \
                 live on the dashboard.",
            )
            .targeting("[data-tour='dashboard-stats']", Placement::Bottom)
            .with_tips(["Totals update as soon as a case is saved."]),
            Step::new(
                "navigation",
                "Getting around",
                "Use the sidebar to switch between Cases, Code Search, Resident Log \
                 and Analytics.",
            )
            .targeting("[data-tour='sidebar']", Placement::Right),
            Step::new(
                "quick-actions",
                "Quick actions",
                "Start a new case or search for a code from anywhere.",
            )
            .targeting("[data-tour='quick-actions']", Placement::Left)
            .with_callout("Press N to start a new case.")
            .with_tips([
                "Quick actions stay pinned while you scroll.",
                "You can replay any tutorial from Settings.",
            ]),
        ],
        prerequisites: Vec::new(),
    }
}
