use surgicode_core::models::{Category, Placement, Step, Tutorial};

pub fn tutorial() -> Tutorial {
    Tutorial {
        id: "case-logging".to_string(),
        title: "Logging a case".to_string(),
        description: "Create a case, attach codes and check its RVU value.".to_string(),
        category: Category::Workflow,
        estimated_minutes: 5,
        steps: vec![
            Step::new("new-case", "Start a case", "Open a blank case from the Cases page.")
                .targeting("[data-tour='new-case']", Placement::Bottom),
            Step::new(
                "procedure-details",
                "Procedure details",
                "Record the date, facility and your role. Patient identifiers are never \
                 required.",
            )
            .targeting("[data-tour='case-form']", Placement::Right)
            .with_tips(["Dates default to today."]),
            Step::new(
                "attach-codes",
                "Attach codes",
                "Search inline or pick from your favorites to attach CPT codes.",
            )
            .targeting("[data-tour='case-codes']", Placement::Top),
            Step::new(
                "rvu-summary",
                "RVU summary",
                "The case total adds up work RVUs across all attached codes.",
            )
            .targeting("[data-tour='rvu-total']", Placement::Left)
            .with_callout("Multiple-procedure reductions are not applied here."),
            Step::new(
                "save-case",
                "Save",
                "Saving adds the case to your log and your dashboard totals.",
            )
            .targeting("[data-tour='save-case']", Placement::Top),
        ],
        prerequisites: vec!["basics".to_string()],
    }
}
