use surgicode_core::models::{Category, Placement, Step, Tutorial};

pub fn tutorial() -> Tutorial {
    Tutorial {
        id: "code-search".to_string(),
        title: "Finding the right CPT code".to_string(),
        description: "Describe a procedure in plain language and review suggested codes."
            .to_string(),
        category: Category::Basics,
        estimated_minutes: 4,
        steps: vec![
            Step::new(
                "describe-procedure",
                "Describe the procedure",
                "Type what you did the way you would dictate it, for example \
                 \"laparoscopic cholecystectomy with cholangiogram\".",
            )
            .targeting("[data-tour='search-input']", Placement::Bottom)
            .with_tips(["Include approach and laterality when they matter."]),
            Step::new(
                "review-suggestions",
                "Review suggestions",
                "Each suggestion shows the code, its descriptor and the work RVU.",
            )
            .targeting("[data-tour='search-results']", Placement::Top),
            Step::new(
                "modifiers",
                "Modifiers",
                "Add modifiers such as -50 or -59 where the documentation supports them.",
            )
            .with_callout("Modifiers change reimbursement. Check payer rules."),
            Step::new(
                "add-to-case",
                "Add to a case",
                "Send selected codes straight into a new or existing case.",
            )
            .targeting("[data-tour='add-to-case']", Placement::Left),
        ],
        prerequisites: vec!["basics".to_string()],
    }
}
