use surgicode_core::models::{Category, Placement, Step, Tutorial};

pub fn tutorial() -> Tutorial {
    Tutorial {
        id: "favorites-and-templates".to_string(),
        title: "Favorites and case templates".to_string(),
        description: "Save time on procedures you perform often.".to_string(),
        category: Category::Advanced,
        estimated_minutes: 3,
        steps: vec![
            Step::new(
                "favorite-codes",
                "Favorite codes",
                "Star a code in search results to pin it.",
            )
            .targeting("[data-tour='favorite-star']", Placement::Right),
            Step::new(
                "case-templates",
                "Templates",
                "Turn a saved case into a template with its codes pre-filled.",
            )
            .targeting("[data-tour='save-template']", Placement::Bottom)
            .with_tips(["Templates never copy dates or facility."]),
            Step::new(
                "bulk-edit",
                "Bulk edit",
                "Select several cases to change facility or role at once.",
            ),
        ],
        prerequisites: vec!["case-logging".to_string()],
    }
}
