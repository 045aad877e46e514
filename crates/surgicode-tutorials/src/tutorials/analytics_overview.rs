use surgicode_core::models::{Category, Placement, Step, Tutorial};

pub fn tutorial() -> Tutorial {
    Tutorial {
        id: "analytics-overview".to_string(),
        title: "Reading your analytics".to_string(),
        description: "Trends, case mix and how you compare with peers.".to_string(),
        category: Category::Analytics,
        estimated_minutes: 4,
        steps: vec![
            Step::new(
                "rvu-trends",
                "RVU trends",
                "Monthly work RVUs with a rolling average.",
            )
            .targeting("[data-tour='rvu-chart']", Placement::Bottom),
            Step::new(
                "case-mix",
                "Case mix",
                "Your cases grouped by CPT section.",
            )
            .targeting("[data-tour='case-mix']", Placement::Top),
            Step::new(
                "percentile-benchmarks",
                "Benchmarks",
                "Percentiles compare your volume with anonymised peers in your specialty.",
            )
            .with_callout("Benchmarks need at least 20 logged cases."),
            Step::new(
                "weekly-insights",
                "Weekly insights",
                "A short summary of the past week arrives every Monday.",
            )
            .targeting("[data-tour='insights']", Placement::Left),
        ],
        prerequisites: vec!["case-logging".to_string()],
    }
}
