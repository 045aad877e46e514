pub mod analytics_overview;
pub mod basics;
pub mod case_logging;
pub mod code_search;
pub mod favorites_and_templates;
pub mod leaderboards;
pub mod resident_tracking;
