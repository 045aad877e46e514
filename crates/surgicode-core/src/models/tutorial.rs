use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Advisory grouping for the tutorial picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Basics,
    Advanced,
    Workflow,
    Analytics,
}

/// Where the step popover should sit relative to its target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Placement {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

/// One page of guidance within a tutorial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Step {
    /// Unique within the parent tutorial.
    pub id: String,
    pub title: String,
    pub content: String,
    /// CSS selector of the element to highlight. Never interpreted here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_selector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callout_text: Option<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl Step {
    /// A step with only the required display text.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            target_selector: None,
            placement: None,
            callout_text: None,
            tips: Vec::new(),
        }
    }

    pub fn targeting(mut self, selector: impl Into<String>, placement: Placement) -> Self {
        self.target_selector = Some(selector.into());
        self.placement = Some(placement);
        self
    }

    pub fn with_callout(mut self, text: impl Into<String>) -> Self {
        self.callout_text = Some(text.into());
        self
    }

    pub fn with_tips<I, S>(mut self, tips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tips = tips.into_iter().map(Into::into).collect();
        self
    }
}

/// A named, ordered lesson. The `id` is the persistence key for progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub estimated_minutes: u32,
    pub steps: Vec<Step>,
    /// Advisory only. Nothing gates `start` on these.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,
}

impl Tutorial {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }
}
