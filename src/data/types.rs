//! Record types for the dashboard's literal data
//!
//! Every record here is built once as a `'static` literal and never mutated:
//! - `MetricRecord`: a headline indicator card
//! - `AgeBucketRow`, `StateRow`, `GenderShare`, `YearTrendRow`: chart rows
//! - `InsightRecord` and `FindingGroup`: observations
//! - `RecommendationRecord` and `ImplementationStep`: the action plan
//! - `NavItem` and `FooterLink`: page chrome

use serde::Serialize;

use crate::icon::Icon;

/// Direction of a metric's change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Tag as authored
    pub fn as_tag(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
        }
    }
}

/// Accent color of a metric card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Primary,
    Success,
    Warning,
    Error,
}

impl ColorTag {
    pub fn as_tag(self) -> &'static str {
        match self {
            ColorTag::Primary => "primary",
            ColorTag::Success => "success",
            ColorTag::Warning => "warning",
            ColorTag::Error => "error",
        }
    }
}

/// Headline indicator shown in the metrics panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricRecord {
    pub title: &'static str,
    pub value: &'static str,
    /// Signed delta as authored, e.g. `+2.3%`
    pub change: &'static str,
    pub trend: Trend,
    pub description: &'static str,
    pub color: ColorTag,
    pub icon: Icon,
}

/// Literacy by age bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBucketRow {
    pub age: &'static str,
    pub literacy: u32,
    /// Share of the adult population in this bucket (percent)
    pub population: u32,
}

/// Literacy by state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateRow {
    pub state: &'static str,
    pub literacy: u32,
}

/// Literacy by gender, drawn as one pie slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenderShare {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

/// Yearly literacy, digital adoption and investment awareness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearTrendRow {
    pub year: &'static str,
    pub literacy: u32,
    pub digital: u32,
    pub investment: u32,
}

/// Tone of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Concern,
    Neutral,
}

impl InsightKind {
    pub fn as_tag(self) -> &'static str {
        match self {
            InsightKind::Positive => "positive",
            InsightKind::Concern => "concern",
            InsightKind::Neutral => "neutral",
        }
    }
}

/// Categorized observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InsightRecord {
    pub kind: InsightKind,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub category: &'static str,
    pub icon: Icon,
}

/// Titled group of bullet points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FindingGroup {
    pub title: &'static str,
    pub points: &'static [&'static str],
    pub icon: Icon,
}

/// Urgency of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_tag(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// Prioritized action item
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecommendationRecord {
    pub priority: Priority,
    pub title: &'static str,
    pub description: &'static str,
    pub actions: &'static [&'static str],
    pub timeline: &'static str,
    pub impact: &'static str,
    pub stakeholders: &'static [&'static str],
    pub icon: Icon,
}

/// One step of the implementation roadmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImplementationStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
}

/// Header navigation button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

/// Footer link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: Icon,
}
