//! Chart Registry
//!
//! Static table from chart id to label, chart type, key mapping and
//! dataset. Switching charts only picks a row of this table; no data is
//! transformed.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::data::{
    AgeBucketRow, GenderShare, StateRow, YearTrendRow, AGE_DEMOGRAPHICS, GENDER_SPLIT,
    STATE_LITERACY, YEARLY_TRENDS,
};

pub const CHARTS_TITLE: &str = "Data Visualization";
pub const CHARTS_SUBTITLE: &str = "Interactive charts showing financial literacy patterns";

/// Identifier of one of the four preset charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartId {
    Demographics,
    States,
    Gender,
    Trends,
}

/// Returned when parsing an id outside the preset table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown chart: {0} (expected demographics, states, gender or trends)")]
pub struct UnknownChart(pub String);

impl ChartId {
    /// Tab order
    pub const ALL: [ChartId; 4] = [
        ChartId::Demographics,
        ChartId::States,
        ChartId::Gender,
        ChartId::Trends,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartId::Demographics => "demographics",
            ChartId::States => "states",
            ChartId::Gender => "gender",
            ChartId::Trends => "trends",
        }
    }

    /// Lenient lookup used by the selector: unknown ids yield `None`
    pub fn lookup(id: &str) -> Option<Self> {
        id.parse().ok()
    }

    pub fn spec(self) -> &'static ChartSpec {
        match self {
            ChartId::Demographics => &CHARTS[0],
            ChartId::States => &CHARTS[1],
            ChartId::Gender => &CHARTS[2],
            ChartId::Trends => &CHARTS[3],
        }
    }

    pub fn dataset(self) -> Dataset {
        match self {
            ChartId::Demographics => Dataset::Age(&AGE_DEMOGRAPHICS),
            ChartId::States => Dataset::State(&STATE_LITERACY),
            ChartId::Gender => Dataset::Gender(&GENDER_SPLIT),
            ChartId::Trends => Dataset::Trend(&YEARLY_TRENDS),
        }
    }
}

impl FromStr for ChartId {
    type Err = UnknownChart;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "demographics" => Ok(ChartId::Demographics),
            "states" => Ok(ChartId::States),
            "gender" => Ok(ChartId::Gender),
            "trends" => Ok(ChartId::Trends),
            other => Err(UnknownChart(other.to_string())),
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a dataset is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Categories along x, values up
    VerticalBar,
    /// Categories down the left axis, values to the right
    HorizontalBar,
    Pie,
    Line,
}

/// One plotted value column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Series {
    /// Row field holding the value
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Stroke/fill color; pie charts color slices per row instead
    pub color: &'static str,
}

/// Row of the chart table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub id: ChartId,
    pub label: &'static str,
    pub icon: &'static str,
    pub kind: ChartKind,
    /// Row field holding the category label
    pub category_key: &'static str,
    pub series: &'static [Series],
}

pub static CHARTS: [ChartSpec; 4] = [
    ChartSpec {
        id: ChartId::Demographics,
        label: "Age Demographics",
        icon: "👥",
        kind: ChartKind::VerticalBar,
        category_key: "age",
        series: &[Series { key: "literacy", name: "literacy", color: "#0ea5e9" }],
    },
    ChartSpec {
        id: ChartId::States,
        label: "State-wise Data",
        icon: "🗺️",
        kind: ChartKind::HorizontalBar,
        category_key: "state",
        series: &[Series { key: "literacy", name: "literacy", color: "#22c55e" }],
    },
    ChartSpec {
        id: ChartId::Gender,
        label: "Gender Distribution",
        icon: "⚖️",
        kind: ChartKind::Pie,
        category_key: "name",
        series: &[Series { key: "value", name: "value", color: "#0ea5e9" }],
    },
    ChartSpec {
        id: ChartId::Trends,
        label: "Trends Over Time",
        icon: "📈",
        kind: ChartKind::Line,
        category_key: "year",
        series: &[
            Series { key: "literacy", name: "Financial Literacy", color: "#0ea5e9" },
            Series { key: "digital", name: "Digital Adoption", color: "#22c55e" },
            Series { key: "investment", name: "Investment Awareness", color: "#f59e0b" },
        ],
    },
];

/// Field access shared by every chart row type
pub trait ChartRow {
    /// Category label (x value for bars and lines, slice name for pies)
    fn category(&self) -> &'static str;

    /// Numeric field by key
    fn value(&self, key: &str) -> Option<f64>;

    /// Per-row color override (pie slices)
    fn color(&self) -> Option<&'static str> {
        None
    }
}

impl ChartRow for AgeBucketRow {
    fn category(&self) -> &'static str {
        self.age
    }

    fn value(&self, key: &str) -> Option<f64> {
        match key {
            "literacy" => Some(self.literacy as f64),
            "population" => Some(self.population as f64),
            _ => None,
        }
    }
}

impl ChartRow for StateRow {
    fn category(&self) -> &'static str {
        self.state
    }

    fn value(&self, key: &str) -> Option<f64> {
        match key {
            "literacy" => Some(self.literacy as f64),
            _ => None,
        }
    }
}

impl ChartRow for GenderShare {
    fn category(&self) -> &'static str {
        self.name
    }

    fn value(&self, key: &str) -> Option<f64> {
        match key {
            "value" => Some(self.value as f64),
            _ => None,
        }
    }

    fn color(&self) -> Option<&'static str> {
        Some(self.color)
    }
}

impl ChartRow for YearTrendRow {
    fn category(&self) -> &'static str {
        self.year
    }

    fn value(&self, key: &str) -> Option<f64> {
        match key {
            "literacy" => Some(self.literacy as f64),
            "digital" => Some(self.digital as f64),
            "investment" => Some(self.investment as f64),
            _ => None,
        }
    }
}

/// Borrowed view of one literal dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Age(&'static [AgeBucketRow]),
    State(&'static [StateRow]),
    Gender(&'static [GenderShare]),
    Trend(&'static [YearTrendRow]),
}

impl Dataset {
    pub fn len(&self) -> usize {
        match self {
            Dataset::Age(rows) => rows.len(),
            Dataset::State(rows) => rows.len(),
            Dataset::Gender(rows) => rows.len(),
            Dataset::Trend(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows as trait objects, in authored order
    pub fn rows(&self) -> Vec<&'static dyn ChartRow> {
        fn erase<T: ChartRow + 'static>(rows: &'static [T]) -> Vec<&'static dyn ChartRow> {
            rows.iter().map(|r| r as &dyn ChartRow).collect()
        }

        match *self {
            Dataset::Age(rows) => erase(rows),
            Dataset::State(rows) => erase(rows),
            Dataset::Gender(rows) => erase(rows),
            Dataset::Trend(rows) => erase(rows),
        }
    }

    /// Category labels in authored order
    pub fn categories(&self) -> Vec<&'static str> {
        self.rows().iter().map(|r| r.category()).collect()
    }

    /// One value column; rows missing the key read as zero
    pub fn column(&self, key: &str) -> Vec<f64> {
        self.rows().iter().map(|r| r.value(key).unwrap_or(0.0)).collect()
    }
}
