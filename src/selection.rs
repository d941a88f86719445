//! Selection State
//!
//! The dashboard's only mutable state: which nav button is highlighted and
//! which chart is shown. Each value is owned by the component that displays
//! it; nothing here is process-wide.

use serde::Serialize;
use tracing::debug;

use crate::charts::{ChartId, ChartSpec};
use crate::data::site::DEFAULT_SECTION;

/// Highlighted header button
///
/// Any id is accepted. The selection only moves the highlight; it does not
/// scroll, filter or hide other panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSelection {
    active: String,
}

impl Default for NavSelection {
    fn default() -> Self {
        Self {
            active: DEFAULT_SECTION.to_string(),
        }
    }
}

impl NavSelection {
    pub fn select(&mut self, id: &str) {
        debug!(section = id, "Nav selection changed");
        self.active = id.to_string();
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }
}

/// Chart shown by the charts panel
///
/// Holds `None` after an unknown id is selected, in which case the panel
/// draws nothing until a known id is picked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSelection {
    active: Option<ChartId>,
}

impl Default for ChartSelection {
    fn default() -> Self {
        Self {
            active: Some(ChartId::Demographics),
        }
    }
}

impl ChartSelection {
    pub fn select(&mut self, id: &str) {
        let next = ChartId::lookup(id);
        if next.is_none() {
            debug!(chart = id, "Unknown chart selected, nothing will render");
        } else if next != self.active {
            debug!(chart = id, "Chart selection changed");
        }
        self.active = next;
    }

    pub fn set(&mut self, id: ChartId) {
        self.active = Some(id);
    }

    pub fn active(&self) -> Option<ChartId> {
        self.active
    }

    pub fn is_active(&self, id: ChartId) -> bool {
        self.active == Some(id)
    }

    pub fn spec(&self) -> Option<&'static ChartSpec> {
        self.active.map(ChartId::spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_defaults_to_overview() {
        let nav = NavSelection::default();
        assert_eq!(nav.active(), "overview");
        assert!(nav.is_active("overview"));
    }

    #[test]
    fn test_nav_accepts_any_id() {
        let mut nav = NavSelection::default();
        nav.select("trends");
        assert!(nav.is_active("trends"));
        assert!(!nav.is_active("overview"));

        nav.select("not-a-section");
        assert_eq!(nav.active(), "not-a-section");
    }

    #[test]
    fn test_chart_defaults_to_demographics() {
        let charts = ChartSelection::default();
        assert_eq!(charts.active(), Some(ChartId::Demographics));
        assert_eq!(charts.spec().map(|s| s.label), Some("Age Demographics"));
    }

    #[test]
    fn test_chart_selection_is_idempotent() {
        let mut once = ChartSelection::default();
        once.select("gender");

        let mut twice = ChartSelection::default();
        twice.select("gender");
        twice.select("gender");

        assert_eq!(once, twice);
        assert!(twice.is_active(ChartId::Gender));
    }

    #[test]
    fn test_unknown_chart_clears_selection() {
        let mut charts = ChartSelection::default();
        charts.select("heatmap");
        assert_eq!(charts.active(), None);
        assert!(charts.spec().is_none());

        charts.select("states");
        assert_eq!(charts.active(), Some(ChartId::States));
    }
}
