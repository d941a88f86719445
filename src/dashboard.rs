//! Dashboard Shell
//!
//! Composes the panels in page order. The shell owns the nav selection; the
//! charts panel owns the chart selection. Nav changes only move the header
//! highlight, so every other section renders the same whatever is selected.

use tracing::debug;

use crate::data::site::SITE_TITLE;
use crate::panels::{
    ChartsPanel, FooterPanel, HeaderPanel, InsightsPanel, MetricsPanel, Panel,
    RecommendationsPanel,
};
use crate::plot::Size;
use crate::selection::NavSelection;
use crate::view::Document;

#[derive(Debug, Default, Clone)]
pub struct Dashboard {
    nav: NavSelection,
    charts: ChartsPanel,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dashboard whose charts are laid out on a `size` canvas
    pub fn with_chart_size(size: Size) -> Self {
        Self {
            nav: NavSelection::default(),
            charts: ChartsPanel::new(size),
        }
    }

    pub fn select_section(&mut self, id: &str) {
        self.nav.select(id);
    }

    pub fn nav(&self) -> &NavSelection {
        &self.nav
    }

    pub fn charts(&self) -> &ChartsPanel {
        &self.charts
    }

    pub fn charts_mut(&mut self) -> &mut ChartsPanel {
        &mut self.charts
    }

    /// Convenience for `charts_mut().select_chart(id)`
    pub fn select_chart(&mut self, id: &str) {
        self.charts.select_chart(id);
    }

    /// Render every panel in page order
    pub fn render(&self) -> Document {
        let header = HeaderPanel::new(&self.nav);
        let panels: [&dyn Panel; 6] = [
            &header,
            &MetricsPanel,
            &self.charts,
            &InsightsPanel,
            &RecommendationsPanel,
            &FooterPanel,
        ];

        let nodes = panels.iter().map(|panel| panel.render()).collect();
        debug!(section = self.nav.active(), chart = ?self.charts.active(), "Rendered dashboard");

        Document {
            title: SITE_TITLE.to_string(),
            nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartKind;
    use crate::view::Node;

    #[test]
    fn test_initial_render_is_complete() {
        let doc = Dashboard::new().render();
        let ids = ["header", "metrics", "charts", "insights", "recommendations", "footer"];
        assert_eq!(doc.nodes.len(), ids.len());
        for id in ids {
            let section = doc.section(id).unwrap_or_else(|| panic!("missing {}", id));
            assert!(!section.children().is_empty(), "{} is empty", id);
        }
        assert_eq!(doc.charts().len(), 1);
        assert_eq!(doc.stats().len(), 6);
    }

    #[test]
    fn test_render_is_deterministic() {
        let dashboard = Dashboard::new();
        assert_eq!(dashboard.render(), dashboard.render());
        assert_eq!(dashboard.render().to_string(), Dashboard::new().render().to_string());
    }

    #[test]
    fn test_end_to_end_walkthrough() {
        let mut dashboard = Dashboard::new();

        let text = dashboard.render().to_string();
        assert!(text.contains("Financial Literacy Rate: 27%, +2.3%, up"));

        dashboard.charts_mut().select_chart("states");
        let doc = dashboard.render();
        let chart = doc.charts()[0];
        assert_eq!(chart.rows.len(), 10);
        assert_eq!(chart.rows[0].label, "Kerala");
        assert_eq!(chart.rows[0].values, vec![42.0]);

        dashboard.select_chart("gender");
        let doc = dashboard.render();
        let chart = doc.charts()[0];
        assert_eq!(chart.kind, ChartKind::Pie);
        assert_eq!(chart.rows.len(), 3);
        let total: f64 = chart.rows.iter().map(|r| r.values[0]).sum();
        assert_eq!(total, 56.0);
    }

    // Nav selection is intentionally disconnected from the other panels
    #[test]
    fn test_nav_selection_leaves_panels_untouched() {
        let mut dashboard = Dashboard::new();
        let before = dashboard.render();

        dashboard.select_section("trends");
        let after = dashboard.render();

        assert_ne!(before.section("header"), after.section("header"));
        for id in ["metrics", "charts", "insights", "recommendations", "footer"] {
            assert_eq!(before.section(id), after.section(id), "{} changed", id);
        }
        assert!(dashboard.nav().is_active("trends"));
    }

    #[test]
    fn test_unknown_chart_renders_nothing() {
        let mut dashboard = Dashboard::new();
        dashboard.select_chart("radar");
        let doc = dashboard.render();
        assert!(doc.charts().is_empty());
        assert!(!doc.to_string().contains("Age Demographics (bar)"));

        let charts = doc.section("charts").unwrap();
        assert!(charts.children().iter().all(|n| !matches!(n, Node::Chart(_))));
    }

    #[test]
    fn test_custom_chart_size() {
        let size = Size {
            width: 480.0,
            height: 320.0,
        };
        let mut dashboard = Dashboard::with_chart_size(size);
        assert_eq!(dashboard.charts().size(), size);

        dashboard.select_chart("states");
        let doc = dashboard.render();
        let chart = doc.charts()[0];
        assert_eq!(chart.size, size);
        assert_eq!(chart.rows.len(), 10);

        // Same marks as the default canvas, only laid out smaller
        let default = Dashboard::new();
        assert_eq!(default.charts().size(), Size::default());
        let mut wide = Dashboard::new();
        wide.select_chart("states");
        assert_eq!(wide.render().charts()[0].rows, chart.rows);

        let json = doc.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["nodes"][2]["children"][1]["size"]["width"], 480.0);
    }

    #[test]
    fn test_json_render() {
        let json = Dashboard::new().render().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Financial Literacy Dashboard");
        assert_eq!(value["nodes"][2]["children"][1]["id"], "demographics");
    }
}
