//! Chart tabs and the active chart
//!
//! The panel owns its [`ChartSelection`]. Switching tabs picks another row of
//! the chart table; the chart summary is read back from the laid-out
//! [`Figure`](crate::plot::Figure) so the terminal and browser show the same
//! marks in the same order.

use super::Panel;
use crate::charts::{ChartId, ChartKind, ChartRow, ChartSpec, CHARTS, CHARTS_SUBTITLE, CHARTS_TITLE};
use crate::plot::{self, Size};
use crate::selection::ChartSelection;
use crate::view::{ChartDatum, ChartView, Node, Tab};

#[derive(Debug, Default, Clone)]
pub struct ChartsPanel {
    selection: ChartSelection,
    size: Size,
}

impl ChartsPanel {
    pub fn new(size: Size) -> Self {
        Self {
            selection: ChartSelection::default(),
            size,
        }
    }

    /// Switch charts; unknown ids leave the panel without a chart
    pub fn select_chart(&mut self, id: &str) {
        self.selection.select(id);
    }

    /// Chart currently shown, if any
    pub fn active(&self) -> Option<ChartId> {
        self.selection.active()
    }

    pub fn selection(&self) -> &ChartSelection {
        &self.selection
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

/// Summarize what a chart draws
pub fn chart_view(spec: &ChartSpec, size: Size) -> ChartView {
    let dataset = spec.id.dataset();
    let figure = plot::render(spec, dataset, size);

    let rows = match spec.kind {
        ChartKind::VerticalBar | ChartKind::HorizontalBar => figure
            .bars
            .iter()
            .map(|bar| ChartDatum {
                label: bar.category.to_string(),
                values: vec![bar.value],
                share: None,
            })
            .collect(),
        ChartKind::Pie => figure
            .slices
            .iter()
            .map(|slice| ChartDatum {
                label: slice.name.to_string(),
                values: vec![slice.value],
                share: Some(slice.fraction),
            })
            .collect(),
        ChartKind::Line => dataset
            .rows()
            .iter()
            .map(|row| ChartDatum {
                label: row.category().to_string(),
                values: spec
                    .series
                    .iter()
                    .map(|s| row.value(s.key).unwrap_or(0.0))
                    .collect(),
                share: None,
            })
            .collect(),
    };

    ChartView {
        id: spec.id,
        title: spec.label.to_string(),
        kind: spec.kind,
        size: figure.size,
        domain_max: figure.domain_max,
        series: spec.series.iter().map(|s| s.name.to_string()).collect(),
        rows,
    }
}

impl Panel for ChartsPanel {
    fn id(&self) -> &'static str {
        "charts"
    }

    fn render(&self) -> Node {
        let tabs = CHARTS
            .iter()
            .map(|spec| Tab {
                id: spec.id.as_str().to_string(),
                label: spec.label.to_string(),
                icon: spec.icon.to_string(),
                active: self.selection.is_active(spec.id),
            })
            .collect();

        let mut children = vec![Node::Tabs { tabs }];
        if let Some(spec) = self.selection.spec() {
            children.push(Node::Chart(chart_view(spec, self.size)));
        }

        Node::section(self.id(), CHARTS_TITLE, Some(CHARTS_SUBTITLE), children)
    }
}
