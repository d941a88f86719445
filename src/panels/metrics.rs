//! Headline indicator cards

use super::Panel;
use crate::data::metrics::{METRICS_SUBTITLE, METRICS_TITLE};
use crate::data::{MetricRecord, METRICS};
use crate::view::Node;

#[derive(Debug, Default, Clone, Copy)]
pub struct MetricsPanel;

fn metric_card(metric: &MetricRecord) -> Node {
    let (palette, _) = metric.color.style();
    Node::Card {
        title: metric.title.to_string(),
        icon: Some(metric.icon),
        palette: Some(palette),
        badges: Vec::new(),
        body: vec![
            Node::Stat {
                label: metric.title.to_string(),
                value: metric.value.to_string(),
                change: Some(metric.change.to_string()),
                trend: Some(metric.trend),
            },
            Node::text(metric.description),
        ],
    }
}

impl Panel for MetricsPanel {
    fn id(&self) -> &'static str {
        "metrics"
    }

    fn render(&self) -> Node {
        Node::section(
            self.id(),
            METRICS_TITLE,
            Some(METRICS_SUBTITLE),
            METRICS.iter().map(metric_card).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Palette;

    #[test]
    fn test_one_card_per_metric() {
        let node = MetricsPanel.render();
        assert_eq!(node.children().len(), 6);
        assert!(node
            .to_string()
            .contains("Financial Literacy Rate: 27%, +2.3%, up"));
        assert!(node.to_string().contains("Investment Awareness: 23%, -1.2%, down"));
    }

    #[test]
    fn test_card_palette_follows_color_tag() {
        let node = MetricsPanel.render();
        let palettes: Vec<Option<Palette>> = node
            .children()
            .iter()
            .map(|card| match card {
                Node::Card { palette, .. } => *palette,
                _ => None,
            })
            .collect();
        assert_eq!(palettes[3], Some(Palette::Warning));
        assert_eq!(palettes[4], Some(Palette::Error));
    }
}
