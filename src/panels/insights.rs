//! Insight cards and key findings

use super::Panel;
use crate::data::insights::{INSIGHTS_SUBTITLE, INSIGHTS_TITLE};
use crate::data::{FindingGroup, InsightRecord, INSIGHTS, KEY_FINDINGS};
use crate::style::Palette;
use crate::view::{Badge, Node};

#[derive(Debug, Default, Clone, Copy)]
pub struct InsightsPanel;

fn insight_card(insight: &InsightRecord) -> Node {
    let style = insight.kind.style();
    Node::Card {
        title: insight.title.to_string(),
        icon: Some(insight.icon),
        palette: Some(style.palette),
        badges: vec![
            Badge::new(format!("{} Impact", insight.impact), style.palette),
            Badge::new(insight.category, Palette::Gray),
        ],
        body: vec![Node::text(insight.description)],
    }
}

fn finding_card(finding: &FindingGroup) -> Node {
    Node::Card {
        title: finding.title.to_string(),
        icon: Some(finding.icon),
        palette: Some(Palette::Primary),
        badges: Vec::new(),
        body: vec![Node::list(None, finding.points.iter().copied())],
    }
}

impl Panel for InsightsPanel {
    fn id(&self) -> &'static str {
        "insights"
    }

    fn render(&self) -> Node {
        let children = INSIGHTS
            .iter()
            .map(insight_card)
            .chain(KEY_FINDINGS.iter().map(finding_card))
            .collect();

        Node::section(self.id(), INSIGHTS_TITLE, Some(INSIGHTS_SUBTITLE), children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_palette(title: &str) -> Option<Palette> {
        InsightsPanel.render().children().iter().find_map(|node| match node {
            Node::Card { title: t, palette, .. } if t == title => *palette,
            _ => None,
        })
    }

    #[test]
    fn test_cards_follow_insight_kind() {
        assert_eq!(card_palette("Digital Payment Adoption Surge"), Some(Palette::Success));
        assert_eq!(card_palette("Rural-Urban Literacy Gap"), Some(Palette::Error));
        assert_eq!(card_palette("Gender Disparity Persists"), Some(Palette::Warning));
    }

    #[test]
    fn test_findings_follow_insights() {
        let node = InsightsPanel.render();
        assert_eq!(node.children().len(), 9);
        let text = node.to_string();
        assert!(text.contains("* Rural-Urban Literacy Gap [High Impact] [Demographics]"));
        assert!(text.contains("- Kerala leads with 42% financial literacy rate"));
    }
}
