//! Recommendation cards and the implementation roadmap

use super::Panel;
use crate::data::recommendations::{
    RECOMMENDATIONS_SUBTITLE, RECOMMENDATIONS_TITLE, ROADMAP_TITLE,
};
use crate::data::{ImplementationStep, RecommendationRecord, IMPLEMENTATION_STEPS, RECOMMENDATIONS};
use crate::style::Palette;
use crate::view::{Badge, Node};

#[derive(Debug, Default, Clone, Copy)]
pub struct RecommendationsPanel;

fn recommendation_card(rec: &RecommendationRecord) -> Node {
    let style = rec.priority.style();
    Node::Card {
        title: rec.title.to_string(),
        icon: Some(rec.icon),
        palette: Some(Palette::Primary),
        badges: vec![Badge::new(format!("{} Priority", rec.priority.as_tag()), style.palette)],
        body: vec![
            Node::text(rec.description),
            Node::list(Some("Key Actions"), rec.actions.iter().copied()),
            Node::text(format!("Timeline: {} | Impact: {}", rec.timeline, rec.impact)),
            Node::list(Some("Stakeholders"), rec.stakeholders.iter().copied()),
        ],
    }
}

fn roadmap_step(step: &ImplementationStep) -> Node {
    Node::Card {
        title: format!("{}. {}", step.step, step.title),
        icon: None,
        palette: Some(Palette::Primary),
        badges: vec![Badge::new(step.duration, Palette::Primary)],
        body: vec![Node::text(step.description)],
    }
}

impl Panel for RecommendationsPanel {
    fn id(&self) -> &'static str {
        "recommendations"
    }

    fn render(&self) -> Node {
        let mut children: Vec<Node> = RECOMMENDATIONS.iter().map(recommendation_card).collect();
        children.push(Node::section(
            "roadmap",
            ROADMAP_TITLE,
            None,
            IMPLEMENTATION_STEPS.iter().map(roadmap_step).collect(),
        ));

        Node::section(self.id(), RECOMMENDATIONS_TITLE, Some(RECOMMENDATIONS_SUBTITLE), children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_badges() {
        let node = RecommendationsPanel.render();
        let badges: Vec<Palette> = node
            .children()
            .iter()
            .filter_map(|child| match child {
                Node::Card { badges, .. } => badges.first().map(|b| b.palette),
                _ => None,
            })
            .collect();
        assert_eq!(badges.len(), 6);
        assert_eq!(badges[0], Palette::Error);
        assert!(badges.contains(&Palette::Warning));
    }

    #[test]
    fn test_roadmap_is_last_and_numbered() {
        let node = RecommendationsPanel.render();
        let roadmap = node.children().last().unwrap();
        assert!(matches!(roadmap, Node::Section { id, .. } if id == "roadmap"));
        assert_eq!(roadmap.children().len(), 4);
        assert!(roadmap.to_string().contains("* 1. "));
    }
}
