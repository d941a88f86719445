//! Footer

use super::Panel;
use crate::data::site::{
    data_updated_label, ABOUT_TEXT, COPYRIGHT, DATA_SOURCES, RESOURCE_LINKS, SITE_TITLE,
    SOCIAL_LINKS,
};
use crate::data::FooterLink;
use crate::view::{Link, Node};

#[derive(Debug, Default, Clone, Copy)]
pub struct FooterPanel;

fn links(title: &str, items: &[FooterLink]) -> Node {
    Node::Links {
        title: title.to_string(),
        links: items
            .iter()
            .map(|link| Link {
                name: link.name.to_string(),
                url: link.url.to_string(),
                icon: link.icon,
            })
            .collect(),
    }
}

impl Panel for FooterPanel {
    fn id(&self) -> &'static str {
        "footer"
    }

    fn render(&self) -> Node {
        Node::section(
            self.id(),
            SITE_TITLE,
            None,
            vec![
                Node::text(ABOUT_TEXT),
                links("Connect", &SOCIAL_LINKS),
                links("Resources", &RESOURCE_LINKS),
                Node::list(Some("Data Sources"), DATA_SOURCES.iter().copied()),
                Node::text(COPYRIGHT),
                Node::text(data_updated_label()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_content() {
        let text = FooterPanel.render().to_string();
        assert!(text.contains("- Email <mailto:contact@example.com>"));
        assert!(text.contains("- Reserve Bank of India (RBI)"));
        assert!(text.ends_with("Data updated as of December 2023\n"));
    }
}
