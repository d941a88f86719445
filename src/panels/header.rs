//! Header with the nav buttons

use super::Panel;
use crate::data::site::{NAV_ITEMS, SITE_TAGLINE, SITE_TITLE};
use crate::selection::NavSelection;
use crate::view::{Node, Tab};

pub struct HeaderPanel<'a> {
    nav: &'a NavSelection,
}

impl<'a> HeaderPanel<'a> {
    pub fn new(nav: &'a NavSelection) -> Self {
        Self { nav }
    }
}

impl Panel for HeaderPanel<'_> {
    fn id(&self) -> &'static str {
        "header"
    }

    fn render(&self) -> Node {
        let tabs = NAV_ITEMS
            .iter()
            .map(|item| Tab {
                id: item.id.to_string(),
                label: item.label.to_string(),
                icon: item.icon.glyph().to_string(),
                active: self.nav.is_active(item.id),
            })
            .collect();

        Node::section(self.id(), SITE_TITLE, Some(SITE_TAGLINE), vec![Node::Tabs { tabs }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_tabs(node: &Node) -> Vec<String> {
        match &node.children()[0] {
            Node::Tabs { tabs } => tabs.iter().filter(|t| t.active).map(|t| t.id.clone()).collect(),
            other => panic!("expected tabs, got {:?}", other),
        }
    }

    #[test]
    fn test_highlights_selected_section() {
        let mut nav = NavSelection::default();
        assert_eq!(active_tabs(&HeaderPanel::new(&nav).render()), vec!["overview"]);

        nav.select("insights");
        assert_eq!(active_tabs(&HeaderPanel::new(&nav).render()), vec!["insights"]);
    }

    #[test]
    fn test_unknown_section_highlights_nothing() {
        let mut nav = NavSelection::default();
        nav.select("settings");
        assert!(active_tabs(&HeaderPanel::new(&nav).render()).is_empty());
    }
}
