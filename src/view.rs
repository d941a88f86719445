//! View Tree
//!
//! Deterministic, serializable description of what each panel shows. The
//! same tree prints as indented text for the terminal, serializes to JSON,
//! and backs the snapshot tests.

use serde::Serialize;
use std::fmt;

use crate::charts::{ChartId, ChartKind};
use crate::data::Trend;
use crate::icon::Icon;
use crate::plot::{fmt_num, Size};
use crate::style::Palette;

const BAR_CELLS: f64 = 30.0;

/// Colored tag next to a card title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub palette: Palette,
}

impl Badge {
    pub fn new(label: impl Into<String>, palette: Palette) -> Self {
        Self {
            label: label.into(),
            palette,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub name: String,
    pub url: String,
    pub icon: Icon,
}

/// One category of a chart with its value per series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDatum {
    pub label: String,
    pub values: Vec<f64>,
    /// Fraction of the whole, pies only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<f64>,
}

/// Chart summary: the rows a chart draws, in drawing order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub id: ChartId,
    pub title: String,
    pub kind: ChartKind,
    /// Canvas the chart was laid out on
    pub size: Size,
    /// Top of the value axis; `None` for pies
    pub domain_max: Option<f64>,
    pub series: Vec<String>,
    pub rows: Vec<ChartDatum>,
}

/// Node of the view tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Section {
        id: String,
        title: String,
        subtitle: Option<String>,
        children: Vec<Node>,
    },
    Card {
        title: String,
        icon: Option<Icon>,
        palette: Option<Palette>,
        badges: Vec<Badge>,
        body: Vec<Node>,
    },
    Text {
        text: String,
    },
    Stat {
        label: String,
        value: String,
        change: Option<String>,
        trend: Option<Trend>,
    },
    List {
        title: Option<String>,
        items: Vec<String>,
    },
    Tabs {
        tabs: Vec<Tab>,
    },
    Chart(ChartView),
    Links {
        title: String,
        links: Vec<Link>,
    },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn section(id: &str, title: &str, subtitle: Option<&str>, children: Vec<Node>) -> Self {
        Node::Section {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: subtitle.map(str::to_string),
            children,
        }
    }

    pub fn list(title: Option<&str>, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Node::List {
            title: title.map(str::to_string),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Direct children (section children or card body)
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Section { children, .. } => children,
            Node::Card { body, .. } => body,
            _ => &[],
        }
    }

    /// This node and every descendant, depth first
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.descendants());
        }
        out
    }
}

/// Rendered dashboard: the panels in page order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub title: String,
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Top-level section by id
    pub fn section(&self, id: &str) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|node| matches!(node, Node::Section { id: sid, .. } if sid == id))
    }

    pub fn charts(&self) -> Vec<&ChartView> {
        self.nodes
            .iter()
            .flat_map(Node::descendants)
            .filter_map(|node| match node {
                Node::Chart(chart) => Some(chart),
                _ => None,
            })
            .collect()
    }

    pub fn stats(&self) -> Vec<&Node> {
        self.nodes
            .iter()
            .flat_map(Node::descendants)
            .filter(|node| matches!(node, Node::Stat { .. }))
            .collect()
    }
}

fn kind_label(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::VerticalBar => "bar",
        ChartKind::HorizontalBar => "horizontal bar",
        ChartKind::Pie => "pie",
        ChartKind::Line => "line",
    }
}

fn write_chart(f: &mut fmt::Formatter<'_>, chart: &ChartView, pad: &str) -> fmt::Result {
    writeln!(f, "{}{} ({})", pad, chart.title, kind_label(chart.kind))?;
    let width = chart.rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);

    for row in &chart.rows {
        match chart.kind {
            ChartKind::VerticalBar | ChartKind::HorizontalBar => {
                let value = row.values.first().copied().unwrap_or(0.0);
                let cells = match chart.domain_max {
                    Some(max) if max > 0.0 => (value / max * BAR_CELLS).round() as usize,
                    _ => 0,
                };
                writeln!(f, "{}  {:<width$} {} {}", pad, row.label, "█".repeat(cells), fmt_num(value))?;
            }
            ChartKind::Pie => {
                let value = row.values.first().copied().unwrap_or(0.0);
                let share = row.share.unwrap_or(0.0) * 100.0;
                writeln!(f, "{}  {}: {}% ({:.1}% of total)", pad, row.label, fmt_num(value), share)?;
            }
            ChartKind::Line => {
                let values: Vec<String> = chart
                    .series
                    .iter()
                    .zip(&row.values)
                    .map(|(name, value)| format!("{}={}", name, fmt_num(*value)))
                    .collect();
                writeln!(f, "{}  {:<width$} {}", pad, row.label, values.join(", "))?;
            }
        }
    }
    Ok(())
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    let pad = "  ".repeat(depth);
    match node {
        Node::Section {
            title,
            subtitle,
            children,
            ..
        } => {
            writeln!(f, "{}== {} ==", pad, title)?;
            if let Some(subtitle) = subtitle {
                writeln!(f, "{}{}", pad, subtitle)?;
            }
            for child in children {
                write_node(f, child, depth + 1)?;
            }
        }
        Node::Card {
            title, badges, body, ..
        } => {
            write!(f, "{}* {}", pad, title)?;
            for badge in badges {
                write!(f, " [{}]", badge.label)?;
            }
            writeln!(f)?;
            for child in body {
                write_node(f, child, depth + 1)?;
            }
        }
        Node::Text { text } => writeln!(f, "{}{}", pad, text)?,
        Node::Stat {
            label,
            value,
            change,
            trend,
        } => {
            write!(f, "{}{}: {}", pad, label, value)?;
            if let Some(change) = change {
                write!(f, ", {}", change)?;
            }
            if let Some(trend) = trend {
                write!(f, ", {}", trend.as_tag())?;
            }
            writeln!(f)?;
        }
        Node::List { title, items } => {
            if let Some(title) = title {
                writeln!(f, "{}{}:", pad, title)?;
            }
            for item in items {
                writeln!(f, "{}- {}", pad, item)?;
            }
        }
        Node::Tabs { tabs } => {
            let labels: Vec<String> = tabs
                .iter()
                .map(|tab| {
                    if tab.active {
                        format!("[{} {}]", tab.icon, tab.label)
                    } else {
                        format!(" {} {} ", tab.icon, tab.label)
                    }
                })
                .collect();
            writeln!(f, "{}{}", pad, labels.join(" "))?;
        }
        Node::Chart(chart) => write_chart(f, chart, &pad)?,
        Node::Links { title, links } => {
            writeln!(f, "{}{}:", pad, title)?;
            for link in links {
                writeln!(f, "{}- {} <{}>", pad, link.name, link.url)?;
            }
        }
    }
    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        for node in &self.nodes {
            writeln!(f)?;
            write_node(f, node, 0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat() -> Node {
        Node::Stat {
            label: "Financial Literacy Rate".into(),
            value: "27%".into(),
            change: Some("+2.3%".into()),
            trend: Some(Trend::Up),
        }
    }

    #[test]
    fn test_stat_text() {
        assert_eq!(stat().to_string(), "Financial Literacy Rate: 27%, +2.3%, up\n");
    }

    #[test]
    fn test_nested_indentation() {
        let node = Node::section("metrics", "Key Metrics", None, vec![stat(), Node::list(Some("Notes"), ["a"])]);
        let text = node.to_string();
        assert!(text.starts_with("== Key Metrics ==\n"));
        assert!(text.contains("\n  Financial Literacy Rate: 27%"));
        assert!(text.contains("\n  Notes:\n  - a\n"));
    }

    #[test]
    fn test_json_is_tagged() {
        let doc = Document {
            title: "T".into(),
            nodes: vec![Node::section("metrics", "Key Metrics", None, vec![stat()])],
        };
        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(value["nodes"][0]["node"], "section");
        assert_eq!(value["nodes"][0]["children"][0]["node"], "stat");
        assert_eq!(value["nodes"][0]["children"][0]["trend"], "up");
    }

    #[test]
    fn test_document_lookups() {
        let chart = ChartView {
            id: ChartId::Gender,
            title: "Gender Distribution".into(),
            kind: ChartKind::Pie,
            size: Size::default(),
            domain_max: None,
            series: vec!["value".into()],
            rows: vec![ChartDatum {
                label: "Male".into(),
                values: vec![31.0],
                share: Some(0.5),
            }],
        };
        let doc = Document {
            title: "T".into(),
            nodes: vec![Node::section("charts", "Charts", None, vec![Node::Chart(chart)]), stat()],
        };

        assert!(doc.section("charts").is_some());
        assert!(doc.section("metrics").is_none());
        assert_eq!(doc.charts().len(), 1);
        assert_eq!(doc.stats().len(), 1);
        assert!(doc.to_string().contains("Male: 31% (50.0% of total)"));
    }
}
