//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod footer;
pub mod header;
pub mod heading;
pub mod icon;
pub mod insight_card;
pub mod metric_card;

pub use chart::FigureSvg;
pub use footer::Footer;
pub use header::Header;
pub use heading::SectionHeading;
pub use icon::IconSvg;
pub use insight_card::{FindingCard, InsightCard};
pub use metric_card::MetricCard;
