//! Dashboard Panels
//!
//! Each panel turns literal data (plus, for some, a selection) into a
//! [`Node`] subtree. Panels are independent: rendering one never reads
//! another panel's state.
//!
//! Page order:
//! - [`header`]: title and nav buttons
//! - [`metrics`]: headline indicator cards
//! - [`charts`]: chart tabs and the active chart
//! - [`insights`]: observations and key findings
//! - [`recommendations`]: action items and roadmap
//! - [`footer`]: about, resources, sources, freshness line

pub mod charts;
pub mod footer;
pub mod header;
pub mod insights;
pub mod metrics;
pub mod recommendations;

pub use charts::ChartsPanel;
pub use footer::FooterPanel;
pub use header::HeaderPanel;
pub use insights::InsightsPanel;
pub use metrics::MetricsPanel;
pub use recommendations::RecommendationsPanel;

use crate::view::Node;

/// A top-level page section
pub trait Panel {
    /// Anchor id of the rendered section
    fn id(&self) -> &'static str;

    /// Build the section's view tree
    fn render(&self) -> Node;
}
