//! Page sections, in page order

pub mod charts;
pub mod insights;
pub mod metrics;
pub mod recommendations;

pub use charts::ChartsSection;
pub use insights::InsightsSection;
pub use metrics::MetricsSection;
pub use recommendations::RecommendationsSection;
