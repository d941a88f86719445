//! Literal Data
//!
//! Every number and sentence the dashboard shows. Nothing is loaded or
//! computed at runtime; panels read these statics directly.
//!
//! - [`facts`]: figures quoted by more than one panel
//! - [`metrics`]: headline indicator cards
//! - [`datasets`]: rows behind the four charts
//! - [`insights`]: observations and key findings
//! - [`recommendations`]: action items and roadmap
//! - [`site`]: header navigation and footer copy

pub mod datasets;
pub mod facts;
pub mod insights;
pub mod metrics;
pub mod recommendations;
pub mod site;
pub mod types;

pub use datasets::{AGE_DEMOGRAPHICS, GENDER_SPLIT, STATE_LITERACY, YEARLY_TRENDS};
pub use insights::{KEY_FINDINGS, INSIGHTS};
pub use metrics::METRICS;
pub use recommendations::{IMPLEMENTATION_STEPS, RECOMMENDATIONS};
pub use site::{NAV_ITEMS, RESOURCE_LINKS, SOCIAL_LINKS};
pub use types::*;
