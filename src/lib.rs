//! # Financial Literacy Dashboard
//!
//! A static dashboard of financial literacy indicators for India: headline
//! metrics, four switchable charts, categorized insights and prioritized
//! recommendations. All content is literal data compiled into the crate.
//!
//! ## Modules
//!
//! - [`data`]: the literal records and shared facts
//! - [`charts`]: chart registry and dataset access
//! - [`plot`]: chart geometry (bars, pie slices, monotone lines)
//! - [`style`]: tag-to-class lookups and theme tokens
//! - [`motion`]: entrance and gesture animation descriptors
//! - [`selection`]: nav and chart selection state
//! - [`panels`], [`dashboard`], [`view`]: headless rendering
//!
//! With the default `cli` feature the crate also provides [`config`],
//! [`logging`], [`export`] and the development [`server`] used by the
//! `finlit` binary. The browser front-end (`finlit-ui`) depends on this crate
//! with default features off.
//!
//! ## Quick Start
//!
//! ```rust
//! use finlit::Dashboard;
//!
//! let mut dashboard = Dashboard::new();
//! dashboard.charts_mut().select_chart("states");
//!
//! let doc = dashboard.render();
//! assert_eq!(doc.charts()[0].rows[0].label, "Kerala");
//! println!("{}", doc);
//! ```

pub mod charts;
pub mod dashboard;
pub mod data;
pub mod icon;
pub mod motion;
pub mod panels;
pub mod plot;
pub mod selection;
pub mod style;
pub mod view;

#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "cli")]
pub mod export;
#[cfg(feature = "cli")]
pub mod logging;
#[cfg(feature = "cli")]
pub mod server;

// Re-export top-level types for convenience
pub use charts::{ChartId, ChartKind, ChartRow, ChartSpec, Dataset, UnknownChart, CHARTS};
pub use dashboard::Dashboard;
pub use icon::Icon;
pub use panels::{ChartsPanel, Panel};
pub use plot::{Figure, Size};
pub use selection::{ChartSelection, NavSelection};
pub use style::{insight_style, priority_style, Palette, Theme};
pub use view::{ChartView, Document, Node};

#[cfg(feature = "cli")]
pub use config::{Config, ConfigError, LoggingConfig, Resolved, ServerConfig};
#[cfg(feature = "cli")]
pub use export::{export_dataset, ExportError, ExportFormat};
#[cfg(feature = "cli")]
pub use server::{build_router, serve, ServeError, ServerState};
