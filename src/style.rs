//! Styling Lookups
//!
//! Maps categorical tags to fixed class bundles. Lookups never fail: an
//! unrecognized tag takes the fallback branch of its table.
//!
//! Class names follow the utility-class palette used by the front-end
//! (`primary`, `success`, `warning`, `error`, `gray`); the hex values behind
//! each palette come from [`Theme`].

use serde::{Deserialize, Serialize};

use crate::data::{ColorTag, InsightKind, Priority, Trend};
use crate::icon::Icon;

/// Semantic color family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    Primary,
    Success,
    Warning,
    Error,
    Gray,
}

impl Palette {
    pub fn name(self) -> &'static str {
        match self {
            Palette::Primary => "primary",
            Palette::Success => "success",
            Palette::Warning => "warning",
            Palette::Error => "error",
            Palette::Gray => "gray",
        }
    }
}

/// Class bundle for an insight card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightStyle {
    pub palette: Palette,
    pub border: &'static str,
    pub bg: &'static str,
    pub icon: &'static str,
    pub badge: &'static str,
}

/// Style for an insight type tag
///
/// `positive` and `concern` have their own palettes; `neutral` and anything
/// unrecognized share the warning palette.
pub fn insight_style(tag: &str) -> InsightStyle {
    match tag {
        "positive" => InsightStyle {
            palette: Palette::Success,
            border: "border-success-200",
            bg: "bg-success-50",
            icon: "text-success-600",
            badge: "bg-success-100 text-success-800",
        },
        "concern" => InsightStyle {
            palette: Palette::Error,
            border: "border-error-200",
            bg: "bg-error-50",
            icon: "text-error-600",
            badge: "bg-error-100 text-error-800",
        },
        _ => InsightStyle {
            palette: Palette::Warning,
            border: "border-warning-200",
            bg: "bg-warning-50",
            icon: "text-warning-600",
            badge: "bg-warning-100 text-warning-800",
        },
    }
}

/// Badge style for a recommendation priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityStyle {
    pub palette: Palette,
    pub classes: &'static str,
}

/// Style for a priority tag (`High`, `Medium`, `Low`); other tags are gray
pub fn priority_style(tag: &str) -> PriorityStyle {
    match tag {
        "High" => PriorityStyle {
            palette: Palette::Error,
            classes: "bg-error-100 text-error-800 border-error-200",
        },
        "Medium" => PriorityStyle {
            palette: Palette::Warning,
            classes: "bg-warning-100 text-warning-800 border-warning-200",
        },
        "Low" => PriorityStyle {
            palette: Palette::Success,
            classes: "bg-success-100 text-success-800 border-success-200",
        },
        _ => PriorityStyle {
            palette: Palette::Gray,
            classes: "bg-gray-100 text-gray-800 border-gray-200",
        },
    }
}

/// Icon tile gradient for a metric color tag; unknown tags use primary
pub fn metric_style(tag: &str) -> (Palette, &'static str) {
    match tag {
        "success" => (Palette::Success, "from-success-500 to-success-600 text-white"),
        "warning" => (Palette::Warning, "from-warning-500 to-warning-600 text-white"),
        "error" => (Palette::Error, "from-error-500 to-error-600 text-white"),
        _ => (Palette::Primary, "from-primary-500 to-primary-600 text-white"),
    }
}

/// Delta color and arrow for a metric trend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendStyle {
    pub palette: Palette,
    pub text: &'static str,
    pub icon: Icon,
}

pub fn trend_style(trend: Trend) -> TrendStyle {
    match trend {
        Trend::Up => TrendStyle {
            palette: Palette::Success,
            text: "text-success-600",
            icon: Icon::TrendingUp,
        },
        Trend::Down => TrendStyle {
            palette: Palette::Error,
            text: "text-error-600",
            icon: Icon::TrendingDown,
        },
    }
}

impl ColorTag {
    pub fn style(self) -> (Palette, &'static str) {
        metric_style(self.as_tag())
    }
}

impl InsightKind {
    pub fn style(self) -> InsightStyle {
        insight_style(self.as_tag())
    }
}

impl Priority {
    pub fn style(self) -> PriorityStyle {
        priority_style(self.as_tag())
    }
}

/// Hex color tokens behind each palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_primary")]
    pub primary: String,

    #[serde(default = "default_success")]
    pub success: String,

    #[serde(default = "default_warning")]
    pub warning: String,

    #[serde(default = "default_error")]
    pub error: String,

    #[serde(default = "default_gray")]
    pub gray: String,
}

fn default_primary() -> String {
    "#0ea5e9".to_string()
}

fn default_success() -> String {
    "#22c55e".to_string()
}

fn default_warning() -> String {
    "#f59e0b".to_string()
}

fn default_error() -> String {
    "#ef4444".to_string()
}

fn default_gray() -> String {
    "#6b7280".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            success: default_success(),
            warning: default_warning(),
            error: default_error(),
            gray: default_gray(),
        }
    }
}

impl Theme {
    /// Hex token for a palette
    pub fn color(&self, palette: Palette) -> &str {
        match palette {
            Palette::Primary => &self.primary,
            Palette::Success => &self.success,
            Palette::Warning => &self.warning,
            Palette::Error => &self.error,
            Palette::Gray => &self.gray,
        }
    }

    /// CSS custom properties, one per palette (`--color-primary: #0ea5e9;`)
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for palette in [
            Palette::Primary,
            Palette::Success,
            Palette::Warning,
            Palette::Error,
            Palette::Gray,
        ] {
            css.push_str(&format!("  --color-{}: {};\n", palette.name(), self.color(palette)));
        }
        css.push('}');
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_style_lookup() {
        assert_eq!(insight_style("positive").palette, Palette::Success);
        assert_eq!(insight_style("concern").palette, Palette::Error);
        assert_eq!(insight_style("neutral").palette, Palette::Warning);
        assert_eq!(insight_style("surprising").palette, Palette::Warning);
        assert_eq!(insight_style("").badge, "bg-warning-100 text-warning-800");
    }

    #[test]
    fn test_priority_style_lookup() {
        assert_eq!(priority_style("High").palette, Palette::Error);
        assert_eq!(priority_style("Medium").palette, Palette::Warning);
        assert_eq!(priority_style("Low").palette, Palette::Success);
        assert_eq!(priority_style("Urgent").palette, Palette::Gray);
        // Tags are case sensitive, as authored
        assert_eq!(priority_style("high").palette, Palette::Gray);
    }

    #[test]
    fn test_metric_style_falls_back_to_primary() {
        assert_eq!(metric_style("success").0, Palette::Success);
        assert_eq!(metric_style("error").0, Palette::Error);
        assert_eq!(metric_style("teal").0, Palette::Primary);
        assert_eq!(ColorTag::Warning.style().0, Palette::Warning);
    }

    #[test]
    fn test_trend_style() {
        assert_eq!(trend_style(Trend::Up).icon, Icon::TrendingUp);
        assert_eq!(trend_style(Trend::Down).text, "text-error-600");
    }

    #[test]
    fn test_theme_css_variables() {
        let css = Theme::default().css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-primary: #0ea5e9;"));
        assert!(css.contains("--color-gray: #6b7280;"));
    }
}
