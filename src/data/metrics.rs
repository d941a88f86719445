//! Headline indicators

use super::facts::*;
use super::types::{ColorTag, MetricRecord, Trend};
use crate::icon::Icon;

pub const METRICS_TITLE: &str = "Key Metrics";
pub const METRICS_SUBTITLE: &str = "Overview of financial literacy indicators across India";

pub static METRICS: [MetricRecord; 6] = [
    MetricRecord {
        title: "Financial Literacy Rate",
        value: "27%",
        change: "+2.3%",
        trend: Trend::Up,
        description: "Adults with basic financial knowledge",
        color: ColorTag::Primary,
        icon: Icon::BookOpen,
    },
    MetricRecord {
        title: "Banking Penetration",
        value: "80%",
        change: "+15.2%",
        trend: Trend::Up,
        description: "Population with bank accounts",
        color: ColorTag::Success,
        icon: Icon::DollarSign,
    },
    MetricRecord {
        title: "Digital Payment Users",
        value: "350M",
        change: DIGITAL_PAYMENT_GROWTH,
        trend: Trend::Up,
        description: "Active digital payment users",
        color: ColorTag::Primary,
        icon: Icon::TrendingUp,
    },
    MetricRecord {
        title: "Investment Awareness",
        value: "23%",
        change: INVESTMENT_AWARENESS_CHANGE,
        trend: Trend::Down,
        description: "Adults aware of investment options",
        color: ColorTag::Warning,
        icon: Icon::AlertTriangle,
    },
    MetricRecord {
        title: "Rural Literacy",
        value: "21%",
        change: "+3.1%",
        trend: Trend::Up,
        description: "Financial literacy in rural areas",
        color: ColorTag::Error,
        icon: Icon::Users,
    },
    MetricRecord {
        title: "Urban Literacy",
        value: "34%",
        change: "+1.8%",
        trend: Trend::Up,
        description: "Financial literacy in urban areas",
        color: ColorTag::Success,
        icon: Icon::Users,
    },
];

/// Look up a metric card by its title
pub fn metric(title: &str) -> Option<&'static MetricRecord> {
    METRICS.iter().find(|m| m.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::facts::*;

    fn pct(value: u32) -> String {
        format!("{}%", value)
    }

    #[test]
    fn test_values_match_facts() {
        assert_eq!(metric("Financial Literacy Rate").unwrap().value, pct(FINANCIAL_LITERACY_PCT));
        assert_eq!(metric("Banking Penetration").unwrap().value, pct(BANK_PENETRATION_PCT));
        assert_eq!(metric("Investment Awareness").unwrap().value, pct(INVESTMENT_AWARENESS_PCT));
        assert_eq!(metric("Rural Literacy").unwrap().value, pct(RURAL_LITERACY_PCT));
        assert_eq!(metric("Urban Literacy").unwrap().value, pct(URBAN_LITERACY_PCT));
    }

    #[test]
    fn test_change_sign_matches_trend() {
        for m in &METRICS {
            match m.trend {
                Trend::Up => assert!(m.change.starts_with('+'), "{}", m.title),
                Trend::Down => assert!(m.change.starts_with('-'), "{}", m.title),
            }
        }
    }

    #[test]
    fn test_unknown_metric() {
        assert!(metric("Crypto Adoption").is_none());
    }
}
