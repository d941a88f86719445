//! Header and footer copy

use chrono::NaiveDate;

use super::facts::DATA_AS_OF;
use super::types::{FooterLink, NavItem};
use crate::icon::Icon;

pub const SITE_TITLE: &str = "Financial Literacy Dashboard";
pub const SITE_TAGLINE: &str = "Insights into India's Financial Awareness";

/// Section highlighted before any click
pub const DEFAULT_SECTION: &str = "overview";

pub static NAV_ITEMS: [NavItem; 4] = [
    NavItem { id: "overview", label: "Overview", icon: Icon::BarChart3 },
    NavItem { id: "demographics", label: "Demographics", icon: Icon::Users },
    NavItem { id: "trends", label: "Trends", icon: Icon::TrendingUp },
    NavItem { id: "insights", label: "Insights", icon: Icon::Target },
];

pub const ABOUT_TEXT: &str = "Comprehensive analysis of financial literacy trends across India, providing insights for policymakers, educators, and financial institutions.";

pub static RESOURCE_LINKS: [FooterLink; 4] = [
    FooterLink { name: "RBI Financial Literacy", url: "#", icon: Icon::ExternalLink },
    FooterLink { name: "SEBI Investor Education", url: "#", icon: Icon::ExternalLink },
    FooterLink { name: "NCFE Resources", url: "#", icon: Icon::ExternalLink },
    FooterLink { name: "Financial Inclusion Data", url: "#", icon: Icon::ExternalLink },
];

pub static SOCIAL_LINKS: [FooterLink; 3] = [
    FooterLink { name: "GitHub", url: "#", icon: Icon::Github },
    FooterLink { name: "LinkedIn", url: "#", icon: Icon::Linkedin },
    FooterLink { name: "Email", url: "mailto:contact@example.com", icon: Icon::Mail },
];

pub static DATA_SOURCES: [&str; 5] = [
    "Reserve Bank of India (RBI)",
    "National Centre for Financial Education (NCFE)",
    "Securities and Exchange Board of India (SEBI)",
    "Ministry of Finance, Government of India",
    "National Sample Survey Office (NSSO)",
];

pub const COPYRIGHT: &str =
    "© 2024 Financial Literacy Dashboard. Built for educational and research purposes.";

/// First day of the month the data was last revised
pub fn data_as_of() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(DATA_AS_OF.0, DATA_AS_OF.1, 1)
}

/// Footer freshness line, e.g. "Data updated as of December 2023"
pub fn data_updated_label() -> String {
    match data_as_of() {
        Some(date) => format!("Data updated as of {}", date.format("%B %Y")),
        None => "Data updated date unavailable".to_string(),
    }
}

/// Label for a nav id, if it is one of the header buttons
pub fn nav_label(id: &str) -> Option<&'static str> {
    NAV_ITEMS.iter().find(|item| item.id == id).map(|item| item.label)
}
