//! Icon Glyphs
//!
//! Every glyph the dashboard draws, as 24x24 stroke paths for SVG output and
//! a short text fallback for terminal output.

use serde::Serialize;

/// Named vector glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    TrendingUp,
    TrendingDown,
    Users,
    DollarSign,
    BookOpen,
    AlertTriangle,
    BarChart3,
    Target,
    CheckCircle,
    AlertCircle,
    MapPin,
    CreditCard,
    Smartphone,
    Lightbulb,
    ArrowRight,
    Github,
    Linkedin,
    Mail,
    ExternalLink,
}

impl Icon {
    /// All icons, in declaration order
    pub const ALL: [Icon; 19] = [
        Icon::TrendingUp,
        Icon::TrendingDown,
        Icon::Users,
        Icon::DollarSign,
        Icon::BookOpen,
        Icon::AlertTriangle,
        Icon::BarChart3,
        Icon::Target,
        Icon::CheckCircle,
        Icon::AlertCircle,
        Icon::MapPin,
        Icon::CreditCard,
        Icon::Smartphone,
        Icon::Lightbulb,
        Icon::ArrowRight,
        Icon::Github,
        Icon::Linkedin,
        Icon::Mail,
        Icon::ExternalLink,
    ];

    /// Stroke path data for a `0 0 24 24` viewBox
    pub fn svg_paths(self) -> &'static [&'static str] {
        match self {
            Icon::TrendingUp => &["M22 7l-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            Icon::TrendingDown => &["M22 17l-8.5-8.5-5 5L2 7", "M16 17h6v-6"],
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Icon::DollarSign => &["M12 2v20", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
            Icon::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            Icon::AlertTriangle => &[
                "M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z",
                "M12 9v4",
                "M12 17h.01",
            ],
            Icon::BarChart3 => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            Icon::Target => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0",
                "M18 12a6 6 0 1 1-12 0 6 6 0 0 1 12 0",
                "M14 12a2 2 0 1 1-4 0 2 2 0 0 1 4 0",
            ],
            Icon::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "M22 4L12 14.01l-3-3"],
            Icon::AlertCircle => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0",
                "M12 8v4",
                "M12 16h.01",
            ],
            Icon::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0",
            ],
            Icon::CreditCard => &[
                "M4 5h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2z",
                "M2 10h20",
            ],
            Icon::Smartphone => &[
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M12 18h.01",
            ],
            Icon::Lightbulb => &[
                "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5",
                "M9 18h6",
                "M10 22h4",
            ],
            Icon::ArrowRight => &["M5 12h14", "M12 5l7 7-7 7"],
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M6 4a2 2 0 1 1-4 0 2 2 0 0 1 4 0",
            ],
            Icon::Mail => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "M22 6l-10 7L2 6",
            ],
            Icon::ExternalLink => &[
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
                "M15 3h6v6",
                "M10 14L21 3",
            ],
        }
    }

    /// Text stand-in used by the terminal renderer
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::TrendingUp => "↗",
            Icon::TrendingDown => "↘",
            Icon::Users => "👥",
            Icon::DollarSign => "$",
            Icon::BookOpen => "📖",
            Icon::AlertTriangle => "⚠",
            Icon::BarChart3 => "📊",
            Icon::Target => "🎯",
            Icon::CheckCircle => "✔",
            Icon::AlertCircle => "❗",
            Icon::MapPin => "📍",
            Icon::CreditCard => "💳",
            Icon::Smartphone => "📱",
            Icon::Lightbulb => "💡",
            Icon::ArrowRight => "→",
            Icon::Github => "⌥",
            Icon::Linkedin => "in",
            Icon::Mail => "✉",
            Icon::ExternalLink => "⇗",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_paths() {
        for icon in Icon::ALL {
            let paths = icon.svg_paths();
            assert!(!paths.is_empty(), "{:?} has no paths", icon);
            assert!(paths.iter().all(|d| d.starts_with('M')));
            assert!(!icon.glyph().is_empty());
        }
    }

    #[test]
    fn test_icon_serializes_kebab_case() {
        let json = serde_json::to_string(&Icon::BarChart3).unwrap();
        assert_eq!(json, "\"bar-chart3\"");
    }
}
