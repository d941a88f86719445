//! Insights and key findings

use super::types::{FindingGroup, InsightKind, InsightRecord};
use crate::icon::Icon;

pub const INSIGHTS_TITLE: &str = "Key Insights";
pub const INSIGHTS_SUBTITLE: &str = "Critical findings from financial literacy analysis";

pub static INSIGHTS: [InsightRecord; 6] = [
    InsightRecord {
        kind: InsightKind::Positive,
        title: "Digital Payment Adoption Surge",
        description: "Digital payment usage has increased by 45.8% in the last year, indicating growing comfort with financial technology.",
        impact: "High",
        category: "Technology",
        icon: Icon::CheckCircle,
    },
    InsightRecord {
        kind: InsightKind::Concern,
        title: "Rural-Urban Literacy Gap",
        description: "A significant 13% gap exists between urban (34%) and rural (21%) financial literacy rates.",
        impact: "High",
        category: "Demographics",
        icon: Icon::AlertCircle,
    },
    InsightRecord {
        kind: InsightKind::Positive,
        title: "Banking Penetration Success",
        description: "Bank account ownership has reached 80%, showing successful financial inclusion initiatives.",
        impact: "Medium",
        category: "Banking",
        icon: Icon::TrendingUp,
    },
    InsightRecord {
        kind: InsightKind::Concern,
        title: "Investment Awareness Decline",
        description: "Investment awareness has slightly decreased by 1.2%, suggesting need for better investment education.",
        impact: "Medium",
        category: "Investment",
        icon: Icon::TrendingDown,
    },
    InsightRecord {
        kind: InsightKind::Neutral,
        title: "Gender Disparity Persists",
        description: "Male financial literacy (31%) continues to exceed female literacy (23%) by 8 percentage points.",
        impact: "High",
        category: "Gender",
        icon: Icon::Users,
    },
    InsightRecord {
        kind: InsightKind::Positive,
        title: "Youth Leading Digital Adoption",
        description: "The 18-25 age group shows highest financial literacy (31%) and digital payment adoption.",
        impact: "Medium",
        category: "Demographics",
        icon: Icon::Smartphone,
    },
];

pub static KEY_FINDINGS: [FindingGroup; 3] = [
    FindingGroup {
        title: "Regional Variations",
        points: &[
            "Kerala leads with 42% financial literacy rate",
            "Southern states generally outperform northern states",
            "Urban centers show 60% higher literacy than rural areas",
        ],
        icon: Icon::MapPin,
    },
    FindingGroup {
        title: "Financial Behavior",
        points: &[
            "72% prefer digital payments over cash",
            "Only 23% actively invest in financial markets",
            "Savings account usage is universal at 95%",
        ],
        icon: Icon::CreditCard,
    },
    FindingGroup {
        title: "Demographic Patterns",
        points: &[
            "Education level strongly correlates with financial literacy",
            "Income level is the strongest predictor of financial knowledge",
            "Age shows inverse correlation with digital adoption",
        ],
        icon: Icon::Users,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::facts::*;

    fn insight(title: &str) -> &'static InsightRecord {
        INSIGHTS.iter().find(|i| i.title == title).unwrap()
    }

    #[test]
    fn test_gap_sentences_agree_with_facts() {
        let rural = insight("Rural-Urban Literacy Gap").description;
        assert!(rural.contains(&format!("{}% gap", RURAL_URBAN_GAP_PTS)));
        assert!(rural.contains(&format!("urban ({}%)", URBAN_LITERACY_PCT)));
        assert!(rural.contains(&format!("rural ({}%)", RURAL_LITERACY_PCT)));

        let gender = insight("Gender Disparity Persists").description;
        assert!(gender.contains(&format!("({}%)", MALE_LITERACY_PCT)));
        assert!(gender.contains(&format!("({}%)", FEMALE_LITERACY_PCT)));
        assert!(gender.contains(&format!("by {} percentage points", GENDER_GAP_PTS)));
    }

    #[test]
    fn test_growth_sentences_agree_with_facts() {
        let digital = insight("Digital Payment Adoption Surge").description;
        assert!(digital.contains(DIGITAL_PAYMENT_GROWTH.trim_start_matches('+')));

        let investment = insight("Investment Awareness Decline").description;
        assert!(investment.contains(INVESTMENT_AWARENESS_CHANGE.trim_start_matches('-')));

        let banking = insight("Banking Penetration Success").description;
        assert!(banking.contains(&format!("{}%", BANK_PENETRATION_PCT)));

        let youth = insight("Youth Leading Digital Adoption").description;
        assert!(youth.contains(&format!("({}%)", YOUTH_LITERACY_PCT)));
    }

    #[test]
    fn test_findings_agree_with_facts() {
        let regional = KEY_FINDINGS[0].points[0];
        assert!(regional.starts_with(TOP_STATE));
        assert!(regional.contains(&format!("{}%", TOP_STATE_LITERACY_PCT)));

        let behavior = KEY_FINDINGS[1].points;
        assert!(behavior[0].starts_with(&format!("{}%", DIGITAL_PAYMENT_PREFERENCE_PCT)));
        assert!(behavior[1].contains(&format!("{}%", INVESTMENT_AWARENESS_PCT)));
    }

    #[test]
    fn test_every_kind_is_used() {
        for kind in [InsightKind::Positive, InsightKind::Concern, InsightKind::Neutral] {
            assert!(INSIGHTS.iter().any(|i| i.kind == kind));
        }
        assert!(KEY_FINDINGS.iter().all(|f| f.points.len() == 3));
    }
}
