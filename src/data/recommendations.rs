//! Recommendations and the implementation roadmap

use super::types::{ImplementationStep, Priority, RecommendationRecord};
use crate::icon::Icon;

pub const RECOMMENDATIONS_TITLE: &str = "Strategic Recommendations";
pub const RECOMMENDATIONS_SUBTITLE: &str =
    "Actionable strategies to improve financial literacy across India";
pub const ROADMAP_TITLE: &str = "Implementation Roadmap";

pub static RECOMMENDATIONS: [RecommendationRecord; 6] = [
    RecommendationRecord {
        priority: Priority::High,
        title: "Bridge the Rural-Urban Gap",
        description: "Implement targeted financial education programs in rural areas to reduce the 13% literacy gap.",
        actions: &[
            "Deploy mobile financial literacy units to remote villages",
            "Partner with local community leaders and NGOs",
            "Create vernacular language educational content",
            "Establish rural financial service centers",
        ],
        timeline: "6-12 months",
        impact: "High",
        stakeholders: &["Government", "Banks", "NGOs"],
        icon: Icon::Users,
    },
    RecommendationRecord {
        priority: Priority::High,
        title: "Address Gender Disparity",
        description: "Develop women-focused financial literacy programs to close the 8% gender gap.",
        actions: &[
            "Create women-only financial education workshops",
            "Develop female-centric financial products",
            "Train female financial advisors and educators",
            "Partner with women's self-help groups",
        ],
        timeline: "3-6 months",
        impact: "High",
        stakeholders: &["Government", "Financial Institutions", "Women's Organizations"],
        icon: Icon::Target,
    },
    RecommendationRecord {
        priority: Priority::Medium,
        title: "Enhance Digital Financial Education",
        description: "Leverage the 72% digital payment adoption to improve overall financial literacy.",
        actions: &[
            "Integrate financial education into payment apps",
            "Create gamified learning experiences",
            "Develop AI-powered financial advisors",
            "Launch digital literacy campaigns",
        ],
        timeline: "3-9 months",
        impact: "Medium",
        stakeholders: &["Fintech Companies", "Banks", "Government"],
        icon: Icon::Smartphone,
    },
    RecommendationRecord {
        priority: Priority::Medium,
        title: "Improve Investment Awareness",
        description: "Address the declining investment awareness through comprehensive education programs.",
        actions: &[
            "Launch investment literacy campaigns",
            "Create simplified investment guides",
            "Offer free investment advisory services",
            "Develop risk assessment tools",
        ],
        timeline: "6-12 months",
        impact: "Medium",
        stakeholders: &["SEBI", "Mutual Funds", "Financial Advisors"],
        icon: Icon::BookOpen,
    },
    RecommendationRecord {
        priority: Priority::Low,
        title: "State-Specific Interventions",
        description: "Customize programs based on state-wise performance variations.",
        actions: &[
            "Analyze state-specific barriers",
            "Develop localized content and programs",
            "Create inter-state knowledge sharing platforms",
            "Establish state-wise monitoring systems",
        ],
        timeline: "12-18 months",
        impact: "Medium",
        stakeholders: &["State Governments", "RBI", "Local Banks"],
        icon: Icon::MapPin,
    },
    RecommendationRecord {
        priority: Priority::Low,
        title: "Youth Financial Empowerment",
        description: "Build on the strong youth adoption to create financial literacy ambassadors.",
        actions: &[
            "Integrate financial education in school curricula",
            "Create youth financial literacy programs",
            "Develop peer-to-peer learning networks",
            "Launch financial literacy competitions",
        ],
        timeline: "6-24 months",
        impact: "Long-term",
        stakeholders: &["Education Ministry", "Schools", "Youth Organizations"],
        icon: Icon::TrendingUp,
    },
];

pub static IMPLEMENTATION_STEPS: [ImplementationStep; 4] = [
    ImplementationStep {
        step: 1,
        title: "Assessment & Planning",
        description: "Conduct detailed needs assessment and develop implementation roadmap",
        duration: "2-3 months",
    },
    ImplementationStep {
        step: 2,
        title: "Pilot Programs",
        description: "Launch pilot programs in select regions to test effectiveness",
        duration: "3-6 months",
    },
    ImplementationStep {
        step: 3,
        title: "Scale & Optimize",
        description: "Scale successful pilots and optimize based on learnings",
        duration: "6-12 months",
    },
    ImplementationStep {
        step: 4,
        title: "Monitor & Evaluate",
        description: "Continuous monitoring and evaluation for sustained impact",
        duration: "Ongoing",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::facts::*;

    #[test]
    fn test_roadmap_steps_are_ordinal() {
        for (idx, step) in IMPLEMENTATION_STEPS.iter().enumerate() {
            assert_eq!(step.step as usize, idx + 1);
        }
    }

    #[test]
    fn test_priorities_are_grouped_high_to_low() {
        let priorities: Vec<Priority> = RECOMMENDATIONS.iter().map(|r| r.priority).collect();
        assert!(priorities.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_quoted_gaps_agree_with_facts() {
        assert!(RECOMMENDATIONS[0]
            .description
            .contains(&format!("{}% literacy gap", RURAL_URBAN_GAP_PTS)));
        assert!(RECOMMENDATIONS[1]
            .description
            .contains(&format!("{}% gender gap", GENDER_GAP_PTS)));
        assert!(RECOMMENDATIONS[2]
            .description
            .contains(&format!("{}% digital payment", DIGITAL_PAYMENT_PREFERENCE_PCT)));
    }

    #[test]
    fn test_every_recommendation_has_four_actions() {
        for rec in &RECOMMENDATIONS {
            assert_eq!(rec.actions.len(), 4, "{}", rec.title);
            assert!(!rec.stakeholders.is_empty());
        }
    }
}
