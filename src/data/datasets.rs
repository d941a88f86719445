//! Chart datasets
//!
//! Rows are kept in authored order; nothing downstream sorts them.

use super::facts::*;
use super::types::{AgeBucketRow, GenderShare, StateRow, YearTrendRow};

pub static AGE_DEMOGRAPHICS: [AgeBucketRow; 6] = [
    AgeBucketRow { age: "18-25", literacy: YOUTH_LITERACY_PCT, population: 23 },
    AgeBucketRow { age: "26-35", literacy: 29, population: 28 },
    AgeBucketRow { age: "36-45", literacy: 26, population: 22 },
    AgeBucketRow { age: "46-55", literacy: 24, population: 15 },
    AgeBucketRow { age: "56-65", literacy: 22, population: 8 },
    AgeBucketRow { age: "65+", literacy: 18, population: 4 },
];

pub static STATE_LITERACY: [StateRow; 10] = [
    StateRow { state: TOP_STATE, literacy: TOP_STATE_LITERACY_PCT },
    StateRow { state: "Goa", literacy: 38 },
    StateRow { state: "Delhi", literacy: 36 },
    StateRow { state: "Maharashtra", literacy: 34 },
    StateRow { state: "Karnataka", literacy: 32 },
    StateRow { state: "Tamil Nadu", literacy: 30 },
    StateRow { state: "Gujarat", literacy: 28 },
    StateRow { state: "West Bengal", literacy: 26 },
    StateRow { state: "Rajasthan", literacy: 22 },
    StateRow { state: "Bihar", literacy: 18 },
];

/// Not normalized: the slices add up to 56, as authored
pub static GENDER_SPLIT: [GenderShare; 3] = [
    GenderShare { name: "Male", value: MALE_LITERACY_PCT, color: "#0ea5e9" },
    GenderShare { name: "Female", value: FEMALE_LITERACY_PCT, color: "#ec4899" },
    GenderShare { name: "Non-binary", value: NON_BINARY_LITERACY_PCT, color: "#8b5cf6" },
];

pub static YEARLY_TRENDS: [YearTrendRow; 7] = [
    YearTrendRow { year: "2017", literacy: 24, digital: 15, investment: 18 },
    YearTrendRow { year: "2018", literacy: 25, digital: 22, investment: 19 },
    YearTrendRow { year: "2019", literacy: 26, digital: 31, investment: 20 },
    YearTrendRow { year: "2020", literacy: 27, digital: 45, investment: 21 },
    YearTrendRow { year: "2021", literacy: 27, digital: 58, investment: 22 },
    YearTrendRow { year: "2022", literacy: 28, digital: 67, investment: INVESTMENT_AWARENESS_PCT },
    YearTrendRow {
        year: "2023",
        literacy: FINANCIAL_LITERACY_PCT,
        digital: DIGITAL_PAYMENT_PREFERENCE_PCT,
        investment: INVESTMENT_AWARENESS_PCT,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_split_sums_to_56() {
        let total: u32 = GENDER_SPLIT.iter().map(|g| g.value).sum();
        assert_eq!(total, 56);
    }

    #[test]
    fn test_states_in_authored_order() {
        assert_eq!(STATE_LITERACY[0].state, "Kerala");
        assert_eq!(STATE_LITERACY[0].literacy, 42);
        assert_eq!(STATE_LITERACY[9].state, "Bihar");
    }

    #[test]
    fn test_trend_years_are_consecutive() {
        let years: Vec<u32> = YEARLY_TRENDS.iter().map(|r| r.year.parse().unwrap()).collect();
        assert!(years.windows(2).all(|w| w[1] == w[0] + 1));
        assert_eq!(years.first(), Some(&2017));
        assert_eq!(years.last(), Some(&2023));
    }

    #[test]
    fn test_youngest_bucket_is_most_literate() {
        let max = AGE_DEMOGRAPHICS.iter().map(|r| r.literacy).max().unwrap();
        assert_eq!(AGE_DEMOGRAPHICS[0].literacy, max);
    }
}
