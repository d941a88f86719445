//! Shared Facts
//!
//! Figures that several panels quote. Datasets take their numbers from here
//! and the authored sentences are checked against them in tests.

pub const FINANCIAL_LITERACY_PCT: u32 = 27;
pub const BANK_PENETRATION_PCT: u32 = 80;

pub const URBAN_LITERACY_PCT: u32 = 34;
pub const RURAL_LITERACY_PCT: u32 = 21;
pub const RURAL_URBAN_GAP_PTS: u32 = URBAN_LITERACY_PCT - RURAL_LITERACY_PCT;

pub const MALE_LITERACY_PCT: u32 = 31;
pub const FEMALE_LITERACY_PCT: u32 = 23;
pub const NON_BINARY_LITERACY_PCT: u32 = 2;
pub const GENDER_GAP_PTS: u32 = MALE_LITERACY_PCT - FEMALE_LITERACY_PCT;

pub const DIGITAL_PAYMENT_GROWTH: &str = "+45.8%";
pub const DIGITAL_PAYMENT_PREFERENCE_PCT: u32 = 72;

pub const INVESTMENT_AWARENESS_PCT: u32 = 23;
pub const INVESTMENT_AWARENESS_CHANGE: &str = "-1.2%";

pub const YOUTH_LITERACY_PCT: u32 = 31;
pub const TOP_STATE: &str = "Kerala";
pub const TOP_STATE_LITERACY_PCT: u32 = 42;

/// Month the literals were last revised
pub const DATA_AS_OF: (i32, u32) = (2023, 12);
