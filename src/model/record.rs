use serde::Deserialize;

/// One row of the ranking dataset. Columns not listed here are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RankingRecord {
    pub year: i32,
    pub country: String,
    pub institution: String,
    pub score: f64,
}
