#![allow(clippy::cast_possible_wrap)]

use crate::model::{CountryEntry, CountryGroups, RankingRecord, University};
use tracing::{debug, instrument};

/// Keep the records of `year`, rank them by decreasing score (rank 1 being
/// the best) and group them by country.
#[instrument(skip(records), fields(records = records.len()))]
pub fn group_by_country(records: &[RankingRecord], year: i32) -> CountryGroups {
    let mut selected = records
        .iter()
        .filter(|r| r.year == year)
        .collect::<Vec<_>>();
    selected.sort_by(|a, b| b.score.total_cmp(&a.score));
    let mut groups = CountryGroups::new(year);
    for (position, record) in selected.into_iter().enumerate() {
        groups.push(
            &record.country,
            CountryEntry {
                name: record.institution.clone(),
                score: record.score,
                rank: position as i64 + 1,
            },
        );
    }
    debug!(
        universities = groups.len(),
        countries = groups.all_countries().len(),
        "grouped universities by country"
    );
    groups
}

/// Build one tracked university per grouped entry, country by country.
pub fn create_universities(groups: &CountryGroups) -> Vec<University> {
    groups
        .iter()
        .map(|(country, entry)| {
            University::new(entry.name.clone(), country.to_owned(), entry.score, entry.rank)
                .with_baseline_year(groups.year)
        })
        .collect()
}
