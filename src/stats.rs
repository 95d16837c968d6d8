#![allow(clippy::cast_precision_loss)]

use crate::model::University;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct CountryStats {
    pub country: String,
    pub universities: usize,
    pub best_rank: i64,
    pub mean_score: f64,
}

/// Summarize universities per country, most represented countries first.
pub fn country_statistics(universities: &[University]) -> Vec<CountryStats> {
    let mut by_country: HashMap<&str, Vec<&University>> = HashMap::new();
    for u in universities {
        by_country.entry(u.country()).or_default().push(u);
    }
    let mut stats = by_country
        .into_iter()
        .map(|(country, us)| CountryStats {
            country: country.to_owned(),
            universities: us.len(),
            best_rank: us.iter().map(|u| u.rank).min().unwrap_or_default(),
            mean_score: us.iter().map(|u| u.score).sum::<f64>() / us.len() as f64,
        })
        .collect::<Vec<_>>();
    stats.sort_by(|a, b| {
        b.universities
            .cmp(&a.universities)
            .then_with(|| a.country.cmp(&b.country))
    });
    stats
}

#[test]
fn test_country_statistics() {
    let universities = vec![
        University::new("a".into(), "USA".into(), 90.0, 2),
        University::new("b".into(), "Japan".into(), 70.0, 3),
        University::new("c".into(), "USA".into(), 100.0, 1),
        University::new("d".into(), "France".into(), 60.0, 4),
    ];
    let stats = country_statistics(&universities);
    assert_eq!(
        stats.iter().map(|s| s.country.as_str()).collect::<Vec<_>>(),
        vec!["USA", "France", "Japan"]
    );
    assert_eq!(stats[0].universities, 2);
    assert_eq!(stats[0].best_rank, 1);
    assert_eq!(stats[0].mean_score, 95.0);
    assert!(country_statistics(&[]).is_empty());
}
