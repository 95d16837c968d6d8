use crate::model::{RankChange, RankTrend, University};
use crate::stats::CountryStats;
use eyre::{Result, ensure};

/// Sort `universities` by decreasing current score and return the first `n`.
pub fn leaderboard(universities: &mut [University], n: usize) -> Result<&[University]> {
    ensure!(
        n <= universities.len(),
        "cannot show the top {} universities out of {}",
        n,
        universities.len()
    );
    universities.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(&universities[..n])
}

pub fn display_leaderboard(universities: &mut [University], n: usize, year: i32) -> Result<()> {
    let top = leaderboard(universities, n)?;
    println!();
    println!("*** Top {} World University Ranking ({} Data) ***", n, year);
    for u in top {
        println!("#{}: {} - Score: {:.2}", u.rank, u, u.score);
    }
    Ok(())
}

pub fn display_update(u: &University, year: i32, change: RankChange) {
    match change {
        RankChange::Improved => println!(
            "Great news! {} improved its score. Its new rank is likely higher.",
            u.name
        ),
        RankChange::Declined => println!(
            "Oops! {}'s score dropped. Its new rank is likely lower.",
            u.name
        ),
        RankChange::Unchanged => {}
    }
    println!("Ranking data for {} updated for {}.", u.name, year);
}

pub fn display_progress(u: &University) {
    let Some(progress) = u.progress() else {
        println!("No progress to show for {} yet.", u.name);
        return;
    };
    let (initial, current) = (progress.initial, progress.current);
    println!();
    println!("--- Progress for {} ---", u);
    println!(
        "Initial Rank ({}): #{} | Score: {:.2}",
        initial.year, initial.rank, initial.score
    );
    println!(
        "Current Rank ({}): #{} | Score: {:.2}",
        current.year, current.rank, current.score
    );
    match progress.trend() {
        RankTrend::Up(n) => println!("Rank change: ↑ {} positions (Improvement)", n),
        RankTrend::Down(n) => println!("Rank change: ↓ {} positions (Decline)", n),
        RankTrend::Steady => println!("Rank change: → No change in rank"),
    }
}

pub fn display_countries(stats: &[CountryStats]) {
    if !stats.is_empty() {
        println!();
        println!("Universities per country:");
        for s in stats {
            println!(
                "  - {}: {} (best rank #{}, mean score {:.2})",
                s.country, s.universities, s.best_rank, s.mean_score
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn university(name: &str, score: f64, rank: i64) -> University {
        University::new(name.into(), "Nowhere".into(), score, rank)
    }

    #[test]
    fn leaderboard_sorts_by_decreasing_score() {
        let mut universities = vec![
            university("a", 10.0, 3),
            university("b", 50.0, 1),
            university("c", 30.0, 2),
        ];
        for n in 0..=3 {
            let scores = leaderboard(&mut universities, n)
                .unwrap()
                .iter()
                .map(|u| u.score)
                .collect::<Vec<_>>();
            assert_eq!(scores, [50.0, 30.0, 10.0][..n]);
        }
    }

    #[test]
    fn leaderboard_uses_current_score() {
        let mut universities = vec![university("a", 40.0, 1), university("b", 30.0, 2)];
        universities[1].update(2016, 45.0);
        let top = leaderboard(&mut universities, 1).unwrap();
        assert_eq!(top[0].name, "b");
    }

    #[test]
    fn leaderboard_keeps_order_of_ties() {
        let mut universities = vec![university("a", 20.0, 1), university("b", 20.0, 2)];
        let top = leaderboard(&mut universities, 2).unwrap();
        assert_eq!(top[0].name, "a");
        assert_eq!(top[1].name, "b");
    }

    #[test]
    fn leaderboard_longer_than_dataset() {
        let mut universities = vec![university("a", 10.0, 1)];
        assert!(leaderboard(&mut universities, 10).is_err());
    }
}
