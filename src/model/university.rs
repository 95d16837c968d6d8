use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// Year attached to the baseline snapshot of a freshly built university.
pub const BASELINE_YEAR: i32 = 2015;

/// One observation of a university in its ranking history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub year: i32,
    pub score: f64,
    pub rank: i64,
}

/// Outcome of a score update, relative to the baseline score.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RankChange {
    Improved,
    Declined,
    Unchanged,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RankTrend {
    Up(i64),
    Down(i64),
    Steady,
}

/// Difference between the baseline snapshot and the latest one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    pub initial: Snapshot,
    pub current: Snapshot,
    pub score_change: f64,
    /// Positive when the university moved up (lower rank number).
    pub rank_change: i64,
}

impl Progress {
    pub fn trend(&self) -> RankTrend {
        match self.rank_change.cmp(&0) {
            Ordering::Greater => RankTrend::Up(self.rank_change),
            Ordering::Less => RankTrend::Down(-self.rank_change),
            Ordering::Equal => RankTrend::Steady,
        }
    }
}

/// A university and the history of its score and rank.
///
/// The first history entry is the baseline observation. Every call to
/// [`University::update`] appends one entry, and both the update rule and
/// [`University::progress`] compare against that baseline.
#[derive(Clone, Debug)]
pub struct University {
    pub name: String,
    country: String,
    pub score: f64,
    pub rank: i64,
    history: Vec<Snapshot>,
}

impl University {
    pub fn new(name: String, country: String, score: f64, rank: i64) -> University {
        University {
            name,
            country,
            score,
            rank,
            history: vec![Snapshot {
                year: BASELINE_YEAR,
                score,
                rank,
            }],
        }
    }

    /// Tag the baseline snapshot with another year.
    pub fn with_baseline_year(mut self, year: i32) -> University {
        self.history[0].year = year;
        self
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    #[allow(dead_code)]
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn baseline(&self) -> &Snapshot {
        &self.history[0]
    }

    pub fn latest(&self) -> &Snapshot {
        &self.history[self.history.len() - 1]
    }

    /// True as long as no update has been recorded.
    pub fn is_fresh(&self) -> bool {
        self.history.len() == 1
    }

    /// Record a new score for `year`. The rank moves by one position
    /// depending on how the new score compares with the baseline score.
    /// There is no lower bound on the resulting rank.
    pub fn update(&mut self, year: i32, new_score: f64) -> RankChange {
        let change = match new_score.partial_cmp(&self.baseline().score) {
            Some(Ordering::Greater) => RankChange::Improved,
            Some(Ordering::Less) => RankChange::Declined,
            _ => RankChange::Unchanged,
        };
        let new_rank = match change {
            RankChange::Improved => self.rank - 1,
            RankChange::Declined => self.rank + 1,
            RankChange::Unchanged => self.rank,
        };
        debug!(
            university = %self,
            year,
            old_score = self.score,
            new_score,
            old_rank = self.rank,
            new_rank,
            "updating ranking"
        );
        self.score = new_score;
        self.rank = new_rank;
        self.history.push(Snapshot {
            year,
            score: new_score,
            rank: new_rank,
        });
        change
    }

    pub fn progress(&self) -> Option<Progress> {
        if self.is_fresh() {
            return None;
        }
        let initial = *self.baseline();
        let current = *self.latest();
        Some(Progress {
            initial,
            current,
            score_change: current.score - initial.score,
            rank_change: initial.rank - current.rank,
        })
    }
}

impl fmt::Display for University {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> University {
        University::new("Sample University".into(), "Nowhere".into(), 80.0, 5)
    }

    #[test]
    fn fresh_history() {
        let u = sample();
        assert_eq!(
            u.history(),
            &[Snapshot {
                year: BASELINE_YEAR,
                score: 80.0,
                rank: 5
            }]
        );
        assert!(u.is_fresh());
        assert!(u.progress().is_none());
    }

    #[test]
    fn baseline_year_override() {
        let u = sample().with_baseline_year(2014);
        assert_eq!(u.baseline().year, 2014);
        assert_eq!(u.history().len(), 1);
    }

    #[test]
    fn better_score_improves_rank() {
        let mut u = sample();
        assert_eq!(u.update(2016, 85.0), RankChange::Improved);
        assert_eq!(u.rank, 4);
        assert_eq!(u.score, 85.0);
        assert_eq!(
            u.history()[1],
            Snapshot {
                year: 2016,
                score: 85.0,
                rank: 4
            }
        );
        assert!(!u.is_fresh());
    }

    #[test]
    fn worse_score_lowers_rank() {
        let mut u = sample();
        assert_eq!(u.update(2016, 75.0), RankChange::Declined);
        assert_eq!(u.rank, 6);
        assert_eq!(u.history().len(), 2);
    }

    #[test]
    fn same_score_keeps_rank() {
        let mut u = sample();
        assert_eq!(u.update(2016, 80.0), RankChange::Unchanged);
        assert_eq!(u.rank, 5);
        assert_eq!(u.history().len(), 2);
    }

    #[test]
    fn repeated_baseline_score_only_changes_year() {
        let mut u = sample();
        u.update(2016, 80.0);
        u.update(2017, 80.0);
        let h = u.history();
        assert_eq!(h.len(), 3);
        assert_eq!(h[1].score, h[2].score);
        assert_eq!(h[1].rank, h[2].rank);
        assert_ne!(h[1].year, h[2].year);
    }

    #[test]
    fn comparison_uses_baseline_score() {
        let mut u = sample();
        u.update(2016, 90.0);
        // Lower than the previous update but still above the baseline.
        assert_eq!(u.update(2017, 82.0), RankChange::Improved);
        assert_eq!(u.rank, 3);
    }

    #[test]
    fn rank_is_not_clamped() {
        let mut u = University::new("Top".into(), "Nowhere".into(), 50.0, 1);
        u.update(2016, 60.0);
        assert_eq!(u.rank, 0);
        u.update(2017, 70.0);
        assert_eq!(u.rank, -1);
    }

    #[test]
    fn progress_after_update() {
        let mut u = sample();
        u.update(2016, 85.0);
        let p = u.progress().unwrap();
        assert_eq!(p.initial.rank, 5);
        assert_eq!(p.current.rank, 4);
        assert_eq!(p.score_change, 5.0);
        assert_eq!(p.rank_change, 1);
        assert_eq!(p.trend(), RankTrend::Up(1));

        let mut u = sample();
        u.update(2016, 75.0);
        let p = u.progress().unwrap();
        assert_eq!(p.score_change, -5.0);
        assert_eq!(p.trend(), RankTrend::Down(1));

        let mut u = sample();
        u.update(2016, 80.0);
        assert_eq!(u.progress().unwrap().trend(), RankTrend::Steady);
    }

    #[test]
    fn nan_score_leaves_rank_alone() {
        let mut u = sample();
        assert_eq!(u.update(2016, f64::NAN), RankChange::Unchanged);
        assert_eq!(u.rank, 5);
    }
}
