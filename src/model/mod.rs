pub use self::countries::{CountryEntry, CountryGroups};
pub use self::record::RankingRecord;
pub use self::university::{RankChange, RankTrend, University};

mod countries;
mod record;
mod university;
