use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Ranking dataset, in CSV format.
    pub data: PathBuf,
    /// Year of the dataset to rank.
    pub year: i32,
    /// Number of universities in the leaderboard.
    pub top: usize,
    #[serde(rename = "simulation")]
    pub simulations: Vec<Simulation>,
}

/// A manual score update applied to a named university.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Simulation {
    pub institution: String,
    pub year: i32,
    pub score: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: PathBuf::from("cwurData.csv"),
            year: 2015,
            top: 10,
            simulations: vec![
                Simulation {
                    institution: "University of Oxford".to_owned(),
                    year: 2016,
                    score: 85.0,
                },
                Simulation {
                    institution: "Yale University".to_owned(),
                    year: 2016,
                    score: 78.5,
                },
            ],
        }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        Self::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))
    }

    pub fn parse(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }
}
