use crate::model::RankingRecord;
use eyre::{Result, WrapErr, bail};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, trace};

pub struct Loader<R> {
    reader: csv::Reader<R>,
}

impl Loader<File> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                bail!("the file '{}' was not found", path.display())
            }
            Err(e) => {
                return Err(e)
                    .wrap_err_with(|| format!("cannot open ranking dataset {}", path.display()));
            }
        };
        debug!(path = %path.display(), "opened ranking dataset");
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> Loader<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: csv::Reader::from_reader(reader),
        }
    }

    /// Decode every row. The first malformed row aborts the load.
    pub fn load(&mut self) -> Result<Vec<RankingRecord>> {
        let records = self
            .reader
            .deserialize::<RankingRecord>()
            .enumerate()
            .map(|(n, record)| {
                record.wrap_err_with(|| format!("cannot decode ranking record {}", n + 1))
            })
            .collect::<Result<Vec<_>>>()?;
        trace!(records = records.len(), "ranking dataset loaded");
        Ok(records)
    }
}

/// Load all the records of the dataset stored at `path`.
pub fn load_records(path: &Path) -> Result<Vec<RankingRecord>> {
    Loader::open(path)?.load()
}
