use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

pub const YEAR_COLUMN: &str = "Year";
pub const WINNER_COLUMN: &str = "Winner";
pub const RUNNER_UP_COLUMN: &str = "Runner-up";

/// Everything that can go wrong while building the in-memory data.
/// All of these are fatal at startup.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("data source unavailable: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed data source: {0}")]
    Csv(#[from] csv::Error),

    #[error("data source is missing the `{0}` column")]
    MissingColumn(&'static str),

    #[error("malformed alias table: {0}")]
    Alias(#[from] serde_json::Error),

    #[error("alias `{from}` maps to `{to}`, which is itself an alias")]
    AliasChain { from: String, to: String },
}

/// One World Cup final.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "Year")]
    pub year: u16,
    #[serde(rename = "Winner")]
    pub winner: String,
    #[serde(rename = "Runner-up")]
    pub runner_up: String,
}

/// Finals in file order. Loaded once, read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<MatchRecord>,
}

impl Dataset {
    /// Reads the CSV source. The header must carry `Year`, `Winner` and
    /// `Runner-up`; a row whose year does not parse is an error, not a skip.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);

        let headers = reader.headers()?.clone();
        for required in [YEAR_COLUMN, WINNER_COLUMN, RUNNER_UP_COLUMN] {
            if !headers.iter().any(|h| h == required) {
                return Err(DataError::MissingColumn(required));
            }
        }

        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(Self { records })
    }

    pub fn from_records(records: Vec<MatchRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_rows_in_file_order() {
        let file = write_csv(
            "Year,Winner,Runner-up\n1930,Uruguay,Argentina\n1934,Italy,Czechoslovakia\n",
        );
        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.records()[0],
            MatchRecord {
                year: 1930,
                winner: "Uruguay".into(),
                runner_up: "Argentina".into(),
            }
        );
        assert_eq!(dataset.records()[1].year, 1934);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = Dataset::load("definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }

    #[test]
    fn missing_required_column_is_rejected() {
        let file = write_csv("Year,Champion,Runner-up\n1930,Uruguay,Argentina\n");
        let err = Dataset::load(file.path()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn(c) if c == WINNER_COLUMN));
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        let file = write_csv("Year,Winner,Runner-up\nMCMXXX,Uruguay,Argentina\n");
        let err = Dataset::load(file.path()).unwrap_err();
        assert!(matches!(err, DataError::Csv(_)));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let file = write_csv("Year,Winner,Runner-up\n1930, Uruguay , Argentina \n");
        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.records()[0].winner, "Uruguay");
        assert_eq!(dataset.records()[0].runner_up, "Argentina");
    }
}
