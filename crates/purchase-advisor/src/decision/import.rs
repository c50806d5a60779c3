use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use super::catalog::Dimension;
use super::context::InputError;
use super::ratings::RatingSet;

#[derive(Debug)]
pub enum RatingImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Input(InputError),
}

impl std::fmt::Display for RatingImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingImportError::Io(err) => write!(f, "failed to read ratings file: {}", err),
            RatingImportError::Csv(err) => write!(f, "invalid ratings CSV data: {}", err),
            RatingImportError::Input(err) => write!(f, "rejected rating: {}", err),
        }
    }
}

impl std::error::Error for RatingImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RatingImportError::Io(err) => Some(err),
            RatingImportError::Csv(err) => Some(err),
            RatingImportError::Input(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RatingImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RatingImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<InputError> for RatingImportError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

#[derive(Debug, Deserialize)]
struct RatingRow {
    #[serde(rename = "Dimension")]
    dimension: String,
    #[serde(rename = "Rating")]
    rating: u8,
}

/// Loads a rating set from a `Dimension,Rating` CSV export.
///
/// Rows are applied in order, so a later row for the same dimension wins.
/// Dimensions that never appear keep their default of 0.
pub struct RatingImporter;

impl RatingImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<RatingSet, RatingImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<RatingSet, RatingImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut ratings = RatingSet::new();

        for record in csv_reader.deserialize::<RatingRow>() {
            let row = record?;
            let dimension: Dimension = row.dimension.parse()?;
            ratings.rate(dimension, row.rating)?;
        }

        Ok(ratings)
    }
}
