//! CSV dataset loader.
//!
//! Expected columns: `Interests` (one career label per row), `Skills`
//! (semicolon-delimited), `Maths`, `CS`, `English` (integer marks), and
//! `Recommended_Career` (target label).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use careersense_ml::dataset::{Dataset, TrainingRow, split_skills};

use crate::error::DataError;

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Interests")]
    interests: String,
    #[serde(rename = "Skills")]
    skills: String,
    #[serde(rename = "Maths")]
    maths: u8,
    #[serde(rename = "CS")]
    cs: u8,
    #[serde(rename = "English")]
    english: u8,
    #[serde(rename = "Recommended_Career")]
    career: String,
}

/// Load and validate a training dataset from a CSV file.
pub fn load_dataset(path: &Path) -> Result<Dataset, DataError> {
    let file = File::open(path)?;
    let dataset = read_dataset(file)?;
    tracing::info!(rows = dataset.len(), path = %path.display(), "dataset loaded");
    Ok(dataset)
}

/// Load a dataset from any reader. Fails on the first malformed or
/// incomplete row; an empty dataset is itself an error.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for (idx, record) in csv_reader.deserialize::<RawRow>().enumerate() {
        // Header is line 1; data starts at line 2.
        let row_number = idx + 2;
        let raw = record?;

        let interest = non_empty(&raw.interests, row_number, "Interests")?;
        let career = non_empty(&raw.career, row_number, "Recommended_Career")?;
        let skills = split_skills(&raw.skills);
        if skills.is_empty() {
            return Err(DataError::MissingField {
                row: row_number,
                field: "Skills",
            });
        }

        rows.push(TrainingRow {
            interest,
            skills,
            maths: raw.maths,
            cs: raw.cs,
            english: raw.english,
            career,
        });
    }

    if rows.is_empty() {
        return Err(DataError::EmptyDataset);
    }
    Ok(Dataset::new(rows))
}

fn non_empty(value: &str, row: usize, field: &'static str) -> Result<String, DataError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DataError::MissingField { row, field });
    }
    Ok(trimmed.to_string())
}
