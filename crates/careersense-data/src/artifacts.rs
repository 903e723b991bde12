//! Trained-artifact persistence.
//!
//! A model directory holds three JSON files: the fitted tree
//! (`career_model.json`), the ordered feature-column list
//! (`feature_columns.json`), and the two fitted encoder vocabularies
//! (`encoders.json`). The column list is derivable from the encoders; it
//! is stored anyway and cross-checked on load, so a partially overwritten
//! directory fails initialization instead of mispredicting.

use std::fs;
use std::path::{Path, PathBuf};

use careersense_ml::encoder::FeatureSchema;
use careersense_ml::trainer::TrainedModel;
use careersense_ml::tree::DecisionTree;

use crate::error::DataError;

const MODEL_FILE: &str = "career_model.json";
const COLUMNS_FILE: &str = "feature_columns.json";
const ENCODERS_FILE: &str = "encoders.json";

/// Save/load interface for a model directory.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write all three artifact files, creating the directory if needed.
    pub fn save(&self, model: &TrainedModel) -> Result<(), DataError> {
        fs::create_dir_all(&self.dir)?;

        self.write_json(MODEL_FILE, &model.tree)?;
        self.write_json(COLUMNS_FILE, &model.schema.column_order())?;
        self.write_json(ENCODERS_FILE, &model.schema)?;

        tracing::info!(dir = %self.dir.display(), "artifacts saved");
        Ok(())
    }

    /// Load and validate the trained model. Any missing file, parse
    /// failure, structural defect, or column-list disagreement is fatal —
    /// startup must abort rather than serve a half-loaded model.
    pub fn load(&self) -> Result<TrainedModel, DataError> {
        let tree: DecisionTree = self.read_json(MODEL_FILE)?;
        let columns: Vec<String> = self.read_json(COLUMNS_FILE)?;
        let schema: FeatureSchema = self.read_json(ENCODERS_FILE)?;

        tree.validate()?;
        if schema.column_order() != columns {
            return Err(DataError::ColumnMismatch);
        }
        if tree.n_features() != schema.width() {
            return Err(DataError::ColumnMismatch);
        }

        tracing::info!(
            dir = %self.dir.display(),
            classes = tree.classes().len(),
            columns = columns.len(),
            "artifacts loaded"
        );
        Ok(TrainedModel { tree, schema })
    }

    fn write_json<T: serde::Serialize>(&self, name: &str, value: &T) -> Result<(), DataError> {
        let json = serde_json::to_vec_pretty(value)?;
        fs::write(self.dir.join(name), json)?;
        Ok(())
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, name: &str) -> Result<T, DataError> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Err(DataError::ArtifactNotFound(path));
        }
        let bytes = fs::read(&path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
