//! Offline training: fit the encoders and the tree, report held-out
//! accuracy.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::MlError;
use crate::dataset::Dataset;
use crate::encoder::FeatureSchema;
use crate::tree::DecisionTree;

/// Fixed seed for the train/holdout shuffle, so training is reproducible.
const SPLIT_SEED: u64 = 42;

/// Fraction of rows held out for the accuracy diagnostic.
const HOLDOUT_FRACTION: f64 = 0.2;

/// Below this many rows the holdout is skipped and the tree is fit on
/// everything.
const MIN_ROWS_FOR_HOLDOUT: usize = 10;

/// The trained artifacts: the fitted tree and the feature layout it
/// expects. Loaded read-only at startup, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    pub tree: DecisionTree,
    pub schema: FeatureSchema,
}

/// Diagnostics from one training run.
#[derive(Debug, Clone, Copy)]
pub struct TrainReport {
    pub rows_trained: usize,
    pub rows_held_out: usize,
    /// Fraction of held-out rows predicted correctly; `None` when the
    /// dataset was too small for a holdout.
    pub holdout_accuracy: Option<f64>,
}

/// Train a model on a labelled dataset.
///
/// Encoders are fit on the full dataset; the tree is fit on a seeded 80%
/// split, with the remaining rows scored for [`TrainReport::holdout_accuracy`].
pub fn train(dataset: &Dataset) -> Result<(TrainedModel, TrainReport), MlError> {
    if dataset.is_empty() {
        return Err(MlError::EmptyDataset);
    }
    let classes = dataset.labels();
    if classes.is_empty() {
        return Err(MlError::NoLabels);
    }

    let schema = FeatureSchema::fit(&dataset.rows);
    let x: Vec<Vec<f32>> = dataset
        .rows
        .iter()
        .map(|r| schema.encode(&r.interest, &r.skills, r.maths, r.cs, r.english))
        .collect();
    let y: Vec<usize> = dataset
        .rows
        .iter()
        .map(|r| {
            classes
                .binary_search(&r.career)
                .expect("labels() covers every row's career")
        })
        .collect();

    let (train_idx, holdout_idx) = split_indices(dataset.len());

    let train_x: Vec<Vec<f32>> = train_idx.iter().map(|&i| x[i].clone()).collect();
    let train_y: Vec<usize> = train_idx.iter().map(|&i| y[i]).collect();
    let tree = DecisionTree::fit(&train_x, &train_y, classes)?;

    let holdout_accuracy = if holdout_idx.is_empty() {
        None
    } else {
        let correct = holdout_idx
            .iter()
            .filter(|&&i| {
                tree.predict(&x[i])
                    .is_ok_and(|label| label == dataset.rows[i].career)
            })
            .count();
        Some(correct as f64 / holdout_idx.len() as f64)
    };

    let report = TrainReport {
        rows_trained: train_idx.len(),
        rows_held_out: holdout_idx.len(),
        holdout_accuracy,
    };
    tracing::info!(
        rows_trained = report.rows_trained,
        rows_held_out = report.rows_held_out,
        holdout_accuracy = report.holdout_accuracy,
        columns = schema.width(),
        "model trained"
    );

    Ok((TrainedModel { tree, schema }, report))
}

/// Seeded shuffle split into (train, holdout) row indices.
fn split_indices(n: usize) -> (Vec<usize>, Vec<usize>) {
    if n < MIN_ROWS_FOR_HOLDOUT {
        return ((0..n).collect(), Vec::new());
    }
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(SPLIT_SEED);
    indices.shuffle(&mut rng);
    let holdout_len = ((n as f64) * HOLDOUT_FRACTION).round() as usize;
    let holdout = indices.split_off(n - holdout_len);
    (indices, holdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::TrainingRow;

    fn row(interest: &str, skills: &[&str], career: &str) -> TrainingRow {
        TrainingRow {
            interest: interest.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            maths: 70,
            cs: 70,
            english: 70,
            career: career.to_string(),
        }
    }

    fn small_dataset() -> Dataset {
        Dataset::new(vec![
            row("Data Scientist", &["Python", "SQL"], "Data Scientist"),
            row("Web Developer", &["HTML", "CSS"], "Web Developer"),
            row("AI Engineer", &["Python", "TensorFlow"], "AI Engineer"),
        ])
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(
            train(&Dataset::default()),
            Err(MlError::EmptyDataset)
        ));
    }

    #[test]
    fn small_dataset_trains_on_all_rows() {
        let (model, report) = train(&small_dataset()).unwrap();
        assert_eq!(report.rows_trained, 3);
        assert_eq!(report.rows_held_out, 0);
        assert!(report.holdout_accuracy.is_none());
        assert_eq!(model.tree.classes().len(), 3);
    }

    #[test]
    fn trained_model_recalls_training_rows() {
        let dataset = small_dataset();
        let (model, _) = train(&dataset).unwrap();
        for r in &dataset.rows {
            let features = model
                .schema
                .encode(&r.interest, &r.skills, r.maths, r.cs, r.english);
            assert_eq!(model.tree.predict(&features).unwrap(), r.career);
        }
    }

    #[test]
    fn large_dataset_reports_holdout_accuracy() {
        // 20 perfectly-separable rows; the holdout accuracy must be 1.0.
        let mut rows = Vec::new();
        for _ in 0..10 {
            rows.push(row("Data Scientist", &["Python", "SQL"], "Data Scientist"));
            rows.push(row("Web Developer", &["HTML", "CSS"], "Web Developer"));
        }
        let (_, report) = train(&Dataset::new(rows)).unwrap();
        assert_eq!(report.rows_held_out, 4);
        assert_eq!(report.rows_trained, 16);
        assert_eq!(report.holdout_accuracy, Some(1.0));
    }

    #[test]
    fn training_is_reproducible() {
        let dataset = small_dataset();
        let (a, _) = train(&dataset).unwrap();
        let (b, _) = train(&dataset).unwrap();
        assert_eq!(a.tree, b.tree);
        assert_eq!(a.schema, b.schema);
    }
}
