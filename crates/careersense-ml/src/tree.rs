//! Decision-tree classifier.
//!
//! A plain CART: recursive binary splits chosen by Gini impurity over an
//! exhaustive feature/threshold search, majority-class leaves, no depth
//! limit and no pruning. Split search is fully deterministic — candidate
//! thresholds are midpoints between consecutive sorted feature values and
//! a new best is only accepted on a strict improvement, so refitting the
//! same data always yields the same tree.

use serde::{Deserialize, Serialize};

use crate::MlError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Node {
    Leaf {
        class: usize,
    },
    Split {
        feature: usize,
        threshold: f32,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// A fitted decision-tree classifier over a fixed class list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Ordered class labels; leaf indices point into this list.
    classes: Vec<String>,
    /// Expected feature-row width.
    n_features: usize,
    root: Node,
}

impl DecisionTree {
    /// Fit a tree on a row-major feature matrix and class indices into
    /// `classes`.
    pub fn fit(x: &[Vec<f32>], y: &[usize], classes: Vec<String>) -> Result<Self, MlError> {
        if x.is_empty() {
            return Err(MlError::EmptyDataset);
        }
        if x.len() != y.len() {
            return Err(MlError::LengthMismatch { x: x.len(), y: y.len() });
        }
        if classes.is_empty() {
            return Err(MlError::NoLabels);
        }
        let n_features = x[0].len();
        if let Some(bad) = x.iter().find(|row| row.len() != n_features) {
            return Err(MlError::FeatureWidthMismatch {
                got: bad.len(),
                expected: n_features,
            });
        }
        if let Some(&bad) = y.iter().find(|&&label| label >= classes.len()) {
            return Err(MlError::InvalidModel(format!(
                "label index {bad} out of range for {} classes",
                classes.len()
            )));
        }

        let indices: Vec<usize> = (0..x.len()).collect();
        let root = grow(x, y, &indices, classes.len());
        Ok(Self {
            classes,
            n_features,
            root,
        })
    }

    /// Predict the single best class label for a feature row.
    pub fn predict(&self, features: &[f32]) -> Result<&str, MlError> {
        if features.len() != self.n_features {
            return Err(MlError::FeatureWidthMismatch {
                got: features.len(),
                expected: self.n_features,
            });
        }
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { class } => return Ok(&self.classes[*class]),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Structural invariants, checked after deserializing an artifact.
    pub fn validate(&self) -> Result<(), MlError> {
        if self.classes.is_empty() {
            return Err(MlError::InvalidModel("empty class list".into()));
        }
        if self.n_features == 0 {
            return Err(MlError::InvalidModel("zero feature width".into()));
        }
        validate_node(&self.root, self.classes.len(), self.n_features)
    }
}

fn validate_node(node: &Node, n_classes: usize, n_features: usize) -> Result<(), MlError> {
    match node {
        Node::Leaf { class } => {
            if *class >= n_classes {
                return Err(MlError::InvalidModel(format!(
                    "leaf class {class} out of range for {n_classes} classes"
                )));
            }
            Ok(())
        }
        Node::Split {
            feature,
            left,
            right,
            ..
        } => {
            if *feature >= n_features {
                return Err(MlError::InvalidModel(format!(
                    "split feature {feature} out of range for width {n_features}"
                )));
            }
            validate_node(left, n_classes, n_features)?;
            validate_node(right, n_classes, n_features)
        }
    }
}

/// Grow a subtree over the rows named by `indices`.
fn grow(x: &[Vec<f32>], y: &[usize], indices: &[usize], n_classes: usize) -> Node {
    let counts = class_counts(y, indices, n_classes);
    let majority = argmax(&counts);

    // Pure node, or nothing left to split.
    if counts.iter().filter(|&&c| c > 0).count() <= 1 || indices.len() < 2 {
        return Node::Leaf { class: majority };
    }

    match best_split(x, y, indices, n_classes) {
        None => Node::Leaf { class: majority },
        Some(split) => {
            let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
                .iter()
                .partition(|&&i| x[i][split.feature] <= split.threshold);
            Node::Split {
                feature: split.feature,
                threshold: split.threshold,
                left: Box::new(grow(x, y, &left_idx, n_classes)),
                right: Box::new(grow(x, y, &right_idx, n_classes)),
            }
        }
    }
}

struct Split {
    feature: usize,
    threshold: f32,
}

/// Exhaustive Gini split search. Returns `None` when no split improves on
/// the parent impurity.
fn best_split(x: &[Vec<f32>], y: &[usize], indices: &[usize], n_classes: usize) -> Option<Split> {
    let parent = gini(&class_counts(y, indices, n_classes), indices.len());
    let n_features = x[indices[0]].len();

    let mut best: Option<Split> = None;
    let mut best_impurity = parent;

    for feature in 0..n_features {
        let mut values: Vec<f32> = indices.iter().map(|&i| x[i][feature]).collect();
        values.sort_by(|a, b| a.total_cmp(b));
        values.dedup();

        for pair in values.windows(2) {
            let threshold = (pair[0] + pair[1]) / 2.0;

            let mut left_counts = vec![0usize; n_classes];
            let mut right_counts = vec![0usize; n_classes];
            for &i in indices {
                if x[i][feature] <= threshold {
                    left_counts[y[i]] += 1;
                } else {
                    right_counts[y[i]] += 1;
                }
            }
            let n_left: usize = left_counts.iter().sum();
            let n_right = indices.len() - n_left;
            if n_left == 0 || n_right == 0 {
                continue;
            }

            let weighted = (n_left as f64 * gini(&left_counts, n_left)
                + n_right as f64 * gini(&right_counts, n_right))
                / indices.len() as f64;

            // Strict improvement only, keeping the search deterministic.
            if weighted < best_impurity {
                best_impurity = weighted;
                best = Some(Split { feature, threshold });
            }
        }
    }
    best
}

fn class_counts(y: &[usize], indices: &[usize], n_classes: usize) -> Vec<usize> {
    let mut counts = vec![0usize; n_classes];
    for &i in indices {
        counts[y[i]] += 1;
    }
    counts
}

fn gini(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let sum_sq: f64 = counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total as f64;
            p * p
        })
        .sum();
    1.0 - sum_sq
}

/// Index of the largest count; ties go to the lowest index.
fn argmax(counts: &[usize]) -> usize {
    let mut best = 0;
    for (i, &c) in counts.iter().enumerate() {
        if c > counts[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn fits_a_separable_dataset_exactly() {
        // One-hot rows, one per class.
        let x = vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ];
        let y = vec![0, 1, 2];
        let tree = DecisionTree::fit(&x, &y, classes(&["a", "b", "c"])).unwrap();
        for (row, label) in x.iter().zip(["a", "b", "c"]) {
            assert_eq!(tree.predict(row).unwrap(), label);
        }
    }

    #[test]
    fn splits_on_a_numeric_feature() {
        let x = vec![vec![10.0], vec![20.0], vec![80.0], vec![90.0]];
        let y = vec![0, 0, 1, 1];
        let tree = DecisionTree::fit(&x, &y, classes(&["low", "high"])).unwrap();
        assert_eq!(tree.predict(&[15.0]).unwrap(), "low");
        assert_eq!(tree.predict(&[85.0]).unwrap(), "high");
    }

    #[test]
    fn single_class_yields_a_leaf() {
        let x = vec![vec![1.0], vec![2.0], vec![3.0]];
        let y = vec![0, 0, 0];
        let tree = DecisionTree::fit(&x, &y, classes(&["only"])).unwrap();
        assert_eq!(tree.predict(&[99.0]).unwrap(), "only");
    }

    #[test]
    fn refit_is_identical() {
        let x = vec![
            vec![1.0, 50.0],
            vec![0.0, 70.0],
            vec![1.0, 90.0],
            vec![0.0, 30.0],
        ];
        let y = vec![0, 1, 0, 1];
        let cls = classes(&["a", "b"]);
        let t1 = DecisionTree::fit(&x, &y, cls.clone()).unwrap();
        let t2 = DecisionTree::fit(&x, &y, cls).unwrap();
        assert_eq!(t1, t2);
    }

    #[test]
    fn rejects_shape_errors() {
        assert!(matches!(
            DecisionTree::fit(&[], &[], classes(&["a"])),
            Err(MlError::EmptyDataset)
        ));
        assert!(matches!(
            DecisionTree::fit(&[vec![1.0]], &[0, 1], classes(&["a"])),
            Err(MlError::LengthMismatch { .. })
        ));
        assert!(matches!(
            DecisionTree::fit(&[vec![1.0], vec![1.0, 2.0]], &[0, 0], classes(&["a"])),
            Err(MlError::FeatureWidthMismatch { .. })
        ));
    }

    #[test]
    fn predict_checks_feature_width() {
        let tree =
            DecisionTree::fit(&[vec![1.0, 2.0]], &[0], classes(&["a"])).unwrap();
        assert!(matches!(
            tree.predict(&[1.0]),
            Err(MlError::FeatureWidthMismatch { .. })
        ));
    }

    #[test]
    fn validate_accepts_a_fitted_tree() {
        let x = vec![vec![10.0], vec![90.0]];
        let y = vec![0, 1];
        let tree = DecisionTree::fit(&x, &y, classes(&["low", "high"])).unwrap();
        assert!(tree.validate().is_ok());
    }
}
