//! Tree-ensemble classifier artifact
//!
//! A single decision tree is an ensemble with one tree. Splits send a row left
//! when `row[feature] <= threshold`. Prediction averages the normalized leaf
//! distributions of every tree and picks the most probable class, the first
//! class winning ties.

use serde::Deserialize;

use crate::domain::{Classifier, DomainError, FeatureVector};

/// One node of a fitted decision tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        distribution: Vec<f64>,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

/// On-disk shape of the classifier
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassifierFile {
    n_features: usize,
    classes: Vec<String>,
    trees: Vec<DecisionTree>,
}

/// Tree ensemble with leaf distributions normalized at load time
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "ClassifierFile")]
pub struct TreeEnsembleClassifier {
    n_features: usize,
    classes: Vec<String>,
    trees: Vec<DecisionTree>,
}

impl TreeEnsembleClassifier {
    pub fn new(
        n_features: usize,
        classes: Vec<String>,
        trees: Vec<DecisionTree>,
    ) -> Result<Self, String> {
        if n_features == 0 {
            return Err("n_features must be positive".to_string());
        }

        if classes.is_empty() {
            return Err("classifier has no classes".to_string());
        }

        if trees.is_empty() {
            return Err("classifier has no trees".to_string());
        }

        let trees = trees
            .into_iter()
            .enumerate()
            .map(|(position, tree)| {
                tree.normalized(n_features, classes.len())
                    .map_err(|e| format!("tree {}: {}", position, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            n_features,
            classes,
            trees,
        })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    fn predict_row(&self, row: &[f64]) -> Result<&str, DomainError> {
        if row.len() != self.n_features {
            return Err(DomainError::prediction(format!(
                "expected {} features, got {}",
                self.n_features,
                row.len()
            )));
        }

        let mut probabilities = vec![0.0_f64; self.classes.len()];

        for tree in &self.trees {
            for (total, p) in probabilities.iter_mut().zip(tree.leaf_for(row)) {
                *total += p;
            }
        }

        let best = probabilities
            .iter()
            .enumerate()
            .fold(0, |best, (i, p)| if *p > probabilities[best] { i } else { best });

        Ok(&self.classes[best])
    }
}

impl TryFrom<ClassifierFile> for TreeEnsembleClassifier {
    type Error = String;

    fn try_from(file: ClassifierFile) -> Result<Self, Self::Error> {
        Self::new(file.n_features, file.classes, file.trees)
    }
}

impl DecisionTree {
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    /// Checks the structure and scales every leaf distribution to sum to one.
    /// Children must come after their parent, which also rules out cycles.
    fn normalized(self, n_features: usize, n_classes: usize) -> Result<Self, String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }

        let node_count = self.nodes.len();
        let mut nodes = Vec::with_capacity(node_count);

        for (index, node) in self.nodes.into_iter().enumerate() {
            let node = match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= n_features {
                        return Err(format!(
                            "node {} splits on feature {} but the model has {}",
                            index, feature, n_features
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {} has a non-finite threshold", index));
                    }
                    for child in [left, right] {
                        if child <= index || child >= node_count {
                            return Err(format!(
                                "node {} has invalid child index {}",
                                index, child
                            ));
                        }
                    }
                    TreeNode::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    }
                }
                TreeNode::Leaf { distribution } => {
                    if distribution.len() != n_classes {
                        return Err(format!(
                            "leaf {} has {} weights for {} classes",
                            index,
                            distribution.len(),
                            n_classes
                        ));
                    }
                    if distribution.iter().any(|w| !w.is_finite() || *w < 0.0) {
                        return Err(format!("leaf {} has an invalid weight", index));
                    }
                    let sum: f64 = distribution.iter().sum();
                    if sum <= 0.0 {
                        return Err(format!("leaf {} has no weight", index));
                    }
                    TreeNode::Leaf {
                        distribution: distribution.into_iter().map(|w| w / sum).collect(),
                    }
                }
            };
            nodes.push(node);
        }

        Ok(Self { nodes })
    }

    /// Walks from the root to the leaf for `row`. Only valid on normalized trees.
    fn leaf_for(&self, row: &[f64]) -> &[f64] {
        let mut index = 0;

        loop {
            match &self.nodes[index] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                TreeNode::Leaf { distribution } => return distribution,
            }
        }
    }
}

impl Classifier for TreeEnsembleClassifier {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<String>, DomainError> {
        rows.iter()
            .map(|row| self.predict_row(row.as_slice()).map(str::to_string))
            .collect()
    }
}
