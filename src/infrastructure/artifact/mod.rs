//! Artifact infrastructure - JSON-backed model and encoders

mod encoder;
mod forest;
mod loader;

pub use encoder::LabelEncoder;
pub use forest::{DecisionTree, TreeEnsembleClassifier, TreeNode};
pub use loader::{load_artifacts, Artifacts};
