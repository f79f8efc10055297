//! The ID3 decision tree.

/// Defines the entropy and information gain of a split.
pub mod entropy;
/// Defines the decision tree learner.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod dtree_classifier;

mod builder;
mod leaf_label;
mod node;


pub use builder::DecisionTreeBuilder;
pub use dtree::DecisionTree;
pub use dtree_classifier::DecisionTreeClassifier;
pub use leaf_label::LeafLabel;
pub use node::Node;
