#![warn(missing_docs)]

//!
//! A crate that grows decision trees with the ID3 algorithm.
//!
//! ID3 is a greedy, recursive procedure over categorical features.
//! At each node it splits on the feature of maximal information gain,
//! creates one child per value observed among the rows reaching the node,
//! and never splits twice on the same feature along a path.
//! No pruning or backtracking is performed.
//!
//! - [`Sample`] holds the training data as categorical columns
//!     and a separate target column.
//!     [`SampleReader`] reads it from a CSV file.
//! - [`DecisionTreeBuilder`] configures a [`DecisionTree`],
//!     whose [`fit`](DecisionTree::fit) produces a
//!     [`DecisionTreeClassifier`].
//! - [`Classifier::predict`] walks the tree for any [`Instance`].
//!     A category never seen during training is reported as
//!     [`Id3Error::UnknownCategory`].
//!
//! ```
//! use miniid3::{Classifier, DecisionTreeBuilder, WeatherGenerator};
//!
//! let sample = WeatherGenerator::exhaustive().unwrap();
//! let mut tree = DecisionTreeBuilder::new(&sample).build().unwrap();
//! let classifier = tree.fit(&sample).unwrap();
//! assert_eq!(classifier.accuracy(&sample).unwrap(), 1.0);
//! ```

pub mod error;
pub mod sample;
pub mod instance;
pub mod classifier;
pub mod decision_tree;
pub mod generator;
pub mod prelude;


pub use error::{Id3Error, Result};

pub use sample::{
    Feature,
    Sample,
    SampleReader,
    SampleRow,
};

pub use instance::Instance;
pub use classifier::Classifier;

pub use decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    LeafLabel,
    Node,
};

pub use decision_tree::entropy::{
    best_feature,
    entropy,
    information_gain,
    partition,
};

pub use generator::{
    weather_rule,
    WeatherGenerator,
    WEATHER_FEATURES,
    WEATHER_TARGET,
};
