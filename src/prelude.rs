//! Exports the ID3 learner, the sample types, and the traits.
//! 
pub use crate::decision_tree::{
    // Learner and its configuration
    DecisionTree,
    DecisionTreeBuilder,
    LeafLabel,


    // Fitted tree
    DecisionTreeClassifier,
    Node,
};


pub use crate::decision_tree::entropy::{
    entropy,
    information_gain,
    best_feature,
    partition,
};


pub use crate::sample::{
    Feature,
    Sample,
    SampleReader,
    SampleRow,
};


pub use crate::classifier::Classifier;
pub use crate::instance::Instance;
pub use crate::error::Id3Error;


pub use crate::generator::{
    weather_rule,
    WeatherGenerator,
    WEATHER_FEATURES,
    WEATHER_TARGET,
};
