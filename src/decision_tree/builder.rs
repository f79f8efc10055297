use crate::{Result, Sample};
use super::{
    dtree::DecisionTree,
    leaf_label::LeafLabel,
};


/// A struct that builds [`DecisionTree`].
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use miniid3::{DecisionTreeBuilder, LeafLabel, SampleReader};
///
/// let sample = SampleReader::default()
///     .file("clean.csv")
///     .has_header(true)
///     .target_feature("Class")
///     .read()
///     .unwrap();
/// let mut tree = DecisionTreeBuilder::new(&sample)
///     .features(["Outlook", "Temperature", "Humidity", "Wind"])
///     .leaf_label(LeafLabel::Majority)
///     .build()
///     .unwrap();
/// tree.fit(&sample).unwrap();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    sample: &'a Sample,
    features: Vec<String>,
    leaf_label: LeafLabel,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// features: every feature of `sample`, in column order,
    /// leaf_label: LeafLabel::Majority,
    /// ```
    pub fn new(sample: &'a Sample) -> Self {
        let features = sample.feature_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let leaf_label = LeafLabel::default();

        Self { sample, features, leaf_label, }
    }


    /// Set the candidate features.
    /// The order matters: on equal information gain,
    /// the feature listed first is chosen.
    pub fn features<I, T>(mut self, features: I) -> Self
        where I: IntoIterator<Item = T>,
              T: AsRef<str>,
    {
        self.features = features.into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        self
    }


    /// Set the label policy for leaves
    /// that run out of candidate features.
    /// Default value is `LeafLabel::Majority`.
    /// See [`LeafLabel`] for other rules.
    #[inline]
    pub fn leaf_label(mut self, leaf_label: LeafLabel) -> Self {
        self.leaf_label = leaf_label;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    /// Fails if some candidate is not a feature of the sample.
    /// Repeated candidates are kept once.
    pub fn build(self) -> Result<DecisionTree> {
        let mut features: Vec<String> = Vec::with_capacity(self.features.len());
        for name in self.features {
            self.sample.feature(&name)?;
            if !features.contains(&name) {
                features.push(name);
            }
        }

        let dtree = DecisionTree::new(features, self.leaf_label);
        Ok(dtree)
    }
}
