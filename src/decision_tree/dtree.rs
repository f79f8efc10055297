use std::fmt;
use std::collections::BTreeMap;

use crate::{Classifier, Id3Error, Instance, Result, Sample};
use super::{
    entropy::*,
    leaf_label::LeafLabel,
    node::Node,
    dtree_classifier::DecisionTreeClassifier,
};


/// The ID3 decision tree algorithm.
/// Given a set of training examples with categorical features,
/// [`DecisionTree::fit`] grows a [`DecisionTreeClassifier`]
/// by repeatedly splitting on the feature of maximal information gain.
/// A feature is used at most once along each root-to-leaf path,
/// so the depth of the tree never exceeds the number of features.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](super::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use miniid3::{Classifier, DecisionTreeBuilder, WeatherGenerator};
///
/// let sample = WeatherGenerator::new(42).clean().unwrap();
/// let mut tree = DecisionTreeBuilder::new(&sample)
///     .build()
///     .unwrap();
/// tree.fit(&sample).unwrap();
/// tree.print_tree().unwrap();
///
/// let label = tree.predict(&[
///     ("Outlook", "Sunny"),
///     ("Temperature", "Hot"),
///     ("Humidity", "Normal"),
///     ("Wind", "Weak"),
/// ]).unwrap();
/// assert_eq!(label, "Yes");
/// ```
pub struct DecisionTree {
    features:   Vec<String>,
    leaf_label: LeafLabel,
    classifier: Option<DecisionTreeClassifier>,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(features: Vec<String>, leaf_label: LeafLabel) -> Self {
        Self { features, leaf_label, classifier: None, }
    }


    /// Returns the candidate features in tie-breaking order.
    pub fn features(&self) -> &[String] {
        &self.features[..]
    }


    /// Returns the label policy for exhausted leaves.
    pub fn leaf_label(&self) -> LeafLabel {
        self.leaf_label
    }


    /// Grow a tree on every row of `sample` and store it,
    /// replacing the tree of a previous call.
    /// On error, the previously stored tree is kept.
    pub fn fit(&mut self, sample: &Sample) -> Result<&DecisionTreeClassifier> {
        let n_sample = sample.shape().0;
        if n_sample == 0 { return Err(Id3Error::EmptySample); }

        let candidates = self.features.iter()
            .map(String::as_str)
            .collect::<Vec<_>>();
        for name in &candidates {
            sample.feature(name)?;
        }
        tracing::info!(
            n_sample,
            n_feature = candidates.len(),
            leaf_label = %self.leaf_label,
            "growing ID3 tree"
        );

        let indices = (0..n_sample).collect::<Vec<usize>>();
        let root = self.grow(sample, indices, &candidates[..], 0)?;

        let classifier = DecisionTreeClassifier::from(root);
        tracing::info!(
            depth = classifier.depth(),
            n_leaves = classifier.n_leaves(),
            "ID3 tree is grown"
        );

        Ok(self.classifier.insert(classifier))
    }


    /// Construct the subtree for the rows `indices`,
    /// splitting only on `candidates`.
    fn grow(
        &self,
        sample:     &Sample,
        indices:    Vec<usize>,
        candidates: &[&str],
        depth:      usize,
    ) -> Result<Node>
    {
        let target = sample.target();
        let Some(&first) = indices.first() else {
            return Err(Id3Error::EmptySample);
        };

        // All rows share the same label.
        let label = target[first].as_str();
        if indices.iter().all(|&i| target[i] == label) {
            tracing::debug!(
                label, depth, n_sample = indices.len(), "homogeneous leaf"
            );
            return Ok(Node::leaf(label));
        }

        // No feature is left on this path.
        if candidates.is_empty() {
            return self.exhausted_leaf(sample, &indices, depth);
        }

        let Some((feature, gain)) = best_feature(sample, &indices, candidates)?
        else {
            return self.exhausted_leaf(sample, &indices, depth);
        };
        tracing::debug!(
            feature, gain, depth, n_sample = indices.len(), "decision node"
        );

        let parts = partition(sample, &indices, feature)?;

        // Siblings share this list, never a mutated one.
        let rest = candidates.iter()
            .copied()
            .filter(|&name| name != feature)
            .collect::<Vec<_>>();

        let mut children = BTreeMap::new();
        for (value, part) in parts {
            let child = if part.is_empty() {
                self.exhausted_leaf(sample, &indices, depth + 1)?
            } else {
                self.grow(sample, part, &rest[..], depth + 1)?
            };
            children.insert(value.to_string(), child);
        }

        Ok(Node::decision(feature, children))
    }


    fn exhausted_leaf(&self, sample: &Sample, indices: &[usize], depth: usize)
        -> Result<Node>
    {
        let label = self.leaf_label.choose(sample, indices)
            .ok_or(Id3Error::EmptySample)?;
        tracing::debug!(
            label,
            depth,
            n_sample = indices.len(),
            entropy = entropy(sample, indices),
            "exhausted leaf"
        );
        Ok(Node::leaf(label))
    }


    /// Returns the fitted classifier, if any.
    pub fn classifier(&self) -> Option<&DecisionTreeClassifier> {
        self.classifier.as_ref()
    }


    /// Consumes `self` and returns the fitted classifier, if any.
    pub fn into_classifier(self) -> Option<DecisionTreeClassifier> {
        self.classifier
    }


    /// Returns the plain-text rendering of the fitted tree.
    pub fn render(&self) -> Result<String> {
        self.fitted().map(DecisionTreeClassifier::render)
    }


    /// Write the fitted tree to stdout.
    pub fn print_tree(&self) -> Result<()> {
        self.fitted()?.print();
        Ok(())
    }


    fn fitted(&self) -> Result<&DecisionTreeClassifier> {
        self.classifier.as_ref().ok_or(Id3Error::NotFitted)
    }
}


impl Classifier for DecisionTree {
    fn predict<I>(&self, instance: &I) -> Result<String>
        where I: Instance + ?Sized
    {
        self.fitted()?.predict(instance)
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # ID3 Decision Tree\n\n\
            - Leaf label: {}\n\
            - Features: {}\
            ",
            self.leaf_label,
            self.features.join(", "),
        )?;

        match &self.classifier {
            Some(classifier) => {
                writeln!(
                    f,
                    "- Depth: {}\n- Leaves: {}",
                    classifier.depth(),
                    classifier.n_leaves(),
                )?;
            },
            None => { writeln!(f, "- Not fitted")?; },
        }

        write!(f, "----------")
    }
}
