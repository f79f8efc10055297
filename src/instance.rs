//! Defines the [`Instance`] trait,
//! the input accepted by [`Classifier::predict`](crate::Classifier::predict).
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::SampleRow;


/// Something that maps a feature name to a categorical value.
pub trait Instance {
    /// Returns the value of `feature`, or `None` if it is missing.
    fn value(&self, feature: &str) -> Option<&str>;
}


impl<H: BuildHasher> Instance for HashMap<String, String, H> {
    fn value(&self, feature: &str) -> Option<&str> {
        self.get(feature).map(String::as_str)
    }
}


impl Instance for BTreeMap<String, String> {
    fn value(&self, feature: &str) -> Option<&str> {
        self.get(feature).map(String::as_str)
    }
}


impl<'a, const N: usize> Instance for [(&'a str, &'a str); N] {
    fn value(&self, feature: &str) -> Option<&str> {
        self.iter()
            .find(|(name, _)| *name == feature)
            .map(|(_, value)| *value)
    }
}


impl<'a> Instance for [(&'a str, &'a str)] {
    fn value(&self, feature: &str) -> Option<&str> {
        self.iter()
            .find(|(name, _)| *name == feature)
            .map(|(_, value)| *value)
    }
}


impl Instance for SampleRow<'_> {
    fn value(&self, feature: &str) -> Option<&str> {
        self.get(feature)
    }
}
