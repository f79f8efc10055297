//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;

use crate::{Classifier, Instance, Result};
use super::node::*;


/// Decision tree classifier produced by
/// [`DecisionTree::fit`](super::DecisionTree::fit).
/// This struct is just a wrapper of [`Node`]
/// and is never modified after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Classifier for DecisionTreeClassifier {
    fn predict<I>(&self, instance: &I) -> Result<String>
        where I: Instance + ?Sized
    {
        self.root.predict(instance).map(str::to_string)
    }
}


impl DecisionTreeClassifier {
    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the depth of the tree. A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Returns the plain-text rendering of the tree.
    pub fn render(&self) -> String {
        self.to_string()
    }


    /// Write the colored rendering of the tree to stdout.
    pub fn print(&self) {
        print!("{}", Painted(&self.root));
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_tree(f, 0, false)
    }
}


/// Colored [`Display`](fmt::Display) adapter used by
/// [`DecisionTreeClassifier::print`].
struct Painted<'a>(&'a Node);


impl fmt::Display for Painted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_tree(f, 0, true)
    }
}
