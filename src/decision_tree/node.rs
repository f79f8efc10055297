//! A node struct used in the ID3 decision tree.
use colored::Colorize;
use serde::{Serialize, Deserialize};

use std::fmt;
use std::collections::BTreeMap;

use crate::{Id3Error, Instance, Result};


/// Indentation for one level of the text rendering.
const INDENT: &str = "    ";


/// Escapes backslashes and `"` so that `text` fits in a quoted DOT label.
fn dot_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}


/// Enumeration of decision nodes and leaf nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that tests the value of `feature`.
    /// Each child is keyed by the feature value leading to it.
    Decision {
        /// Name of the tested feature.
        feature: String,
        /// Children keyed by feature value.
        children: BTreeMap<String, Node>,
    },


    /// A node that predicts `label`.
    Leaf {
        /// The predicted class.
        label: String,
    },
}


impl Node {
    /// Construct a decision node.
    pub fn decision<T: ToString>(
        feature: T,
        children: BTreeMap<String, Node>,
    ) -> Self
    {
        Self::Decision { feature: feature.to_string(), children, }
    }


    /// Construct a leaf node.
    pub fn leaf<T: ToString>(label: T) -> Self {
        Self::Leaf { label: label.to_string(), }
    }


    /// Returns `true` if `self` is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Returns the number of edges on the longest path to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Self::Decision { children, .. } => {
                children.values()
                    .map(|child| child.depth() + 1)
                    .max()
                    .unwrap_or(0)
            },
            Self::Leaf { .. } => 0,
        }
    }


    /// Returns the number of leaves below (and including) `self`.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Decision { children, .. } => {
                children.values().map(Node::n_leaves).sum()
            },
            Self::Leaf { .. } => 1,
        }
    }


    /// Walks down from `self` and returns the label of the reached leaf.
    pub fn predict<I>(&self, instance: &I) -> Result<&str>
        where I: Instance + ?Sized
    {
        let mut node = self;
        loop {
            match node {
                Self::Leaf { label } => { return Ok(label.as_str()); },
                Self::Decision { feature, children } => {
                    let value = instance.value(feature)
                        .ok_or_else(|| Id3Error::MissingInstanceValue {
                            feature: feature.clone(),
                        })?;
                    node = children.get(value)
                        .ok_or_else(|| Id3Error::UnknownCategory {
                            feature: feature.clone(),
                            value: value.to_string(),
                        })?;
                },
            }
        }
    }


    /// Writes the indented rendering of `self` at `level`.
    pub(crate) fn write_tree<W>(&self, w: &mut W, level: usize, paint: bool)
        -> fmt::Result
        where W: fmt::Write
    {
        let indent = INDENT.repeat(level);
        match self {
            Self::Decision { feature, children } => {
                let feature = if paint {
                    feature.bold().to_string()
                } else {
                    feature.to_string()
                };
                writeln!(w, "{indent}{feature}")?;

                for (value, child) in children {
                    let value = if paint {
                        value.cyan().to_string()
                    } else {
                        value.to_string()
                    };
                    writeln!(w, "{indent}{INDENT}{value}")?;
                    child.write_tree(w, level + 2, paint)?;
                }
                Ok(())
            },
            Self::Leaf { label } => {
                let label = if paint {
                    label.green().to_string()
                } else {
                    label.to_string()
                };
                writeln!(w, "{indent}-> {label}")
            },
        }
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Decision { feature, children } => {
                let feature = dot_escape(feature);
                let mut info = vec![
                    format!("\tnode_{id} [ label = \"{feature}\" ];\n")
                ];

                let mut next_id = id + 1;
                for (value, child) in children {
                    let child_id = next_id;
                    let (mut child_info, return_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);
                    let value = dot_escape(value);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n"
                    ));
                    next_id = return_id;
                }

                (info, next_id)
            },
            Self::Leaf { label } => {
                let label = dot_escape(label);
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_labels_are_escaped() {
        let mut children = BTreeMap::new();
        children.insert(r#"12" pipe"#.to_string(), Node::leaf(r"a\b"));
        let root = Node::decision(r#"size "in""#, children);

        let info = root.to_dot_info(0).0.concat();
        assert!(info.contains(r#"label = "size \"in\"""#));
        assert!(info.contains(r#"label = "12\" pipe""#));
        assert!(info.contains(r#"label = "a\\b", shape = box"#));
    }
}
