//! A module for working with edges.

use std::fmt;

use serde::Serialize;

/// A pair of labels representing a graph edge. Edges don't have a direction, despite the
/// `source`-`target` nomenclature used: the pair is stored in canonical (sorted) order so that
/// `(u, v)` and `(v, u)` name the same edge.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    source: String,
    target: String,
}

impl Edge {
    /// Creates a new edge from two labels.
    ///
    /// # Examples
    ///
    /// ```
    /// use vicinity::edge::Edge;
    ///
    /// let edge = Edge::new("b", "a");
    /// assert_eq!(edge, Edge::new("a", "b"));
    /// ```
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());

        if a <= b {
            Self {
                source: a,
                target: b,
            }
        } else {
            Self {
                source: b,
                target: a,
            }
        }
    }

    /// Returns the lexicographically smaller label of the pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use vicinity::edge::Edge;
    ///
    /// let edge = Edge::new("b", "a");
    /// assert_eq!(edge.source(), "a");
    /// ```
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the lexicographically larger label of the pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use vicinity::edge::Edge;
    ///
    /// let edge = Edge::new("b", "a");
    /// assert_eq!(edge.target(), "b");
    /// ```
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns whether the edge contains the given label.
    ///
    /// # Examples
    ///
    /// ```
    /// use vicinity::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    ///
    /// assert_eq!(edge.contains("a"), true);
    /// assert_eq!(edge.contains("b"), true);
    /// assert_eq!(edge.contains("c"), false);
    /// ```
    pub fn contains(&self, label: &str) -> bool {
        self.source == label || self.target == label
    }
}

//
// Trait implementations
//

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.source, self.target)
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for Edge {
    fn from((a, b): (A, B)) -> Self {
        Self::new(a, b)
    }
}
