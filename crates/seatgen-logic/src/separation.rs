//! Undirected "must not sit together" graph.
//!
//! `SeparationGraph` holds a pre-built adjacency mapping from each name to
//! the names it may not be seated next to. It is built once per generator
//! and only read afterwards.

use std::collections::{HashMap, HashSet};

/// Adjacency mapping name → separated names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeparationGraph {
    adj: HashMap<String, HashSet<String>>,
}

impl SeparationGraph {
    /// Build a graph whose nodes are `names` plus every pair member.
    ///
    /// Each pair of two distinct names adds an edge in both directions.
    /// Self-pairs are dropped.
    pub fn build<N, P>(names: N, pairs: P) -> Self
    where
        N: IntoIterator,
        N::Item: AsRef<str>,
        P: IntoIterator<Item = (String, String)>,
    {
        let mut adj: HashMap<String, HashSet<String>> = HashMap::new();
        for name in names {
            adj.entry(name.as_ref().to_string()).or_default();
        }
        for (a, b) in pairs {
            if a == b {
                continue;
            }
            adj.entry(a.clone()).or_default().insert(b.clone());
            adj.entry(b).or_default().insert(a);
        }
        Self { adj }
    }

    /// Names that must not sit next to `name`. Empty for unknown names.
    pub fn neighbors_of(&self, name: &str) -> impl Iterator<Item = &str> + '_ {
        self.adj
            .get(name)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Whether `a` and `b` are a separated pair.
    pub fn is_separated(&self, a: &str, b: &str) -> bool {
        self.adj.get(a).is_some_and(|set| set.contains(b))
    }

    /// Whether `name` has any separation edge at all.
    pub fn has_edges(&self, name: &str) -> bool {
        self.adj.get(name).is_some_and(|set| !set.is_empty())
    }

    /// Check if a name is a node of the graph.
    pub fn contains(&self, name: &str) -> bool {
        self.adj.contains_key(name)
    }

    /// Number of distinct names in the graph.
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.values().map(HashSet::len).sum::<usize>() / 2
    }
}
