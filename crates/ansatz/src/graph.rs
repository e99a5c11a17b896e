//! Weighted problem graphs for Max-Cut.
//!
//! Nodes are qubit indices `0..n`. Edges keep their insertion order, which
//! fixes the gate order of the QAOA cost layer.

use std::collections::BTreeSet;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rng::ShakeRng;

use crate::error::ConfigError;

/// Graphs up to this size can be solved exactly by enumeration.
pub const MAX_BRUTE_FORCE_NODES: usize = 24;

#[derive(Clone, Debug)]
pub struct ProblemGraph {
    graph: UnGraph<(), f64>,
}

impl ProblemGraph {
    /// Weighted graph on nodes `0..num_nodes`.
    pub fn new(
        num_nodes: usize,
        edges: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Result<Self, ConfigError> {
        let mut graph: UnGraph<(), f64> = UnGraph::with_capacity(num_nodes, 0);
        for _ in 0..num_nodes {
            graph.add_node(());
        }

        for (u, v, weight) in edges {
            if u >= num_nodes || v >= num_nodes {
                return Err(ConfigError::NodeOutOfRange { u, v, num_nodes });
            }
            if u == v {
                return Err(ConfigError::SelfLoop(u));
            }
            if !weight.is_finite() {
                return Err(ConfigError::NonFiniteWeight { u, v, weight });
            }
            let (a, b) = (NodeIndex::new(u), NodeIndex::new(v));
            if graph.find_edge(a, b).is_some() {
                return Err(ConfigError::DuplicateEdge { u, v });
            }
            graph.add_edge(a, b, weight);
        }

        Ok(Self { graph })
    }

    pub fn unweighted(
        num_nodes: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, ConfigError> {
        Self::new(num_nodes, edges.into_iter().map(|(u, v)| (u, v, 1.0)))
    }

    /// Graph from an explicit node label set, which must be exactly
    /// `{0, …, n-1}`.
    pub fn from_labelled(
        nodes: impl IntoIterator<Item = usize>,
        edges: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Result<Self, ConfigError> {
        let labels: BTreeSet<usize> = nodes.into_iter().collect();
        let n = labels.len();
        if labels.iter().copied().ne(0..n) {
            return Err(ConfigError::NonContiguousNodes {
                expected: n,
                found: labels.into_iter().collect(),
            });
        }
        Self::new(n, edges)
    }

    pub fn complete(n: usize) -> Self {
        let mut graph: UnGraph<(), f64> = UnGraph::with_capacity(n, n * n.saturating_sub(1) / 2);
        let nodes: Vec<_> = (0..n).map(|_| graph.add_node(())).collect();
        for i in 0..n {
            for j in i + 1..n {
                graph.add_edge(nodes[i], nodes[j], 1.0);
            }
        }
        Self { graph }
    }

    /// Cycle 0-1-…-(n-1)-0 with unit weights. Fewer than three nodes give a
    /// path.
    pub fn ring(n: usize) -> Self {
        let mut graph: UnGraph<(), f64> = UnGraph::with_capacity(n, n);
        let nodes: Vec<_> = (0..n).map(|_| graph.add_node(())).collect();
        for i in 0..n.saturating_sub(1) {
            graph.add_edge(nodes[i], nodes[i + 1], 1.0);
        }
        if n > 2 {
            graph.add_edge(nodes[n - 1], nodes[0], 1.0);
        }
        Self { graph }
    }

    /// Erdős–Rényi G(n, p) with unit weights, drawn from `rng`.
    pub fn erdos_renyi(n: usize, p: f64, rng: &mut ShakeRng) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::EdgeProbability(p));
        }
        let mut graph: UnGraph<(), f64> = UnGraph::with_capacity(n, 0);
        let nodes: Vec<_> = (0..n).map(|_| graph.add_node(())).collect();
        for i in 0..n {
            for j in i + 1..n {
                if rng.next_f64(b"GNP_EDGE") < p {
                    graph.add_edge(nodes[i], nodes[j], 1.0);
                }
            }
        }
        Ok(Self { graph })
    }

    pub fn num_nodes(&self) -> usize {
        self.graph.node_count()
    }

    pub fn num_edges(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), *e.weight()))
    }

    pub fn total_weight(&self) -> f64 {
        self.graph.edge_weights().sum()
    }

    /// Weight of edges crossing the partition; bit `i` of `bits` places node
    /// `i`.
    pub fn cut_value(&self, bits: u64) -> f64 {
        self.edges()
            .filter(|&(u, v, _)| (bits >> u) & 1 != (bits >> v) & 1)
            .map(|(_, _, w)| w)
            .sum()
    }

    /// Exact maximum cut by enumeration. `None` above
    /// [`MAX_BRUTE_FORCE_NODES`].
    pub fn max_cut_brute_force(&self) -> Option<(u64, f64)> {
        let n = self.num_nodes();
        if n > MAX_BRUTE_FORCE_NODES {
            return None;
        }
        // Node n-1 fixed to 0: every cut appears once.
        let half = 1u64 << n.saturating_sub(1);
        (0..half)
            .map(|bits| (bits, self.cut_value(bits)))
            .fold(None, |best: Option<(u64, f64)>, cur| match best {
                Some(b) if b.1 >= cur.1 => Some(b),
                _ => Some(cur),
            })
    }
}
