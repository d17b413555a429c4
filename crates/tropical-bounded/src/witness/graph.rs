//! Layered graph of a word and single-source shortest paths over it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::types::{ArithmeticOverflow, Weight};
use crate::TropicalMatrix;

#[derive(Debug, Clone, Copy)]
struct Edge {
    target: usize,
    weight: u32,
}

/// Priority-queue entry ordered so that `BinaryHeap` pops the cheapest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    cost: u32,
    node: usize,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One layer of `n` nodes per word position, `L + 1` layers in total.
///
/// Node `j` of layer `i` is `i * n + j`. It has an edge to node `k` of
/// layer `i + 1` weighted `word[i][j][k]` whenever that entry is finite.
/// Each start-to-end path therefore picks one term of the min in the
/// `(start, end)` entry of the word's product.
pub(crate) struct LayeredGraph {
    n: usize,
    adjacency: Vec<Vec<Edge>>,
}

impl LayeredGraph {
    /// Build the graph for `layers` given in word order.
    pub(crate) fn build<'a, I>(n: usize, layers: I) -> Self
    where
        I: IntoIterator<Item = &'a TropicalMatrix>,
    {
        let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); n];
        for (i, m) in layers.into_iter().enumerate() {
            adjacency.extend((0..n).map(|_| Vec::new()));
            for j in 0..n {
                let out = &mut adjacency[i * n + j];
                for k in 0..n {
                    if let Weight::Finite(weight) = m.get(j, k) {
                        out.push(Edge {
                            target: (i + 1) * n + k,
                            weight,
                        });
                    }
                }
            }
        }
        Self { n, adjacency }
    }

    /// Number of layers (word length + 1).
    pub(crate) fn layers(&self) -> usize {
        self.adjacency.len() / self.n
    }

    /// Global node id of `node` in `layer`.
    #[inline]
    pub(crate) fn node(&self, layer: usize, node: usize) -> usize {
        layer * self.n + node
    }

    /// Dijkstra from `source` to `target` over non-negative weights.
    ///
    /// Returns the distance and the node sequence (global ids), or `None`
    /// if `target` is unreachable.
    pub(crate) fn shortest_path(&self, source: usize, target: usize) -> Result<Option<(u32, Vec<usize>)>> {
        let mut dist: Vec<Option<u32>> = vec![None; self.adjacency.len()];
        let mut prev: Vec<Option<usize>> = vec![None; self.adjacency.len()];
        let mut queue = BinaryHeap::new();

        dist[source] = Some(0);
        queue.push(Candidate { cost: 0, node: source });

        while let Some(Candidate { cost, node }) = queue.pop() {
            if node == target {
                break;
            }
            if dist[node].map_or(false, |d| cost > d) {
                continue;
            }
            for edge in &self.adjacency[node] {
                let next = cost.checked_add(edge.weight).ok_or(ArithmeticOverflow {
                    lhs: cost,
                    rhs: edge.weight,
                })?;
                if dist[edge.target].map_or(true, |d| next < d) {
                    dist[edge.target] = Some(next);
                    prev[edge.target] = Some(node);
                    queue.push(Candidate {
                        cost: next,
                        node: edge.target,
                    });
                }
            }
        }

        let Some(distance) = dist[target] else {
            return Ok(None);
        };
        let mut path = vec![target];
        let mut at = target;
        while let Some(p) = prev[at] {
            path.push(p);
            at = p;
        }
        path.reverse();
        Ok(Some((distance, path)))
    }
}
