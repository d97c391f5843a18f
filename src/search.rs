use std::cmp::max;

use priority_queue::PriorityQueue;
use serde::Serialize;

use crate::graph::{Graph, Weight};
use crate::iss::Candidate;


/** counters collected during a search */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStatistics {
    /// singletons inserted at the start
    pub nb_seeds: usize,
    /// nodes whose children were generated
    pub nb_expanded: usize,
    /// nodes discarded by the bound
    pub nb_pruned: usize,
    /// children inserted in the frontier
    pub nb_generated: usize,
    /// largest number of nodes waiting in the frontier
    pub max_frontier_size: usize,
    /// best weight found
    pub best: Weight,
}

impl SearchStatistics {
    /// prints the statistics (on stderr)
    pub fn display_statistics(&self) {
        eprintln!("\t{:>25}{:>12}", "seeds:", self.nb_seeds);
        eprintln!("\t{:>25}{:>12}", "expanded nodes:", self.nb_expanded);
        eprintln!("\t{:>25}{:>12}", "pruned nodes:", self.nb_pruned);
        eprintln!("\t{:>25}{:>12}", "generated nodes:", self.nb_generated);
        eprintln!("\t{:>25}{:>12}", "max frontier size:", self.max_frontier_size);
        eprintln!("\t{:>25}{:>12}", "best weight:", self.best);
    }
}


/**
best-first branch & bound for the maximum weight internally stable set.
    1. insert every singleton in the frontier (ordered by theoretical max weight)
    2. pop the node with the highest bound, update the best weight
    3. if its bound does not exceed the best weight, discard it
    4. otherwise insert each set obtained by adding a vertex greater than its members
    5. repeat until the frontier is empty

Vertices are added in increasing order, so each stable set is reached by exactly one path.
The empty set is always feasible: the result is at least 0.
*/
pub fn search(graph:&Graph) -> (Weight, SearchStatistics) {
    let mut stats = SearchStatistics::default();
    let mut frontier:PriorityQueue<Candidate, Weight> = PriorityQueue::new();
    let mut best:Weight = 0;
    // trivial sets: single vertices
    for v in 0..graph.vertex_count() {
        let mut seed = Candidate::singleton(graph, v);
        best = max(best, seed.weight());
        let bound = seed.theoretical_max_weight(graph);
        frontier.push(seed, bound);
        stats.nb_seeds += 1;
    }
    stats.max_frontier_size = frontier.len();
    while let Some((mut node, bound)) = frontier.pop() {
        best = max(best, node.weight());
        if bound <= best {
            stats.nb_pruned += 1;
            continue;
        }
        stats.nb_expanded += 1;
        for v in node.extensions(graph) {
            let mut child = node.extend(graph, v);
            let child_bound = child.theoretical_max_weight(graph);
            frontier.push(child, child_bound);
            stats.nb_generated += 1;
        }
        stats.max_frontier_size = max(stats.max_frontier_size, frontier.len());
    }
    stats.best = best;
    (best, stats)
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::graph::{checker, VertexId};

    fn build(weights:&[Weight], edges:&[(VertexId, VertexId)]) -> Graph {
        let mut g = Graph::new(weights.len());
        for (i, w) in weights.iter().enumerate() { g.set_weight(i+1, *w); }
        for (a, b) in edges { g.add_edge(*a, *b); }
        g
    }

    /// enumerates every subset (small graphs only)
    fn brute_force(g:&Graph) -> Weight {
        let n = g.vertex_count();
        let mut best = 0;
        for mask in 0..(1u32 << n) {
            let vertices:Vec<VertexId> = (0..n).filter(|i| mask & (1 << i) != 0).map(|i| i+1).collect();
            if let Some(w) = checker(g, &vertices) {
                best = max(best, w);
            }
        }
        best
    }

    #[test]
    fn test_path_of_four() {
        let g = build(&[1, 1, 1, 1], &[(1, 2), (2, 3)]);
        assert_eq!(g.max_independent_weight(), 3);
    }

    #[test]
    fn test_negative_weight() {
        let g = build(&[5, -2, 3], &[]);
        assert_eq!(g.max_independent_weight(), 8);
    }

    #[test]
    fn test_negative_weight_between_positive_ones() {
        // {1} must not be pruned by the -5 it can not usefully take
        let g = build(&[1, -5, 10], &[]);
        assert_eq!(g.max_independent_weight(), 11);
        let g = build(&[4, -3, -3, 2, -1, 6], &[(1, 4)]);
        assert_eq!(g.max_independent_weight(), 10);
    }

    #[test]
    fn test_all_negative() {
        let g = build(&[-1, -4, -2], &[(1, 2)]);
        assert_eq!(g.max_independent_weight(), 0);
    }

    #[test]
    fn test_single_vertex() {
        assert_eq!(build(&[7], &[]).max_independent_weight(), 7);
        assert_eq!(build(&[0], &[]).max_independent_weight(), 0);
    }

    #[test]
    fn test_no_edges() {
        let weights = [3, 0, 8, 1, 4, 4, 2];
        let g = build(&weights, &[]);
        assert_eq!(g.max_independent_weight(), weights.iter().sum::<Weight>());
    }

    #[test]
    fn test_complete_graph() {
        let weights = [3, 9, -1, 4, 9, 2];
        let mut edges = Vec::new();
        for a in 1..=weights.len() {
            for b in a+1..=weights.len() { edges.push((a, b)); }
        }
        let g = build(&weights, &edges);
        assert_eq!(g.max_independent_weight(), 9);
        let g = build(&[-3, -5, -1], &[(1, 2), (1, 3), (2, 3)]);
        assert_eq!(g.max_independent_weight(), 0);
    }

    #[test]
    fn test_paths() {
        for n in 1..=15 {
            let edges:Vec<(VertexId, VertexId)> = (1..n).map(|i| (i, i+1)).collect();
            let g = build(&vec![1 ; n], &edges);
            assert_eq!(g.max_independent_weight(), ((n+1)/2) as Weight, "path of {} vertices", n);
        }
    }

    #[test]
    fn test_star() {
        // heavy center, light leaves (and the other way around)
        let g = build(&[10, 1, 1, 1, 1], &[(1, 2), (1, 3), (1, 4), (1, 5)]);
        assert_eq!(g.max_independent_weight(), 10);
        let g = build(&[3, 1, 1, 1, 1], &[(1, 2), (1, 3), (1, 4), (1, 5)]);
        assert_eq!(g.max_independent_weight(), 4);
    }

    #[test]
    fn test_statistics() {
        let g = build(&[1, 1, 1, 1], &[(1, 2), (2, 3)]);
        let (best, stats) = search(&g);
        assert_eq!(best, 3);
        assert_eq!(stats.best, 3);
        assert_eq!(stats.nb_seeds, 4);
        assert!(stats.max_frontier_size >= 4);
        // every node is either expanded or pruned
        assert_eq!(stats.nb_seeds + stats.nb_generated, stats.nb_expanded + stats.nb_pruned);
    }

    #[test]
    fn test_random_graphs() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..200 {
            let n = rng.usize(1..=11);
            let mut g = Graph::new(n);
            for v in 1..=n { g.set_weight(v, rng.i64(-5..=20)); }
            let density = rng.f64();
            for a in 1..=n {
                for b in a+1..=n {
                    if rng.f64() < density { g.add_edge(a, b); }
                }
            }
            assert_eq!(g.max_independent_weight(), brute_force(&g));
        }
    }
}
