use bit_set::BitSet;

use crate::search::search;

/** Vertex Id (1-based on the public interface, as in the input format) */
pub type VertexId = usize;

/** vertex weight */
pub type Weight = i64;

/** models a vertex-weighted undirected graph.
Vertices are numbered 1..=n from the outside. They are stored 0-based.
*/
#[derive(Debug, Clone)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// weights[i]: weight of vertex i+1
    weights: Vec<Weight>,
    /// adj_matrix[i] represents a bitset of the neighbors of vertex i+1
    adj_matrix: Vec<BitSet>,
}


impl Graph {

    /** creates a graph with n vertices, no edges and all weights set to 0.

# Panics
- if n == 0
*/
    pub fn new(n:usize) -> Self {
        assert!(n >= 1, "a graph needs at least one vertex");
        Self {
            n,
            m: 0,
            weights: vec![0 ; n],
            adj_matrix: vec![BitSet::with_capacity(n) ; n],
        }
    }

    /// number of vertices
    pub fn vertex_count(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// weight of vertex v
    pub fn weight(&self, v:VertexId) -> Weight { self.weights[self.index(v)] }

    /// sets the weight of vertex v (any sign is accepted)
    pub fn set_weight(&mut self, v:VertexId, w:Weight) {
        let i = self.index(v);
        self.weights[i] = w;
    }

    /** marks v1 and v2 as adjacent. Adding an existing edge does nothing.

# Panics
- if v1 or v2 is out of range, or if v1 == v2
*/
    pub fn add_edge(&mut self, v1:VertexId, v2:VertexId) {
        assert_ne!(v1, v2, "self loops are not allowed (vertex {})", v1);
        let (a, b) = (self.index(v1), self.index(v2));
        if self.adj_matrix[a].insert(b) {
            self.adj_matrix[b].insert(a);
            self.m += 1;
        }
    }

    /// returns true if v1 and v2 are adjacent. O(1)
    pub fn are_neighbors(&self, v1:VertexId, v2:VertexId) -> bool {
        self.are_adjacent(self.index(v1), self.index(v2))
    }

    /// number of neighbors of v
    pub fn degree(&self, v:VertexId) -> usize { self.adj_matrix[self.index(v)].len() }

    /// list of the vertices adjacent to v (sorted)
    pub fn neighbors(&self, v:VertexId) -> Vec<VertexId> {
        self.adj_matrix[self.index(v)].iter().map(|u| u+1).collect()
    }

    /// iterates over the vertices of the graph
    pub fn vertices(&self) -> impl Iterator<Item=VertexId> { 1..=self.n }

    /** maximum total weight of an internally stable set.
    The empty set is allowed, so the result is never negative.
    */
    pub fn max_independent_weight(&self) -> Weight {
        search(self).0
    }

    /// print statistics of the instance (on stderr, stdout holds the answers)
    pub fn display_statistics(&self) {
        eprintln!("\t{} \t vertices", self.vertex_count());
        eprintln!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = self.vertices().map(|v| self.degree(v)).collect();
        if let (Some(min), Some(max)) = (degrees.iter().min(), degrees.iter().max()) {
            eprintln!("\t{} \t min degree", min);
            eprintln!("\t{} \t max degree", max);
        }
    }

    /// adjacency between 0-based vertices (used by the search)
    pub(crate) fn are_adjacent(&self, a:usize, b:usize) -> bool {
        self.adj_matrix[a].contains(b)
    }

    /// weight of a 0-based vertex (used by the search)
    pub(crate) fn weight_at(&self, a:usize) -> Weight { self.weights[a] }

    /// 0-based index of a vertex
    fn index(&self, v:VertexId) -> usize {
        assert!(
            v >= 1 && v <= self.n,
            "vertex {} out of range (valid: 1..={})", v, self.n
        );
        v - 1
    }
}


/**
returns None if the vertices are not an internally stable set
(duplicates, out of range vertices or adjacent vertices).
returns the total weight of the set otherwise
*/
pub fn checker(graph:&Graph, vertices:&[VertexId]) -> Option<Weight> {
    let mut visited = BitSet::new();
    for v in vertices {
        if *v < 1 || *v > graph.vertex_count() || !visited.insert(*v) {
            return None;
        }
    }
    for (i, v1) in vertices.iter().enumerate() {
        for v2 in &vertices[i+1..] {
            if graph.are_neighbors(*v1, *v2) { return None }
        }
    }
    Some(vertices.iter().map(|v| graph.weight(*v)).sum())
}
