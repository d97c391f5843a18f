use std::cmp::max;
use std::hash::{Hash, Hasher};

use crate::graph::{Graph, Weight};

/** what is known about adding a vertex to a candidate set */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    /// not computed yet
    Unknown,
    /// not adjacent to any member
    Extendable,
    /// adjacent to some member
    Blocked,
}

/**
represents a node of the search: an internally stable set that is only extended with vertices
greater than its largest member.
Vertices are 0-based indices of the graph.
*/
#[derive(Debug, Clone)]
pub struct Candidate {
    /// members of the set (sorted)
    members: Vec<usize>,
    /// sum of the member weights
    weight: Weight,
    /// cache[v]: can v be added to the set?
    cache: Vec<Extension>,
}

impl Candidate {

    /** singleton set {v} */
    pub fn singleton(graph:&Graph, v:usize) -> Self {
        Self {
            members: vec![v],
            weight: graph.weight_at(v),
            cache: vec![Extension::Unknown ; graph.vertex_count()],
        }
    }

    /// members of the set (0-based, sorted)
    pub fn members(&self) -> &[usize] { &self.members }

    /// total weight of the set
    pub fn weight(&self) -> Weight { self.weight }

    /// cached knowledge about vertex v
    pub fn extension(&self, v:usize) -> Extension { self.cache[v] }

    /// first vertex that may extend the set
    pub fn next_unchecked_vertex(&self) -> usize {
        match self.members.last() {
            None => 0,
            Some(v) => v+1
        }
    }

    /** returns true if v is adjacent to no member (caches the result) */
    pub fn can_extend(&mut self, graph:&Graph, v:usize) -> bool {
        if self.cache[v] == Extension::Unknown {
            let blocked = self.members.iter().any(|u| graph.are_adjacent(*u, v));
            self.cache[v] = if blocked { Extension::Blocked } else { Extension::Extendable };
        }
        self.cache[v] == Extension::Extendable
    }

    /** vertices that can extend the set */
    pub fn extensions(&mut self, graph:&Graph) -> Vec<usize> {
        (self.next_unchecked_vertex()..graph.vertex_count())
            .filter(|v| self.can_extend(graph, *v))
            .collect()
    }

    /**
    upper bound of the weight of any set built from this one: its weight, plus the positive
    weight of every vertex that can extend it (negative vertices are never worth adding).
    Each vertex is checked against the members only, not against the other extensions.
    */
    pub fn theoretical_max_weight(&mut self, graph:&Graph) -> Weight {
        let possible:Weight = self.extensions(graph).iter()
            .map(|v| max(0, graph.weight_at(*v)))
            .sum();
        self.weight + possible
    }

    /**
    builds the set {members} ∪ {v}.
    Blocked vertices stay blocked (a superset keeps every adjacency), the other
    vertices are computed again since v may be adjacent to them.
    */
    pub fn extend(&self, graph:&Graph, v:usize) -> Self {
        debug_assert!(v >= self.next_unchecked_vertex());
        debug_assert!(self.cache[v] != Extension::Blocked);
        let mut members = self.members.clone();
        members.push(v);
        let cache = self.cache.iter().map(|e| match e {
            Extension::Blocked => Extension::Blocked,
            _ => Extension::Unknown,
        }).collect();
        Self {
            members,
            weight: self.weight + graph.weight_at(v),
            cache,
        }
    }
}

// two nodes are the same if they contain the same vertices
impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool { self.members == other.members }
}

impl Eq for Candidate {}

impl Hash for Candidate {
    fn hash<H: Hasher>(&self, state: &mut H) { self.members.hash(state); }
}
