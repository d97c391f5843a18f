/*
Implements:
 - a reader of whitespace separated integers
 - procedures to read the test cases of both exercises
*/
use std::{fmt, io};

use nom::IResult;
use nom::character::complete::{i64 as signed_integer, multispace0};
use nom::bytes::complete::take_till1;
use nom::sequence::preceded;

use crate::graph::{Graph, VertexId};

/** reasons for rejecting an input */
#[derive(Debug)]
pub enum InputError {
    /// unable to read the input
    Io(io::Error),
    /// the input ended while reading some value
    UnexpectedEnd { expected: &'static str },
    /// a token is not an integer
    InvalidToken { token: String },
    /// negative number of test cases
    InvalidCaseCount(i64),
    /// a graph needs at least one vertex
    InvalidVertexCount(i64),
    /// negative number of edges
    InvalidEdgeCount(i64),
    /// edge endpoint outside 1..=vertex_count
    VertexOutOfRange { vertex: i64, vertex_count: usize },
    /// edge (v, v)
    SelfLoop(VertexId),
    /// divisor summation is only defined for positive integers
    InvalidNumber(i64),
    /// tokens left after the last test case
    TrailingInput { token: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "unable to read the input: {}", e),
            Self::UnexpectedEnd { expected } => write!(f, "unexpected end of input (expected {})", expected),
            Self::InvalidToken { token } => write!(f, "invalid integer \"{}\"", token),
            Self::InvalidCaseCount(n) => write!(f, "invalid number of test cases: {}", n),
            Self::InvalidVertexCount(n) => write!(f, "invalid number of vertices: {} (at least 1)", n),
            Self::InvalidEdgeCount(m) => write!(f, "invalid number of edges: {}", m),
            Self::VertexOutOfRange { vertex, vertex_count } =>
                write!(f, "vertex {} out of range (valid: 1..={})", vertex, vertex_count),
            Self::SelfLoop(v) => write!(f, "self loop on vertex {}", v),
            Self::InvalidNumber(n) => write!(f, "invalid number: {} (positive integer expected)", n),
            Self::TrailingInput { token } => write!(f, "unexpected trailing input \"{}\"", token),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self { Self::Io(e) }
}


/// reads an integer (skips the leading whitespaces)
fn read_integer(s:&str) -> IResult<&str, i64> {
    preceded(multispace0, signed_integer)(s)
}

/// reads the next token (skips the leading whitespaces)
fn read_token(s:&str) -> IResult<&str, &str> {
    preceded(multispace0, take_till1(|c:char| c.is_whitespace()))(s)
}


/** stream of integers separated by whitespaces (spaces, tabs or new lines) */
#[derive(Debug)]
pub struct Tokens<'a> {
    /// input not read yet
    remaining: &'a str,
}

impl<'a> Tokens<'a> {

    /** reads tokens from s */
    pub fn new(s:&'a str) -> Self { Self { remaining: s } }

    /** reads the next integer. expected describes the value (for error messages) */
    pub fn next_integer(&mut self, expected:&'static str) -> Result<i64, InputError> {
        if let Ok((remaining, n)) = read_integer(self.remaining) {
            // "12abc" is a single invalid token, not 12 followed by "abc"
            if remaining.chars().next().map_or(true, |c| c.is_whitespace()) {
                self.remaining = remaining;
                return Ok(n);
            }
        }
        match read_token(self.remaining) {
            Ok((_, token)) => Err(InputError::InvalidToken { token: token.to_string() }),
            Err(_) => Err(InputError::UnexpectedEnd { expected }),
        }
    }

    /** checks that only whitespaces remain */
    pub fn finish(self) -> Result<(), InputError> {
        match read_token(self.remaining) {
            Ok((_, token)) => Err(InputError::TrailingInput { token: token.to_string() }),
            Err(_) => Ok(()),
        }
    }
}


/** reads a vertex id and checks that it belongs to 1..=n */
fn read_vertex(tokens:&mut Tokens, n:usize) -> Result<VertexId, InputError> {
    let v = tokens.next_integer("a vertex id")?;
    if v < 1 || v as u64 > n as u64 {
        return Err(InputError::VertexOutOfRange { vertex: v, vertex_count: n });
    }
    Ok(v as VertexId)
}

/** reads a single test case: "n m", n weights, m edges */
pub fn read_graph(tokens:&mut Tokens) -> Result<Graph, InputError> {
    let n = tokens.next_integer("the number of vertices")?;
    if n < 1 {
        return Err(InputError::InvalidVertexCount(n));
    }
    let m = tokens.next_integer("the number of edges")?;
    if m < 0 {
        return Err(InputError::InvalidEdgeCount(m));
    }
    // weights are read before allocating the graph: n is not trusted until then
    let mut weights = Vec::new();
    for _ in 0..n {
        weights.push(tokens.next_integer("a vertex weight")?);
    }
    let n = weights.len();
    let mut graph = Graph::new(n);
    for (i, w) in weights.into_iter().enumerate() {
        graph.set_weight(i+1, w);
    }
    for _ in 0..m {
        let a = read_vertex(tokens, n)?;
        let b = read_vertex(tokens, n)?;
        if a == b {
            return Err(InputError::SelfLoop(a));
        }
        graph.add_edge(a, b);
    }
    Ok(graph)
}

/** reads the number of test cases */
fn read_case_count(tokens:&mut Tokens) -> Result<usize, InputError> {
    let nb_cases = tokens.next_integer("the number of test cases")?;
    if nb_cases < 0 {
        return Err(InputError::InvalidCaseCount(nb_cases));
    }
    Ok(nb_cases as usize)
}

/** reads all the test cases of the internally stable sets exercise */
pub fn read_graphs(s:&str) -> Result<Vec<Graph>, InputError> {
    let mut tokens = Tokens::new(s);
    let nb_cases = read_case_count(&mut tokens)?;
    let mut res = Vec::new();
    for _ in 0..nb_cases {
        res.push(read_graph(&mut tokens)?);
    }
    tokens.finish()?;
    Ok(res)
}

/** reads all the test cases of the divisor summation exercise */
pub fn read_numbers(s:&str) -> Result<Vec<u64>, InputError> {
    let mut tokens = Tokens::new(s);
    let nb_cases = read_case_count(&mut tokens)?;
    let mut res = Vec::new();
    for _ in 0..nb_cases {
        let n = tokens.next_integer("a positive integer")?;
        if n < 1 {
            return Err(InputError::InvalidNumber(n));
        }
        res.push(n as u64);
    }
    tokens.finish()?;
    Ok(res)
}
