//! Maximum weight internally stable sets (and divisor summation) for batches of test cases

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// weighted graph, stable set checker
pub mod graph;

/// candidate sets explored by the search
pub mod iss;

/// branch & bound for the maximum weight internally stable set
pub mod search;

/// reads the test cases
pub mod input;

/// sum of proper divisors
pub mod divisor;

/// helper and utility methods for executables
pub mod util;
