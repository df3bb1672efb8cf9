//! Property-based tests for the spanning forest algorithms.
//!
//! Every algorithm is checked against a sequential sort-based oracle and,
//! on small graphs, against exhaustive search. Structural invariants and
//! cut optimality are validated on each result, and repeated or parallel
//! runs must reproduce the sequential edge list exactly. Borůvka must
//! finish within its logarithmic round bound.

mod concurrency;
mod equivalence;
mod helpers;
mod oracle;
mod rounds;
mod structural;
mod types;
