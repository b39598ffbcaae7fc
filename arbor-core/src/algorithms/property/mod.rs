//! Property-based tests for the tree-producing algorithms.
//!
//! Generated graphs of varied topology are run through every algorithm and
//! the results compared with a naive oracle working on the raw edge list,
//! alongside structural checks (edge counts, acyclicity, provenance of every
//! tree edge).

mod oracle;
mod strategies;
mod structural;
mod types;
