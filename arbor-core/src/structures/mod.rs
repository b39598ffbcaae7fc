//! Supporting data structures used by the graph algorithms.
//!
//! - [`FifoQueue`] drives breadth-first search.
//! - [`IndexedMinHeap`] provides decrease-key for Dijkstra and Prim.
//! - [`DisjointSet`] rejects cycle-forming edges in Kruskal.

mod priority_queue;
mod queue;
mod union_find;

pub use self::{priority_queue::IndexedMinHeap, queue::FifoQueue, union_find::DisjointSet};
