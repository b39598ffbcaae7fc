//! Error types for the Arbor core library.
//!
//! Every structure reports failures through a small closed enum carrying the
//! offending ids, and every enum exposes a stable machine-readable code.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident
                    $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(
                        Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )?
                            => $CodeTy::$CodeVariant,
                    )+
                }
            }
        }
    };
}

/// An error produced by [`crate::Graph`] construction, mutation, or by one of
/// the [`crate::algorithms`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A graph must contain at least one vertex.
    #[error("vertex count must be at least 1 (got {got})")]
    InvalidVertexCount {
        /// The rejected vertex count.
        got: usize,
    },
    /// A vertex id fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// No edge joined the requested endpoints.
    #[error("no edge between {left} and {right}")]
    EdgeNotFound {
        /// First endpoint passed by the caller.
        left: usize,
        /// Second endpoint passed by the caller.
        right: usize,
    },
    /// A supporting queue failed while an algorithm was running.
    #[error("queue failure during traversal: {0}")]
    Queue(#[from] QueueError),
    /// A supporting priority queue failed while an algorithm was running.
    #[error("priority queue failure during traversal: {0}")]
    PriorityQueue(#[from] PriorityQueueError),
    /// A supporting disjoint set failed while an algorithm was running.
    #[error("disjoint set failure during traversal: {0}")]
    DisjointSet(#[from] DisjointSetError),
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A graph must contain at least one vertex.
        InvalidVertexCount => InvalidVertexCount { .. } => "GRAPH_INVALID_VERTEX_COUNT",
        /// A vertex id fell outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// No edge joined the requested endpoints.
        EdgeNotFound => EdgeNotFound { .. } => "GRAPH_EDGE_NOT_FOUND",
        /// A supporting queue failed while an algorithm was running.
        QueueFailure => Queue(..) => "GRAPH_QUEUE_FAILURE",
        /// A supporting priority queue failed while an algorithm was running.
        PriorityQueueFailure => PriorityQueue(..) => "GRAPH_PRIORITY_QUEUE_FAILURE",
        /// A supporting disjoint set failed while an algorithm was running.
        DisjointSetFailure => DisjointSet(..) => "GRAPH_DISJOINT_SET_FAILURE",
    }
}

impl GraphError {
    /// Retrieve the code of the supporting structure that failed, rendered as
    /// its stable string, when the error originated in one.
    #[must_use]
    pub const fn structure_code(&self) -> Option<&'static str> {
        match self {
            Self::Queue(error) => Some(error.code().as_str()),
            Self::PriorityQueue(error) => Some(error.code().as_str()),
            Self::DisjointSet(error) => Some(error.code().as_str()),
            _ => None,
        }
    }
}

/// An error produced by [`crate::structures::FifoQueue`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum QueueError {
    /// `dequeue` was called on an empty queue.
    #[error("queue is empty")]
    Empty,
}

define_error_codes! {
    /// Stable codes describing [`QueueError`] variants.
    enum QueueErrorCode for QueueError {
        /// `dequeue` was called on an empty queue.
        Empty => Empty => "QUEUE_EMPTY",
    }
}

/// An error produced by [`crate::structures::IndexedMinHeap`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum PriorityQueueError {
    /// Every slot of the heap is occupied.
    #[error("priority queue is full (capacity {capacity})")]
    Full {
        /// Fixed capacity of the heap.
        capacity: usize,
    },
    /// `extract_min` was called on an empty heap.
    #[error("priority queue is empty")]
    Empty,
    /// The vertex id cannot be tracked by a heap of this capacity.
    #[error("vertex {vertex} is out of range for a priority queue of capacity {capacity}")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Fixed capacity of the heap.
        capacity: usize,
    },
    /// The vertex already occupies a heap slot.
    #[error("vertex {vertex} is already in the priority queue")]
    AlreadyPresent {
        /// The duplicated vertex id.
        vertex: usize,
    },
    /// The vertex does not occupy a heap slot.
    #[error("vertex {vertex} is not in the priority queue")]
    NotPresent {
        /// The missing vertex id.
        vertex: usize,
    },
    /// `decrease_key` was asked to raise a priority.
    #[error("new priority for vertex {vertex} is greater than its current priority")]
    PriorityIncrease {
        /// The vertex whose priority would have increased.
        vertex: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`PriorityQueueError`] variants.
    enum PriorityQueueErrorCode for PriorityQueueError {
        /// Every slot of the heap is occupied.
        Full => Full { .. } => "PRIORITY_QUEUE_FULL",
        /// `extract_min` was called on an empty heap.
        Empty => Empty => "PRIORITY_QUEUE_EMPTY",
        /// The vertex id cannot be tracked by the heap.
        VertexOutOfRange => VertexOutOfRange { .. } => "PRIORITY_QUEUE_VERTEX_OUT_OF_RANGE",
        /// The vertex already occupies a heap slot.
        AlreadyPresent => AlreadyPresent { .. } => "PRIORITY_QUEUE_ALREADY_PRESENT",
        /// The vertex does not occupy a heap slot.
        NotPresent => NotPresent { .. } => "PRIORITY_QUEUE_NOT_PRESENT",
        /// `decrease_key` was asked to raise a priority.
        PriorityIncrease => PriorityIncrease { .. } => "PRIORITY_QUEUE_PRIORITY_INCREASE",
    }
}

/// An error produced by [`crate::structures::DisjointSet`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The element id fell outside `[0, len)`.
    #[error("element {element} is out of range for a disjoint set of {len} elements")]
    OutOfRange {
        /// The offending element id.
        element: usize,
        /// Number of elements tracked by the structure.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The element id fell outside the structure.
        OutOfRange => OutOfRange { .. } => "DISJOINT_SET_OUT_OF_RANGE",
    }
}

/// Convenient alias for results returned by the graph API.
pub type Result<T> = core::result::Result<T, GraphError>;
