use arbor_core::{
    DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode, PriorityQueueError,
    PriorityQueueErrorCode, QueueError, QueueErrorCode,
};
use rstest::rstest;

#[rstest]
#[case(GraphError::InvalidVertexCount { got: 0 }, GraphErrorCode::InvalidVertexCount, None)]
#[case(
    GraphError::VertexOutOfRange { vertex: 9, vertex_count: 3 },
    GraphErrorCode::VertexOutOfRange,
    None,
)]
#[case(GraphError::EdgeNotFound { left: 0, right: 1 }, GraphErrorCode::EdgeNotFound, None)]
#[case(
    GraphError::Queue(QueueError::Empty),
    GraphErrorCode::QueueFailure,
    Some("QUEUE_EMPTY"),
)]
#[case(
    GraphError::PriorityQueue(PriorityQueueError::NotPresent { vertex: 4 }),
    GraphErrorCode::PriorityQueueFailure,
    Some("PRIORITY_QUEUE_NOT_PRESENT"),
)]
#[case(
    GraphError::DisjointSet(DisjointSetError::OutOfRange { element: 5, len: 2 }),
    GraphErrorCode::DisjointSetFailure,
    Some("DISJOINT_SET_OUT_OF_RANGE"),
)]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] structure_code: Option<&str>,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().to_string(), expected.as_str());
    assert_eq!(error.structure_code(), structure_code);
}

#[rstest]
#[case(PriorityQueueError::Full { capacity: 2 }, PriorityQueueErrorCode::Full)]
#[case(PriorityQueueError::Empty, PriorityQueueErrorCode::Empty)]
#[case(
    PriorityQueueError::VertexOutOfRange { vertex: 3, capacity: 2 },
    PriorityQueueErrorCode::VertexOutOfRange,
)]
#[case(PriorityQueueError::AlreadyPresent { vertex: 1 }, PriorityQueueErrorCode::AlreadyPresent)]
#[case(PriorityQueueError::NotPresent { vertex: 1 }, PriorityQueueErrorCode::NotPresent)]
#[case(
    PriorityQueueError::PriorityIncrease { vertex: 1 },
    PriorityQueueErrorCode::PriorityIncrease,
)]
fn returns_expected_priority_queue_code(
    #[case] error: PriorityQueueError,
    #[case] expected: PriorityQueueErrorCode,
) {
    assert_eq!(error.code(), expected);
    assert!(expected.as_str().starts_with("PRIORITY_QUEUE_"));
}

#[test]
fn queue_and_disjoint_set_codes_are_stable() {
    assert_eq!(QueueError::Empty.code(), QueueErrorCode::Empty);
    assert_eq!(QueueErrorCode::Empty.as_str(), "QUEUE_EMPTY");
    assert_eq!(
        DisjointSetError::OutOfRange { element: 3, len: 1 }.code(),
        DisjointSetErrorCode::OutOfRange
    );
}

#[test]
fn structure_failures_convert_into_graph_errors() {
    let error: GraphError = PriorityQueueError::Empty.into();
    assert_eq!(error, GraphError::PriorityQueue(PriorityQueueError::Empty));
    assert_eq!(
        error.to_string(),
        "priority queue failure during traversal: priority queue is empty"
    );
}

#[test]
fn messages_name_the_offending_ids() {
    let error = GraphError::VertexOutOfRange {
        vertex: 10,
        vertex_count: 6,
    };
    assert_eq!(
        error.to_string(),
        "vertex 10 is out of range for a graph with 6 vertices"
    );
    assert_eq!(
        GraphError::EdgeNotFound { left: 2, right: 5 }.to_string(),
        "no edge between 2 and 5"
    );
}
