use std::fmt;

use gridseek_core::Point;

/// Errors reported by [`ScoreHeap`](crate::ScoreHeap) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `pop` was called on an empty heap.
    Empty,
    /// The element passed to `rescore` is not in the heap.
    NotQueued,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("pop from an empty priority queue"),
            Self::NotQueued => f.write_str("element is not in the priority queue"),
        }
    }
}

impl std::error::Error for QueueError {}

/// Errors that prevent a search from running to a terminal outcome.
///
/// An unreachable goal is not an error: it is reported as
/// [`SearchOutcome::NotFound`](crate::SearchOutcome::NotFound).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The heuristic name is not one of [`Heuristic::ALL`](crate::Heuristic::ALL).
    InvalidHeuristic(String),
    /// The start or goal lies outside the searcher's range.
    OutOfRange(Point),
    /// The open list was misused.
    Queue(QueueError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHeuristic(name) => write!(f, "unknown heuristic \u{201c}{name}\u{201d}"),
            Self::OutOfRange(p) => write!(f, "point {p} is outside the search range"),
            Self::Queue(e) => write!(f, "open list: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Queue(e) => Some(e),
            _ => None,
        }
    }
}

impl From<QueueError> for SearchError {
    fn from(e: QueueError) -> Self {
        Self::Queue(e)
    }
}
