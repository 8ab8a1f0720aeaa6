use crate::error::SearchError;
use crate::heuristic::Heuristic;

/// Options for one best-first search.
///
/// The default scores nodes with [`Heuristic::Manhattan`], moves in four
/// directions and reports [`SearchOutcome::NotFound`] for unreachable goals.
///
/// [`SearchOutcome::NotFound`]: crate::SearchOutcome::NotFound
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Distance estimate every discovered node is scored with.
    pub heuristic: Heuristic,
    /// Allow diagonal moves (8 neighbors instead of 4).
    pub diagonal: bool,
    /// When the goal is unreachable, report the trace to the visited node
    /// closest to the goal as [`SearchOutcome::Closest`] instead of
    /// [`SearchOutcome::NotFound`]. Among visited nodes with equal estimates
    /// the one discovered last is reported.
    ///
    /// [`SearchOutcome::Closest`]: crate::SearchOutcome::Closest
    /// [`SearchOutcome::NotFound`]: crate::SearchOutcome::NotFound
    pub closest: bool,
}

impl SearchConfig {
    /// A 4-directional configuration using `heuristic`.
    pub fn new(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            ..Self::default()
        }
    }

    /// Build a configuration from a heuristic key such as `"diagonalOctile"`.
    ///
    /// Fails with [`SearchError::InvalidHeuristic`] for unknown keys.
    pub fn named(heuristic: &str, diagonal: bool) -> Result<Self, SearchError> {
        Ok(Self::new(heuristic.parse()?).with_diagonal(diagonal))
    }

    pub fn with_diagonal(mut self, diagonal: bool) -> Self {
        self.diagonal = diagonal;
        self
    }

    pub fn with_closest(mut self, closest: bool) -> Self {
        self.closest = closest;
        self
    }
}
