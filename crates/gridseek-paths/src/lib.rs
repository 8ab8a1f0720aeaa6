//! Heuristic best-first search on 2D grids.
//!
//! This crate provides a greedy best-first traversal and the priority queue
//! that drives it:
//!
//! - **Best-first search** from a start cell to a goal cell
//!   ([`BestFirst::search`], [`best_first_search`])
//! - **[`ScoreHeap`]**, a binary min-heap ordered by a caller-supplied score
//!   that supports removal and re-scoring of queued elements
//! - **Heuristics** selectable by name ([`Heuristic`])
//!
//! The open list is ordered by the heuristic estimate alone, so a found path
//! is not guaranteed to be the shortest one.
//!
//! Grids are supplied through the [`NodeGrid`] trait, implemented for
//! [`gridseek_core::WallGrid`]. Searches never write to the grid; all
//! per-search state lives in [`BestFirst`], which can be reused across
//! searches without resetting anything.
//!
//! ```
//! use gridseek_core::WallGrid;
//! use gridseek_paths::best_first_search;
//!
//! let grid = WallGrid::parse("S.#\n..#\n..G").unwrap();
//! let (start, goal) = (grid.start().unwrap(), grid.goal().unwrap());
//! let outcome = best_first_search(&grid, start, goal, "manhattan", false).unwrap();
//! assert!(outcome.is_found());
//! assert_eq!(outcome.path().unwrap().last(), Some(&goal));
//! ```

mod config;
mod error;
mod heap;
mod heuristic;
mod search;
mod traits;

pub use config::SearchConfig;
pub use error::{QueueError, SearchError};
pub use heap::ScoreHeap;
pub use heuristic::{Heuristic, chebyshev, euclidean, euclidean_squared, manhattan, octile};
pub use search::{BestFirst, SearchOutcome, best_first_search};
pub use traits::NodeGrid;
