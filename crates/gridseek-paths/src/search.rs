use log::{debug, trace};

use gridseek_core::{Point, Range};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::heap::ScoreHeap;
use crate::traits::NodeGrid;

const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-search node state
// ---------------------------------------------------------------------------

/// Search-scoped state of one grid cell. Only meaningful when `generation`
/// matches the searcher's current generation.
#[derive(Clone)]
struct SearchNode {
    h: f64,
    parent: usize,
    generation: u32,
    closed: bool,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            h: 0.0,
            parent: NO_PARENT,
            generation: 0,
            closed: false,
        }
    }
}

/// Open-list entry. Two entries are the same element when they refer to the
/// same cell, whatever their score.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    idx: usize,
    f: f64,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.idx == other.idx
    }
}

// ---------------------------------------------------------------------------
// SearchOutcome
// ---------------------------------------------------------------------------

/// Terminal state of a search.
///
/// `visited` lists every discovered cell once, in discovery order, starting
/// with the start cell. `expanded` counts the cells taken off the open list
/// and closed.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The goal was reached. `path` runs from start to goal, both included.
    Found {
        path: Vec<Point>,
        visited: Vec<Point>,
        expanded: usize,
    },
    /// The goal is unreachable and closest-node tracking was enabled. `path`
    /// runs from start to the visited cell with the smallest estimate,
    /// the last discovered one on ties.
    Closest {
        path: Vec<Point>,
        visited: Vec<Point>,
        expanded: usize,
    },
    /// The goal is unreachable.
    NotFound { visited: Vec<Point>, expanded: usize },
}

impl SearchOutcome {
    /// Whether the goal was reached.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The reconstructed path, unless the outcome is `NotFound`.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found { path, .. } | Self::Closest { path, .. } => Some(path),
            Self::NotFound { .. } => None,
        }
    }

    /// Discovered cells in discovery order.
    pub fn visited(&self) -> &[Point] {
        match self {
            Self::Found { visited, .. }
            | Self::Closest { visited, .. }
            | Self::NotFound { visited, .. } => visited,
        }
    }

    /// Number of cells expanded before termination.
    pub fn expanded(&self) -> usize {
        match self {
            Self::Found { expanded, .. }
            | Self::Closest { expanded, .. }
            | Self::NotFound { expanded, .. } => *expanded,
        }
    }
}

// ---------------------------------------------------------------------------
// BestFirst
// ---------------------------------------------------------------------------

/// Greedy best-first searcher over a grid rectangle.
///
/// The open list is ordered by the heuristic estimate alone (`f = h`): no
/// path cost is accumulated, so the returned path is not necessarily the
/// shortest one. Each cell is pushed on the open list at most once per
/// search, which bounds a search by the number of cells in the range.
///
/// `BestFirst` owns the per-cell search state (estimates, back-references,
/// closed flags). Every search starts a new generation, so state from an
/// earlier search is ignored without clearing it and grids are never
/// written to.
pub struct BestFirst {
    rng: Range,
    width: usize,
    nodes: Vec<SearchNode>,
    generation: u32,
    nbuf: Vec<Point>,
}

impl BestFirst {
    /// Create a new searcher for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![SearchNode::default(); rng.len()],
            generation: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Replace the underlying range.
    ///
    /// Node storage is kept when the new range fits in it and grown
    /// otherwise. State from earlier searches is discarded either way.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        if rng.len() <= self.nodes.len() {
            self.next_generation();
            return;
        }
        self.nodes.clear();
        self.nodes.resize(rng.len(), SearchNode::default());
        self.generation = 0;
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Search from `from` to `to` over `grid`.
    ///
    /// Cells outside the searcher's range are never discovered, even if
    /// `grid` reports them as neighbors. A start cell on a wall is still
    /// expanded; a goal on a wall is only reached when it is the start.
    pub fn search<G: NodeGrid + ?Sized>(
        &mut self,
        grid: &G,
        from: Point,
        to: Point,
        config: &SearchConfig,
    ) -> Result<SearchOutcome, SearchError> {
        let start_idx = self.idx(from).ok_or(SearchError::OutOfRange(from))?;
        let goal_idx = self.idx(to).ok_or(SearchError::OutOfRange(to))?;
        let heuristic = config.heuristic;
        let cur_gen = self.next_generation();

        debug!(
            "best-first search {from} -> {to} (heuristic = {heuristic}, diagonal = {})",
            config.diagonal
        );

        let start_h = heuristic.estimate(from, to);
        self.discover(start_idx, NO_PARENT, start_h, cur_gen);

        let mut open = ScoreHeap::new(|e: &OpenEntry| e.f);
        open.push(OpenEntry {
            idx: start_idx,
            f: start_h,
        });
        let mut visited = vec![from];
        let mut closest = (start_idx, start_h);
        let mut expanded = 0;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            if open.is_empty() {
                break false;
            }
            let current = open.pop()?;
            let ci = current.idx;

            if ci == goal_idx {
                break true;
            }

            self.nodes[ci].closed = true;
            expanded += 1;
            let cp = self.point(ci);
            trace!("expand {cp} (f = {})", current.f);

            nbuf.clear();
            grid.neighbors(cp, config.diagonal, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                // Discovered cells, open or closed, keep their first score.
                if self.nodes[ni].generation == cur_gen || grid.is_wall(np) {
                    continue;
                }

                let h = heuristic.estimate(np, to);
                self.discover(ni, ci, h, cur_gen);
                visited.push(np);
                if config.closest && h <= closest.1 {
                    closest = (ni, h);
                }
                open.push(OpenEntry { idx: ni, f: h });
            }
        };

        self.nbuf = nbuf;

        let outcome = if found {
            SearchOutcome::Found {
                path: self.trace(goal_idx),
                visited,
                expanded,
            }
        } else if config.closest {
            SearchOutcome::Closest {
                path: self.trace(closest.0),
                visited,
                expanded,
            }
        } else {
            SearchOutcome::NotFound { visited, expanded }
        };

        debug!(
            "best-first search {from} -> {to}: found = {found}, visited = {}, expanded = {expanded}",
            outcome.visited().len()
        );
        Ok(outcome)
    }

    /// The cell `p` was discovered from in the last search.
    ///
    /// Returns `None` for the start cell and for cells the last search did
    /// not discover.
    pub fn previous(&self, p: Point) -> Option<Point> {
        let node = self.node(p)?;
        (node.parent != NO_PARENT).then(|| self.point(node.parent))
    }

    /// Follow [`previous`](Self::previous) from `p` back to the start of the
    /// last search. The returned path runs from start to `p`.
    pub fn path_to(&self, p: Point) -> Option<Vec<Point>> {
        self.node(p)?;
        self.idx(p).map(|i| self.trace(i))
    }

    /// Whether the last search discovered `p`.
    pub fn is_visited(&self, p: Point) -> bool {
        self.node(p).is_some()
    }

    /// Whether the last search expanded `p`.
    pub fn is_closed(&self, p: Point) -> bool {
        self.node(p).is_some_and(|n| n.closed)
    }

    /// Heuristic estimate the last search computed for `p`.
    pub fn estimate_at(&self, p: Point) -> Option<f64> {
        self.node(p).map(|n| n.h)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.generation
    }

    fn discover(&mut self, idx: usize, parent: usize, h: f64, generation: u32) {
        self.nodes[idx] = SearchNode {
            h,
            parent,
            generation,
            closed: false,
        };
    }

    /// Node state of `p`, if the last search discovered it.
    fn node(&self, p: Point) -> Option<&SearchNode> {
        let node = &self.nodes[self.idx(p)?];
        (self.generation != 0 && node.generation == self.generation).then_some(node)
    }

    fn trace(&self, idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = idx;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

/// Run one best-first search with a heuristic selected by key.
///
/// `heuristic` must be one of the [`Heuristic`](crate::Heuristic) names;
/// an unknown key fails with [`SearchError::InvalidHeuristic`] before any
/// search state is created.
pub fn best_first_search<G: NodeGrid + ?Sized>(
    grid: &G,
    start: Point,
    finish: Point,
    heuristic: &str,
    diagonal: bool,
) -> Result<SearchOutcome, SearchError> {
    let config = SearchConfig::named(heuristic, diagonal)?;
    BestFirst::new(grid.range()).search(grid, start, finish, &config)
}
