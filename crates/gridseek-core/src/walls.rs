//! A rectangular map of wall flags.
//!
//! [`WallGrid`] is the static half of a grid node: which cells are
//! obstacles. It never holds search state, so a single map can serve any
//! number of searches. Maps can be built cell by cell or parsed from ASCII
//! art:
//!
//! ```text
//! S..#
//! .#.#
//! ...G
//! ```
//!
//! `#` is a wall, `.` is floor, and `S`/`G` are floor cells that also record
//! a start and a goal position.

use std::fmt;

use crate::geom::{Point, Range};

/// Character marking a wall cell.
pub const WALL: char = '#';
/// Character marking a floor cell.
pub const FLOOR: char = '.';
/// Floor cell recorded as [`WallGrid::start`].
pub const START: char = 'S';
/// Floor cell recorded as [`WallGrid::goal`].
pub const GOAL: char = 'G';

/// A 2D grid of wall flags anchored at the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawWallGrid"))]
pub struct WallGrid {
    walls: Vec<bool>,
    width: i32,
    height: i32,
    start: Option<Point>,
    goal: Option<Point>,
}

impl WallGrid {
    /// Create a new `width` × `height` grid with no walls.
    ///
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            walls: vec![false; width as usize * height as usize],
            width,
            height,
            start: None,
            goal: None,
        }
    }

    /// Create a grid from row-major wall flags.
    ///
    /// Fails unless both dimensions are non-negative and `walls` holds
    /// exactly `width * height` flags.
    pub fn from_cells(width: i32, height: i32, walls: Vec<bool>) -> Result<Self, GridError> {
        if width < 0 || height < 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if walls.len() != expected {
            return Err(GridError::CellCount {
                expected,
                actual: walls.len(),
            });
        }
        Ok(Self {
            walls,
            width,
            height,
            start: None,
            goal: None,
        })
    }

    /// Parse a grid from ASCII art.
    ///
    /// Leading and trailing whitespace of the whole string is trimmed, as is
    /// leading whitespace of each line so that indented literals work. All
    /// lines must then have the same width.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let lines: Vec<&str> = s.lines().map(str::trim_start).collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        if lines.iter().any(|l| l.chars().count() != width) {
            return Err(GridError::InconsistentSize(s.to_string()));
        }

        let mut grid = Self::new(width as i32, lines.len() as i32);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    WALL => grid.set_wall(p, true),
                    FLOOR => {}
                    START => grid.start = Some(p),
                    GOAL => grid.goal = Some(p),
                    _ => {
                        return Err(GridError::InvalidRune {
                            ch,
                            pos: p,
                            content: s.to_string(),
                        });
                    }
                }
            }
        }
        Ok(grid)
    }

    /// The grid rectangle, `[0, 0)-(width, height)`.
    #[inline]
    pub fn range(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    /// Width of the grid in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` is a wall. Points outside the grid are not walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.walls[i])
    }

    /// Set or clear the wall flag of `p`. Out-of-range points are ignored.
    pub fn set_wall(&mut self, p: Point, wall: bool) {
        if let Some(i) = self.index(p) {
            self.walls[i] = wall;
        }
    }

    /// Fill every cell of `rng` (clipped to the grid) with `wall`.
    pub fn fill(&mut self, rng: Range, wall: bool) {
        for p in rng.intersect(self.range()) {
            self.set_wall(p, wall);
        }
    }

    /// Start marker found by [`parse`](Self::parse), if any.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Goal marker found by [`parse`](Self::parse), if any.
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.range().contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }
}

impl fmt::Display for WallGrid {
    /// Render the grid back into the ASCII format accepted by
    /// [`WallGrid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                let p = Point::new(x, y);
                let ch = if self.start == Some(p) {
                    START
                } else if self.goal == Some(p) {
                    GOAL
                } else if self.is_wall(p) {
                    WALL
                } else {
                    FLOOR
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Serialized form of a [`WallGrid`], validated before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWallGrid {
    walls: Vec<bool>,
    width: i32,
    height: i32,
    start: Option<Point>,
    goal: Option<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWallGrid> for WallGrid {
    type Error = GridError;

    fn try_from(raw: RawWallGrid) -> Result<Self, GridError> {
        let mut grid = Self::from_cells(raw.width, raw.height, raw.walls)?;
        for marker in [raw.start, raw.goal].into_iter().flatten() {
            if !grid.range().contains(marker) {
                return Err(GridError::MarkerOutOfRange(marker));
            }
        }
        grid.start = raw.start;
        grid.goal = raw.goal;
        Ok(grid)
    }
}

/// Errors that can occur when building or parsing a [`WallGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character other than `#`, `.`, `S` or `G` was found.
    InvalidRune {
        ch: char,
        pos: Point,
        content: String,
    },
    /// A dimension is negative.
    InvalidDimensions { width: i32, height: i32 },
    /// The number of wall flags does not match the dimensions.
    CellCount { expected: usize, actual: usize },
    /// A start or goal marker lies outside the grid.
    MarkerOutOfRange(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "grid: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos, content } => {
                write!(
                    f,
                    "grid contains invalid rune \u{201c}{ch}\u{201d} at ({}, {}):\n{content}",
                    pos.x, pos.y
                )
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid: invalid dimensions {width}x{height}")
            }
            Self::CellCount { expected, actual } => {
                write!(f, "grid: expected {expected} cells, got {actual}")
            }
            Self::MarkerOutOfRange(p) => write!(f, "grid: marker {p} is outside the grid"),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
S..#
.#.#
...G";

    #[test]
    fn parse_size_and_markers() {
        let g = WallGrid::parse(ROOM).unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.range(), Range::sized(4, 3));
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert_eq!(g.goal(), Some(Point::new(3, 2)));
        assert_eq!(g.wall_count(), 3);
        assert!(g.is_wall(Point::new(3, 0)));
        assert!(g.is_wall(Point::new(1, 1)));
        assert!(!g.is_wall(Point::new(0, 0)));
        assert!(!g.is_wall(Point::new(3, 2)));
    }

    #[test]
    fn parse_accepts_indented_literal() {
        let g = WallGrid::parse(
            "
            ..#
            #..
            ",
        )
        .unwrap();
        assert_eq!(g.range(), Range::sized(3, 2));
        assert!(g.is_wall(Point::new(2, 0)));
        assert!(g.is_wall(Point::new(0, 1)));
    }

    #[test]
    fn display_round_trips() {
        let g = WallGrid::parse(ROOM).unwrap();
        assert_eq!(g.to_string(), ROOM);
    }

    #[test]
    fn inconsistent_size() {
        let err = WallGrid::parse("...\n..").unwrap_err();
        assert!(matches!(err, GridError::InconsistentSize(_)));
    }

    #[test]
    fn invalid_rune() {
        let err = WallGrid::parse("..\n.x").unwrap_err();
        match err {
            GridError::InvalidRune { ch, pos, .. } => {
                assert_eq!(ch, 'x');
                assert_eq!(pos, Point::new(1, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_cells_checks_layout() {
        let g = WallGrid::from_cells(2, 2, vec![false, true, false, false]).unwrap();
        assert!(g.is_wall(Point::new(1, 0)));
        assert_eq!(g.wall_count(), 1);
        assert_eq!(
            WallGrid::from_cells(3, 3, Vec::new()),
            Err(GridError::CellCount {
                expected: 9,
                actual: 0
            })
        );
        assert_eq!(
            WallGrid::from_cells(-1, 2, Vec::new()),
            Err(GridError::InvalidDimensions {
                width: -1,
                height: 2
            })
        );
    }

    #[test]
    fn out_of_range_is_not_a_wall() {
        let mut g = WallGrid::new(2, 2);
        g.set_wall(Point::new(5, 5), true);
        assert_eq!(g.wall_count(), 0);
        assert!(!g.is_wall(Point::new(-1, 0)));
    }

    #[test]
    fn fill_clips_to_grid() {
        let mut g = WallGrid::new(3, 3);
        g.fill(Range::new(0, 1, 10, 2), true);
        assert_eq!(g.wall_count(), 3);
        assert!(g.is_wall(Point::at(1, 2)));
        g.fill(g.range(), false);
        assert_eq!(g.wall_count(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn wall_grid_round_trip() {
        let g = WallGrid::parse("S#\n.G").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: WallGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn cell_count_mismatch_is_rejected() {
        let res = serde_json::from_str::<WallGrid>(
            r#"{"walls":[],"width":3,"height":3,"start":null,"goal":null}"#,
        );
        let err = res.unwrap_err().to_string();
        assert!(err.contains("expected 9 cells, got 0"), "{err}");
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        let res = serde_json::from_str::<WallGrid>(
            r#"{"walls":[],"width":-2,"height":0,"start":null,"goal":null}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn marker_outside_grid_is_rejected() {
        let res = serde_json::from_str::<WallGrid>(
            r#"{"walls":[false],"width":1,"height":1,"start":{"x":0,"y":0},"goal":{"x":4,"y":0}}"#,
        );
        let err = res.unwrap_err().to_string();
        assert!(err.contains("marker (4, 0)"), "{err}");
    }
}
