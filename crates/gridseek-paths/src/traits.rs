use gridseek_core::{Point, Range, WallGrid};

/// The grid a search walks over: its extent, its obstacles, and how cells
/// connect.
///
/// Searches only read the grid. All per-search state lives in the
/// [`BestFirst`](crate::BestFirst) searcher.
pub trait NodeGrid {
    /// Rectangle of valid cells.
    fn range(&self) -> Range;

    /// Whether `p` is an obstacle.
    fn is_wall(&self, p: Point) -> bool;

    /// Append the in-range cells adjacent to `p` into `buf`: up to four
    /// orthogonal cells, or up to eight when `diagonal` is set. Walls are
    /// included. The caller clears `buf` before calling.
    ///
    /// The order of neighbors only affects ties between equal scores.
    fn neighbors(&self, p: Point, diagonal: bool, buf: &mut Vec<Point>) {
        let rng = self.range();
        if diagonal {
            buf.extend(p.neighbors_8().into_iter().filter(|&n| rng.contains(n)));
        } else {
            buf.extend(p.neighbors_4().into_iter().filter(|&n| rng.contains(n)));
        }
    }
}

impl NodeGrid for WallGrid {
    #[inline]
    fn range(&self) -> Range {
        WallGrid::range(self)
    }

    #[inline]
    fn is_wall(&self, p: Point) -> bool {
        WallGrid::is_wall(self, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_neighbors_stay_in_range() {
        let g = WallGrid::new(3, 3);
        let mut buf = Vec::new();
        g.neighbors(Point::new(0, 0), false, &mut buf);
        assert_eq!(buf, vec![Point::new(1, 0), Point::new(0, 1)]);

        buf.clear();
        g.neighbors(Point::new(0, 0), true, &mut buf);
        assert_eq!(buf.len(), 3);
        assert!(buf.contains(&Point::new(1, 1)));
    }

    #[test]
    fn centre_has_four_or_eight() {
        let g = WallGrid::new(3, 3);
        let mut buf = Vec::new();
        g.neighbors(Point::new(1, 1), false, &mut buf);
        assert_eq!(buf.len(), 4);
        buf.clear();
        g.neighbors(Point::new(1, 1), true, &mut buf);
        assert_eq!(buf.len(), 8);
    }

    #[test]
    fn walls_are_reported_not_filtered() {
        let g = WallGrid::parse(".#\n..").unwrap();
        let mut buf = Vec::new();
        g.neighbors(Point::new(0, 0), false, &mut buf);
        assert!(buf.contains(&Point::new(1, 0)));
        assert!(NodeGrid::is_wall(&g, Point::new(1, 0)));
    }
}
