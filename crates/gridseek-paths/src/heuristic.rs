//! Distance estimates used to order the open list.

use std::fmt;
use std::str::FromStr;

use gridseek_core::Point;

use crate::error::SearchError;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i64 {
    let (dx, dy) = axis_distances(a, b);
    i64::from(dx) + i64::from(dy)
}

/// Chebyshev (L∞) distance between two points: every diagonal step costs 1.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i64 {
    let (dx, dy) = axis_distances(a, b);
    i64::from(dx.max(dy))
}

/// Octile distance between two points: a diagonal step costs √2.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    diagonal(a, b, 1.0, std::f64::consts::SQRT_2)
}

/// Straight-line distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    euclidean_squared(a, b).sqrt()
}

/// Squared straight-line distance. Orders nodes like [`euclidean`].
///
/// Computed in `f64`; the sum of two squared `i32` spans overflows `u64`.
#[inline]
pub fn euclidean_squared(a: Point, b: Point) -> f64 {
    let (dx, dy) = axis_distances(a, b);
    let (dx, dy) = (f64::from(dx), f64::from(dy));
    dx * dx + dy * dy
}

/// Row and column distances.
#[inline]
fn axis_distances(a: Point, b: Point) -> (u32, u32) {
    (a.y.abs_diff(b.y), a.x.abs_diff(b.x))
}

/// Axis distances combined with an orthogonal step cost `d` and a diagonal
/// step cost `d2`.
#[inline]
fn diagonal(a: Point, b: Point, d: f64, d2: f64) -> f64 {
    let (dx, dy) = axis_distances(a, b);
    let (dx, dy) = (f64::from(dx), f64::from(dy));
    d * (dx + dy) + (d2 - 2.0 * d) * dx.min(dy)
}

/// The named heuristics a search can be configured with.
///
/// Every heuristic is zero when both points are equal and non-negative
/// everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Heuristic {
    /// |Δrow| + |Δcol|. Suited to 4-directional movement.
    #[default]
    Manhattan,
    /// Diagonal distance with diagonal steps costing 1.
    DiagonalChebyshev,
    /// Diagonal distance with diagonal steps costing √2.
    DiagonalOctile,
    /// Straight-line distance. Needs a square root per node; prefer
    /// [`EuclideanSquared`](Self::EuclideanSquared).
    Euclidean,
    /// Squared straight-line distance.
    EuclideanSquared,
}

impl Heuristic {
    /// Every heuristic, in declaration order.
    pub const ALL: [Heuristic; 5] = [
        Heuristic::Manhattan,
        Heuristic::DiagonalChebyshev,
        Heuristic::DiagonalOctile,
        Heuristic::Euclidean,
        Heuristic::EuclideanSquared,
    ];

    /// The key this heuristic is selected by.
    pub const fn name(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::DiagonalChebyshev => "diagonalChebyshev",
            Heuristic::DiagonalOctile => "diagonalOctile",
            Heuristic::Euclidean => "euclidean",
            Heuristic::EuclideanSquared => "euclideanSquared",
        }
    }

    /// Estimated distance from `node` to `goal`.
    #[inline]
    pub fn estimate(self, node: Point, goal: Point) -> f64 {
        match self {
            Heuristic::Manhattan => manhattan(node, goal) as f64,
            Heuristic::DiagonalChebyshev => chebyshev(node, goal) as f64,
            Heuristic::DiagonalOctile => octile(node, goal),
            Heuristic::Euclidean => euclidean(node, goal),
            Heuristic::EuclideanSquared => euclidean_squared(node, goal),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or_else(|| SearchError::InvalidHeuristic(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridseek_core::Range;

    #[test]
    fn known_distances() {
        let a = Point::at(0, 0);
        let b = Point::at(3, 4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(euclidean_squared(a, b), 25.0);
        assert_eq!(euclidean(a, b), 5.0);
        let oct = octile(a, b);
        assert!((oct - (1.0 + 3.0 * std::f64::consts::SQRT_2)).abs() < 1e-9);
    }

    #[test]
    fn zero_at_goal_and_non_negative() {
        let rng = Range::new(-3, -3, 4, 4);
        for h in Heuristic::ALL {
            for a in rng {
                assert_eq!(h.estimate(a, a), 0.0, "{h} at {a}");
                for b in rng {
                    assert!(h.estimate(a, b) >= 0.0, "{h} from {a} to {b}");
                }
            }
        }
    }

    #[test]
    fn symmetric() {
        let a = Point::new(-2, 5);
        let b = Point::new(7, 1);
        for h in Heuristic::ALL {
            assert_eq!(h.estimate(a, b), h.estimate(b, a), "{h}");
        }
    }

    #[test]
    fn squared_orders_like_euclidean() {
        let goal = Point::new(0, 0);
        let rng = Range::new(-4, -4, 5, 5);
        for a in rng {
            for b in rng {
                let plain = euclidean(a, goal) < euclidean(b, goal);
                let squared = euclidean_squared(a, goal) < euclidean_squared(b, goal);
                assert_eq!(plain, squared, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let a = Point::new(i32::MIN, i32::MIN);
        let b = Point::new(i32::MAX, i32::MAX);
        let span = u32::MAX as i64;
        assert_eq!(manhattan(a, b), 2 * span);
        assert_eq!(chebyshev(a, b), span);
        let axis = span as f64;
        assert_eq!(euclidean_squared(a, b), 2.0 * axis * axis);
        for h in Heuristic::ALL {
            let e = h.estimate(a, b);
            assert!(e.is_finite() && e > 0.0, "{h}: {e}");
        }
    }

    #[test]
    fn wide_axis_distance() {
        let a = Point::new(0, 0);
        let b = Point::new(50_000, 0);
        assert_eq!(euclidean_squared(a, b), 2_500_000_000.0);
        assert_eq!(euclidean(a, b), 50_000.0);
    }

    #[test]
    fn parse_names() {
        for h in Heuristic::ALL {
            assert_eq!(h.name().parse::<Heuristic>(), Ok(h));
            assert_eq!(h.to_string(), h.name());
        }
        assert_eq!(Heuristic::default(), Heuristic::Manhattan);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "octile".parse::<Heuristic>().unwrap_err();
        assert_eq!(err, SearchError::InvalidHeuristic("octile".to_string()));
        assert!("Manhattan".parse::<Heuristic>().is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn names_match_keys() {
        for h in Heuristic::ALL {
            let json = serde_json::to_string(&h).unwrap();
            assert_eq!(json, format!("\"{}\"", h.name()));
            let back: Heuristic = serde_json::from_str(&json).unwrap();
            assert_eq!(back, h);
        }
    }
}
