use std::{
    fmt,
    ops::{Add, Sub},
};

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A position on the unbounded board, as a pair of signed integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate(IVec2);

impl Coordinate {
    /// The origin of the board, around which the initial view is generated.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Offsets of the four edge-adjacent neighbors, in the fixed order used
    /// by generation probes and frontier expansion.
    pub const ADJACENT_OFFSETS: [IVec2; 4] = [
        IVec2::new(-1, 0),
        IVec2::new(0, -1),
        IVec2::new(0, 1),
        IVec2::new(1, 0),
    ];

    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    pub const fn x(&self) -> i32 {
        self.0.x
    }

    pub const fn y(&self) -> i32 {
        self.0.y
    }

    pub const fn into_inner(self) -> IVec2 {
        self.0
    }

    /// Get the four edge-adjacent coordinates of `self`. Diagonals are not
    /// adjacent for travel or generation purposes.
    pub fn adjacent(self) -> [Self; 4] {
        Self::ADJACENT_OFFSETS.map(|offset| Self(self.0 + offset))
    }

    #[inline]
    /// Computes the distance from `self` to `rhs` as a signed integer.
    /// The distance is measured in edge steps (Manhattan distance).
    pub const fn distance_to(self, rhs: Self) -> i32 {
        let delta = IVec2::new(self.0.x - rhs.0.x, self.0.y - rhs.0.y);
        delta.x.abs() + delta.y.abs()
    }

    /// Return a `Vec<Coordinate>` containing every coordinate whose Chebyshev
    /// distance from `self` is at most `radius`, in x-major scan order.
    /// The number of returned coordinates is equal to `(2 * radius + 1)^2`.
    pub fn coordinates_in_radius(self, radius: u32) -> Vec<Self> {
        let radius = radius as i32;
        let mut coordinates_in_radius = Vec::with_capacity(((2 * radius + 1) * (2 * radius + 1)) as usize);
        for i in (self.x() - radius)..=(self.x() + radius) {
            for j in (self.y() - radius)..=(self.y() + radius) {
                coordinates_in_radius.push(Self::new(i, j));
            }
        }
        coordinates_in_radius
    }

    /// Return a `Vec<Coordinate>` containing every coordinate whose Chebyshev
    /// distance from `self` is exactly `radius`.
    ///
    /// The scan order is fixed: the left and right edge columns are visited in
    /// full, interior columns contribute only their top and bottom rows. Ring
    /// order matters during generation, where smaller rings must be populated
    /// before larger ones.
    ///
    /// If `radius` = 0 the result contains only `self`, otherwise it contains
    /// `8 * radius` coordinates.
    pub fn coordinates_in_ring(self, radius: u32) -> Vec<Self> {
        let radius = radius as i32;
        let mut coordinates_in_ring = Vec::with_capacity(8 * radius.max(1) as usize);
        for i in (self.x() - radius)..=(self.x() + radius) {
            if i == self.x() - radius || i == self.x() + radius {
                for j in (self.y() - radius)..=(self.y() + radius) {
                    coordinates_in_ring.push(Self::new(i, j));
                }
            } else {
                coordinates_in_ring.push(Self::new(i, self.y() - radius));
                coordinates_in_ring.push(Self::new(i, self.y() + radius));
            }
        }
        coordinates_in_ring
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.x(), self.y()).cmp(&(other.x(), other.y()))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl From<IVec2> for Coordinate {
    fn from(value: IVec2) -> Self {
        Self(value)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

#[cfg(test)]
mod tests {
    use super::Coordinate;

    #[test]
    fn adjacent_order_is_fixed() {
        let coordinate = Coordinate::new(3, -2);
        assert_eq!(
            coordinate.adjacent(),
            [
                Coordinate::new(2, -2),
                Coordinate::new(3, -3),
                Coordinate::new(3, -1),
                Coordinate::new(4, -2),
            ]
        );
    }

    #[test]
    fn ring_counts() {
        let origin = Coordinate::ORIGIN;
        assert_eq!(origin.coordinates_in_ring(0), vec![origin]);
        for radius in 1..5 {
            assert_eq!(
                origin.coordinates_in_ring(radius).len(),
                8 * radius as usize
            );
        }
    }

    #[test]
    fn ring_is_exact_chebyshev_distance() {
        let center = Coordinate::new(-4, 7);
        for here in center.coordinates_in_ring(3) {
            let delta = here - center;
            let chebyshev = delta.x().abs().max(delta.y().abs());
            assert_eq!(chebyshev, 3);
        }
    }

    #[test]
    fn radius_counts() {
        let center = Coordinate::new(1, 1);
        assert_eq!(center.coordinates_in_radius(0), vec![center]);
        assert_eq!(center.coordinates_in_radius(2).len(), 25);
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Coordinate::new(0, 0).distance_to(Coordinate::new(3, 5)), 8);
        assert_eq!(Coordinate::new(3, 5).distance_to(Coordinate::new(0, 0)), 8);
        assert_eq!(Coordinate::new(-2, 4).distance_to(Coordinate::new(-2, 4)), 0);
    }
}
