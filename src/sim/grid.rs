//! Grid geometry: movement directions and bounds checks

use glam::IVec2;

/// One of the four movement directions on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector for this direction. Y grows downward, matching canvas
    /// coordinates.
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    /// True if `other` is the exact opposite of this direction
    pub fn is_opposite(self, other: Direction) -> bool {
        self.delta() + other.delta() == IVec2::ZERO
    }

    /// Recover a direction from a raw delta. Zero and diagonal vectors
    /// yield `None`, so adapters cannot feed illegal vectors downstream.
    pub fn from_delta(delta: IVec2) -> Option<Direction> {
        match (delta.x, delta.y) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Whether a cell lies inside the `[0, width) x [0, height)` grid
#[inline]
pub fn in_bounds(cell: IVec2, width: i32, height: i32) -> bool {
    cell.x >= 0 && cell.x < width && cell.y >= 0 && cell.y < height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn test_from_delta_rejects_non_unit_vectors() {
        assert_eq!(Direction::from_delta(IVec2::new(0, -1)), Some(Direction::Up));
        assert_eq!(Direction::from_delta(IVec2::new(1, 0)), Some(Direction::Right));
        assert_eq!(Direction::from_delta(IVec2::ZERO), None);
        assert_eq!(Direction::from_delta(IVec2::new(1, 1)), None);
        assert_eq!(Direction::from_delta(IVec2::new(-2, 0)), None);
    }

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(IVec2::new(0, 0), 20, 15));
        assert!(in_bounds(IVec2::new(19, 14), 20, 15));
        assert!(!in_bounds(IVec2::new(-1, 7), 20, 15));
        assert!(!in_bounds(IVec2::new(20, 7), 20, 15));
        assert!(!in_bounds(IVec2::new(10, 15), 20, 15));
    }
}
