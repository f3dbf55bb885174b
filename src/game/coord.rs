/// Grid position, 0-indexed; x grows rightward, y grows downward.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Linear index of `coord` in a row-major grid of the given width.
pub fn to_index(coord: Coord, width: usize) -> usize {
    assert!(
        coord.x >= 0 && (coord.x as usize) < width && coord.y >= 0,
        "coordinate {coord:?} out of range for width {width}"
    );
    coord.y as usize * width + coord.x as usize
}

/// Inverse of `to_index` for indices within the grid.
pub fn from_index(index: usize, width: usize) -> Coord {
    let y = index / width;
    let x = index - y * width;
    Coord::new(x as i32, y as i32)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Axis direction of a displacement; `None` when diagonal or zero.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx.signum(), dy.signum()) {
            (0, -1) => Some(Direction::Up),
            (1, 0) => Some(Direction::Right),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for (width, height) in [(5usize, 5usize), (3, 3), (8, 2)] {
            for y in 0..height as i32 {
                for x in 0..width as i32 {
                    let c = Coord::new(x, y);
                    assert_eq!(from_index(to_index(c, width), width), c);
                }
            }
            for index in 0..width * height {
                assert_eq!(to_index(from_index(index, width), width), index);
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_rejects_out_of_range_x() {
        to_index(Coord::new(5, 0), 5);
    }

    #[test]
    fn deltas_map_to_directions() {
        assert_eq!(Direction::from_delta(0, -3), Some(Direction::Up));
        assert_eq!(Direction::from_delta(2, 0), Some(Direction::Right));
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(1, 1), None);
        for direction in [Direction::Up, Direction::Right, Direction::Down, Direction::Left] {
            let (dx, dy) = direction.delta();
            assert_eq!(Direction::from_delta(dx, dy), Some(direction));
        }
    }
}
