/// Any of the four directions the player can be sent in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Return the opposite direction.
    pub fn reverse(self) -> Self {
        use self::Direction::*;
        match self {
            Left => Right,
            Right => Left,
            Up => Down,
            Down => Up,
        }
    }
}

/// All directions
pub const DIRECTIONS: [Direction; 4] = [Direction::Left,
                                        Direction::Right,
                                        Direction::Up,
                                        Direction::Down];
