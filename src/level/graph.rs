use crate::direction::Direction;

/// The neighbour indices of one cell in the grid arena, one slot per
/// direction. `None` marks the edge of the grid. Wired up once while parsing
/// and never changed afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbours {
    up: Option<usize>,
    down: Option<usize>,
    left: Option<usize>,
    right: Option<usize>,
}

impl Neighbours {
    /// The index of the neighbouring cell in the given direction, if the grid
    /// does not end there.
    pub fn get(self, direction: Direction) -> Option<usize> {
        use self::Direction::*;
        match direction {
            Up => self.up,
            Down => self.down,
            Left => self.left,
            Right => self.right,
        }
    }

    pub(crate) fn set(&mut self, direction: Direction, index: usize) {
        use self::Direction::*;
        let slot = match direction {
            Up => &mut self.up,
            Down => &mut self.down,
            Left => &mut self.left,
            Right => &mut self.right,
        };
        *slot = Some(index);
    }
}
