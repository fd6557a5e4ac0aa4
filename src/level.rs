pub mod graph;

use std::convert::TryFrom;
use std::fmt;

use crate::cell::*;
use crate::direction::Direction;
use crate::level::graph::Neighbours;
use crate::util::BoxworldError;

/// A level that is currently being played: the fixed grid topology plus the
/// mutable positions of the boxes and the player.
#[derive(Debug, Clone)]
pub struct Level {
    columns: usize,
    rows: usize,

    /// `columns * rows` cells in row-major order
    cells: Vec<Cell>,

    /// The neighbour indices of every cell, parallel to `cells`
    neighbours: Vec<Neighbours>,

    /// Indices of all target cells. Membership never changes after parsing,
    /// only whether a box currently covers them.
    target_cells: Vec<usize>,

    /// Index of the cell the player is standing on
    player: usize,
}


impl Level {
    /// Parse the ASCII representation of a level. History snapshots use the
    /// same format, so this is also how undo and restart rebuild the level.
    pub fn parse(string: &str) -> Result<Level, BoxworldError> {
        let lines: Vec<_> = string.lines().filter(|x| !x.is_empty()).collect();
        if lines.is_empty() {
            return Err(BoxworldError::EmptyLevel);
        }
        let columns = lines[0].len();
        let rows = lines.len();

        let mut cells = Vec::with_capacity(columns * rows);
        let mut neighbours = vec![Neighbours::default(); columns * rows];
        let mut target_cells = vec![];
        let mut player = None;

        for (i, line) in lines.iter().enumerate() {
            if line.len() != columns {
                return Err(BoxworldError::RaggedLines {
                               line: i + 1,
                               expected: columns,
                               found: line.len(),
                           });
            }

            for (j, chr) in line.chars().enumerate() {
                let cell =
                    Cell::try_from(chr).map_err(|symbol| {
                                                    BoxworldError::InvalidSymbol {
                                                        line: i + 1,
                                                        column: j + 1,
                                                        symbol,
                                                    }
                                                })?;
                let index = i * columns + j;
                cells.push(cell);

                // Wire the cell to the neighbours built before it; the
                // opposite slots of those neighbours are filled in at the
                // same time, keeping the graph symmetric.
                if i != 0 {
                    neighbours[index].set(Direction::Up, index - columns);
                    neighbours[index - columns].set(Direction::Down, index);
                }
                if j != 0 {
                    neighbours[index].set(Direction::Left, index - 1);
                    neighbours[index - 1].set(Direction::Right, index);
                }

                if cell.background == Background::Target {
                    target_cells.push(index);
                }
                if cell.foreground == Foreground::Player {
                    if player.is_some() {
                        return Err(BoxworldError::TwoPlayers);
                    }
                    player = Some(index);
                }
            }
        }

        match player {
            Some(player) => {
                Ok(Level {
                       columns,
                       rows,
                       cells,
                       neighbours,
                       target_cells,
                       player,
                   })
            }
            None => Err(BoxworldError::NoPlayer),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The index of the cell the player currently occupies.
    pub fn player_cell(&self) -> usize {
        self.player
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// One sprite per cell, row-major. All a renderer needs to know.
    pub fn sprites(&self) -> Vec<Sprite> {
        self.cells.iter().map(|cell| cell.sprite()).collect()
    }

    fn is_free(&self, index: usize) -> bool {
        self.cells[index].is_free()
    }

    /// Try to move the player one cell in the given direction, pushing a box
    /// out of the way if there is room for it. Return true if and only if the
    /// player actually moved. A blocked move leaves every cell untouched; it
    /// is neither an error nor worth logging.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        let from = self.player;
        let next = match self.neighbours[from].get(direction) {
            Some(index) => index,
            // Edge of the grid
            None => return false,
        };

        if self.cells[next].foreground == Foreground::Box {
            // The whole move stands or falls with the push.
            match self.neighbours[next].get(direction) {
                Some(after) if self.is_free(after) => {
                    self.cells[next].foreground = Foreground::None;
                    self.cells[after].foreground = Foreground::Box;
                }
                _ => return false,
            }
        }

        if !self.is_free(next) {
            // A void cell
            return false;
        }

        self.cells[from].foreground = Foreground::None;
        self.cells[next].foreground = Foreground::Player;
        self.player = next;
        true
    }

    /// Check whether the level is solved, i.e. every target cell is covered
    /// by a box. Never changes any state.
    pub fn is_won(&self) -> bool {
        self.target_cells
            .iter()
            .all(|&index| self.cells[index].foreground == Foreground::Box)
    }
}


impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.rows {
            if i != 0 {
                write!(f, "\n")?;
            }
            for j in 0..self.columns {
                write!(f, "{}", self.cells[i * self.columns + j].to_char())?;
            }
        }
        Ok(())
    }
}
